use crate::Generation;
use thiserror::Error as ThisError;

///
/// ListError
///
/// Failure taxonomy for the container and its facades.
///
/// Every failure is reported synchronously to the immediate caller and is
/// never retried or swallowed. Validation happens before mutation, so a
/// failing call always leaves the container in its prior-valid state.
///
/// Each variant carries a static operation label (`op`) supplied at the
/// call site; there is no implicit caller introspection.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ListError {
    #[error("{op}: index {index} out of range for length {len}")]
    IndexOutOfRange {
        op: &'static str,
        index: usize,
        len: usize,
    },

    #[error("invalid capacity: {requested}")]
    InvalidCapacity { requested: i64 },

    #[error("{op}: value is not assignable to element type {expected}")]
    TypeMismatch {
        op: &'static str,
        expected: &'static str,
    },

    #[error(
        "container mutated during iteration (cursor captured generation {captured}, container at {current})"
    )]
    Invalidated {
        captured: Generation,
        current: Generation,
    },

    #[error("reentrant structural change not allowed during multi-observer notification")]
    ReentrantMutation,
}

impl ListError {
    /// Construct an out-of-range error for `op`.
    pub(crate) const fn index(op: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { op, index, len }
    }

    /// Construct a type-mismatch error for the loosely-typed boundary.
    pub(crate) const fn type_mismatch(op: &'static str, expected: &'static str) -> Self {
        Self::TypeMismatch { op, expected }
    }
}
