//! Versioned cursor over an [`IndexedList`].
//!
//! A cursor is a detached handle: it holds the mutation token captured at
//! creation plus a position, never a reference to the container. Every
//! call takes the container, and the cursor must always be used with the
//! container that created it; that discipline is the caller's
//! responsibility (the token check makes cross-container use fail fast,
//! but it is not a guarantee).
//!
//! The container failing fast is the contract here: once a structural
//! mutation lands, the cursor is invalidated permanently and only a fresh
//! [`IndexedList::cursor`] restarts iteration.

use crate::{Generation, IndexedList, error::ListError};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CursorState {
    Created,
    Advancing,
    Exhausted,
    Invalidated,
}

///
/// Cursor
///
/// Position-tracking read view. States:
/// `Created -> Advancing -> { Exhausted | Invalidated }`; `Exhausted` is
/// re-entered freely and [`reset`](Self::reset) rewinds while the captured
/// token still matches; `Invalidated` is terminal.
///

#[derive(Clone, Debug)]
pub struct Cursor {
    captured: Generation,
    position: usize,
    state: CursorState,
}

impl Cursor {
    pub(crate) const fn new(captured: Generation) -> Self {
        Self {
            captured,
            position: 0,
            state: CursorState::Created,
        }
    }

    /// Yield the next element, or `Ok(None)` once the sequence is
    /// exhausted (end-of-sequence is a normal outcome, not an error).
    ///
    /// Fails with [`ListError::Invalidated`] if the container has seen a
    /// structural mutation since this cursor was created; the failure is
    /// permanent for this cursor.
    pub fn advance<'a, T>(&mut self, list: &'a IndexedList<T>) -> Result<Option<&'a T>, ListError> {
        self.check_token(list)?;

        if self.position < list.len() {
            let item = &list.as_slice()[self.position];
            self.position += 1;
            self.state = CursorState::Advancing;

            Ok(Some(item))
        } else {
            self.state = CursorState::Exhausted;

            Ok(None)
        }
    }

    /// Rewind to the first element.
    ///
    /// Re-validates the captured token and fails the same way `advance`
    /// does if the container has structurally changed.
    pub fn reset<T>(&mut self, list: &IndexedList<T>) -> Result<(), ListError> {
        self.check_token(list)?;

        self.position = 0;
        self.state = CursorState::Created;

        Ok(())
    }

    /// Returns `true` once the cursor has been permanently invalidated.
    #[must_use]
    pub fn is_invalidated(&self) -> bool {
        self.state == CursorState::Invalidated
    }

    /// Returns `true` if the last `advance` reached the end.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.state == CursorState::Exhausted
    }

    fn check_token<T>(&mut self, list: &IndexedList<T>) -> Result<(), ListError> {
        if self.state == CursorState::Invalidated {
            return Err(ListError::Invalidated {
                captured: self.captured,
                current: list.generation(),
            });
        }

        if self.captured != list.generation() {
            self.state = CursorState::Invalidated;
            self.position = list.len() + 1;

            return Err(ListError::Invalidated {
                captured: self.captured,
                current: list.generation(),
            });
        }

        Ok(())
    }
}

///
/// TESTS
///
