//! Loosely-typed access boundary.
//!
//! Legacy untyped collection surfaces reach the typed core through this
//! adapter: one explicit runtime type check at the boundary, then the
//! ordinary typed path. Dynamic typing is never threaded through the core.

use crate::{IndexedList, error::ListError};
use std::any::{Any, type_name};

///
/// DynAccess
///
/// Operations accepting a value whose type is only known at runtime. A
/// value whose runtime type is not the element type fails with
/// [`ListError::TypeMismatch`] before the container is touched.
///

pub trait DynAccess {
    fn push_any(&mut self, value: Box<dyn Any>) -> Result<(), ListError>;

    fn insert_any(&mut self, index: usize, value: Box<dyn Any>) -> Result<(), ListError>;

    fn contains_any(&self, value: &dyn Any) -> Result<bool, ListError>;

    fn index_of_any(&self, value: &dyn Any) -> Result<Option<usize>, ListError>;

    fn remove_any(&mut self, value: &dyn Any) -> Result<bool, ListError>;
}

impl<T: PartialEq + 'static> DynAccess for IndexedList<T> {
    fn push_any(&mut self, value: Box<dyn Any>) -> Result<(), ListError> {
        let value = downcast::<T>("push_any", value)?;
        self.push(*value);

        Ok(())
    }

    fn insert_any(&mut self, index: usize, value: Box<dyn Any>) -> Result<(), ListError> {
        let value = downcast::<T>("insert_any", value)?;

        self.insert(index, *value)
    }

    fn contains_any(&self, value: &dyn Any) -> Result<bool, ListError> {
        let value = downcast_ref::<T>("contains_any", value)?;

        Ok(self.contains(value))
    }

    fn index_of_any(&self, value: &dyn Any) -> Result<Option<usize>, ListError> {
        let value = downcast_ref::<T>("index_of_any", value)?;

        Ok(self.index_of(value))
    }

    fn remove_any(&mut self, value: &dyn Any) -> Result<bool, ListError> {
        let value = downcast_ref::<T>("remove_any", value)?;

        Ok(self.remove(value))
    }
}

/// Construct a list from a signed capacity hint, the one place a negative
/// capacity is representable.
pub fn with_signed_capacity<T>(capacity: i64) -> Result<IndexedList<T>, ListError> {
    let Ok(capacity) = usize::try_from(capacity) else {
        return Err(ListError::InvalidCapacity {
            requested: capacity,
        });
    };

    Ok(IndexedList::with_capacity(capacity))
}

fn downcast<T: 'static>(op: &'static str, value: Box<dyn Any>) -> Result<Box<T>, ListError> {
    value
        .downcast::<T>()
        .map_err(|_| ListError::type_mismatch(op, type_name::<T>()))
}

fn downcast_ref<'a, T: 'static>(
    op: &'static str,
    value: &'a dyn Any,
) -> Result<&'a T, ListError> {
    value
        .downcast_ref::<T>()
        .ok_or_else(|| ListError::type_mismatch(op, type_name::<T>()))
}

///
/// TESTS
///
