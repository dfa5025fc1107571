//! Coarse-grained thread-synchronized facade.
//!
//! Every public operation takes the per-instance lock for the duration of
//! that single call and delegates to the inner [`IndexedList`]. Individual
//! operations are atomic across threads; multi-call sequences are not
//! (compose them through [`with`](SyncIndexedList::with) /
//! [`with_mut`](SyncIndexedList::with_mut) instead of check-then-act over
//! separate calls).
//!
//! Iteration is deliberately unprotected beyond the token check: `cursor`
//! holds the lock only to construct the cursor, so a mutation from another
//! thread between `advance` calls surfaces as the cursor's normal
//! [`ListError::Invalidated`] failure.

use crate::{Cursor, IndexedList, error::ListError};
use parking_lot::Mutex;

///
/// SyncIndexedList
///

#[derive(Debug)]
pub struct SyncIndexedList<T> {
    inner: Mutex<IndexedList<T>>,
}

impl<T> Default for SyncIndexedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SyncIndexedList<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(IndexedList::new()),
        }
    }

    #[must_use]
    pub fn with_capacity(hint: usize) -> Self {
        Self {
            inner: Mutex::new(IndexedList::with_capacity(hint)),
        }
    }

    #[must_use]
    pub fn from_vec(seed: Vec<T>) -> Self {
        Self {
            inner: Mutex::new(IndexedList::from_vec(seed)),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn free(&self) -> usize {
        self.inner.lock().free()
    }

    pub fn push(&self, value: T) {
        self.inner.lock().push(value);
    }

    pub fn insert(&self, index: usize, value: T) -> Result<(), ListError> {
        self.inner.lock().insert(index, value)
    }

    pub fn insert_many(
        &self,
        index: usize,
        items: impl IntoIterator<Item = T>,
    ) -> Result<(), ListError> {
        self.inner.lock().insert_many(index, items)
    }

    pub fn set(&self, index: usize, value: T) -> Result<(), ListError> {
        self.inner.lock().set(index, value)
    }

    pub fn remove_at(&self, index: usize) -> Result<T, ListError> {
        self.inner.lock().remove_at(index)
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn trim_excess(&self) {
        self.inner.lock().trim_excess();
    }

    /// Construct a cursor pinned to the current mutation token. The lock
    /// is held only for the construction itself.
    pub fn cursor(&self) -> Cursor {
        self.inner.lock().cursor()
    }

    /// Re-validate and rewind a cursor under the lock.
    pub fn reset_cursor(&self, cursor: &mut Cursor) -> Result<(), ListError> {
        cursor.reset(&self.inner.lock())
    }

    /// Run `f` against the container under one lock acquisition.
    pub fn with<R>(&self, f: impl FnOnce(&IndexedList<T>) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Run `f` against the container mutably under one lock acquisition.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut IndexedList<T>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Consume the facade, returning the inner container.
    #[must_use]
    pub fn into_inner(self) -> IndexedList<T> {
        self.inner.into_inner()
    }
}

impl<T: Clone> SyncIndexedList<T> {
    /// Clone of the element at `index`, if it exists. Elements cross the
    /// lock boundary by value.
    pub fn get(&self, index: usize) -> Option<T> {
        self.inner.lock().get(index).cloned()
    }

    /// Advance a cursor under the lock, yielding a clone of the element.
    pub fn advance(&self, cursor: &mut Cursor) -> Result<Option<T>, ListError> {
        let guard = self.inner.lock();

        cursor.advance(&guard).map(|item| item.cloned())
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.inner.lock().to_vec()
    }
}

impl<T: PartialEq> SyncIndexedList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.inner.lock().contains(value)
    }

    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.inner.lock().index_of(value)
    }

    pub fn remove(&self, value: &T) -> bool {
        self.inner.lock().remove(value)
    }
}

impl<T> From<Vec<T>> for SyncIndexedList<T> {
    fn from(seed: Vec<T>) -> Self {
        Self::from_vec(seed)
    }
}

///
/// TESTS
///
