//! Index-validated container core.
//!
//! Every mutating operation validates its arguments before touching any
//! state, stamps structural changes with the mutation token, and preserves
//! contiguous element placement in `[0, len)`.

use crate::{
    cursor::Cursor,
    error::ListError,
    store::{DEFAULT_CAPACITY, Store},
};
use derive_more::Display;

#[cfg(test)]
mod tests;

///
/// Generation
///
/// Monotonic mutation token. Starts at a non-zero sentinel and is bumped
/// exactly once per structural mutation (push, insert, insert_many,
/// remove, remove_at, clear). Value-level overwrites of an existing slot
/// (`set`, `get_mut`) do not bump it; in-flight cursors survive them.
///

#[derive(Clone, Copy, Debug, Display, Eq, Ord, PartialEq, PartialOrd)]
pub struct Generation(u64);

impl Generation {
    pub(crate) const INITIAL: Self = Self(1);

    pub(crate) const fn bump(&mut self) {
        self.0 += 1;
    }
}

///
/// IndexedList
///
/// Growable contiguous sequence with amortized-O(1) append and versioned
/// iteration via [`Cursor`].
///
/// Equality compares live elements only; the mutation token is excluded,
/// so a rebuilt list with the same content compares equal.
///

#[derive(Clone, Debug)]
pub struct IndexedList<T> {
    store: Store<T>,
    generation: Generation,
}

impl<T> IndexedList<T> {
    /// Create an empty list with the default initial capacity (5).
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty list sized to `max(hint, 5)`.
    #[must_use]
    pub fn with_capacity(hint: usize) -> Self {
        Self {
            store: Store::with_capacity(hint),
            generation: Generation::INITIAL,
        }
    }

    /// Build a list from a seed vector, sizing capacity to
    /// `max(seed.len(), 5)`.
    #[must_use]
    pub fn from_vec(seed: Vec<T>) -> Self {
        Self {
            store: Store::from_vec(seed),
            generation: Generation::INITIAL,
        }
    }

    /// Number of live elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the list holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    /// Allocated capacity; always `>= len()`, grows geometrically and only
    /// shrinks via [`trim_excess`](Self::trim_excess).
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Free slots remaining before the next reallocation.
    #[must_use]
    pub const fn free(&self) -> usize {
        self.store.free()
    }

    /// Current mutation token.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Live elements as a contiguous slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.store.as_slice()
    }

    /// Return the element at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.store.as_slice().get(index)
    }

    /// Return a mutable reference to the element at `index`, if it exists.
    ///
    /// Value-level access: mutating through it does not bump the token.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.store.as_mut_slice().get_mut(index)
    }

    /// Overwrite the element at `index` in place, dropping the old value.
    ///
    /// Does not change the length and does not bump the mutation token;
    /// in-flight cursors remain valid across a `set`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ListError> {
        self.check_occupied("set", index)?;
        self.store.as_mut_slice()[index] = value;

        Ok(())
    }

    /// Append an element. Amortized O(1).
    pub fn push(&mut self, value: T) {
        self.store.push(value);
        self.generation.bump();
    }

    /// Insert an element at `index`, shifting `[index, len)` right by one.
    /// `index == len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        self.check_position("insert", index)?;
        self.store.insert(index, value);
        self.generation.bump();

        Ok(())
    }

    /// Insert a run of elements at `index`, shifting `[index, len)` right
    /// by the run length.
    ///
    /// An empty run still validates `index` but performs no mutation and
    /// does not bump the token.
    pub fn insert_many(
        &mut self,
        index: usize,
        items: impl IntoIterator<Item = T>,
    ) -> Result<(), ListError> {
        self.check_position("insert_many", index)?;

        let items: Vec<T> = items.into_iter().collect();
        if items.is_empty() {
            return Ok(());
        }

        self.store.insert_many(index, items);
        self.generation.bump();

        Ok(())
    }

    /// Remove and return the element at `index`, shifting `[index + 1, len)`
    /// left by one. Fails for `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        self.check_occupied("remove_at", index)?;

        let removed = self.store.remove_at(index);
        self.generation.bump();

        Ok(removed)
    }

    /// Drop all live elements. Capacity is retained; a no-op on an empty
    /// list (and does not bump the token).
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }

        self.store.clear();
        self.generation.bump();
    }

    /// Give back free slots beyond the baseline margin.
    pub fn trim_excess(&mut self) {
        self.store.trim_excess();
    }

    /// First element matching the predicate, scanning in index order.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.store.as_slice().iter().find(|item| predicate(item))
    }

    /// Apply `action` to every element in index order.
    pub fn for_each<A>(&self, action: A)
    where
        A: FnMut(&T),
    {
        self.store.as_slice().iter().for_each(action);
    }

    /// Iterate over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.store.as_slice().iter()
    }

    /// Create a versioned cursor pinned to the current mutation token.
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        Cursor::new(self.generation)
    }

    // Valid positions for reads/removals: [0, len).
    fn check_occupied(&self, op: &'static str, index: usize) -> Result<(), ListError> {
        if index >= self.len() {
            return Err(ListError::index(op, index, self.len()));
        }

        Ok(())
    }

    // Valid positions for insertion: [0, len]; len appends.
    fn check_position(&self, op: &'static str, index: usize) -> Result<(), ListError> {
        if index > self.len() {
            return Err(ListError::index(op, index, self.len()));
        }

        Ok(())
    }
}

impl<T: PartialEq> IndexedList<T> {
    /// Returns `true` if the list contains `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Index of the first element equal to `value`.
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.store.as_slice().iter().position(|item| item == value)
    }

    /// Remove the first element equal to `value`, returning whether a
    /// match was found.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}

impl<T: Clone> IndexedList<T> {
    /// All elements matching the predicate, as an independent new sequence
    /// in construction order.
    pub fn find_all<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.store
            .as_slice()
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// An independent copy of `[index, index + count)`; never a view.
    /// Mutating the result does not affect this list.
    pub fn get_range(&self, index: usize, count: usize) -> Result<Vec<T>, ListError> {
        self.check_position("get_range", index)?;
        if count > self.len() - index {
            return Err(ListError::index("get_range", index + count, self.len()));
        }

        Ok(self.store.as_slice()[index..index + count].to_vec())
    }

    /// Clone all live elements into `dest` starting at `offset`.
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<(), ListError> {
        if offset > dest.len() || dest.len() - offset < self.len() {
            return Err(ListError::index("copy_to", offset + self.len(), dest.len()));
        }

        dest[offset..offset + self.len()].clone_from_slice(self.store.as_slice());

        Ok(())
    }

    /// Clone the live elements into a fresh vector. An empty list returns
    /// an empty vector without allocating.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        if self.is_empty() {
            return Vec::new();
        }

        self.store.as_slice().to_vec()
    }
}

impl<T> Default for IndexedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for IndexedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for IndexedList<T> {}

impl<T> From<Vec<T>> for IndexedList<T> {
    fn from(seed: Vec<T>) -> Self {
        Self::from_vec(seed)
    }
}

impl<T> From<IndexedList<T>> for Vec<T> {
    fn from(list: IndexedList<T>) -> Self {
        list.store.into_vec()
    }
}

impl<'a, T> IntoIterator for &'a IndexedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for IndexedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.into_vec().into_iter()
    }
}
