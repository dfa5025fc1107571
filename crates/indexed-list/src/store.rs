//! Backing block and capacity policy.
//!
//! The store owns one contiguous block and applies the geometric growth
//! rule; the container core layers index validation and the mutation token
//! on top. Reallocation copies only the live prefix `[0, len)` and never
//! touches the mutation token by itself.

/// Fixed baseline increment used by the growth rule and by `trim_excess`.
pub(crate) const BASELINE_CAPACITY: usize = 5;

/// Initial capacity when no hint is given.
pub(crate) const DEFAULT_CAPACITY: usize = 5;

///
/// Store
///
/// Contiguous element block with an explicitly tracked policy capacity.
///
/// `Vec` is the allocation vehicle; `capacity` is the policy capacity the
/// container reports. Invariant: `block.capacity() >= capacity` and
/// `block.len() <= capacity` at all times (the allocator may round an
/// allocation up, the policy capacity never rounds).
///

#[derive(Clone, Debug)]
pub(crate) struct Store<T> {
    block: Vec<T>,
    capacity: usize,
}

impl<T> Store<T> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Allocate an empty store sized to `max(hint, BASELINE_CAPACITY)`.
    pub(crate) fn with_capacity(hint: usize) -> Self {
        let capacity = hint.max(BASELINE_CAPACITY);

        Self {
            block: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Take ownership of a seed block, sizing capacity to
    /// `max(seed.len(), BASELINE_CAPACITY)`.
    pub(crate) fn from_vec(mut seed: Vec<T>) -> Self {
        let capacity = seed.len().max(BASELINE_CAPACITY);
        seed.reserve_exact(capacity - seed.len());

        Self {
            block: seed,
            capacity,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.block.len()
    }

    pub(crate) const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Unused slots remaining before the next reallocation.
    pub(crate) const fn free(&self) -> usize {
        self.capacity - self.block.len()
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.block
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.block
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.block
    }

    /// Guarantee at least `need` free slots, reallocating only if required.
    ///
    /// Growth rule: `floor(capacity * 3 / 2)`; if that still falls short of
    /// `len + need`, grow to `len + need + BASELINE_CAPACITY` instead.
    pub(crate) fn ensure(&mut self, need: usize) {
        let len = self.block.len();
        if self.capacity - len >= need {
            return;
        }

        let mut grown = self.capacity + self.capacity / 2;
        if grown < len + need {
            grown = len + need + BASELINE_CAPACITY;
        }

        self.block.reserve_exact(grown - len);
        self.capacity = grown;
    }

    /// Shrink capacity to `len + BASELINE_CAPACITY` when free slots exceed
    /// the baseline increment. No-op otherwise.
    pub(crate) fn trim_excess(&mut self) {
        if self.free() <= BASELINE_CAPACITY {
            return;
        }

        let target = self.block.len() + BASELINE_CAPACITY;
        self.block.shrink_to(target);
        self.capacity = target;
    }

    pub(crate) fn push(&mut self, value: T) {
        self.ensure(1);
        self.block.push(value);
    }

    /// Shift `[index, len)` right by one and place `value` at `index`.
    /// Index must already be validated by the caller.
    pub(crate) fn insert(&mut self, index: usize, value: T) {
        self.ensure(1);
        self.block.insert(index, value);
    }

    /// Shift `[index, len)` right by `items.len()` and place `items` at
    /// `[index, index + items.len())`. Index must already be validated.
    pub(crate) fn insert_many(&mut self, index: usize, items: Vec<T>) {
        self.ensure(items.len());
        self.block.splice(index..index, items);
    }

    /// Shift `[index + 1, len)` left by one and return the removed element.
    /// The vacated trailing slot holds no stale element afterwards.
    pub(crate) fn remove_at(&mut self, index: usize) -> T {
        self.block.remove(index)
    }

    /// Drop all live elements; capacity is retained.
    pub(crate) fn clear(&mut self) {
        self.block.clear();
    }
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

///
/// TESTS
///
