//! Change-notifying facade.
//!
//! Wraps an [`IndexedList`] and, after every structural mutation, raises
//! in order: one count-change notification (the `"Count"` property name)
//! and one structural notification describing the action. The facade
//! assumes single-threaded callers; what it guards against is *logical*
//! reentrancy — a handler mutating the list while a notification is in
//! flight — via a busy counter, not a lock.
//!
//! The guard is deliberately a heuristic: with more than one structural
//! observer registered, a reentrant structural mutation fails with
//! [`ListError::ReentrantMutation`]; a single observer is permitted to
//! reenter.

mod event;


pub use event::{COUNT_PROPERTY, ListEvent, ObserverId};

use crate::{Cursor, IndexedList, error::ListError};
use event::ObserverRegistry;
use std::cell::{Cell, RefCell};

///
/// ObservedList
///
/// Elements are `Clone` because notifications carry the affected item by
/// value while the container keeps its own copy.
///

pub struct ObservedList<T> {
    inner: RefCell<IndexedList<T>>,
    registry: ObserverRegistry<T>,
    busy: Cell<u32>,
}

// Busy-counter scope: incremented on entering the notification region,
// decremented on every exit path including unwinds.
struct BusyScope<'a> {
    busy: &'a Cell<u32>,
}

impl<'a> BusyScope<'a> {
    fn enter(busy: &'a Cell<u32>) -> Self {
        busy.set(busy.get() + 1);

        Self { busy }
    }
}

impl Drop for BusyScope<'_> {
    fn drop(&mut self) {
        self.busy.set(self.busy.get() - 1);
    }
}

impl<T: Clone> ObservedList<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::wrap(IndexedList::new())
    }

    #[must_use]
    pub fn with_capacity(hint: usize) -> Self {
        Self::wrap(IndexedList::with_capacity(hint))
    }

    #[must_use]
    pub fn from_vec(seed: Vec<T>) -> Self {
        Self::wrap(IndexedList::from_vec(seed))
    }

    fn wrap(inner: IndexedList<T>) -> Self {
        Self {
            inner: RefCell::new(inner),
            registry: ObserverRegistry::new(),
            busy: Cell::new(0),
        }
    }

    // ------------------------------------------------------------------
    // Subscription
    // ------------------------------------------------------------------

    /// Subscribe to the structural-change stream. Dispatch order is
    /// registration order.
    pub fn subscribe(&self, observer: impl Fn(&ListEvent<T>) + 'static) -> ObserverId {
        self.registry.subscribe(observer)
    }

    /// Remove a structural observer; returns whether it was registered.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.registry.unsubscribe(id)
    }

    /// Subscribe to the count-change stream; observers receive the
    /// property name [`COUNT_PROPERTY`].
    pub fn subscribe_count(&self, observer: impl Fn(&str) + 'static) -> ObserverId {
        self.registry.subscribe_count(observer)
    }

    /// Remove a count observer; returns whether it was registered.
    pub fn unsubscribe_count(&self, id: ObserverId) -> bool {
        self.registry.unsubscribe_count(id)
    }

    // ------------------------------------------------------------------
    // Structural mutations (check, delegate, notify)
    // ------------------------------------------------------------------

    pub fn push(&self, value: T) -> Result<(), ListError> {
        self.check_reentrancy()?;

        let index = {
            let mut inner = self.inner.borrow_mut();
            inner.push(value.clone());
            inner.len() - 1
        };
        self.notify(&ListEvent::Added { item: value, index });

        Ok(())
    }

    pub fn insert(&self, index: usize, value: T) -> Result<(), ListError> {
        self.check_reentrancy()?;
        self.inner.borrow_mut().insert(index, value.clone())?;
        self.notify(&ListEvent::Added { item: value, index });

        Ok(())
    }

    /// Bulk insertion emits a single `Reset` notification rather than a
    /// granular range event. An empty run validates `index` only and
    /// raises nothing.
    pub fn insert_many(
        &self,
        index: usize,
        items: impl IntoIterator<Item = T>,
    ) -> Result<(), ListError> {
        self.check_reentrancy()?;

        let items: Vec<T> = items.into_iter().collect();
        let empty = items.is_empty();
        self.inner.borrow_mut().insert_many(index, items)?;

        if !empty {
            self.notify(&ListEvent::Reset);
        }

        Ok(())
    }

    pub fn remove_at(&self, index: usize) -> Result<T, ListError> {
        self.check_reentrancy()?;

        let removed = self.inner.borrow_mut().remove_at(index)?;
        self.notify(&ListEvent::Removed {
            item: removed.clone(),
            index,
        });

        Ok(removed)
    }

    /// Drop all elements and emit `Reset`. A no-op on an empty list: the
    /// length did not change, so nothing is raised.
    pub fn clear(&self) -> Result<(), ListError> {
        self.check_reentrancy()?;

        {
            let mut inner = self.inner.borrow_mut();
            if inner.is_empty() {
                return Ok(());
            }
            inner.clear();
        }
        self.notify(&ListEvent::Reset);

        Ok(())
    }

    // ------------------------------------------------------------------
    // Value-level and read surface (no events)
    // ------------------------------------------------------------------

    /// Overwrite in place. Value-level: no token bump, no count change,
    /// no structural event — and therefore no reentrancy restriction.
    pub fn set(&self, index: usize, value: T) -> Result<(), ListError> {
        self.inner.borrow_mut().set(index, value)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.borrow().capacity()
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.inner.borrow().get(index).cloned()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.inner.borrow().to_vec()
    }

    /// Construct a cursor pinned to the current mutation token. A handler
    /// mutating the list invalidates it like any other structural change.
    pub fn cursor(&self) -> Cursor {
        self.inner.borrow().cursor()
    }

    /// Advance a cursor, yielding a clone of the element.
    pub fn advance(&self, cursor: &mut Cursor) -> Result<Option<T>, ListError> {
        let inner = self.inner.borrow();

        cursor.advance(&inner).map(|item| item.cloned())
    }

    // ------------------------------------------------------------------
    // Guard + dispatch
    // ------------------------------------------------------------------

    fn check_reentrancy(&self) -> Result<(), ListError> {
        if self.busy.get() > 0 && self.registry.structural_len() > 1 {
            return Err(ListError::ReentrantMutation);
        }

        Ok(())
    }

    fn notify(&self, event: &ListEvent<T>) {
        let _scope = BusyScope::enter(&self.busy);

        // Count first, then the structural action. Every event raised here
        // accompanies a length change.
        for observer in self.registry.snapshot_count() {
            observer(COUNT_PROPERTY);
        }
        for observer in self.registry.snapshot_structural() {
            observer(event);
        }
    }
}

impl<T: Clone + PartialEq> ObservedList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.inner.borrow().contains(value)
    }

    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.inner.borrow().index_of(value)
    }

    /// Remove the first element equal to `value`; emits `Removed` if a
    /// match was found.
    pub fn remove(&self, value: &T) -> Result<bool, ListError> {
        self.check_reentrancy()?;

        let found = {
            let mut inner = self.inner.borrow_mut();
            match inner.index_of(value) {
                Some(index) => inner.remove_at(index).ok().map(|item| (item, index)),
                None => None,
            }
        };

        match found {
            Some((item, index)) => {
                self.notify(&ListEvent::Removed { item, index });

                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl<T: Clone> Default for ObservedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> From<Vec<T>> for ObservedList<T> {
    fn from(seed: Vec<T>) -> Self {
        Self::from_vec(seed)
    }
}
