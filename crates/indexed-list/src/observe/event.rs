//! Event types and the ordered observer registry.
//!
//! Observers are an explicit, ordered callback list (registration order is
//! dispatch order), not a multicast primitive. Dispatch works against a
//! snapshot of the list, so a handler may subscribe or unsubscribe while a
//! notification is in flight.

use std::{cell::RefCell, rc::Rc};

/// Property name delivered on the count-change stream.
pub const COUNT_PROPERTY: &str = "Count";

///
/// ListEvent
///
/// Structural-change notification. Bulk insertion and `clear` collapse
/// into `Reset` rather than a granular range event.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ListEvent<T> {
    Added { item: T, index: usize },
    Removed { item: T, index: usize },
    Reset,
}

///
/// ObserverId
///
/// Subscription handle; pass it back to unsubscribe. Ids are unique per
/// facade instance across both streams.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ObserverId(u64);

pub(crate) type StructuralObserver<T> = Rc<dyn Fn(&ListEvent<T>)>;
pub(crate) type CountObserver = Rc<dyn Fn(&str)>;

///
/// ObserverRegistry
///

pub(crate) struct ObserverRegistry<T> {
    structural: RefCell<Vec<(ObserverId, StructuralObserver<T>)>>,
    count: RefCell<Vec<(ObserverId, CountObserver)>>,
    next_id: std::cell::Cell<u64>,
}

impl<T> ObserverRegistry<T> {
    pub(crate) fn new() -> Self {
        Self {
            structural: RefCell::new(Vec::new()),
            count: RefCell::new(Vec::new()),
            next_id: std::cell::Cell::new(0),
        }
    }

    pub(crate) fn subscribe(&self, observer: impl Fn(&ListEvent<T>) + 'static) -> ObserverId {
        let id = self.allocate_id();
        self.structural.borrow_mut().push((id, Rc::new(observer)));

        id
    }

    pub(crate) fn unsubscribe(&self, id: ObserverId) -> bool {
        Self::detach(&self.structural, id)
    }

    pub(crate) fn subscribe_count(&self, observer: impl Fn(&str) + 'static) -> ObserverId {
        let id = self.allocate_id();
        self.count.borrow_mut().push((id, Rc::new(observer)));

        id
    }

    pub(crate) fn unsubscribe_count(&self, id: ObserverId) -> bool {
        Self::detach(&self.count, id)
    }

    /// Number of currently registered structural observers; input to the
    /// reentrancy check.
    pub(crate) fn structural_len(&self) -> usize {
        self.structural.borrow().len()
    }

    pub(crate) fn snapshot_structural(&self) -> Vec<StructuralObserver<T>> {
        self.structural
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect()
    }

    pub(crate) fn snapshot_count(&self) -> Vec<CountObserver> {
        self.count
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect()
    }

    fn allocate_id(&self) -> ObserverId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        ObserverId(id)
    }

    fn detach<O>(list: &RefCell<Vec<(ObserverId, O)>>, id: ObserverId) -> bool {
        let mut list = list.borrow_mut();
        let before = list.len();
        list.retain(|(candidate, _)| *candidate != id);

        list.len() != before
    }
}
