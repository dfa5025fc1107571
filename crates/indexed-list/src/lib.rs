//! Growable contiguous sequence container with versioned iteration and
//! two facades: coarse thread synchronization and change notification.
//!
//! [`IndexedList`] is the core: index-validated CRUD over one contiguous
//! block, amortized-O(1) append via geometric growth (1.5x plus a fixed
//! baseline), and a monotonic mutation token. [`Cursor`] is a detached,
//! revocable read view pinned to that token — any structural mutation
//! invalidates it permanently (fail fast, no healing). Value-level
//! overwrites (`set`) do not.
//!
//! [`SyncIndexedList`] serializes individual calls across threads behind
//! one mutex. [`ObservedList`] raises count-change and structural-change
//! notifications to ordered observer lists and guards against reentrant
//! structural mutation from inside a multi-observer notification.
//!
//! ```
//! use indexed_list::IndexedList;
//!
//! let mut list = IndexedList::new();
//! list.push(1);
//! list.push(2);
//!
//! let mut cursor = list.cursor();
//! assert_eq!(cursor.advance(&list).unwrap(), Some(&1));
//!
//! list.push(3); // structural: the cursor is now stale
//! assert!(cursor.advance(&list).is_err());
//! ```

pub mod cursor;
pub mod dynamic;
pub mod error;
pub mod list;
pub mod observe;
pub mod sync;

mod store;

pub use cursor::Cursor;
pub use error::ListError;
pub use list::{Generation, IndexedList};
pub use observe::{COUNT_PROPERTY, ListEvent, ObservedList, ObserverId};
pub use sync::SyncIndexedList;
