//! Slot index.
//!
//! [`IndexMap`] is a small chained hash map from an opaque key to an `i32` value.
//! The registry uses it to remember where each handler sits inside its kind's
//! ordered sequence, keyed by [`SlotKey`].

mod index_map;

pub use index_map::IndexMap;

use crate::events::EventKind;
use crate::handlers::HandlerId;

/// Index key: a handler identity scoped to one event kind.
///
/// The same handler instance may be registered under several kinds; each
/// registration gets its own slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotKey {
    /// Event kind of the sequence the handler lives in.
    pub kind: EventKind,
    /// Handler identity.
    pub handler: HandlerId,
}

impl SlotKey {
    /// Creates a new key.
    #[inline]
    pub fn new(kind: EventKind, handler: HandlerId) -> Self {
        Self { kind, handler }
    }
}
