//! # Dispatchable event payloads.
//!
//! Any `'static` type with value equality and a deterministic textual rendering
//! can be an [`Event`]. The payload is handed to handlers as `&mut E`, so handlers
//! may rewrite fields in place; the caller owns the event and reads the result
//! after [`Registry::call`](crate::Registry::call) returns.
//!
//! [`Cancellable`] is an optional capability. The registry never inspects it:
//! handlers check [`Cancellable::cancelled`] themselves and skip work.
//!
//! ## Example
//! ```rust
//! use std::fmt;
//! use tinyevents::{Cancellable, Event, EventKind};
//!
//! #[derive(Debug, PartialEq)]
//! struct Greeting {
//!     text: String,
//!     cancelled: bool,
//! }
//!
//! impl fmt::Display for Greeting {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "Greeting[text='{}', cancelled='{}']", self.text, self.cancelled)
//!     }
//! }
//!
//! impl Event for Greeting {}
//!
//! impl Cancellable for Greeting {
//!     fn cancelled(&self) -> bool { self.cancelled }
//!     fn set_cancelled(&mut self, state: bool) { self.cancelled = state; }
//! }
//!
//! let mut ev = Greeting { text: "hi".into(), cancelled: false };
//! assert_eq!(ev.kind(), EventKind::of::<Greeting>());
//!
//! ev.cancel();
//! assert!(ev.cancelled());
//! ev.cancel();
//! assert!(!ev.cancelled());
//! assert_eq!(ev.to_string(), "Greeting[text='hi', cancelled='false']");
//! ```

use std::any::Any;
use std::fmt;

use crate::events::EventKind;

/// Marker trait for payloads that can be dispatched through a [`Registry`](crate::Registry).
///
/// Implementors provide:
/// - **value equality** (`PartialEq`) comparing the payload fields;
/// - **a deterministic rendering** (`Display`) used in diagnostics.
pub trait Event: Any + PartialEq + fmt::Display {
    /// Returns the [`EventKind`] of this payload.
    #[inline]
    fn kind(&self) -> EventKind
    where
        Self: Sized,
    {
        EventKind::of::<Self>()
    }
}

/// Cooperative cancellation flag carried by an event.
///
/// Nothing in the registry enforces it. A handler that wants to honor it
/// returns early when [`cancelled`](Cancellable::cancelled) is `true`.
pub trait Cancellable {
    /// Returns the current cancel state.
    fn cancelled(&self) -> bool;

    /// Sets the cancel state explicitly.
    fn set_cancelled(&mut self, state: bool);

    /// Switches the cancel state to the opposite.
    fn cancel(&mut self) {
        let next = !self.cancelled();
        self.set_cancelled(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Flagged {
        cancelled: bool,
    }

    impl fmt::Display for Flagged {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Flagged[cancelled='{}']", self.cancelled)
        }
    }

    impl Event for Flagged {}

    impl Cancellable for Flagged {
        fn cancelled(&self) -> bool {
            self.cancelled
        }

        fn set_cancelled(&mut self, state: bool) {
            self.cancelled = state;
        }
    }

    #[test]
    fn test_cancel_toggles() {
        let mut ev = Flagged { cancelled: false };
        ev.cancel();
        assert!(ev.cancelled());
        ev.cancel();
        assert!(!ev.cancelled());
    }

    #[test]
    fn test_set_cancelled_is_explicit() {
        let mut ev = Flagged { cancelled: false };
        ev.set_cancelled(true);
        ev.set_cancelled(true);
        assert!(ev.cancelled());
        assert_eq!(ev.to_string(), "Flagged[cancelled='true']");
    }

    #[test]
    fn test_kind_matches_static_type() {
        let ev = Flagged { cancelled: false };
        assert_eq!(ev.kind(), EventKind::of::<Flagged>());
        assert_eq!(ev, Flagged { cancelled: false });
    }
}
