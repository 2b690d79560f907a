//! # Collector: record failures in memory
//!
//! Keeps a copy of every [`EventsError`] it receives, in arrival order.
//!
//! ## Why?
//! The registry never returns errors. Installing a `Collector` is the simplest
//! way for a caller (or a test) to check what went wrong after the fact.
//!
//! ## Example
//! ```rust
//! use std::rc::Rc;
//! use tinyevents::{Collector, Registry, RegistryConfig};
//!
//! let errors = Rc::new(Collector::new());
//! let registry = Registry::builder(RegistryConfig::default())
//!     .with_error_sink(errors.clone())
//!     .build();
//!
//! assert!(errors.is_empty());
//! # let _ = registry;
//! ```

use std::cell::RefCell;

use crate::error::EventsError;
use crate::sinks::ErrorSink;

/// In-memory error recorder.
#[derive(Default, Debug)]
pub struct Collector {
    inner: RefCell<Vec<EventsError>>,
}

impl Collector {
    /// Construct a new [`Collector`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RefCell::new(Vec::new()),
        }
    }

    /// Returns a copy of the recorded errors.
    #[must_use]
    pub fn errors(&self) -> Vec<EventsError> {
        self.inner.borrow().clone()
    }

    /// Returns the labels of the recorded errors, in arrival order.
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        self.inner.borrow().iter().map(EventsError::as_label).collect()
    }

    /// Removes and returns all recorded errors.
    pub fn take(&self) -> Vec<EventsError> {
        std::mem::take(&mut *self.inner.borrow_mut())
    }

    /// Number of recorded errors.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl ErrorSink for Collector {
    fn on_error(&self, err: &EventsError) {
        self.inner.borrow_mut().push(err.clone());
    }

    fn name(&self) -> &'static str {
        "Collector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;

    #[test]
    fn test_records_in_order_and_take_drains() {
        let c = Collector::new();
        let kind = EventKind::of::<u8>();
        c.on_error(&EventsError::DuplicateHandler { kind, handler: "a" });
        c.on_error(&EventsError::HandlerNotFound { kind, handler: "b" });

        assert_eq!(c.len(), 2);
        assert_eq!(c.labels(), vec!["duplicate_handler", "handler_not_found"]);

        let drained = c.take();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[1].handler(), "b");
        assert!(c.is_empty());
    }
}
