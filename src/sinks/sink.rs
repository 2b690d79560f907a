//! # Error sink trait.
//!
//! Provides [`ErrorSink`], the single channel through which the registry reports
//! failures. `register`, `unregister` and `call` never return errors; a caller that
//! wants to detect them installs a sink that records or escalates.
//!
//! ## Rules
//! - The sink runs synchronously on the caller's thread, inside the operation
//!   that failed. A blocking sink blocks that operation.
//! - During `call`, the sink is invoked once per failed handler, before the next
//!   handler runs.
//! - A sink that panics is **not** isolated: the panic propagates to the caller.

use crate::error::EventsError;

/// Receiver of every otherwise-uncaught registry failure.
pub trait ErrorSink: 'static {
    /// Handles a single failure.
    fn on_error(&self, err: &EventsError);

    /// Returns the sink name used in debug output.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<F> ErrorSink for F
where
    F: Fn(&EventsError) + 'static,
{
    fn on_error(&self, err: &EventsError) {
        self(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_closure_is_a_sink() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let sink: Rc<dyn ErrorSink> = Rc::new(move |e: &EventsError| {
            s.borrow_mut().push(e.as_label());
        });

        sink.on_error(&EventsError::HandlerNotFound {
            kind: EventKind::of::<u8>(),
            handler: "h",
        });
        assert_eq!(*seen.borrow(), vec!["handler_not_found"]);
    }
}
