//! # Handler trait and identity.
//!
//! A [`Handler`] reacts to one event type `E`. Its [`priority`](Handler::priority)
//! decides where it sits in the dispatch order: higher values run earlier, the
//! default is `0`, the range is the whole `i16` domain.
//!
//! Handlers are shared as [`HandlerRef`] (`Rc<dyn Handler<E>>`). The caller keeps
//! its own clone and passes it back to `unregister`. Identity is the address of the
//! shared allocation ([`HandlerId`]): two handlers with identical behavior are
//! still two distinct registrations.

use std::rc::Rc;

use crate::events::Event;

/// # Callback invoked for events of type `E`.
///
/// # Example
/// ```
/// use std::fmt;
/// use std::rc::Rc;
/// use tinyevents::{Event, Handler, HandlerRef};
///
/// #[derive(PartialEq)]
/// struct Tick(u32);
///
/// impl fmt::Display for Tick {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "Tick[{}]", self.0)
///     }
/// }
///
/// impl Event for Tick {}
///
/// struct Doubler;
///
/// impl Handler<Tick> for Doubler {
///     fn handle(&self, event: &mut Tick) {
///         event.0 *= 2;
///     }
///
///     fn priority(&self) -> i16 { 10 }
///     fn name(&self) -> &'static str { "doubler" }
/// }
///
/// let h: HandlerRef<Tick> = Rc::new(Doubler);
/// let mut tick = Tick(21);
/// h.handle(&mut tick);
/// assert_eq!(tick.0, 42);
/// ```
pub trait Handler<E: Event>: 'static {
    /// Handles one event.
    ///
    /// A panic raised here is caught by the registry and reported to the
    /// error sink; the remaining handlers still run.
    fn handle(&self, event: &mut E);

    /// Dispatch priority. Higher runs earlier; `i16::MAX` is the highest.
    fn priority(&self) -> i16 {
        0
    }

    /// Returns the handler name used in logs and error reports.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a handler.
pub type HandlerRef<E> = Rc<dyn Handler<E>>;

/// Pointer identity of a handler allocation.
///
/// Stable for as long as any clone of the [`HandlerRef`] is alive, which the
/// registry guarantees while the handler is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(usize);

impl HandlerId {
    /// Returns the identity of `handler`.
    #[inline]
    pub fn of<E: Event>(handler: &HandlerRef<E>) -> Self {
        Self(Rc::as_ptr(handler) as *const () as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(PartialEq)]
    struct Ping;

    impl fmt::Display for Ping {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("Ping[]")
        }
    }

    impl Event for Ping {}

    struct Quiet;

    impl Handler<Ping> for Quiet {
        fn handle(&self, _event: &mut Ping) {}
    }

    #[test]
    fn test_defaults() {
        let h: HandlerRef<Ping> = Rc::new(Quiet);
        assert_eq!(h.priority(), 0);
        assert!(h.name().ends_with("Quiet"));
    }

    #[test]
    fn test_identity_is_per_allocation() {
        let a: HandlerRef<Ping> = Rc::new(Quiet);
        let b: HandlerRef<Ping> = Rc::new(Quiet);
        let a2 = Rc::clone(&a);

        assert_eq!(HandlerId::of(&a), HandlerId::of(&a2));
        assert_ne!(HandlerId::of(&a), HandlerId::of(&b));
    }
}
