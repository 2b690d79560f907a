//! # Closure-backed handler (`HandlerFn`)
//!
//! [`HandlerFn`] wraps a closure `F: Fn(&mut E)` together with a name and a priority.
//! The closure must be `Fn`, not `FnMut`; if it needs state across calls, keep it in
//! a `Cell`/`RefCell` captured explicitly.
//!
//! ## Example
//! ```rust
//! use std::fmt;
//! use tinyevents::{Event, Handler, HandlerFn, HandlerRef};
//!
//! #[derive(PartialEq)]
//! struct Counter(u32);
//!
//! impl fmt::Display for Counter {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "Counter[{}]", self.0)
//!     }
//! }
//!
//! impl Event for Counter {}
//!
//! let h: HandlerRef<Counter> = HandlerFn::new("bump", |c: &mut Counter| c.0 += 1)
//!     .with_priority(5)
//!     .into_rc();
//!
//! let mut c = Counter(0);
//! h.handle(&mut c);
//! assert_eq!(c.0, 1);
//! assert_eq!(h.name(), "bump");
//! assert_eq!(h.priority(), 5);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::events::Event;
use crate::handlers::Handler;

/// Function-backed handler implementation.
pub struct HandlerFn<F> {
    name: &'static str,
    priority: i16,
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new closure-backed handler with priority `0`.
    ///
    /// Prefer [`HandlerFn::rc`] when you immediately need a [`HandlerRef`](crate::HandlerRef).
    pub fn new(name: &'static str, f: F) -> Self {
        Self {
            name,
            priority: 0,
            f,
        }
    }

    /// Creates the handler and returns it as a shared handle.
    ///
    /// ## Example
    /// ```rust
    /// use std::fmt;
    /// use tinyevents::{Event, Handler, HandlerFn, HandlerRef};
    ///
    /// #[derive(PartialEq)]
    /// struct Shout(String);
    ///
    /// impl fmt::Display for Shout {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         write!(f, "Shout[{}]", self.0)
    ///     }
    /// }
    ///
    /// impl Event for Shout {}
    ///
    /// let h: HandlerRef<Shout> = HandlerFn::rc("upper", |s: &mut Shout| s.0.make_ascii_uppercase());
    /// let mut s = Shout("hey".into());
    /// h.handle(&mut s);
    /// assert_eq!(s.0, "HEY");
    /// ```
    pub fn rc(name: &'static str, f: F) -> Rc<Self> {
        Rc::new(Self::new(name, f))
    }

    /// Sets the dispatch priority (higher runs earlier).
    #[must_use]
    pub fn with_priority(mut self, priority: i16) -> Self {
        self.priority = priority;
        self
    }

    /// Wraps the handler in an `Rc`.
    pub fn into_rc(self) -> Rc<Self> {
        Rc::new(self)
    }
}

impl<F> fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerFn")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

impl<E, F> Handler<E> for HandlerFn<F>
where
    E: Event,
    F: Fn(&mut E) + 'static, // Fn, not FnMut
{
    fn handle(&self, event: &mut E) {
        (self.f)(event)
    }

    fn priority(&self) -> i16 {
        self.priority
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
