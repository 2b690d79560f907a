//! # tinyevents
//!
//! **tinyevents** is a synchronous, in-process event registry for Rust.
//!
//! Callers register typed handlers for an event type, then dispatch event
//! instances to every matching handler in priority order. Everything runs on the
//! caller's thread: no queues, no async runtime, no background workers.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  Handler<A>  │   │  Handler<A>  │   │  Handler<B>  │
//!     │  (prio 10)   │   │  (prio 0)    │   │  (prio 0)    │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼ register         ▼ register         ▼ register
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Registry                                                         │
//! │  - kind table  (EventKind ─► ordered Vec<HandlerRef<E>>)          │
//! │  - IndexMap    ((kind, handler) ─► slot)                          │
//! │  - ErrorSink   (receives every swallowed failure)                 │
//! └──────┬─────────────────────────────────────────────────┬──────────┘
//!        │ call(&mut A)                                    │ failures
//!        ▼                                                 ▼
//!   handler(prio 10) ─► handler(prio 0) ─► return    ErrorSink::on_error()
//!        │ panic? caught, reported, next handler runs
//! ```
//!
//! ### Lifecycle
//! ```text
//! per kind:
//!   Unregistered ──register──► Active(1) ──register/unregister──► Active(n)
//!        ▲                                                          │
//!        └──────────────────── unregister last ─────────────────────┘
//! ```
//!
//! ## Features
//! | Area              | Description                                                      | Key types / traits                      |
//! |-------------------|------------------------------------------------------------------|-----------------------------------------|
//! | **Events**        | Typed payloads keyed by their type, optional cancel flag.        | [`Event`], [`EventKind`], [`Cancellable`] |
//! | **Handlers**      | Prioritized callbacks, as types or closures.                     | [`Handler`], [`HandlerFn`], [`HandlerRef`] |
//! | **Registry**      | Register, unregister, dispatch.                                  | [`Registry`], [`RegistryBuilder`]       |
//! | **Ordering**      | Priority-driven or insertion-order dispatch.                     | [`OrderingPolicy`]                      |
//! | **Errors**        | Typed failures delivered to a single sink.                       | [`EventsError`], [`ErrorSink`]          |
//! | **Slot index**    | Chained hash map from key to `i32`.                              | [`IndexMap`]                            |
//! | **Configuration** | Centralize registry settings.                                    | [`RegistryConfig`]                      |
//!
//! ## Threading
//! A [`Registry`] is single-threaded: handlers and sinks are held in `Rc`, so the
//! registry is neither `Send` nor `Sync`. Create one per scope that needs it and
//! pass it explicitly; there is no global instance.
//!
//! ## Example
//! ```rust
//! use std::fmt;
//! use std::rc::Rc;
//! use tinyevents::{Cancellable, Collector, Event, HandlerFn, HandlerRef, Registry, RegistryConfig};
//!
//! #[derive(Debug, PartialEq)]
//! struct Swap {
//!     left: String,
//!     right: String,
//!     cancelled: bool,
//! }
//!
//! impl fmt::Display for Swap {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "Swap[left='{}', right='{}', cancelled='{}']", self.left, self.right, self.cancelled)
//!     }
//! }
//!
//! impl Event for Swap {}
//!
//! impl Cancellable for Swap {
//!     fn cancelled(&self) -> bool { self.cancelled }
//!     fn set_cancelled(&mut self, state: bool) { self.cancelled = state; }
//! }
//!
//! let errors = Rc::new(Collector::new());
//! let mut registry = Registry::builder(RegistryConfig::default())
//!     .with_error_sink(errors.clone())
//!     .build();
//!
//! let swapper: HandlerRef<Swap> = HandlerFn::rc("swapper", |ev: &mut Swap| {
//!     if ev.cancelled() {
//!         return;
//!     }
//!     std::mem::swap(&mut ev.left, &mut ev.right);
//!     ev.cancel();
//! });
//! registry.register(swapper.clone());
//!
//! let mut ev = Swap { left: "a".into(), right: "b".into(), cancelled: false };
//! registry.call(&mut ev);
//! registry.call(&mut ev); // cancelled: the handler skips it
//! assert_eq!((ev.left.as_str(), ev.right.as_str()), ("b", "a"));
//!
//! registry.unregister(&swapper);
//! assert!(registry.is_empty());
//! assert!(errors.is_empty());
//! ```
mod core;
mod error;
mod events;
mod handlers;
mod index;
mod policies;
mod sinks;

// ---- Public re-exports ----

pub use crate::core::{Registry, RegistryBuilder, RegistryConfig};
pub use error::EventsError;
pub use events::{Cancellable, Event, EventKind};
pub use handlers::{Handler, HandlerFn, HandlerId, HandlerRef};
pub use index::{IndexMap, SlotKey};
pub use policies::OrderingPolicy;
pub use sinks::{Collector, ErrorSink, LogSink, StderrSink};
