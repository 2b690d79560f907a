//! # Error sinks for the registry.
//!
//! This module provides the [`ErrorSink`] trait and built-in implementations
//! receiving every failure the registry swallows.
//!
//! ## Architecture
//! ```text
//! Failure flow:
//!   register()   ── DuplicateHandler / RegistrationFailed ──┐
//!   unregister() ── HandlerNotFound ───────────────────────┼──► ErrorSink::on_error(&EventsError)
//!   call()       ── HandlerPanicked (one per handler) ─────┘          │
//!                                                              ┌───────┼─────────┬────────┐
//!                                                              ▼       ▼         ▼        ▼
//!                                                         StderrSink LogSink Collector  Custom
//! ```
//!
//! ## Sink types
//! - **Printing sinks** - report and forget ([`StderrSink`], the default, and [`LogSink`])
//! - **Recording sinks** - keep errors for later inspection ([`Collector`])
//!
//! ## Implementing custom sinks
//! Any `Fn(&EventsError)` closure is a sink:
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tinyevents::{ErrorSink, EventsError, Registry, RegistryConfig};
//!
//! let failures = Rc::new(Cell::new(0u32));
//! let counter = Rc::clone(&failures);
//! let sink: Rc<dyn ErrorSink> = Rc::new(move |_err: &EventsError| counter.set(counter.get() + 1));
//!
//! let registry = Registry::builder(RegistryConfig::default())
//!     .with_error_sink(sink)
//!     .build();
//! # let _ = registry;
//! ```

mod embedded;
mod sink;

pub use embedded::{Collector, LogSink, StderrSink};
pub use sink::ErrorSink;
