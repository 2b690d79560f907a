//! # Handler abstractions.
//!
//! This module provides the handler-related types:
//! - [`Handler`] - trait for implementing event callbacks with a priority
//! - [`HandlerFn`] - closure-backed handler implementation
//! - [`HandlerRef`] - shared reference to a handler (`Rc<dyn Handler<E>>`)
//! - [`HandlerId`] - pointer identity of a registered handler

mod handler;
mod handler_fn;

pub use handler::{Handler, HandlerId, HandlerRef};
pub use handler_fn::HandlerFn;
