//! Event data model.
//!
//! This module groups the types describing **what** gets dispatched:
//!
//! ## Contents
//! - [`Event`] marker trait every dispatchable payload implements
//! - [`EventKind`] type token used as the registry's primary key
//! - [`Cancellable`] optional cooperative cancellation capability
//!
//! The registry never looks inside an event. It only derives the [`EventKind`]
//! from the static type passed to [`Registry::call`](crate::Registry::call).

mod event;
mod kind;

pub use event::{Cancellable, Event};
pub use kind::EventKind;
