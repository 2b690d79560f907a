//! Error types reported by the registry.
//!
//! Every failure inside [`Registry`](crate::Registry) is described by [`EventsError`]
//! and delivered to the configured [`ErrorSink`](crate::ErrorSink). None of them is
//! returned from `register`, `unregister` or `call`.
//!
//! Like the rest of the crate, the enum provides `as_label` / `as_message` helpers
//! for logs and metrics.

use thiserror::Error;

use crate::events::EventKind;

/// # Errors produced while registering, removing or dispatching handlers.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventsError {
    /// Bookkeeping failed while inserting a handler; the registry was left unchanged.
    #[error("failed to register handler {handler} for {kind}: {reason}")]
    RegistrationFailed {
        /// Event kind the handler was registered for.
        kind: EventKind,
        /// Handler name.
        handler: &'static str,
        /// What went wrong.
        reason: String,
    },

    /// The same handler instance is already registered for this kind.
    #[error("handler {handler} is already registered for {kind}")]
    DuplicateHandler {
        /// Event kind the handler was registered for.
        kind: EventKind,
        /// Handler name.
        handler: &'static str,
    },

    /// `unregister` could not locate the handler's slot.
    #[error("the handler {handler} doesn't exist for {kind}")]
    HandlerNotFound {
        /// Event kind the removal targeted.
        kind: EventKind,
        /// Handler name.
        handler: &'static str,
    },

    /// A handler panicked during dispatch; the remaining handlers still ran.
    #[error("handler {handler} panicked while handling {kind}: {info}")]
    HandlerPanicked {
        /// Event kind being dispatched.
        kind: EventKind,
        /// Handler name.
        handler: &'static str,
        /// Panic payload rendered as text.
        info: String,
    },
}

impl EventsError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use tinyevents::{EventKind, EventsError};
    ///
    /// let err = EventsError::HandlerNotFound { kind: EventKind::of::<u8>(), handler: "printer" };
    /// assert_eq!(err.as_label(), "handler_not_found");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EventsError::RegistrationFailed { .. } => "registration_failed",
            EventsError::DuplicateHandler { .. } => "duplicate_handler",
            EventsError::HandlerNotFound { .. } => "handler_not_found",
            EventsError::HandlerPanicked { .. } => "handler_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EventsError::RegistrationFailed {
                kind,
                handler,
                reason,
            } => format!("kind={kind} handler={handler} reason={reason}"),
            EventsError::DuplicateHandler { kind, handler } => {
                format!("kind={kind} handler={handler} already registered")
            }
            EventsError::HandlerNotFound { kind, handler } => {
                format!("kind={kind} handler={handler} not found")
            }
            EventsError::HandlerPanicked {
                kind,
                handler,
                info,
            } => format!("kind={kind} handler={handler} panic={info}"),
        }
    }

    /// Event kind the failure relates to.
    pub fn kind(&self) -> EventKind {
        match self {
            EventsError::RegistrationFailed { kind, .. }
            | EventsError::DuplicateHandler { kind, .. }
            | EventsError::HandlerNotFound { kind, .. }
            | EventsError::HandlerPanicked { kind, .. } => *kind,
        }
    }

    /// Name of the handler involved.
    pub fn handler(&self) -> &'static str {
        match self {
            EventsError::RegistrationFailed { handler, .. }
            | EventsError::DuplicateHandler { handler, .. }
            | EventsError::HandlerNotFound { handler, .. }
            | EventsError::HandlerPanicked { handler, .. } => handler,
        }
    }

    /// Indicates whether the failure happened during dispatch.
    ///
    /// Returns `true` only for [`EventsError::HandlerPanicked`].
    pub fn is_dispatch_failure(&self) -> bool {
        matches!(self, EventsError::HandlerPanicked { .. })
    }
}
