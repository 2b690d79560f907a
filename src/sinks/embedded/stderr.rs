//! # StderrSink: default error printer
//!
//! Prints every failure to stderr, one line each. This is the sink a
//! [`Registry`](crate::Registry) gets when none is configured.
//!
//! ## Example output
//! ```text
//! [tinyevents] duplicate_handler: handler printer is already registered for app::Ping
//! [tinyevents] handler_not_found: the handler printer doesn't exist for app::Ping
//! [tinyevents] handler_panicked: handler printer panicked while handling app::Ping: boom
//! ```

use crate::error::EventsError;
use crate::sinks::ErrorSink;

/// Error printer writing to stderr.
#[derive(Default, Debug, Clone, Copy)]
pub struct StderrSink;

impl StderrSink {
    /// Construct a new [`StderrSink`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Renders the line printed for `err` (without trailing newline).
    pub fn render(err: &EventsError) -> String {
        format!("[tinyevents] {}: {}", err.as_label(), err)
    }
}

impl ErrorSink for StderrSink {
    fn on_error(&self, err: &EventsError) {
        eprintln!("{}", Self::render(err));
    }

    fn name(&self) -> &'static str {
        "StderrSink"
    }
}
