//! # LogSink: forward failures to `tracing`
//!
//! Emits one `tracing` event per failure with structured fields:
//! `label`, `kind`, `handler`. Registration and removal problems are logged at
//! `WARN`, handler panics at `ERROR`.
//!
//! The library never installs a `tracing` subscriber; without one, nothing is printed.

use tracing::{error, warn};

use crate::error::EventsError;
use crate::sinks::ErrorSink;

/// Error sink backed by `tracing`.
#[derive(Default, Debug, Clone, Copy)]
pub struct LogSink;

impl LogSink {
    /// Construct a new [`LogSink`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ErrorSink for LogSink {
    fn on_error(&self, err: &EventsError) {
        let label = err.as_label();
        let kind = err.kind();
        let handler = err.handler();

        match err {
            EventsError::HandlerPanicked { info, .. } => {
                error!(label, %kind, handler, info = %info, "handler panicked");
            }
            EventsError::RegistrationFailed { reason, .. } => {
                warn!(label, %kind, handler, reason = %reason, "registration failed");
            }
            EventsError::DuplicateHandler { .. } => {
                warn!(label, %kind, handler, "duplicate registration ignored");
            }
            EventsError::HandlerNotFound { .. } => {
                warn!(label, %kind, handler, "handler not found");
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogSink"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Runs `err` through a [`LogSink`] and returns the single rendered line.
    fn logged(err: &EventsError) -> String {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || LogSink::new().on_error(err));

        let bytes = buffer.0.lock().unwrap().clone();
        let out = String::from_utf8(bytes).unwrap();
        assert_eq!(out.lines().count(), 1, "expected one line, got: {out}");
        out
    }

    #[test]
    fn test_panics_logged_at_error_with_fields() {
        let out = logged(&EventsError::HandlerPanicked {
            kind: EventKind::of::<u16>(),
            handler: "h",
            info: "boom".into(),
        });
        assert!(out.starts_with("ERROR"), "{out}");
        assert!(out.contains("handler panicked"), "{out}");
        assert!(out.contains(r#"label="handler_panicked""#), "{out}");
        assert!(out.contains("kind=u16"), "{out}");
        assert!(out.contains(r#"handler="h""#), "{out}");
        assert!(out.contains("info=boom"), "{out}");
    }

    #[test]
    fn test_registration_failure_logged_at_warn() {
        let out = logged(&EventsError::RegistrationFailed {
            kind: EventKind::of::<u8>(),
            handler: "h",
            reason: "x".into(),
        });
        assert!(out.starts_with(" WARN"), "{out}");
        assert!(out.contains("registration failed"), "{out}");
        assert!(out.contains(r#"label="registration_failed""#), "{out}");
        assert!(out.contains("kind=u8"), "{out}");
        assert!(out.contains(r#"handler="h""#), "{out}");
        assert!(out.contains("reason=x"), "{out}");
    }

    #[test]
    fn test_duplicate_and_missing_logged_at_warn() {
        let kind = EventKind::of::<u32>();

        let out = logged(&EventsError::DuplicateHandler { kind, handler: "dup" });
        assert!(out.starts_with(" WARN"), "{out}");
        assert!(out.contains(r#"label="duplicate_handler""#), "{out}");
        assert!(out.contains("kind=u32"), "{out}");
        assert!(out.contains(r#"handler="dup""#), "{out}");

        let out = logged(&EventsError::HandlerNotFound { kind, handler: "gone" });
        assert!(out.starts_with(" WARN"), "{out}");
        assert!(out.contains(r#"label="handler_not_found""#), "{out}");
        assert!(out.contains("kind=u32"), "{out}");
        assert!(out.contains(r#"handler="gone""#), "{out}");
    }

    #[test]
    fn test_name() {
        assert_eq!(LogSink::new().name(), "LogSink");
    }
}
