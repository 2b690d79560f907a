//! Built-in error sinks.
//!
//! - [`StderrSink`] prints one line per failure (default sink).
//! - [`LogSink`] forwards failures to `tracing`.
//! - [`Collector`] keeps failures in memory.

mod collector;
mod log;
mod stderr;

pub use collector::Collector;
pub use log::LogSink;
pub use stderr::StderrSink;
