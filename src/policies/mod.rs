//! Dispatch ordering policies.
//!
//! This module groups the knob that controls **in which order** the handlers
//! of one event kind are invoked.
//!
//! ## Contents
//! - [`OrderingPolicy`] how a kind's sequence is arranged after each registration
//!
//! ## Quick wiring
//! ```text
//! RegistryConfig { ordering: OrderingPolicy, .. }
//!      └─► Registry::register uses:
//!           - ordering.arrange(&mut sequence) after appending the new handler
//!           - the arranged positions become the slots stored in the IndexMap
//! ```
//!
//! ## Defaults
//! - `OrderingPolicy::ByPriority` (highest priority first, ties by insertion).

mod ordering;

pub use ordering::OrderingPolicy;
