//! Registry core: registration bookkeeping and dispatch.
//!
//! This module contains the implementation of the event registry.
//! The public API from this module is [`Registry`], built directly with
//! [`Registry::new`] or through [`RegistryBuilder`] from a [`RegistryConfig`].
//!
//! Internal modules:
//! - [`registry`]: per-kind handler sequences, slot index, dispatch;
//! - [`builder`]: wires configuration, error sink and hasher together;
//! - [`config`]: tunables and their defaults.

mod builder;
mod config;
mod registry;

pub use builder::RegistryBuilder;
pub use config::RegistryConfig;
pub use registry::Registry;
