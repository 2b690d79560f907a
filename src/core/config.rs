//! # Registry configuration.
//!
//! Provides [`RegistryConfig`] centralized settings for a [`Registry`](crate::Registry).
//!
//! ## Sentinel values
//! - `index_capacity = 0` → clamped to 1 bucket
//! - `kinds_capacity = 0` → kind table allocates lazily

use crate::policies::OrderingPolicy;

/// Configuration for a registry instance.
///
/// Defines:
/// - **Dispatch order**: how each kind's handlers are arranged
/// - **Pre-allocation**: initial sizes of the slot index and the kind table
///
/// ## Field semantics
/// - `ordering`: Arrangement applied after every registration
/// - `index_capacity`: Initial bucket count of the slot index (min 1; rounded up to a power of two)
/// - `kinds_capacity`: Initial capacity of the kind table (`0` = allocate on first use)
///
/// ## Notes
/// All fields are public for flexibility. Prefer using helper accessors to avoid
/// sprinkling sentinel checks (`0`) across the codebase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Ordering policy for every kind's handler sequence.
    ///
    /// Switching it only affects registrations made afterwards.
    pub ordering: OrderingPolicy,

    /// Initial bucket count of the slot index.
    ///
    /// The index doubles on its own once three quarters full.
    pub index_capacity: usize,

    /// Initial capacity of the kind table.
    pub kinds_capacity: usize,
}

impl RegistryConfig {
    /// Returns an index capacity clamped to a minimum of 1.
    #[inline]
    pub fn index_capacity_clamped(&self) -> usize {
        self.index_capacity.max(1)
    }

    /// Returns a copy of this configuration using `ordering`.
    #[must_use]
    pub fn with_ordering(mut self, ordering: OrderingPolicy) -> Self {
        self.ordering = ordering;
        self
    }
}

impl Default for RegistryConfig {
    /// Default configuration:
    ///
    /// - `ordering = OrderingPolicy::ByPriority`
    /// - `index_capacity = 16`
    /// - `kinds_capacity = 0` (lazy)
    fn default() -> Self {
        Self {
            ordering: OrderingPolicy::default(),
            index_capacity: 16,
            kinds_capacity: 0,
        }
    }
}
