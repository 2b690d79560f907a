use std::hash::BuildHasher;
use std::rc::Rc;

use crate::core::RegistryConfig;
use crate::sinks::{ErrorSink, StderrSink};

use super::registry::Registry;

/// Builder for constructing a [`Registry`] with optional collaborators.
pub struct RegistryBuilder<S = ahash::RandomState> {
    cfg: RegistryConfig,
    on_error: Option<Rc<dyn ErrorSink>>,
    hasher: S,
}

impl RegistryBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: RegistryConfig) -> Self {
        Self {
            cfg,
            on_error: None,
            hasher: ahash::RandomState::new(),
        }
    }
}

impl<S: BuildHasher> RegistryBuilder<S> {
    /// Sets the sink receiving every registration, removal and dispatch failure.
    ///
    /// Defaults to [`StderrSink`].
    pub fn with_error_sink(mut self, sink: Rc<dyn ErrorSink>) -> Self {
        self.on_error = Some(sink);
        self
    }

    /// Replaces the hasher of the backing kind table.
    pub fn with_hasher<T: BuildHasher>(self, hasher: T) -> RegistryBuilder<T> {
        RegistryBuilder {
            cfg: self.cfg,
            on_error: self.on_error,
            hasher,
        }
    }

    /// Builds and returns the registry.
    pub fn build(self) -> Registry<S> {
        let on_error = self
            .on_error
            .unwrap_or_else(|| Rc::new(StderrSink::new()));
        Registry::from_parts(self.cfg, self.hasher, on_error)
    }
}
