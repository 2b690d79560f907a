//! # Handler registry - typed, priority-ordered, synchronous dispatch.
//!
//! Registry owns, per [`EventKind`], an ordered sequence of handlers:
//! - `register` → append, arrange by [`OrderingPolicy`](crate::OrderingPolicy), re-index
//! - `unregister` → locate slot via [`IndexMap`], remove, re-index survivors
//! - `call` → invoke every handler of the event's kind in stored order
//!
//! ## Architecture
//! ```text
//! handlers: HashMap<EventKind, Vec<HandlerRef<E>>>     (type-erased per kind)
//!              │
//!              ├─► Ping  ─► [h3 (prio 9), h1 (prio 0), h2 (prio 0)]
//!              └─► Pong  ─► [h4 (prio 0)]
//!
//! indices: IndexMap<SlotKey{kind, handler}, slot>
//!              (Ping, h3) ─► 0   (Ping, h1) ─► 1   (Ping, h2) ─► 2   (Pong, h4) ─► 0
//! ```
//!
//! ## Rules
//! - Per-kind state: `Unregistered → Active(n) → ... → Unregistered`; an empty
//!   sequence is never stored.
//! - A handler identity appears at most once per kind.
//! - After every structural change of a kind, the slots of all its handlers are
//!   re-derived, so the index never holds stale positions.
//! - Failures never escape: they are reported to the [`ErrorSink`] and the
//!   operation returns normally.
//! - Single-threaded: handlers and sinks are `Rc`, so a `Registry` is neither `Send` nor `Sync`.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::core::{RegistryBuilder, RegistryConfig};
use crate::error::EventsError;
use crate::events::{Event, EventKind};
use crate::handlers::{HandlerId, HandlerRef};
use crate::index::{IndexMap, SlotKey};
use crate::sinks::ErrorSink;

/// Highest number of handlers one kind can hold (slots are stored as `i32`).
const MAX_SLOTS: usize = i32::MAX as usize;

/// Synchronous, in-process event registry.
///
/// # Example
/// ```
/// use std::fmt;
/// use tinyevents::{Event, HandlerFn, HandlerRef, Registry};
///
/// #[derive(PartialEq)]
/// struct Ping(Vec<&'static str>);
///
/// impl fmt::Display for Ping {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "Ping{:?}", self.0)
///     }
/// }
///
/// impl Event for Ping {}
///
/// let mut registry = Registry::new();
/// let late: HandlerRef<Ping> = HandlerFn::rc("late", |p: &mut Ping| p.0.push("late"));
/// let early: HandlerRef<Ping> = HandlerFn::new("early", |p: &mut Ping| p.0.push("early"))
///     .with_priority(10)
///     .into_rc();
///
/// registry.register(late.clone());
/// registry.register(early.clone());
///
/// let mut ping = Ping(Vec::new());
/// registry.call(&mut ping);
/// assert_eq!(ping.0, vec!["early", "late"]);
///
/// registry.unregister(&late);
/// registry.unregister(&early);
/// assert!(registry.is_empty());
/// ```
pub struct Registry<S = ahash::RandomState> {
    handlers: HashMap<EventKind, Box<dyn Any>, S>,
    indices: IndexMap<SlotKey>,
    on_error: Rc<dyn ErrorSink>,
    cfg: RegistryConfig,
}

impl Registry {
    /// Creates a registry with the default configuration and the stderr sink.
    #[must_use]
    pub fn new() -> Self {
        Self::builder(RegistryConfig::default()).build()
    }

    /// Returns a builder for a customized registry.
    pub fn builder(cfg: RegistryConfig) -> RegistryBuilder {
        RegistryBuilder::new(cfg)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BuildHasher> Registry<S> {
    pub(crate) fn from_parts(cfg: RegistryConfig, hasher: S, on_error: Rc<dyn ErrorSink>) -> Self {
        Self {
            handlers: HashMap::with_capacity_and_hasher(cfg.kinds_capacity, hasher),
            indices: IndexMap::with_capacity(cfg.index_capacity_clamped()),
            on_error,
            cfg,
        }
    }

    /// Registers `handler` for events of type `E`.
    ///
    /// The handler joins its kind's sequence at the position given by the configured
    /// ordering policy. Failures (duplicate registration, a panicking `priority()`,
    /// slot overflow) are reported to the error sink and leave the registry unchanged.
    pub fn register<E: Event>(&mut self, handler: HandlerRef<E>) {
        if let Err(err) = self.try_register(handler) {
            self.report(&err);
        }
    }

    /// Removes `handler` from the sequence of `E`.
    ///
    /// - No handlers for `E`: nothing happens.
    /// - Handler not registered for `E`: [`EventsError::HandlerNotFound`] goes to the sink.
    pub fn unregister<E: Event>(&mut self, handler: &HandlerRef<E>) {
        if let Err(err) = self.try_unregister(handler) {
            self.report(&err);
        }
    }

    /// Dispatches `event` to every handler registered for `E`, in stored order.
    ///
    /// Each handler runs inside `catch_unwind`: a panic is reported as
    /// [`EventsError::HandlerPanicked`] and the remaining handlers still run.
    pub fn call<E: Event>(&self, event: &mut E) {
        let kind = EventKind::of::<E>();
        let Some(sequence) = self.sequence::<E>(kind) else {
            return;
        };
        trace!(%kind, handlers = sequence.len(), "dispatching event");

        for handler in sequence {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler.handle(event)));
            if let Err(payload) = outcome {
                self.report(&EventsError::HandlerPanicked {
                    kind,
                    handler: handler.name(),
                    info: panic_info(payload.as_ref()),
                });
            }
        }
    }

    /// Drops every registration.
    pub fn clear(&mut self) {
        self.handlers.clear();
        self.indices.clear();
    }

    // ---------------------------
    // Introspection
    // ---------------------------

    /// Number of event kinds with at least one handler.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True if no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns the kinds that currently have handlers (unordered).
    pub fn kinds(&self) -> Vec<EventKind> {
        self.handlers.keys().copied().collect()
    }

    /// True if `E` has at least one handler.
    pub fn contains_kind<E: Event>(&self) -> bool {
        self.handlers.contains_key(&EventKind::of::<E>())
    }

    /// Number of handlers registered for `E`.
    pub fn handler_count<E: Event>(&self) -> usize {
        self.sequence::<E>(EventKind::of::<E>())
            .map_or(0, Vec::len)
    }

    /// Handler names for `E`, in dispatch order.
    pub fn handler_names<E: Event>(&self) -> Vec<&'static str> {
        self.sequence::<E>(EventKind::of::<E>())
            .map(|seq| seq.iter().map(|h| h.name()).collect())
            .unwrap_or_default()
    }

    /// True if this exact handler instance is registered for `E`.
    pub fn is_registered<E: Event>(&self, handler: &HandlerRef<E>) -> bool {
        self.slot_of(handler).is_some()
    }

    /// Current slot of `handler` within the sequence of `E`.
    pub fn slot_of<E: Event>(&self, handler: &HandlerRef<E>) -> Option<usize> {
        let key = SlotKey::new(EventKind::of::<E>(), HandlerId::of(handler));
        self.indices
            .get(&key)
            .and_then(|slot| usize::try_from(slot).ok())
    }

    /// Number of entries in the slot index (one per kind/handler pair).
    pub fn index_len(&self) -> usize {
        self.indices.len()
    }

    /// The configured error sink.
    pub fn error_sink(&self) -> &Rc<dyn ErrorSink> {
        &self.on_error
    }

    /// The configuration this registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.cfg
    }

    // ---------------------------
    // Helpers
    // ---------------------------

    fn try_register<E: Event>(&mut self, handler: HandlerRef<E>) -> Result<(), EventsError> {
        let kind = EventKind::of::<E>();
        let id = HandlerId::of(&handler);
        let name = handler.name();

        if self.indices.contains_key(&SlotKey::new(kind, id)) {
            return Err(EventsError::DuplicateHandler {
                kind,
                handler: name,
            });
        }

        let mut updated: Vec<HandlerRef<E>> = match self.handlers.get(&kind) {
            None => Vec::with_capacity(1),
            Some(erased) => erased
                .downcast_ref::<Vec<HandlerRef<E>>>()
                .ok_or_else(|| EventsError::RegistrationFailed {
                    kind,
                    handler: name,
                    reason: "kind table holds a sequence of another type".to_string(),
                })?
                .clone(),
        };

        if updated.len() >= MAX_SLOTS {
            return Err(EventsError::RegistrationFailed {
                kind,
                handler: name,
                reason: format!("slot limit {MAX_SLOTS} reached"),
            });
        }

        updated.push(handler);
        let ordering = self.cfg.ordering;
        panic::catch_unwind(AssertUnwindSafe(|| ordering.arrange(&mut updated))).map_err(
            |payload| EventsError::RegistrationFailed {
                kind,
                handler: name,
                reason: format!("ordering panicked: {}", panic_info(payload.as_ref())),
            },
        )?;

        Self::reindex(&mut self.indices, kind, &updated);
        debug!(
            %kind,
            handler = name,
            slot = ?self.indices.get(&SlotKey::new(kind, id)),
            handlers = updated.len(),
            ordering = ordering.as_label(),
            "handler registered"
        );
        self.handlers.insert(kind, Box::new(updated));
        Ok(())
    }

    fn try_unregister<E: Event>(&mut self, handler: &HandlerRef<E>) -> Result<(), EventsError> {
        let kind = EventKind::of::<E>();
        let id = HandlerId::of(handler);
        let name = handler.name();
        let not_found = || EventsError::HandlerNotFound {
            kind,
            handler: name,
        };

        let Some(erased) = self.handlers.get_mut(&kind) else {
            debug!(%kind, handler = name, "unregister on kind without handlers");
            return Ok(());
        };
        let sequence = erased
            .downcast_mut::<Vec<HandlerRef<E>>>()
            .ok_or_else(not_found)?;

        if sequence.is_empty() {
            self.handlers.remove(&kind);
            return Ok(());
        }

        let key = SlotKey::new(kind, id);
        let slot = self
            .indices
            .get(&key)
            .and_then(|slot| usize::try_from(slot).ok())
            .filter(|&slot| slot < sequence.len() && HandlerId::of(&sequence[slot]) == id)
            .ok_or_else(not_found)?;

        sequence.remove(slot);
        self.indices.remove(&key);

        if sequence.is_empty() {
            self.handlers.remove(&kind);
        } else {
            Self::reindex(&mut self.indices, kind, sequence);
        }
        debug!(%kind, handler = name, slot, "handler unregistered");
        Ok(())
    }

    /// Looks up the typed sequence of `kind`.
    fn sequence<E: Event>(&self, kind: EventKind) -> Option<&Vec<HandlerRef<E>>> {
        let erased = self.handlers.get(&kind)?;
        let sequence = erased.downcast_ref::<Vec<HandlerRef<E>>>();
        if sequence.is_none() {
            warn!(%kind, "kind table holds a sequence of another type");
        }
        sequence
    }

    /// Writes the position of every handler in `sequence` into the index.
    fn reindex<E: Event>(indices: &mut IndexMap<SlotKey>, kind: EventKind, sequence: &[HandlerRef<E>]) {
        for (slot, handler) in sequence.iter().enumerate() {
            // slot < MAX_SLOTS, checked on registration
            indices.put(SlotKey::new(kind, HandlerId::of(handler)), slot as i32);
        }
    }

    fn report(&self, err: &EventsError) {
        trace!(label = err.as_label(), sink = self.on_error.name(), "reporting error");
        self.on_error.on_error(err);
    }
}

impl<S> fmt::Debug for Registry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kinds", &self.handlers.keys().collect::<Vec<_>>())
            .field("indexed", &self.indices.len())
            .field("on_error", &self.on_error.name())
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Renders a panic payload as text.
fn panic_info(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
