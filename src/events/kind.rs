//! # Event kind token.
//!
//! [`EventKind`] identifies the dynamic type of an event. It wraps the
//! [`TypeId`] of the payload type, plus its type name for diagnostics.
//!
//! ## Rules
//! - Equality, ordering and hashing use the `TypeId` only.
//! - The token is `Copy` and stable for the lifetime of the process.
//!
//! ## Example
//! ```rust
//! use tinyevents::EventKind;
//!
//! struct Ping;
//!
//! assert_eq!(EventKind::of::<Ping>(), EventKind::of::<Ping>());
//! assert_ne!(EventKind::of::<Ping>(), EventKind::of::<u8>());
//! assert!(EventKind::of::<Ping>().name().ends_with("Ping"));
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Type-identity token for an event type.
#[derive(Clone, Copy)]
pub struct EventKind {
    id: TypeId,
    name: &'static str,
}

impl EventKind {
    /// Returns the kind of `E`.
    #[inline]
    pub fn of<E: Any>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: std::any::type_name::<E>(),
        }
    }

    /// Underlying type identity.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name of the event (diagnostics only).
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// True if this token describes `E`.
    #[inline]
    pub fn is<E: Any>(&self) -> bool {
        self.id == TypeId::of::<E>()
    }
}

impl PartialEq for EventKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EventKind {}

impl Hash for EventKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventKind").field(&self.name).finish()
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Alpha;
    struct Beta;

    #[test]
    fn test_same_type_same_kind() {
        let a = EventKind::of::<Alpha>();
        let b = EventKind::of::<Alpha>();
        assert_eq!(a, b);
        assert!(a.is::<Alpha>());
        assert!(!a.is::<Beta>());
    }

    #[test]
    fn test_kinds_hash_by_type() {
        let mut set = HashSet::new();
        set.insert(EventKind::of::<Alpha>());
        set.insert(EventKind::of::<Beta>());
        set.insert(EventKind::of::<Alpha>());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_uses_type_name() {
        assert_eq!(EventKind::of::<u64>().to_string(), "u64");
        assert_eq!(format!("{:?}", EventKind::of::<u64>()), "EventKind(\"u64\")");
    }
}
