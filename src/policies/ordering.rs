//! # Ordering policies for handler sequences.
//!
//! [`OrderingPolicy`] determines how a kind's handler sequence is arranged each
//! time a handler is registered.
//!
//! - [`OrderingPolicy::ByPriority`] stable sort, highest priority first (default).
//! - [`OrderingPolicy::Insertion`] registration order, priorities ignored.
//!
//! ## Choosing the right policy
//!
//! **Priority-driven dispatch**:
//! ```text
//! register(a, prio 0), register(b, prio 5), register(c, prio 5)
//! OrderingPolicy::ByPriority    → [b, c, a]
//! ```
//!
//! **Legacy ordering**:
//! ```text
//! register(a, prio 0), register(b, prio 5), register(c, prio 5)
//! OrderingPolicy::Insertion     → [a, b, c]
//! ```
//!
//! `Insertion` reproduces the order produced by the historical comparator, which
//! compared every pair using the priority of the handler being inserted. All pairs
//! compared equal, so the stable sort never moved anything.

use std::cmp::Reverse;

use crate::events::Event;
use crate::handlers::HandlerRef;

/// Policy controlling the order in which a kind's handlers are dispatched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderingPolicy {
    /// Descending by each handler's own priority; equal priorities keep insertion order (default).
    #[default]
    ByPriority,
    /// Registration order; priorities are ignored.
    Insertion,
}

impl OrderingPolicy {
    /// Arranges `handlers` in dispatch order.
    ///
    /// The last element is the handler that was just appended. The sort is stable,
    /// so previously arranged handlers keep their relative order.
    pub fn arrange<E: Event>(&self, handlers: &mut [HandlerRef<E>]) {
        match self {
            OrderingPolicy::ByPriority => handlers.sort_by_key(|h| Reverse(h.priority())),
            OrderingPolicy::Insertion => {}
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            OrderingPolicy::ByPriority => "by_priority",
            OrderingPolicy::Insertion => "insertion",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::HandlerFn;
    use std::fmt;

    #[derive(PartialEq)]
    struct Ev;

    impl fmt::Display for Ev {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("Ev[]")
        }
    }

    impl Event for Ev {}

    fn handler(name: &'static str, priority: i16) -> HandlerRef<Ev> {
        HandlerFn::new(name, |_: &mut Ev| {})
            .with_priority(priority)
            .into_rc()
    }

    fn names(hs: &[HandlerRef<Ev>]) -> Vec<&'static str> {
        hs.iter().map(|h| h.name()).collect()
    }

    #[test]
    fn test_by_priority_descending_and_stable() {
        let mut hs = vec![
            handler("a", 0),
            handler("b", 5),
            handler("c", -3),
            handler("d", 5),
            handler("e", 0),
        ];
        OrderingPolicy::ByPriority.arrange(&mut hs);
        assert_eq!(names(&hs), vec!["b", "d", "a", "e", "c"]);
    }

    #[test]
    fn test_extremes() {
        let mut hs = vec![handler("low", i16::MIN), handler("high", i16::MAX)];
        OrderingPolicy::ByPriority.arrange(&mut hs);
        assert_eq!(names(&hs), vec!["high", "low"]);
    }

    #[test]
    fn test_insertion_keeps_registration_order() {
        let mut hs = vec![handler("a", 0), handler("b", 5), handler("c", 5)];
        OrderingPolicy::Insertion.arrange(&mut hs);
        assert_eq!(names(&hs), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_default_and_labels() {
        assert_eq!(OrderingPolicy::default(), OrderingPolicy::ByPriority);
        assert_eq!(OrderingPolicy::ByPriority.as_label(), "by_priority");
        assert_eq!(OrderingPolicy::Insertion.as_label(), "insertion");
    }
}
