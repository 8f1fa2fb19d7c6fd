//! Transition introspection: which events would a snapshot accept?

use crate::core::EventSet;
use crate::engine::MachineSnapshot;

/// Derive the set of externally triggerable event names valid from a
/// snapshot's current state.
///
/// Enumerates every transition whose source matches the current state
/// value (including transitions declared at any active region of a
/// hierarchical value), collects each concrete event name, discards
/// catch-all matchers, deduplicates and sorts ascending.
///
/// An absent snapshot yields the empty set, so callers rendering before
/// an instance exists get "no events", not a failure. The function is pure:
/// cheap to call on every render, and it never mutates the snapshot.
///
/// # Example
///
/// ```rust
/// use statescope::engine::Interpreter;
/// use statescope::introspect::available_events;
/// use statescope::machine;
///
/// let toggle = machine! {
///     id: "toggle",
///     initial: "inactive",
///     "inactive" => { "TOGGLE" => "active" },
///     "active" => { "TOGGLE" => "inactive" },
/// }
/// .unwrap();
///
/// let instance = Interpreter::new(toggle);
/// let events = available_events(Some(&instance));
/// assert_eq!(events.to_vec(), vec!["TOGGLE"]);
///
/// assert!(available_events(None).is_empty());
/// ```
pub fn available_events(snapshot: Option<&dyn MachineSnapshot>) -> EventSet {
    match snapshot {
        None => EventSet::new(),
        Some(snapshot) => snapshot
            .transitions_from()
            .into_iter()
            .map(|edge| edge.event)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Context, EventMatcher, StateValue, TransitionEdge};

    /// Snapshot stub with a fixed transition enumeration, standing in for
    /// any external engine.
    struct StubSnapshot {
        value: StateValue,
        context: Context,
        edges: Vec<TransitionEdge>,
    }

    impl StubSnapshot {
        fn with_edges(edges: Vec<TransitionEdge>) -> Self {
            StubSnapshot {
                value: StateValue::from("s"),
                context: Context::new(),
                edges,
            }
        }
    }

    impl MachineSnapshot for StubSnapshot {
        fn value(&self) -> &StateValue {
            &self.value
        }

        fn context(&self) -> &Context {
            &self.context
        }

        fn transitions_from(&self) -> Vec<TransitionEdge> {
            self.edges.clone()
        }
    }

    fn edge(event: EventMatcher) -> TransitionEdge {
        TransitionEdge::new("s", event, "t", false)
    }

    #[test]
    fn absent_snapshot_yields_empty_set() {
        assert!(available_events(None).is_empty());
    }

    #[test]
    fn collects_named_events() {
        let snapshot = StubSnapshot::with_edges(vec![
            edge(EventMatcher::named("NEXT")),
            edge(EventMatcher::named("STOP")),
        ]);

        let events = available_events(Some(&snapshot));
        assert_eq!(events.to_vec(), vec!["NEXT", "STOP"]);
    }

    #[test]
    fn wildcard_transitions_never_surface() {
        let snapshot = StubSnapshot::with_edges(vec![
            edge(EventMatcher::Wildcard),
            edge(EventMatcher::named("TOGGLE")),
            edge(EventMatcher::Wildcard),
        ]);

        let events = available_events(Some(&snapshot));
        assert_eq!(events.to_vec(), vec!["TOGGLE"]);
    }

    #[test]
    fn duplicate_event_names_collapse() {
        let snapshot = StubSnapshot::with_edges(vec![
            edge(EventMatcher::named("GO")),
            edge(EventMatcher::named("GO")),
            edge(EventMatcher::named("GO")),
        ]);

        assert_eq!(available_events(Some(&snapshot)).len(), 1);
    }

    #[test]
    fn result_is_sorted_regardless_of_declaration_order() {
        let snapshot = StubSnapshot::with_edges(vec![
            edge(EventMatcher::named("RESET")),
            edge(EventMatcher::named("DECREMENT")),
            edge(EventMatcher::named("INCREMENT")),
        ]);

        let events = available_events(Some(&snapshot));
        assert_eq!(
            events.to_vec(),
            vec!["DECREMENT", "INCREMENT", "RESET"]
        );
    }

    #[test]
    fn guarded_edges_are_enumerated_structurally() {
        let snapshot = StubSnapshot::with_edges(vec![TransitionEdge::new(
            "s",
            EventMatcher::named("OPEN"),
            "t",
            true,
        )]);

        // Guard presence does not hide the event from the set.
        assert!(available_events(Some(&snapshot)).contains("OPEN"));
    }

    #[test]
    fn only_wildcards_means_no_events() {
        let snapshot = StubSnapshot::with_edges(vec![edge(EventMatcher::Wildcard)]);
        assert!(available_events(Some(&snapshot)).is_empty());
    }
}
