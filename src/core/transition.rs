//! The pure transition tuple consumed by introspection.

use super::event::EventMatcher;
use super::value::StateValue;
use serde::{Deserialize, Serialize};

/// A single outgoing transition, projected to pure data.
///
/// This is the shape the introspection engine enumerates: where the
/// transition leaves from, what it matches, where it lands, and whether a
/// guard is attached. Guard presence is carried as a flag only; the
/// predicate itself stays with the machine definition and is never
/// evaluated during enumeration.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TransitionEdge {
    /// State value the transition is declared on.
    pub source: StateValue,
    /// Event matcher, concrete or catch-all.
    pub event: EventMatcher,
    /// State value the transition lands on. Internal transitions land on
    /// their own source.
    pub target: StateValue,
    /// Whether a guard predicate is attached.
    pub guarded: bool,
}

impl TransitionEdge {
    pub fn new(
        source: impl Into<StateValue>,
        event: EventMatcher,
        target: impl Into<StateValue>,
        guarded: bool,
    ) -> Self {
        TransitionEdge {
            source: source.into(),
            event,
            target: target.into(),
            guarded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_holds_tuple_fields() {
        let edge = TransitionEdge::new(
            "inactive",
            EventMatcher::named("TOGGLE"),
            "active",
            false,
        );

        assert_eq!(edge.source, StateValue::from("inactive"));
        assert_eq!(edge.event, EventMatcher::named("TOGGLE"));
        assert_eq!(edge.target, StateValue::from("active"));
        assert!(!edge.guarded);
    }

    #[test]
    fn edge_serializes_for_diagnostics() {
        let edge = TransitionEdge::new("a", EventMatcher::Wildcard, "b", true);
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["source"], "a");
        assert_eq!(json["guarded"], true);
    }
}
