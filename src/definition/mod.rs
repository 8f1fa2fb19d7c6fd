//! Machine definitions: finite automaton topologies as pure data.
//!
//! A [`MachineDefinition`] is an identifier, an initial state value, an
//! initial context, and a table of outgoing transitions. Definitions are
//! immutable once built and carry no runtime state; running instances are
//! created from them by the engine.

pub mod builder;
pub mod error;
pub mod macros;

pub use builder::MachineBuilder;
pub use error::{BuildError, DefinitionError};

use crate::core::{Context, EventMatcher, Guard, StateValue, TransitionEdge};
use std::collections::BTreeSet;
use std::sync::Arc;

/// An action run against the instance context when its transition fires.
pub type ContextAction = Arc<dyn Fn(&mut Context) + Send + Sync>;

/// A definition-level transition: matcher, optional target, optional guard
/// and optional context action.
///
/// A `None` target marks an internal transition: the state value stays
/// put and only the action's context change is observable.
pub struct TransitionDef {
    pub source: StateValue,
    pub event: EventMatcher,
    pub target: Option<StateValue>,
    pub guard: Option<Guard>,
    pub action: Option<ContextAction>,
}

impl TransitionDef {
    /// A plain edge from one state to another on a named event.
    pub fn new(
        source: impl Into<StateValue>,
        event: EventMatcher,
        target: impl Into<StateValue>,
    ) -> Self {
        TransitionDef {
            source: source.into(),
            event,
            target: Some(target.into()),
            guard: None,
            action: None,
        }
    }

    /// An internal transition: no state change, only a context action.
    pub fn internal<F>(source: impl Into<StateValue>, event: EventMatcher, action: F) -> Self
    where
        F: Fn(&mut Context) + Send + Sync + 'static,
    {
        TransitionDef {
            source: source.into(),
            event,
            target: None,
            guard: None,
            action: Some(Arc::new(action)),
        }
    }

    /// Attach a guard predicate.
    pub fn guarded(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Where this transition lands; internal transitions land on their
    /// own source.
    pub fn resolved_target(&self) -> &StateValue {
        self.target.as_ref().unwrap_or(&self.source)
    }

    /// Project to the pure tuple the introspection layer consumes.
    pub fn edge(&self) -> TransitionEdge {
        TransitionEdge {
            source: self.source.clone(),
            event: self.event.clone(),
            target: self.resolved_target().clone(),
            guarded: self.guard.is_some(),
        }
    }
}

/// An immutable description of a finite automaton.
///
/// # Example
///
/// ```rust
/// use statescope::definition::MachineDefinition;
///
/// let toggle = MachineDefinition::builder("toggle")
///     .initial("inactive")
///     .on("inactive", "TOGGLE", "active")
///     .on("active", "TOGGLE", "inactive")
///     .build()
///     .unwrap();
///
/// assert_eq!(toggle.id(), "toggle");
/// assert_eq!(toggle.transitions().len(), 2);
/// ```
pub struct MachineDefinition {
    id: String,
    initial: StateValue,
    context: Context,
    transitions: Vec<TransitionDef>,
}

impl MachineDefinition {
    pub(crate) fn from_parts(
        id: String,
        initial: StateValue,
        context: Context,
        transitions: Vec<TransitionDef>,
    ) -> Self {
        MachineDefinition {
            id,
            initial,
            context,
            transitions,
        }
    }

    /// Start building a definition with the given identifier.
    pub fn builder(id: impl Into<String>) -> MachineBuilder {
        MachineBuilder::new(id)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn initial(&self) -> &StateValue {
        &self.initial
    }

    pub fn initial_context(&self) -> &Context {
        &self.context
    }

    pub fn transitions(&self) -> &[TransitionDef] {
        &self.transitions
    }

    /// The states this definition declares: the initial value plus every
    /// transition source.
    pub fn declared_states(&self) -> BTreeSet<&StateValue> {
        let mut states: BTreeSet<&StateValue> =
            self.transitions.iter().map(|t| &t.source).collect();
        states.insert(&self.initial);
        states
    }

    /// Opt-in structural check: report any transition whose target is not
    /// a declared state. Construction never runs this; undeclared
    /// reachability is accepted by default and only surfaced on demand.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let declared = self.declared_states();
        for transition in &self.transitions {
            if let Some(target) = &transition.target {
                if !declared.contains(target) {
                    return Err(DefinitionError::DanglingTarget {
                        source: transition.source.canonical(),
                        event: transition
                            .event
                            .name()
                            .unwrap_or("*")
                            .to_string(),
                        target: target.canonical(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_states_cover_initial_and_sources() {
        let definition = MachineDefinition::builder("lights")
            .initial("green")
            .on("green", "NEXT", "yellow")
            .on("yellow", "NEXT", "green")
            .build()
            .unwrap();

        let declared = definition.declared_states();
        assert!(declared.contains(&StateValue::from("green")));
        assert!(declared.contains(&StateValue::from("yellow")));
        assert_eq!(declared.len(), 2);
    }

    #[test]
    fn dangling_target_passes_build_but_fails_validate() {
        let definition = MachineDefinition::builder("broken")
            .initial("start")
            .on("start", "GO", "nowhere")
            .build()
            .unwrap();

        let err = definition.validate().unwrap_err();
        assert!(matches!(err, DefinitionError::DanglingTarget { .. }));
        assert!(err.to_string().contains("nowhere"));
    }

    #[test]
    fn internal_transitions_resolve_to_their_source() {
        let def = TransitionDef::internal("active", EventMatcher::named("RESET"), |context| {
            context.set("count", 0);
        });

        assert_eq!(def.resolved_target(), &StateValue::from("active"));
        let edge = def.edge();
        assert_eq!(edge.target, StateValue::from("active"));
        assert!(!edge.guarded);
    }

    #[test]
    fn validate_accepts_internal_transitions() {
        let definition = MachineDefinition::builder("counter")
            .initial("active")
            .on_internal("active", "RESET", |context| context.set("count", 0))
            .build()
            .unwrap();

        assert!(definition.validate().is_ok());
    }

    #[test]
    fn edge_carries_guard_presence() {
        let def = TransitionDef::new("a", EventMatcher::named("GO"), "b")
            .guarded(Guard::new(|_, _| true));

        assert!(def.edge().guarded);
    }
}
