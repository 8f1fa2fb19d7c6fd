//! Fluent builder for machine definitions.

use super::error::BuildError;
use super::{MachineDefinition, TransitionDef};
use crate::core::{Context, EventMatcher, Guard, StateValue};
use serde_json::Value;

/// Builder for constructing machine definitions with a fluent API.
///
/// The builder validates only its own required fields; it never inspects
/// reachability of transition targets (see
/// [`MachineDefinition::validate`]).
///
/// # Example
///
/// ```rust
/// use statescope::definition::MachineBuilder;
///
/// let lights = MachineBuilder::new("trafficLight")
///     .initial("green")
///     .on("green", "NEXT", "yellow")
///     .on("yellow", "NEXT", "red")
///     .on("red", "NEXT", "green")
///     .build()
///     .unwrap();
///
/// assert_eq!(lights.initial().to_string(), "green");
/// ```
pub struct MachineBuilder {
    id: String,
    initial: Option<StateValue>,
    context: Context,
    transitions: Vec<TransitionDef>,
}

impl MachineBuilder {
    /// Create a new builder for the given machine identifier.
    pub fn new(id: impl Into<String>) -> Self {
        MachineBuilder {
            id: id.into(),
            initial: None,
            context: Context::new(),
            transitions: Vec::new(),
        }
    }

    /// Set the initial state value (required).
    pub fn initial(mut self, value: impl Into<StateValue>) -> Self {
        self.initial = Some(value.into());
        self
    }

    /// Seed the initial context with a key/value pair.
    pub fn context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.set(key, value);
        self
    }

    /// Add a plain edge: `source --event--> target`.
    pub fn on(
        mut self,
        source: impl Into<StateValue>,
        event: impl Into<String>,
        target: impl Into<StateValue>,
    ) -> Self {
        self.transitions.push(TransitionDef::new(
            source,
            EventMatcher::Named(event.into()),
            target,
        ));
        self
    }

    /// Add a catch-all edge matching any event from `source`.
    pub fn on_any(
        mut self,
        source: impl Into<StateValue>,
        target: impl Into<StateValue>,
    ) -> Self {
        self.transitions
            .push(TransitionDef::new(source, EventMatcher::Wildcard, target));
        self
    }

    /// Add a guarded edge.
    pub fn on_guarded(
        mut self,
        source: impl Into<StateValue>,
        event: impl Into<String>,
        target: impl Into<StateValue>,
        guard: Guard,
    ) -> Self {
        self.transitions.push(
            TransitionDef::new(source, EventMatcher::Named(event.into()), target).guarded(guard),
        );
        self
    }

    /// Add an internal transition: the event runs a context action and the
    /// state value stays put.
    pub fn on_internal<F>(
        mut self,
        source: impl Into<StateValue>,
        event: impl Into<String>,
        action: F,
    ) -> Self
    where
        F: Fn(&mut Context) + Send + Sync + 'static,
    {
        self.transitions.push(TransitionDef::internal(
            source,
            EventMatcher::Named(event.into()),
            action,
        ));
        self
    }

    /// Add a pre-built transition.
    pub fn transition(mut self, transition: TransitionDef) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Build the definition.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<MachineDefinition, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        Ok(MachineDefinition::from_parts(
            self.id,
            initial,
            self.context,
            self.transitions,
        ))
    }
}
