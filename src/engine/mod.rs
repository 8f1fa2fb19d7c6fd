//! The execution-engine boundary and a synchronous reference interpreter.
//!
//! Introspection and visualization never depend on a concrete engine.
//! They see running instances through the read-only [`MachineSnapshot`]
//! capability, so any compliant automaton engine can sit behind it. The
//! [`Interpreter`] in this module is one such engine: a small,
//! deterministic, single-threaded dispatcher for the definitions in this
//! crate.

use crate::core::{Context, StateValue, TransitionEdge, TransitionLog, TransitionRecord};
use crate::definition::MachineDefinition;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, trace};
use uuid::Uuid;

/// Read-only view of a running machine instance at a point in time.
///
/// The trait is deliberately narrow: the current state value, the context,
/// and the transitions statically reachable from the current value. Guard
/// predicates are not evaluated for enumeration; edges carry a `guarded`
/// flag instead.
pub trait MachineSnapshot {
    /// The current state value.
    fn value(&self) -> &StateValue;

    /// The instance's context data.
    fn context(&self) -> &Context;

    /// Every transition whose source matches the current state value,
    /// including transitions declared at any active region of a
    /// hierarchical value.
    fn transitions_from(&self) -> Vec<TransitionEdge>;

    /// Full diagnostic dump of the snapshot. Engines may extend this with
    /// their own metadata.
    fn dump(&self) -> Value {
        json!({
            "value": self.value(),
            "context": self.context(),
        })
    }
}

/// A running machine instance with deterministic, synchronous dispatch.
///
/// Dispatch picks the first transition in declaration order whose source
/// matches the current value, whose matcher accepts the event, and whose
/// guard (if any) passes. Events with no matching transition are ignored.
///
/// # Example
///
/// ```rust
/// use statescope::engine::{Interpreter, MachineSnapshot};
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
/// let mut instance = Interpreter::new(toggle);
/// assert_eq!(instance.value().to_string(), "inactive");
///
/// assert!(instance.send("TOGGLE"));
/// assert_eq!(instance.value().to_string(), "active");
///
/// assert!(!instance.send("UNKNOWN"));
/// assert_eq!(instance.value().to_string(), "active");
/// ```
pub struct Interpreter {
    definition: Arc<MachineDefinition>,
    id: Uuid,
    started_at: DateTime<Utc>,
    current: StateValue,
    context: Context,
    log: TransitionLog,
}

impl Interpreter {
    /// Create a running instance from a definition.
    pub fn new(definition: MachineDefinition) -> Self {
        Self::from_arc(Arc::new(definition))
    }

    /// Create a running instance from a shared definition.
    pub fn from_arc(definition: Arc<MachineDefinition>) -> Self {
        let current = definition.initial().clone();
        let context = definition.initial_context().clone();
        Interpreter {
            definition,
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            current,
            context,
            log: TransitionLog::new(),
        }
    }

    /// Unique id of this instance.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The definition this instance runs.
    pub fn definition(&self) -> &MachineDefinition {
        &self.definition
    }

    /// The transitions fired so far.
    pub fn log(&self) -> &TransitionLog {
        &self.log
    }

    /// Dispatch an event to the instance.
    ///
    /// Returns `true` when a transition fired. Events with no matching
    /// transition are a no-op, never an error.
    pub fn send(&mut self, event: &str) -> bool {
        let definition = Arc::clone(&self.definition);
        let matched = definition.transitions().iter().find(|transition| {
            self.current.contains(&transition.source)
                && transition.event.accepts(event)
                && transition
                    .guard
                    .as_ref()
                    .is_none_or(|guard| guard.check(&self.current, &self.context))
        });

        let Some(transition) = matched else {
            trace!(machine = definition.id(), event, "event ignored");
            return false;
        };

        if let Some(action) = &transition.action {
            action(&mut self.context);
        }

        let next = transition
            .target
            .clone()
            .unwrap_or_else(|| self.current.clone());
        debug!(
            machine = definition.id(),
            event,
            from = %self.current,
            to = %next,
            "transition fired"
        );

        self.log = self.log.record(TransitionRecord {
            from: self.current.clone(),
            to: next.clone(),
            event: event.to_string(),
            timestamp: Utc::now(),
        });
        self.current = next;
        true
    }
}

impl MachineSnapshot for Interpreter {
    fn value(&self) -> &StateValue {
        &self.current
    }

    fn context(&self) -> &Context {
        &self.context
    }

    fn transitions_from(&self) -> Vec<TransitionEdge> {
        self.definition
            .transitions()
            .iter()
            .filter(|transition| self.current.contains(&transition.source))
            .map(|transition| transition.edge())
            .collect()
    }

    fn dump(&self) -> Value {
        json!({
            "machine": self.definition.id(),
            "instance": self.id,
            "startedAt": self.started_at,
            "value": &self.current,
            "context": &self.context,
            "log": self.log.records(),
        })
    }
}
