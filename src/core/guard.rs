//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions over the current state value and
//! context. They decide whether a transition may fire on dispatch; the
//! introspection layer only records their presence, never evaluates them.

use super::context::Context;
use super::value::StateValue;

/// Pure predicate that determines if a transition can fire.
///
/// # Example
///
/// ```rust
/// use statescope::core::{Context, Guard, StateValue};
///
/// let non_negative = Guard::new(|_value, context: &Context| {
///     context.get_i64("count").unwrap_or(0) > 0
/// });
///
/// let mut context = Context::new();
/// context.set("count", 0);
/// assert!(!non_negative.check(&StateValue::from("active"), &context));
///
/// context.set("count", 3);
/// assert!(non_negative.check(&StateValue::from("active"), &context));
/// ```
pub struct Guard {
    predicate: Box<dyn Fn(&StateValue, &Context) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&StateValue, &Context) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the predicate against a snapshot's value and context.
    pub fn check(&self, value: &StateValue, context: &Context) -> bool {
        (self.predicate)(value, context)
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Guard(..)")
    }
}
