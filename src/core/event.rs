//! Event matchers and the set of currently dispatchable events.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What a transition matches against an incoming event.
///
/// Catch-all transitions are a distinct variant rather than a sentinel
/// event name, so introspection can filter them out without string
/// comparisons against a magic marker.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum EventMatcher {
    /// Matches exactly one event name.
    Named(String),
    /// Matches any event.
    Wildcard,
}

impl EventMatcher {
    /// Create a matcher for a concrete event name.
    pub fn named(name: impl Into<String>) -> Self {
        EventMatcher::Named(name.into())
    }

    /// Whether an incoming event satisfies this matcher.
    pub fn accepts(&self, event: &str) -> bool {
        match self {
            EventMatcher::Named(name) => name == event,
            EventMatcher::Wildcard => true,
        }
    }

    /// The concrete event name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            EventMatcher::Named(name) => Some(name),
            EventMatcher::Wildcard => None,
        }
    }
}

/// The deduplicated, sorted collection of event names currently
/// dispatchable from a snapshot.
///
/// Backed by a `BTreeSet`, so insertion order is irrelevant and iteration
/// is always lexicographically ascending. Wildcard matchers are silently
/// discarded on insert; the set only ever holds concrete names.
///
/// # Example
///
/// ```rust
/// use statescope::core::{EventMatcher, EventSet};
///
/// let events: EventSet = [
///     EventMatcher::named("TOGGLE"),
///     EventMatcher::Wildcard,
///     EventMatcher::named("TOGGLE"),
///     EventMatcher::named("RESET"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(events.to_vec(), vec!["RESET", "TOGGLE"]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventSet(BTreeSet<String>);

impl EventSet {
    /// Create an empty event set.
    pub fn new() -> Self {
        EventSet(BTreeSet::new())
    }

    /// Add the matcher's event name, ignoring wildcards and duplicates.
    pub fn insert(&mut self, matcher: &EventMatcher) {
        if let Some(name) = matcher.name() {
            self.0.insert(name.to_string());
        }
    }

    /// Whether the set holds no event names.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct event names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether a concrete event name is present.
    pub fn contains(&self, event: &str) -> bool {
        self.0.contains(event)
    }

    /// Event names in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Materialize the sorted names, for display and trigger generation.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl FromIterator<EventMatcher> for EventSet {
    fn from_iter<I: IntoIterator<Item = EventMatcher>>(matchers: I) -> Self {
        let mut set = EventSet::new();
        for matcher in matchers {
            set.insert(&matcher);
        }
        set
    }
}

impl<'a> FromIterator<&'a EventMatcher> for EventSet {
    fn from_iter<I: IntoIterator<Item = &'a EventMatcher>>(matchers: I) -> Self {
        let mut set = EventSet::new();
        for matcher in matchers {
            set.insert(matcher);
        }
        set
    }
}
