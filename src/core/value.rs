//! State values for running machine instances.
//!
//! A `StateValue` identifies which state (or, for hierarchical machines,
//! which states) an instance currently occupies. Values are immutable and
//! compare structurally.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The (possibly nested) label identifying a machine's current position.
///
/// Flat machines use a single [`StateValue::Leaf`] label. Hierarchical
/// machines nest a child value per region under [`StateValue::Compound`].
/// The serde representation is untagged, so values round-trip as the
/// natural JSON forms `"green"` and `{"lights": "green"}`.
///
/// # Example
///
/// ```rust
/// use statescope::core::StateValue;
///
/// let flat = StateValue::from("green");
/// assert_eq!(flat.to_string(), "green");
///
/// let nested = StateValue::compound([("lights", StateValue::from("green"))]);
/// assert_eq!(nested.to_string(), r#"{"lights":"green"}"#);
/// assert!(nested.contains(&StateValue::from("green")));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    /// A single flat state label.
    Leaf(String),
    /// One child value per active region.
    Compound(BTreeMap<String, StateValue>),
}

impl StateValue {
    /// Create a flat state value.
    pub fn leaf(label: impl Into<String>) -> Self {
        StateValue::Leaf(label.into())
    }

    /// Create a hierarchical state value from region/child pairs.
    pub fn compound<K, I>(regions: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, StateValue)>,
    {
        StateValue::Compound(
            regions
                .into_iter()
                .map(|(region, child)| (region.into(), child))
                .collect(),
        )
    }

    /// The flat label, if this value is a leaf.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            StateValue::Leaf(label) => Some(label),
            StateValue::Compound(_) => None,
        }
    }

    /// Whether `other` is active within this value.
    ///
    /// True when the values are structurally equal, or when `other` matches
    /// any active region of a compound value at any depth. This is the
    /// matching rule used to enumerate transitions from hierarchical states:
    /// a transition declared at an active region applies to the whole value.
    pub fn contains(&self, other: &StateValue) -> bool {
        if self == other {
            return true;
        }
        match self {
            StateValue::Leaf(_) => false,
            StateValue::Compound(regions) => {
                regions.values().any(|child| child.contains(other))
            }
        }
    }

    /// Canonical textual form: leaf labels verbatim, compound values as
    /// compact JSON with regions in sorted order.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Leaf(label) => f.write_str(label),
            StateValue::Compound(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl From<&str> for StateValue {
    fn from(label: &str) -> Self {
        StateValue::Leaf(label.to_string())
    }
}

impl From<String> for StateValue {
    fn from(label: String) -> Self {
        StateValue::Leaf(label)
    }
}
