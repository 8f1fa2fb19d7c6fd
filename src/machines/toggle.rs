//! A simple toggle machine that switches between "inactive" and
//! "active". Demonstrates the basics of state transitions.

use crate::definition::MachineDefinition;
use crate::machine;

/// Literal definition text, for the demo harness's reference section.
pub const LISTING: &str = r#"machine! {
    id: "toggle",
    initial: "inactive",
    "inactive" => { "TOGGLE" => "active" },
    "active" => { "TOGGLE" => "inactive" },
}"#;

/// Build the toggle machine definition.
pub fn machine() -> MachineDefinition {
    machine! {
        id: "toggle",
        initial: "inactive",
        "inactive" => { "TOGGLE" => "active" },
        "active" => { "TOGGLE" => "inactive" },
    }
    .expect("toggle definition is well-formed")
}
