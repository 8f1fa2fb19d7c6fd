//! A traffic light machine that cycles green -> yellow -> red -> green.
//! Demonstrates multiple states and a simple cyclical flow.

use crate::definition::MachineDefinition;
use crate::machine;

/// Literal definition text, for the demo harness's reference section.
pub const LISTING: &str = r#"machine! {
    id: "trafficLight",
    initial: "green",
    "green" => { "NEXT" => "yellow" },
    "yellow" => { "NEXT" => "red" },
    "red" => { "NEXT" => "green" },
}"#;

/// Build the traffic light machine definition.
pub fn machine() -> MachineDefinition {
    machine! {
        id: "trafficLight",
        initial: "green",
        "green" => { "NEXT" => "yellow" },
        "yellow" => { "NEXT" => "red" },
        "red" => { "NEXT" => "green" },
    }
    .expect("traffic light definition is well-formed")
}
