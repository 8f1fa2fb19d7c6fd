//! Example machine definitions.
//!
//! Three small, well-known automata used by the demos: a toggle, a
//! counter, and a traffic light. Each module exposes the definition plus
//! a literal source listing for the harness's reference section.

pub mod counter;
pub mod toggle;
pub mod traffic_light;
