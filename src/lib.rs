//! Statescope: machine-agnostic introspection and visualization for
//! finite state machines.
//!
//! Statescope defines a handful of example machine topologies and a
//! generic viewer that shows, for whatever machine is running, its state
//! value, its context data, and the set of events it can currently
//! accept. The viewer is built against a read-only snapshot capability,
//! so any compliant automaton engine can sit behind it; a small
//! synchronous interpreter is included to run the examples.
//!
//! # Core Concepts
//!
//! - **StateValue**: flat or hierarchical label for the current state
//! - **EventSet**: deduplicated, sorted, wildcard-free dispatchable events
//! - **MachineSnapshot**: the read-only view introspection works against
//! - **Frame**: the rendered state/events/context/diagnostics view
//!
//! # Example
//!
//! ```rust
//! use statescope::demo::{DemoSession, MachineDemo};
//! use statescope::machines::toggle;
//!
//! let demo = MachineDemo::new()
//!     .title("Toggle Machine")
//!     .source_listing(toggle::LISTING);
//! let mut session = DemoSession::with_demo(toggle::machine(), demo);
//!
//! assert!(session.render().contains("inactive"));
//! session.dispatch("TOGGLE");
//! assert!(session.render().contains("active"));
//! ```

pub mod core;
pub mod definition;
pub mod demo;
pub mod engine;
pub mod inspector;
pub mod introspect;
pub mod machines;
pub mod visualizer;

// Re-export commonly used types
pub use core::{Context, EventMatcher, EventSet, StateValue};
pub use definition::{MachineBuilder, MachineDefinition};
pub use demo::{DemoSession, MachineDemo};
pub use engine::{Interpreter, MachineSnapshot};
pub use introspect::available_events;
pub use visualizer::{visualize, Frame};
