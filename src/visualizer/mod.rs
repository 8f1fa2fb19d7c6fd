//! Generic rendering of a running machine's observable facets.
//!
//! The visualizer knows nothing about the machine it renders. It projects
//! a snapshot into a [`Frame`] (state value, event triggers, context dump
//! and a full diagnostic dump) and formats frames as plain text sections.

use crate::core::{Context, EventSet, StateValue};
use crate::engine::MachineSnapshot;
use crate::introspect::available_events;
use serde_json::Value;
use std::fmt;
use std::fmt::Write as _;

/// Placeholder shown when no machine instance exists yet.
const NO_MACHINE: &str = "(no machine)";

/// A rendered view of one snapshot.
///
/// `state`, `events` and `context` back the three primary sections;
/// `diagnostics` is the full snapshot dump, always present but only
/// emitted by the opt-in [`Frame::render_full`].
#[derive(Clone, PartialEq, Debug)]
pub struct Frame {
    /// Canonical display form of the current state value.
    pub state: String,
    /// Sorted event names, one trigger each. Dispatching a trigger sends
    /// the payload-less event by name.
    pub events: Vec<String>,
    /// Pretty context dump, `None` when the context is empty.
    pub context: Option<String>,
    /// Full snapshot dump: state, context and engine metadata.
    pub diagnostics: String,
}

impl Frame {
    /// Compose a frame from the three observable facets plus the dump.
    pub fn compose(
        value: &StateValue,
        context: &Context,
        events: &EventSet,
        dump: &Value,
    ) -> Self {
        Frame {
            state: value.to_string(),
            events: events.to_vec(),
            context: if context.is_empty() {
                None
            } else {
                Some(context.pretty())
            },
            diagnostics: serde_json::to_string_pretty(dump).unwrap_or_default(),
        }
    }

    /// The frame rendered before any machine instance exists.
    pub fn empty() -> Self {
        Frame {
            state: NO_MACHINE.to_string(),
            events: Vec::new(),
            context: None,
            diagnostics: "null".to_string(),
        }
    }

    /// Render the primary sections: state, events (omitted when none),
    /// context (omitted when empty).
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Current State");
        let _ = writeln!(out, "  {}", self.state);

        if !self.events.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Available Events");
            let triggers: Vec<String> =
                self.events.iter().map(|e| format!("[{e}]")).collect();
            let _ = writeln!(out, "  {}", triggers.join(" "));
        }

        if let Some(context) = &self.context {
            let _ = writeln!(out);
            let _ = writeln!(out, "Context");
            let _ = writeln!(out, "{}", indent(context));
        }

        out
    }

    /// Render the primary sections plus the full snapshot dump.
    pub fn render_full(&self) -> String {
        let mut out = self.render();
        let _ = writeln!(out);
        let _ = writeln!(out, "Full Snapshot");
        let _ = writeln!(out, "{}", indent(&self.diagnostics));
        out
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Project a snapshot into a frame, computing its event set on the way.
///
/// `None` produces the placeholder frame rather than an error, so callers
/// can render before an instance exists.
pub fn visualize(snapshot: Option<&dyn MachineSnapshot>) -> Frame {
    match snapshot {
        None => Frame::empty(),
        Some(snapshot) => {
            let events = available_events(Some(snapshot));
            Frame::compose(snapshot.value(), snapshot.context(), &events, &snapshot.dump())
        }
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
