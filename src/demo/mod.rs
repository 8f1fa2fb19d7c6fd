//! Generic demo harness: visualizer output plus optional documentation.
//!
//! A [`MachineDemo`] composes the visualizer with optional title,
//! description and machine-source text, for any machine and without
//! machine-specific branching. [`DemoSession`] pairs a demo with a running
//! interpreter so callers get a `dispatch`/`render` surface directly.

use crate::definition::MachineDefinition;
use crate::engine::{Interpreter, MachineSnapshot};
use crate::visualizer::visualize;
use std::fmt::Write as _;

/// Presentation wrapper around the visualizer.
///
/// Every field is optional; a default demo renders only the visualizer
/// section.
///
/// # Example
///
/// ```rust
/// use statescope::demo::MachineDemo;
///
/// let demo = MachineDemo::new()
///     .title("Toggle Machine")
///     .description("A simple on/off toggle demonstrating basic transitions.");
///
/// // No snapshot yet: still renders, with a placeholder state.
/// let text = demo.render(None);
/// assert!(text.contains("Toggle Machine"));
/// assert!(text.contains("(no machine)"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MachineDemo {
    title: Option<String>,
    description: Option<String>,
    source: Option<String>,
}

impl MachineDemo {
    pub fn new() -> Self {
        MachineDemo::default()
    }

    /// Set the display title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the descriptive text shown under the title.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a literal text block of the machine's definition, shown as a
    /// reference section after the visualizer.
    pub fn source_listing(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Render the demo for a snapshot, absent or live.
    pub fn render(&self, snapshot: Option<&dyn MachineSnapshot>) -> String {
        let mut out = String::new();

        if let Some(title) = &self.title {
            let _ = writeln!(out, "== {title} ==");
            let _ = writeln!(out);
        }
        if let Some(description) = &self.description {
            let _ = writeln!(out, "{description}");
            let _ = writeln!(out);
        }

        out.push_str(&visualize(snapshot).render());

        if let Some(source) = &self.source {
            let _ = writeln!(out);
            let _ = writeln!(out, "Machine Definition");
            for line in source.lines() {
                let _ = writeln!(out, "  {line}");
            }
        }

        out
    }
}

/// A demo bound to a running interpreter instance.
pub struct DemoSession {
    demo: MachineDemo,
    instance: Interpreter,
}

impl DemoSession {
    /// Start a session for a definition with a default (undecorated) demo.
    pub fn new(definition: MachineDefinition) -> Self {
        Self::with_demo(definition, MachineDemo::new())
    }

    /// Start a session with a configured demo.
    pub fn with_demo(definition: MachineDefinition, demo: MachineDemo) -> Self {
        DemoSession {
            demo,
            instance: Interpreter::new(definition),
        }
    }

    /// Forward an event to the engine. No pre-validation beyond the
    /// triggers already surfaced by the visualizer; unknown events are the
    /// engine's no-op.
    pub fn dispatch(&mut self, event: &str) -> bool {
        self.instance.send(event)
    }

    /// Render the demo against the current snapshot.
    pub fn render(&self) -> String {
        self.demo.render(Some(&self.instance))
    }

    /// Read-only view of the running instance.
    pub fn snapshot(&self) -> &impl MachineSnapshot {
        &self.instance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::MachineBuilder;

    fn toggle() -> MachineDefinition {
        MachineBuilder::new("toggle")
            .initial("inactive")
            .on("inactive", "TOGGLE", "active")
            .on("active", "TOGGLE", "inactive")
            .build()
            .unwrap()
    }

    #[test]
    fn bare_demo_renders_visualizer_only() {
        let mut session = DemoSession::new(toggle());

        let rendered = session.render();
        assert!(rendered.contains("Current State"));
        assert!(rendered.contains("inactive"));
        assert!(!rendered.contains("=="));
        assert!(!rendered.contains("Machine Definition"));

        // And stays valid across a dispatch.
        assert!(session.dispatch("TOGGLE"));
        assert!(session.render().contains("active"));
    }

    #[test]
    fn optional_sections_render_when_present() {
        let demo = MachineDemo::new()
            .title("Toggle Machine")
            .description("Switches between inactive and active.")
            .source_listing("inactive --TOGGLE--> active\nactive --TOGGLE--> inactive");
        let session = DemoSession::with_demo(toggle(), demo);

        let rendered = session.render();
        assert!(rendered.contains("== Toggle Machine =="));
        assert!(rendered.contains("Switches between inactive and active."));
        assert!(rendered.contains("Machine Definition"));
        assert!(rendered.contains("  inactive --TOGGLE--> active"));
    }

    #[test]
    fn demo_tolerates_absent_snapshot() {
        let demo = MachineDemo::new().title("Pending");
        let rendered = demo.render(None);

        assert!(rendered.contains("== Pending =="));
        assert!(rendered.contains("(no machine)"));
        assert!(!rendered.contains("Available Events"));
    }

    #[test]
    fn dispatch_of_unlisted_event_is_soft() {
        let mut session = DemoSession::new(toggle());
        assert!(!session.dispatch("NO_SUCH_EVENT"));
        assert!(session.render().contains("inactive"));
    }

    #[test]
    fn events_surface_through_the_render() {
        let session = DemoSession::new(toggle());
        assert!(session.render().contains("[TOGGLE]"));
    }

    #[test]
    fn snapshot_exposes_the_read_only_view() {
        let mut session = DemoSession::new(toggle());
        session.dispatch("TOGGLE");
        assert_eq!(session.snapshot().value().to_string(), "active");
    }
}
