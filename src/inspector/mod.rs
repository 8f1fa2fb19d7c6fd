//! Process-wide handle to an external visualization surface.
//!
//! The inspector is an out-of-process tool that renders live machine
//! diagrams. This module only manages the handle: development builds get
//! a real handle that can be started manually, every other build gets a
//! stub with the same shape and no-op bodies. There is no stop: the
//! external surface is closed by the user, and the handle never assumes
//! it was.
//!
//! Known limitation: if the surface fails to open (for example a blocked
//! popup), the handle does not detect or report it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use tracing::{debug, info};

/// Default endpoint the real handle points the surface at.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3333/inspect";

/// Which flavor of handle the factory should produce.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EnvironmentMode {
    Development,
    Production,
}

impl EnvironmentMode {
    /// Resolve the mode once at process start: the `STATESCOPE_ENV`
    /// variable wins, otherwise debug builds are development and release
    /// builds are production.
    pub fn detect() -> Self {
        match std::env::var("STATESCOPE_ENV").ok().as_deref() {
            Some("development") | Some("dev") => EnvironmentMode::Development,
            Some(_) => EnvironmentMode::Production,
            None => {
                if cfg!(debug_assertions) {
                    EnvironmentMode::Development
                } else {
                    EnvironmentMode::Production
                }
            }
        }
    }
}

/// Configuration recognized by the handle factory.
#[derive(Clone, Debug)]
pub struct InspectorConfig {
    /// Start the surface as soon as the handle is constructed. Off by
    /// default; pages trigger the start manually.
    pub auto_start: bool,
    /// Where the external surface lives.
    pub endpoint: String,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        InspectorConfig {
            auto_start: false,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Shape shared by the real handle and the production stub.
pub trait VisualizationHandle: Send + Sync {
    /// Open the external visualization surface. Idempotent: repeated
    /// starts are not an error and have no additional effect.
    fn start(&self);

    /// Present for interface parity with the external tool; unused here.
    fn disconnect(&self);

    /// Whether `start` has been invoked on this handle.
    fn started(&self) -> bool;
}

/// Development handle holding the one piece of process-wide mutable state.
struct RealHandle {
    endpoint: String,
    started: AtomicBool,
}

impl RealHandle {
    fn new(config: InspectorConfig) -> Self {
        let handle = RealHandle {
            endpoint: config.endpoint,
            started: AtomicBool::new(false),
        };
        if config.auto_start {
            handle.start();
        }
        handle
    }
}

impl VisualizationHandle for RealHandle {
    fn start(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!(endpoint = %self.endpoint, "inspector already started");
            return;
        }
        // Opening the surface is delegated to the environment; whether the
        // window actually appears is not observable from here.
        info!(endpoint = %self.endpoint, "opening inspector surface");
    }

    fn disconnect(&self) {}

    fn started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }
}

/// Stub substituted outside development; same shape, no-op bodies.
struct NoOpHandle;

impl VisualizationHandle for NoOpHandle {
    fn start(&self) {}

    fn disconnect(&self) {}

    fn started(&self) -> bool {
        false
    }
}

/// Build a handle for the given mode.
pub fn build_handle(
    mode: EnvironmentMode,
    config: InspectorConfig,
) -> Box<dyn VisualizationHandle> {
    match mode {
        EnvironmentMode::Development => Box::new(RealHandle::new(config)),
        EnvironmentMode::Production => Box::new(NoOpHandle),
    }
}

static INSPECTOR: OnceLock<Box<dyn VisualizationHandle>> = OnceLock::new();

/// The process-wide inspector handle, created on first access from the
/// detected environment mode with the default configuration.
pub fn inspector() -> &'static dyn VisualizationHandle {
    INSPECTOR
        .get_or_init(|| build_handle(EnvironmentMode::detect(), InspectorConfig::default()))
        .as_ref()
}

/// Manually open the inspector surface.
pub fn open_inspector() {
    inspector().start();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_mode_builds_a_startable_handle() {
        let handle = build_handle(EnvironmentMode::Development, InspectorConfig::default());

        assert!(!handle.started());
        handle.start();
        assert!(handle.started());
    }

    #[test]
    fn start_is_idempotent() {
        let handle = build_handle(EnvironmentMode::Development, InspectorConfig::default());

        handle.start();
        handle.start();
        assert!(handle.started());
    }

    #[test]
    fn production_handle_is_a_stub() {
        let handle = build_handle(EnvironmentMode::Production, InspectorConfig::default());

        handle.start();
        handle.disconnect();
        assert!(!handle.started());
    }

    #[test]
    fn auto_start_opens_on_construction() {
        let config = InspectorConfig {
            auto_start: true,
            ..InspectorConfig::default()
        };
        let handle = build_handle(EnvironmentMode::Development, config);

        assert!(handle.started());
    }

    #[test]
    fn disconnect_does_not_track_closure() {
        let handle = build_handle(EnvironmentMode::Development, InspectorConfig::default());

        handle.start();
        handle.disconnect();
        // The handle never assumes the surface closed.
        assert!(handle.started());
    }

    #[test]
    fn process_wide_handle_is_the_same_instance() {
        let first = inspector() as *const dyn VisualizationHandle;
        let second = inspector() as *const dyn VisualizationHandle;
        assert_eq!(first.cast::<()>(), second.cast::<()>());
    }
}
