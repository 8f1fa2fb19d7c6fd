//! A counter machine demonstrating context (data storage) and actions.
//!
//! The counter has a single state; `INCREMENT`, `DECREMENT` and `RESET`
//! are internal transitions that only mutate the `count` context field.

use crate::core::Context;
use crate::definition::{MachineBuilder, MachineDefinition};

/// Literal definition text, for the demo harness's reference section.
pub const LISTING: &str = r#"MachineBuilder::new("counter")
    .initial("active")
    .context("count", 0)
    .on_internal("active", "INCREMENT", |ctx| adjust(ctx, 1))
    .on_internal("active", "DECREMENT", |ctx| adjust(ctx, -1))
    .on_internal("active", "RESET", |ctx| ctx.set("count", 0))
    .build()"#;

fn adjust(context: &mut Context, delta: i64) {
    let count = context.get_i64("count").unwrap_or(0);
    context.set("count", count + delta);
}

/// Build the counter machine definition.
pub fn machine() -> MachineDefinition {
    MachineBuilder::new("counter")
        .initial("active")
        .context("count", 0)
        .on_internal("active", "INCREMENT", |ctx| adjust(ctx, 1))
        .on_internal("active", "DECREMENT", |ctx| adjust(ctx, -1))
        .on_internal("active", "RESET", |ctx| ctx.set("count", 0))
        .build()
        .expect("counter definition is well-formed")
}
