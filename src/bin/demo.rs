//! Walk the three example machines through the demo harness.

use statescope::demo::{DemoSession, MachineDemo};
use statescope::inspector;
use statescope::machines::{counter, toggle, traffic_light};

fn main() {
    tracing_subscriber::fmt::init();

    inspector::open_inspector();

    run(
        DemoSession::with_demo(
            toggle::machine(),
            MachineDemo::new()
                .title("Toggle Machine")
                .description("A simple on/off toggle demonstrating basic state transitions.")
                .source_listing(toggle::LISTING),
        ),
        &["TOGGLE", "TOGGLE"],
    );

    run(
        DemoSession::with_demo(
            traffic_light::machine(),
            MachineDemo::new()
                .title("Traffic Light Machine")
                .description("A cyclical state machine: green -> yellow -> red -> green.")
                .source_listing(traffic_light::LISTING),
        ),
        &["NEXT", "NEXT", "NEXT"],
    );

    run(
        DemoSession::with_demo(
            counter::machine(),
            MachineDemo::new()
                .title("Counter Machine")
                .description("Demonstrates context (data storage) and actions.")
                .source_listing(counter::LISTING),
        ),
        &["INCREMENT", "INCREMENT", "DECREMENT", "RESET"],
    );
}

fn run(mut session: DemoSession, events: &[&str]) {
    println!("{}", session.render());
    for event in events {
        session.dispatch(event);
        println!("-- after {event} --\n");
        println!("{}", session.render());
    }
    println!("{}", "=".repeat(60));
}
