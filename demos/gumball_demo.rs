//! Gumball Machine
//!
//! This example drives the gumball machine through a short sale.
//!
//! Key concepts:
//! - Pure transition table with a console notifier at the edge
//! - Transition listener printing state and context after every event
//! - Self-transitions (dispensing with no quarter) still notify
//!
//! Run with: cargo run --example gumball_demo
//!
//! Log lines go to stderr; the machine's messages go to stdout.

use gumball::service::{ConsoleNotifier, Snapshot};
use gumball::vending::{self, GumballEvent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    println!("=== Gumball Machine ===\n");

    let mut service = vending::service(ConsoleNotifier)?
        .on_transition(|state, context| println!("  -> {}", Snapshot::new(*state, *context)));
    service.start();

    for event in [
        GumballEvent::Dispense,
        GumballEvent::Insert,
        GumballEvent::TurnCrank,
        GumballEvent::Dispense,
    ] {
        println!("\n[{event:?}]");
        service.send(event)?;
    }

    service.stop();

    println!("\nPath taken:");
    for transition in service.history().transitions() {
        println!(
            "  {} --{}--> {}",
            gumball::State::name(&transition.from),
            transition.event,
            gumball::State::name(&transition.to)
        );
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
