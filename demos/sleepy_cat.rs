//! Sleepy Cat
//!
//! This example drives a small JSON-configured machine through events,
//! undo and redo, with the engine's debug events printed to stderr.
//!
//! Key concepts:
//! - Loading a configuration from JSON
//! - Event-triggered transitions
//! - Linear undo/redo history
//!
//! Run with: RUST_LOG=rewind=debug cargo run --example sleepy_cat

use rewind::{Config, Fsm};
use tracing_subscriber::EnvFilter;

const CAT: &str = r#"{
    "initial": "normal",
    "states": {
        "normal":   { "transitions": { "lick": "sleeping", "feed": "eating" } },
        "sleeping": { "transitions": { "timeout": "normal" } },
        "eating":   { "transitions": { "timeout": "normal", "lick": "sleeping" } }
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("=== Sleepy Cat ===\n");

    let mut cat = Fsm::new(Config::from_json(CAT)?);
    println!("States: {:?}", cat.get_states(None));
    println!("States that react to 'lick': {:?}", cat.get_states(Some("lick")));
    println!("Initial state: {}\n", cat.get_state());

    for event in ["feed", "lick", "timeout"] {
        cat.trigger(event)?;
        println!("{event:>8} -> {}", cat.get_state());
    }

    if let Err(e) = cat.trigger("timeout") {
        println!("\nRejected: {e}");
    }

    println!("\nUndoing:");
    while cat.undo() {
        println!("  back to {}", cat.get_state());
    }

    println!("Redoing:");
    while cat.redo() {
        println!("  forward to {}", cat.get_state());
    }

    cat.reset();
    println!("\nAfter reset: {}", cat.get_state());
    println!("Undo entries: {:?}", cat.history().undo_stack());

    println!("\n=== Example Complete ===");
    Ok(())
}
