//! Strict Configuration
//!
//! This example shows the lenient default constructor next to the opt-in
//! validation path.
//!
//! Key concepts:
//! - `Fsm::new` accepts any configuration
//! - `Config::validate` reports every inconsistency at once
//! - `Fsm::strict` refuses inconsistent configurations
//!
//! Run with: cargo run --example strict_config

use rewind::{ConfigBuilder, ConfigError, Fsm};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Strict Configuration Example ===\n");

    let config = ConfigBuilder::new()
        .initial("draft")
        .state("draft", |s| s.on("submit", "review"))
        .state("review", |s| s.on("approve", "published").on("reject", "draft"))
        .build()?;

    let mut lenient = Fsm::new(config.clone());
    lenient.trigger("submit")?;
    lenient.trigger("approve")?;
    println!("Lenient machine reached undeclared state: {}", lenient.get_state());
    println!("It has no way out: {:?}", lenient.trigger("submit").err());

    match Fsm::strict(config) {
        Err(ConfigError::Invalid { violations }) => {
            println!("\nStrict construction refused:");
            for violation in violations {
                println!("  - {violation}");
            }
        }
        Err(e) => return Err(e.into()),
        Ok(_) => println!("\nStrict construction succeeded"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
