//! Default logger example
//!
//! Demonstrates the process-wide logger, configured from the environment.
//!
//! Run with: LOG_SEVERITY=debug LOG_FLAGS=std cargo run --example default_logger

use severity_logger::prelude::*;
use severity_logger::{debugln, global, infof};

fn main() -> Result<()> {
    println!("=== Severity Logger - Default Logger Example ===\n");

    let config = LoggerConfig::from_env()?;
    global::apply(config);
    println!("Configuration: {}", config.to_json()?);

    global::info(&[Operand::text("Application started")]);
    global::debugf(format_args!("pid {}", std::process::id()));
    debugln!(default_logger(), "debug lines need", "LOG_SEVERITY=debug");
    infof!(default_logger(), "{} workers ready", 4);
    global::errorln(&[Operand::text("error lines always show")]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
