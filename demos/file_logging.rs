//! File logging example
//!
//! Demonstrates logging to a file and switching the output at runtime.
//!
//! Run with: cargo run --example file_logging

use severity_logger::prelude::*;
use severity_logger::{debug, error, info, infof};
use std::fs::OpenOptions;

fn main() -> Result<()> {
    println!("=== Severity Logger - File Logging Example ===\n");

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("application.log")?;

    let logger = Logger::builder()
        .severity(Severity::Info)
        .flags(Flags::STD | Flags::SHORT_FILE)
        .output(file)
        .build();

    println!("1. Logging to 'application.log':");
    info!(logger, "Application started");
    debug!(logger, "Loading configuration...");
    info!(logger, "Configuration loaded successfully");
    error!(logger, "Failed to load optional plugin");

    for i in 1..=5 {
        infof!(logger, "Processing item {}/5", i);
    }

    println!("\n2. Switching output to standard error:");
    logger.set_output(std::io::stderr());
    info!(logger, "All operations completed");

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
