//! Basic logger usage example
//!
//! Demonstrates the three logging styles, severity filtering and metadata
//! flags on a logger writing to standard error.
//!
//! Run with: cargo run --example basic_usage

use severity_logger::prelude::*;
use severity_logger::{debug, debugln, error, errorf, info, infof, infoln};

fn main() -> Result<()> {
    println!("=== Severity Logger - Basic Usage Example ===\n");

    let logger = Logger::new(Severity::Debug, Flags::NONE, std::io::stderr());

    println!("1. Logging at every severity:");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    error!(logger, "This is an error message");

    println!("\n2. Print, format and line styles:");
    info!(logger, "items=", 3, 4);
    infof!(logger, "{} of {} tasks done", 3, 4);
    infoln!(logger, "tasks", 3, "of", 4, "done");

    println!("\n3. Minimum severity set to INFO - debug won't show:");
    logger.set_severity(Severity::Info);
    debug!(logger, "Debug message (hidden)");
    info!(logger, "Info message (visible)");

    println!("\n4. Date, time and caller metadata:");
    logger.set_flags(Flags::STD | Flags::MICROSECONDS | Flags::SHORT_FILE);
    errorf!(logger, "disk {}% full", 91);
    debugln!(logger, "still hidden");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
