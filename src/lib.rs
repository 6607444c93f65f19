//! # Severity Logger
//!
//! A small severity-filtered line logger.
//!
//! ## Features
//!
//! - **Three Severities**: `debug < info < error`, with lines below the
//!   configured minimum discarded
//! - **Fixed Line Format**: `[date ][time[.micros] ][file:line: ]LEVEL: message`
//! - **Thread Safe**: Logging and reconfiguration from any number of threads
//! - **Default Instance**: A process-wide logger on standard error, driven by
//!   the free functions in [`global`]
//!
//! ## Example
//!
//! ```
//! use severity_logger::prelude::*;
//! use severity_logger::{infof, infoln};
//!
//! let logger = Logger::new(Severity::Info, Flags::STD, std::io::stderr());
//! infoln!(logger, "connected to", "db-01");
//! infof!(logger, "{} rows loaded", 1024);
//! ```

pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Flags, Logger, LoggerBuilder, LoggerConfig, LoggerError, Operand, Result, Severity,
    };
    pub use crate::global::default_logger;
}

pub use core::{
    Flags, Logger, LoggerBuilder, LoggerConfig, LoggerError, Operand, Result, Severity, Timestamp,
};
pub use global::default_logger;
