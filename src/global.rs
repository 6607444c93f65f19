//! Process-wide default logger
//!
//! The default logger writes lines of at least [`Severity::Info`] to standard
//! error with no metadata flags. It is created on first use, lives until the
//! process exits and is never replaced; the functions below reconfigure it in
//! place. Every function mirrors the [`Logger`] method of the same name.
//!
//! ```
//! use severity_logger::{global, Operand, Severity};
//!
//! global::set_output(std::io::sink());
//! global::set_severity(Severity::Debug);
//! global::debugln(&[Operand::text("cache warm"), Operand::value(&128)]);
//! ```

use crate::core::{Flags, Logger, LoggerConfig, Operand, Severity};
use std::fmt;
use std::io::Write;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger used by the free functions of this module.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::default)
}

/// Sets the output destination for the default logger.
pub fn set_output<W: Write + Send + 'static>(output: W) {
    default_logger().set_output(output);
}

/// Returns the output flags for the default logger.
pub fn flags() -> Flags {
    default_logger().flags()
}

/// Sets the output flags for the default logger.
pub fn set_flags(flags: Flags) {
    default_logger().set_flags(flags);
}

/// Returns the minimum severity the default logger writes.
pub fn severity() -> Severity {
    default_logger().severity()
}

/// Sets the minimum severity the default logger writes.
pub fn set_severity(severity: Severity) {
    default_logger().set_severity(severity);
}

pub fn config() -> LoggerConfig {
    default_logger().config()
}

pub fn apply(config: LoggerConfig) {
    default_logger().apply(config);
}

pub fn enabled(severity: Severity) -> bool {
    default_logger().enabled(severity)
}

/// Logs with `debug` severity to the default logger.
#[track_caller]
pub fn debug(operands: &[Operand<'_>]) {
    default_logger().debug(operands);
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    default_logger().debugf(args);
}

#[track_caller]
pub fn debugln(operands: &[Operand<'_>]) {
    default_logger().debugln(operands);
}

/// Logs with `info` severity to the default logger.
#[track_caller]
pub fn info(operands: &[Operand<'_>]) {
    default_logger().info(operands);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    default_logger().infof(args);
}

#[track_caller]
pub fn infoln(operands: &[Operand<'_>]) {
    default_logger().infoln(operands);
}

/// Logs with `error` severity to the default logger.
#[track_caller]
pub fn error(operands: &[Operand<'_>]) {
    default_logger().error(operands);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    default_logger().errorf(args);
}

#[track_caller]
pub fn errorln(operands: &[Operand<'_>]) {
    default_logger().errorln(operands);
}
