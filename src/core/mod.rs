//! Core logger types

pub mod config;
pub mod error;
pub mod flags;
pub mod line_writer;
pub mod logger;
pub mod operand;
pub mod severity;
pub mod timestamp;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use flags::Flags;
pub use logger::{Logger, LoggerBuilder};
pub use operand::Operand;
pub use severity::Severity;
pub use timestamp::Timestamp;
