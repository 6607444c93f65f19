//! Logging macros for ergonomic message formatting.
//!
//! Each level has three macros mirroring the three [`Logger`](crate::Logger)
//! entry points. The first argument is any expression that evaluates to a
//! logger, including [`default_logger()`](crate::default_logger):
//!
//! ```
//! use severity_logger::{debugln, errorf, info, Flags, Logger, Severity};
//!
//! let logger = Logger::new(Severity::Debug, Flags::NONE, std::io::sink());
//!
//! // Print style: a space only between two non-string operands
//! info!(logger, "items=", 3, 4);
//!
//! // Format style
//! let port = 8080;
//! errorf!(logger, "bind failed on port {}", port);
//!
//! // Line style: always space separated
//! debugln!(logger, "user", 42, "logged in");
//!
//! // The default logger
//! info!(severity_logger::default_logger(), "ready");
//! ```
//!
//! Arguments are borrowed, never moved. `&str` and `String` values count as
//! text; anything else implementing `Display` counts as a value.

/// Log print-style operands at an explicit severity.
///
/// # Examples
///
/// ```
/// # use severity_logger::prelude::*;
/// # let logger = Logger::new(Severity::Info, Flags::NONE, std::io::sink());
/// use severity_logger::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: ", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(,)?) => {
        match $level {
            $crate::Severity::Debug => $logger.debug(&[]),
            $crate::Severity::Info => $logger.info(&[]),
            $crate::Severity::Error => $logger.error(&[]),
        }
    };
    ($logger:expr, $level:expr, $($arg:expr),+ $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::core::operand::{TextOperand as _, ValueOperand as _};
        match $level {
            $crate::Severity::Debug => $logger.debug(&[$((&$crate::core::operand::Captured(&$arg)).to_operand()),+]),
            $crate::Severity::Info => $logger.info(&[$((&$crate::core::operand::Captured(&$arg)).to_operand()),+]),
            $crate::Severity::Error => $logger.error(&[$((&$crate::core::operand::Captured(&$arg)).to_operand()),+]),
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_operands {
    ($logger:expr, $method:ident $(,)?) => {
        $logger.$method(&[])
    };
    ($logger:expr, $method:ident, $($arg:expr),+ $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::core::operand::{TextOperand as _, ValueOperand as _};
        $logger.$method(&[$((&$crate::core::operand::Captured(&$arg)).to_operand()),+])
    }};
}

/// Log a debug-level message, print style.
///
/// ```
/// # use severity_logger::prelude::*;
/// # let logger = Logger::new(Severity::Debug, Flags::NONE, std::io::sink());
/// use severity_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: ", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_operands!($logger, debug $(, $arg)*)
    };
}

/// Log a debug-level message with `format!` syntax.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

/// Log a debug-level message, space separated and newline terminated.
#[macro_export]
macro_rules! debugln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_operands!($logger, debugln $(, $arg)*)
    };
}

/// Log an info-level message, print style.
///
/// ```
/// # use severity_logger::prelude::*;
/// # let logger = Logger::new(Severity::Info, Flags::NONE, std::io::sink());
/// use severity_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing ", 100, " items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_operands!($logger, info $(, $arg)*)
    };
}

/// Log an info-level message with `format!` syntax.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

/// Log an info-level message, space separated and newline terminated.
#[macro_export]
macro_rules! infoln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_operands!($logger, infoln $(, $arg)*)
    };
}

/// Log an error-level message, print style.
///
/// ```
/// # use severity_logger::prelude::*;
/// # let logger = Logger::new(Severity::Info, Flags::NONE, std::io::sink());
/// use severity_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: ", 500, ", message: ", "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_operands!($logger, error $(, $arg)*)
    };
}

/// Log an error-level message with `format!` syntax.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

/// Log an error-level message, space separated and newline terminated.
#[macro_export]
macro_rules! errorln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_operands!($logger, errorln $(, $arg)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Flags, Logger, Severity};
    use parking_lot::Mutex;
    use std::io::Write;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn take(&self) -> String {
            String::from_utf8(std::mem::take(&mut *self.0.lock())).expect("utf-8")
        }
    }

    fn logger(severity: Severity, flags: Flags) -> (Logger, Buffer) {
        let buf = Buffer::default();
        (Logger::new(severity, flags, buf.clone()), buf)
    }

    #[test]
    fn test_log_macro() {
        let (logger, buf) = logger(Severity::Info, Flags::NONE);
        log!(logger, Severity::Debug, "hidden");
        log!(logger, Severity::Info, "Formatted: ", 42);
        log!(logger, Severity::Error);
        assert_eq!(buf.take(), "INFO : Formatted: 42\nERROR: \n");
    }

    #[test]
    fn test_debug_macros() {
        let (logger, buf) = logger(Severity::Debug, Flags::NONE);
        debug!(logger, "hello ", 23, " world");
        debugf!(logger, "hello {} world", 23);
        debugln!(logger, "hello", 23, "world");
        assert_eq!(buf.take(), "DEBUG: hello 23 world\n".repeat(3));
    }

    #[test]
    fn test_info_macros() {
        let (logger, buf) = logger(Severity::Info, Flags::NONE);
        info!(logger, 1, 2, "three");
        infof!(logger, "{}-{}", "a", 'b');
        infoln!(logger);
        assert_eq!(buf.take(), "INFO : 1 2three\nINFO : a-b\nINFO : \n");
    }

    #[test]
    fn test_error_macros() {
        let (logger, buf) = logger(Severity::Error, Flags::NONE);
        info!(logger, "hidden");
        error!(logger, "failed");
        errorf!(logger, "code={code}", code = 500);
        errorln!(logger, "a", 'b', 3.5);
        assert_eq!(buf.take(), "ERROR: failed\nERROR: code=500\nERROR: a b 3.5\n");
    }

    #[test]
    fn test_owned_arguments_are_borrowed() {
        let (logger, buf) = logger(Severity::Debug, Flags::NONE);
        let name = String::from("cache");
        let size = 64usize;
        debug!(logger, name, size);
        assert_eq!(name, "cache");
        assert_eq!(buf.take(), "DEBUG: cache64\n");
    }

    #[test]
    fn test_macro_reports_call_site() {
        let (logger, buf) = logger(Severity::Debug, Flags::SHORT_FILE);
        let line = line!() + 1;
        debugf!(logger, "here");
        assert_eq!(buf.take(), format!("macros.rs:{}: DEBUG: here\n", line));
    }
}
