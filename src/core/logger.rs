//! Main logger implementation

use super::{
    config::LoggerConfig,
    flags::Flags,
    line_writer::{shared_output, LineWriter, SharedOutput, Sink},
    operand::{print_operands, println_operands, Operand},
    severity::Severity,
};
use parking_lot::RwLock;
use std::fmt;
use std::io::Write;
use std::panic::Location;
use std::sync::Arc;

/// Everything the lock protects. The three writers are derived from the
/// other three fields and are only ever replaced together with them.
struct State {
    output: SharedOutput,
    severity: Severity,
    flags: Flags,
    debug: LineWriter,
    info: LineWriter,
    error: LineWriter,
}

impl State {
    fn build(severity: Severity, flags: Flags, output: SharedOutput) -> Self {
        let out = || Sink::Output(Arc::clone(&output));

        let (debug, info, error) = match severity {
            Severity::Debug => (out(), out(), out()),
            Severity::Info => (Sink::Discard, out(), out()),
            Severity::Error => (Sink::Discard, Sink::Discard, out()),
        };

        Self {
            debug: LineWriter::new(debug, Severity::Debug, flags),
            info: LineWriter::new(info, Severity::Info, flags),
            error: LineWriter::new(error, Severity::Error, flags),
            output,
            severity,
            flags,
        }
    }

    fn writer(&self, severity: Severity) -> &LineWriter {
        match severity {
            Severity::Debug => &self.debug,
            Severity::Info => &self.info,
            Severity::Error => &self.error,
        }
    }
}

/// Severity based line logger.
///
/// Every method takes `&self`; a `Logger` can be shared between threads
/// (for example behind an `Arc`) and reconfigured while other threads log.
///
/// # Example
///
/// ```
/// use severity_logger::{Flags, Logger, Severity};
///
/// let logger = Logger::new(Severity::Info, Flags::NONE, std::io::sink());
/// logger.infof(format_args!("listening on port {}", 8080));
/// logger.set_severity(Severity::Debug);
/// assert!(logger.enabled(Severity::Debug));
/// ```
pub struct Logger {
    state: RwLock<State>,
}

impl Logger {
    /// Create a logger that writes lines of at least `severity` to `output`.
    #[must_use]
    pub fn new<W>(severity: Severity, flags: Flags, output: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            state: RwLock::new(State::build(severity, flags, shared_output(output))),
        }
    }

    /// Create a logger from a deserialized configuration.
    #[must_use]
    pub fn from_config<W>(config: LoggerConfig, output: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::new(config.severity, config.flags, output)
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use severity_logger::{Flags, Logger, Severity};
    ///
    /// let logger = Logger::builder()
    ///     .severity(Severity::Debug)
    ///     .flags(Flags::STD | Flags::SHORT_FILE)
    ///     .output(std::io::sink())
    ///     .build();
    /// assert_eq!(logger.severity(), Severity::Debug);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Replace the output destination, keeping severity and flags.
    pub fn set_output<W>(&self, output: W)
    where
        W: Write + Send + 'static,
    {
        self.rebuild(None, None, Some(shared_output(output)));
    }

    pub fn flags(&self) -> Flags {
        self.state.read().flags
    }

    pub fn set_flags(&self, flags: Flags) {
        self.rebuild(None, Some(flags), None);
    }

    /// Minimum severity that reaches the output.
    pub fn severity(&self) -> Severity {
        self.state.read().severity
    }

    pub fn set_severity(&self, severity: Severity) {
        self.rebuild(Some(severity), None, None);
    }

    /// Current severity and flags.
    pub fn config(&self) -> LoggerConfig {
        let state = self.state.read();
        LoggerConfig::new(state.severity, state.flags)
    }

    /// Apply severity and flags in a single reconfiguration.
    pub fn apply(&self, config: LoggerConfig) {
        self.rebuild(Some(config.severity), Some(config.flags), None);
    }

    /// True when lines logged at `severity` reach the output.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.state.read().severity
    }

    fn rebuild(
        &self,
        severity: Option<Severity>,
        flags: Option<Flags>,
        output: Option<SharedOutput>,
    ) {
        let mut state = self.state.write();
        let severity = severity.unwrap_or(state.severity);
        let flags = flags.unwrap_or(state.flags);
        let output = output.unwrap_or_else(|| Arc::clone(&state.output));
        *state = State::build(severity, flags, output);
    }

    /// Render and write one line at `severity`.
    ///
    /// The message is only rendered when the level is enabled, and rendering
    /// happens outside the lock so `Display` impls may log themselves.
    fn emit(&self, severity: Severity, location: &Location<'_>, render: impl FnOnce() -> String) {
        if !self.enabled(severity) {
            return;
        }
        let message = render();
        self.state.read().writer(severity).output(location, &message);
    }

    /// Logs with `debug` severity. Operands are concatenated, with a space
    /// between two neighbours when neither is text. A newline is appended
    /// if the message does not end with one.
    #[track_caller]
    pub fn debug(&self, operands: &[Operand<'_>]) {
        self.emit(Severity::Debug, Location::caller(), || print_operands(operands));
    }

    /// Logs preformatted arguments with `debug` severity, appending a newline
    /// if the message does not end with one.
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Debug, Location::caller(), || args.to_string());
    }

    /// Logs with `debug` severity. Operands are always separated by a space.
    #[track_caller]
    pub fn debugln(&self, operands: &[Operand<'_>]) {
        self.emit(Severity::Debug, Location::caller(), || println_operands(operands));
    }

    /// Like [`debug`](Self::debug), but logs with `info` severity.
    #[track_caller]
    pub fn info(&self, operands: &[Operand<'_>]) {
        self.emit(Severity::Info, Location::caller(), || print_operands(operands));
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Info, Location::caller(), || args.to_string());
    }

    #[track_caller]
    pub fn infoln(&self, operands: &[Operand<'_>]) {
        self.emit(Severity::Info, Location::caller(), || println_operands(operands));
    }

    /// Like [`debug`](Self::debug), but logs with `error` severity.
    #[track_caller]
    pub fn error(&self, operands: &[Operand<'_>]) {
        self.emit(Severity::Error, Location::caller(), || print_operands(operands));
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Error, Location::caller(), || args.to_string());
    }

    #[track_caller]
    pub fn errorln(&self, operands: &[Operand<'_>]) {
        self.emit(Severity::Error, Location::caller(), || println_operands(operands));
    }
}

impl Default for Logger {
    /// Info severity, no flags, standard error.
    fn default() -> Self {
        Self::new(Severity::Info, Flags::NONE, std::io::stderr())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("Logger")
            .field("severity", &state.severity)
            .field("flags", &state.flags)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Unset fields fall back to Info severity, no flags and standard error.
pub struct LoggerBuilder {
    severity: Severity,
    flags: Flags,
    output: Option<SharedOutput>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            severity: Severity::Info,
            flags: Flags::NONE,
            output: None,
        }
    }

    /// Set minimum severity
    #[must_use = "builder methods return a new value"]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Set metadata flags
    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Take severity and flags from a configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.severity = config.severity;
        self.flags = config.flags;
        self
    }

    /// Set the output destination
    #[must_use = "builder methods return a new value"]
    pub fn output<W: Write + Send + 'static>(mut self, output: W) -> Self {
        self.output = Some(shared_output(output));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let output = self
            .output
            .unwrap_or_else(|| shared_output(std::io::stderr()));
        Logger {
            state: RwLock::new(State::build(self.severity, self.flags, output)),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
