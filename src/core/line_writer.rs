//! Per-severity line writer
//!
//! A `LineWriter` owns a fixed level prefix and a set of [`Flags`], and is
//! bound either to the logger's output or to a discard sink. It renders one
//! complete line per call and hands it to the output in a single write.

use super::{flags::Flags, severity::Severity, timestamp::Timestamp};
use parking_lot::Mutex;
use std::fmt::{self, Write as _};
use std::io::Write;
use std::panic::Location;
use std::sync::Arc;

/// Output destination shared by the line writers of one logger.
pub type SharedOutput = Arc<Mutex<Box<dyn Write + Send>>>;

pub(crate) fn shared_output<W: Write + Send + 'static>(output: W) -> SharedOutput {
    Arc::new(Mutex::new(Box::new(output)))
}

#[derive(Clone)]
pub(crate) enum Sink {
    Discard,
    Output(SharedOutput),
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Discard => f.write_str("Discard"),
            Sink::Output(_) => f.write_str("Output"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct LineWriter {
    sink: Sink,
    prefix: &'static str,
    flags: Flags,
}

impl LineWriter {
    pub(crate) fn new(sink: Sink, severity: Severity, flags: Flags) -> Self {
        Self {
            sink,
            prefix: severity.prefix(),
            flags,
        }
    }

    /// True when lines handed to this writer are thrown away.
    #[cfg(test)]
    pub(crate) fn is_discarding(&self) -> bool {
        matches!(self.sink, Sink::Discard)
    }

    #[cfg(test)]
    pub(crate) fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[cfg(test)]
    pub(crate) fn flags(&self) -> Flags {
        self.flags
    }

    /// Write `message` as one line, attributed to `location`.
    ///
    /// Write errors are ignored.
    pub fn output(&self, location: &Location<'_>, message: &str) {
        let Sink::Output(output) = &self.sink else {
            return;
        };

        let now = if self.flags.has_timestamp() {
            Some(Timestamp::now())
        } else {
            None
        };
        let line = self.format_line(now, location, message);

        let mut output = output.lock();
        let _ = output.write_all(line.as_bytes());
    }

    pub(crate) fn format_line(
        &self,
        now: Option<Timestamp>,
        location: &Location<'_>,
        message: &str,
    ) -> String {
        let mut line = String::with_capacity(message.len() + self.prefix.len() + 48);

        if let Some(now) = now {
            now.render(self.flags, &mut line);
        }

        if self.flags.has_location() {
            let file = if self.flags.contains(Flags::SHORT_FILE) {
                short_file(location.file())
            } else {
                location.file()
            };
            let _ = write!(line, "{}:{}: ", file, location.line());
        }

        line.push_str(self.prefix);
        line.push_str(message);
        if !message.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}

fn short_file(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(path)
}
