//! Shared helpers for integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// In-memory output that can be inspected while a logger owns a clone.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return everything written so far and clear the buffer.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.0.lock());
        String::from_utf8(bytes).expect("log output is valid UTF-8")
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    pub fn line_count(&self) -> usize {
        self.0.lock().iter().filter(|b| **b == b'\n').count()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub const R_DATE: &str = r"[0-9][0-9][0-9][0-9]/[0-9][0-9]/[0-9][0-9]";
pub const R_TIME: &str = r"[0-9][0-9]:[0-9][0-9]:[0-9][0-9]";
pub const R_MICROSECONDS: &str = r"\.[0-9][0-9][0-9][0-9][0-9][0-9]";
pub const R_LINE: &str = r"[0-9]+:";

pub fn r_longfile() -> String {
    format!(r".*/[A-Za-z0-9_\-]+\.rs:{}", R_LINE)
}

pub fn r_shortfile() -> String {
    format!(r"[A-Za-z0-9_\-]+\.rs:{}", R_LINE)
}

/// Flag combinations and the header pattern each must render.
pub fn flag_cases() -> Vec<(severity_logger::Flags, String)> {
    use severity_logger::Flags;

    vec![
        (Flags::NONE, String::new()),
        (Flags::DATE, format!("{} ", R_DATE)),
        (Flags::TIME, format!("{} ", R_TIME)),
        (
            Flags::TIME | Flags::MICROSECONDS,
            format!("{}{} ", R_TIME, R_MICROSECONDS),
        ),
        // microseconds implies time
        (Flags::MICROSECONDS, format!("{}{} ", R_TIME, R_MICROSECONDS)),
        (Flags::LONG_FILE, format!("{} ", r_longfile())),
        (Flags::SHORT_FILE, format!("{} ", r_shortfile())),
        // short file overrides long file
        (Flags::LONG_FILE | Flags::SHORT_FILE, format!("{} ", r_shortfile())),
        (
            Flags::DATE | Flags::TIME | Flags::MICROSECONDS | Flags::LONG_FILE,
            format!("{} {}{} {} ", R_DATE, R_TIME, R_MICROSECONDS, r_longfile()),
        ),
        (
            Flags::DATE | Flags::TIME | Flags::MICROSECONDS | Flags::SHORT_FILE,
            format!("{} {}{} {} ", R_DATE, R_TIME, R_MICROSECONDS, r_shortfile()),
        ),
        (
            Flags::STD | Flags::UTC,
            format!("{} {} ", R_DATE, R_TIME),
        ),
    ]
}

/// Check one logging call's output: a single line matching `pattern` when
/// `expect_line`, nothing otherwise.
pub fn validate(call: &str, pattern: &str, output: &str, expect_line: bool) {
    if !expect_line {
        assert_eq!(output, "", "{} should not write below the minimum severity", call);
        return;
    }

    assert!(output.ends_with('\n'), "{} output {:?} lacks a newline", call, output);
    let line = &output[..output.len() - 1];
    assert!(!line.contains('\n'), "{} wrote more than one line: {:?}", call, output);

    let re = regex::Regex::new(pattern).expect("valid pattern");
    assert!(
        re.is_match(line),
        "{} log output should match {:?} is {:?}",
        call,
        pattern,
        line
    );
}
