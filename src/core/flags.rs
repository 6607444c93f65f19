//! Metadata flags rendered in front of each log line
//!
//! Flags are a bitmask. Requested metadata is always rendered in the same
//! order regardless of how the mask was built:
//!
//! ```text
//! [date ][time[.micros] ][file:line: ]LEVEL: message
//! ```

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Flags(u32);

impl Flags {
    /// No metadata, only the level prefix and the message.
    pub const NONE: Flags = Flags(0);
    /// Calendar date: `2009/01/23`
    pub const DATE: Flags = Flags(1 << 0);
    /// Clock time: `01:23:23`
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies `TIME`.
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full source path and line: `/a/b/c/d.rs:23`
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final path element and line: `d.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Render date and time in UTC rather than the local time zone.
    pub const UTC: Flags = Flags(1 << 5);
    /// Initial values for a conventional logger: date and time.
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    const NAMED: [(&'static str, Flags); 6] = [
        ("date", Self::DATE),
        ("time", Self::TIME),
        ("microseconds", Self::MICROSECONDS),
        ("longfile", Self::LONG_FILE),
        ("shortfile", Self::SHORT_FILE),
        ("utc", Self::UTC),
    ];

    pub const fn from_bits(bits: u32) -> Self {
        Flags(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is set.
    pub const fn contains(&self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when any date or time component will be rendered.
    pub const fn has_timestamp(&self) -> bool {
        self.0 & (Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0) != 0
    }

    /// True when a source location will be rendered.
    pub const fn has_location(&self) -> bool {
        self.0 & (Self::LONG_FILE.0 | Self::SHORT_FILE.0) != 0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }

        let mut first = true;
        for (name, flag) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }

        let unknown = self.0 & !Self::NAMED.iter().fold(0, |acc, (_, flag)| acc | flag.0);
        if unknown != 0 {
            if !first {
                f.write_str("|")?;
            }
            write!(f, "{:#x}", unknown)?;
        }
        Ok(())
    }
}

impl FromStr for Flags {
    type Err = LoggerError;

    /// Parse a `|`, `,` or whitespace separated list of flag names.
    ///
    /// Bits without a name are accepted as a hex token (`0x400`), the form
    /// `Display` renders them in.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::NONE;
        for token in s
            .split(|c: char| c == '|' || c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let token = token.to_lowercase();
            flags |= match token.as_str() {
                "none" => Flags::NONE,
                "std" => Flags::STD,
                name => match name.strip_prefix("0x") {
                    Some(hex) => u32::from_str_radix(hex, 16)
                        .map(Flags)
                        .map_err(|_| LoggerError::invalid_flag(name))?,
                    None => Self::NAMED
                        .iter()
                        .find(|(n, _)| *n == name)
                        .map(|(_, flag)| *flag)
                        .ok_or_else(|| LoggerError::invalid_flag(name))?,
                },
            };
        }
        Ok(flags)
    }
}

impl TryFrom<String> for Flags {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Flags> for String {
    fn from(flags: Flags) -> Self {
        flags.to_string()
    }
}
