//! Print-style message rendering
//!
//! The plain and `ln` logging variants accept a list of heterogeneous values.
//! Each value becomes an [`Operand`] that remembers whether it is text, since
//! the plain variant only separates two neighbours with a space when neither
//! of them is text:
//!
//! ```
//! use severity_logger::Operand;
//! use severity_logger::core::operand::{print_operands, println_operands};
//!
//! let ops = [Operand::text("n="), Operand::value(&1), Operand::value(&2)];
//! assert_eq!(print_operands(&ops), "n=1 2");
//! assert_eq!(println_operands(&ops), "n= 1 2\n");
//! ```

use std::fmt::{self, Write};

#[derive(Clone, Copy)]
enum Kind<'a> {
    Text(&'a str),
    Value(&'a dyn fmt::Display),
}

/// A single argument of a print-style logging call.
#[derive(Clone, Copy)]
pub struct Operand<'a>(Kind<'a>);

impl<'a> Operand<'a> {
    pub fn text(value: &'a str) -> Self {
        Operand(Kind::Text(value))
    }

    pub fn value(value: &'a dyn fmt::Display) -> Self {
        Operand(Kind::Value(value))
    }

    pub fn is_text(&self) -> bool {
        matches!(self.0, Kind::Text(_))
    }
}

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Kind::Text(text) => f.write_str(text),
            Kind::Value(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl fmt::Debug for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Kind::Text(text) => f.debug_tuple("Text").field(&text).finish(),
            Kind::Value(value) => f.debug_tuple("Value").field(&value.to_string()).finish(),
        }
    }
}

/// Concatenate operands, adding a space between two neighbours when neither
/// is text.
pub fn print_operands(operands: &[Operand<'_>]) -> String {
    let mut out = String::new();
    let mut prev_text = false;
    for (i, operand) in operands.iter().enumerate() {
        let is_text = operand.is_text();
        if i > 0 && !is_text && !prev_text {
            out.push(' ');
        }
        let _ = write!(out, "{}", operand);
        prev_text = is_text;
    }
    out
}

/// Join operands with single spaces and terminate with exactly one newline.
pub fn println_operands(operands: &[Operand<'_>]) -> String {
    let mut out = String::new();
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", operand);
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// A borrowed macro argument awaiting conversion into an [`Operand`].
///
/// The logging macros call `(&Captured(&arg)).to_operand()`. Method lookup
/// tries [`TextOperand`] on `Captured` before [`ValueOperand`] on
/// `&Captured`, so anything that is `AsRef<str>` becomes text, whatever its
/// level of indirection, and every other `Display` type becomes a value.
#[doc(hidden)]
pub struct Captured<'a, T: ?Sized>(pub &'a T);

#[doc(hidden)]
pub trait TextOperand<'a> {
    fn to_operand(&self) -> Operand<'a>;
}

impl<'a, T: ?Sized + AsRef<str>> TextOperand<'a> for Captured<'a, T> {
    fn to_operand(&self) -> Operand<'a> {
        let value: &'a T = self.0;
        Operand::text(value.as_ref())
    }
}

#[doc(hidden)]
pub trait ValueOperand<'a> {
    fn to_operand(&self) -> Operand<'a>;
}

impl<'a, T: fmt::Display + 'a> ValueOperand<'a> for &Captured<'a, T> {
    fn to_operand(&self) -> Operand<'a> {
        let value: &'a T = self.0;
        Operand::value(value)
    }
}
