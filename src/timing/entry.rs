//! Digit-by-digit time entry

use serde::{Deserialize, Serialize};

/// Maximum number of raw digits a time value holds (HHMM)
pub const MAX_DIGITS: usize = 4;

/// The two tracked time fields, in auto-advance order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeField {
    EngineStart,
    EngineStop,
}

impl TimeField {
    /// Fixed field order used for auto-advance
    pub const ALL: [TimeField; 2] = [TimeField::EngineStart, TimeField::EngineStop];

    /// The field after this one; the last field stays put
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1).min(Self::ALL.len() - 1)]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeField::EngineStart => "engineStart",
            TimeField::EngineStop => "engineStop",
        }
    }

    /// Look up a field by name, accepting camelCase and kebab-case
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "engineStart" | "engine-start" => Some(TimeField::EngineStart),
            "engineStop" | "engine-stop" => Some(TimeField::EngineStop),
            _ => None,
        }
    }
}

/// A single keypad digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// Raw digits of one time field. The colon is only added when formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeValue {
    digits: String,
}

impl TimeValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a value from a display string, keeping at most four digits
    pub fn from_display(display: &str) -> Self {
        Self {
            digits: strip_non_digits(display).chars().take(MAX_DIGITS).collect(),
        }
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    pub fn is_full(&self) -> bool {
        self.digit_count() >= MAX_DIGITS
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Append a digit. Returns false and leaves the value untouched when full.
    pub fn push(&mut self, digit: Digit) -> bool {
        if self.is_full() {
            return false;
        }
        self.digits.push(digit.as_char());
        true
    }

    /// Drop the last digit, if any
    pub fn pop(&mut self) {
        self.digits.pop();
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Display form, e.g. `08:3`
    pub fn formatted(&self) -> String {
        format_digits_with_colon(&self.digits)
    }
}

fn strip_non_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Insert a colon after the first two digits once a third is present.
///
/// Input is truncated to four characters first, so `"0830"` becomes `"08:30"`
/// and `"08"` stays `"08"`.
pub fn format_digits_with_colon(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().take(MAX_DIGITS).collect();
    let mut formatted: String = chars.iter().take(2).collect();
    if chars.len() > 2 {
        formatted.push(':');
        formatted.extend(&chars[2..]);
    }
    formatted
}
