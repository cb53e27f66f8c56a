//! Elapsed engine time and tech-log decimal rounding

use serde::{Deserialize, Serialize};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Shown in place of a clock duration that cannot be computed
pub const CLOCK_PLACEHOLDER: &str = "--:--";
/// Shown in place of a decimal duration that cannot be computed
pub const DECIMAL_PLACEHOLDER: &str = "--.-";

/// Parse a strict `HH:MM` 24-hour clock string into minutes after midnight
pub fn parse_clock(value: &str) -> Option<u32> {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let [h1, h2, m1, m2] = digits.map(|b| u32::from(b - b'0'));
    let hours = h1 * 10 + h2;
    let minutes = m1 * 10 + m2;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Minutes from `start` to `end`, allowing one midnight rollover.
///
/// Spans of 24 hours or more cannot be told apart from the short way round.
pub fn elapsed_minutes(start: &str, end: &str) -> Option<u32> {
    let start = parse_clock(start)?;
    let end = parse_clock(end)?;
    let diff = end as i32 - start as i32;
    let diff = if diff < 0 { diff + MINUTES_PER_DAY as i32 } else { diff };
    Some(diff as u32)
}

/// Render minutes as zero-padded `HH:MM`
pub fn minutes_to_clock(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Render minutes as tenths of an hour, tech-log style.
///
/// Minutes 0-2 past the hour round down, 57-59 round up to the next hour,
/// and each six-minute window from minute 3 adds one tenth.
pub fn minutes_to_tc_decimal(minutes: u32) -> String {
    let hours = minutes / 60;
    let remainder = minutes % 60;

    match remainder {
        0..=2 => format!("{}.0", hours),
        57..=59 => format!("{}.0", hours + 1),
        _ => {
            let steps = (remainder.min(56) - 3) / 6 + 1;
            format!("{}.{}", hours, steps)
        }
    }
}

/// Derived display values for a start/stop pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedSummary {
    pub minutes: Option<u32>,
    pub clock: String,
    pub tc_decimal: String,
}

impl ElapsedSummary {
    pub fn compute(start: &str, end: &str) -> Self {
        match elapsed_minutes(start, end) {
            Some(minutes) => Self {
                minutes: Some(minutes),
                clock: minutes_to_clock(minutes),
                tc_decimal: minutes_to_tc_decimal(minutes),
            },
            None => Self::unavailable(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            minutes: None,
            clock: CLOCK_PLACEHOLDER.to_string(),
            tc_decimal: DECIMAL_PLACEHOLDER.to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.minutes.is_some()
    }
}
