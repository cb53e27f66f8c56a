//! Time entry and elapsed-time arithmetic
//!
//! Pure, synchronous logic with no knowledge of HTTP or platform details.

pub mod elapsed;
pub mod entry;

// Re-export main types
pub use elapsed::{
    elapsed_minutes, minutes_to_clock, minutes_to_tc_decimal, parse_clock, ElapsedSummary,
};
pub use entry::{format_digits_with_colon, Digit, TimeField, TimeValue};
