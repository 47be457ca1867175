//! Keystroke formatting and range checking for the preparation-time field.
//!
//! Input is reduced to its digits and regrouped as `hh`, `hh:mm` or
//! `hh:mm:ss`. Only a complete `hh:mm:ss` value is range checked; minutes
//! and seconds accept 60.

use crate::models::form::FieldStatus;

/// Shown while a complete value has a group outside its range.
pub const RANGE_MESSAGE: &str = "Invalid preparation time. The acceptable range for hours is 0 to 23, and for minutes and seconds it is 0 to 60";

const MAX_DIGITS: usize = 6;
const FULL_LENGTH: usize = 8;
const MAX_HOURS: u8 = 23;
const MAX_MINUTES: u8 = 60;
const MAX_SECONDS: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeCheck {
    /// Fewer than three digit groups; nothing is checked yet.
    Incomplete,
    Valid,
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTime {
    pub value: String,
    pub check: TimeCheck,
}

impl FormattedTime {
    pub fn status(&self) -> FieldStatus {
        match self.check {
            TimeCheck::Incomplete => FieldStatus::Neutral,
            TimeCheck::Valid => FieldStatus::Success,
            TimeCheck::OutOfRange => FieldStatus::Error(RANGE_MESSAGE.to_string()),
        }
    }
}

/// Reformat raw keystroke input and check it once complete.
pub fn format_preparation_time(input: &str) -> FormattedTime {
    let digits: String = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect();

    // ASCII only, so byte offsets are char offsets.
    let groups: Vec<&str> = (0..digits.len())
        .step_by(2)
        .map(|start| &digits[start..(start + 2).min(digits.len())])
        .collect();
    let value = groups.join(":");

    if value.len() != FULL_LENGTH {
        return FormattedTime {
            value,
            check: TimeCheck::Incomplete,
        };
    }

    let in_range = |group: &str, max: u8| group.parse::<u8>().is_ok_and(|n| n <= max);
    let check = if in_range(groups[0], MAX_HOURS)
        && in_range(groups[1], MAX_MINUTES)
        && in_range(groups[2], MAX_SECONDS)
    {
        TimeCheck::Valid
    } else {
        TimeCheck::OutOfRange
    };

    FormattedTime { value, check }
}

/// Submit-time pattern: `H:MM:SS` or `HH:MM:SS`, hours 0-23, minutes and
/// seconds 00-59.
pub fn is_well_formed(value: &str) -> bool {
    let mut parts = value.split(':');
    let (Some(hours), Some(minutes), Some(seconds), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let below_sixty = |s: &str| s.len() == 2 && all_digits(s) && s.as_bytes()[0] <= b'5';

    matches!(hours.len(), 1 | 2)
        && all_digits(hours)
        && hours.parse::<u8>().is_ok_and(|h| h <= MAX_HOURS)
        && below_sixty(minutes)
        && below_sixty(seconds)
}
