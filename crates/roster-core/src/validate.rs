//! Field validators for patient records.
//!
//! Date of birth must match `dd-mm-yyyy` and name a real calendar day;
//! phone numbers must match `ddd-ddd-dddd`. Both checks are pure functions
//! over the raw input string.

use thiserror::Error;

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("date of birth must match dd-mm-yyyy")]
    DateFormat,

    #[error("month {month} is out of range (1-12)")]
    MonthOutOfRange { month: u32 },

    #[error("day {day} is out of range for month {month}")]
    DayOutOfRange { day: u32, month: u32 },

    #[error("phone number must match ddd-ddd-dddd")]
    PhoneFormat,
}

/// Check a date of birth in `dd-mm-yyyy` form.
///
/// The day is validated against the month's maximum; the year is not
/// validated, so February 29 is accepted in every year.
pub fn validate_date_of_birth(text: &str) -> Result<(), ValidationError> {
    if !matches_digit_groups(text, &[2, 2, 4]) {
        return Err(ValidationError::DateFormat);
    }

    let day = parse_group(&text[0..2])?;
    let month = parse_group(&text[3..5])?;

    if !(1..=12).contains(&month) {
        return Err(ValidationError::MonthOutOfRange { month });
    }
    if day < 1 || day > max_day_in_month(month) {
        return Err(ValidationError::DayOutOfRange { day, month });
    }
    Ok(())
}

/// Check a phone number in `ddd-ddd-dddd` form.
///
/// Digits only, fixed grouping; no country-code or prefix semantics.
pub fn validate_phone_number(text: &str) -> Result<(), ValidationError> {
    if matches_digit_groups(text, &[3, 3, 4]) {
        Ok(())
    } else {
        Err(ValidationError::PhoneFormat)
    }
}

/// Maximum accepted day for a month in 1..=12.
///
/// February always allows 29; there is no leap-year precision.
pub fn max_day_in_month(month: u32) -> u32 {
    match month {
        2 => 29,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// True when `text` is exactly the given dash-separated ASCII digit groups.
fn matches_digit_groups(text: &str, widths: &[usize]) -> bool {
    let bytes = text.as_bytes();
    let expected_len = widths.iter().sum::<usize>() + widths.len() - 1;
    if bytes.len() != expected_len {
        return false;
    }

    let mut pos = 0;
    for (i, &width) in widths.iter().enumerate() {
        if i > 0 {
            if bytes[pos] != b'-' {
                return false;
            }
            pos += 1;
        }
        if !bytes[pos..pos + width].iter().all(u8::is_ascii_digit) {
            return false;
        }
        pos += width;
    }
    true
}

// Callers only pass groups the pattern check has confirmed to be ASCII digits.
fn parse_group(group: &str) -> Result<u32, ValidationError> {
    group.parse().map_err(|_| ValidationError::DateFormat)
}
