use chrono::{NaiveTime, Timelike};
use std::fmt;

/// A clock string that does not match the format an input field promised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormatError {
    input: String,
    expected: &'static str,
}

impl TimeFormatError {
    fn new(input: &str, expected: &'static str) -> Self {
        Self {
            input: input.to_string(),
            expected,
        }
    }
}

impl fmt::Display for TimeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid time format {:?}, expected {}",
            self.input, self.expected
        )
    }
}

impl std::error::Error for TimeFormatError {}

/// Parses a 24-hour clock string ("08:15") into minutes since midnight.
pub fn parse_24h(input: &str) -> Result<i64, TimeFormatError> {
    let err = || TimeFormatError::new(input, "HH:MM");
    let (hour, minute) = input.trim().split_once(':').ok_or_else(err)?;
    let hour: i64 = hour.parse().map_err(|_| err())?;
    let minute: i64 = minute.parse().map_err(|_| err())?;
    if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) {
        return Err(err());
    }
    Ok(hour * 60 + minute)
}

/// Parses a 12-hour clock string ("8:15 AM") into minutes since midnight.
pub fn parse_12h(input: &str) -> Result<i64, TimeFormatError> {
    let err = || TimeFormatError::new(input, "H:MM AM|PM");
    let (clock, meridiem) = input.trim().split_once(' ').ok_or_else(err)?;
    let (hour, minute) = clock.split_once(':').ok_or_else(err)?;
    let hour: i64 = hour.parse().map_err(|_| err())?;
    let minute: i64 = minute.parse().map_err(|_| err())?;
    if !(1..=12).contains(&hour) || !(0..=59).contains(&minute) {
        return Err(err());
    }
    let hour = match meridiem {
        "AM" => hour % 12,
        "PM" if hour == 12 => 12,
        "PM" => hour + 12,
        _ => return Err(err()),
    };
    Ok(hour * 60 + minute)
}

/// Signed minute offset between a 24-hour predicted time and a 12-hour
/// actual arrival time. Positive means the bus was late.
pub fn compute_difference(predicted: &str, actual: &str) -> Result<i64, TimeFormatError> {
    let predicted = parse_24h(predicted)?;
    let actual = parse_12h(actual)?;
    Ok(same_day_offset(predicted, actual))
}

/// Offset policy: both times are assumed to fall on the same calendar day,
/// so an arrival past midnight produces a large negative value rather than
/// wrapping. Overnight routes would swap this function out.
fn same_day_offset(predicted_minutes: i64, actual_minutes: i64) -> i64 {
    actual_minutes - predicted_minutes
}

/// Renders a wall-clock time as "H:MM AM|PM", the form entries store for
/// the actual arrival.
pub fn twelve_hour_clock(time: NaiveTime) -> String {
    let hour = time.hour();
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour % 12 {
        0 => 12, // midnight and noon both read as 12
        h => h,
    };
    format!("{}:{:02} {}", display, time.minute(), meridiem)
}
