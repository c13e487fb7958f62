use std::{fmt, str::FromStr};

use jiff::{SignedDuration, civil::Time};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeWindowError {
    #[error("time window '{label}' is not two clock times separated by '-'")]
    MissingSeparator { label: String },

    #[error("'{value}' in time window '{label}' is not a HH:MM:SS clock time")]
    InvalidClockTime { label: String, value: String },

    #[error("time window '{label}' does not end after it starts")]
    NonPositiveDuration { label: String },
}

/// A delivery slot such as `09:00:00-12:00:00`.
///
/// The label is kept verbatim so trips can be reported against the exact
/// text found in the input. Hours need two digits: `9:00:00-12:00:00`, which
/// older spreadsheet exports accepted, is rejected with
/// [`TimeWindowError::InvalidClockTime`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    label: String,
    start: Time,
    end: Time,
}

impl TimeWindow {
    pub fn parse(label: &str) -> Result<Self, TimeWindowError> {
        let (start, end) = label
            .split_once('-')
            .filter(|(_, end)| !end.contains('-'))
            .ok_or_else(|| TimeWindowError::MissingSeparator {
                label: label.to_owned(),
            })?;

        let start = parse_clock_time(label, start)?;
        let end = parse_clock_time(label, end)?;

        if end <= start {
            return Err(TimeWindowError::NonPositiveDuration {
                label: label.to_owned(),
            });
        }

        Ok(TimeWindow {
            label: label.to_owned(),
            start,
            end,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn duration(&self) -> SignedDuration {
        self.start.duration_until(self.end)
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration().as_secs_f64() / 60.0
    }
}

impl FromStr for TimeWindow {
    type Err = TimeWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeWindow::parse(s)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Strict `HH:MM:SS`, surrounding whitespace allowed. Unlike the legacy
/// spreadsheet tooling, single-digit fields such as `9:00:00` are rejected.
fn parse_clock_time(label: &str, value: &str) -> Result<Time, TimeWindowError> {
    let invalid = || TimeWindowError::InvalidClockTime {
        label: label.to_owned(),
        value: value.trim().to_owned(),
    };

    let parts = value.trim().split(':').collect::<Vec<_>>();
    let [hour, minute, second] = parts.as_slice() else {
        return Err(invalid());
    };

    let field = |part: &str| -> Result<i8, TimeWindowError> {
        if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        part.parse::<i8>().map_err(|_| invalid())
    };

    Time::new(field(*hour)?, field(*minute)?, field(*second)?, 0).map_err(|_| invalid())
}
