//! Countdown duration and adjustment units

use std::{fmt, str::FromStr};

use crate::error::ParseDurationError;

/// Remaining countdown time with second granularity, never negative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountdownDuration(u64);

impl CountdownDuration {
    pub const ZERO: Self = Self(0);

    pub fn from_seconds(seconds: u64) -> Self {
        Self(seconds)
    }

    pub fn from_hms(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self(
            hours
                .saturating_mul(3600)
                .saturating_add(minutes.saturating_mul(60))
                .saturating_add(seconds),
        )
    }

    pub fn as_seconds(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn hours(&self) -> u64 {
        self.0 / 3600
    }

    pub fn minutes(&self) -> u64 {
        (self.0 % 3600) / 60
    }

    pub fn seconds(&self) -> u64 {
        self.0 % 60
    }

    /// Add a signed number of seconds, clamping at zero
    pub fn offset(self, delta_seconds: i64) -> Self {
        if delta_seconds >= 0 {
            Self(self.0.saturating_add(delta_seconds as u64))
        } else {
            Self(self.0.saturating_sub(delta_seconds.unsigned_abs()))
        }
    }

    /// One second less, stopping at zero
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

/// Renders as zero-padded `HH:MM:SS`; the hours field is unbounded.
impl fmt::Display for CountdownDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours(), self.minutes(), self.seconds())
    }
}

impl FromStr for CountdownDuration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseDurationError::Empty);
        }

        let fields: Vec<&str> = s.split(':').collect();
        if fields.len() != 3 {
            return Err(ParseDurationError::FieldCount(fields.len()));
        }

        let hours = parse_field("hours", fields[0])?;
        let minutes = parse_field("minutes", fields[1])?;
        let seconds = parse_field("seconds", fields[2])?;

        for (field, value) in [("minutes", minutes), ("seconds", seconds)] {
            if value >= 60 {
                return Err(ParseDurationError::OutOfRange { field, value });
            }
        }

        Ok(Self::from_hms(hours, minutes, seconds))
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<u64, ParseDurationError> {
    // Digits only; u64::from_str would also take a leading '+'
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseDurationError::InvalidField {
            field,
            value: value.to_string(),
        });
    }
    value.parse().map_err(|_| ParseDurationError::InvalidField {
        field,
        value: value.to_string(),
    })
}

/// Unit an adjustment value is scaled into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Unit {
    Hours,
    Minutes,
    #[default]
    Seconds,
}

impl Unit {
    pub fn seconds_per_unit(&self) -> i64 {
        match self {
            Unit::Hours => 3600,
            Unit::Minutes => 60,
            Unit::Seconds => 1,
        }
    }

    /// Convert an adjustment value to seconds, saturating on overflow
    pub fn to_seconds(&self, delta: i64) -> i64 {
        delta.saturating_mul(self.seconds_per_unit())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
        };
        f.write_str(name)
    }
}
