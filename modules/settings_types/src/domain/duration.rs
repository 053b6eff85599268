//! Duration codec for the `NdNhNmNs` text format
//!
//! Stored durations carry no upper bound per unit (`36h` is a legal stored
//! value). The 24/60/60 bounds apply only to `DurationDraft` while editing.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::contract::ValueError;

#[allow(clippy::unwrap_used)]
static DURATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d+)d)?(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s)?$").unwrap()
});

/// Elapsed time split into days, hours, minutes and seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Duration {
    pub const fn new(days: u64, hours: u64, minutes: u64, seconds: u64) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Parse duration text
    ///
    /// Every unit is optional but units must appear in `d`, `h`, `m`, `s`
    /// order. The whole input must match. Returns `None` otherwise, including
    /// when a unit overflows `u64`.
    pub fn parse(input: &str) -> Option<Self> {
        let captures = DURATION_REGEX.captures(input)?;

        let unit = |index: usize| -> Option<u64> {
            match captures.get(index) {
                Some(m) => m.as_str().parse().ok(),
                None => Some(0),
            }
        };

        Some(Self {
            days: unit(1)?,
            hours: unit(2)?,
            minutes: unit(3)?,
            seconds: unit(4)?,
        })
    }

    /// Format as duration text
    ///
    /// Zero units are skipped. Seconds are always written when nothing else
    /// was, so the empty duration reads `0s`.
    pub fn format(&self) -> String {
        let mut out = String::new();

        if self.days > 0 {
            out.push_str(&format!("{}d", self.days));
        }

        if self.hours > 0 {
            out.push_str(&format!("{}h", self.hours));
        }

        if self.minutes > 0 {
            out.push_str(&format!("{}m", self.minutes));
        }

        if self.seconds > 0 || out.is_empty() {
            out.push_str(&format!("{}s", self.seconds));
        }

        out
    }

    /// Total length in seconds, saturating on overflow
    pub fn total_seconds(&self) -> u64 {
        self.days
            .saturating_mul(86_400)
            .saturating_add(self.hours.saturating_mul(3_600))
            .saturating_add(self.minutes.saturating_mul(60))
            .saturating_add(self.seconds)
    }

    pub fn to_std(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.total_seconds())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for Duration {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValueError::InvalidDuration {
            input: s.to_string(),
        })
    }
}

/// One segment of the duration editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationField {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl DurationField {
    pub const ALL: [DurationField; 4] = [
        DurationField::Days,
        DurationField::Hours,
        DurationField::Minutes,
        DurationField::Seconds,
    ];

    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Days => "d",
            Self::Hours => "h",
            Self::Minutes => "m",
            Self::Seconds => "s",
        }
    }

    /// Range check applied while editing
    pub fn is_valid(&self, value: i64) -> bool {
        match self {
            Self::Days => value >= 0,
            Self::Hours => (0..24).contains(&value),
            Self::Minutes | Self::Seconds => (0..60).contains(&value),
        }
    }
}

/// Draft of a duration while it is being edited
///
/// Fields are signed so that out-of-range input is representable and can be
/// flagged instead of silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationDraft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl DurationDraft {
    pub fn get(&self, field: DurationField) -> i64 {
        match field {
            DurationField::Days => self.days,
            DurationField::Hours => self.hours,
            DurationField::Minutes => self.minutes,
            DurationField::Seconds => self.seconds,
        }
    }

    /// Copy of this draft with one field replaced
    pub fn with_field(&self, field: DurationField, value: i64) -> Self {
        let mut next = *self;
        match field {
            DurationField::Days => next.days = value,
            DurationField::Hours => next.hours = value,
            DurationField::Minutes => next.minutes = value,
            DurationField::Seconds => next.seconds = value,
        }
        next
    }

    pub fn is_field_valid(&self, field: DurationField) -> bool {
        field.is_valid(self.get(field))
    }

    /// Conjunction of all four field checks
    pub fn is_valid(&self) -> bool {
        DurationField::ALL
            .iter()
            .all(|field| self.is_field_valid(*field))
    }

    /// Convert a valid draft back into a duration
    pub fn to_duration(&self) -> Result<Duration, ValueError> {
        if let Some(field) = DurationField::ALL
            .iter()
            .find(|field| !self.is_field_valid(**field))
        {
            return Err(ValueError::InvalidDraft {
                reason: format!(
                    "{} out of range: {}",
                    field.suffix(),
                    self.get(*field)
                ),
            });
        }

        let unsigned = |v: i64| u64::try_from(v).unwrap_or_default();

        Ok(Duration {
            days: unsigned(self.days),
            hours: unsigned(self.hours),
            minutes: unsigned(self.minutes),
            seconds: unsigned(self.seconds),
        })
    }
}

impl From<Duration> for DurationDraft {
    fn from(d: Duration) -> Self {
        let signed = |v: u64| i64::try_from(v).unwrap_or(i64::MAX);
        Self {
            days: signed(d.days),
            hours: signed(d.hours),
            minutes: signed(d.minutes),
            seconds: signed(d.seconds),
        }
    }
}

/// Coerce text typed into a numeric segment; anything non-numeric reads as 0
pub fn parse_digit_input(input: &str) -> i64 {
    input.trim().parse().unwrap_or(0)
}
