use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DEFAULT_RANGE_SEPARATOR, DateError};

/// A finalized stay: check-in and check-out days, inclusive.
/// Check-in never comes after check-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct ConfirmedRange {
    check_in:  CalendarDate,
    check_out: CalendarDate,
}

/// Error type for confirmed range construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Check-in date is after check-out date.
    #[error("Invalid date range: check-in ({check_in}) is after check-out ({check_out})")]
    InvalidRange {
        check_in:  CalendarDate,
        check_out: CalendarDate,
    },

    /// Error building a date component.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Wire shape mirrored by the input box: `{"checkIn": .., "checkOut": ..}`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRange {
    check_in:  CalendarDate,
    check_out: CalendarDate,
}

impl TryFrom<RawRange> for ConfirmedRange {
    type Error = RangeError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.check_in, raw.check_out)
    }
}

impl From<ConfirmedRange> for RawRange {
    fn from(range: ConfirmedRange) -> Self {
        Self {
            check_in:  range.check_in,
            check_out: range.check_out,
        }
    }
}

impl ConfirmedRange {
    /// Creates a range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if check-in > check-out.
    pub fn new(check_in: CalendarDate, check_out: CalendarDate) -> Result<Self, RangeError> {
        if check_in > check_out {
            return Err(RangeError::InvalidRange { check_in, check_out });
        }
        Ok(Self { check_in, check_out })
    }

    /// Creates a range from two dates in any order.
    pub fn ordered(a: CalendarDate, b: CalendarDate) -> Self {
        Self {
            check_in:  a.min(b),
            check_out: a.max(b),
        }
    }

    pub const fn check_in(&self) -> CalendarDate {
        self.check_in
    }

    pub const fn check_out(&self) -> CalendarDate {
        self.check_out
    }

    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.check_in, self.check_out)
    }

    /// Nights between check-in and check-out.
    pub fn nights(&self) -> u32 {
        u32::try_from(self.check_in.days_until(&self.check_out)).unwrap_or_default()
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.check_in <= *date && *date <= self.check_out
    }

    /// en-US rendering joined by `separator`, e.g. `1/5/2024 | 1/10/2024`.
    pub fn display_with(&self, separator: &str) -> String {
        format!(
            "{}{separator}{}",
            self.check_in.us_short(),
            self.check_out.us_short()
        )
    }
}

impl fmt::Display for ConfirmedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(DEFAULT_RANGE_SEPARATOR))
    }
}
