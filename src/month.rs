//! Month arithmetic and the month grid generator.
//!
//! Months enter the crate zero-based (the way calendar views count them) and
//! are normalized by rollover: index `12` is January of the following year,
//! index `-1` is December of the previous one.

use std::fmt;

use crate::consts::MONTHS_PER_YEAR;
use crate::date::{CalendarDate, DateError};
use crate::types::{Day, Month, Year};

/// A calendar month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: Year,
    month: Month,
}

impl YearMonth {
    pub const fn from_parts(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Creates a month from a one-based month number.
    ///
    /// # Errors
    /// Returns `DateError` if the year or month is out of range.
    pub fn new(year: u16, month: u8) -> Result<Self, DateError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
        })
    }

    /// Creates a month from a zero-based month index, rolling over into
    /// neighbouring years when the index is outside `0..12`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the normalized year is out of range.
    pub fn from_zero_based(year: i32, month_index: i32) -> Result<Self, DateError> {
        let total = i64::from(year) * i64::from(MONTHS_PER_YEAR) + i64::from(month_index);
        let months = i64::from(MONTHS_PER_YEAR);
        let normalized_year = total.div_euclid(months);
        let normalized_index = total.rem_euclid(months);

        let year = i32::try_from(normalized_year)
            .map_err(|_| DateError::InvalidYear(normalized_year))
            .and_then(Year::from_signed)?;
        // rem_euclid keeps the index in 0..12
        let month = Month::from_zero_based(u8::try_from(normalized_index).unwrap_or_default())?;
        Ok(Self { year, month })
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    /// Number of days in this month.
    pub fn len(&self) -> usize {
        usize::from(self.last_day().day())
    }

    /// Months always have days; present so `len` has its usual companion.
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn first_day(&self) -> CalendarDate {
        CalendarDate::first_of(*self)
    }

    pub fn last_day(&self) -> CalendarDate {
        let last = Day::last_of(self.year, self.month);
        CalendarDate::from_parts(self.year, self.month, last.get()).unwrap_or_else(|_| self.first_day())
    }

    /// Shifts by `delta` months.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` when the result leaves `1..=MAX_YEAR`.
    pub fn offset(&self, delta: i32) -> Result<Self, DateError> {
        Self::from_zero_based(
            i32::from(self.year.get()),
            i32::from(self.month.zero_based()) + delta,
        )
    }

    /// The following month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` after December 9999.
    pub fn next(&self) -> Result<Self, DateError> {
        self.offset(1)
    }

    /// The preceding month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` before January of year 1.
    pub fn previous(&self) -> Result<Self, DateError> {
        self.offset(-1)
    }

    /// Every day of the month in ascending order.
    pub fn days(&self) -> Vec<CalendarDate> {
        std::iter::successors(Some(self.first_day()), CalendarDate::next_in_month).collect()
    }
}

impl fmt::Display for YearMonth {
    /// Long form used by headers, e.g. `January 2024`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

/// Generates every day of a month given a zero-based month index.
///
/// `month` outside `0..12` rolls over into the neighbouring year, so
/// `generate_month_days(2023, 12)` yields January 2024.
///
/// # Errors
/// Returns `DateError::InvalidYear` if the normalized year is out of range.
pub fn generate_month_days(year: i32, month: i32) -> Result<Vec<CalendarDate>, DateError> {
    YearMonth::from_zero_based(year, month).map(|ym| ym.days())
}
