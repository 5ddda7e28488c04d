use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MONTH_NAMES,
};
use std::fmt;
use std::num::{NonZeroU8, NonZeroU16};

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        let non_zero = NonZeroU16::new(value).ok_or(DateError::InvalidYear(i64::from(value)))?;
        if value > MAX_YEAR {
            return Err(DateError::InvalidYear(i64::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Creates a Year from a signed value produced by month arithmetic.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value falls outside `1..=MAX_YEAR`.
    pub fn from_signed(value: i32) -> Result<Self, DateError> {
        u16::try_from(value)
            .map_err(|_| DateError::InvalidYear(i64::from(value)))
            .and_then(Self::new)
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
///
/// Calendar widgets usually count months from zero; `zero_based` and
/// `from_zero_based` convert at that edge so the rest of the crate stays
/// one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Creates a Month from a zero-based index (`0` is January).
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the index is not in `0..12`.
    pub fn from_zero_based(index: u8) -> Result<Self, DateError> {
        Self::new(index.saturating_add(1))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based index of the month (`0` is January)
    #[inline]
    pub const fn zero_based(self) -> u8 {
        self.0.get() - 1
    }

    /// English name of the month
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0.get() as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A day value guaranteed to be valid for a given year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of the given month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > days_in_month(year.get(), month.get()) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    pub(crate) const fn first() -> Self {
        Self(NonZeroU8::MIN)
    }

    /// Last day of the given month
    pub(crate) fn last_of(year: Year, month: Month) -> Self {
        let last = days_in_month(year.get(), month.get());
        Self(NonZeroU8::new(last).unwrap_or(NonZeroU8::MIN))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
