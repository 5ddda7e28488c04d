use std::str::FromStr;

use crate::consts::{DATE_SEPARATOR, MAX_MONTH, MAX_YEAR, US_SEPARATOR};
use crate::month::YearMonth;
use crate::prelude::*;
use crate::types::{Day, Month, Year};

/// Errors raised while building or parsing calendar values.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// A concrete day of the Gregorian calendar.
///
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

impl CalendarDate {
    /// Creates a date from raw one-based components.
    ///
    /// # Errors
    /// Returns the first `DateError` among year, month and day validation.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from already validated year and month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: u8) -> Result<Self, DateError> {
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// First day of the given month.
    pub fn first_of(year_month: YearMonth) -> Self {
        Self {
            year: year_month.year(),
            month: year_month.month(),
            day: Day::first(),
        }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// The (year, month, day) triple, month and day one-based.
    pub const fn ymd(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// The month this date belongs to.
    pub const fn year_month(&self) -> YearMonth {
        YearMonth::from_parts(self.year, self.month)
    }

    /// The following day within the same month, `None` on the last day.
    pub fn next_in_month(&self) -> Option<Self> {
        let next = self.day.get().checked_add(1)?;
        Self::from_parts(self.year, self.month, next).ok()
    }

    /// Days elapsed since 0000-03-01 of the proleptic Gregorian calendar.
    fn day_number(&self) -> i64 {
        let (y, m, d) = self.ymd();
        let (y, m, d) = (i64::from(y), i64::from(m), i64::from(d));
        // Count years from March so the leap day sits at the end of the year.
        let y = if m <= 2 { y - 1 } else { y };
        let era = y.div_euclid(400);
        let yoe = y - era * 400;
        let mp = (m + 9) % 12;
        let doy = (153 * mp + 2) / 5 + d - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &Self) -> i64 {
        other.day_number() - self.day_number()
    }

    /// en-US numeric rendering without padding, e.g. `1/5/2024`.
    pub fn us_short(&self) -> String {
        format!(
            "{}{US_SEPARATOR}{}{US_SEPARATOR}{}",
            self.month.get(),
            self.day.get(),
            self.year.get()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
            )));
        };

        let year = year
            .parse::<u16>()
            .map_err(|_| DateError::InvalidFormat((*year).to_owned()))?;
        let month = month
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat((*month).to_owned()))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat((*day).to_owned()))?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_and_accessors() {
        let d = CalendarDate::new(2024, 1, 5).unwrap();
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), 1);
        assert_eq!(d.day(), 5);
        assert_eq!(d.ymd(), (2024, 1, 5));
    }

    #[test]
    fn test_new_rejects_invalid_components() {
        assert!(matches!(CalendarDate::new(0, 1, 1), Err(DateError::InvalidYear(0))));
        assert!(matches!(CalendarDate::new(2024, 13, 1), Err(DateError::InvalidMonth(13))));
        assert!(matches!(
            CalendarDate::new(2023, 2, 29),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert!(date(2024, 1, 31) < date(2024, 2, 1));
        assert!(date(2024, 2, 1) < date(2024, 2, 2));
    }

    #[test]
    fn test_display_and_us_short() {
        let d = date(2024, 1, 5);
        assert_eq!(d.to_string(), "2024-01-05");
        assert_eq!(d.us_short(), "1/5/2024");
        assert_eq!(date(2024, 12, 25).us_short(), "12/25/2024");
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!("2024-02-29".parse::<CalendarDate>().unwrap(), date(2024, 2, 29));
        assert_eq!(" 2024-01-05 ".parse::<CalendarDate>().unwrap(), date(2024, 1, 5));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<CalendarDate>(), Err(DateError::EmptyInput)));
        assert!(matches!(
            "2024-01".parse::<CalendarDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-01-XX".parse::<CalendarDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2023-02-29".parse::<CalendarDate>(),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_next_in_month() {
        assert_eq!(date(2024, 1, 5).next_in_month(), Some(date(2024, 1, 6)));
        assert_eq!(date(2024, 1, 31).next_in_month(), None);
        assert_eq!(date(2024, 2, 28).next_in_month(), Some(date(2024, 2, 29)));
        assert_eq!(date(2023, 2, 28).next_in_month(), None);
    }

    #[test]
    fn test_days_until() {
        assert_eq!(date(2024, 1, 5).days_until(&date(2024, 1, 10)), 5);
        assert_eq!(date(2024, 1, 10).days_until(&date(2024, 1, 5)), -5);
        assert_eq!(date(2024, 2, 28).days_until(&date(2024, 3, 1)), 2);
        assert_eq!(date(2023, 2, 28).days_until(&date(2023, 3, 1)), 1);
        assert_eq!(date(2023, 12, 31).days_until(&date(2024, 1, 1)), 1);
        assert_eq!(date(2024, 1, 1).days_until(&date(2025, 1, 1)), 366);
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(2024, 1, 5);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2024-01-05""#);
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        let invalid: Result<CalendarDate, _> = serde_json::from_str(r#""2024-02-30""#);
        assert!(invalid.is_err());
    }
}
