use std::fmt;

use crate::consts::HEADER_SEPARATOR;
use crate::date::{CalendarDate, DateError};
use crate::month::YearMonth;

/// A day paired with its position in the flattened two-month sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DaySlot {
    pub index: usize,
    pub date: CalendarDate,
}

/// The two consecutive months shown side by side.
///
/// Slots of the first month occupy `0..boundary()`, slots of the second
/// month occupy `boundary()..len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoMonthWindow {
    first: YearMonth,
    second: YearMonth,
    days: Vec<CalendarDate>,
}

impl TwoMonthWindow {
    /// Builds the window starting at `first`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` when `first` is December 9999.
    pub fn new(first: YearMonth) -> Result<Self, DateError> {
        let second = first.next()?;
        let mut days = first.days();
        days.extend(second.days());
        Ok(Self { first, second, days })
    }

    /// Builds the window whose first month contains `date`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` when `date` falls in December 9999.
    pub fn containing(date: CalendarDate) -> Result<Self, DateError> {
        Self::new(date.year_month())
    }

    pub const fn first(&self) -> YearMonth {
        self.first
    }

    pub const fn second(&self) -> YearMonth {
        self.second
    }

    /// Index of the first slot of the second month.
    pub fn boundary(&self) -> usize {
        self.first.len()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn dates(&self) -> &[CalendarDate] {
        &self.days
    }

    pub fn slots(&self) -> impl Iterator<Item = DaySlot> + '_ {
        self.days
            .iter()
            .enumerate()
            .map(|(index, &date)| DaySlot { index, date })
    }

    /// Slots of the first month only.
    pub fn first_month_slots(&self) -> impl Iterator<Item = DaySlot> + '_ {
        self.slots().take(self.boundary())
    }

    /// Slots of the second month only, indices offset by `boundary()`.
    pub fn second_month_slots(&self) -> impl Iterator<Item = DaySlot> + '_ {
        self.slots().skip(self.boundary())
    }

    pub fn slot_at(&self, index: usize) -> Option<CalendarDate> {
        self.days.get(index).copied()
    }

    pub fn index_of(&self, date: CalendarDate) -> Option<usize> {
        self.days.binary_search(&date).ok()
    }

    /// The window shifted one month forward.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` past the last representable month.
    pub fn next(&self) -> Result<Self, DateError> {
        Self::new(self.second)
    }

    /// The window shifted one month back.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` before the first representable month.
    pub fn previous(&self) -> Result<Self, DateError> {
        Self::new(self.first.previous()?)
    }

    /// Header label, e.g. `January 2024 - February 2024`.
    pub fn header(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TwoMonthWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{HEADER_SEPARATOR}{}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, window};

    #[test]
    fn test_layout_january_2024() {
        let w = window(2024, 1);
        assert_eq!(w.boundary(), 31);
        assert_eq!(w.len(), 31 + 29);
        assert_eq!(w.slot_at(0), Some(date(2024, 1, 1)));
        assert_eq!(w.slot_at(4), Some(date(2024, 1, 5)));
        assert_eq!(w.slot_at(30), Some(date(2024, 1, 31)));
        assert_eq!(w.slot_at(31), Some(date(2024, 2, 1)));
        assert_eq!(w.slot_at(59), Some(date(2024, 2, 29)));
        assert_eq!(w.slot_at(60), None);
    }

    #[test]
    fn test_slots_are_contiguous_and_disjoint() {
        let w = window(2023, 11);
        let first: Vec<_> = w.first_month_slots().collect();
        let second: Vec<_> = w.second_month_slots().collect();

        assert_eq!(first.len(), 30);
        assert_eq!(second.len(), 31);
        assert_eq!(second[0].index, w.boundary());
        assert_eq!(second[0].date, date(2023, 12, 1));
        for (expected, slot) in w.slots().enumerate() {
            assert_eq!(slot.index, expected);
        }
    }

    #[test]
    fn test_index_of_round_trips_slots() {
        let w = window(2024, 12);
        for slot in w.slots() {
            assert_eq!(w.index_of(slot.date), Some(slot.index));
        }
        assert_eq!(w.index_of(date(2024, 11, 30)), None);
    }

    #[test]
    fn test_navigation_crosses_years() {
        let w = window(2024, 12);
        assert_eq!(w.second().to_string(), "January 2025");

        let next = w.next().unwrap();
        assert_eq!(next.first(), w.second());
        assert_eq!(next.header(), "January 2025 - February 2025");

        let back = next.previous().unwrap();
        assert_eq!(back, w);
    }

    #[test]
    fn test_window_limits() {
        let w = window(9999, 11);
        assert!(w.next().is_err());
        assert!(window(1, 1).previous().is_err());
        assert!(TwoMonthWindow::containing(date(9999, 12, 1)).is_err());
    }
}
