use chrono::prelude::*;
use chrono::Days;
use std::iter::FusedIterator;

use crate::calendars::DateLike;
use crate::error::Result;
use crate::parser::parse_date;

/// Simple date adjustment defining working days, holidays and business days, and rolling.
///
/// Every operation is derived from [`DateRoll::is_bus_day`]. Implementors must define at least one
/// working day, otherwise the rolling methods never terminate.
///
/// Dates passed to the rolling methods must lie in [`YEAR_RANGE`](crate::parser::YEAR_RANGE),
/// which every date from [`parse_date`] does. Stepping past chrono's own bounds panics.
pub trait DateRoll {
    /// Returns whether the date falls on one of the calendar's working weekdays.
    fn is_working_day(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date is a specific holiday excluded from the working week.
    fn is_holiday(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date is a business day, i.e. a working day and not a holiday.
    fn is_bus_day(&self, date: &NaiveDate) -> bool {
        self.is_working_day(date) && !self.is_holiday(date)
    }

    /// Returns whether the date is not a business day, i.e. either not a working day or a specific holiday.
    fn is_non_bus_day(&self, date: &NaiveDate) -> bool {
        !self.is_bus_day(date)
    }

    /// Parse any date-like value and return whether it is a business day.
    ///
    /// Text is read by [`parse_date`], so a year-less string is taken in the current year.
    ///
    /// # Errors
    /// [`CalendarError::InvalidDate`](crate::CalendarError) if `date` is text that cannot be parsed.
    fn is_business_day(&self, date: impl Into<DateLike>) -> Result<bool>
    where
        Self: Sized,
    {
        let date = parse_date(date)?;
        Ok(self.is_bus_day(&date))
    }

    /// Return the `date`, if a business day, or get the next business date after `date`.
    fn roll_forward_bus_day(&self, date: &NaiveDate) -> NaiveDate {
        let mut new_date = *date;
        while !self.is_bus_day(&new_date) {
            new_date = new_date + Days::new(1);
        }
        new_date
    }

    /// Return the `date`, if a business day, or get the business day preceding `date`.
    fn roll_backward_bus_day(&self, date: &NaiveDate) -> NaiveDate {
        let mut new_date = *date;
        while !self.is_bus_day(&new_date) {
            new_date = new_date - Days::new(1);
        }
        new_date
    }

    /// Return the first business day strictly after `date`.
    ///
    /// *Note*: one calendar day is always added first, so a business day `date` is never returned.
    fn next_bus_day(&self, date: &NaiveDate) -> NaiveDate {
        self.roll_forward_bus_day(&(*date + Days::new(1)))
    }

    /// Return the last business day strictly before `date`.
    fn previous_bus_day(&self, date: &NaiveDate) -> NaiveDate {
        self.roll_backward_bus_day(&(*date - Days::new(1)))
    }

    /// Add a given number of business days to a `date`.
    ///
    /// *Note*: a non-business `date` is first rolled **forwards** and that roll does not count
    /// as a step, so adding **zero** business days returns the rolled date rather than `date`.
    fn add_bus_days(&self, date: &NaiveDate, days: u32) -> NaiveDate {
        let mut new_date = self.roll_forward_bus_day(date);
        for _ in 0..days {
            new_date = self.next_bus_day(&new_date);
        }
        new_date
    }

    /// Subtract a given number of business days from a `date`.
    ///
    /// *Note*: a non-business `date` is first rolled **backwards** and that roll does not count
    /// as a step. This is therefore not an exact inverse of [`DateRoll::add_bus_days`] for
    /// non-business dates.
    fn sub_bus_days(&self, date: &NaiveDate, days: u32) -> NaiveDate {
        let mut new_date = self.roll_backward_bus_day(date);
        for _ in 0..days {
            new_date = self.previous_bus_day(&new_date);
        }
        new_date
    }

    /// Return the business dates from `start`, inclusive, up to `end`, exclusive.
    ///
    /// The iterator is lazy and can be cloned to restart it. It is empty if `end <= start`.
    fn bus_date_range(&self, start: &NaiveDate, end: &NaiveDate) -> BusDateRange<'_, Self>
    where
        Self: Sized,
    {
        BusDateRange {
            calendar: self,
            next: *start,
            end: *end,
        }
    }

    /// Return the number of business dates from `start`, inclusive, up to `end`, exclusive.
    ///
    /// `start` counts if it is itself a business day. `end` never counts.
    fn bus_days_between(&self, start: &NaiveDate, end: &NaiveDate) -> usize
    where
        Self: Sized,
    {
        self.bus_date_range(start, end).count()
    }
}

/// Iterator over the business days of a half-open date range.
///
/// Created by [`DateRoll::bus_date_range`].
#[derive(Debug)]
pub struct BusDateRange<'a, T: DateRoll> {
    calendar: &'a T,
    next: NaiveDate,
    end: NaiveDate,
}

impl<T: DateRoll> Clone for BusDateRange<'_, T> {
    fn clone(&self) -> Self {
        BusDateRange {
            calendar: self.calendar,
            next: self.next,
            end: self.end,
        }
    }
}

impl<T: DateRoll> Iterator for BusDateRange<'_, T> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        while self.next < self.end {
            let date = self.next;
            self.next = date + Days::new(1);
            if self.calendar.is_bus_day(&date) {
                return Some(date);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next).num_days().max(0);
        (0, usize::try_from(remaining).ok())
    }
}

impl<T: DateRoll> FusedIterator for BusDateRange<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{nd, Cal};

    fn fixture_hol_cal() -> Cal {
        // Saturday and Monday
        Cal::default()
            .with_holidays([nd(2015, 9, 5), nd(2015, 9, 7)])
            .unwrap()
    }

    #[test]
    fn test_roll_forward_bus_day() {
        let cal = fixture_hol_cal();
        assert_eq!(cal.roll_forward_bus_day(&nd(2015, 9, 7)), nd(2015, 9, 8));
        assert_eq!(cal.roll_forward_bus_day(&nd(2015, 9, 5)), nd(2015, 9, 8));
        assert_eq!(cal.roll_forward_bus_day(&nd(2015, 9, 4)), nd(2015, 9, 4));
    }

    #[test]
    fn test_roll_backward_bus_day() {
        let cal = fixture_hol_cal();
        assert_eq!(cal.roll_backward_bus_day(&nd(2015, 9, 7)), nd(2015, 9, 4));
        assert_eq!(cal.roll_backward_bus_day(&nd(2015, 9, 6)), nd(2015, 9, 4));
        assert_eq!(cal.roll_backward_bus_day(&nd(2015, 9, 4)), nd(2015, 9, 4));
    }

    #[test]
    fn test_is_business_day() {
        let cal = fixture_hol_cal();
        assert!(!cal.is_bus_day(&nd(2015, 9, 7))); // Monday in Hol list
        assert!(cal.is_bus_day(&nd(2015, 9, 10))); // Thursday
        assert!(!cal.is_bus_day(&nd(2024, 1, 6))); // Saturday
    }

    #[test]
    fn test_is_non_business_day() {
        let cal = fixture_hol_cal();
        assert!(cal.is_non_bus_day(&nd(2015, 9, 7)));
        assert!(!cal.is_non_bus_day(&nd(2015, 9, 10)));
        assert!(cal.is_non_bus_day(&nd(2024, 1, 6)));
    }

    #[test]
    fn test_is_business_day_parses_input() {
        let cal = fixture_hol_cal();
        assert!(!cal.is_business_day("Mon 7th Sep 2015").unwrap());
        assert!(cal.is_business_day("10/9/2015").unwrap());
        assert!(cal.is_business_day(nd(2015, 9, 10)).unwrap());
        assert!(cal.is_business_day("not a date").is_err());
    }

    #[test]
    fn test_next_and_previous_bus_day() {
        let cal = fixture_hol_cal();
        // Friday -> Tuesday over the weekend and the Monday holiday
        assert_eq!(cal.next_bus_day(&nd(2015, 9, 4)), nd(2015, 9, 8));
        assert_eq!(cal.next_bus_day(&nd(2015, 9, 8)), nd(2015, 9, 9));
        assert_eq!(cal.previous_bus_day(&nd(2015, 9, 8)), nd(2015, 9, 4));
        assert_eq!(cal.previous_bus_day(&nd(2015, 9, 9)), nd(2015, 9, 8));
    }

    #[test]
    fn test_add_bus_days() {
        let cal = fixture_hol_cal();
        assert_eq!(cal.add_bus_days(&nd(2015, 9, 3), 2), nd(2015, 9, 8));
        // Saturday is rolled to Tuesday before counting
        assert_eq!(cal.add_bus_days(&nd(2015, 9, 5), 0), nd(2015, 9, 8));
        assert_eq!(cal.add_bus_days(&nd(2015, 9, 5), 1), nd(2015, 9, 9));
    }

    #[test]
    fn test_sub_bus_days() {
        let cal = fixture_hol_cal();
        assert_eq!(cal.sub_bus_days(&nd(2015, 9, 9), 2), nd(2015, 9, 4));
        // Monday holiday is rolled to Friday before counting
        assert_eq!(cal.sub_bus_days(&nd(2015, 9, 7), 0), nd(2015, 9, 4));
        assert_eq!(cal.sub_bus_days(&nd(2015, 9, 7), 1), nd(2015, 9, 3));
    }

    #[test]
    fn test_bus_date_range() {
        let cal = fixture_hol_cal();
        let range = cal.bus_date_range(&nd(2015, 9, 3), &nd(2015, 9, 10));
        let expected = vec![nd(2015, 9, 3), nd(2015, 9, 4), nd(2015, 9, 8), nd(2015, 9, 9)];
        assert_eq!(range.clone().collect::<Vec<_>>(), expected);
        // restartable
        assert_eq!(range.collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_bus_date_range_empty() {
        let cal = fixture_hol_cal();
        assert_eq!(cal.bus_date_range(&nd(2015, 9, 10), &nd(2015, 9, 10)).count(), 0);
        assert_eq!(cal.bus_date_range(&nd(2015, 9, 10), &nd(2015, 9, 1)).count(), 0);
        assert_eq!(cal.bus_days_between(&nd(2015, 9, 10), &nd(2015, 9, 1)), 0);
    }

    #[test]
    fn test_bus_days_between() {
        let cal = fixture_hol_cal();
        assert_eq!(cal.bus_days_between(&nd(2015, 9, 3), &nd(2015, 9, 10)), 4);
        // end date excluded even when a business day
        assert_eq!(cal.bus_days_between(&nd(2015, 9, 8), &nd(2015, 9, 9)), 1);
    }

    #[test]
    fn test_rolling_at_last_parsable_year() {
        let cal = Cal::default();
        // Friday 31st December 9999
        let last = parse_date("Fri 31/12/9999").unwrap();
        assert_eq!(cal.next_bus_day(&last), nd(10000, 1, 3));
        assert_eq!(cal.add_bus_days(&last, 1), nd(10000, 1, 3));
        let first = parse_date("Mon 1/1/0001").unwrap();
        assert_eq!(cal.previous_bus_day(&first), nd(0, 12, 29));
        assert!(parse_date("Fri 31/12/262142").is_err());
    }

    #[test]
    fn test_trait_object() {
        let cal = fixture_hol_cal();
        let dyn_cal: &dyn DateRoll = &cal;
        assert_eq!(dyn_cal.add_bus_days(&nd(2015, 9, 4), 1), nd(2015, 9, 8));
        assert_eq!(dyn_cal.sub_bus_days(&nd(2015, 9, 8), 1), nd(2015, 9, 4));
    }
}
