use chrono::prelude::*;
use chrono::Weekday;
use indexmap::set::IndexSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::calendars::{CalendarConfig, CalendarLoader, DateLike, DateRoll};
use crate::error::{CalendarError, Result};
use crate::parser::DateParser;

/// The working week used when no working days are given.
pub const DEFAULT_WORKING_DAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

const DAY_NAMES: [(&str, Weekday); 7] = [
    ("mon", Weekday::Mon),
    ("tue", Weekday::Tue),
    ("wed", Weekday::Wed),
    ("thu", Weekday::Thu),
    ("fri", Weekday::Fri),
    ("sat", Weekday::Sat),
    ("sun", Weekday::Sun),
];

/// Normalise a weekday name: lowercase it and match its first three letters.
///
/// `"Monday"`, `"MON"` and `"mon"` are all Monday.
///
/// # Errors
/// [`CalendarError::InvalidConfiguration`] naming `name` if it matches no weekday.
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    let token: String = name.trim().to_lowercase().chars().take(3).collect();
    DAY_NAMES
        .iter()
        .find(|(n, _)| *n == token)
        .map(|(_, d)| *d)
        .ok_or_else(|| CalendarError::InvalidConfiguration {
            value: name.to_string(),
        })
}

/// The canonical three letter token for a weekday, e.g. `"mon"`.
pub fn weekday_token(day: Weekday) -> &'static str {
    DAY_NAMES[day.num_days_from_monday() as usize].0
}

/// A business day calendar with a set of working weekdays and a list of holidays.
///
/// A business day calendar is formed of 2 components:
///
/// - `working_days`: the days of the week that are general business days. Typically Monday to
///   Friday, but any non-empty subset of the week is allowed.
/// - `holidays`: specific dates that are exceptions to the working week and cannot be
///   business days.
///
/// A [`Cal`] is validated in full when it is built and never changes afterwards, so it can be
/// shared freely between threads.
///
/// ```rust
/// # use business_calendar::{Cal, DateRoll, nd};
/// let cal = Cal::try_new(["Monday", "Tue", "wed", "thu", "fri"], ["1st Jan, 2013"]).unwrap();
/// assert!(cal.is_business_day("2nd Jan, 2013").unwrap());
/// assert!(!cal.is_business_day("5th Jan, 2013").unwrap());
/// assert_eq!(cal.add_bus_days(&nd(2012, 12, 31), 1), nd(2013, 1, 2));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CalendarConfig", into = "CalendarConfig")]
pub struct Cal {
    pub(crate) working_days: IndexSet<Weekday>,
    pub(crate) holidays: IndexSet<NaiveDate>,
}

impl Default for Cal {
    /// Monday to Friday with no holidays.
    fn default() -> Self {
        Cal {
            working_days: IndexSet::from_iter(DEFAULT_WORKING_DAYS),
            holidays: IndexSet::new(),
        }
    }
}

impl Cal {
    /// Create a calendar.
    ///
    /// `working_days` are weekday names in any case, matched on their first three letters; if
    /// empty, Monday to Friday is used. `holidays` are any values convertible to a [`DateLike`];
    /// text is parsed day first and any time of day is dropped.
    ///
    /// # Errors
    /// [`CalendarError::InvalidConfiguration`] for an unknown weekday name and
    /// [`CalendarError::InvalidDate`] for an unparsable holiday.
    pub fn try_new<S, D>(
        working_days: impl IntoIterator<Item = S>,
        holidays: impl IntoIterator<Item = D>,
    ) -> Result<Self>
    where
        S: AsRef<str>,
        D: Into<DateLike>,
    {
        Ok(Cal {
            working_days: normalise_working_days(working_days)?,
            holidays: parse_holidays(holidays, &DateParser::default())?,
        })
    }

    /// Return a copy of this calendar with new working days.
    ///
    /// # Errors
    /// [`CalendarError::InvalidConfiguration`] for an unknown weekday name.
    pub fn with_working_days<S: AsRef<str>>(
        &self,
        working_days: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        Ok(Cal {
            working_days: normalise_working_days(working_days)?,
            holidays: self.holidays.clone(),
        })
    }

    /// Return a copy of this calendar with new holidays.
    ///
    /// # Errors
    /// [`CalendarError::InvalidDate`] for an unparsable holiday.
    pub fn with_holidays<D: Into<DateLike>>(
        &self,
        holidays: impl IntoIterator<Item = D>,
    ) -> Result<Self> {
        self.with_holidays_parsed_by(holidays, &DateParser::default())
    }

    /// Return a copy of this calendar with new holidays, read by the given parser.
    pub fn with_holidays_parsed_by<D: Into<DateLike>>(
        &self,
        holidays: impl IntoIterator<Item = D>,
        parser: &DateParser,
    ) -> Result<Self> {
        Ok(Cal {
            working_days: self.working_days.clone(),
            holidays: parse_holidays(holidays, parser)?,
        })
    }

    /// Load a calendar from a named ruleset.
    ///
    /// `name` is looked up in `source_dir` or, if `None`, in the
    /// [default data directory](crate::default_data_dir).
    ///
    /// ```rust
    /// # use business_calendar::{Cal, DateRoll, nd};
    /// let ecb = Cal::load("ecb", None).unwrap();
    /// assert!(!ecb.is_bus_day(&nd(2014, 5, 1)));
    /// ```
    ///
    /// # Errors
    /// [`CalendarError::ConfigNotFound`] if no ruleset called `name` exists, otherwise any error
    /// raised reading the file or building the calendar.
    pub fn load(name: &str, source_dir: Option<&Path>) -> Result<Self> {
        match source_dir {
            Some(dir) => CalendarLoader::new(dir).load(name),
            None => CalendarLoader::default().load(name),
        }
    }

    /// The working weekdays, in configuration order.
    pub fn working_days(&self) -> &IndexSet<Weekday> {
        &self.working_days
    }

    /// The working weekdays as canonical tokens, e.g. `["mon", "fri"]`.
    pub fn working_day_names(&self) -> Vec<&'static str> {
        self.working_days.iter().map(|d| weekday_token(*d)).collect()
    }

    /// The holiday dates, in configuration order.
    pub fn holidays(&self) -> &IndexSet<NaiveDate> {
        &self.holidays
    }
}

fn normalise_working_days<S: AsRef<str>>(
    working_days: impl IntoIterator<Item = S>,
) -> Result<IndexSet<Weekday>> {
    let days = working_days
        .into_iter()
        .map(|d| parse_weekday(d.as_ref()))
        .collect::<Result<IndexSet<Weekday>>>()?;
    if days.is_empty() {
        Ok(IndexSet::from_iter(DEFAULT_WORKING_DAYS))
    } else {
        Ok(days)
    }
}

fn parse_holidays<D: Into<DateLike>>(
    holidays: impl IntoIterator<Item = D>,
    parser: &DateParser,
) -> Result<IndexSet<NaiveDate>> {
    holidays
        .into_iter()
        .map(|h| parser.to_date(&h.into()))
        .collect()
}

impl TryFrom<CalendarConfig> for Cal {
    type Error = CalendarError;

    fn try_from(config: CalendarConfig) -> Result<Self> {
        Cal::try_new(
            config.working_days.unwrap_or_default(),
            config.holidays.unwrap_or_default(),
        )
    }
}

impl DateRoll for Cal {
    fn is_working_day(&self, date: &NaiveDate) -> bool {
        self.working_days.contains(&date.weekday())
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.holidays.contains(date)
    }
}
