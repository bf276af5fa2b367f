use chrono::prelude::*;
use std::convert::From;

/// Create a `NaiveDate`.
///
/// Panics if date values are invalid.
pub fn nd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}

/// Create a `NaiveDateTime` with default null time.
///
/// Panics if date values are invalid.
pub fn ndt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    nd(year, month, day).and_time(NaiveTime::MIN)
}

/// Container for any value that can be interpreted as a calendar date.
///
/// Dates are used as given, datetimes have their time of day discarded and text is parsed
/// leniently by [`DateParser`](crate::DateParser).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateLike {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(String),
}

impl From<NaiveDate> for DateLike {
    fn from(item: NaiveDate) -> Self {
        DateLike::Date(item)
    }
}

impl From<&NaiveDate> for DateLike {
    fn from(item: &NaiveDate) -> Self {
        DateLike::Date(*item)
    }
}

impl From<NaiveDateTime> for DateLike {
    fn from(item: NaiveDateTime) -> Self {
        DateLike::DateTime(item)
    }
}

impl From<&NaiveDateTime> for DateLike {
    fn from(item: &NaiveDateTime) -> Self {
        DateLike::DateTime(*item)
    }
}

impl From<&str> for DateLike {
    fn from(item: &str) -> Self {
        DateLike::Text(item.to_string())
    }
}

impl From<String> for DateLike {
    fn from(item: String) -> Self {
        DateLike::Text(item)
    }
}

impl From<&String> for DateLike {
    fn from(item: &String) -> Self {
        DateLike::Text(item.clone())
    }
}
