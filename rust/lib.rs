//! This is the documentation for business-calendar
//!
//! Business day arithmetic over a configurable calendar: a set of working weekdays plus a list of
//! holiday dates.
//!
//! - [`Cal`] holds the calendar and is validated in full when built.
//! - [`DateRoll`] provides classification, rolling, business day offsets and half-open ranges.
//! - [`parse_date`] reads free-form, day-first date text.
//! - [`Cal::load`] and [`CalendarLoader`] read named rulesets from a directory.
//!
//! ```rust
//! # use business_calendar::{Cal, DateRoll, parse_date};
//! let cal = Cal::try_new(
//!     Vec::<&str>::new(),
//!     ["Thu 12/6/2014", "Wed 18/6/2014", "Fri 20/6/2014", "Sun 22/6/2014"],
//! )
//! .unwrap();
//! let start = parse_date("Mon 2/6/2014").unwrap();
//! let end = parse_date("Fri 13/6/2014").unwrap();
//! assert_eq!(cal.bus_days_between(&start, &end), 8);
//! ```

#[cfg(test)]
mod tests;

pub mod calendars;
pub mod error;
pub mod json;
pub mod parser;

pub use calendars::{
    default_data_dir, nd, ndt, parse_weekday, weekday_token, BusDateRange, Cal, CalendarConfig,
    CalendarLoader, DateLike, DateRoll, DATA_DIR_ENV, DEFAULT_WORKING_DAYS, RULESET_EXTENSIONS,
};
pub use error::{CalendarError, Result};
pub use json::JSON;
pub use parser::{parse_date, DateParser};
