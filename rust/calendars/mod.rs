//! Create business day calendars and perform business day arithmetic.
//!
//! ### Basic usage
//!
//! A [`Cal`] is built from a list of working weekday names and a list of holidays. The below
//! constructs a Monday to Friday calendar with the UK New Year bank holiday in 2013.
//!
//! ```rust
//! # use business_calendar::{Cal, DateRoll, nd};
//! let ldn = Cal::try_new(["mon", "tue", "wed", "thu", "fri"], ["1st Jan, 2013"]).unwrap();
//! ```
//! These calendars are used to classify and manipulate dates e.g.
//!
//! ```rust
//! # use business_calendar::{Cal, DateRoll, nd};
//! # let ldn = Cal::try_new(["mon", "tue", "wed", "thu", "fri"], ["1st Jan, 2013"]).unwrap();
//! // Monday 31st December 2012 plus one business day skips the holiday
//! assert_eq!(ldn.add_bus_days(&nd(2012, 12, 31), 1), nd(2013, 1, 2));
//! // Saturday 5th January rolls back to Friday 4th
//! assert_eq!(ldn.roll_backward_bus_day(&nd(2013, 1, 5)), nd(2013, 1, 4));
//! // Business days from Monday 31st December up to, but excluding, Monday 7th January
//! assert_eq!(ldn.bus_days_between(&nd(2012, 12, 31), &nd(2013, 1, 7)), 4);
//! ```
//!
//! ### Rulesets
//!
//! Calendars can also be loaded by name from ruleset files with [`Cal::load`] or a
//! [`CalendarLoader`].
//!
//! ```rust
//! # use business_calendar::{Cal, DateRoll, nd};
//! let bacs = Cal::load("bacs", None).unwrap();
//! assert!(!bacs.is_bus_day(&nd(2014, 8, 25))); // Summer bank holiday
//! ```

mod cal;
mod calendar;
mod config;
mod dateroll;
mod loader;
mod serde;

pub use crate::calendars::{
    cal::{parse_weekday, weekday_token, Cal, DEFAULT_WORKING_DAYS},
    calendar::{nd, ndt, DateLike},
    config::CalendarConfig,
    dateroll::{BusDateRange, DateRoll},
    loader::{default_data_dir, CalendarLoader, DATA_DIR_ENV, RULESET_EXTENSIONS},
};
