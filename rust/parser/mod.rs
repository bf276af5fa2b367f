//! Free-form date parsing.
//!
//! Holiday lists and query arguments are frequently written by hand, so date strings are read
//! leniently: weekday names are accepted and ignored, ordinal suffixes are dropped, months may be
//! abbreviated or spelled out, years may have two or four digits and a time of day may precede
//! or follow the date. Ambiguous numeric dates are read **day first**, so `"2/6/2014"` is the
//! 2nd of June.
//!
//! ```rust
//! # use business_calendar::{parse_date, nd};
//! assert_eq!(parse_date("9am, Tuesday 1st Jan, 2013").unwrap(), nd(2013, 1, 1));
//! assert_eq!(parse_date("Mon 2/6/2014").unwrap(), nd(2014, 6, 2));
//! ```

mod tokenizer;
mod ymd;

use chrono::prelude::*;

use crate::calendars::DateLike;
use crate::error::{CalendarError, Result};
use tokenizer::is_number;
use ymd::{Label, Ymd};

const JUMP: &[&str] = &[
    " ", ".", ",", ";", "-", "/", "'", "at", "on", "and", "ad", "m", "t", "of", "st", "nd", "rd",
    "th",
];

const ORDINALS: &[&str] = &["st", "nd", "rd", "th"];

const WEEKDAYS: &[&[&str]] = &[
    &["mon", "monday"],
    &["tue", "tues", "tuesday"],
    &["wed", "wednesday"],
    &["thu", "thur", "thurs", "thursday"],
    &["fri", "friday"],
    &["sat", "saturday"],
    &["sun", "sunday"],
];

const MONTHS: &[&[&str]] = &[
    &["jan", "january"],
    &["feb", "february"],
    &["mar", "march"],
    &["apr", "april"],
    &["may"],
    &["jun", "june"],
    &["jul", "july"],
    &["aug", "august"],
    &["sep", "sept", "september"],
    &["oct", "october"],
    &["nov", "november"],
    &["dec", "december"],
];

const AM: &[&str] = &["am", "a"];
const PM: &[&str] = &["pm", "p"];
const UTC_ZONES: &[&str] = &["utc", "gmt", "z"];

/// Years accepted from text. Keeps parsed dates well inside chrono's range so that rolling
/// from them never overflows.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

fn month_number(word: &str) -> Option<i32> {
    MONTHS
        .iter()
        .position(|names| names.contains(&word))
        .map(|i| i as i32 + 1)
}

fn is_weekday_name(word: &str) -> bool {
    WEEKDAYS.iter().any(|names| names.contains(&word))
}

/// Parses date strings into a [`NaiveDate`].
///
/// `day_first` decides ambiguous numeric dates. `reference` supplies any year, month or day the
/// text leaves out and anchors the window two-digit years are placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParser {
    pub day_first: bool,
    pub reference: NaiveDate,
}

impl Default for DateParser {
    /// A day-first parser referenced to today's local date.
    fn default() -> Self {
        DateParser {
            day_first: true,
            reference: Local::now().date_naive(),
        }
    }
}

/// Time of day seen in the input. Validated, then discarded.
#[derive(Debug, Default)]
struct Clock {
    seen: bool,
}

impl Clock {
    fn set(&mut self, input: &str, hour: u32, minute: u32, second: u32) -> Result<()> {
        if self.seen {
            return Err(CalendarError::invalid_date(input, "time of day given more than once"));
        }
        if hour > 23 || minute > 59 || second > 59 {
            return Err(CalendarError::invalid_date(input, "time of day is out of range"));
        }
        self.seen = true;
        Ok(())
    }
}

impl DateParser {
    /// Create a parser with an explicit disambiguation rule and reference date.
    pub fn new(day_first: bool, reference: NaiveDate) -> Self {
        DateParser {
            day_first,
            reference,
        }
    }

    /// Convert any [`DateLike`] value to a bare date, parsing text with this parser.
    pub fn to_date(&self, value: &DateLike) -> Result<NaiveDate> {
        match value {
            DateLike::Date(d) => Ok(*d),
            DateLike::DateTime(dt) => Ok(dt.date()),
            DateLike::Text(s) => self.parse(s),
        }
    }

    /// Parse a free-form date string. Any time of day is validated and discarded.
    pub fn parse(&self, input: &str) -> Result<NaiveDate> {
        let tokens = tokenizer::split(input.trim());
        if tokens.is_empty() {
            return Err(CalendarError::invalid_date(input, "empty string"));
        }

        let mut ymd = Ymd::default();
        let mut clock = Clock::default();
        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i].as_str();
            let word = token.to_lowercase();
            if is_number(token) {
                i = self.parse_number(input, &tokens, i, &mut ymd, &mut clock)?;
            } else if let Some(month) = month_number(&word) {
                ymd.append(month, Some(Label::Month)).map_err(rejected(input))?;
                i += 1;
            } else if (token == "+" || token == "-") && clock.seen && is_number_at(&tokens, i + 1) {
                // UTC offset such as `+01:00` or `-0500`
                i += 2;
                if tokens.get(i).map(String::as_str) == Some(":") && is_number_at(&tokens, i + 1) {
                    i += 2;
                }
            } else if is_weekday_name(&word)
                || JUMP.contains(&word.as_str())
                || UTC_ZONES.contains(&word.as_str())
            {
                i += 1;
            } else {
                return Err(CalendarError::invalid_date(
                    input,
                    format!("unrecognised token '{}'", token),
                ));
            }
        }

        let resolved = ymd.resolve(self.day_first).map_err(rejected(input))?;
        if resolved.is_empty() {
            return Err(CalendarError::invalid_date(input, "no date component found"));
        }

        let year = match resolved.year {
            Some(y) if y < 100 && !ymd.century_specified => self.convert_year(y),
            Some(y) => y,
            None => self.reference.year(),
        };
        if !YEAR_RANGE.contains(&year) {
            return Err(CalendarError::invalid_date(input, "year must be in 1..9999"));
        }
        let month = match resolved.month {
            Some(m) => u32::try_from(m)
                .ok()
                .filter(|m| (1..=12).contains(m))
                .ok_or_else(|| CalendarError::invalid_date(input, "month must be in 1..12"))?,
            None => self.reference.month(),
        };
        let day = match resolved.day {
            Some(d) => u32::try_from(d)
                .map_err(|_| CalendarError::invalid_date(input, "day must be positive"))?,
            None => {
                // keep the reference day but never spill into the next month
                let last = last_day_of_month(year, month)
                    .ok_or_else(|| CalendarError::invalid_date(input, "year is out of range"))?;
                self.reference.day().min(last)
            }
        };
        tracing::trace!(input, year, month, day, "parsed date");
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| CalendarError::invalid_date(input, "day is out of range for month"))
    }

    /// Handle the numeric token at `i`, returning the index of the next unread token.
    fn parse_number(
        &self,
        input: &str,
        tokens: &[String],
        i: usize,
        ymd: &mut Ymd,
        clock: &mut Clock,
    ) -> Result<usize> {
        let token = tokens[i].as_str();

        // hh:mm[:ss] with an optional am/pm marker
        if tokens.get(i + 1).map(String::as_str) == Some(":") && is_number_at(tokens, i + 2) {
            let mut hour = parse_u32(input, token)?;
            let minute = parse_u32(input, &tokens[i + 2])?;
            let mut next = i + 3;
            let mut second = 0;
            if tokens.get(next).map(String::as_str) == Some(":") && is_number_at(tokens, next + 1) {
                second = parse_u32(input, &tokens[next + 1])?;
                next += 2;
                // fractional seconds
                if tokens.get(next).map(String::as_str) == Some(".")
                    && is_number_at(tokens, next + 1)
                {
                    next += 2;
                }
            }
            if let Some((pm, after)) = ampm_at(tokens, next) {
                hour = apply_ampm(input, hour, pm)?;
                next = after;
            }
            clock.set(input, hour, minute, second)?;
            return Ok(next);
        }

        // 9am, 9 pm
        if let Some((pm, after)) = ampm_at(tokens, i + 1) {
            let hour = apply_ampm(input, parse_u32(input, token)?, pm)?;
            clock.set(input, hour, 0, 0)?;
            return Ok(after);
        }

        if ymd.is_empty() && token.len() == 8 && !is_separated(tokens, i) {
            // YYYYMMDD
            ymd.append_str(&token[..4], Some(Label::Year)).map_err(rejected(input))?;
            ymd.append_str(&token[4..6], Some(Label::Month)).map_err(rejected(input))?;
            ymd.append_str(&token[6..], Some(Label::Day)).map_err(rejected(input))?;
            return Ok(i + 1);
        }

        if ymd.is_empty() && token.len() == 6 && !is_separated(tokens, i) {
            // DDMMYY, resolved like any other run of three two-digit values
            ymd.append_str(&token[..2], None).map_err(rejected(input))?;
            ymd.append_str(&token[2..4], None).map_err(rejected(input))?;
            ymd.append_str(&token[4..], None).map_err(rejected(input))?;
            return Ok(i + 1);
        }

        let ordinal = tokens
            .get(i + 1)
            .is_some_and(|t| ORDINALS.contains(&t.to_lowercase().as_str()));
        if ordinal {
            ymd.append_str(token, Some(Label::Day)).map_err(rejected(input))?;
        } else {
            ymd.append_str(token, None).map_err(rejected(input))?;
        }
        Ok(i + 1)
    }

    /// Place a two-digit year in the century window centred on the reference year.
    fn convert_year(&self, year: i32) -> i32 {
        let current = self.reference.year();
        let mut year = year + current / 100 * 100;
        if year >= current + 50 {
            year -= 100;
        } else if year < current - 50 {
            year += 100;
        }
        year
    }
}

/// Attach the full input text to a reason reported while collecting date values.
fn rejected(input: &str) -> impl FnOnce(String) -> CalendarError + '_ {
    move |reason| CalendarError::invalid_date(input, reason)
}

fn is_number_at(tokens: &[String], i: usize) -> bool {
    tokens.get(i).is_some_and(|t| is_number(t))
}

/// Whether the number at `i` is part of a separated date such as `12/06/2014`.
fn is_separated(tokens: &[String], i: usize) -> bool {
    let sep = |t: Option<&String>| matches!(t.map(String::as_str), Some("/" | "-" | "."));
    sep(tokens.get(i + 1)) || (i > 0 && sep(tokens.get(i - 1)))
}

/// Looks for an am/pm marker at `i`, allowing one space before it.
///
/// Returns whether the marker is pm together with the index after it.
fn ampm_at(tokens: &[String], i: usize) -> Option<(bool, usize)> {
    let i = if tokens.get(i).map(String::as_str) == Some(" ") {
        i + 1
    } else {
        i
    };
    let word = tokens.get(i)?.to_lowercase();
    if AM.contains(&word.as_str()) {
        Some((false, i + 1))
    } else if PM.contains(&word.as_str()) {
        Some((true, i + 1))
    } else {
        None
    }
}

fn apply_ampm(input: &str, hour: u32, pm: bool) -> Result<u32> {
    if !(1..=12).contains(&hour) {
        return Err(CalendarError::invalid_date(
            input,
            "hour must be in 1..12 with am/pm",
        ));
    }
    Ok(match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    })
}

fn parse_u32(input: &str, token: &str) -> Result<u32> {
    token
        .parse()
        .map_err(|_| CalendarError::invalid_date(input, "number is too large"))
}

fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    first_of_next.pred_opt().map(|d| d.day())
}

/// Convert a date-like value to a bare [`NaiveDate`].
///
/// Dates pass through unchanged, datetimes lose their time of day and strings are parsed with
/// [`DateParser::default`].
///
/// The default parser is referenced to today's local date, read on each call, so text without
/// a year or month (e.g. `"1st Jan"`) depends on when it is parsed. Use [`DateParser::new`]
/// with a fixed reference date for reproducible results.
///
/// # Errors
/// [`CalendarError::InvalidDate`] carrying the input when a string cannot be parsed.
pub fn parse_date(value: impl Into<DateLike>) -> Result<NaiveDate> {
    DateParser::default().to_date(&value.into())
}
