//! Error types for business calendar construction, date parsing and ruleset loading.

use std::path::PathBuf;
use thiserror::Error;

/// The error type returned by every fallible operation in the crate.
#[derive(Debug, Error)]
pub enum CalendarError {
    /// A working day name that does not match any of the seven canonical weekday tokens.
    #[error("invalid working day: '{value}' is not one of mon, tue, wed, thu, fri, sat, sun")]
    InvalidConfiguration { value: String },

    /// A date-like value that cannot be interpreted as a calendar date.
    #[error("invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    /// No ruleset by the given name exists in the resolved directory.
    #[error("calendar ruleset '{name}' not found in '{}'", .directory.display())]
    ConfigNotFound { name: String, directory: PathBuf },

    /// A ruleset file exists but could not be read or deserialized.
    #[error("calendar ruleset '{}' could not be read", .path.display())]
    Ruleset {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    /// A ruleset directory could not be listed.
    #[error("calendar data directory '{}' could not be read", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CalendarError {
    pub(crate) fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        CalendarError::InvalidDate {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Shorthand `Result` type used throughout the crate.
pub type Result<T, E = CalendarError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CalendarError::InvalidConfiguration {
            value: "Notaday".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid working day: 'Notaday' is not one of mon, tue, wed, thu, fri, sat, sun"
        );

        let err = CalendarError::invalid_date("32/1/2014", "day is out of range for month");
        assert_eq!(
            err.to_string(),
            "invalid date '32/1/2014': day is out of range for month"
        );

        let err = CalendarError::ConfigNotFound {
            name: "bacs".to_string(),
            directory: PathBuf::from("/tmp/rules"),
        };
        assert_eq!(
            err.to_string(),
            "calendar ruleset 'bacs' not found in '/tmp/rules'"
        );
    }
}
