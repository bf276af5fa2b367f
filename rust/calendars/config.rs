use serde::{Deserialize, Serialize};

use crate::calendars::{weekday_token, Cal};

/// Raw calendar configuration as read from a ruleset file.
///
/// Both fields are optional. An absent or empty `working_days` means Monday to Friday and an
/// absent or empty `holidays` means no holidays. Nothing is validated until the configuration is
/// converted into a [`Cal`].
///
/// ```yaml
/// working_days: [monday, tuesday, wednesday, thursday, friday]
/// holidays:
///   - 1st Jan 2013
///   - 25/12/2013
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub working_days: Option<Vec<String>>,
    #[serde(default)]
    pub holidays: Option<Vec<String>>,
}

impl From<Cal> for CalendarConfig {
    fn from(cal: Cal) -> Self {
        CalendarConfig {
            working_days: Some(
                cal.working_days
                    .iter()
                    .map(|d| weekday_token(*d).to_string())
                    .collect(),
            ),
            holidays: Some(
                cal.holidays
                    .iter()
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .collect(),
            ),
        }
    }
}
