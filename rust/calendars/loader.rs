use config::{Config, File};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::calendars::{Cal, CalendarConfig};
use crate::error::{CalendarError, Result};

/// Environment variable overriding the default ruleset directory.
pub const DATA_DIR_ENV: &str = "BUSINESS_CALENDAR_DATA_DIR";

/// File extensions searched for a ruleset, in order of preference.
pub const RULESET_EXTENSIONS: &[&str] = &["yml", "yaml", "json", "toml"];

// Resolved once on first use and never changed afterwards.
static DEFAULT_DATA_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data")))
});

/// The directory rulesets are loaded from when none is given.
///
/// This is the value of `BUSINESS_CALENDAR_DATA_DIR` if set, otherwise the `data` directory
/// bundled with the crate, which holds the `weekdays`, `ecb` and `bacs` rulesets.
pub fn default_data_dir() -> &'static Path {
    DEFAULT_DATA_DIR.as_path()
}

/// Loads [`Cal`] objects from named ruleset files in a directory.
///
/// A ruleset called `name` is the file `<directory>/<name>.<ext>` for any extension in
/// [`RULESET_EXTENSIONS`], holding a [`CalendarConfig`] mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarLoader {
    directory: PathBuf,
}

impl Default for CalendarLoader {
    fn default() -> Self {
        Self::new(default_data_dir())
    }
}

impl CalendarLoader {
    /// Create a loader reading rulesets from `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        CalendarLoader {
            directory: directory.into(),
        }
    }

    /// The directory rulesets are read from.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Return the path of the ruleset file for `name`.
    ///
    /// Names containing path separators never match.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let valid = !name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != "..";
        if valid {
            for ext in RULESET_EXTENSIONS {
                let path = self.directory.join(format!("{}.{}", name, ext));
                if path.is_file() {
                    tracing::debug!(name, path = %path.display(), "resolved calendar ruleset");
                    return Ok(path);
                }
            }
        }
        tracing::warn!(name, directory = %self.directory.display(), "calendar ruleset not found");
        Err(CalendarError::ConfigNotFound {
            name: name.to_string(),
            directory: self.directory.clone(),
        })
    }

    /// Read the raw configuration of the ruleset `name` without validating it.
    pub fn read_config(&self, name: &str) -> Result<CalendarConfig> {
        let path = self.resolve(name)?;
        Config::builder()
            .add_source(File::from(path.as_path()))
            .build()
            .and_then(|c| c.try_deserialize::<CalendarConfig>())
            .map_err(|source| CalendarError::Ruleset { path, source })
    }

    /// Load the ruleset `name` as a validated [`Cal`].
    pub fn load(&self, name: &str) -> Result<Cal> {
        let cal = Cal::try_from(self.read_config(name)?)?;
        tracing::debug!(
            name,
            working_days = cal.working_days().len(),
            holidays = cal.holidays().len(),
            "loaded calendar"
        );
        Ok(cal)
    }

    /// Return the sorted names of all rulesets in the directory.
    pub fn available(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.directory).map_err(|source| CalendarError::Io {
            path: self.directory.clone(),
            source,
        })?;
        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| {
                path.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| RULESET_EXTENSIONS.contains(&e))
            })
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(String::from))
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }
}
