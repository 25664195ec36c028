//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Calendar layout (first day of week, list lengths)
//! - Where event and milestone data are read from
//!
//! Configuration is stored at `~/.config/studyplan/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::data_dir;
use crate::calendar::{ViewOptions, WeekStart, DEFAULT_CELL_EVENT_LIMIT, DEFAULT_UPCOMING_LIMIT};
use crate::error::{ConfigError, Result};

/// Calendar layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,
    #[serde(default = "default_cell_event_limit")]
    pub cell_event_limit: usize,
}

/// Data source configuration. Unset paths fall back to built-in sample data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON array of events.
    #[serde(default)]
    pub events_file: Option<PathBuf>,
    /// JSON array of milestones.
    #[serde(default)]
    pub milestones_file: Option<PathBuf>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studyplan/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub data: DataConfig,
}

fn default_upcoming_limit() -> usize {
    DEFAULT_UPCOMING_LIMIT
}
fn default_cell_event_limit() -> usize {
    DEFAULT_CELL_EVENT_LIMIT
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            upcoming_limit: default_upcoming_limit(),
            cell_event_limit: default_cell_event_limit(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }
        key.split('.').try_fold(root, |current, part| current.get(part))
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let (parent_path, leaf) = match key.rsplit_once('.') {
            Some((parent, leaf)) => (Some(parent), leaf),
            None => (None, key),
        };
        if leaf.is_empty() {
            return Err(unknown());
        }

        let mut parent = root;
        if let Some(parent_path) = parent_path {
            for part in parent_path.split('.') {
                parent = parent.get_mut(part).ok_or_else(unknown)?;
            }
        }
        let obj = parent.as_object_mut().ok_or_else(unknown)?;
        let existing = obj.get(leaf).ok_or_else(unknown)?;

        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                value
                    .parse::<bool>()
                    .map_err(|e| invalid(format!("'{value}': {e}")))?,
            ),
            serde_json::Value::Number(_) => {
                let n = value
                    .parse::<u64>()
                    .map_err(|e| invalid(format!("'{value}': {e}")))?;
                serde_json::Value::Number(n.into())
            }
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                return Err(invalid("cannot replace a whole section".to_string()));
            }
            // An empty value unsets optional fields; required ones then fail
            // to deserialize.
            serde_json::Value::Null | serde_json::Value::String(_) if value.is_empty() => {
                serde_json::Value::Null
            }
            _ => serde_json::Value::String(value.into()),
        };

        obj.insert(leaf.to_string(), new_value);
        Ok(())
    }

    /// Reject values that deserialize but make no sense for the calendar.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calendar.upcoming_limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "calendar.upcoming_limit".into(),
                message: "must be at least 1".into(),
            });
        }
        if self.calendar.cell_event_limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "calendar.cell_event_limit".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Location of the config file.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default, writing the default out when no
    /// file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            Ok(cfg)
        }
    }

    /// Load from an explicit path. A missing file yields the default config.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
                .into())
            }
        };
        let cfg: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a value by dot-separated key, in memory only.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit the
    /// field. On error the config is left unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Layout options for a calendar view.
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            week_start: self.calendar.week_start,
            upcoming_limit: self.calendar.upcoming_limit,
            cell_event_limit: self.calendar.cell_event_limit,
        }
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!(error = %e, "failed to load config, using defaults");
            Self::default()
        })
    }
}
