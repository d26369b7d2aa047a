//! TOML-based CLI configuration.
//!
//! Stored at `~/.config/habitkit/config.toml`:
//! - `data_path`: default habit collection JSON export
//! - `[calendar] days_to_show`: trailing window length
//!
//! Missing fields fall back to defaults, so a partial file is fine.

use habitkit_core::MAX_WINDOW_DAYS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Calendar-view configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default = "default_days_to_show")]
    pub days_to_show: u32,
}

fn default_days_to_show() -> u32 {
    habitkit_core::DEFAULT_WINDOW_DAYS
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            days_to_show: default_days_to_show(),
        }
    }
}

/// CLI configuration.
///
/// Serialized to/from TOML at `~/.config/habitkit/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default habit collection JSON export
    #[serde(default)]
    pub data_path: Option<String>,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

impl Config {
    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        let dir = dirs::config_dir()
            .ok_or("cannot determine config directory")?
            .join("habitkit");
        std::fs::create_dir_all(&dir)?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk or return defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be
    /// parsed.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or
    /// written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Get a config value as a display string by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data_path" => Some(self.data_path.clone().unwrap_or_default()),
            "calendar.days_to_show" => Some(self.calendar.days_to_show.to_string()),
            _ => None,
        }
    }

    /// Apply a value to a known key without persisting.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys or values that do not parse
    /// or fall outside accepted ranges.
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        match key {
            "data_path" => {
                self.data_path = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "calendar.days_to_show" => {
                let days: u32 = value
                    .parse()
                    .map_err(|_| format!("cannot parse '{value}' as a day count"))?;
                if days == 0 || days > MAX_WINDOW_DAYS {
                    return Err(
                        format!("days_to_show must be 1..={MAX_WINDOW_DAYS}, got {days}").into(),
                    );
                }
                self.calendar.days_to_show = days;
            }
            _ => return Err(format!("unknown config key: {key}").into()),
        }
        Ok(())
    }

    /// Apply a value to a known key and persist.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.update(key, value)?;
        self.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.calendar.days_to_show, 30);
        assert!(parsed.data_path.is_none());
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let parsed: Config = toml::from_str("data_path = \"/tmp/habits.json\"").unwrap();
        assert_eq!(parsed.data_path.as_deref(), Some("/tmp/habits.json"));
        assert_eq!(parsed.calendar.days_to_show, 30);

        let empty: Config = toml::from_str("").unwrap();
        assert_eq!(empty.calendar.days_to_show, 30);
    }

    #[test]
    fn get_exposes_known_keys_only() {
        let cfg = Config::default();
        assert_eq!(cfg.get("calendar.days_to_show").as_deref(), Some("30"));
        assert_eq!(cfg.get("data_path").as_deref(), Some(""));
        assert!(cfg.get("calendar.nope").is_none());
    }

    #[test]
    fn update_validates_keys_and_ranges() {
        let mut cfg = Config::default();
        cfg.update("calendar.days_to_show", "60").unwrap();
        assert_eq!(cfg.calendar.days_to_show, 60);

        assert!(cfg.update("calendar.days_to_show", "0").is_err());
        assert!(cfg.update("calendar.days_to_show", "366").is_err());
        assert!(cfg.update("calendar.days_to_show", "lots").is_err());
        assert!(cfg.update("unknown", "x").is_err());

        cfg.update("data_path", "/data/habits.json").unwrap();
        assert_eq!(cfg.data_path.as_deref(), Some("/data/habits.json"));
        cfg.update("data_path", "").unwrap();
        assert!(cfg.data_path.is_none());
    }
}
