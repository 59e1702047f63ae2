//! TOML-based application configuration.
//!
//! Stores event-level settings:
//! - Event name and end timestamp (drives the countdown)
//! - Invite code prefix
//! - Leaderboard page size
//! - Simulated latency of the mock auth backend
//!
//! Configuration is stored at `~/.config/hackhub/config.toml`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{CoreError, StorageError};

/// Event-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    #[serde(default = "default_event_name")]
    pub name: String,
    /// When hacking ends, RFC3339. The countdown counts toward this.
    #[serde(default = "default_ends_at")]
    pub ends_at: DateTime<Utc>,
}

/// Team/invite configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteConfig {
    #[serde(default = "default_invite_prefix")]
    pub code_prefix: String,
}

/// Leaderboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

/// Mock auth backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Simulated network delay applied by the mock backend, in ms.
    #[serde(default)]
    pub mock_delay_ms: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/hackhub/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub event: EventConfig,
    #[serde(default)]
    pub invite: InviteConfig,
    #[serde(default)]
    pub leaderboard: LeaderboardConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

// Default functions
fn default_event_name() -> String {
    "InnoHacks 2026".into()
}
fn default_ends_at() -> DateTime<Utc> {
    // Fixed event deadline; overridden per deployment via `config set`.
    DateTime::parse_from_rfc3339("2026-10-04T18:00:00Z")
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
fn default_invite_prefix() -> String {
    "INNOHACKS".into()
}
fn default_page_size() -> usize {
    10
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            name: default_event_name(),
            ends_at: default_ends_at(),
        }
    }
}

impl Default for InviteConfig {
    fn default() -> Self {
        Self {
            code_prefix: default_invite_prefix(),
        }
    }
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { mock_delay_ms: 0 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            event: EventConfig::default(),
            invite: InviteConfig::default(),
            leaderboard: LeaderboardConfig::default(),
            auth: AuthConfig::default(),
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

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), CoreError> {
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(CoreError::Custom("empty setting name".into()));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| CoreError::Custom(format!("no such setting: {key}")))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| CoreError::Custom(format!("no such setting: {key}")))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| CoreError::Custom(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| {
                                    CoreError::Custom(format!("'{value}' is not a number"))
                                })?
                        } else {
                            return Err(CoreError::Custom(format!(
                                "'{value}' is not a number"
                            )));
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value)?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| CoreError::Custom(format!("no such setting: {key}")))?;
        }

        Err(CoreError::Custom(format!("no such setting: {key}")))
    }

    fn path() -> Result<PathBuf, StorageError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, CoreError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)
                    .map_err(|e| StorageError::ConfigParse(e.to_string()))?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), CoreError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| StorageError::ConfigParse(e.to_string()))?;
        std::fs::write(Self::path()?, content)?;
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

    /// Set a config value by key and persist. Returns an error if the key
    /// is unknown or the value cannot be parsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        self.save()?;
        Ok(())
    }

    /// Load from disk, returning the default on error.
    /// Convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
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
        assert_eq!(parsed.event.name, "InnoHacks 2026");
        assert_eq!(parsed.leaderboard.page_size, 10);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("invite.code_prefix").as_deref(), Some("INNOHACKS"));
        assert_eq!(cfg.get("leaderboard.page_size").as_deref(), Some("10"));
        assert!(cfg.get("event.missing_key").is_none());
    }

    #[test]
    fn set_json_value_by_path_updates_nested_number() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "auth.mock_delay_ms", "250").unwrap();
        assert_eq!(
            Config::get_json_value_by_path(&json, "auth.mock_delay_ms").unwrap(),
            &serde_json::Value::Number(250.into())
        );
    }

    #[test]
    fn set_json_value_by_path_updates_nested_string() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "invite.code_prefix", "HACKHUB").unwrap();
        assert_eq!(
            Config::get_json_value_by_path(&json, "invite.code_prefix").unwrap(),
            &serde_json::Value::String("HACKHUB".to_string())
        );
    }

    #[test]
    fn set_json_value_by_path_rejects_unknown_key() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = Config::set_json_value_by_path(&mut json, "event.nonexistent_key", "value");
        assert!(result.is_err());
    }

    #[test]
    fn set_json_value_by_path_rejects_invalid_number() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = Config::set_json_value_by_path(&mut json, "leaderboard.page_size", "lots");
        assert!(result.is_err());
    }

    #[test]
    fn default_event_deadline_parses() {
        let cfg = Config::default();
        assert!(cfg.event.ends_at.to_rfc3339().starts_with("2026-10-04"));
    }
}
