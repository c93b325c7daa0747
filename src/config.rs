//! Session configuration.
//!
//! `SessionConfig` holds the start-up values a [`TabSessionManager`](crate::session::TabSessionManager)
//! needs: the default homepage, the titles given to freshly opened tabs and the capacity of the
//! event channel used by [`spawn_session`](crate::handle::spawn_session).
//!
//! # Examples
//!
//! ## Use defaults
//! ```rust
//! use ricker::config::SessionConfig;
//! let cfg = SessionConfig::default();
//! assert_eq!(cfg.new_tab_title, "New Tab");
//! ```
//!
//! ## Customize with the builder
//! ```rust
//! use ricker::config::SessionConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = SessionConfig::builder()
//!     .default_homepage("https://example.org")
//!     .initial_tab_title("Start")
//!     .build()?; // returns Result<SessionConfig, ConfigError>
//! # Ok(()) }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of the local content server that serves the bundled homepage document.
pub const DEFAULT_HOMEPAGE: &str = "http://127.0.0.1:5000/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Homepage loaded by newly created tabs until the user picks another one
    pub default_homepage: String,
    /// Title given to tabs opened after start-up
    pub new_tab_title: String,
    /// Title of the tab opened when the session starts
    pub initial_tab_title: String,
    /// Buffer size of the command and event channels of a spawned session
    pub event_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_homepage: DEFAULT_HOMEPAGE.to_string(),
            new_tab_title: "New Tab".to_string(),
            initial_tab_title: "Ricker".to_string(),
            event_capacity: 64,
        }
    }
}

impl SessionConfig {
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }

    /// Parse a JSON document. Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: SessionConfig = serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        validate(&cfg)?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Malformed(e.to_string()))
    }
}

/// Builder for [`SessionConfig`].
#[derive(Debug, Clone, Default)]
pub struct SessionConfigBuilder {
    inner: SessionConfig,
}

impl SessionConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut SessionConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn default_homepage<S: Into<String>>(self, url: S) -> Self { self.map(|c| c.default_homepage = url.into()) }
    pub fn new_tab_title<S: Into<String>>(self, title: S) -> Self { self.map(|c| c.new_tab_title = title.into()) }
    pub fn initial_tab_title<S: Into<String>>(self, title: S) -> Self { self.map(|c| c.initial_tab_title = title.into()) }
    pub fn event_capacity(self, n: usize) -> Self { self.map(|c| c.event_capacity = n) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<SessionConfig, ConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyHomepage,
    EmptyTitle(&'static str),
    ZeroCapacity,
    Malformed(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyHomepage =>
                write!(f, "default_homepage must not be empty"),
            ConfigError::EmptyTitle(field) =>
                write!(f, "{field} must not be empty"),
            ConfigError::ZeroCapacity =>
                write!(f, "event_capacity must be at least 1"),
            ConfigError::Malformed(msg) =>
                write!(f, "malformed configuration: {msg}"),
        }
    }
}
impl std::error::Error for ConfigError {}

fn validate(c: &SessionConfig) -> Result<(), ConfigError> {
    if c.default_homepage.is_empty() {
        return Err(ConfigError::EmptyHomepage);
    }
    if c.new_tab_title.is_empty() {
        return Err(ConfigError::EmptyTitle("new_tab_title"));
    }
    if c.initial_tab_title.is_empty() {
        return Err(ConfigError::EmptyTitle("initial_tab_title"));
    }
    if c.event_capacity == 0 {
        return Err(ConfigError::ZeroCapacity);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_content_server() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.default_homepage, "http://127.0.0.1:5000/");
        assert_eq!(cfg.initial_tab_title, "Ricker");
        assert_eq!(cfg.new_tab_title, "New Tab");
    }

    #[test]
    fn builder_rejects_invalid_values() {
        assert_eq!(SessionConfig::builder().default_homepage("").build(), Err(ConfigError::EmptyHomepage));
        assert_eq!(
            SessionConfig::builder().new_tab_title("").build(),
            Err(ConfigError::EmptyTitle("new_tab_title"))
        );
        assert_eq!(SessionConfig::builder().event_capacity(0).build(), Err(ConfigError::ZeroCapacity));
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let cfg = SessionConfig::from_json(r#"{ "default_homepage": "https://example.org" }"#).unwrap();
        assert_eq!(cfg.default_homepage, "https://example.org");
        assert_eq!(cfg.new_tab_title, "New Tab");

        let back = SessionConfig::from_json(&cfg.to_json().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn json_is_validated_on_load() {
        assert_eq!(
            SessionConfig::from_json(r#"{ "event_capacity": 0 }"#),
            Err(ConfigError::ZeroCapacity)
        );
        assert!(matches!(SessionConfig::from_json("not json"), Err(ConfigError::Malformed(_))));
    }
}
