//! Shelf configuration, loadable from TOML.
//!
//! ```toml
//! photo_policy = "require_owned"
//! upcoming_window_days = 14
//!
//! [router]
//! custom_scheme = "lafufu"
//!
//! [writer]
//! batch_max_latency_ms = 200
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{core::collection::PhotoPolicy, route::RouterConfig, runtime::writer::WriterConfig};

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Toml(value)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config io: {e}"),
            Self::Toml(e) => write!(f, "config toml: {e}"),
            Self::Invalid(m) => write!(f, "invalid config: {m}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    pub photo_policy: PhotoPolicy,
    /// Write affected records after every mutation.
    pub persist_eagerly: bool,
    /// Window used by [`crate::shelf::Shelf::upcoming_targets`].
    pub upcoming_window_days: i64,
    pub router: RouterConfig,
    pub writer: WriterConfig,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            photo_policy: PhotoPolicy::default(),
            persist_eagerly: true,
            upcoming_window_days: 30,
            router: RouterConfig::default(),
            writer: WriterConfig::default(),
        }
    }
}

impl ShelfConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let scheme = &self.router.custom_scheme;
        let scheme_ok = scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !scheme_ok {
            return Err(ConfigError::Invalid(format!("bad custom scheme {scheme:?}")));
        }
        if self.router.universal_host.is_empty() {
            return Err(ConfigError::Invalid("universal_host is empty".to_string()));
        }
        if self.upcoming_window_days < 0 {
            return Err(ConfigError::Invalid("upcoming_window_days is negative".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ShelfConfig::from_toml_str("").expect("parse"), ShelfConfig::default());
    }

    #[test]
    fn partial_toml_overrides_fields() {
        let cfg = ShelfConfig::from_toml_str(
            "photo_policy = \"require_owned\"\n[writer]\nbatch_max_latency_ms = 5\n",
        )
        .expect("parse");
        assert_eq!(cfg.photo_policy, PhotoPolicy::RequireOwned);
        assert_eq!(cfg.writer.batch_max_latency_ms, 5);
        assert_eq!(cfg.writer.queue_bound, WriterConfig::default().queue_bound);
        assert_eq!(cfg.router, RouterConfig::default());
    }

    #[test]
    fn bad_scheme_is_rejected() {
        let err = ShelfConfig::from_toml_str("[router]\ncustom_scheme = \"9x\"\n");
        assert!(matches!(err, Err(ConfigError::Invalid(_))));
    }
}
