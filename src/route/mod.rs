//! Deep-link parsing, generation and presentation state.

/// Destinations and their canonical URIs.
pub mod destination;
/// URI parsing.
pub mod parse;
/// Idle/presenting state machine.
pub mod router;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Not a URI this crate can split.
    Malformed(String),
    /// Scheme is neither the custom scheme nor http(s).
    UnsupportedScheme(String),
    /// Web link for a host other than the configured one.
    UnsupportedHost(String),
}

impl std::fmt::Display for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(uri) => write!(f, "malformed uri: {uri}"),
            Self::UnsupportedScheme(s) => write!(f, "unsupported scheme: {s}"),
            Self::UnsupportedHost(h) => write!(f, "unsupported host: {h}"),
        }
    }
}

impl std::error::Error for RouteError {}

/// Link grammar settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Custom scheme without `://`.
    pub custom_scheme: String,
    /// Host accepted for universal links.
    pub universal_host: String,
    /// Path prefix in front of universal-link routes; may be empty.
    pub universal_base_path: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            custom_scheme: "lafufu".to_string(),
            universal_host: "sforsethi.github.io".to_string(),
            universal_base_path: "/Lafufu".to_string(),
        }
    }
}
