use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

use super::RouterConfig;

/// An in-app screen a deep link can open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destination {
    Home,
    Explore,
    Collection,
    Wishlist,
    /// Release detail by release id.
    Release(String),
    /// Series detail by display name.
    Series(String),
    /// Event by id.
    Event(String),
    Share,
    /// Photo gallery for a release id.
    PhotoGallery(String),
}

impl Destination {
    /// Canonical custom-scheme URI.
    ///
    /// Series names swap spaces for hyphens, so names that already contain
    /// a hyphen come back with a space instead. An empty id or name yields
    /// a bare prefix such as `lafufu://toy/`, which parses as `Home`.
    pub fn to_uri(&self, config: &RouterConfig) -> String {
        let path = match self {
            Destination::Home => "home".to_string(),
            Destination::Explore => "explore".to_string(),
            Destination::Collection => "collection".to_string(),
            Destination::Wishlist => "wishlist".to_string(),
            Destination::Release(id) => format!("toy/{}", urlencoding::encode(id)),
            Destination::Series(name) => format!("series/{}", urlencoding::encode(&name.replace(' ', "-"))),
            Destination::Event(id) => format!("event/{}", urlencoding::encode(id)),
            Destination::Share => "share".to_string(),
            Destination::PhotoGallery(id) => format!("photos/{}", urlencoding::encode(id)),
        };
        format!("{}://{path}", config.custom_scheme)
    }

    /// False when the destination names a release or series the catalog lacks.
    pub fn is_resolvable(&self, catalog: &Catalog) -> bool {
        match self {
            Destination::Release(id) | Destination::PhotoGallery(id) => catalog.release(id).is_some(),
            Destination::Series(name) => catalog.series_by_name(name).is_some(),
            _ => true,
        }
    }
}

/// Shareable web link for an event.
pub fn event_link(config: &RouterConfig, event_id: &str) -> String {
    format!(
        "https://{}{}/events/{}",
        config.universal_host,
        config.universal_base_path.trim_end_matches('/'),
        urlencoding::encode(event_id)
    )
}
