//! Immutable release catalog and reverse lookups.

mod builtin;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::types::ReleaseId;

/// Series name reported for releases the catalog does not know.
pub const UNKNOWN_SERIES: &str = "Unknown Series";

/// A single collectible figure variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Stable join key (image key).
    pub id: ReleaseId,
    /// Display name.
    pub name: String,
    /// Localized display name.
    pub localized_name: String,
    /// Hex color without `#`.
    pub color: String,
    /// Free-text description.
    pub description: String,
}

/// A named group of releases sharing a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// Stable series key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Localized display name.
    pub localized_name: String,
    /// Releases in display order; may be empty.
    pub releases: Vec<Release>,
    /// Accent hex color without `#`.
    pub color: String,
    /// Free-text description.
    pub description: String,
}

impl Release {
    pub fn new(id: &str, name: &str, localized_name: &str, color: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            localized_name: localized_name.to_string(),
            color: color.to_string(),
            description: description.to_string(),
        }
    }

    /// Case-insensitive substring match over name, localized name and description.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        contains_folded(&self.name, needle_lower)
            || contains_folded(&self.localized_name, needle_lower)
            || contains_folded(&self.description, needle_lower)
    }
}

impl Series {
    /// Case-insensitive substring match over the series' own text fields.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        contains_folded(&self.name, needle_lower)
            || contains_folded(&self.localized_name, needle_lower)
            || contains_folded(&self.description, needle_lower)
    }
}

/// Read-only catalog with a release-id reverse index.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    series: Vec<Series>,
    by_release: HashMap<ReleaseId, (usize, usize)>,
}

impl Catalog {
    /// Builds a catalog; the first occurrence of a duplicated release id wins.
    pub fn new(series: Vec<Series>) -> Self {
        let mut by_release = HashMap::new();
        for (s_idx, s) in series.iter().enumerate() {
            for (r_idx, r) in s.releases.iter().enumerate() {
                by_release.entry(r.id.clone()).or_insert((s_idx, r_idx));
            }
        }
        Self { series, by_release }
    }

    /// The compiled-in catalog shipped with the app.
    pub fn builtin() -> Self {
        Self::new(builtin::series())
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// All releases flattened in catalog order.
    pub fn releases(&self) -> impl Iterator<Item = &Release> {
        self.series.iter().flat_map(|s| s.releases.iter())
    }

    /// Flattens the catalog and counts; not cached.
    pub fn total_releases(&self) -> usize {
        self.releases().count()
    }

    pub fn release(&self, id: &str) -> Option<&Release> {
        let (s, r) = *self.by_release.get(id)?;
        self.series.get(s)?.releases.get(r)
    }

    pub fn series_of(&self, id: &str) -> Option<&Series> {
        let (s, _) = *self.by_release.get(id)?;
        self.series.get(s)
    }

    /// Series name for `id`, or [`UNKNOWN_SERIES`].
    pub fn series_name_of(&self, id: &str) -> &str {
        self.series_of(id)
            .map(|s| s.name.as_str())
            .unwrap_or(UNKNOWN_SERIES)
    }

    /// Case-insensitive lookup by display name.
    pub fn series_by_name(&self, name: &str) -> Option<&Series> {
        let wanted = name.to_lowercase();
        self.series.iter().find(|s| s.name.to_lowercase() == wanted)
    }

    /// Series whose own text, or any of whose releases' text, contains `text`.
    ///
    /// An empty query returns every series.
    pub fn filtered_series(&self, text: &str) -> Vec<&Series> {
        if text.is_empty() {
            return self.series.iter().collect();
        }
        let needle = text.to_lowercase();
        self.series
            .iter()
            .filter(|s| s.matches_text(&needle) || s.releases.iter().any(|r| r.matches_text(&needle)))
            .collect()
    }
}

pub(crate) fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_indexes_every_release() {
        let catalog = Catalog::builtin();
        assert!(catalog.total_releases() > 0);
        for r in catalog.releases() {
            assert_eq!(catalog.release(&r.id).map(|x| &x.id), Some(&r.id));
        }
        assert_eq!(catalog.series_name_of("lemon"), "Fruit Series");
        assert_eq!(catalog.series_name_of("nope"), UNKNOWN_SERIES);
    }

    #[test]
    fn series_lookup_ignores_case() {
        let catalog = Catalog::builtin();
        assert!(catalog.series_by_name("fruit series").is_some());
        assert!(catalog.series_by_name("FRUIT SERIES").is_some());
    }

    #[test]
    fn filtered_series_matches_nested_releases() {
        let catalog = Catalog::builtin();
        let hits = catalog.filtered_series("zoro");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "one_piece");
    }
}
