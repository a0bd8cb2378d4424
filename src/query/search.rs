use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{Catalog, Release},
    core::OwnershipLookup,
};

/// Which releases survive the ownership filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InclusionFilter {
    #[default]
    All,
    Owned,
    NotOwned,
    Favorites,
    WithPhotos,
    WithoutPhotos,
}

impl InclusionFilter {
    fn admits(self, lookup: &dyn OwnershipLookup, id: &str) -> bool {
        match self {
            InclusionFilter::All => true,
            InclusionFilter::Owned => lookup.is_owned(id),
            InclusionFilter::NotOwned => !lookup.is_owned(id),
            InclusionFilter::Favorites => lookup.is_favorite(id),
            InclusionFilter::WithPhotos => lookup.has_photo(id),
            InclusionFilter::WithoutPhotos => !lookup.has_photo(id),
        }
    }
}

/// Result ordering. Every key falls back to name ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Alphabetical,
    Series,
    Color,
    /// Name descending; the catalog carries no release dates.
    Recent,
    OwnedFirst,
    FavoritesFirst,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    /// Case-insensitive substring; empty matches everything.
    pub text: String,
    /// Series names to keep; empty keeps all.
    pub series: BTreeSet<String>,
    pub filter: InclusionFilter,
    pub sort: SortKey,
}

impl SearchQuery {
    pub fn has_active_filters(&self) -> bool {
        !self.text.is_empty()
            || !self.series.is_empty()
            || self.filter != InclusionFilter::All
            || self.sort != SortKey::Alphabetical
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Full scan of `catalog` applying `query`.
///
/// Output is a pure function of the catalog, the ownership state and the
/// query: ties resolve by name, then release id.
pub fn search<'c>(catalog: &'c Catalog, lookup: &dyn OwnershipLookup, query: &SearchQuery) -> Vec<&'c Release> {
    let needle = query.text.to_lowercase();

    let mut out: Vec<&Release> = catalog
        .releases()
        .filter(|r| {
            needle.is_empty()
                || r.matches_text(&needle)
                || catalog.series_name_of(&r.id).to_lowercase().contains(&needle)
        })
        .filter(|r| query.series.is_empty() || query.series.contains(catalog.series_name_of(&r.id)))
        .filter(|r| query.filter.admits(lookup, &r.id))
        .collect();

    out.sort_by(|a, b| compare(catalog, lookup, query.sort, a, b));
    out
}

fn compare(catalog: &Catalog, lookup: &dyn OwnershipLookup, sort: SortKey, a: &Release, b: &Release) -> Ordering {
    let by_name = || a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id));
    match sort {
        SortKey::Alphabetical => by_name(),
        SortKey::Series => catalog
            .series_name_of(&a.id)
            .cmp(catalog.series_name_of(&b.id))
            .then_with(by_name),
        SortKey::Color => a.color.cmp(&b.color).then_with(by_name),
        SortKey::Recent => b.name.cmp(&a.name).then_with(|| a.id.cmp(&b.id)),
        SortKey::OwnedFirst => lookup
            .is_owned(&b.id)
            .cmp(&lookup.is_owned(&a.id))
            .then_with(by_name),
        SortKey::FavoritesFirst => lookup
            .is_favorite(&b.id)
            .cmp(&lookup.is_favorite(&a.id))
            .then_with(by_name),
    }
}
