use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use hashbrown::HashSet;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{Catalog, UNKNOWN_SERIES},
    persist::{
        KvSource,
        record::{self, PendingRecord, WISHLIST_KEY},
    },
    types::{Priority, ReleaseId, Timestamp, WishlistItemId},
};

use super::{OwnershipChange, OwnershipLookup, OwnershipObserver};

/// A desired-but-not-owned release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    /// Generated identifier.
    pub id: WishlistItemId,
    /// Catalog release key.
    pub release_id: ReleaseId,
    /// How badly it is wanted.
    pub priority: Priority,
    /// When the item was added.
    pub created_at: Timestamp,
    /// Free-text note.
    pub notes: Option<String>,
    /// Non-negative price estimate.
    pub estimated_price: Option<f64>,
    /// Planned purchase date.
    pub target_date: Option<Timestamp>,
}

/// Insert payload used to create a new [`WishlistItem`].
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistDraft {
    pub release_id: ReleaseId,
    pub priority: Priority,
    pub notes: Option<String>,
    pub estimated_price: Option<f64>,
    pub target_date: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl WishlistDraft {
    /// Medium priority, no metadata, stamped now.
    pub fn new(release_id: impl Into<ReleaseId>) -> Self {
        Self {
            release_id: release_id.into(),
            priority: Priority::default(),
            notes: None,
            estimated_price: None,
            target_date: None,
            created_at: Utc::now(),
        }
    }
}

/// Sparse patch where each `Some` field overwrites the item value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WishlistPatch {
    pub priority: Option<Priority>,
    pub notes: Option<String>,
    pub estimated_price: Option<f64>,
    pub target_date: Option<Timestamp>,
}

impl WishlistPatch {
    /// Returns true when no fields are set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Applies this patch in place. An invalid price leaves the old one.
    pub fn apply_to(&self, item: &mut WishlistItem) {
        if let Some(v) = self.priority {
            item.priority = v;
        }
        if let Some(v) = &self.notes {
            item.notes = Some(v.clone());
        }
        if let Some(v) = self.estimated_price {
            match valid_price(v) {
                Some(p) => item.estimated_price = Some(p),
                None => warn!("ignoring invalid price {v} for {}", item.release_id),
            }
        }
        if let Some(v) = self.target_date {
            item.target_date = Some(v);
        }
    }
}

/// Sort orders for [`WishlistStore::filtered_and_sorted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WishlistSort {
    /// Priority rank ascending.
    #[default]
    Priority,
    /// Newest first.
    DateAdded,
    /// Earliest target first; undated last.
    TargetDate,
    /// Release name ascending.
    Alphabetical,
    /// Most expensive first; unpriced counts as zero.
    EstimatedPrice,
    /// Series name ascending.
    Series,
}

/// Filter and sort parameters for a wishlist view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WishlistQuery {
    pub priority: Option<Priority>,
    pub series_name: Option<String>,
    pub with_target_date: Option<bool>,
    pub sort: WishlistSort,
}

#[derive(Debug)]
pub struct WishlistStore {
    catalog: Arc<Catalog>,
    items: Vec<WishlistItem>,
    dirty: bool,
}

impl WishlistStore {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            items: Vec::new(),
            dirty: false,
        }
    }

    /// Restores the persisted list, dropping duplicate release ids.
    pub fn load(catalog: Arc<Catalog>, source: &dyn KvSource) -> Self {
        let loaded: Vec<WishlistItem> = record::load_or_default(source, WISHLIST_KEY);
        let mut store = Self::new(catalog);
        let mut seen = HashSet::new();
        for item in loaded {
            if seen.insert(item.release_id.clone()) {
                store.items.push(item);
            } else {
                warn!("dropping duplicate wishlist entry for {}", item.release_id);
                store.dirty = true;
            }
        }
        info!("loaded wishlist: {} items", store.items.len());
        store
    }

    /// Adds `draft` unless the release is owned or already wishlisted.
    pub fn add(&mut self, lookup: &dyn OwnershipLookup, draft: WishlistDraft) -> Option<WishlistItemId> {
        if lookup.is_owned(&draft.release_id) || self.is_in_wishlist(&draft.release_id) {
            debug!("skip wishlist add for {}", draft.release_id);
            return None;
        }

        let estimated_price = draft.estimated_price.and_then(|v| {
            let p = valid_price(v);
            if p.is_none() {
                warn!("dropping invalid price {v} for {}", draft.release_id);
            }
            p
        });

        let item = WishlistItem {
            id: WishlistItemId::new_v4(),
            release_id: draft.release_id,
            priority: draft.priority,
            created_at: draft.created_at,
            notes: draft.notes,
            estimated_price,
            target_date: draft.target_date,
        };
        let id = item.id;
        debug!("wishlist add {} ({})", item.release_id, item.priority.label());
        self.items.push(item);
        self.dirty = true;
        Some(id)
    }

    /// Adds every eligible id with the same priority.
    pub fn add_many<I, S>(&mut self, lookup: &dyn OwnershipLookup, ids: I, priority: Priority) -> Vec<WishlistItemId>
    where
        I: IntoIterator<Item = S>,
        S: Into<ReleaseId>,
    {
        ids.into_iter()
            .filter_map(|id| {
                self.add(
                    lookup,
                    WishlistDraft {
                        priority,
                        ..WishlistDraft::new(id)
                    },
                )
            })
            .collect()
    }

    pub fn remove(&mut self, release_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.release_id != release_id);
        let removed = self.items.len() != before;
        if removed {
            debug!("wishlist remove {release_id}");
            self.dirty = true;
        }
        removed
    }

    /// Patches item `id` in place; false when unknown or the patch is empty.
    pub fn update(&mut self, id: WishlistItemId, patch: &WishlistPatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            debug!("wishlist update for unknown item {id}");
            return false;
        };
        patch.apply_to(item);
        self.dirty = true;
        true
    }

    /// Drops every item whose release is owned; returns the dropped ids.
    pub fn retain_unowned(&mut self, lookup: &dyn OwnershipLookup) -> Vec<ReleaseId> {
        let pruned: Vec<ReleaseId> = self
            .items
            .iter()
            .filter(|i| lookup.is_owned(&i.release_id))
            .map(|i| i.release_id.clone())
            .collect();
        if !pruned.is_empty() {
            self.items.retain(|i| !lookup.is_owned(&i.release_id));
            self.dirty = true;
            debug!("pruned {} owned releases from wishlist", pruned.len());
        }
        pruned
    }

    /// Removes everything; returns how many items were dropped.
    pub fn clear(&mut self) -> usize {
        let n = self.items.len();
        if n > 0 {
            self.items.clear();
            self.dirty = true;
        }
        n
    }

    pub fn is_in_wishlist(&self, release_id: &str) -> bool {
        self.items.iter().any(|i| i.release_id == release_id)
    }

    pub fn get(&self, release_id: &str) -> Option<&WishlistItem> {
        self.items.iter().find(|i| i.release_id == release_id)
    }

    pub fn get_by_id(&self, id: WishlistItemId) -> Option<&WishlistItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn count_by_priority(&self, priority: Priority) -> usize {
        self.items.iter().filter(|i| i.priority == priority).count()
    }

    pub fn total_estimated_value(&self) -> f64 {
        self.items.iter().filter_map(|i| i.estimated_price).sum()
    }

    /// Items whose target date falls in `[now, now + days]`, earliest first.
    ///
    /// A window too large for the calendar has no upper bound.
    pub fn upcoming_targets(&self, within_days: i64, now: Timestamp) -> Vec<&WishlistItem> {
        let cutoff = TimeDelta::try_days(within_days).and_then(|d| now.checked_add_signed(d));
        let mut out: Vec<&WishlistItem> = self
            .items
            .iter()
            .filter(|i| {
                i.target_date
                    .is_some_and(|d| d >= now && cutoff.is_none_or(|c| d <= c))
            })
            .collect();
        out.sort_by(|a, b| a.target_date.cmp(&b.target_date).then_with(|| self.tie_break(a, b)));
        out
    }

    /// Non-empty priority buckets, most urgent first.
    pub fn grouped_by_priority(&self) -> Vec<(Priority, Vec<&WishlistItem>)> {
        Priority::ALL
            .into_iter()
            .map(|p| (p, self.items.iter().filter(|i| i.priority == p).collect::<Vec<_>>()))
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }

    /// Items grouped by catalog series; releases with no series are left out.
    pub fn grouped_by_series(&self) -> BTreeMap<String, Vec<&WishlistItem>> {
        let mut out: BTreeMap<String, Vec<&WishlistItem>> = BTreeMap::new();
        for item in &self.items {
            let series = self.catalog.series_name_of(&item.release_id);
            if series != UNKNOWN_SERIES {
                out.entry(series.to_string()).or_default().push(item);
            }
        }
        out
    }

    /// Filters by priority, series and target-date presence, then sorts.
    ///
    /// Equal sort keys fall back to release name, then release id.
    pub fn filtered_and_sorted(&self, query: &WishlistQuery) -> Vec<&WishlistItem> {
        let mut out: Vec<&WishlistItem> = self
            .items
            .iter()
            .filter(|i| query.priority.is_none_or(|p| i.priority == p))
            .filter(|i| {
                query
                    .series_name
                    .as_deref()
                    .is_none_or(|s| self.catalog.series_name_of(&i.release_id) == s)
            })
            .filter(|i| query.with_target_date.is_none_or(|want| i.target_date.is_some() == want))
            .collect();

        out.sort_by(|a, b| self.compare(query.sort, a, b));
        out
    }

    /// Full re-serialization of the item list.
    pub fn records(&self) -> Vec<PendingRecord> {
        PendingRecord::encode(WISHLIST_KEY, &self.items).into_iter().collect()
    }

    /// Records to write since the last drain; empty when nothing changed.
    pub fn drain_pending_records(&mut self) -> Vec<PendingRecord> {
        if !std::mem::take(&mut self.dirty) {
            return Vec::new();
        }
        self.records()
    }

    /// Queues the record again after a failed write.
    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn compare(&self, sort: WishlistSort, a: &WishlistItem, b: &WishlistItem) -> Ordering {
        let primary = match sort {
            WishlistSort::Priority => a.priority.sort_rank().cmp(&b.priority.sort_rank()),
            WishlistSort::DateAdded => b.created_at.cmp(&a.created_at),
            WishlistSort::TargetDate => match (a.target_date, b.target_date) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            WishlistSort::Alphabetical => Ordering::Equal,
            WishlistSort::EstimatedPrice => {
                let x = a.estimated_price.unwrap_or(0.0);
                let y = b.estimated_price.unwrap_or(0.0);
                y.total_cmp(&x)
            }
            WishlistSort::Series => self
                .catalog
                .series_name_of(&a.release_id)
                .cmp(self.catalog.series_name_of(&b.release_id)),
        };
        primary.then_with(|| self.tie_break(a, b))
    }

    fn tie_break(&self, a: &WishlistItem, b: &WishlistItem) -> Ordering {
        self.release_name(&a.release_id)
            .cmp(self.release_name(&b.release_id))
            .then_with(|| a.release_id.cmp(&b.release_id))
    }

    fn release_name(&self, id: &str) -> &str {
        self.catalog.release(id).map(|r| r.name.as_str()).unwrap_or("")
    }
}

impl OwnershipObserver for WishlistStore {
    fn ownership_changed(&mut self, change: &OwnershipChange, lookup: &dyn OwnershipLookup) -> Vec<ReleaseId> {
        if !change.owned {
            return Vec::new();
        }
        self.retain_unowned(lookup)
    }
}

fn valid_price(v: f64) -> Option<f64> {
    (v.is_finite() && v >= 0.0).then_some(v)
}
