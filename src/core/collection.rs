use std::collections::BTreeMap;
use std::sync::Arc;

use hashbrown::{HashMap, HashSet};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{Catalog, Release},
    persist::{
        KvSource,
        blob::{Blob, BlobRef},
        record::{self, FAVORITES_KEY, OWNED_KEY, PHOTOS_KEY, PendingRecord},
    },
    types::ReleaseId,
};

use super::{OwnershipChange, OwnershipLookup};

/// Whether photos may be attached to releases that are not owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoPolicy {
    /// Any release id may carry a photo.
    #[default]
    Permissive,
    /// `set_photo` is refused unless the release is owned.
    RequireOwned,
}

/// Owned/total progress for one series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesProgress {
    pub series_id: String,
    pub name: String,
    pub owned: usize,
    pub total: usize,
}

impl SeriesProgress {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.owned as f64 / self.total as f64 * 100.0
    }

    /// Non-empty series with every release owned.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.owned == self.total
    }
}

/// Summary used for share cards and the collection header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionStats {
    pub owned: usize,
    pub favorites: usize,
    pub photos: usize,
    pub total_releases: usize,
    pub completion_percentage: f64,
    pub series: Vec<SeriesProgress>,
}

#[derive(Debug)]
pub struct CollectionStore {
    catalog: Arc<Catalog>,
    owned: HashSet<ReleaseId>,
    favorites: HashSet<ReleaseId>,
    photos: HashMap<ReleaseId, Vec<u8>>,
    policy: PhotoPolicy,
    dirty: bool,
}

impl CollectionStore {
    pub fn new(catalog: Arc<Catalog>, policy: PhotoPolicy) -> Self {
        Self {
            catalog,
            owned: HashSet::new(),
            favorites: HashSet::new(),
            photos: HashMap::new(),
            policy,
            dirty: false,
        }
    }

    /// Restores the three persisted records; unreadable records load empty.
    pub fn load(catalog: Arc<Catalog>, source: &dyn KvSource, policy: PhotoPolicy) -> Self {
        let owned: Vec<ReleaseId> = record::load_or_default(source, OWNED_KEY);
        let favorites: Vec<ReleaseId> = record::load_or_default(source, FAVORITES_KEY);
        let photos: HashMap<ReleaseId, Blob> = record::load_or_default(source, PHOTOS_KEY);

        let mut store = Self::new(catalog, policy);
        store.owned = owned.into_iter().collect();
        store.favorites = favorites.into_iter().collect();
        store.photos = photos.into_iter().map(|(id, blob)| (id, blob.0)).collect();

        if policy == PhotoPolicy::RequireOwned {
            let before = store.photos.len();
            let owned = &store.owned;
            store.photos.retain(|id, _| owned.contains(id));
            let pruned = before - store.photos.len();
            if pruned > 0 {
                warn!("dropped {pruned} photos for unowned releases");
                store.dirty = true;
            }
        }
        info!(
            "loaded collection: {} owned, {} favorites, {} photos",
            store.owned.len(),
            store.favorites.len(),
            store.photos.len()
        );
        store
    }

    pub fn policy(&self) -> PhotoPolicy {
        self.policy
    }

    /// Flips ownership of `id`. Un-owning also drops its photo.
    pub fn toggle_owned(&mut self, id: &str) -> OwnershipChange {
        let change = if self.owned.remove(id) {
            let photo_removed = self.photos.remove(id).is_some();
            OwnershipChange {
                release_id: id.to_string(),
                owned: false,
                photo_removed,
            }
        } else {
            self.owned.insert(id.to_string());
            OwnershipChange {
                release_id: id.to_string(),
                owned: true,
                photo_removed: false,
            }
        };
        debug!("toggle owned {id}: now {}", change.owned);
        self.dirty = true;
        change
    }

    /// Flips favorite state of `id`; returns the new state.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let now_favorite = if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.to_string());
            true
        };
        debug!("toggle favorite {id}: now {now_favorite}");
        self.dirty = true;
        now_favorite
    }

    /// Stores or replaces the photo for `id`. Returns false when refused by policy.
    pub fn set_photo(&mut self, id: &str, bytes: Vec<u8>) -> bool {
        if self.policy == PhotoPolicy::RequireOwned && !self.owned.contains(id) {
            warn!("refusing photo for unowned release {id}");
            return false;
        }
        debug!("set photo {id}: {} bytes", bytes.len());
        self.photos.insert(id.to_string(), bytes);
        self.dirty = true;
        true
    }

    /// Drops the photo for `id`; returns whether one existed.
    pub fn remove_photo(&mut self, id: &str) -> bool {
        let removed = self.photos.remove(id).is_some();
        if removed {
            debug!("removed photo {id}");
            self.dirty = true;
        }
        removed
    }

    pub fn photo(&self, id: &str) -> Option<&[u8]> {
        self.photos.get(id).map(Vec::as_slice)
    }

    pub fn owned_count(&self) -> usize {
        self.owned.len()
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    /// `owned / total * 100`, with the catalog flattened on every call.
    pub fn completion_percentage(&self) -> f64 {
        let total = self.catalog.total_releases();
        if total == 0 {
            return 0.0;
        }
        self.owned.len() as f64 / total as f64 * 100.0
    }

    pub fn owned_ids(&self) -> Vec<&str> {
        sorted_ids(&self.owned)
    }

    pub fn favorite_ids(&self) -> Vec<&str> {
        sorted_ids(&self.favorites)
    }

    /// Owned releases known to the catalog, in catalog order.
    pub fn owned_releases(&self) -> Vec<&Release> {
        self.catalog
            .releases()
            .filter(|r| self.owned.contains(r.id.as_str()))
            .collect()
    }

    pub fn stats(&self) -> CollectionStats {
        let series = self
            .catalog
            .series()
            .iter()
            .map(|s| SeriesProgress {
                series_id: s.id.clone(),
                name: s.name.clone(),
                owned: s
                    .releases
                    .iter()
                    .filter(|r| self.owned.contains(r.id.as_str()))
                    .count(),
                total: s.releases.len(),
            })
            .collect();

        CollectionStats {
            owned: self.owned_count(),
            favorites: self.favorite_count(),
            photos: self.photo_count(),
            total_releases: self.catalog.total_releases(),
            completion_percentage: self.completion_percentage(),
            series,
        }
    }

    /// Full re-serialization of all three records.
    pub fn records(&self) -> Vec<PendingRecord> {
        let photos: BTreeMap<&str, BlobRef<'_>> = self
            .photos
            .iter()
            .map(|(k, v)| (k.as_str(), BlobRef(v)))
            .collect();

        [
            PendingRecord::encode(OWNED_KEY, &self.owned_ids()),
            PendingRecord::encode(FAVORITES_KEY, &self.favorite_ids()),
            PendingRecord::encode(PHOTOS_KEY, &photos),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Records to write since the last drain; empty when nothing changed.
    pub fn drain_pending_records(&mut self) -> Vec<PendingRecord> {
        if !std::mem::take(&mut self.dirty) {
            return Vec::new();
        }
        self.records()
    }

    /// Queues the records again after a failed write.
    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl OwnershipLookup for CollectionStore {
    fn is_owned(&self, id: &str) -> bool {
        self.owned.contains(id)
    }

    fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    fn has_photo(&self, id: &str) -> bool {
        self.photos.contains_key(id)
    }
}

fn sorted_ids(set: &HashSet<ReleaseId>) -> Vec<&str> {
    let mut ids: Vec<&str> = set.iter().map(String::as_str).collect();
    ids.sort_unstable();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::memory::MemoryKvStore;

    fn store(policy: PhotoPolicy) -> CollectionStore {
        CollectionStore::new(Arc::new(Catalog::builtin()), policy)
    }

    #[test]
    fn require_owned_policy_refuses_loose_photos() {
        let mut s = store(PhotoPolicy::RequireOwned);
        assert!(!s.set_photo("lemon", vec![1]));
        s.toggle_owned("lemon");
        assert!(s.set_photo("lemon", vec![1]));
        assert!(s.has_photo("lemon"));
    }

    #[test]
    fn drain_is_empty_until_mutated() {
        let mut s = store(PhotoPolicy::Permissive);
        assert!(s.drain_pending_records().is_empty());
        s.toggle_favorite("hope");
        assert_eq!(s.drain_pending_records().len(), 3);
        assert!(s.drain_pending_records().is_empty());
    }

    #[test]
    fn stats_track_series_progress() {
        let mut s = store(PhotoPolicy::Permissive);
        for id in ["surprise_shake", "happy_factor"] {
            s.toggle_owned(id);
        }
        let stats = s.stats();
        let coke = stats
            .series
            .iter()
            .find(|p| p.series_id == "coca_cola")
            .expect("series");
        assert!(coke.is_complete());
        assert_eq!(stats.owned, 2);
    }

    #[test]
    fn require_owned_load_drops_loose_photos() {
        use crate::persist::KvSink;

        let mut kv = MemoryKvStore::new();
        let mut loose = store(PhotoPolicy::Permissive);
        loose.toggle_owned("kiwi");
        loose.set_photo("kiwi", vec![1]);
        loose.set_photo("pear", vec![2]);
        for r in loose.records() {
            kv.save(r.key, &r.payload).expect("save");
        }

        let permissive = CollectionStore::load(Arc::new(Catalog::builtin()), &kv, PhotoPolicy::Permissive);
        assert_eq!(permissive.photo_count(), 2);

        let mut strict = CollectionStore::load(Arc::new(Catalog::builtin()), &kv, PhotoPolicy::RequireOwned);
        assert_eq!(strict.photo("kiwi"), Some(&[1u8][..]));
        assert!(!strict.has_photo("pear"));
        assert_eq!(strict.drain_pending_records().len(), 3);
    }

    #[test]
    fn photo_record_is_base64() {
        let mut s = store(PhotoPolicy::Permissive);
        s.set_photo("lemon", vec![0xde, 0xad, 0xbe, 0xef]);
        let photos = s
            .records()
            .into_iter()
            .find(|r| r.key == PHOTOS_KEY)
            .expect("photos record");
        let text = String::from_utf8(photos.payload).expect("utf8");
        assert!(text.contains("\"lemon\":\"3q2+7w==\""), "{text}");
    }

    #[test]
    fn unreadable_record_loads_empty() {
        use crate::persist::KvSink;

        let mut kv = MemoryKvStore::new();
        kv.save(OWNED_KEY, b"not json").expect("save");
        let s = CollectionStore::load(Arc::new(Catalog::builtin()), &kv, PhotoPolicy::Permissive);
        assert_eq!(s.owned_count(), 0);
    }
}
