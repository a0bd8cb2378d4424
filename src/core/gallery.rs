use std::collections::BTreeMap;

use chrono::Utc;
use hashbrown::HashSet;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    persist::{
        KvSource,
        record::{self, GALLERY_KEY, PendingRecord},
    },
    types::{GalleryPhotoId, ReleaseId, Timestamp},
};

/// One user photo in a release's gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryPhoto {
    pub id: GalleryPhotoId,
    pub release_id: ReleaseId,
    pub added_at: Timestamp,
    pub caption: Option<String>,
    /// Exactly one photo per non-empty gallery carries this flag.
    pub is_main: bool,
    #[serde(with = "crate::persist::blob")]
    pub bytes: Vec<u8>,
}

/// Insert payload for [`GalleryStore::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryDraft {
    pub release_id: ReleaseId,
    pub bytes: Vec<u8>,
    pub caption: Option<String>,
    /// Make this the main photo even when the gallery already has one.
    pub set_as_main: bool,
    pub added_at: Timestamp,
}

impl GalleryDraft {
    /// No caption, not forced main, stamped now.
    pub fn new(release_id: impl Into<ReleaseId>, bytes: Vec<u8>) -> Self {
        Self {
            release_id: release_id.into(),
            bytes,
            caption: None,
            set_as_main: false,
            added_at: Utc::now(),
        }
    }
}

#[derive(Debug, Default)]
pub struct GalleryStore {
    photos: Vec<GalleryPhoto>,
    dirty: bool,
}

impl GalleryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the gallery and repairs the one-main-photo rule per release.
    pub fn load(source: &dyn KvSource) -> Self {
        let photos: Vec<GalleryPhoto> = record::load_or_default(source, GALLERY_KEY);
        let mut store = Self { photos, dirty: false };
        let releases: HashSet<ReleaseId> = store.photos.iter().map(|p| p.release_id.clone()).collect();
        for release_id in releases {
            if store.repair_main(&release_id) {
                warn!("repaired main photo flag for {release_id}");
                store.dirty = true;
            }
        }
        info!("loaded gallery: {} photos", store.photos.len());
        store
    }

    /// Adds a photo. The first photo of a release becomes its main photo.
    pub fn add(&mut self, draft: GalleryDraft) -> GalleryPhotoId {
        let is_main = draft.set_as_main || !self.has_photos(&draft.release_id);
        if is_main {
            self.clear_main(&draft.release_id);
        }
        let photo = GalleryPhoto {
            id: GalleryPhotoId::new_v4(),
            release_id: draft.release_id,
            added_at: draft.added_at,
            caption: draft.caption.filter(|c| !c.is_empty()),
            is_main,
            bytes: draft.bytes,
        };
        let id = photo.id;
        debug!("gallery add {} for {} (main: {is_main})", id, photo.release_id);
        self.photos.push(photo);
        self.dirty = true;
        id
    }

    /// Photos of one release, newest first; equal times keep the later add first.
    pub fn photos_for(&self, release_id: &str) -> Vec<&GalleryPhoto> {
        let mut out: Vec<&GalleryPhoto> = self.photos.iter().rev().filter(|p| p.release_id == release_id).collect();
        out.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        out
    }

    pub fn main_photo(&self, release_id: &str) -> Option<&GalleryPhoto> {
        self.photos.iter().find(|p| p.release_id == release_id && p.is_main)
    }

    pub fn get(&self, id: GalleryPhotoId) -> Option<&GalleryPhoto> {
        self.photos.iter().find(|p| p.id == id)
    }

    pub fn has_photos(&self, release_id: &str) -> bool {
        self.photos.iter().any(|p| p.release_id == release_id)
    }

    pub fn count(&self) -> usize {
        self.photos.len()
    }

    /// Photo counts keyed by release.
    pub fn counts_by_release(&self) -> BTreeMap<&str, usize> {
        let mut out = BTreeMap::new();
        for p in &self.photos {
            *out.entry(p.release_id.as_str()).or_insert(0) += 1;
        }
        out
    }

    /// Makes `id` the main photo of its release; false when unknown.
    pub fn set_main(&mut self, id: GalleryPhotoId) -> bool {
        let Some(release_id) = self.get(id).map(|p| p.release_id.clone()) else {
            debug!("set_main for unknown photo {id}");
            return false;
        };
        for p in self.photos.iter_mut().filter(|p| p.release_id == release_id) {
            p.is_main = p.id == id;
        }
        self.dirty = true;
        true
    }

    /// Replaces the caption; an empty caption clears it. False when unknown.
    pub fn update_caption(&mut self, id: GalleryPhotoId, caption: &str) -> bool {
        let Some(photo) = self.photos.iter_mut().find(|p| p.id == id) else {
            debug!("update_caption for unknown photo {id}");
            return false;
        };
        photo.caption = (!caption.is_empty()).then(|| caption.to_string());
        self.dirty = true;
        true
    }

    /// Deletes a photo. Deleting the main photo promotes the earliest
    /// inserted photo left for that release.
    pub fn delete(&mut self, id: GalleryPhotoId) -> Option<GalleryPhoto> {
        let idx = self.photos.iter().position(|p| p.id == id)?;
        let removed = self.photos.remove(idx);
        if removed.is_main {
            self.repair_main(&removed.release_id);
        }
        debug!("gallery delete {id} for {}", removed.release_id);
        self.dirty = true;
        Some(removed)
    }

    pub fn records(&self) -> Vec<PendingRecord> {
        PendingRecord::encode(GALLERY_KEY, &self.photos).into_iter().collect()
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

    fn clear_main(&mut self, release_id: &str) {
        for p in self.photos.iter_mut().filter(|p| p.release_id == release_id) {
            p.is_main = false;
        }
    }

    /// Leaves exactly one main photo for a non-empty release; true when
    /// anything changed.
    fn repair_main(&mut self, release_id: &str) -> bool {
        let mains = self
            .photos
            .iter()
            .filter(|p| p.release_id == release_id && p.is_main)
            .count();
        if mains == 1 {
            return false;
        }
        let keep = if mains == 0 {
            self.photos.iter().position(|p| p.release_id == release_id)
        } else {
            self.photos.iter().position(|p| p.release_id == release_id && p.is_main)
        };
        let Some(keep) = keep else {
            return false;
        };
        for (i, p) in self.photos.iter_mut().enumerate() {
            if p.release_id == release_id {
                p.is_main = i == keep;
            }
        }
        true
    }
}
