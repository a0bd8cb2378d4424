//! Facade owning the catalog, both stores, persistence and the event stream.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};
use tokio::sync::broadcast;

use crate::{
    catalog::{Catalog, Release},
    config::ShelfConfig,
    core::{
        OwnershipLookup, OwnershipObserver,
        collection::{CollectionStats, CollectionStore},
        gallery::{GalleryDraft, GalleryStore},
        wishlist::{WishlistDraft, WishlistItem, WishlistPatch, WishlistQuery, WishlistStore},
    },
    persist::{
        KvSink, KvSource, PersistResult,
        memory::MemoryKvStore,
        record::{GALLERY_KEY, PendingRecord, WISHLIST_KEY},
    },
    query::search::{self, SearchQuery},
    route::router::Router,
    runtime::events::ShelfEvent,
    types::{GalleryPhotoId, Priority, Timestamp, WishlistItemId},
};

const EVENT_CAPACITY: usize = 256;

/// Single owner of all mutable shelf state.
///
/// Every mutation updates memory first, then notifies subscribers, then
/// writes the affected records through the sink.
pub struct Shelf {
    catalog: Arc<Catalog>,
    collection: CollectionStore,
    wishlist: WishlistStore,
    gallery: GalleryStore,
    sink: Box<dyn KvSink>,
    events: broadcast::Sender<ShelfEvent>,
    config: ShelfConfig,
}

impl Shelf {
    /// Restores every store from `source` and writes through `sink`.
    ///
    /// Wishlist items whose release is already owned are pruned on open.
    pub fn open(catalog: Arc<Catalog>, source: &dyn KvSource, sink: Box<dyn KvSink>, config: ShelfConfig) -> Self {
        let collection = CollectionStore::load(Arc::clone(&catalog), source, config.photo_policy);
        let mut wishlist = WishlistStore::load(Arc::clone(&catalog), source);
        let pruned = wishlist.retain_unowned(&collection);
        if !pruned.is_empty() {
            info!("reconciled wishlist: dropped {} owned releases", pruned.len());
        }
        let gallery = GalleryStore::load(source);

        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let mut shelf = Self {
            catalog,
            collection,
            wishlist,
            gallery,
            sink,
            events,
            config,
        };
        shelf.persist_pending();
        shelf
    }

    /// Empty shelf backed by a fresh in-memory store.
    pub fn in_memory(catalog: Arc<Catalog>) -> Self {
        let store = MemoryKvStore::new();
        Self::open(catalog, &store, Box::new(store.clone()), ShelfConfig::default())
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn collection(&self) -> &CollectionStore {
        &self.collection
    }

    pub fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    pub fn gallery(&self) -> &GalleryStore {
        &self.gallery
    }

    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ShelfEvent> {
        self.events.subscribe()
    }

    /// A router sharing this shelf's link configuration.
    pub fn new_router(&self) -> Router {
        Router::new(self.config.router.clone())
    }

    /// Flips ownership; becoming owned removes the release from the wishlist.
    ///
    /// Returns the ownership after the flip.
    pub fn toggle_owned(&mut self, release_id: &str) -> bool {
        let change = self.collection.toggle_owned(release_id);
        let pruned = self.wishlist.ownership_changed(&change, &self.collection);

        self.emit(ShelfEvent::OwnershipChanged {
            release_id: change.release_id.clone(),
            owned: change.owned,
        });
        if change.photo_removed {
            self.emit(ShelfEvent::PhotoChanged {
                release_id: change.release_id.clone(),
                present: false,
            });
        }
        for release_id in pruned {
            self.emit(ShelfEvent::WishlistRemoved { release_id });
        }

        self.persist_pending();
        change.owned
    }

    /// Flips the favorite flag; returns the new state.
    pub fn toggle_favorite(&mut self, release_id: &str) -> bool {
        let favorite = self.collection.toggle_favorite(release_id);
        self.emit(ShelfEvent::FavoriteChanged {
            release_id: release_id.to_string(),
            favorite,
        });
        self.persist_pending();
        favorite
    }

    /// Stores `bytes` as the release photo; false when the photo policy refuses it.
    pub fn set_photo(&mut self, release_id: &str, bytes: Vec<u8>) -> bool {
        if !self.collection.set_photo(release_id, bytes) {
            return false;
        }
        self.emit(ShelfEvent::PhotoChanged {
            release_id: release_id.to_string(),
            present: true,
        });
        self.persist_pending();
        true
    }

    pub fn remove_photo(&mut self, release_id: &str) -> bool {
        if !self.collection.remove_photo(release_id) {
            return false;
        }
        self.emit(ShelfEvent::PhotoChanged {
            release_id: release_id.to_string(),
            present: false,
        });
        self.persist_pending();
        true
    }

    /// Adds an item unless the release is owned or already wishlisted.
    pub fn add_to_wishlist(&mut self, draft: WishlistDraft) -> Option<WishlistItemId> {
        let release_id = draft.release_id.clone();
        let id = self.wishlist.add(&self.collection, draft)?;
        self.emit(ShelfEvent::WishlistAdded { id, release_id });
        self.persist_pending();
        Some(id)
    }

    pub fn add_many_to_wishlist<I, S>(&mut self, release_ids: I, priority: Priority) -> Vec<WishlistItemId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids = self.wishlist.add_many(&self.collection, release_ids, priority);
        for id in &ids {
            if let Some(item) = self.wishlist.get_by_id(*id) {
                let event = ShelfEvent::WishlistAdded {
                    id: *id,
                    release_id: item.release_id.clone(),
                };
                self.emit(event);
            }
        }
        if !ids.is_empty() {
            self.persist_pending();
        }
        ids
    }

    pub fn remove_from_wishlist(&mut self, release_id: &str) -> bool {
        if !self.wishlist.remove(release_id) {
            return false;
        }
        self.emit(ShelfEvent::WishlistRemoved {
            release_id: release_id.to_string(),
        });
        self.persist_pending();
        true
    }

    pub fn update_wishlist_item(&mut self, id: WishlistItemId, patch: &WishlistPatch) -> bool {
        if !self.wishlist.update(id, patch) {
            return false;
        }
        self.emit(ShelfEvent::WishlistUpdated { id });
        self.persist_pending();
        true
    }

    /// Drops every wishlist item; returns how many were removed.
    pub fn clear_wishlist(&mut self) -> usize {
        let n = self.wishlist.clear();
        if n > 0 {
            self.emit(ShelfEvent::WishlistCleared);
            self.persist_pending();
        }
        n
    }

    /// Marks the item's release owned and takes it off the wishlist.
    ///
    /// False when `id` is unknown.
    pub fn move_to_collection(&mut self, id: WishlistItemId) -> bool {
        let Some(release_id) = self.wishlist.get_by_id(id).map(|i| i.release_id.clone()) else {
            debug!("move_to_collection for unknown item {id}");
            return false;
        };
        if !self.collection.is_owned(&release_id) {
            self.toggle_owned(&release_id);
        }
        self.remove_from_wishlist(&release_id);
        true
    }

    /// Adds a gallery photo; the first photo of a release becomes its main photo.
    pub fn add_gallery_photo(&mut self, draft: GalleryDraft) -> GalleryPhotoId {
        let release_id = draft.release_id.clone();
        let photo_id = self.gallery.add(draft);
        self.emit(ShelfEvent::GalleryChanged { photo_id, release_id });
        self.persist_pending();
        photo_id
    }

    pub fn set_main_gallery_photo(&mut self, id: GalleryPhotoId) -> bool {
        if !self.gallery.set_main(id) {
            return false;
        }
        self.emit_gallery_change(id);
        self.persist_pending();
        true
    }

    /// Replaces a photo caption; an empty caption clears it.
    pub fn update_gallery_caption(&mut self, id: GalleryPhotoId, caption: &str) -> bool {
        if !self.gallery.update_caption(id, caption) {
            return false;
        }
        self.emit_gallery_change(id);
        self.persist_pending();
        true
    }

    pub fn delete_gallery_photo(&mut self, id: GalleryPhotoId) -> bool {
        let Some(removed) = self.gallery.delete(id) else {
            return false;
        };
        self.emit(ShelfEvent::GalleryChanged {
            photo_id: id,
            release_id: removed.release_id,
        });
        self.persist_pending();
        true
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<&Release> {
        search::search(&self.catalog, &self.collection, query)
    }

    pub fn wishlist_view(&self, query: &WishlistQuery) -> Vec<&WishlistItem> {
        self.wishlist.filtered_and_sorted(query)
    }

    /// Items with a target date inside the configured window from `now`.
    pub fn upcoming_targets(&self, now: Timestamp) -> Vec<&WishlistItem> {
        self.wishlist.upcoming_targets(self.config.upcoming_window_days, now)
    }

    /// [`Shelf::upcoming_targets`] relative to the wall clock.
    pub fn upcoming_targets_now(&self) -> Vec<&WishlistItem> {
        self.upcoming_targets(Utc::now())
    }

    pub fn stats(&self) -> CollectionStats {
        self.collection.stats()
    }

    /// Writes every record regardless of dirty state, then flushes the sink.
    pub fn persist_all(&mut self) -> PersistResult<()> {
        let _ = self.collection.drain_pending_records();
        let _ = self.wishlist.drain_pending_records();
        let _ = self.gallery.drain_pending_records();
        let records: Vec<PendingRecord> = self
            .collection
            .records()
            .into_iter()
            .chain(self.wishlist.records())
            .chain(self.gallery.records())
            .collect();
        for record in &records {
            self.sink.save(record.key, &record.payload)?;
        }
        self.sink.flush()
    }

    /// Writes whatever changed since the last write. A failed record stays
    /// pending for the next mutation; memory stays authoritative.
    fn persist_pending(&mut self) {
        if !self.config.persist_eagerly {
            return;
        }
        let records: Vec<PendingRecord> = self
            .collection
            .drain_pending_records()
            .into_iter()
            .chain(self.wishlist.drain_pending_records())
            .chain(self.gallery.drain_pending_records())
            .collect();
        for record in records {
            if let Err(err) = self.sink.save(record.key, &record.payload) {
                warn!("failed to persist {}: {err}", record.key);
                match record.key {
                    WISHLIST_KEY => self.wishlist.mark_dirty(),
                    GALLERY_KEY => self.gallery.mark_dirty(),
                    _ => self.collection.mark_dirty(),
                }
            }
        }
    }

    fn emit(&self, event: ShelfEvent) {
        let _ = self.events.send(event);
    }

    fn emit_gallery_change(&self, photo_id: GalleryPhotoId) {
        if let Some(photo) = self.gallery.get(photo_id) {
            self.emit(ShelfEvent::GalleryChanged {
                photo_id,
                release_id: photo.release_id.clone(),
            });
        }
    }
}
