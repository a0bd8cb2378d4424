//! Collection and wishlist stores plus the ownership seam between them.

/// Owned/favorite/photo state.
pub mod collection;
/// Multi-photo gallery per release.
pub mod gallery;
/// Prioritized want-list.
pub mod wishlist;

use serde::{Deserialize, Serialize};

use crate::types::ReleaseId;

/// Read-only ownership predicates shared by the wishlist and search layers.
pub trait OwnershipLookup {
    /// True when the release is marked owned.
    fn is_owned(&self, id: &str) -> bool;
    /// True when the release is marked favorite.
    fn is_favorite(&self, id: &str) -> bool;
    /// True when a user photo is stored for the release.
    fn has_photo(&self, id: &str) -> bool;
}

/// Result of flipping a release's ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipChange {
    /// Release whose ownership flipped.
    pub release_id: ReleaseId,
    /// Ownership after the flip.
    pub owned: bool,
    /// True when un-owning cascaded a photo delete.
    pub photo_removed: bool,
}

/// Receives ownership flips from the collection store.
pub trait OwnershipObserver {
    /// Reacts to `change`; returns the release ids this observer dropped.
    fn ownership_changed(&mut self, change: &OwnershipChange, lookup: &dyn OwnershipLookup) -> Vec<ReleaseId>;
}
