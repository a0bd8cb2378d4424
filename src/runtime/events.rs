//! Change notifications broadcast by the shelf.

use crate::types::{GalleryPhotoId, ReleaseId, WishlistItemId};

/// Events emitted after each applied mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShelfEvent {
    /// A release's ownership flipped.
    OwnershipChanged {
        /// Affected release.
        release_id: ReleaseId,
        /// Ownership after the flip.
        owned: bool,
    },
    /// A release's favorite flag flipped.
    FavoriteChanged {
        /// Affected release.
        release_id: ReleaseId,
        /// Favorite state after the flip.
        favorite: bool,
    },
    /// A photo was stored or dropped.
    PhotoChanged {
        /// Affected release.
        release_id: ReleaseId,
        /// True when a photo is now present.
        present: bool,
    },
    /// A wishlist item was created.
    WishlistAdded {
        /// New item id.
        id: WishlistItemId,
        /// Wishlisted release.
        release_id: ReleaseId,
    },
    /// A wishlist item was removed, explicitly or by becoming owned.
    WishlistRemoved {
        /// Removed release.
        release_id: ReleaseId,
    },
    /// A wishlist item was edited in place.
    WishlistUpdated {
        /// Edited item id.
        id: WishlistItemId,
    },
    /// Every wishlist item was removed.
    WishlistCleared,
    /// A gallery photo was added, edited, promoted or deleted.
    GalleryChanged {
        /// Affected photo.
        photo_id: GalleryPhotoId,
        /// Release the photo belongs to.
        release_id: ReleaseId,
    },
}
