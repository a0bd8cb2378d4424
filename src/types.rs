//! Shared primitive IDs and wishlist enums.

use serde::{Deserialize, Serialize};

/// Stable catalog key of a release (its image key).
pub type ReleaseId = String;
/// Generated wishlist item identifier.
pub type WishlistItemId = uuid::Uuid;
/// Generated gallery photo identifier.
pub type GalleryPhotoId = uuid::Uuid;
/// Wall-clock timestamp used for wishlist dates.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// How badly a wishlisted release is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    /// Nice to have.
    Low,
    /// Default priority.
    #[default]
    Medium,
    /// Wanted soon.
    High,
    /// Top of the list.
    MustHave,
}

impl Priority {
    /// All priorities, most urgent first.
    pub const ALL: [Priority; 4] = [
        Priority::MustHave,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// Fixed sort rank; lower sorts first.
    pub fn sort_rank(self) -> u8 {
        match self {
            Priority::MustHave => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::MustHave => "Must Have",
        }
    }
}
