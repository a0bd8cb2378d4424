//! Versioned record envelopes and the fixed storage keys.

use log::warn;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::{KvSource, PersistError, PersistResult};

/// Version number for serialized [`RecordEnvelope`] payloads.
pub const RECORD_FORMAT_VERSION: u16 = 1;

/// Owned release id set.
pub const OWNED_KEY: &str = "ownedItems";
/// Favorited release id set.
pub const FAVORITES_KEY: &str = "favoriteItems";
/// Release id to photo blob map.
pub const PHOTOS_KEY: &str = "ownedImages";
/// Wishlist item list.
pub const WISHLIST_KEY: &str = "com.lafufu.wishlist";
/// Per-release photo gallery.
pub const GALLERY_KEY: &str = "photos";

/// Versioned wrapper for stable on-disk payload decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEnvelope<T> {
    /// Payload format version.
    pub format_version: u16,
    /// Wrapped record.
    pub payload: T,
}

impl<T> RecordEnvelope<T> {
    /// Constructs an envelope using [`RECORD_FORMAT_VERSION`].
    pub fn new(payload: T) -> Self {
        Self {
            format_version: RECORD_FORMAT_VERSION,
            payload,
        }
    }
}

/// A fully encoded record waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRecord {
    pub key: &'static str,
    pub payload: Vec<u8>,
}

impl PendingRecord {
    /// Encodes `payload` under `key`; failures are logged and yield `None`.
    pub fn encode<T: Serialize + ?Sized>(key: &'static str, payload: &T) -> Option<Self> {
        match encode(payload) {
            Ok(payload) => Some(Self { key, payload }),
            Err(err) => {
                warn!("failed to encode record {key}: {err}");
                None
            }
        }
    }
}

pub fn encode<T: Serialize + ?Sized>(payload: &T) -> PersistResult<Vec<u8>> {
    Ok(serde_json::to_vec(&RecordEnvelope::new(payload))?)
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> PersistResult<T> {
    if let Ok(envelope) = serde_json::from_slice::<RecordEnvelope<T>>(bytes) {
        if envelope.format_version != RECORD_FORMAT_VERSION {
            return Err(PersistError::Message(format!(
                "unsupported record format version: {}",
                envelope.format_version
            )));
        }
        return Ok(envelope.payload);
    }

    // Payloads written before the envelope existed are the bare value.
    Ok(serde_json::from_slice::<T>(bytes)?)
}

/// Loads and decodes `key`, treating any failure as an absent record.
pub fn load_or_default<T: DeserializeOwned + Default>(source: &dyn KvSource, key: &str) -> T {
    match source.load(key) {
        Ok(Some(bytes)) => decode(&bytes).unwrap_or_else(|err| {
            warn!("discarding unreadable record {key}: {err}");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(err) => {
            warn!("failed to load record {key}: {err}");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_legacy_payload_still_decodes() {
        let legacy = br#"["lemon","love"]"#;
        let ids: Vec<String> = decode(legacy).expect("decode");
        assert_eq!(ids, vec!["lemon".to_string(), "love".to_string()]);
    }

    #[test]
    fn future_version_is_rejected() {
        let bytes = br#"{"format_version":9,"payload":["lemon"]}"#;
        assert!(decode::<Vec<String>>(bytes).is_err());
    }

    #[test]
    fn envelope_round_trips() {
        let bytes = encode(&vec!["hope".to_string()]).expect("encode");
        let back: Vec<String> = decode(&bytes).expect("decode");
        assert_eq!(back, vec!["hope".to_string()]);
    }
}
