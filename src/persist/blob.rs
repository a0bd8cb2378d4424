//! Binary payloads inside JSON records.
//!
//! Blobs are written as standard base64 strings. Records written before
//! that stored a plain array of byte values, which still decodes.

use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};

/// Owned blob for use as a map value or record field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blob(pub Vec<u8>);

/// Borrowed blob for encoding without copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobRef<'a>(pub &'a [u8]);

impl Serialize for Blob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(&self.0, serializer)
    }
}

impl Serialize for BlobRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize(deserializer).map(Blob)
    }
}

/// `#[serde(with = "crate::persist::blob")]` entry point.
pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&STANDARD.encode(bytes))
}

/// `#[serde(with = "crate::persist::blob")]` entry point.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    deserializer.deserialize_any(BlobVisitor)
}

struct BlobVisitor;

impl<'de> Visitor<'de> for BlobVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a base64 string or an array of bytes")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        STANDARD.decode(v).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(v.to_vec())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(b) = seq.next_element::<u8>()? {
            out.push(b);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blobs_encode_as_base64() {
        let json = serde_json::to_string(&BlobRef(&[0xde, 0xad, 0xbe, 0xef])).expect("encode");
        assert_eq!(json, "\"3q2+7w==\"");
        let back: Blob = serde_json::from_str(&json).expect("decode");
        assert_eq!(back.0, vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn byte_arrays_still_decode() {
        let back: Blob = serde_json::from_str("[1,2,255]").expect("decode");
        assert_eq!(back.0, vec![1, 2, 255]);
    }

    #[test]
    fn garbage_string_is_an_error() {
        assert!(serde_json::from_str::<Blob>("\"***\"").is_err());
    }
}
