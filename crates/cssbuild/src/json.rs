//! Generic JSON encode/decode helpers.
//!
//! Thin wrappers over serde_json that keep the typed round trip explicit:
//! decoding produces a value of a known type or fails, it never patches
//! behavior onto untyped data.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serialize any [`Serialize`] value to a JSON string.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Deserialize a JSON string into a value of type `T`.
pub fn from_json<T: DeserializeOwned>(source: &str) -> serde_json::Result<T> {
    serde_json::from_str(source)
}
