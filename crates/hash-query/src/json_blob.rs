//! Structured values packed as canonical JSON in base64.

use crate::base64_string::{string_from_base64, string_to_base64};
use crate::json_stable;
use crate::HashValueError;
use hash_query_fragment::{get_fragment_value, set_fragment_value};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::borrow::Cow;

/// Encode a structured value: canonical stringify, then base64 packing.
///
/// Identical logical values always produce the same encoded text, so the
/// stored form can be compared directly for change detection.
pub fn blob_to_base64<T: Serialize>(value: &T) -> Result<String, HashValueError> {
    let json = serde_json::to_value(value)?;
    Ok(string_to_base64(&json_stable::stringify(&json)))
}

/// Decode a base64-packed JSON value.
///
/// # Errors
///
/// A corrupt stored blob (bad base64, bad UTF-8, or bad JSON) is an
/// explicit error, never a panic.
pub fn blob_from_base64<T: DeserializeOwned>(value: &str) -> Result<T, HashValueError> {
    let text = string_from_base64(value)?;
    Ok(serde_json::from_str(&text)?)
}

/// Store a structured value under `key`; `None` deletes the key.
pub fn set_json_value<'a, T: Serialize>(
    fragment: &'a str,
    key: &str,
    value: Option<&T>,
) -> Result<Cow<'a, str>, HashValueError> {
    let encoded = match value {
        Some(value) => Some(blob_to_base64(value)?),
        None => None,
    };
    Ok(set_fragment_value(fragment, key, encoded.as_deref()))
}

/// Read a structured value stored under `key`.
///
/// Absent key and empty stored value are both `Ok(None)`.
pub fn get_json_value<T: DeserializeOwned>(
    fragment: &str,
    key: &str,
) -> Result<Option<T>, HashValueError> {
    match get_fragment_value(fragment, key) {
        Some(stored) if !stored.is_empty() => blob_from_base64(&stored).map(Some),
        _ => Ok(None),
    }
}
