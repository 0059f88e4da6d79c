//! Hash param operations over whole URLs.
//!
//! The same operations as the bare-fragment codec, applied to a URL's
//! fragment. Scheme, host, path, and query are left untouched; only the
//! text after `#` changes.

use crate::base64_string::{string_from_base64, string_to_base64};
use crate::boolean::{decode_boolean, encode_boolean};
use crate::json_blob::{blob_from_base64, blob_to_base64};
use crate::numeric::{decode_float, decode_integer, encode_float, encode_integer};
use crate::HashValueError;
use hash_query_fragment::{get_fragment_value, set_fragment_value};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::borrow::Cow;
use url::Url;

/// Read a hash param from a full URL.
pub fn get_url_value(url: &str, key: &str) -> Result<Option<String>, HashValueError> {
    let parsed = Url::parse(url)?;
    Ok(get_fragment_value(parsed.fragment().unwrap_or(""), key))
}

/// Set or delete a hash param in a full URL, returning the new URL.
///
/// A no-op mutation returns the input URL byte-for-byte.
pub fn set_url_value(url: &str, key: &str, value: Option<&str>) -> Result<String, HashValueError> {
    let mut parsed = Url::parse(url)?;
    let fragment = parsed.fragment().unwrap_or("").to_owned();
    match set_fragment_value(&fragment, key, value) {
        Cow::Borrowed(_) => Ok(url.to_owned()),
        Cow::Owned(next) => {
            parsed.set_fragment(Some(&next));
            Ok(parsed.as_str().to_owned())
        }
    }
}

/// Delete a hash param from a full URL.
pub fn delete_url_value(url: &str, key: &str) -> Result<String, HashValueError> {
    set_url_value(url, key, None)
}

/// Read a boolean hash param from a full URL.
pub fn get_url_boolean(url: &str, key: &str, default: bool) -> Result<bool, HashValueError> {
    Ok(decode_boolean(get_url_value(url, key)?.as_deref(), default))
}

/// Set a boolean hash param; removed when equal to the default.
pub fn set_url_boolean(
    url: &str,
    key: &str,
    value: bool,
    default: bool,
) -> Result<String, HashValueError> {
    set_url_value(url, key, encode_boolean(value, default))
}

/// Read an integer hash param from a full URL.
pub fn get_url_integer(url: &str, key: &str) -> Result<Option<i64>, HashValueError> {
    decode_integer(get_url_value(url, key)?.as_deref())
}

/// Set an integer hash param; `None` or zero removes the key.
pub fn set_url_integer(url: &str, key: &str, value: Option<i64>) -> Result<String, HashValueError> {
    let encoded = encode_integer(value);
    set_url_value(url, key, encoded.as_deref())
}

/// Read a float hash param from a full URL.
pub fn get_url_float(url: &str, key: &str) -> Result<Option<f64>, HashValueError> {
    decode_float(get_url_value(url, key)?.as_deref())
}

/// Set a float hash param; only `None` removes the key.
pub fn set_url_float(url: &str, key: &str, value: Option<f64>) -> Result<String, HashValueError> {
    let encoded = encode_float(value);
    set_url_value(url, key, encoded.as_deref())
}

/// Read base64-packed text from a full URL.
pub fn get_url_base64(url: &str, key: &str) -> Result<Option<String>, HashValueError> {
    match get_url_value(url, key)? {
        Some(stored) if !stored.is_empty() => string_from_base64(&stored).map(Some),
        _ => Ok(None),
    }
}

/// Store text base64-packed in a full URL; `None` deletes the key.
pub fn set_url_base64(url: &str, key: &str, value: Option<&str>) -> Result<String, HashValueError> {
    let encoded = value.map(string_to_base64);
    set_url_value(url, key, encoded.as_deref())
}

/// Read a structured value from a full URL.
pub fn get_url_json<T: DeserializeOwned>(url: &str, key: &str) -> Result<Option<T>, HashValueError> {
    match get_url_value(url, key)? {
        Some(stored) if !stored.is_empty() => blob_from_base64(&stored).map(Some),
        _ => Ok(None),
    }
}

/// Store a structured value as canonical JSON in a full URL; `None` deletes
/// the key.
pub fn set_url_json<T: Serialize>(
    url: &str,
    key: &str,
    value: Option<&T>,
) -> Result<String, HashValueError> {
    let encoded = match value {
        Some(value) => Some(blob_to_base64(value)?),
        None => None,
    };
    set_url_value(url, key, encoded.as_deref())
}
