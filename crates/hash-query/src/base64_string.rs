//! Base64 packing of arbitrary text for fragment values.
//!
//! Text is made fragment-safe in two steps: percent-encode everything
//! outside the unreserved component set, then base64-encode the resulting
//! ASCII. Decoding reverses the two steps. The intermediate percent pass is
//! what lets arbitrary Unicode survive the byte-oriented base64 layer.

use crate::HashValueError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hash_query_fragment::{get_fragment_value, set_fragment_value};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;

/// Component-style encode set: everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode arbitrary text into a base64 fragment value.
///
/// # Example
///
/// ```
/// use hash_query::string_to_base64;
///
/// assert_eq!(string_to_base64("hello"), "aGVsbG8=");
/// assert_eq!(string_to_base64("hello world"), "aGVsbG8lMjB3b3JsZA==");
/// ```
pub fn string_to_base64(value: &str) -> String {
    let escaped = utf8_percent_encode(value, COMPONENT).to_string();
    STANDARD.encode(escaped)
}

/// Decode a base64 fragment value back into text.
///
/// # Errors
///
/// Fails with an explicit error when the stored value is not valid base64,
/// or the unpacked text is not valid percent-encoded UTF-8.
pub fn string_from_base64(value: &str) -> Result<String, HashValueError> {
    let bytes = STANDARD.decode(value)?;
    let escaped = String::from_utf8(bytes).map_err(|_| HashValueError::Utf8)?;
    percent_decode_str(&escaped)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| HashValueError::Utf8)
}

/// Store text under `key` base64-packed; `None` deletes the key.
pub fn set_base64_value<'a>(
    fragment: &'a str,
    key: &str,
    value: Option<&str>,
) -> Cow<'a, str> {
    let encoded = value.map(string_to_base64);
    set_fragment_value(fragment, key, encoded.as_deref())
}

/// Read text stored base64-packed under `key`.
///
/// Absent key and empty stored value are both `Ok(None)`.
pub fn get_base64_value(fragment: &str, key: &str) -> Result<Option<String>, HashValueError> {
    match get_fragment_value(fragment, key) {
        Some(stored) if !stored.is_empty() => string_from_base64(&stored).map(Some),
        _ => Ok(None),
    }
}
