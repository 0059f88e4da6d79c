//! Boolean hash params with toggle-against-default storage.
//!
//! The default never appears in the URL: a boolean is written only when it
//! differs from the caller's default, which keeps shareable links minimal.

use hash_query_fragment::{get_fragment_value, set_fragment_value};
use std::borrow::Cow;

/// Encode a boolean against its default.
///
/// Equal to the default encodes as absent (`None`); otherwise the literal
/// `"true"` or `"false"`.
pub fn encode_boolean(value: bool, default: bool) -> Option<&'static str> {
    if value == default {
        None
    } else if value {
        Some("true")
    } else {
        Some("false")
    }
}

/// Decode a stored boolean.
///
/// Present and exactly `"true"` is `true`, any other stored text is
/// `false`, absent resolves to the default.
pub fn decode_boolean(stored: Option<&str>, default: bool) -> bool {
    match stored {
        Some(s) => s == "true",
        None => default,
    }
}

/// Set `key` to a boolean, removing it when the value equals the default.
pub fn set_boolean_value<'a>(
    fragment: &'a str,
    key: &str,
    value: bool,
    default: bool,
) -> Cow<'a, str> {
    set_fragment_value(fragment, key, encode_boolean(value, default))
}

/// Read `key` as a boolean, falling back to the default when absent.
pub fn get_boolean_value(fragment: &str, key: &str, default: bool) -> bool {
    decode_boolean(get_fragment_value(fragment, key).as_deref(), default)
}
