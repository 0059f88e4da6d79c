//! Integer and float hash params stored as decimal strings.
//!
//! Both adapters are derived directly from the string primitive rather than
//! from each other, so neither inherits the other's absence rules. Integers
//! treat zero as absent; floats store `0.0`.

use crate::HashValueError;
use hash_query_fragment::{get_fragment_value, set_fragment_value};
use std::borrow::Cow;

/// Encode an integer for storage. `None` and `Some(0)` encode as absent.
pub fn encode_integer(value: Option<i64>) -> Option<String> {
    value.filter(|v| *v != 0).map(|v| v.to_string())
}

/// Decode a stored integer.
///
/// Absent is `Ok(None)`; a stored string that is not a whole decimal number
/// is an explicit error.
pub fn decode_integer(stored: Option<&str>) -> Result<Option<i64>, HashValueError> {
    match stored {
        Some(s) => Ok(Some(s.parse::<i64>()?)),
        None => Ok(None),
    }
}

/// Encode a float for storage. Only `None` encodes as absent.
pub fn encode_float(value: Option<f64>) -> Option<String> {
    value.map(|v| v.to_string())
}

/// Decode a stored float.
pub fn decode_float(stored: Option<&str>) -> Result<Option<f64>, HashValueError> {
    match stored {
        Some(s) => Ok(Some(s.parse::<f64>()?)),
        None => Ok(None),
    }
}

/// Set `key` to an integer; `None` or zero removes the key.
pub fn set_integer_value<'a>(fragment: &'a str, key: &str, value: Option<i64>) -> Cow<'a, str> {
    let encoded = encode_integer(value);
    set_fragment_value(fragment, key, encoded.as_deref())
}

/// Read `key` as an integer.
pub fn get_integer_value(fragment: &str, key: &str) -> Result<Option<i64>, HashValueError> {
    decode_integer(get_fragment_value(fragment, key).as_deref())
}

/// Set `key` to a float; only `None` removes the key.
pub fn set_float_value<'a>(fragment: &'a str, key: &str, value: Option<f64>) -> Cow<'a, str> {
    let encoded = encode_float(value);
    set_fragment_value(fragment, key, encoded.as_deref())
}

/// Read `key` as a float.
pub fn get_float_value(fragment: &str, key: &str) -> Result<Option<f64>, HashValueError> {
    decode_float(get_fragment_value(fragment, key).as_deref())
}
