//! hash-query — typed hash params in the URL fragment.
//!
//! Builds typed value adapters on top of [`hash_query_fragment`]: booleans
//! stored only when they differ from a default, integers and floats as
//! decimal strings, arbitrary text as percent-encoded base64, and structured
//! values as canonical (sorted-key) JSON wrapped in base64. The
//! [`url_params`] module applies the same operations to a full URL's
//! fragment, and [`location`] is the injectable store boundary with
//! navigable and silent commit modes.
//!
//! # Example
//!
//! ```
//! use hash_query::{get_json_value, set_json_value};
//! use serde_json::json;
//!
//! let fragment = set_json_value("view", "state", Some(&json!({"b": 1, "a": 2}))).unwrap();
//! let state: Option<serde_json::Value> = get_json_value(&fragment, "state").unwrap();
//! assert_eq!(state, Some(json!({"a": 2, "b": 1})));
//! ```

pub mod base64_string;
pub mod boolean;
pub mod json_blob;
pub mod json_stable;
pub mod location;
pub mod numeric;
pub mod url_params;

// Re-export the fragment codec so most callers need only this crate.
pub use hash_query_fragment::{
    decode_value, encode_value, get_fragment_value, parse_fragment, serialize_fragment,
    set_fragment_value,
};

pub use base64_string::{get_base64_value, set_base64_value, string_from_base64, string_to_base64};
pub use boolean::{decode_boolean, encode_boolean, get_boolean_value, set_boolean_value};
pub use json_blob::{blob_from_base64, blob_to_base64, get_json_value, set_json_value};
pub use location::{
    delete_hash_param, get_hash_param, set_hash_param, CommitMode, LocationStore, MemoryLocation,
};
pub use numeric::{
    decode_float, decode_integer, encode_float, encode_integer, get_float_value,
    get_integer_value, set_float_value, set_integer_value,
};
pub use url_params::{delete_url_value, get_url_value, set_url_value};

use thiserror::Error;

/// Error decoding a stored hash param value.
///
/// Absent keys are never errors; these only surface when a stored value is
/// present but corrupt, or when a whole-URL operation receives an
/// unparseable URL.
#[derive(Debug, Error)]
pub enum HashValueError {
    #[error("INVALID_BASE64")]
    Base64(#[from] base64::DecodeError),
    #[error("INVALID_UTF8")]
    Utf8,
    #[error("INVALID_JSON")]
    Json(#[from] serde_json::Error),
    #[error("INVALID_INTEGER")]
    Integer(#[from] std::num::ParseIntError),
    #[error("INVALID_FLOAT")]
    Float(#[from] std::num::ParseFloatError),
    #[error("INVALID_URL")]
    Url(#[from] url::ParseError),
}
