//! URL fragment hash params.
//!
//! The fragment (everything after `#`) is treated as an opaque path segment
//! followed by an optional query-like tail:
//! `<path>?<key1>=<value1>&<key2>=<value2>`. This crate parses that shape,
//! mutates one key at a time, and re-serializes deterministically with keys
//! in lexicographic order, so rebuilding the same logical state always
//! produces byte-identical fragment text.
//!
//! # Example
//!
//! ```
//! use hash_query_fragment::{parse_fragment, set_fragment_value, get_fragment_value};
//!
//! let (path, params) = parse_fragment("view?a=1&b=2");
//! assert_eq!(path, "view");
//! assert_eq!(params["a"], "1");
//!
//! let next = set_fragment_value("view?b=2", "a", Some("1"));
//! assert_eq!(next, "view?a=1&b=2");
//!
//! assert_eq!(get_fragment_value("view?a=1&b=2", "b").as_deref(), Some("2"));
//! ```

mod percent;

pub use percent::{decode_value, encode_value};

use std::borrow::Cow;
use std::collections::BTreeMap;

/// Parse a fragment into its path segment and hash params.
///
/// Any number of leading `#` characters is stripped, so both bare fragments
/// and fragments with the marker still attached are accepted. Without a `?`
/// the whole remainder is the path segment and the map is empty.
///
/// The tail is split on `&` (empty segments are dropped) and each segment at
/// its first `=` (a segment without `=` becomes a key with an empty value).
/// Values are percent-decoded via [`decode_value`]; keys are taken as-is.
/// When a key repeats, the last occurrence wins.
///
/// # Example
///
/// ```
/// use hash_query_fragment::parse_fragment;
///
/// let (path, params) = parse_fragment("#foo?a=1&b=2");
/// assert_eq!(path, "foo");
/// assert_eq!(params["a"], "1");
/// assert_eq!(params["b"], "2");
///
/// let (path, params) = parse_fragment("just-a-path");
/// assert_eq!(path, "just-a-path");
/// assert!(params.is_empty());
/// ```
pub fn parse_fragment(fragment: &str) -> (&str, BTreeMap<String, String>) {
    let fragment = fragment.trim_start_matches('#');
    let Some((path, tail)) = fragment.split_once('?') else {
        return (fragment, BTreeMap::new());
    };
    let mut params = BTreeMap::new();
    for segment in tail.split('&') {
        if segment.is_empty() {
            continue;
        }
        match segment.split_once('=') {
            Some((key, value)) => params.insert(key.to_owned(), decode_value(value)),
            None => params.insert(segment.to_owned(), String::new()),
        };
    }
    (path, params)
}

/// Serialize a path segment and hash params back into fragment text.
///
/// Keys come out in lexicographic order (structural for a `BTreeMap`), values
/// percent-encoded via [`encode_value`], keys emitted as-is. The `?` is
/// always present, even for an empty map.
pub fn serialize_fragment(path: &str, params: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    out.push_str(path);
    out.push('?');
    let mut first = true;
    for (key, value) in params {
        if !first {
            out.push('&');
        }
        first = false;
        out.push_str(key);
        out.push('=');
        out.push_str(&encode_value(value));
    }
    out
}

/// Set, overwrite, or delete a single hash param in a fragment.
///
/// `None` deletes the key; `Some` inserts or overwrites it. When the
/// mutation would not change the map (deleting an absent key, or writing the
/// value already stored) the original fragment is returned as
/// `Cow::Borrowed`, so callers can skip the write-back entirely. Otherwise
/// the fragment is re-serialized via [`serialize_fragment`].
///
/// Deleting the last remaining key leaves the bare `path?` in place; the `?`
/// is not trimmed.
///
/// # Example
///
/// ```
/// use hash_query_fragment::set_fragment_value;
/// use std::borrow::Cow;
///
/// assert_eq!(set_fragment_value("foo?b=2", "a", Some("1")), "foo?a=1&b=2");
/// assert_eq!(set_fragment_value("foo?a=1&b=2", "a", None), "foo?b=2");
///
/// // No-op: returns the input untouched.
/// let same = set_fragment_value("foo?a=1", "a", Some("1"));
/// assert!(matches!(same, Cow::Borrowed(_)));
/// ```
pub fn set_fragment_value<'a>(fragment: &'a str, key: &str, value: Option<&str>) -> Cow<'a, str> {
    let (path, mut params) = parse_fragment(fragment);
    let changed = match value {
        None => params.remove(key).is_some(),
        Some(value) => {
            if params.get(key).map(String::as_str) == Some(value) {
                false
            } else {
                params.insert(key.to_owned(), value.to_owned());
                true
            }
        }
    };
    if !changed {
        return Cow::Borrowed(fragment);
    }
    Cow::Owned(serialize_fragment(path, &params))
}

/// Read a single hash param from a fragment.
///
/// Returns `None` when the fragment has no tail or the key is absent.
pub fn get_fragment_value(fragment: &str, key: &str) -> Option<String> {
    let (_, mut params) = parse_fragment(fragment);
    params.remove(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_path_and_params() {
        let (path, params) = parse_fragment("foo?a=1&b=2");
        assert_eq!(path, "foo");
        assert_eq!(params.len(), 2);
        assert_eq!(params["a"], "1");
        assert_eq!(params["b"], "2");
    }

    #[test]
    fn parse_strips_leading_hash_marks() {
        let (path, params) = parse_fragment("###foo?a=1");
        assert_eq!(path, "foo");
        assert_eq!(params["a"], "1");
    }

    #[test]
    fn parse_without_query_returns_path_only() {
        let (path, params) = parse_fragment("foo/bar");
        assert_eq!(path, "foo/bar");
        assert!(params.is_empty());
    }

    #[test]
    fn parse_empty_fragment() {
        let (path, params) = parse_fragment("");
        assert_eq!(path, "");
        assert!(params.is_empty());
    }

    #[test]
    fn parse_drops_empty_segments() {
        let (_, params) = parse_fragment("foo?a=1&&b=2&");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn parse_segment_without_equals_is_empty_value() {
        let (_, params) = parse_fragment("foo?flag&a=1");
        assert_eq!(params["flag"], "");
        assert_eq!(params["a"], "1");
    }

    #[test]
    fn parse_splits_at_first_equals() {
        let (_, params) = parse_fragment("foo?a=b=c");
        assert_eq!(params["a"], "b=c");
    }

    #[test]
    fn parse_splits_at_first_question_mark() {
        let (path, params) = parse_fragment("foo?a=b?c");
        assert_eq!(path, "foo");
        assert_eq!(params["a"], "b?c");
    }

    #[test]
    fn parse_last_duplicate_key_wins() {
        let (_, params) = parse_fragment("foo?a=1&a=2");
        assert_eq!(params["a"], "2");
    }

    #[test]
    fn parse_decodes_values_not_keys() {
        let (_, params) = parse_fragment("foo?k=%E2%9C%93");
        assert_eq!(params["k"], "✓");
    }

    #[test]
    fn parse_keeps_undecodable_value_escaped() {
        let (_, params) = parse_fragment("foo?k=%FF");
        assert_eq!(params["k"], "%FF");
    }

    #[test]
    fn serialize_sorts_keys() {
        let mut params = BTreeMap::new();
        params.insert("b".to_owned(), "2".to_owned());
        params.insert("a".to_owned(), "1".to_owned());
        assert_eq!(serialize_fragment("foo", &params), "foo?a=1&b=2");
    }

    #[test]
    fn serialize_empty_map_keeps_question_mark() {
        assert_eq!(serialize_fragment("foo", &BTreeMap::new()), "foo?");
    }

    #[test]
    fn serialize_encodes_values() {
        let mut params = BTreeMap::new();
        params.insert("k".to_owned(), "a&b=c".to_owned());
        assert_eq!(serialize_fragment("", &params), "?k=a%26b%3Dc");
    }

    #[test]
    fn set_inserts_in_sorted_position() {
        assert_eq!(set_fragment_value("foo?b=2", "a", Some("1")), "foo?a=1&b=2");
    }

    #[test]
    fn set_overwrites_existing() {
        assert_eq!(set_fragment_value("foo?a=1&b=2", "a", Some("3")), "foo?a=3&b=2");
    }

    #[test]
    fn set_none_deletes() {
        assert_eq!(set_fragment_value("foo?a=1&b=2", "a", None), "foo?b=2");
    }

    #[test]
    fn delete_last_key_keeps_bare_question_mark() {
        assert_eq!(set_fragment_value("foo?a=1", "a", None), "foo?");
    }

    #[test]
    fn set_on_fragment_without_query() {
        assert_eq!(set_fragment_value("foo", "a", Some("1")), "foo?a=1");
    }

    #[test]
    fn noop_same_value_returns_borrowed() {
        let result = set_fragment_value("foo?a=1&b=2", "a", Some("1"));
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "foo?a=1&b=2");
    }

    #[test]
    fn noop_delete_absent_key_returns_borrowed() {
        let result = set_fragment_value("foo?a=1", "zzz", None);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "foo?a=1");
    }

    #[test]
    fn set_is_idempotent() {
        let once = set_fragment_value("foo?b=2", "a", Some("1"));
        let twice = set_fragment_value(&once, "a", Some("1"));
        assert_eq!(once, twice);
    }

    #[test]
    fn set_preserves_unrelated_keys_and_path() {
        let next = set_fragment_value("some/path?a=1&z=26", "m", Some("13"));
        assert_eq!(next, "some/path?a=1&m=13&z=26");
        assert_eq!(get_fragment_value(&next, "a").as_deref(), Some("1"));
        assert_eq!(get_fragment_value(&next, "z").as_deref(), Some("26"));
    }

    #[test]
    fn set_reserved_characters_roundtrip() {
        let next = set_fragment_value("foo", "k", Some("a=1&b=2?#"));
        assert_eq!(get_fragment_value(&next, "k").as_deref(), Some("a=1&b=2?#"));
    }

    #[test]
    fn get_absent_key_is_none() {
        assert_eq!(get_fragment_value("foo?a=1", "b"), None);
        assert_eq!(get_fragment_value("foo", "a"), None);
    }
}
