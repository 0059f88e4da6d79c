//! The location store boundary.
//!
//! The codec never touches a live location itself; it computes the next
//! fragment and hands it to an injected [`LocationStore`]. A commit is
//! either navigable (a new history entry the back button can reach) or
//! silent (the current entry replaced in place). Every commit counts as one
//! hash-change notification; the silent path corresponds to a manually
//! dispatched event in a browser host.

use crate::base64_string::{string_from_base64, string_to_base64};
use crate::boolean::{decode_boolean, encode_boolean};
use crate::json_blob::{blob_from_base64, blob_to_base64};
use crate::numeric::{decode_float, decode_integer, encode_float, encode_integer};
use crate::HashValueError;
use hash_query_fragment::{get_fragment_value, set_fragment_value};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::borrow::Cow;

/// How a new fragment is committed to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitMode {
    /// Replace the current history entry in place; the host dispatches the
    /// change notification itself.
    #[default]
    Silent,
    /// Push a new history entry; affects the back button and lets the host
    /// fire its native change event.
    Navigate,
}

/// A mutable holder of the current fragment.
///
/// `read` returns the current fragment without the leading `#`; `commit`
/// replaces it wholesale.
pub trait LocationStore {
    fn read(&self) -> String;
    fn commit(&mut self, fragment: &str, mode: CommitMode);
}

/// Read a hash param from the store.
pub fn get_hash_param(store: &impl LocationStore, key: &str) -> Option<String> {
    get_fragment_value(&store.read(), key)
}

/// Set or delete a hash param in the store.
///
/// The commit is skipped entirely when the mutation is a no-op, so an
/// unchanged fragment never produces a spurious change notification.
pub fn set_hash_param(
    store: &mut impl LocationStore,
    key: &str,
    value: Option<&str>,
    mode: CommitMode,
) {
    let current = store.read();
    if let Cow::Owned(next) = set_fragment_value(&current, key, value) {
        store.commit(&next, mode);
    }
}

/// Delete a hash param from the store.
pub fn delete_hash_param(store: &mut impl LocationStore, key: &str, mode: CommitMode) {
    set_hash_param(store, key, None, mode);
}

/// Read a boolean hash param, falling back to the default when absent.
pub fn get_hash_param_boolean(store: &impl LocationStore, key: &str, default: bool) -> bool {
    decode_boolean(get_hash_param(store, key).as_deref(), default)
}

/// Set a boolean hash param; removed when equal to the default.
pub fn set_hash_param_boolean(
    store: &mut impl LocationStore,
    key: &str,
    value: bool,
    default: bool,
    mode: CommitMode,
) {
    set_hash_param(store, key, encode_boolean(value, default), mode);
}

/// Read an integer hash param.
pub fn get_hash_param_integer(
    store: &impl LocationStore,
    key: &str,
) -> Result<Option<i64>, HashValueError> {
    decode_integer(get_hash_param(store, key).as_deref())
}

/// Set an integer hash param; `None` or zero removes the key.
pub fn set_hash_param_integer(
    store: &mut impl LocationStore,
    key: &str,
    value: Option<i64>,
    mode: CommitMode,
) {
    let encoded = encode_integer(value);
    set_hash_param(store, key, encoded.as_deref(), mode);
}

/// Read a float hash param.
pub fn get_hash_param_float(
    store: &impl LocationStore,
    key: &str,
) -> Result<Option<f64>, HashValueError> {
    decode_float(get_hash_param(store, key).as_deref())
}

/// Set a float hash param; only `None` removes the key.
pub fn set_hash_param_float(
    store: &mut impl LocationStore,
    key: &str,
    value: Option<f64>,
    mode: CommitMode,
) {
    let encoded = encode_float(value);
    set_hash_param(store, key, encoded.as_deref(), mode);
}

/// Read base64-packed text from the store.
pub fn get_hash_param_base64(
    store: &impl LocationStore,
    key: &str,
) -> Result<Option<String>, HashValueError> {
    match get_hash_param(store, key) {
        Some(stored) if !stored.is_empty() => string_from_base64(&stored).map(Some),
        _ => Ok(None),
    }
}

/// Store text base64-packed; `None` deletes the key.
pub fn set_hash_param_base64(
    store: &mut impl LocationStore,
    key: &str,
    value: Option<&str>,
    mode: CommitMode,
) {
    let encoded = value.map(string_to_base64);
    set_hash_param(store, key, encoded.as_deref(), mode);
}

/// Read a structured value from the store.
pub fn get_hash_param_json<T: DeserializeOwned>(
    store: &impl LocationStore,
    key: &str,
) -> Result<Option<T>, HashValueError> {
    match get_hash_param(store, key) {
        Some(stored) if !stored.is_empty() => blob_from_base64(&stored).map(Some),
        _ => Ok(None),
    }
}

/// Store a structured value as canonical JSON; `None` deletes the key.
pub fn set_hash_param_json<T: Serialize>(
    store: &mut impl LocationStore,
    key: &str,
    value: Option<&T>,
    mode: CommitMode,
) -> Result<(), HashValueError> {
    let encoded = match value {
        Some(value) => Some(blob_to_base64(value)?),
        None => None,
    };
    set_hash_param(store, key, encoded.as_deref(), mode);
    Ok(())
}

/// An in-memory location store.
///
/// `Navigate` commits push onto a history stack; `Silent` commits replace
/// the top entry. The change counter increments on every commit, matching
/// the contract that a committed mutation produces exactly one hash-change
/// notification.
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    history: Vec<String>,
    changes: usize,
}

impl MemoryLocation {
    /// Create a store holding the given initial fragment.
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            history: vec![fragment.into()],
            changes: 0,
        }
    }

    /// The current fragment.
    pub fn fragment(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or("")
    }

    /// Number of history entries.
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    /// Number of hash-change notifications fired so far.
    pub fn changes(&self) -> usize {
        self.changes
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("")
    }
}

impl LocationStore for MemoryLocation {
    fn read(&self) -> String {
        self.fragment().to_owned()
    }

    fn commit(&mut self, fragment: &str, mode: CommitMode) {
        match mode {
            CommitMode::Navigate => self.history.push(fragment.to_owned()),
            CommitMode::Silent => match self.history.last_mut() {
                Some(top) => *top = fragment.to_owned(),
                None => self.history.push(fragment.to_owned()),
            },
        }
        self.changes += 1;
    }
}
