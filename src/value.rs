//! Bounded container types and the storage column value they encode to.
//!
//! The three containers are thin newtypes over std collections.  They
//! serialize as a plain JSON array/object (no envelope), so the wire form
//! is whatever `serde_json` produces for the inner collection.  The column
//! form is handled by `encode.rs` and `decode.rs`.

use std::collections::HashMap;
use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::constants::BINARY_PARAM_KEY;

/// A value as handed to / received from a relational storage driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue {
    /// SQL NULL.  Decodes to an unchanged destination.
    Null,
    /// Text column value.
    Text(String),
    /// Binary column value.
    Bytes(Vec<u8>),
}

impl ColumnValue {
    /// Raw bytes of the value, `None` for NULL.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ColumnValue::Null => None,
            ColumnValue::Text(s) => Some(s.as_bytes()),
            ColumnValue::Bytes(b) => Some(b),
        }
    }
}

impl fmt::Display for ColumnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnValue::Null => write!(f, "NULL"),
            ColumnValue::Text(s) => write!(f, "<{} text bytes>", s.len()),
            ColumnValue::Bytes(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

// ── StringList ───────────────────────────────────────────────

/// Ordered list of strings.  Duplicates and order survive a round-trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringList(pub Vec<String>);

impl StringList {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if any element equals `input`.
    pub fn contains(&self, input: &str) -> bool {
        self.0.iter().any(|s| s == input)
    }

    /// A copy with the first occurrence of `input` removed.  Returns an
    /// identical copy when `input` is not present.
    pub fn without(&self, input: &str) -> StringList {
        match self.0.iter().position(|s| s == input) {
            Some(idx) => {
                let mut ret = Vec::with_capacity(self.0.len() - 1);
                ret.extend_from_slice(&self.0[..idx]);
                ret.extend_from_slice(&self.0[idx + 1..]);
                StringList(ret)
            }
            None => self.clone(),
        }
    }

    /// Sum of element byte lengths, the quantity checked against the limit.
    pub fn content_size(&self) -> usize {
        self.0.iter().map(String::len).sum()
    }
}

impl Deref for StringList {
    type Target = Vec<String>;
    fn deref(&self) -> &Vec<String> {
        &self.0
    }
}

impl DerefMut for StringList {
    fn deref_mut(&mut self) -> &mut Vec<String> {
        &mut self.0
    }
}

impl From<Vec<String>> for StringList {
    fn from(v: Vec<String>) -> Self {
        StringList(v)
    }
}

impl<S: Into<String>> FromIterator<S> for StringList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        StringList(iter.into_iter().map(Into::into).collect())
    }
}

// ── StringMap ────────────────────────────────────────────────

/// How a `StringMap` column is written, selected by the reserved
/// `BINARY_PARAM_KEY` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinaryParams {
    /// Key absent (or an unrecognized value): JSON text column.
    #[default]
    Absent,
    /// `"true"`: `0x01` followed by the JSON bytes.
    Binary,
    /// `"false"`: JSON bytes, no prefix.
    Plain,
}

impl BinaryParams {
    fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("true") => BinaryParams::Binary,
            Some("false") => BinaryParams::Plain,
            _ => BinaryParams::Absent,
        }
    }
}

/// String-to-string mapping.  Insertion order is not significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringMap(pub HashMap<String, String>);

impl StringMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column encoding selected by the reserved key, without touching the map.
    pub fn binary_params(&self) -> BinaryParams {
        BinaryParams::from_flag(self.0.get(BINARY_PARAM_KEY).map(String::as_str))
    }

    /// Removes the reserved key and returns the encoding it selected.
    ///
    /// After this call the map holds only persistable entries.
    pub fn take_binary_params(&mut self) -> BinaryParams {
        let flag = self.0.remove(BINARY_PARAM_KEY);
        BinaryParams::from_flag(flag.as_deref())
    }

    /// Key+value byte total, excluding the reserved key.
    pub fn content_size(&self) -> usize {
        self.persisted_entries().map(|(k, v)| k.len() + v.len()).sum()
    }

    pub(crate) fn persisted_entries(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter().filter(|(k, _)| k.as_str() != BINARY_PARAM_KEY)
    }
}

impl Deref for StringMap {
    type Target = HashMap<String, String>;
    fn deref(&self) -> &HashMap<String, String> {
        &self.0
    }
}

impl DerefMut for StringMap {
    fn deref_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.0
    }
}

impl From<HashMap<String, String>> for StringMap {
    fn from(m: HashMap<String, String>) -> Self {
        StringMap(m)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StringMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        StringMap(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ── PropertyMap ──────────────────────────────────────────────

/// String-to-JSON-value mapping for heterogeneous properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap(pub HashMap<String, serde_json::Value>);

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Deref for PropertyMap {
    type Target = HashMap<String, serde_json::Value>;
    fn deref(&self) -> &HashMap<String, serde_json::Value> {
        &self.0
    }
}

impl DerefMut for PropertyMap {
    fn deref_mut(&mut self) -> &mut HashMap<String, serde_json::Value> {
        &mut self.0
    }
}

impl From<HashMap<String, serde_json::Value>> for PropertyMap {
    fn from(m: HashMap<String, serde_json::Value>) -> Self {
        PropertyMap(m)
    }
}

// ── Helpers ──────────────────────────────────────────────────

/// Sorts `input` and drops adjacent duplicates.
pub fn remove_duplicate_strings(mut input: Vec<String>) -> Vec<String> {
    input.sort();
    input.dedup();
    input
}
