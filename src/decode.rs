//! Storage column decoder for the bounded containers.
//!
//! The driver may hand back either text or bytes for the same column, so
//! both are accepted.  NULL leaves the destination untouched.  A `StringMap`
//! written with the binary flag carries a leading `0x01`, which is dropped
//! here; the reserved key itself is write-only and never comes back.

use serde::de::DeserializeOwned;

use crate::constants::BINARY_PREFIX;
use crate::errors::CodecError;
use crate::value::{ColumnValue, PropertyMap, StringList, StringMap};

/// Population of a container from a storage driver value.
pub trait FromColumn {
    /// Replace `self` with the decoded column.  NULL is a no-op.
    fn scan(&mut self, value: &ColumnValue) -> Result<(), CodecError>;
}

/// A JSON `null` body (written for nil containers) decodes to an empty one.
fn scan_json<T: DeserializeOwned + Default>(dest: &mut T, raw: &[u8]) -> Result<(), CodecError> {
    *dest = serde_json::from_slice::<Option<T>>(raw)?.unwrap_or_default();
    Ok(())
}

impl FromColumn for StringList {
    fn scan(&mut self, value: &ColumnValue) -> Result<(), CodecError> {
        match value.as_bytes() {
            None => Ok(()),
            Some(raw) => scan_json(self, raw),
        }
    }
}

impl FromColumn for StringMap {
    fn scan(&mut self, value: &ColumnValue) -> Result<(), CodecError> {
        match value.as_bytes() {
            None => Ok(()),
            Some(raw) => scan_json(self, raw.strip_prefix(&[BINARY_PREFIX]).unwrap_or(raw)),
        }
    }
}

impl FromColumn for PropertyMap {
    fn scan(&mut self, value: &ColumnValue) -> Result<(), CodecError> {
        match value.as_bytes() {
            None => Ok(()),
            Some(raw) => scan_json(self, raw),
        }
    }
}

/// Decode a column into a fresh default container.
pub fn from_column<T: FromColumn + Default>(value: &ColumnValue) -> Result<T, CodecError> {
    let mut dest = T::default();
    dest.scan(value)?;
    Ok(dest)
}

// ── Lenient wire helpers ─────────────────────────────────────
// Used where a caller would rather have an empty container than an error,
// e.g. optional request bodies.

/// Parse a JSON array of strings; malformed input yields an empty list.
pub fn string_list_from_json(data: &[u8]) -> StringList {
    serde_json::from_slice(data).unwrap_or_default()
}

/// Parse a JSON object of strings; malformed input yields an empty map.
pub fn string_map_from_json(data: &[u8]) -> StringMap {
    serde_json::from_slice(data).unwrap_or_default()
}

/// Parse a JSON object; malformed input yields an empty map.
pub fn property_map_from_json(data: &[u8]) -> PropertyMap {
    serde_json::from_slice(data).unwrap_or_default()
}
