//! Storage column encoder for the bounded containers.
//!
//! Encoding per container:
//!   StringList  : JSON array as text; size = sum of element bytes (pre-JSON)
//!   StringMap   : JSON object; size = sum of key+value bytes (pre-JSON),
//!                 reserved key excluded.  Column kind depends on the flag:
//!                   Binary -> Bytes(0x01 || json)
//!                   Plain  -> Bytes(json)
//!                   Absent -> Text(json)
//!   PropertyMap : JSON object as text; size = encoded JSON length
//!
//! The pre- vs post-encoding asymmetry is part of the storage format and
//! must not be unified.  Non-UTF-8 content is unsupported.

use std::collections::HashMap;

use tracing::warn;

use crate::constants::*;
use crate::errors::CodecError;
use crate::value::{BinaryParams, ColumnValue, PropertyMap, StringList, StringMap};

/// Conversion into a value acceptable to the storage driver.
pub trait ToColumn {
    fn to_column(&self) -> Result<ColumnValue, CodecError>;
}

/// Accumulate lengths and bail as soon as the running total is over budget.
fn ensure_within_limit<I>(sizes: I, kind: &'static str) -> Result<(), CodecError>
where
    I: IntoIterator<Item = usize>,
{
    let mut total = 0usize;
    for sz in sizes {
        total += sz;
        if total > MAX_PROP_SIZE_BYTES {
            warn!(kind, limit = MAX_PROP_SIZE_BYTES, "container rejected: over size limit");
            return Err(CodecError::size_exceeded());
        }
    }
    Ok(())
}

impl ToColumn for StringList {
    fn to_column(&self) -> Result<ColumnValue, CodecError> {
        ensure_within_limit(self.iter().map(String::len), "string_list")?;
        let json = serde_json::to_string(&self.0)?;
        Ok(ColumnValue::Text(json))
    }
}

impl StringMap {
    /// Encode with an explicit binary flag.
    ///
    /// The reserved key is skipped if still present, so callers may pass
    /// either a stripped map (after `take_binary_params`) or the original.
    pub fn encode_column(&self, params: BinaryParams) -> Result<ColumnValue, CodecError> {
        ensure_within_limit(
            self.persisted_entries().map(|(k, v)| k.len() + v.len()),
            "string_map",
        )?;

        let entries: HashMap<&str, &str> = self
            .persisted_entries()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let json = serde_json::to_string(&entries)?;

        Ok(match params {
            BinaryParams::Binary => {
                let mut buf = Vec::with_capacity(1 + json.len());
                buf.push(BINARY_PREFIX);
                buf.extend_from_slice(json.as_bytes());
                ColumnValue::Bytes(buf)
            }
            BinaryParams::Plain => ColumnValue::Bytes(json.into_bytes()),
            BinaryParams::Absent => ColumnValue::Text(json),
        })
    }
}

impl ToColumn for StringMap {
    /// Reads the reserved key to pick the encoding; the map is not modified
    /// and the key is never written.
    fn to_column(&self) -> Result<ColumnValue, CodecError> {
        self.encode_column(self.binary_params())
    }
}

impl ToColumn for PropertyMap {
    fn to_column(&self) -> Result<ColumnValue, CodecError> {
        let json = serde_json::to_string(&self.0)?;
        if json.len() > MAX_PROP_SIZE_BYTES {
            warn!(
                kind = "property_map",
                size = json.len(),
                limit = MAX_PROP_SIZE_BYTES,
                "container rejected: over size limit"
            );
            return Err(CodecError::size_exceeded());
        }
        Ok(ColumnValue::Text(json))
    }
}
