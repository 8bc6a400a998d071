//! Codec error type and the HTTP-style status codes carried by `AppError`.
//!
//! `CodecError` is what the storage boundary returns.  Anything that has to
//! leave the process gets converted into an `AppError` first (see the `From`
//! impl in `app_error.rs`).

use thiserror::Error;

use crate::constants::MAX_PROP_SIZE_BYTES;

// ── Status codes ─────────────────────────────────────────────

pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_PAYLOAD_TOO_LARGE: u16 = 413;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

// ── Error ids ────────────────────────────────────────────────
// These double as localization keys, so they follow the catalog naming.

pub const ID_DECODE_JSON: &str = "model.utils.decode_json.app_error";
pub const ID_PROP_SIZE: &str = "model.utils.prop_size.app_error";

/// Failure at the storage column boundary.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The container is over `MAX_PROP_SIZE_BYTES`.  Never truncated.
    #[error("max prop size of {limit} exceeded")]
    SizeExceeded { limit: usize },

    /// The column held bytes that are not the expected JSON shape.
    #[error("malformed column value: {0}")]
    Format(#[from] serde_json::Error),
}

impl CodecError {
    pub(crate) fn size_exceeded() -> Self {
        CodecError::SizeExceeded {
            limit: MAX_PROP_SIZE_BYTES,
        }
    }

    /// Status code used when this error is surfaced as an `AppError`.
    pub fn status_code(&self) -> u16 {
        match self {
            CodecError::SizeExceeded { .. } => STATUS_PAYLOAD_TOO_LARGE,
            CodecError::Format(_) => STATUS_BAD_REQUEST,
        }
    }

    /// Localization id used when this error is surfaced as an `AppError`.
    pub fn error_id(&self) -> &'static str {
        match self {
            CodecError::SizeExceeded { .. } => ID_PROP_SIZE,
            CodecError::Format(_) => ID_DECODE_JSON,
        }
    }
}
