//! Normative limits, reserved keys, and the identifier alphabet.
//!
//! Everything here is part of the storage or wire contract.  Changing a
//! value changes what older rows and peers accept, so treat these as frozen.

// ── Container limits ─────────────────────────────────────────

/// Maximum serialized size of a bounded container (1 MiB).
///
/// `StringList` and `StringMap` measure raw key/value bytes before JSON
/// encoding; `PropertyMap` measures the encoded JSON.
pub const MAX_PROP_SIZE_BYTES: usize = 1_048_576;

/// Reserved `StringMap` key selecting the binary column encoding.
/// Never persisted as an entry.
pub const BINARY_PARAM_KEY: &str = "MM_BINARY_PARAMETERS";

/// Marker byte prepended to a `StringMap` column when the binary flag is set.
pub const BINARY_PREFIX: u8 = 0x01;

// ── Error rendering ──────────────────────────────────────────

/// Message value meaning "no user-facing text"; omitted from `Display`.
pub const NO_TRANSLATION: &str = "<untranslated>";

/// `AppError` display strings longer than this (in bytes) get cut and
/// suffixed with `...`.
pub const MAX_ERROR_LENGTH: usize = 1024;

// ── Tokenizer ────────────────────────────────────────────────

/// Ceiling for the accumulated hashtag string.
pub const MAX_HASHTAG_LENGTH: usize = 1000;

// ── Identifiers ──────────────────────────────────────────────

/// Custom base-32 alphabet: lowercase letters and digits, no padding.
pub const ID_ALPHABET: &[u8; 32] = b"ybndrfg8ejkmcpqxot1uwisza345h769";

/// Length of an encoded 128-bit identifier.
pub const ID_LENGTH: usize = 26;

/// Shortest accepted channel identifier.
pub const CHANNEL_NAME_MIN_LENGTH: usize = 1;

// ── Environment ──────────────────────────────────────────────

/// Set (non-empty) on cloud installations.
pub const CLOUD_INSTALLATION_ENV: &str = "MM_CLOUD_INSTALLATION_ID";
