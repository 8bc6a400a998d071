//! Name validators for slugs, handles, and channel identifiers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::CHANNEL_NAME_MIN_LENGTH;

static VALID_ALPHA_NUM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+([a-z\-0-9]+|(__)?)[a-z0-9]+$").expect("valid regex")
});
static VALID_ALPHA_NUM_HYPHEN_UNDERSCORE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+([a-z\-_0-9]+|(__)?)[a-z0-9]+$").expect("valid regex")
});
static VALID_SIMPLE_ALPHA_NUM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+([a-z\-_0-9]+|(__)?)[a-z0-9]*$").expect("valid regex")
});
static VALID_SIMPLE_ALPHA_NUM_HYPHEN_UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\-_]+$").expect("valid regex"));
static VALID_SIMPLE_ALPHA_NUM_HYPHEN_UNDERSCORE_PLUS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9+_-]+$").expect("valid regex"));

/// Lowercase letters, digits and inner hyphens (or one inner `__`), at
/// least two characters, alphanumeric at both ends.
pub fn is_valid_alpha_num(s: &str) -> bool {
    VALID_ALPHA_NUM.is_match(s)
}

/// With `with_format`, like `is_valid_alpha_num` but inner underscores are
/// allowed too.  Without it, any mix of ASCII letters, digits, `-` and `_`.
pub fn is_valid_alpha_num_hyphen_underscore(s: &str, with_format: bool) -> bool {
    if with_format {
        VALID_ALPHA_NUM_HYPHEN_UNDERSCORE.is_match(s)
    } else {
        VALID_SIMPLE_ALPHA_NUM_HYPHEN_UNDERSCORE.is_match(s)
    }
}

/// ASCII letters, digits, `+`, `_` and `-`.
pub fn is_valid_alpha_num_hyphen_underscore_plus(s: &str) -> bool {
    VALID_SIMPLE_ALPHA_NUM_HYPHEN_UNDERSCORE_PLUS.is_match(s)
}

/// Channel names: lowercase, start alphanumeric, may end in `-` or `_`.
pub fn is_valid_channel_identifier(s: &str) -> bool {
    VALID_SIMPLE_ALPHA_NUM.is_match(s) && s.len() >= CHANNEL_NAME_MIN_LENGTH
}
