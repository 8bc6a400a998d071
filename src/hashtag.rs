//! Hashtag tokenizer.
//!
//! Splits free text into `(hashtags, plain)`, both space-joined and trimmed.
//! Per word: strip leading punctuation (but not `#`), strip trailing
//! punctuation, collapse a leading `##...` to `#`, then classify.
//!
//! A hashtag is `#`, a letter, any run of letters/digits/`-`/`_`/`.`, and a
//! final letter or digit.  `#a` therefore does not qualify.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::MAX_HASHTAG_LENGTH;
use crate::text::truncate_bytes;

static VALID_HASHTAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#\pL[\pL0-9\-_.]*[\pL0-9]$").expect("valid regex"));
static PUNC_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\pL0-9\s#]+").expect("valid regex"));
static PUNC_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\pL0-9\s]+$").expect("valid regex"));
static HASHTAG_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{2,}").expect("valid regex"));

/// True if `word` is already a well-formed hashtag.
pub fn is_valid_hashtag(word: &str) -> bool {
    VALID_HASHTAG.is_match(word)
}

fn clean_word(word: &str) -> String {
    let word = PUNC_START.replace(word, "");
    let word = PUNC_END.replace(&word, "");
    HASHTAG_START.replace(&word, "#").into_owned()
}

/// Partition `text` into hashtag tokens and everything else.
///
/// If the hashtags run past `MAX_HASHTAG_LENGTH` bytes, the list is cut back
/// to the last whole tag that fits; a partial tag is never emitted.
pub fn parse_hashtags(text: &str) -> (String, String) {
    let mut hashtags = String::new();
    let mut plain = String::new();

    for word in text.split_whitespace() {
        let word = clean_word(word);
        let dest = if is_valid_hashtag(&word) {
            &mut hashtags
        } else {
            &mut plain
        };
        dest.push(' ');
        dest.push_str(&word);
    }

    if hashtags.len() > MAX_HASHTAG_LENGTH {
        let head = truncate_bytes(&hashtags, MAX_HASHTAG_LENGTH - 1);
        let keep = head.rfind(' ').unwrap_or(0);
        hashtags.truncate(keep);
    }

    (hashtags.trim().to_string(), plain.trim().to_string())
}
