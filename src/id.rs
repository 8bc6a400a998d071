//! Identifier and random string generation.
//!
//! Both use the custom base-32 alphabet from `constants.rs`, 5 bits per
//! character, most significant bit first, no padding.

use once_cell::sync::Lazy;
use rand::RngCore;
use regex::Regex;
use uuid::Uuid;

use crate::constants::{ID_ALPHABET, ID_LENGTH};

// General categories L and N; `char::is_alphanumeric` would also let in
// Other_Alphabetic combining marks.
static LETTERS_AND_NUMBERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\pL\pN]+$").expect("valid regex"));

/// Encode `data` with the id alphabet.  A trailing partial group is padded
/// with zero bits.
pub fn encode_base32(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() * 8).div_ceil(5));
    let mut buffer: u32 = 0;
    let mut bits = 0u32;
    for &b in data {
        buffer = (buffer << 8) | u32::from(b);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ID_ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
        buffer &= (1 << bits) - 1;
    }
    if bits > 0 {
        out.push(ID_ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }
    out
}

/// A new random identifier: a v4 UUID encoded to 26 characters.
///
/// Collisions are astronomically unlikely, not impossible.
pub fn new_id() -> String {
    encode_base32(Uuid::new_v4().as_bytes())
}

/// `length` random characters from the id alphabet, carrying exactly
/// `5 * length` bits of entropy.
pub fn new_random_string(length: usize) -> String {
    let mut data = vec![0u8; 1 + length * 5 / 8];
    rand::rng().fill_bytes(&mut data);
    let mut s = encode_base32(&data);
    s.truncate(length);
    s
}

/// True for a 26-byte string made only of letters and numbers.
pub fn is_valid_id(value: &str) -> bool {
    value.len() == ID_LENGTH && LETTERS_AND_NUMBERS.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_known_vectors() {
        assert_eq!(encode_base32(&[]), "");
        // 0x00 -> 00000 000(00)
        assert_eq!(encode_base32(&[0x00]), "yy");
        // 0xff -> 11111 111(00)
        assert_eq!(encode_base32(&[0xff]), "9h");
        assert_eq!(encode_base32(&[0u8; 16]).len(), ID_LENGTH);
    }

    #[test]
    fn new_id_shape() {
        for _ in 0..100 {
            let id = new_id();
            assert_eq!(id.len(), ID_LENGTH);
            assert!(id.bytes().all(|b| ID_ALPHABET.contains(&b)));
            assert!(is_valid_id(&id));
        }
    }

    #[test]
    fn random_string_lengths() {
        for len in [0usize, 1, 7, 8, 26, 100] {
            let s = new_random_string(len);
            assert_eq!(s.len(), len);
            assert!(s.bytes().all(|b| ID_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn is_valid_id_rejects_bad_shapes() {
        assert!(!is_valid_id("short"));
        assert!(!is_valid_id(&"a".repeat(27)));
        assert!(!is_valid_id(&format!("{}-", "a".repeat(25))));
        assert!(is_valid_id(&"A1".repeat(13)));
    }

    #[test]
    fn is_valid_id_rejects_combining_marks() {
        // U+0345 is alphabetic but a mark (Mn), not a letter
        let id = format!("{}\u{0345}", "a".repeat(24));
        assert_eq!(id.len(), ID_LENGTH);
        assert!(!is_valid_id(&id));

        // letters outside ASCII are fine
        let id = format!("{}é", "a".repeat(24));
        assert!(is_valid_id(&id));
    }
}
