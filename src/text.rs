//! Small text utilities shared by the error renderer and the tokenizer.

/// Longest prefix of `s` that is at most `max` bytes and ends on a char
/// boundary.
pub(crate) fn truncate_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Remove `<mention>` markup left behind by the client highlighter.
pub fn clear_mention_tags(post: &str) -> String {
    post.replace("<mention>", "").replace("</mention>", "")
}

/// Drop code points that are invisible, deprecated, or able to reorder
/// surrounding text.
pub fn sanitize_unicode(s: &str) -> String {
    s.chars().filter(|c| !is_blocklisted(*c)).collect()
}

fn is_blocklisted(c: char) -> bool {
    matches!(
        c,
        // clones of grave and acute
        '\u{0340}' | '\u{0341}'
        // obsolete Khmer
        | '\u{17A3}' | '\u{17D3}'
        // line and paragraph separator
        | '\u{2028}' | '\u{2029}'
        // BIDI embedding controls
        | '\u{202A}'..='\u{202E}'
        // symmetric swapping, Arabic shaping, national digit shapes
        | '\u{206A}'..='\u{206F}'
        // interlinear annotation
        | '\u{FFF9}'..='\u{FFFB}'
        | '\u{FEFF}'
        | '\u{FFFC}'
        // musical notation scoping
        | '\u{1D173}'..='\u{1D17A}'
        // language tags
        | '\u{E0000}'..='\u{E007F}'
    )
}
