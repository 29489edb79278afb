/// Check if a character is in the CJK Unified Ideographs block
/// (U+4E00..=U+9FFF).
///
/// Extension blocks and CJK punctuation are not Han for this purpose.
///
/// # Examples
///
/// ```
/// use sentence_links_util::strings::is_han;
///
/// assert!(is_han('你'));
/// assert!(!is_han('，'));
/// assert!(!is_han('a'));
/// ```
pub fn is_han(ch: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&ch)
}

/// Check if any character of `s` is Han.
pub fn contains_han(s: &str) -> bool {
    s.chars().any(is_han)
}
