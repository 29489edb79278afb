use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

fn entity_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").unwrap())
}

/// Remove markup tags, keeping the text between them.
///
/// # Examples
///
/// ```
/// use sentence_links_util::strings::strip_tags;
///
/// assert_eq!(strip_tags("<b>nǐ</b> hǎo"), "nǐ hǎo");
/// ```
pub fn strip_tags(s: &str) -> Cow<'_, str> {
    tag_regex().replace_all(s, "")
}

fn decode_entity(body: &str) -> Option<char> {
    if let Some(num) = body.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code);
    }
    match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    }
}

/// Decode character references (`&amp;`, `&#20320;`, `&#x4f60;`, ...).
///
/// Unknown references are left untouched.
pub fn decode_entities(s: &str) -> Cow<'_, str> {
    entity_regex().replace_all(s, |caps: &Captures<'_>| match decode_entity(&caps[1]) {
        Some(ch) => ch.to_string(),
        None => caps[0].to_string(),
    })
}

/// Plain text of a markup fragment, trimmed.
pub fn text_content(s: &str) -> String {
    decode_entities(&strip_tags(s)).trim().to_string()
}
