//! Syllable estimation for space-delimited pinyin.
//!
//! Every pinyin syllable starts with a consonant run or a vowel, so counting
//! consonant runs (plus one for a vowel-initial token) estimates how many
//! characters one romanized word spells. Nasal finals (`-n`, `-ng`) and
//! erhua `-r` form runs of their own and are over-counted; tone-marked
//! initial vowels are not recognised as vowels. The consumption-time
//! script uses the same rules, so both sides agree.

use std::sync::OnceLock;

use regex::Regex;
use sentence_links_util::text_content;

fn ignored_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[0-9.,!?;:，。！？；："']"#).unwrap())
}

fn consonant_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[bcdfghjklmnpqrstwxyzBCDFGHJKLMNPQRSTWXYZ]+").unwrap()
    })
}

fn starts_with_vowel(s: &str) -> bool {
    matches!(
        s.chars().next(),
        Some('a' | 'e' | 'i' | 'o' | 'u' | 'v' | 'A' | 'E' | 'I' | 'O' | 'U' | 'V')
    )
}

/// Estimated number of characters spelled by one pinyin token.
///
/// Returns 0 when the token is only digits and punctuation.
///
/// # Examples
///
/// ```
/// use sentence_links::pinyin::syllable_count;
///
/// assert_eq!(syllable_count("nǐ"), 1);
/// assert_eq!(syllable_count("xuéxí"), 2);
/// assert_eq!(syllable_count("。"), 0);
/// ```
pub fn syllable_count(token: &str) -> usize {
    let clean = ignored_regex().replace_all(token, "");
    if clean.is_empty() {
        return 0;
    }
    let runs = consonant_run_regex().find_iter(&clean).count();
    runs + usize::from(starts_with_vowel(&clean))
}

/// Splits a romanization into tokens.
///
/// Markup is stripped and character references decoded first.
pub fn tokenize(romanization: &str) -> Vec<String> {
    text_content(romanization)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// [`syllable_count`] of every token of `romanization`.
pub fn syllable_counts(romanization: &str) -> Vec<usize> {
    tokenize(romanization)
        .iter()
        .map(|token| syllable_count(token))
        .collect()
}
