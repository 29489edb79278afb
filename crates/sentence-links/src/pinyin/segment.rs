//! Pinyin-guided word segmentation of Chinese text.

use sentence_links_util::{contains_han, is_han};
use tracing::debug;

use super::syllables::syllable_counts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// A word containing Han characters, worth a dictionary link.
    Linkable,
    /// Punctuation, Latin text or skipped characters, emitted as-is.
    Literal,
}

/// A span of the segmented text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub kind: SegmentKind,
}

impl<'a> Segment<'a> {
    fn literal(text: &'a str) -> Self {
        Self {
            text,
            kind: SegmentKind::Literal,
        }
    }

    pub fn is_linkable(&self) -> bool {
        self.kind == SegmentKind::Linkable
    }
}

/// How well the pinyin tokens matched the text, in characters.
///
/// The walk never fails; these counters are the only signal that the
/// syllable estimate drifted from the real word boundaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Alignment {
    /// Han characters jumped over while resynchronising on punctuation.
    pub skipped: usize,
    /// Characters requested by tokens after the text ran out.
    pub overrun: usize,
    /// Characters left over once the tokens ran out.
    pub trailing: usize,
}

impl Alignment {
    pub fn is_exact(&self) -> bool {
        *self == Alignment::default()
    }
}

/// Result of [`segment`]: ordered spans covering the text exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation<'a> {
    segments: Vec<Segment<'a>>,
    alignment: Alignment,
}

impl<'a> Segmentation<'a> {
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn into_segments(self) -> Vec<Segment<'a>> {
        self.segments
    }

    /// Concatenation of every segment, equal to the input text.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text).collect()
    }

    pub fn linkable(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.segments
            .iter()
            .filter(|s| s.is_linkable())
            .map(|s| s.text)
    }
}

/// Segments `text` using per-token syllable counts.
///
/// For each count, from cursor `i`:
/// - `0`: jump over a run of Han characters (emitted as one literal), then
///   emit the next character as a literal.
/// - `n`: take the next `n` characters as one word, then emit any directly
///   following non-Han characters one literal each.
///
/// Text left once the counts run out is one final literal.
pub fn segment_counts<'a>(text: &'a str, counts: &[usize]) -> Segmentation<'a> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let n = chars.len();
    let offset = |i: usize| if i < n { chars[i].0 } else { text.len() };
    let span = move |from: usize, to: usize| &text[offset(from)..offset(to)];

    let mut segments = Vec::new();
    let mut alignment = Alignment::default();
    let mut i = 0;

    for &count in counts {
        if count == 0 {
            let start = i;
            while i < n && is_han(chars[i].1) {
                i += 1;
            }
            if i > start {
                alignment.skipped += i - start;
                segments.push(Segment::literal(span(start, i)));
            }
            if i < n {
                segments.push(Segment::literal(span(i, i + 1)));
                i += 1;
            } else {
                alignment.overrun += 1;
            }
            continue;
        }

        let end = (i + count).min(n);
        alignment.overrun += i + count - end;
        let word = span(i, end);
        if !word.is_empty() {
            let kind = if contains_han(word) {
                SegmentKind::Linkable
            } else {
                SegmentKind::Literal
            };
            segments.push(Segment { text: word, kind });
        }
        i = end;

        while i < n && !is_han(chars[i].1) {
            segments.push(Segment::literal(span(i, i + 1)));
            i += 1;
        }
    }

    if i < n {
        alignment.trailing = n - i;
        segments.push(Segment::literal(span(i, n)));
    }

    if !alignment.is_exact() {
        debug!(
            skipped = alignment.skipped,
            overrun = alignment.overrun,
            trailing = alignment.trailing,
            "pinyin does not line up with text"
        );
    }

    Segmentation {
        segments,
        alignment,
    }
}

/// Segments `text` into words using its pinyin transcription.
///
/// # Examples
///
/// ```
/// use sentence_links::pinyin::segment;
///
/// let seg = segment("你好，世界。", "nǐ hǎo, shì jiè.");
/// let words: Vec<&str> = seg.linkable().collect();
/// assert_eq!(words, ["你", "好", "世", "界"]);
/// assert!(seg.alignment().is_exact());
/// ```
pub fn segment<'a>(text: &'a str, romanization: &str) -> Segmentation<'a> {
    segment_counts(text, &syllable_counts(romanization))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(seg: &Segmentation<'a>) -> Vec<&'a str> {
        seg.segments().iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_one_char_words() {
        let seg = segment("你好世界", "nǐ hǎo shì jiè");
        assert_eq!(texts(&seg), ["你", "好", "世", "界"]);
        assert!(seg.segments().iter().all(Segment::is_linkable));
        assert!(seg.alignment().is_exact());
    }

    #[test]
    fn test_trailing_punctuation_attached() {
        let seg = segment("你好，世界。", "nǐ hǎo, shì jiè.");
        assert_eq!(texts(&seg), ["你", "好", "，", "世", "界", "。"]);
        let kinds: Vec<bool> = seg.segments().iter().map(Segment::is_linkable).collect();
        assert_eq!(kinds, [true, true, false, true, true, false]);
        assert_eq!(seg.text(), "你好，世界。");
    }

    #[test]
    fn test_multi_char_words() {
        let seg = segment("我学习中文", "Wǒ xuéxí Zhōngwén");
        // "Zhōngwén" is estimated at 3 syllables; the overshoot is clamped.
        assert_eq!(texts(&seg), ["我", "学习", "中文"]);
        assert_eq!(seg.alignment().overrun, 1);
    }

    #[test]
    fn test_standalone_punctuation_token() {
        let seg = segment_counts("好。", &[1, 0]);
        // The trailing-punctuation loop already consumed "。".
        assert_eq!(texts(&seg), ["好", "。"]);
        assert_eq!(seg.alignment().overrun, 1);
    }

    #[test]
    fn test_zero_count_resynchronises() {
        let seg = segment_counts("你好，世界", &[0, 2]);
        assert_eq!(texts(&seg), ["你好", "，", "世界"]);
        assert_eq!(seg.segments()[0].kind, SegmentKind::Literal);
        assert_eq!(seg.segments()[2].kind, SegmentKind::Linkable);
        assert_eq!(seg.alignment().skipped, 2);
    }

    #[test]
    fn test_leftover_text_is_one_literal() {
        let seg = segment("你好世界", "nǐ");
        assert_eq!(texts(&seg), ["你", "好世界"]);
        assert_eq!(seg.segments()[1].kind, SegmentKind::Literal);
        assert_eq!(seg.alignment().trailing, 3);
    }

    #[test]
    fn test_latin_word_is_literal() {
        let seg = segment_counts("OK好", &[2, 1]);
        assert_eq!(texts(&seg), ["OK", "好"]);
        assert_eq!(seg.segments()[0].kind, SegmentKind::Literal);
        assert!(seg.segments()[1].is_linkable());
    }

    #[test]
    fn test_mixed_word_is_linkable() {
        let seg = segment_counts("A型", &[2]);
        assert_eq!(seg.segments()[0].kind, SegmentKind::Linkable);
    }

    #[test]
    fn test_empty_inputs() {
        let seg = segment("", "");
        assert!(seg.segments().is_empty());
        assert!(seg.alignment().is_exact());

        let seg = segment("你好", "");
        assert_eq!(texts(&seg), ["你好"]);
        assert_eq!(seg.alignment().trailing, 2);
    }

    #[test]
    fn test_leading_punctuation() {
        let seg = segment("“你好”", "“ nǐ hǎo ”");
        // Quote tokens count 0 syllables; the closing one finds nothing left.
        assert_eq!(texts(&seg), ["“", "你", "好", "”"]);
        assert_eq!(seg.alignment().overrun, 1);
    }
}
