//! Note field records and the stroke-order field.
//!
//! A note stores its fields as one string joined by U+001F, in the order
//! given by its note type's field layout.

use std::fmt;

pub const FIELD_SEPARATOR: char = '\u{1f}';

pub const SIMPLIFIED_FIELD: &str = "Simplified";
pub const STROKE_ORDER_FIELD: &str = "StrokeOrder";

/// One `<img>` per character of the trimmed text, pointing at its SVG.
///
/// ```
/// use sentence_links::note::stroke_order_html;
///
/// assert_eq!(
///     stroke_order_html(" 你好 "),
///     r#"<img width="640" src="你.svg"><img width="640" src="好.svg">"#
/// );
/// ```
pub fn stroke_order_html(simplified: &str) -> String {
    simplified
        .trim()
        .chars()
        .map(|c| format!(r#"<img width="640" src="{c}.svg">"#))
        .collect()
}

/// Field names of a note type, by ordinal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldLayout {
    names: Vec<String>,
}

impl FieldLayout {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn ordinal(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Ordinal of `name`, appending it as a new last field when missing.
    pub fn ensure(&mut self, name: &str) -> usize {
        match self.ordinal(name) {
            Some(ord) => ord,
            None => {
                self.names.push(name.to_owned());
                self.names.len() - 1
            }
        }
    }
}

/// The fields of one note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFields {
    fields: Vec<String>,
}

impl NoteFields {
    /// Splits a stored field string. An empty string is one empty field.
    pub fn parse(flds: &str) -> Self {
        Self {
            fields: flds.split(FIELD_SEPARATOR).map(str::to_owned).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, ord: usize) -> Option<&str> {
        self.fields.get(ord).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.fields
    }

    /// Pads with empty fields or truncates to exactly `len` fields.
    pub fn resize(&mut self, len: usize) {
        self.fields.resize(len, String::new());
    }

    /// Sets the stroke-order field from the simplified field.
    ///
    /// Returns `false` and changes nothing when either ordinal is out of range.
    pub fn fill_stroke_order(&mut self, simplified_ord: usize, stroke_ord: usize) -> bool {
        let Some(simplified) = self.fields.get(simplified_ord) else {
            return false;
        };
        if stroke_ord >= self.fields.len() {
            return false;
        }
        self.fields[stroke_ord] = stroke_order_html(simplified);
        true
    }

    /// Brings the fields in line with `layout` and fills the stroke-order
    /// field when the layout has both it and the simplified field.
    pub fn sync(&mut self, layout: &FieldLayout) {
        self.resize(layout.len());
        if let (Some(simplified), Some(stroke)) = (
            layout.ordinal(SIMPLIFIED_FIELD),
            layout.ordinal(STROKE_ORDER_FIELD),
        ) {
            self.fill_stroke_order(simplified, stroke);
        }
    }
}

impl fmt::Display for NoteFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, "{FIELD_SEPARATOR}")?;
            }
            f.write_str(field)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_join() {
        let flds = "你好\u{1f}nǐ hǎo\u{1f}hello";
        let fields = NoteFields::parse(flds);
        assert_eq!(fields.len(), 3);
        assert_eq!(fields.get(1), Some("nǐ hǎo"));
        assert_eq!(fields.to_string(), flds);
    }

    #[test]
    fn test_parse_empty() {
        let fields = NoteFields::parse("");
        assert_eq!(fields.as_slice(), [""]);
        assert_eq!(fields.to_string(), "");
    }

    #[test]
    fn test_resize() {
        let mut fields = NoteFields::parse("a\u{1f}b");
        fields.resize(4);
        assert_eq!(fields.to_string(), "a\u{1f}b\u{1f}\u{1f}");
        fields.resize(1);
        assert_eq!(fields.to_string(), "a");
    }

    #[test]
    fn test_stroke_order_html_empty() {
        assert_eq!(stroke_order_html("   "), "");
    }

    #[test]
    fn test_fill_stroke_order() {
        let mut fields = NoteFields::parse("学\u{1f}xué\u{1f}old");
        assert!(fields.fill_stroke_order(0, 2));
        assert_eq!(fields.get(2), Some(r#"<img width="640" src="学.svg">"#));
        assert!(!fields.fill_stroke_order(0, 3));
        assert!(!fields.fill_stroke_order(5, 2));
    }

    #[test]
    fn test_layout_ensure() {
        let mut layout = FieldLayout::new(["Simplified", "Pinyin"]);
        assert_eq!(layout.ensure(STROKE_ORDER_FIELD), 2);
        assert_eq!(layout.ensure(STROKE_ORDER_FIELD), 2);
        assert_eq!(layout.ensure("Pinyin"), 1);
        assert_eq!(layout.len(), 3);
    }

    #[test]
    fn test_sync_pads_and_fills() {
        let mut layout = FieldLayout::new(["Simplified", "Pinyin"]);
        layout.ensure(STROKE_ORDER_FIELD);
        let mut fields = NoteFields::parse("中文\u{1f}zhōngwén");
        fields.sync(&layout);
        assert_eq!(
            fields.to_string(),
            "中文\u{1f}zhōngwén\u{1f}<img width=\"640\" src=\"中.svg\"><img width=\"640\" src=\"文.svg\">"
        );
    }

    #[test]
    fn test_sync_without_stroke_field_only_resizes() {
        let layout = FieldLayout::new(["Simplified", "Pinyin", "Meaning"]);
        let mut fields = NoteFields::parse("中");
        fields.sync(&layout);
        assert_eq!(fields.to_string(), "中\u{1f}\u{1f}");
    }
}
