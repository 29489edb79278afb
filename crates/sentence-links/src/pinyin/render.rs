//! HTML rendering of a segmentation as Pleco dictionary links.

use sentence_links_util::encode_uri_component;

use super::segment::{segment, Segmentation};

/// Pleco URL scheme for a dictionary search.
pub const PLECO_SEARCH_URL: &str = "plecoapi://x-callback-url/s?q=";

/// Anchor markup for one word.
pub fn pleco_link(word: &str) -> String {
    format!(
        "<a href=\"{PLECO_SEARCH_URL}{}\">{word}</a>",
        encode_uri_component(word)
    )
}

/// Renders linkable segments as Pleco links and everything else verbatim.
///
/// A segment equal to `target` is left unlinked, so the word a card is
/// testing does not give itself away.
pub fn render_links(segmentation: &Segmentation<'_>, target: Option<&str>) -> String {
    let mut out = String::new();
    for seg in segmentation.segments() {
        if seg.is_linkable() && target != Some(seg.text) {
            out.push_str(&pleco_link(seg.text));
        } else {
            out.push_str(seg.text);
        }
    }
    out
}

/// Segments and renders a sentence in one step.
pub fn link_sentence(text: &str, romanization: &str, target: Option<&str>) -> String {
    render_links(&segment(text, romanization), target)
}
