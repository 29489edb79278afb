//! The consumption-time script that links sentence words to Pleco.
//!
//! The script runs inside the card, segments the `.sentence` element with
//! the same rules as [`crate::pinyin`] and wraps each word in a Pleco
//! search link. Its text must stay stable: blocks written by earlier runs
//! are found again by [`SCRIPT_OPEN_MARKER`].

use crate::patch::GeneratedBlock;

/// First line(s) of every generated script block.
pub const SCRIPT_OPEN_MARKER: &str =
    "<script>\n(function() {\n  const sentenceElem = document.querySelector('.sentence');";

pub const SCRIPT_CLOSE_MARKER: &str = "</script>";

/// Question-side anchor: the divider between prompt and card body.
pub const QUESTION_ANCHOR: &str = "<hr>";

/// Answer-side anchor: the card's own timer script.
pub const ANSWER_ANCHOR: &str = "<script>\nsetTimeout(function ()";

const TEMPLATE: &str = include_str!("sentence_links.html");
const TARGET_WORD_SLOT: &str = "@TARGET_WORD@";

const FRONT_TARGET_WORD: &str = "\n  const targetWord = '{{Simplified}}'.trim();\n";
const BACK_TARGET_WORD: &str = "  const targetWord = null;\n";

/// Which side of the card the script is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceScript {
    /// Leaves the card's own word (`{{Simplified}}`) unlinked.
    Front,
    /// Links every word.
    Back,
}

impl SentenceScript {
    pub fn render(self) -> String {
        let target_word = match self {
            SentenceScript::Front => FRONT_TARGET_WORD,
            SentenceScript::Back => BACK_TARGET_WORD,
        };
        TEMPLATE.replacen(TARGET_WORD_SLOT, target_word, 1)
    }

    /// The rendered script with the given markers.
    pub fn block(self, open_marker: &str, close_marker: &str) -> GeneratedBlock {
        GeneratedBlock::new(open_marker, close_marker, self.render())
    }

    /// The rendered script with the default markers.
    pub fn default_block(self) -> GeneratedBlock {
        self.block(SCRIPT_OPEN_MARKER, SCRIPT_CLOSE_MARKER)
    }
}
