//! Patch configuration, loadable from TOML.
//!
//! ```toml
//! remove-all = true
//!
//! [decode]
//! unknown-wire-type = "skip"
//!
//! [[templates]]
//! name = "Recognition "
//! question = true
//! answer = true
//! ```

use std::path::{Path, PathBuf};

use sentence_links_pack::DecodeOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::patch::{Anchor, GeneratedBlock};
use crate::script::{
    SentenceScript, ANSWER_ANCHOR, QUESTION_ANCHOR, SCRIPT_CLOSE_MARKER, SCRIPT_OPEN_MARKER,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Which slots of a named template receive the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRule {
    pub name: String,
    /// Insert the front script (target word excluded) into the question.
    #[serde(default)]
    pub question: bool,
    /// Insert the back script into the answer.
    #[serde(default = "default_true")]
    pub answer: bool,
}

fn default_true() -> bool {
    true
}

impl TemplateRule {
    pub fn new(name: impl Into<String>, question: bool, answer: bool) -> Self {
        Self {
            name: name.into(),
            question,
            answer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PatchConfig {
    pub open_marker: String,
    pub close_marker: String,
    pub question_anchor: Anchor,
    pub answer_anchor: Anchor,
    /// Remove every stale block instead of only the first.
    pub remove_all: bool,
    pub templates: Vec<TemplateRule>,
    pub decode: DecodeOptions,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            open_marker: SCRIPT_OPEN_MARKER.to_owned(),
            close_marker: SCRIPT_CLOSE_MARKER.to_owned(),
            question_anchor: Anchor::before(QUESTION_ANCHOR),
            answer_anchor: Anchor::before(ANSWER_ANCHOR),
            remove_all: false,
            templates: vec![
                TemplateRule::new("Recognition ", true, true),
                TemplateRule::new("Writing", false, true),
            ],
            decode: DecodeOptions::default(),
        }
    }
}

impl PatchConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn rule(&self, name: &str) -> Option<&TemplateRule> {
        self.templates.iter().find(|r| r.name == name)
    }

    pub fn template_names(&self) -> Vec<&str> {
        self.templates.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn script_block(&self, side: SentenceScript) -> GeneratedBlock {
        side.block(&self.open_marker, &self.close_marker)
    }
}
