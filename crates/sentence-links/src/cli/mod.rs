//! Core logic behind the command-line tools.
//!
//! - `template-dump`   print the question and answer slots of a config blob
//! - `template-patch`  insert the sentence scripts into a config blob
//! - `sentence-links`  link the words of one sentence
//! - `stroke-order`    fill the stroke-order field of one note

use std::path::{Path, PathBuf};

use sentence_links_pack::{decode_fields_with, DecodeOptions, ProtoError};
use thiserror::Error;

use crate::config::{ConfigError, PatchConfig};
use crate::note::{FieldLayout, NoteFields, SIMPLIFIED_FIELD, STROKE_ORDER_FIELD};
use crate::pinyin::{render_links, segment, Alignment};
use crate::template::{patch_config_blob, PatchError, ANSWER_FIELD, QUESTION_FIELD};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Decode(#[from] ProtoError),
    #[error(transparent)]
    Patch(#[from] PatchError),
    #[error("no rule for template {0:?}")]
    UnknownTemplate(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`, `info` by default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}

/// Loads the config at `path`, or the defaults.
pub fn load_config(path: Option<&Path>) -> Result<PatchConfig, CliError> {
    Ok(match path {
        Some(path) => PatchConfig::load(path)?,
        None => PatchConfig::default(),
    })
}

// ── template-dump ─────────────────────────────────────────────────────────

/// Human-readable view of the question and answer slots.
pub fn dump(blob: &[u8], options: DecodeOptions) -> Result<String, CliError> {
    let fields = decode_fields_with(blob, options)?;
    let slot = |field: u32| fields.get(&field).map_or("N/A", String::as_str);
    Ok(format!(
        "=== Question (Front) ===\n{}\n\n=== Answer (Back) ===\n{}\n",
        slot(QUESTION_FIELD),
        slot(ANSWER_FIELD)
    ))
}

// ── template-patch ────────────────────────────────────────────────────────

pub const PATCH_USAGE: &str = "template-patch [--name NAME] [--config PATH] < config.bin";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchArgs {
    pub name: Option<String>,
    pub config: Option<PathBuf>,
}

impl PatchArgs {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, CliError> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--name" => {
                    parsed.name = Some(args.next().ok_or(CliError::Usage(PATCH_USAGE))?);
                }
                "--config" => {
                    let path = args.next().ok_or(CliError::Usage(PATCH_USAGE))?;
                    parsed.config = Some(PathBuf::from(path));
                }
                _ => return Err(CliError::Usage(PATCH_USAGE)),
            }
        }
        Ok(parsed)
    }
}

/// Patches `blob` with the rule for `name`, or the first configured rule.
pub fn patch(blob: &[u8], name: Option<&str>, config: &PatchConfig) -> Result<Vec<u8>, CliError> {
    let rule = match name {
        Some(name) => config.rule(name),
        None => config.templates.first(),
    }
    .ok_or_else(|| CliError::UnknownTemplate(name.unwrap_or_default().to_owned()))?;
    Ok(patch_config_blob(blob, rule, config)?)
}

// ── sentence-links ────────────────────────────────────────────────────────

pub const LINKS_USAGE: &str = "sentence-links <TEXT> <PINYIN> [--target WORD]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkArgs {
    pub text: String,
    pub pinyin: String,
    pub target: Option<String>,
}

impl LinkArgs {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, CliError> {
        let mut positional = Vec::new();
        let mut target = None;
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "--target" {
                target = Some(args.next().ok_or(CliError::Usage(LINKS_USAGE))?);
            } else {
                positional.push(arg);
            }
        }
        let [text, pinyin]: [String; 2] = positional
            .try_into()
            .map_err(|_| CliError::Usage(LINKS_USAGE))?;
        Ok(Self {
            text,
            pinyin,
            target,
        })
    }
}

/// Linked HTML for one sentence plus how well the pinyin lined up.
pub fn links(args: &LinkArgs) -> (String, Alignment) {
    let seg = segment(&args.text, &args.pinyin);
    (render_links(&seg, args.target.as_deref()), seg.alignment())
}

// ── stroke-order ──────────────────────────────────────────────────────────

pub const STROKE_USAGE: &str = "stroke-order --fields NAME[,NAME...] < flds.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrokeArgs {
    /// Field names of the note type, by ordinal.
    pub fields: Vec<String>,
}

impl StrokeArgs {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, CliError> {
        let mut fields: Option<Vec<String>> = None;
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--fields" => {
                    let list = args.next().ok_or(CliError::Usage(STROKE_USAGE))?;
                    fields = Some(list.split(',').map(str::to_owned).collect());
                }
                _ => return Err(CliError::Usage(STROKE_USAGE)),
            }
        }
        let fields = fields.ok_or(CliError::Usage(STROKE_USAGE))?;
        Ok(Self { fields })
    }

    /// The layout, with a stroke-order field added to note types that have
    /// a simplified field.
    pub fn layout(&self) -> FieldLayout {
        let mut layout = FieldLayout::new(self.fields.iter().map(String::as_str));
        if layout.ordinal(SIMPLIFIED_FIELD).is_some() {
            layout.ensure(STROKE_ORDER_FIELD);
        }
        layout
    }
}

/// Rewrites one stored field string against `layout`.
pub fn stroke_order(flds: &str, layout: &FieldLayout) -> String {
    let mut fields = NoteFields::parse(flds);
    fields.sync(layout);
    fields.to_string()
}

#[cfg(test)]
mod tests {
    use sentence_links_pack::{decode_fields, encode_fields, FieldMap};

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dump() {
        let mut fields = FieldMap::new();
        fields.insert(QUESTION_FIELD, "{{Front}}".into());
        let blob = encode_fields(&fields).unwrap();
        let out = dump(&blob, DecodeOptions::default()).unwrap();
        assert_eq!(
            out,
            "=== Question (Front) ===\n{{Front}}\n\n=== Answer (Back) ===\nN/A\n"
        );
    }

    #[test]
    fn test_dump_error() {
        let err = dump(&[0x0a], DecodeOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "record at offset 0 is truncated");
    }

    #[test]
    fn test_patch_args() {
        let parsed =
            PatchArgs::parse(args(&["--name", "Writing", "--config", "a.toml"])).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("Writing"));
        assert_eq!(parsed.config, Some(PathBuf::from("a.toml")));
        assert!(matches!(
            PatchArgs::parse(args(&["--name"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            PatchArgs::parse(args(&["--bogus"])),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn test_patch_unknown_template() {
        let err = patch(&[], Some("Listening"), &PatchConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "no rule for template \"Listening\"");
    }

    #[test]
    fn test_patch_default_rule() {
        let out = patch(&[], None, &PatchConfig::default()).unwrap();
        let fields = decode_fields(&out).unwrap();
        assert!(fields[&QUESTION_FIELD].contains("'{{Simplified}}'.trim()"));
        assert!(fields[&ANSWER_FIELD].contains("const targetWord = null;"));
    }

    #[test]
    fn test_link_args() {
        let parsed = LinkArgs::parse(args(&["你好", "nǐ hǎo", "--target", "好"])).unwrap();
        assert_eq!(parsed.target.as_deref(), Some("好"));
        assert!(matches!(
            LinkArgs::parse(args(&["你好"])),
            Err(CliError::Usage(LINKS_USAGE))
        ));
    }

    #[test]
    fn test_links() {
        let (html, alignment) = links(&LinkArgs {
            text: "你好。".into(),
            pinyin: "nǐ hǎo.".into(),
            target: Some("好".into()),
        });
        assert_eq!(
            html,
            "<a href=\"plecoapi://x-callback-url/s?q=%E4%BD%A0\">你</a>好。"
        );
        assert!(alignment.is_exact());
    }

    #[test]
    fn test_stroke_args() {
        let parsed = StrokeArgs::parse(args(&["--fields", "Simplified,Pinyin"])).unwrap();
        assert_eq!(parsed.fields, ["Simplified", "Pinyin"]);
        assert_eq!(parsed.layout().ordinal(STROKE_ORDER_FIELD), Some(2));
        assert!(matches!(
            StrokeArgs::parse(args(&[])),
            Err(CliError::Usage(STROKE_USAGE))
        ));
        assert!(matches!(
            StrokeArgs::parse(args(&["--fields"])),
            Err(CliError::Usage(STROKE_USAGE))
        ));
    }

    #[test]
    fn test_stroke_order() {
        let layout = StrokeArgs::parse(args(&["--fields", "Simplified,Pinyin"]))
            .unwrap()
            .layout();
        assert_eq!(
            stroke_order("好\u{1f}hǎo", &layout),
            "好\u{1f}hǎo\u{1f}<img width=\"640\" src=\"好.svg\">"
        );

        let plain = StrokeArgs::parse(args(&["--fields", "Front,Back"]))
            .unwrap()
            .layout();
        assert_eq!(plain.len(), 2);
        assert_eq!(stroke_order("a", &plain), "a\u{1f}");
    }

    #[test]
    fn test_load_default_config() {
        assert_eq!(load_config(None).unwrap(), PatchConfig::default());
    }
}
