//! Marker-delimited block removal and insertion.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Where [`insert_block`] places a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// Before the first occurrence of the substring, or appended when the
    /// substring is absent.
    Before(String),
    /// Always appended.
    Append,
}

impl Anchor {
    pub fn before(s: impl Into<String>) -> Self {
        Anchor::Before(s.into())
    }
}

/// Removes the first block running from `open` through the next `close`,
/// plus one newline directly after it.
///
/// Returns the host borrowed and untouched when `open` is absent, when no
/// `close` follows it, or when either marker is empty.
///
/// # Examples
///
/// ```
/// use sentence_links::patch::remove_block;
///
/// let host = "a\n<!--x-->old<!--/x-->\nb";
/// assert_eq!(remove_block(host, "<!--x-->", "<!--/x-->"), "a\nb");
/// ```
pub fn remove_block<'a>(host: &'a str, open: &str, close: &str) -> Cow<'a, str> {
    if open.is_empty() || close.is_empty() {
        return Cow::Borrowed(host);
    }
    let Some(start) = host.find(open) else {
        return Cow::Borrowed(host);
    };
    let Some(close_at) = host[start..].find(close) else {
        return Cow::Borrowed(host);
    };
    let mut end = start + close_at + close.len();
    if host[end..].starts_with('\n') {
        end += 1;
    }
    let mut out = String::with_capacity(host.len() - (end - start));
    out.push_str(&host[..start]);
    out.push_str(&host[end..]);
    Cow::Owned(out)
}

/// Like [`remove_block`], repeated until no complete block is left.
pub fn remove_all_blocks<'a>(host: &'a str, open: &str, close: &str) -> Cow<'a, str> {
    let mut current = Cow::Borrowed(host);
    loop {
        let next = match remove_block(&current, open, close) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        match next {
            Some(s) => current = Cow::Owned(s),
            None => return current,
        }
    }
}

/// True when the last `open` in `host` has no `close` after it.
///
/// Such a marker is never removed, so inserting a new block after it would
/// let the next removal run from the stray marker through the new block.
pub fn has_unclosed_block(host: &str, open: &str, close: &str) -> bool {
    if open.is_empty() || close.is_empty() {
        return false;
    }
    host.rfind(open).is_some_and(|start| !host[start..].contains(close))
}

/// Inserts `body` into `host` at `anchor`.
///
/// Before an anchor the block is followed by a newline. When appended, a
/// newline separates it from the host unless the host already ends with
/// one. Both layouts are exactly what [`remove_block`] takes out again.
pub fn insert_block(host: &str, body: &str, anchor: &Anchor) -> String {
    let at = match anchor {
        Anchor::Before(s) if !s.is_empty() => host.find(s.as_str()),
        _ => None,
    };
    let mut out = String::with_capacity(host.len() + body.len() + 1);
    match at {
        Some(pos) => {
            out.push_str(&host[..pos]);
            out.push_str(body);
            out.push('\n');
            out.push_str(&host[pos..]);
        }
        None => {
            out.push_str(host);
            if !host.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(body);
        }
    }
    out
}

/// A generated, re-derivable block identified by its markers.
///
/// The body is expected to start with `open_marker` and end with the first
/// occurrence of `close_marker`; [`GeneratedBlock::is_well_formed`] checks
/// this. Well-formed blocks make [`GeneratedBlock::apply`] idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBlock {
    pub open_marker: String,
    pub close_marker: String,
    pub body: String,
}

impl GeneratedBlock {
    pub fn new(
        open_marker: impl Into<String>,
        close_marker: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            open_marker: open_marker.into(),
            close_marker: close_marker.into(),
            body: body.into(),
        }
    }

    pub fn is_well_formed(&self) -> bool {
        !self.open_marker.is_empty()
            && !self.close_marker.is_empty()
            && self.body.starts_with(&self.open_marker)
            && self.body.find(&self.close_marker)
                == Some(self.body.len() - self.close_marker.len())
    }

    /// Removes a previously inserted instance.
    pub fn remove_from<'a>(&self, host: &'a str) -> Cow<'a, str> {
        remove_block(host, &self.open_marker, &self.close_marker)
    }

    /// Removes every previously inserted instance.
    pub fn remove_all_from<'a>(&self, host: &'a str) -> Cow<'a, str> {
        remove_all_blocks(host, &self.open_marker, &self.close_marker)
    }

    /// Replaces any existing instance with this block at `anchor`.
    ///
    /// A host holding an open marker that is never closed is returned as is.
    pub fn apply(&self, host: &str, anchor: &Anchor) -> String {
        if has_unclosed_block(host, &self.open_marker, &self.close_marker) {
            warn!(marker = %self.open_marker, "unclosed block marker, leaving host as is");
            return host.to_owned();
        }
        insert_block(&self.remove_from(host), &self.body, anchor)
    }
}
