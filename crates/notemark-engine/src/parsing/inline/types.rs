use serde::{Deserialize, Serialize};

/// The kind of an inline span.
///
/// `BoldItalic` is a first-class variant: the combined state is reached via
/// the `***`/`___` marker, or by an emphasis span sitting first inside a
/// strong span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineKind {
    Text,
    Bold,
    Italic,
    BoldItalic,
    Strike,
    Code,
    Link,
}

/// A typed span of text within a block's content, delimiters stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inline {
    pub kind: InlineKind,
    pub text: String,
    /// Populated only for link/image spans.
    pub url: Option<String>,
}

impl Inline {
    pub fn new(kind: InlineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: InlineKind::Link,
            text: text.into(),
            url: Some(url.into()),
        }
    }
}
