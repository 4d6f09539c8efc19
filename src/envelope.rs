//! Output envelopes for the plugin-style boundary
//!
//! Every document husk emits is wrapped in a fixed `{"type": ..,
//! "payload": ..}` object so the consumer can dispatch on `type` without
//! inspecting the payload: a tree for a readable archive, a text document
//! for `--text` mode, or an error when no tree could be produced.

use serde::Serialize;

use crate::tree::TreeNode;

/// The outer object every output document is wrapped in.
#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum Envelope {
    Tree { root: TreeNode },
    Text { content: String, language: String },
    Error { message: String },
}

impl Envelope {
    pub fn tree(root: TreeNode) -> Self {
        Envelope::Tree { root }
    }

    pub fn text(content: impl Into<String>, language: impl Into<String>) -> Self {
        Envelope::Text {
            content: content.into(),
            language: language.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Envelope::Error {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Envelope::Error { .. })
    }
}
