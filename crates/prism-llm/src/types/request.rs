use serde::{Deserialize, Serialize};

/// Roles Gemini accepts inside a content sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockRole {
    User,
    Assistant,
}

/// A single role-tagged unit of conversation text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub role: BlockRole,
    pub text: String,
}

impl ContentBlock {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: BlockRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: BlockRole::Assistant,
            text: text.into(),
        }
    }
}

/// Payload handed to the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// A single prompt
    Text(String),
    /// An ordered conversation; never contains a role Gemini cannot map
    Blocks(Vec<ContentBlock>),
}

impl Content {
    /// Text of a single-prompt payload
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Blocks(_) => None,
        }
    }

    /// Blocks of a conversation payload
    pub fn blocks(&self) -> Option<&[ContentBlock]> {
        match self {
            Self::Text(_) => None,
            Self::Blocks(blocks) => Some(blocks),
        }
    }
}

/// Normalized request: model identifier plus provider-ready content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    pub content: Content,
}
