//! Conversion between internal types and Google Generative Language wire format

use crate::error::ProviderFault;
use crate::protocol::google::{GoogleContent, GoogleErrorResponse, GooglePart, GoogleRequest, GoogleResponse};
use crate::types::{BlockRole, Content, ContentBlock, ProviderResponse, Usage};

// -- Outbound: normalized content -> Google wire request --

impl From<&Content> for GoogleRequest {
    fn from(content: &Content) -> Self {
        let contents = match content {
            Content::Text(text) => vec![GoogleContent {
                role: Some("user".to_owned()),
                parts: vec![GooglePart::text(text.as_str())],
            }],
            Content::Blocks(blocks) => blocks.iter().map(block_to_google).collect(),
        };

        Self { contents }
    }
}

/// Gemini names the assistant side of a conversation `model`
const fn google_role(role: BlockRole) -> &'static str {
    match role {
        BlockRole::User => "user",
        BlockRole::Assistant => "model",
    }
}

fn block_to_google(block: &ContentBlock) -> GoogleContent {
    GoogleContent {
        role: Some(google_role(block.role).to_owned()),
        parts: vec![GooglePart::text(block.text.as_str())],
    }
}

// -- Inbound: Google wire response -> provider response --

impl TryFrom<GoogleResponse> for ProviderResponse {
    type Error = ProviderFault;

    fn try_from(resp: GoogleResponse) -> Result<Self, Self::Error> {
        let usage = resp.usage_metadata.as_ref().map(|u| Usage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        let Some(candidate) = resp.candidates.into_iter().next() else {
            let reason = resp
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .map_or_else(|| "response contained no candidates".to_owned(), |r| format!("prompt blocked ({r})"));
            return Err(ProviderFault::EmptyResponse(reason));
        };

        let texts: Vec<String> = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter(|part| part.thought != Some(true))
            .filter_map(|part| part.text)
            .collect();

        if texts.is_empty() {
            let reason = candidate
                .finish_reason
                .map_or_else(|| "candidate had no text parts".to_owned(), |r| format!("finish reason {r}"));
            return Err(ProviderFault::EmptyResponse(reason));
        }

        Ok(Self {
            text: texts.concat(),
            usage,
        })
    }
}

/// Human-readable message from a Google error body
///
/// Falls back to the raw body when it is not the documented error shape.
pub fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<GoogleErrorResponse>(body).map_or_else(
        |_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "empty response body".to_owned()
            } else {
                trimmed.to_owned()
            }
        },
        |e| e.error.message,
    )
}
