//! Translation of caller intents into provider-ready requests
//!
//! Every function here is total: unknown roles and unknown analysis types
//! are handled by policy, never reported as errors.

use crate::types::{BlockRole, Content, ContentBlock, GenerationRequest, Message, Role};

/// Instruction used when the analysis type is not recognized
const GENERIC_ANALYSIS: &str = "Analyze the following content:";

/// Kind of document analysis requested by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisType {
    Summary,
    KeyPoints,
    Sentiment,
    Translation,
    Qa,
    /// Anything not listed above
    Generic,
}

impl AnalysisType {
    /// Map a caller-supplied name, falling back to [`AnalysisType::Generic`]
    pub fn parse(name: &str) -> Self {
        match name {
            "summary" => Self::Summary,
            "key_points" => Self::KeyPoints,
            "sentiment" => Self::Sentiment,
            "translation" => Self::Translation,
            "qa" => Self::Qa,
            _ => Self::Generic,
        }
    }

    pub const fn instruction(self) -> &'static str {
        match self {
            Self::Summary => "Provide a concise summary of the following document:",
            Self::KeyPoints => "Extract the key points from the following document:",
            Self::Sentiment => "Analyze the sentiment of the following text:",
            Self::Translation => "Translate the following text to English:",
            Self::Qa => "Answer questions about the following document:",
            Self::Generic => GENERIC_ANALYSIS,
        }
    }
}

/// Builds [`GenerationRequest`]s, applying the configured default model
#[derive(Debug, Clone)]
pub struct Normalizer {
    default_model: String,
}

impl Normalizer {
    pub fn new(default_model: impl Into<String>) -> Self {
        Self {
            default_model: default_model.into(),
        }
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    fn resolve_model(&self, model: Option<&str>) -> String {
        model.unwrap_or(&self.default_model).to_owned()
    }

    /// Prompt sent verbatim
    pub fn plain(&self, prompt: &str, model: Option<&str>) -> GenerationRequest {
        GenerationRequest {
            model: self.resolve_model(model),
            content: Content::Text(prompt.to_owned()),
        }
    }

    /// Prompt preceded by caller-supplied context
    pub fn with_context(&self, prompt: &str, context: &str, model: Option<&str>) -> GenerationRequest {
        self.plain(&format!("Context: {context}\n\nPrompt: {prompt}"), model)
    }

    /// Conversation history folded into Gemini's user/model content sequence
    pub fn from_conversation(&self, messages: &[Message], model: Option<&str>) -> GenerationRequest {
        GenerationRequest {
            model: self.resolve_model(model),
            content: Content::Blocks(fold_conversation(messages)),
        }
    }

    /// Document wrapped in the instruction for `analysis_type`
    pub fn for_document(&self, content: &str, analysis_type: &str) -> GenerationRequest {
        let kind = AnalysisType::parse(analysis_type);
        if kind == AnalysisType::Generic {
            tracing::debug!(analysis_type, "unrecognized analysis type, using generic instruction");
        }
        self.plain(&format!("{}\n\n{content}", kind.instruction()), None)
    }

    pub fn for_code_generation(&self, description: &str, language: &str) -> GenerationRequest {
        self.plain(&format!("Generate {language} code for: {description}"), None)
    }

    pub fn for_code_review(&self, code: &str, language: &str) -> GenerationRequest {
        let prompt = format!(
            "Review the following {language} code and provide feedback on:\n\
             1. Code quality\n\
             2. Potential bugs\n\
             3. Best practices\n\
             4. Suggestions for improvement\n\
             \n\
             Code:\n\
             {code}"
        );
        self.plain(&prompt, None)
    }
}

/// Single left-to-right pass over the conversation
///
/// System text is merged into the block emitted just before it when that
/// block is a user turn; otherwise it opens a new user block. Only the last
/// block is ever revisited.
fn fold_conversation(messages: &[Message]) -> Vec<ContentBlock> {
    messages.iter().fold(Vec::with_capacity(messages.len()), |mut blocks, message| {
        match message.role {
            Role::User => blocks.push(ContentBlock::user(message.content.as_str())),
            Role::Assistant => blocks.push(ContentBlock::assistant(message.content.as_str())),
            Role::System => match blocks.pop() {
                Some(last) if last.role == BlockRole::User => {
                    blocks.push(ContentBlock::user(format!("System: {}\n\n{}", message.content, last.text)));
                }
                previous => {
                    blocks.extend(previous);
                    blocks.push(ContentBlock::user(format!("System: {}", message.content)));
                }
            },
            Role::Unknown => {
                tracing::debug!("dropping message with unrecognized role");
            }
        }
        blocks
    })
}
