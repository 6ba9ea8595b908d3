use serde::{Deserialize, Serialize};

/// Role of a conversation participant as sent by callers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instruction text with no direct Gemini equivalent
    System,
    /// End-user turn
    #[default]
    User,
    /// Model turn
    Assistant,
    /// Any role outside the three above; dropped during normalization
    #[serde(other)]
    Unknown,
}

/// One message of a caller-supplied conversation
///
/// A missing role is treated as `user` and missing content as empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_deserialize() {
        let messages: Vec<Message> = serde_json::from_str(
            r#"[
                {"role": "system", "content": "Be terse"},
                {"role": "user", "content": "Hi"},
                {"role": "assistant", "content": "Hello"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            messages,
            [Message::system("Be terse"), Message::user("Hi"), Message::assistant("Hello")]
        );
    }

    #[test]
    fn unrecognized_role_becomes_unknown() {
        let message: Message = serde_json::from_str(r#"{"role": "tool", "content": "42"}"#).unwrap();
        assert_eq!(message.role, Role::Unknown);
        assert_eq!(message.content, "42");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let message: Message = serde_json::from_str("{}").unwrap();
        assert_eq!(message, Message::user(""));
    }
}
