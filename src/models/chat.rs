use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry in the assistant transcript. The transcript is append-only;
/// messages are never edited or removed once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    /// Optional inline attachment as a data URI.
    pub image: Option<String>,
}

impl ChatMessage {
    pub fn user(id: impl Into<String>, text: impl Into<String>, image: Option<String>) -> Self {
        Self {
            id: id.into(),
            role: ChatRole::User,
            text: text.into(),
            image,
        }
    }

    pub fn assistant(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: ChatRole::Assistant,
            text: text.into(),
            image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ChatRole::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&ChatRole::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn assistant_messages_carry_no_attachment() {
        let msg = ChatMessage::assistant("msg-2", "Try a golden hour scene.");
        assert_eq!(msg.role, ChatRole::Assistant);
        assert!(msg.image.is_none());
    }
}
