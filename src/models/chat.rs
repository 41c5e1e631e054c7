// file: src/models/chat.rs
// description: wire format of the backend /chat endpoint
// reference: https://serde.rs/field-attrs.html

use serde::{Deserialize, Serialize};

/// Body of a `POST /chat` request: the question as a one-message
/// conversation, scoped to a single document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub context: ChatContext,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatContext {
    pub overrides: ChatOverrides,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatOverrides {
    pub selected_blob: String,
}

impl ChatRequest {
    pub fn new(question: &str, document: &str) -> Self {
        Self {
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: question.to_string(),
            }],
            context: ChatContext {
                overrides: ChatOverrides {
                    selected_blob: document.to_string(),
                },
            },
        }
    }
}

/// Only `message.content` is read; everything else the backend sends is
/// ignored. A missing `message` or `content` means an empty answer, while a
/// `message` that is not an object fails to decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    pub fn into_answer(self) -> String {
        self.message.content.unwrap_or_default()
    }
}
