// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the Ollama `/api/chat` endpoint.

use serde::{Deserialize, Serialize};

/// One message in a chat request or reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// Body of a non-streaming chat call.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCall {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

/// Reply to a non-streaming chat call. Extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub model: String,
    pub message: ChatMessage,
    #[serde(default)]
    pub done: bool,
}

/// Error body returned by the server on non-2xx status.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_serializes_messages_in_order() {
        let call = ChatCall {
            model: "llama3.2".into(),
            messages: vec![ChatMessage::system("be brief"), ChatMessage::user("hi")],
            stream: false,
        };
        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(json["model"], "llama3.2");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
    }

    #[test]
    fn reply_ignores_unknown_fields() {
        let body = r#"{
            "model": "llama3.2",
            "created_at": "2026-01-01T00:00:00Z",
            "message": {"role": "assistant", "content": "Hello!"},
            "done": true,
            "total_duration": 12345
        }"#;
        let reply: ChatReply = serde_json::from_str(body).unwrap();
        assert_eq!(reply.message.content, "Hello!");
        assert!(reply.done);
    }
}
