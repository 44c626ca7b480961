//! Chat endpoint envelopes.
//!
//! `POST /nomis/{id}/chat` takes a [`ChatRequest`] and answers with a
//! [`ChatResponse`] carrying both the echoed user message and the reply.

use serde::{Deserialize, Serialize};

/// Outgoing message body: `{"messageText": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message_text: String,
}

impl ChatRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            message_text: text.into(),
        }
    }
}

/// One side of an exchange as the remote service records it.
///
/// Only `text` is required; `uuid` and `sent` are informational and
/// default to empty strings when the service omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub uuid: String,
    pub text: String,
    #[serde(default)]
    pub sent: String,
}

/// Response body of the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    #[serde(default)]
    pub sent_message: Option<Message>,
    pub reply_message: Message,
}
