//! Chatbot messages and the local inference wire format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Who a chat bubble belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAuthor {
    User,
    Bot,
    /// A failed reply, rendered as a bot bubble with error styling.
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub author: ChatAuthor,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { author: ChatAuthor::User, content: content.into() }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self { author: ChatAuthor::Bot, content: content.into() }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self { author: ChatAuthor::Error, content: content.into() }
    }
}

/// Body of `POST /api/generate` on the inference server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GenerateResponse {
    pub response: String,
}

/// Envelope posted to the same-origin proxy, wrapping the original request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProxyRequest {
    pub url: String,
    pub method: String,
    pub headers: BTreeMap<String, String>,
    pub body: serde_json::Value,
}

impl ProxyRequest {
    /// Wrap a JSON `POST` to `url`.
    pub fn post_json<T: Serialize>(url: &str, body: &T) -> Result<Self, serde_json::Error> {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Ok(Self {
            url: url.to_string(),
            method: "POST".to_string(),
            headers,
            body: serde_json::to_value(body)?,
        })
    }
}
