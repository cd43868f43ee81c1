//! # Chatbot
//!
//! [`ChatbotClient`] talks to a local inference server. A direct call to
//! `inference_url` is tried first; if it fails for any reason the same request
//! is wrapped in a [`ProxyRequest`] and posted once to the same-origin
//! `proxy_url`. [`Conversation`] holds the message list and the in-flight flag
//! the chat page renders.

use crate::client::execute;
use crate::config::ChatbotConfig;
use crate::error::ApiError;
use crate::fallback::{with_fallback, FallbackError};
use crate::models::{ChatMessage, GenerateRequest, GenerateResponse, ProxyRequest};

pub const GREETING: &str =
    "Hi! I'm your mentorship assistant. Ask me about careers, courses, or how to get the most out of your mentor.";
pub const UNAVAILABLE: &str =
    "Sorry, I couldn't reach the assistant right now. Please make sure the model server is running and try again.";

#[derive(Clone, Debug)]
pub struct ChatbotClient {
    http: reqwest::Client,
    inference_url: String,
    proxy_url: String,
    model: String,
}

impl ChatbotClient {
    pub fn new(config: &ChatbotConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            inference_url: config.inference_url.clone(),
            proxy_url: config.proxy_url.clone(),
            model: config.model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn direct(&self, request: &GenerateRequest) -> Result<String, ApiError> {
        let req = self.http.post(&self.inference_url).json(request);
        let resp: GenerateResponse = execute(req, "POST", &self.inference_url).await?;
        Ok(resp.response)
    }

    async fn proxied(&self, request: &GenerateRequest) -> Result<String, ApiError> {
        let envelope = ProxyRequest::post_json(&self.inference_url, request)
            .map_err(|e| ApiError::Malformed(e.to_string()))?;
        let req = self.http.post(&self.proxy_url).json(&envelope);
        let resp: GenerateResponse = execute(req, "POST", &self.proxy_url).await?;
        Ok(resp.response)
    }

    /// Generate a reply, falling back to the proxy once.
    pub async fn generate(&self, prompt: &str) -> Result<String, FallbackError<ApiError>> {
        let request = GenerateRequest::new(&self.model, prompt);
        with_fallback(|| self.direct(&request), || self.proxied(&request)).await
    }
}

/// A chat transcript plus the "waiting for a reply" flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    loading: bool,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::bot(GREETING)],
            loading: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Record the user's message and mark a reply as pending.
    ///
    /// Returns the prompt to send, or `None` for blank input or while a reply
    /// is still pending.
    pub fn begin(&mut self, input: &str) -> Option<String> {
        let prompt = input.trim();
        if prompt.is_empty() || self.loading {
            return None;
        }
        self.messages.push(ChatMessage::user(prompt));
        self.loading = true;
        Some(prompt.to_string())
    }

    /// Append the reply (or one error message) and clear the pending flag.
    pub fn finish<E: std::fmt::Display>(&mut self, result: Result<String, E>) {
        match result {
            Ok(reply) => {
                let reply = reply.trim();
                if reply.is_empty() {
                    self.messages.push(ChatMessage::error(UNAVAILABLE));
                } else {
                    self.messages.push(ChatMessage::bot(reply));
                }
            }
            Err(e) => {
                tracing::warn!("Chatbot request failed: {}", e);
                self.messages.push(ChatMessage::error(UNAVAILABLE));
            }
        }
        self.loading = false;
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatAuthor;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(inference: &MockServer, proxy: &MockServer) -> ChatbotConfig {
        ChatbotConfig {
            inference_url: format!("{}/api/generate", inference.uri()),
            proxy_url: format!("{}/api/proxy", proxy.uri()),
            model: "llama3".into(),
        }
    }

    #[tokio::test]
    async fn test_direct_success_skips_proxy() {
        let inference = MockServer::start().await;
        let proxy = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_json(json!({"model": "llama3", "prompt": "hello", "stream": false})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "Hi there"})))
            .expect(1)
            .mount(&inference)
            .await;
        Mock::given(path("/api/proxy"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&proxy)
            .await;

        let client = ChatbotClient::new(&config(&inference, &proxy));
        assert_eq!(client.generate("hello").await.unwrap(), "Hi there");
    }

    #[tokio::test]
    async fn test_direct_failure_uses_proxy_once_with_same_prompt() {
        let inference = MockServer::start().await;
        let proxy = MockServer::start().await;
        Mock::given(path("/api/generate"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&inference)
            .await;
        let inference_url = format!("{}/api/generate", inference.uri());
        Mock::given(method("POST"))
            .and(path("/api/proxy"))
            .and(body_json(json!({
                "url": inference_url,
                "method": "POST",
                "headers": {"Content-Type": "application/json"},
                "body": {"model": "llama3", "prompt": "career advice?", "stream": false}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "Network widely."})))
            .expect(1)
            .mount(&proxy)
            .await;

        let client = ChatbotClient::new(&config(&inference, &proxy));
        assert_eq!(client.generate("career advice?").await.unwrap(), "Network widely.");
    }

    #[tokio::test]
    async fn test_both_fail_appends_one_error_message() {
        let inference = MockServer::start().await;
        let proxy = MockServer::start().await;
        Mock::given(path("/api/generate"))
            .respond_with(ResponseTemplate::new(502))
            .expect(1)
            .mount(&inference)
            .await;
        Mock::given(path("/api/proxy"))
            .respond_with(ResponseTemplate::new(502))
            .expect(1)
            .mount(&proxy)
            .await;

        let client = ChatbotClient::new(&config(&inference, &proxy));
        let mut conversation = Conversation::new();
        let prompt = conversation.begin("hello").unwrap();
        assert!(conversation.is_loading());

        conversation.finish(client.generate(&prompt).await);

        assert!(!conversation.is_loading());
        let messages = conversation.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1], ChatMessage::user("hello"));
        assert_eq!(messages[2].author, ChatAuthor::Error);
        assert_eq!(
            messages.iter().filter(|m| m.author == ChatAuthor::Error).count(),
            1
        );
    }

    #[test]
    fn test_begin_ignores_blank_and_pending() {
        let mut conversation = Conversation::new();
        assert!(conversation.begin("   ").is_none());
        assert_eq!(conversation.messages().len(), 1);

        assert_eq!(conversation.begin(" hi ").as_deref(), Some("hi"));
        assert!(conversation.begin("again").is_none());
        assert_eq!(conversation.messages().len(), 2);

        conversation.finish::<ApiError>(Ok("  Hello!  ".into()));
        assert_eq!(conversation.messages()[2], ChatMessage::bot("Hello!"));
        assert!(conversation.begin("again").is_some());
    }

    #[test]
    fn test_clear_resets_to_greeting() {
        let mut conversation = Conversation::new();
        conversation.begin("hi");
        conversation.clear();
        assert_eq!(conversation, Conversation::new());
        assert_eq!(conversation.messages()[0].content, GREETING);
    }
}
