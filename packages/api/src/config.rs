//! # Client configuration (`mentorlink.toml`)
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"
//!
//! [chatbot]
//! inference_url = "http://localhost:11434/api/generate"
//! proxy_url = "http://localhost:3000/api/proxy"
//! model = "llama3"
//! ```
//!
//! Every section and field has a default, so an empty document is the default
//! configuration. Native builds read the file with [`ClientConfig::load_from`].
//! Browser builds have no filesystem or process environment, so
//! [`ClientConfig::load`] only applies overrides baked in at compile time.

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub chatbot: ChatbotConfig,
}

/// REST backend settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address every backend path is appended to. Fixed for the life of
    /// the process.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Local inference endpoint and its same-origin proxy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatbotConfig {
    #[serde(default = "default_inference_url")]
    pub inference_url: String,
    #[serde(default = "default_proxy_url")]
    pub proxy_url: String,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_inference_url() -> String {
    "http://localhost:11434/api/generate".to_string()
}

fn default_proxy_url() -> String {
    "http://localhost:3000/api/proxy".to_string()
}

fn default_model() -> String {
    "llama3".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            inference_url: default_inference_url(),
            proxy_url: default_proxy_url(),
            model: default_model(),
        }
    }
}

impl ClientConfig {
    /// Defaults plus the `MENTORLINK_API_URL` / `MENTORLINK_CHAT_MODEL`
    /// values baked in at build time.
    pub fn load() -> Self {
        Self::default().with_build_overrides()
    }

    /// Read `mentorlink.toml` from `dir`, then apply the build-time overrides.
    ///
    /// A missing file means defaults. An unreadable or invalid file is logged
    /// and also falls back to defaults.
    pub fn load_from(dir: &Path) -> Self {
        let path = dir.join(Self::filename());
        let config = match std::fs::read_to_string(&path) {
            Ok(text) => Self::from_toml(&text).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        };
        config.with_build_overrides()
    }

    fn with_build_overrides(self) -> Self {
        self.with_overrides(
            option_env!("MENTORLINK_API_URL"),
            option_env!("MENTORLINK_CHAT_MODEL"),
        )
    }

    /// Apply non-empty overrides. Trailing slashes on the base URL are dropped.
    pub fn with_overrides(mut self, api_url: Option<&str>, model: Option<&str>) -> Self {
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        if let Some(model) = model.map(str::trim).filter(|m| !m.is_empty()) {
            self.chatbot.model = model.to_string();
        }
        self.api.base_url = self.api.base_url.trim_end_matches('/').to_string();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "mentorlink.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.chatbot.inference_url, "http://localhost:11434/api/generate");
        assert_eq!(config.chatbot.proxy_url, "http://localhost:3000/api/proxy");
    }

    #[test]
    fn test_partial_document() {
        let config = ClientConfig::from_toml(
            r#"
            [chatbot]
            model = "mistral"
            "#,
        )
        .unwrap();
        assert_eq!(config.chatbot.model, "mistral");
        assert_eq!(config.chatbot.proxy_url, default_proxy_url());
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::default()
            .with_overrides(Some("https://api.example.org/"), Some(" "));
        assert_eq!(config.api.base_url, "https://api.example.org");
        assert_eq!(config.chatbot.model, "llama3");
    }

    #[test]
    fn test_load_from_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(ClientConfig::filename()),
            "[api]\nbase_url = \"https://mentors.example.edu/\"\n",
        )
        .unwrap();

        let config = ClientConfig::load_from(dir.path());
        if option_env!("MENTORLINK_API_URL").is_none() {
            assert_eq!(config.api.base_url, "https://mentors.example.edu");
        }
        assert_eq!(config.chatbot.inference_url, default_inference_url());
    }

    #[test]
    fn test_load_from_missing_or_invalid_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(ClientConfig::load_from(dir.path()), ClientConfig::load());

        std::fs::write(dir.path().join(ClientConfig::filename()), "[api\nbase_url = 3").unwrap();
        assert_eq!(ClientConfig::load_from(dir.path()), ClientConfig::load());
    }
}
