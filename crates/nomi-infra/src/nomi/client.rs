//! NomiClient -- reqwest implementation of the chat ports.
//!
//! Talks to two endpoints:
//! - `GET {base}/nomis` for the listing used by identity resolution
//! - `POST {base}/nomis/{id}/chat` for a single message round trip
//!
//! Both carry `Authorization: Bearer {api_key}`. The key is held in a
//! [`SecretString`] and only exposed while building request headers.

use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};

use nomi_core::exchange::MessageExchange;
use nomi_core::resolver::{IdentityResolver, find_by_name};
use nomi_types::chat::{ChatRequest, ChatResponse};
use nomi_types::error::{ConfigError, ExchangeError, ResolveError};
use nomi_types::nomi::{ConversationTarget, NomiListing};

use crate::config::ClientConfig;

/// HTTP client for the Nomi API.
pub struct NomiClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

// NomiClient intentionally does NOT derive Debug; the key must never end up
// in log output.

impl NomiClient {
    /// Build a client from resolved configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("nomi-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch every Nomi visible to the API key.
    pub async fn list(&self) -> Result<NomiListing, ResolveError> {
        let url = self.url("/nomis");
        tracing::debug!(%url, "fetching nomi listing");

        let response = self
            .client
            .get(&url)
            .bearer_auth(self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| ResolveError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, "listing rejected");
            return Err(ResolveError::RemoteRejected {
                status: status.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ResolveError::Transport(e.to_string()))?;

        serde_json::from_str::<NomiListing>(&body).map_err(|e| ResolveError::Malformed(e.to_string()))
    }
}

impl IdentityResolver for NomiClient {
    async fn resolve(&self, name: &str) -> Result<ConversationTarget, ResolveError> {
        let listing = self.list().await?;
        let target = find_by_name(&listing, name)?;
        tracing::debug!(name = %target.name, id = %target.id, "resolved conversation target");
        Ok(target)
    }
}

impl MessageExchange for NomiClient {
    async fn send(&self, target: &ConversationTarget, text: &str) -> Result<String, ExchangeError> {
        let body = serde_json::to_vec(&ChatRequest::new(text))
            .map_err(|e| ExchangeError::Encoding(e.to_string()))?;
        let url = self.url(&format!("/nomis/{}/chat", target.id));
        tracing::debug!(target_id = %target.id, bytes = body.len(), "sending chat message");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ExchangeError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(%status, "chat response received");
        if !status.is_success() {
            return Err(ExchangeError::RemoteRejected {
                status: status.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ExchangeError::Transport(e.to_string()))?;

        let chat: ChatResponse =
            serde_json::from_str(&body).map_err(|e| ExchangeError::Malformed(e.to_string()))?;

        Ok(chat.reply_message.text)
    }
}
