// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI-compatible chat-completion provider for medtutor.
//!
//! Implements [`ProviderAdapter`] on top of the Chat Completions API. Any
//! endpoint speaking the same wire format (Azure OpenAI, local gateways)
//! works by pointing `llm.base_url` at it.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use medtutor_config::MedTutorConfig;
use medtutor_core::types::{
    ContentBlock, ProviderMessage, ProviderRequest, ProviderResponse, TokenUsage,
};
use medtutor_core::{AdapterType, HealthStatus, MedTutorError, PluginAdapter, ProviderAdapter};
use tracing::{debug, info};

use crate::client::OpenAiClient;
use crate::types::{ChatContent, ChatMessage, ChatRequest, ContentPart, ImageUrl};

/// Environment variable consulted when the config carries no key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Chat-completion provider implementing [`ProviderAdapter`].
///
/// API key resolution order: `llm.api_key` -> `OPENAI_API_KEY` -> error.
pub struct OpenAiProvider {
    client: OpenAiClient,
}

impl OpenAiProvider {
    pub fn new(config: &MedTutorConfig) -> Result<Self, MedTutorError> {
        let api_key = resolve_api_key(config.llm.api_key.as_deref())?;
        let client = OpenAiClient::new(
            &api_key,
            config.llm.base_url.clone(),
            Duration::from_secs(config.llm.timeout_secs),
        )?;
        info!(endpoint = %config.llm.base_url, "chat-completion provider initialized");
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn with_client(client: OpenAiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PluginAdapter for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    async fn health_check(&self) -> Result<HealthStatus, MedTutorError> {
        // No probe request; it would spend tokens.
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), MedTutorError> {
        debug!("chat-completion provider shutting down");
        Ok(())
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiProvider {
    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, MedTutorError> {
        let api_request = to_chat_request(&request);
        let response = self.client.complete(&api_request).await?;

        let Some(choice) = response.choices.into_iter().next() else {
            return Err(MedTutorError::provider("chat API returned no choices"));
        };
        let usage = response.usage.unwrap_or_default();

        Ok(ProviderResponse {
            id: response.id,
            content: choice.message.content.unwrap_or_default(),
            model: response.model,
            stop_reason: choice.finish_reason,
            usage: TokenUsage {
                input_tokens: usage.prompt_tokens,
                output_tokens: usage.completion_tokens,
            },
        })
    }
}

/// Resolve the API key from config, falling back to the environment.
fn resolve_api_key(config_key: Option<&str>) -> Result<String, MedTutorError> {
    pick_api_key(config_key, std::env::var(API_KEY_ENV).ok())
}

fn pick_api_key(
    config_key: Option<&str>,
    env_key: Option<String>,
) -> Result<String, MedTutorError> {
    config_key
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .or_else(|| env_key.filter(|k| !k.is_empty()))
        .ok_or_else(|| {
            MedTutorError::Config(format!(
                "API key not found. Set llm.api_key in config or the {API_KEY_ENV} environment variable."
            ))
        })
}

/// Map a provider-neutral request onto the chat wire format. The system
/// prompt becomes a leading `system` message.
fn to_chat_request(request: &ProviderRequest) -> ChatRequest {
    let system = request.system_prompt.as_ref().map(|prompt| ChatMessage {
        role: "system".to_string(),
        content: ChatContent::Text(prompt.clone()),
    });

    let messages = system
        .into_iter()
        .chain(request.messages.iter().map(convert_message))
        .collect();

    ChatRequest {
        model: request.model.clone(),
        messages,
        temperature: request.temperature,
        max_tokens: request.max_tokens,
        top_p: request.top_p,
    }
}

fn convert_message(message: &ProviderMessage) -> ChatMessage {
    let content = match message.content.as_slice() {
        [ContentBlock::Text { text }] => ChatContent::Text(text.clone()),
        blocks => ChatContent::Parts(
            blocks
                .iter()
                .map(|block| match block {
                    ContentBlock::Text { text } => ContentPart::Text { text: text.clone() },
                    ContentBlock::Image { media_type, data } => ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("data:{media_type};base64,{data}"),
                        },
                    },
                })
                .collect(),
        ),
    };
    ChatMessage {
        role: message.role.clone(),
        content,
    }
}
