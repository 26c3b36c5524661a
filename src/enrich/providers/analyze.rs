//! AI-backed document analysis via the OpenAI chat completions API.

use std::borrow::Cow;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::ProviderConfig;
use crate::enrich::analysis;
use crate::enrich::error::ProviderError;
use crate::enrich::normalize;
use crate::enrich::provider::{Capability, Descriptor, Payload, Provider, Request};

use super::expect_success;

const OPENAI_ENDPOINT: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const SYSTEM_PROMPT: &str = "You are a document analysis expert. Provide a comprehensive analysis including summary, key points, and main topics.";

/// Longer documents are truncated to keep prompts inside model context.
const MAX_CONTENT_CHARS: usize = 4000;
const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.7;

pub struct OpenAiAnalyze {
    descriptor: Descriptor,
    settings: ProviderConfig,
    http: Client,
}

impl OpenAiAnalyze {
    pub const NAME: &'static str = "openai";

    pub fn new(settings: ProviderConfig, http: Client) -> Self {
        Self {
            descriptor: Descriptor {
                name: Self::NAME,
                capability: Capability::Analyze,
                priority: 10,
                rate_limit: Some(settings.rate_limit_or_default()),
            },
            settings,
            http,
        }
    }

    fn endpoint(&self) -> &str {
        self.settings
            .endpoint
            .as_deref()
            .unwrap_or(OPENAI_ENDPOINT)
    }

    fn model(&self) -> &str {
        self.settings.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessageBody<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessageBody<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[async_trait]
impl Provider for OpenAiAnalyze {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn is_available(&self) -> bool {
        self.settings.enabled() && self.settings.api_key().is_some()
    }

    async fn invoke(&self, request: &Request) -> Result<Payload, ProviderError> {
        let Request::Analyze { title, content } = request else {
            return Err(ProviderError::CapabilityMismatch);
        };
        let api_key = self.settings.api_key().ok_or(ProviderError::NotConfigured)?;

        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint().trim_end_matches('/')
        );
        let excerpt: Cow<str> = if content.chars().count() > MAX_CONTENT_CHARS {
            Cow::Owned(content.chars().take(MAX_CONTENT_CHARS).collect())
        } else {
            Cow::Borrowed(content.as_str())
        };
        let body = ChatCompletionBody {
            model: self.model(),
            messages: vec![
                ChatMessageBody {
                    role: "system",
                    content: Cow::Borrowed(SYSTEM_PROMPT),
                },
                ChatMessageBody {
                    role: "user",
                    content: Cow::Owned(format!(
                        "Analyze this document titled \"{title}\":\n\n{excerpt}"
                    )),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = expect_success(
            self.http
                .post(&url)
                .header("Authorization", format!("Bearer {api_key}"))
                .json(&body)
                .send()
                .await?,
        )
        .await?;
        let raw: normalize::ChatCompletionResponse = response.json().await?;

        let ai_text = normalize::openai_message(raw).ok_or(ProviderError::NoResult)?;
        Ok(Payload::Analysis(analysis::from_ai_text(
            title, content, &ai_text, Self::NAME,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_without_api_key() {
        let provider = OpenAiAnalyze::new(ProviderConfig::default(), Client::new());
        assert!(!provider.is_available());
    }

    #[test]
    fn test_model_defaults_and_overrides() {
        let http = Client::new();
        let plain = OpenAiAnalyze::new(ProviderConfig::default(), http.clone());
        assert_eq!(plain.model(), "gpt-4o-mini");

        let custom = OpenAiAnalyze::new(
            ProviderConfig {
                model: Some("gpt-4o".to_string()),
                ..ProviderConfig::default()
            },
            http,
        );
        assert_eq!(custom.model(), "gpt-4o");
    }

    #[tokio::test]
    async fn test_rejects_foreign_request() {
        let provider = OpenAiAnalyze::new(
            ProviderConfig {
                api_key: Some("secret".to_string()),
                ..ProviderConfig::default()
            },
            Client::new(),
        );
        let request = Request::Search {
            query: "anything".to_string(),
        };

        let result = provider.invoke(&request).await;
        assert!(matches!(result, Err(ProviderError::CapabilityMismatch)));
    }
}
