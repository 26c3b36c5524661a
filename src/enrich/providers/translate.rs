//! Translation providers: Google Translate, Azure Translator, DeepL.

use std::borrow::Cow;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::ProviderConfig;
use crate::enrich::error::ProviderError;
use crate::enrich::normalize;
use crate::enrich::provider::{Capability, Descriptor, Payload, Provider, Request};
use crate::enrich::types::Translation;

use super::expect_success;

const GOOGLE_TRANSLATE_ENDPOINT: &str = "https://translation.googleapis.com";
const AZURE_TRANSLATOR_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com";
const DEEPL_ENDPOINT: &str = "https://api-free.deepl.com";

/// Google Cloud Translation v2. First choice for translation.
pub struct GoogleTranslate {
    descriptor: Descriptor,
    settings: ProviderConfig,
    http: Client,
}

impl GoogleTranslate {
    pub const NAME: &'static str = "google_translate";

    pub fn new(settings: ProviderConfig, http: Client) -> Self {
        Self {
            descriptor: Descriptor {
                name: Self::NAME,
                capability: Capability::Translate,
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
            .unwrap_or(GOOGLE_TRANSLATE_ENDPOINT)
    }
}

#[derive(Debug, Serialize)]
struct GoogleTranslateBody<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
}

#[async_trait]
impl Provider for GoogleTranslate {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn is_available(&self) -> bool {
        self.settings.enabled() && self.settings.api_key().is_some()
    }

    async fn invoke(&self, request: &Request) -> Result<Payload, ProviderError> {
        let Request::Translate {
            text,
            source,
            target,
        } = request
        else {
            return Err(ProviderError::CapabilityMismatch);
        };
        let api_key = self.settings.api_key().ok_or(ProviderError::NotConfigured)?;

        let url = format!(
            "{}/language/translate/v2?key={api_key}",
            self.endpoint().trim_end_matches('/')
        );
        let body = GoogleTranslateBody {
            q: text,
            source,
            target,
            format: "text",
        };

        let response = expect_success(self.http.post(&url).json(&body).send().await?).await?;
        let raw: normalize::GoogleTranslateResponse = response.json().await?;

        let text = normalize::google_translation(raw).ok_or(ProviderError::NoResult)?;
        Ok(Payload::Translation(Translation {
            text,
            provider: Self::NAME.to_string(),
        }))
    }
}

/// Azure Cognitive Services Translator v3.
pub struct AzureTranslator {
    descriptor: Descriptor,
    settings: ProviderConfig,
    http: Client,
}

impl AzureTranslator {
    pub const NAME: &'static str = "azure_translator";

    pub fn new(settings: ProviderConfig, http: Client) -> Self {
        Self {
            descriptor: Descriptor {
                name: Self::NAME,
                capability: Capability::Translate,
                priority: 20,
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
            .unwrap_or(AZURE_TRANSLATOR_ENDPOINT)
    }

    fn region(&self) -> &str {
        self.settings.region.as_deref().unwrap_or("global")
    }
}

#[derive(Debug, Serialize)]
struct AzureTranslateBody<'a> {
    #[serde(rename = "Text")]
    text: &'a str,
}

#[async_trait]
impl Provider for AzureTranslator {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn is_available(&self) -> bool {
        self.settings.enabled() && self.settings.api_key().is_some()
    }

    async fn invoke(&self, request: &Request) -> Result<Payload, ProviderError> {
        let Request::Translate {
            text,
            source,
            target,
        } = request
        else {
            return Err(ProviderError::CapabilityMismatch);
        };
        let api_key = self.settings.api_key().ok_or(ProviderError::NotConfigured)?;

        let url = format!(
            "{}/translate?api-version=3.0&from={source}&to={target}",
            self.endpoint().trim_end_matches('/')
        );
        let body = [AzureTranslateBody { text }];

        let response = expect_success(
            self.http
                .post(&url)
                .header("Ocp-Apim-Subscription-Key", api_key)
                .header("Ocp-Apim-Subscription-Region", self.region())
                .json(&body)
                .send()
                .await?,
        )
        .await?;
        let raw: Vec<normalize::AzureTranslateItem> = response.json().await?;

        let text = normalize::azure_translation(raw).ok_or(ProviderError::NoResult)?;
        Ok(Payload::Translation(Translation {
            text,
            provider: Self::NAME.to_string(),
        }))
    }
}

/// DeepL API (free-tier endpoint by default).
pub struct Deepl {
    descriptor: Descriptor,
    settings: ProviderConfig,
    http: Client,
}

impl Deepl {
    pub const NAME: &'static str = "deepl";

    pub fn new(settings: ProviderConfig, http: Client) -> Self {
        Self {
            descriptor: Descriptor {
                name: Self::NAME,
                capability: Capability::Translate,
                priority: 30,
                rate_limit: Some(settings.rate_limit_or_default()),
            },
            settings,
            http,
        }
    }

    fn endpoint(&self) -> &str {
        self.settings.endpoint.as_deref().unwrap_or(DEEPL_ENDPOINT)
    }
}

#[async_trait]
impl Provider for Deepl {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn is_available(&self) -> bool {
        self.settings.enabled() && self.settings.api_key().is_some()
    }

    async fn invoke(&self, request: &Request) -> Result<Payload, ProviderError> {
        let Request::Translate {
            text,
            source,
            target,
        } = request
        else {
            return Err(ProviderError::CapabilityMismatch);
        };
        let api_key = self.settings.api_key().ok_or(ProviderError::NotConfigured)?;

        let url = format!("{}/v2/translate", self.endpoint().trim_end_matches('/'));
        // DeepL expects upper-cased language codes in form fields.
        let form = [
            ("text", Cow::Borrowed(text.as_str())),
            ("source_lang", Cow::Owned(source.to_uppercase())),
            ("target_lang", Cow::Owned(target.to_uppercase())),
        ];

        let response = expect_success(
            self.http
                .post(&url)
                .header("Authorization", format!("DeepL-Auth-Key {api_key}"))
                .form(&form)
                .send()
                .await?,
        )
        .await?;
        let raw: normalize::DeeplResponse = response.json().await?;

        let text = normalize::deepl_translation(raw).ok_or(ProviderError::NoResult)?;
        Ok(Payload::Translation(Translation {
            text,
            provider: Self::NAME.to_string(),
        }))
    }
}
