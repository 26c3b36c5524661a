//! Raw provider response shapes and their canonical mappings.
//!
//! One deserialize struct per wire format, one pure function per
//! (provider, capability) pair. Every field that a provider might omit is
//! optional here; a missing field maps to "no result", never to a panic
//! or a half-filled struct. AI analysis is the one composite case: the
//! message text extracted here is merged with local statistics in
//! [`crate::enrich::analysis::from_ai_text`].

use serde::Deserialize;

use crate::enrich::types::{Definition, SearchItem};

// ---------------------------------------------------------------------------
// Google Translate v2

#[derive(Debug, Deserialize)]
pub struct GoogleTranslateResponse {
    pub data: Option<GoogleTranslateData>,
}

#[derive(Debug, Deserialize)]
pub struct GoogleTranslateData {
    #[serde(default)]
    pub translations: Vec<GoogleTranslationItem>,
}

#[derive(Debug, Deserialize)]
pub struct GoogleTranslationItem {
    #[serde(rename = "translatedText")]
    pub translated_text: Option<String>,
}

pub fn google_translation(raw: GoogleTranslateResponse) -> Option<String> {
    raw.data?
        .translations
        .into_iter()
        .next()?
        .translated_text
        .filter(|text| !text.is_empty())
}

// ---------------------------------------------------------------------------
// Azure Translator v3 (answers with an array of translation groups)

#[derive(Debug, Deserialize)]
pub struct AzureTranslateItem {
    #[serde(default)]
    pub translations: Vec<AzureTranslation>,
}

#[derive(Debug, Deserialize)]
pub struct AzureTranslation {
    pub text: Option<String>,
}

pub fn azure_translation(raw: Vec<AzureTranslateItem>) -> Option<String> {
    raw.into_iter()
        .next()?
        .translations
        .into_iter()
        .next()?
        .text
        .filter(|text| !text.is_empty())
}

// ---------------------------------------------------------------------------
// DeepL

#[derive(Debug, Deserialize)]
pub struct DeeplResponse {
    #[serde(default)]
    pub translations: Vec<DeeplTranslation>,
}

#[derive(Debug, Deserialize)]
pub struct DeeplTranslation {
    pub text: Option<String>,
}

pub fn deepl_translation(raw: DeeplResponse) -> Option<String> {
    raw.translations
        .into_iter()
        .next()?
        .text
        .filter(|text| !text.is_empty())
}

// ---------------------------------------------------------------------------
// Wikipedia REST page summary (shared by search and define)

#[derive(Debug, Deserialize)]
pub struct WikipediaSummary {
    pub title: Option<String>,
    pub extract: Option<String>,
    pub content_urls: Option<WikipediaContentUrls>,
}

#[derive(Debug, Deserialize)]
pub struct WikipediaContentUrls {
    pub desktop: Option<WikipediaDesktopUrls>,
}

#[derive(Debug, Deserialize)]
pub struct WikipediaDesktopUrls {
    pub page: Option<String>,
}

impl WikipediaSummary {
    fn page_url(&self) -> Option<String> {
        self.content_urls.as_ref()?.desktop.as_ref()?.page.clone()
    }
}

/// Wikipedia summary as a single search item.
pub fn wikipedia_search_item(query: &str, raw: WikipediaSummary) -> Option<SearchItem> {
    let snippet = raw.extract.clone().filter(|e| !e.is_empty())?;
    let url = raw.page_url().unwrap_or_else(|| {
        format!("https://en.wikipedia.org/wiki/{}", urlencoding::encode(query))
    });
    Some(SearchItem {
        title: raw.title.unwrap_or_else(|| query.to_string()),
        snippet,
        url,
        source: "Wikipedia".to_string(),
    })
}

/// Wikipedia summary as a dictionary definition.
pub fn wikipedia_definition(word: &str, raw: WikipediaSummary) -> Option<Definition> {
    let definition = raw.extract.clone().filter(|e| !e.is_empty())?;
    let url = raw.page_url();
    Some(Definition {
        word: raw.title.unwrap_or_else(|| word.to_string()),
        definition,
        source: "Wikipedia".to_string(),
        url,
    })
}

// ---------------------------------------------------------------------------
// Google Programmable Search

#[derive(Debug, Deserialize)]
pub struct GoogleSearchResponse {
    #[serde(default)]
    pub items: Vec<GoogleSearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct GoogleSearchItem {
    pub title: Option<String>,
    pub snippet: Option<String>,
    pub link: Option<String>,
}

/// Google search hits; items missing any field are dropped.
pub fn google_search_items(raw: GoogleSearchResponse) -> Vec<SearchItem> {
    raw.items
        .into_iter()
        .filter_map(|item| {
            Some(SearchItem {
                title: item.title?,
                snippet: item.snippet?,
                url: item.link?,
                source: "Google Search".to_string(),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// DuckDuckGo Instant Answer

#[derive(Debug, Deserialize)]
pub struct DuckDuckGoResponse {
    #[serde(rename = "AbstractText")]
    pub abstract_text: Option<String>,
    #[serde(rename = "AbstractURL")]
    pub abstract_url: Option<String>,
}

pub fn duckduckgo_definition(word: &str, raw: DuckDuckGoResponse) -> Option<Definition> {
    let definition = raw.abstract_text.filter(|t| !t.is_empty())?;
    Some(Definition {
        word: word.to_string(),
        definition,
        source: "DuckDuckGo".to_string(),
        url: raw.abstract_url.filter(|u| !u.is_empty()),
    })
}

// ---------------------------------------------------------------------------
// OpenAI chat completions

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    pub content: Option<String>,
}

/// The assistant message text from the first choice.
pub fn openai_message(raw: ChatCompletionResponse) -> Option<String> {
    raw.choices
        .into_iter()
        .next()?
        .message?
        .content
        .filter(|text| !text.trim().is_empty())
}
