use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::document::DEFAULT_WORDS_PER_PAGE;
use crate::enrich::RateLimit;
use crate::paths;

/// Default source language for ingested documents (ISO 639-1 code).
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default settings in the `[folio]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Default source language for ingested documents (ISO 639-1 code).
    pub language: Option<String>,
    /// Page size in words.
    pub words_per_page: Option<usize>,
}

/// One `[providers.NAME]` section.
///
/// Every field is optional; providers fill the gaps with their own
/// defaults. A section for an unknown provider name is preserved on
/// save but never read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Override for the provider's default endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Service region (Azure Translator).
    #[serde(default)]
    pub region: Option<String>,
    /// Programmable Search engine id (Google Search).
    #[serde(default)]
    pub engine_id: Option<String>,
    /// Model override (AI-backed providers).
    #[serde(default)]
    pub model: Option<String>,
    /// Rate-limit budget override.
    #[serde(default)]
    pub max_requests: Option<usize>,
    /// Rate-limit window override, in seconds.
    #[serde(default)]
    pub window_secs: Option<u64>,
    /// Set to `false` to take the provider out of every chain.
    #[serde(default)]
    pub enabled: Option<bool>,
}

impl ProviderConfig {
    /// Gets the API key, preferring environment variable over config file.
    /// Empty values and `YOUR_…` placeholders count as unset.
    pub fn api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && is_usable_key(&key)
        {
            return Some(key);
        }
        self.api_key
            .as_ref()
            .filter(|key| is_usable_key(key))
            .cloned()
    }

    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Fills in the provider's conventional environment variable when the
    /// section does not name one, so keys work without a config file.
    #[must_use]
    pub fn with_default_env(mut self, env_var: &str) -> Self {
        if self.api_key_env.is_none() {
            self.api_key_env = Some(env_var.to_string());
        }
        self
    }

    /// The provider's rate-limit budget with config overrides applied.
    pub fn rate_limit_or_default(&self) -> RateLimit {
        let default = RateLimit::default();
        RateLimit {
            max_requests: self.max_requests.unwrap_or(default.max_requests),
            window: self
                .window_secs
                .map_or(default.window, Duration::from_secs),
        }
    }
}

/// Keys pasted straight from provider documentation count as unset.
fn is_usable_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && !key.starts_with("YOUR_")
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/folio/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub folio: FolioConfig,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

impl ConfigFile {
    /// Settings section for a provider, or an empty one when absent.
    pub fn provider(&self, name: &str) -> ProviderConfig {
        self.providers.get(name).cloned().unwrap_or_default()
    }

    pub fn language(&self) -> &str {
        self.folio.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn words_per_page(&self) -> usize {
        self.folio.words_per_page.unwrap_or(DEFAULT_WORDS_PER_PAGE)
    }
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/folio/config.toml`
    /// or `~/.config/folio/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("config.toml"),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let mut providers = HashMap::new();
        providers.insert(
            "deepl".to_string(),
            ProviderConfig {
                api_key: Some("key-123".to_string()),
                ..ProviderConfig::default()
            },
        );
        providers.insert(
            "wikipedia".to_string(),
            ProviderConfig {
                max_requests: Some(5),
                window_secs: Some(30),
                ..ProviderConfig::default()
            },
        );

        let config = ConfigFile {
            folio: FolioConfig {
                language: Some("fr".to_string()),
                words_per_page: Some(250),
            },
            providers,
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded.language(), "fr");
        assert_eq!(loaded.words_per_page(), 250);
        assert_eq!(loaded.provider("deepl").api_key(), Some("key-123".to_string()));
        assert_eq!(
            loaded.provider("wikipedia").rate_limit_or_default(),
            RateLimit {
                max_requests: 5,
                window: Duration::from_secs(30),
            }
        );
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let result = manager.load();
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_without_config() {
        let config = ConfigFile::default();

        assert_eq!(config.language(), "en");
        assert_eq!(config.words_per_page(), DEFAULT_WORDS_PER_PAGE);
        // A missing section behaves like an empty one.
        let section = config.provider("google_translate");
        assert!(section.api_key().is_none());
        assert!(section.enabled());
    }

    #[test]
    #[serial]
    fn test_provider_api_key_from_env() {
        // SAFETY: This test runs serialized and only modifies a test-specific env var
        unsafe {
            std::env::set_var("FOLIO_TEST_API_KEY", "env-key-value");
        }

        let provider = ProviderConfig {
            api_key: Some("fallback-key".to_string()),
            api_key_env: Some("FOLIO_TEST_API_KEY".to_string()),
            ..ProviderConfig::default()
        };

        // Environment variable takes priority
        assert_eq!(provider.api_key(), Some("env-key-value".to_string()));

        // SAFETY: Cleanup test env var
        unsafe {
            std::env::remove_var("FOLIO_TEST_API_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_provider_api_key_fallback() {
        // SAFETY: This test runs serialized and only modifies a test-specific env var
        unsafe {
            std::env::remove_var("FOLIO_TEST_NONEXISTENT_KEY");
        }

        let provider = ProviderConfig {
            api_key: Some("fallback-key".to_string()),
            api_key_env: Some("FOLIO_TEST_NONEXISTENT_KEY".to_string()),
            ..ProviderConfig::default()
        };

        // Falls back to api_key when env var not set
        assert_eq!(provider.api_key(), Some("fallback-key".to_string()));
    }

    #[test]
    fn test_placeholder_keys_count_as_unset() {
        let placeholder = ProviderConfig {
            api_key: Some("YOUR_API_KEY_HERE".to_string()),
            ..ProviderConfig::default()
        };
        assert_eq!(placeholder.api_key(), None);

        let blank = ProviderConfig {
            api_key: Some("   ".to_string()),
            ..ProviderConfig::default()
        };
        assert_eq!(blank.api_key(), None);
    }

    #[test]
    #[serial]
    fn test_placeholder_env_key_falls_through_to_literal() {
        // SAFETY: This test runs serialized and only modifies a test-specific env var
        unsafe {
            std::env::set_var("FOLIO_TEST_PLACEHOLDER_KEY", "YOUR_KEY");
        }

        let provider = ProviderConfig {
            api_key: Some("real-key".to_string()),
            api_key_env: Some("FOLIO_TEST_PLACEHOLDER_KEY".to_string()),
            ..ProviderConfig::default()
        };

        assert_eq!(provider.api_key(), Some("real-key".to_string()));

        // SAFETY: Cleanup test env var
        unsafe {
            std::env::remove_var("FOLIO_TEST_PLACEHOLDER_KEY");
        }
    }

    #[test]
    fn test_with_default_env_keeps_explicit_choice() {
        let explicit = ProviderConfig {
            api_key_env: Some("MY_KEY".to_string()),
            ..ProviderConfig::default()
        }
        .with_default_env("CONVENTIONAL_KEY");
        assert_eq!(explicit.api_key_env.as_deref(), Some("MY_KEY"));

        let defaulted = ProviderConfig::default().with_default_env("CONVENTIONAL_KEY");
        assert_eq!(defaulted.api_key_env.as_deref(), Some("CONVENTIONAL_KEY"));
    }

    #[test]
    fn test_unknown_provider_sections_survive_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let mut providers = HashMap::new();
        providers.insert(
            "somebody_elses_service".to_string(),
            ProviderConfig {
                endpoint: Some("https://example.com".to_string()),
                ..ProviderConfig::default()
            },
        );
        let config = ConfigFile {
            folio: FolioConfig::default(),
            providers,
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert!(loaded.providers.contains_key("somebody_elses_service"));
    }
}
