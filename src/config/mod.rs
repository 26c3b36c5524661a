mod manager;

pub use manager::{ConfigFile, ConfigManager, DEFAULT_LANGUAGE, FolioConfig, ProviderConfig};
