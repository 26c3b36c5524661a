use anyhow::{Context, Result};
use rusqlite::Connection;
use sha2::{Digest, Sha256};
use std::path::PathBuf;

use crate::enrich::Translation;
use crate::paths;

/// One translation lookup, as the cache identifies it.
#[derive(Debug, Clone, Copy)]
pub struct CacheRequest<'a> {
    pub text: &'a str,
    pub source: &'a str,
    pub target: &'a str,
}

impl CacheRequest<'_> {
    /// Key over a canonical JSON rendering, so logically equal requests
    /// share an entry no matter which provider answered first.
    pub fn cache_key(&self) -> String {
        let cache_input = serde_json::json!({
            "text": self.text,
            "source": self.source,
            "target": self.target,
        });

        let mut hasher = Sha256::new();
        hasher.update(cache_input.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

pub struct CacheManager {
    db_path: PathBuf,
}

impl CacheManager {
    pub fn new() -> Result<Self> {
        let cache_dir = paths::cache_dir();

        std::fs::create_dir_all(&cache_dir).with_context(|| {
            format!("Failed to create cache directory: {}", cache_dir.display())
        })?;

        let db_path = cache_dir.join("cache.db");
        let manager = Self { db_path };

        manager.init_db()?;

        Ok(manager)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS translations (
                cache_key TEXT PRIMARY KEY,
                source_text TEXT NOT NULL,
                translated_text TEXT NOT NULL,
                provider TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                accessed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create translations table")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .with_context(|| format!("Failed to open cache database: {}", self.db_path.display()))
    }

    /// Looks up a translation, touching `accessed_at` on a hit. The hit
    /// keeps the attribution of whichever provider originally answered.
    pub fn get(&self, request: &CacheRequest) -> Result<Option<Translation>> {
        let cache_key = request.cache_key();
        let conn = self.connect()?;

        let mut stmt = conn
            .prepare("SELECT translated_text, provider FROM translations WHERE cache_key = ?1")?;

        let result: Option<Translation> = stmt
            .query_row([&cache_key], |row| {
                Ok(Translation {
                    text: row.get(0)?,
                    provider: row.get(1)?,
                })
            })
            .ok();

        if result.is_some() {
            conn.execute(
                "UPDATE translations SET accessed_at = CURRENT_TIMESTAMP WHERE cache_key = ?1",
                [&cache_key],
            )?;
        }

        Ok(result)
    }

    pub fn put(&self, request: &CacheRequest, translation: &Translation) -> Result<()> {
        let cache_key = request.cache_key();
        let conn = self.connect()?;

        conn.execute(
            "INSERT OR REPLACE INTO translations
             (cache_key, source_text, translated_text, provider)
             VALUES (?1, ?2, ?3, ?4)",
            [
                cache_key.as_str(),
                request.text,
                &translation.text,
                &translation.provider,
            ],
        )
        .context("Failed to insert translation into cache")?;

        Ok(())
    }
}
