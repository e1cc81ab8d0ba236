//! Configuration handling for the book form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::{FormOptions, IsbnFormat, SubmitPolicy};

/// Environment variable overriding the identifier grammar
const IDENTIFIER_FORMAT_ENV: &str = "BOOK_FORM_IDENTIFIER_FORMAT";

/// User configuration for form sessions
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Identifier grammar key (`isbn`, `isbn-strict` or `any`)
    pub identifier_format: Option<String>,
    /// Whether submit requires a valid form
    pub submit_policy: Option<SubmitPolicy>,
    /// JSON file listing identifiers that already exist
    pub registry_path: Option<PathBuf>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "bookmonkey", "book-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };

        if let Ok(format) = std::env::var(IDENTIFIER_FORMAT_ENV) {
            config.identifier_format = Some(format);
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// The configured grammar, falling back to the default on unknown keys
    pub fn identifier_format(&self) -> IsbnFormat {
        match self.identifier_format.as_deref() {
            None => IsbnFormat::default(),
            Some(key) => IsbnFormat::from_key(key).unwrap_or_else(|| {
                tracing::warn!(
                    key,
                    fallback = %IsbnFormat::default(),
                    "unknown identifier format, using default"
                );
                IsbnFormat::default()
            }),
        }
    }

    /// Session options derived from this configuration
    pub fn form_options(&self) -> FormOptions {
        FormOptions {
            grammar: self.identifier_format().into_grammar(),
            submit_policy: self.submit_policy.unwrap_or_default(),
        }
    }
}
