//! In-memory identifier registry
//!
//! Backs the uniqueness check with a fixed set of known identifiers, loaded
//! from a JSON array on disk or built in code.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::traits::{CheckResponse, IdentifierCheck, TransportError};

/// Registry holding the identifiers that already exist
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    known: HashSet<String>,
}

impl InMemoryRegistry {
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            known: identifiers
                .into_iter()
                .map(|id| normalize(id.as_ref()))
                .collect(),
        }
    }

    /// Load a registry from a JSON array of identifiers
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read registry {}", path.display()))?;
        let identifiers: Vec<String> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse registry {}", path.display()))?;
        tracing::debug!(count = identifiers.len(), "loaded identifier registry");
        Ok(Self::new(identifiers))
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.known.contains(&normalize(identifier))
    }
}

/// Dashes and case do not make two ISBNs different
fn normalize(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[async_trait]
impl IdentifierCheck for InMemoryRegistry {
    async fn check(&self, identifier: &str) -> Result<CheckResponse, TransportError> {
        Ok(CheckResponse {
            exists: self.contains(identifier),
        })
    }
}
