//! Submission normalization

use serde::{Deserialize, Serialize};

use crate::state::Record;

use super::field::Verdict;

/// Whether `submit` refuses to emit a record that is not valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPolicy {
    /// Only a Valid form may be submitted
    #[default]
    Gated,
    /// Emit whatever the form holds
    Ungated,
}

impl SubmitPolicy {
    pub fn allows(&self, aggregate: &Verdict) -> bool {
        match self {
            Self::Gated => aggregate.is_valid(),
            Self::Ungated => true,
        }
    }
}

/// Error returned when a gated submit is refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("form is not valid: {verdict}")]
    NotValid { verdict: Verdict },
}

/// Turn the raw form value into the record handed to the host.
///
/// Blank authors are dropped; the rest keep their order and their text.
pub fn normalize(raw: Record) -> Record {
    let authors = raw
        .authors
        .into_iter()
        .filter(|author| !author.trim().is_empty())
        .collect();
    Record { authors, ..raw }
}
