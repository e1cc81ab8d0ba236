//! Identifier grammars
//!
//! The engine treats the identifier format as an opaque predicate. Hosts can
//! plug in any `Fn(&str) -> bool`, or pick one of the built-in ISBN rules by
//! its configuration key.

use std::fmt;
use std::sync::Arc;

/// Predicate deciding whether a non-empty identifier is well formed
pub trait IdentifierGrammar: Send + Sync {
    fn matches(&self, identifier: &str) -> bool;
}

impl<F> IdentifierGrammar for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn matches(&self, identifier: &str) -> bool {
        self(identifier)
    }
}

/// Built-in identifier grammars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IsbnFormat {
    /// 10 or 13 characters once dashes are removed
    #[default]
    Length,
    /// Full ISBN-10 / ISBN-13 with checksum
    Checksum,
    /// Anything non-empty
    Any,
}

impl IsbnFormat {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "isbn" => Some(Self::Length),
            "isbn-strict" => Some(Self::Checksum),
            "any" => Some(Self::Any),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Length => "isbn",
            Self::Checksum => "isbn-strict",
            Self::Any => "any",
        }
    }

    pub fn into_grammar(self) -> Arc<dyn IdentifierGrammar> {
        Arc::new(self)
    }
}

impl fmt::Display for IsbnFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl IdentifierGrammar for IsbnFormat {
    fn matches(&self, identifier: &str) -> bool {
        match self {
            Self::Length => {
                let len = identifier.chars().filter(|c| *c != '-').count();
                len == 10 || len == 13
            }
            Self::Checksum => is_valid_isbn(identifier),
            Self::Any => true,
        }
    }
}

/// Check an ISBN-10 or ISBN-13 including its check digit.
///
/// Dashes and spaces are ignored.
pub fn is_valid_isbn(identifier: &str) -> bool {
    let compact: Vec<char> = identifier
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();
    match compact.len() {
        10 => is_valid_isbn10(&compact),
        13 => is_valid_isbn13(&compact),
        _ => false,
    }
}

fn is_valid_isbn10(chars: &[char]) -> bool {
    let mut sum = 0u32;
    for (i, c) in chars.iter().enumerate() {
        let digit = match c.to_digit(10) {
            Some(d) => d,
            // X stands for 10 and only as the check digit
            None if i == 9 && (*c == 'X' || *c == 'x') => 10,
            None => return false,
        };
        sum += digit * (10 - i as u32);
    }
    sum % 11 == 0
}

fn is_valid_isbn13(chars: &[char]) -> bool {
    let mut sum = 0u32;
    for (i, c) in chars.iter().enumerate() {
        let Some(digit) = c.to_digit(10) else {
            return false;
        };
        sum += if i % 2 == 0 { digit } else { digit * 3 };
    }
    sum % 10 == 0
}
