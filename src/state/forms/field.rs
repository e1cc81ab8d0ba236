//! Form field value objects

use std::collections::BTreeSet;
use std::fmt;

/// Why a field or list failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// Required value is blank
    Missing,
    /// Identifier does not match the configured grammar
    BadFormat,
    /// Every author entry is blank
    EmptyList,
    /// The registry already knows this identifier
    DuplicateIdentifier,
    /// The uniqueness lookup could not be completed
    CheckFailed,
}

impl ErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Missing => "a value is required",
            Self::BadFormat => "the value is not a valid ISBN",
            Self::EmptyList => "at least one entry must be filled in",
            Self::DuplicateIdentifier => "this ISBN already exists",
            Self::CheckFailed => "the ISBN could not be checked",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Validation outcome for a field, a list, or the whole form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Verdict {
    #[default]
    Valid,
    Invalid(BTreeSet<ErrorKind>),
    Pending,
}

impl Verdict {
    pub fn invalid(kind: ErrorKind) -> Self {
        Verdict::Invalid(BTreeSet::from([kind]))
    }

    /// Build a verdict from the failures of a set of synchronous validators
    pub fn from_errors(errors: BTreeSet<ErrorKind>) -> Self {
        if errors.is_empty() {
            Verdict::Valid
        } else {
            Verdict::Invalid(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Verdict::Pending)
    }

    pub fn errors(&self) -> Option<&BTreeSet<ErrorKind>> {
        match self {
            Verdict::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn has_error(&self, kind: ErrorKind) -> bool {
        self.errors().is_some_and(|errors| errors.contains(&kind))
    }

    /// Conjunction of two verdicts.
    ///
    /// Invalid absorbs everything and unions its errors, Pending absorbs Valid.
    pub fn and(self, other: Verdict) -> Verdict {
        match (self, other) {
            (Verdict::Invalid(mut a), Verdict::Invalid(b)) => {
                a.extend(b);
                Verdict::Invalid(a)
            }
            (invalid @ Verdict::Invalid(_), _) | (_, invalid @ Verdict::Invalid(_)) => invalid,
            (Verdict::Pending, _) | (_, Verdict::Pending) => Verdict::Pending,
            (Verdict::Valid, Verdict::Valid) => Verdict::Valid,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => f.write_str("valid"),
            Verdict::Pending => f.write_str("pending"),
            Verdict::Invalid(errors) => {
                let messages: Vec<&str> = errors.iter().map(ErrorKind::message).collect();
                write!(f, "invalid ({})", messages.join(", "))
            }
        }
    }
}

/// A single scalar form field: value, validity and enabled flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    enabled: bool,
    verdict: Verdict,
}

impl Default for FieldState {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldState {
    /// Create an empty, enabled field
    pub fn new() -> Self {
        Self::with_value(String::new())
    }

    /// Create an enabled field with an initial value
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            enabled: true,
            verdict: Verdict::Valid,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    pub fn set_verdict(&mut self, verdict: Verdict) {
        self.verdict = verdict;
    }

    /// True when the trimmed value is empty
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// The verdict this field contributes to the aggregate, `None` when disabled
    pub fn effective_verdict(&self) -> Option<&Verdict> {
        self.enabled.then_some(&self.verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod verdict {
        use super::*;

        #[test]
        fn test_from_errors_empty_is_valid() {
            assert_eq!(Verdict::from_errors(BTreeSet::new()), Verdict::Valid);
        }

        #[test]
        fn test_and_unions_errors() {
            let a = Verdict::invalid(ErrorKind::Missing);
            let b = Verdict::invalid(ErrorKind::EmptyList);
            let combined = a.and(b);
            assert!(combined.has_error(ErrorKind::Missing));
            assert!(combined.has_error(ErrorKind::EmptyList));
        }

        #[test]
        fn test_pending_absorbs_valid() {
            assert_eq!(Verdict::Valid.and(Verdict::Pending), Verdict::Pending);
            assert_eq!(Verdict::Pending.and(Verdict::Valid), Verdict::Pending);
        }

        #[test]
        fn test_invalid_absorbs_pending() {
            let combined = Verdict::Pending.and(Verdict::invalid(ErrorKind::BadFormat));
            assert_eq!(combined, Verdict::invalid(ErrorKind::BadFormat));
        }

        #[test]
        fn test_display() {
            assert_eq!(Verdict::Valid.to_string(), "valid");
            assert_eq!(
                Verdict::invalid(ErrorKind::Missing).to_string(),
                "invalid (a value is required)"
            );
        }
    }

    mod field_state {
        use super::*;

        #[test]
        fn test_new_is_empty_enabled_valid() {
            let field = FieldState::new();
            assert_eq!(field.value(), "");
            assert!(field.is_enabled());
            assert!(field.verdict().is_valid());
        }

        #[test]
        fn test_is_blank_trims() {
            assert!(FieldState::with_value("   ").is_blank());
            assert!(!FieldState::with_value(" a ").is_blank());
        }

        #[test]
        fn test_disabled_field_has_no_effective_verdict() {
            let mut field = FieldState::with_value("978");
            field.set_verdict(Verdict::invalid(ErrorKind::BadFormat));
            field.set_enabled(false);
            assert!(field.effective_verdict().is_none());
            assert_eq!(field.value(), "978");
        }
    }
}
