//! Synchronous validators
//!
//! Every validator is a pure function returning the error it detected, if
//! any. Field verdicts are the conjunction of their validators.

use std::collections::BTreeSet;

use super::field::{ErrorKind, FieldState, Verdict};
use super::grammar::IdentifierGrammar;

/// Fails with `Missing` when the trimmed value is empty
pub fn required(value: &str) -> Option<ErrorKind> {
    value.trim().is_empty().then_some(ErrorKind::Missing)
}

/// Fails with `BadFormat` when a non-blank value does not match the grammar
pub fn format(value: &str, grammar: &dyn IdentifierGrammar) -> Option<ErrorKind> {
    if value.trim().is_empty() || grammar.matches(value) {
        None
    } else {
        Some(ErrorKind::BadFormat)
    }
}

/// Fails with `EmptyList` when every entry is blank
pub fn at_least_one_value(entries: &[FieldState]) -> Option<ErrorKind> {
    entries
        .iter()
        .all(FieldState::is_blank)
        .then_some(ErrorKind::EmptyList)
}

/// Synchronous validator attached to a scalar field
#[derive(Clone, Copy)]
pub enum Validator<'a> {
    Required,
    Format(&'a dyn IdentifierGrammar),
}

impl Validator<'_> {
    pub fn run(&self, value: &str) -> Option<ErrorKind> {
        match self {
            Validator::Required => required(value),
            Validator::Format(grammar) => format(value, *grammar),
        }
    }
}

/// Run a set of validators and fold their failures into a verdict
pub fn compose(value: &str, validators: &[Validator<'_>]) -> Verdict {
    let errors: BTreeSet<ErrorKind> = validators
        .iter()
        .filter_map(|validator| validator.run(value))
        .collect();
    Verdict::from_errors(errors)
}
