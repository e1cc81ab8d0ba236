//! Variable-length list of text entries (the authors sub-form)

use super::field::{FieldState, Verdict};
use super::validators;

/// Misuse of the list operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("entry {index} is out of range (list has {len} entries)")]
    EntryOutOfRange { index: usize, len: usize },
    #[error("the list must keep at least one entry")]
    LastEntry,
}

/// Ordered list of fields that never shrinks below one entry.
///
/// The list carries its own verdict, derived from "at least one entry is
/// non-blank". Individual entries are never validated on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicListState {
    entries: Vec<FieldState>,
    verdict: Verdict,
}

impl Default for DynamicListState {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicListState {
    /// A list holding a single blank entry
    pub fn new() -> Self {
        Self::from_values(std::iter::empty::<String>())
    }

    /// Build a list from initial values, padding to one blank entry if empty
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<FieldState> =
            values.into_iter().map(FieldState::with_value).collect();
        if entries.is_empty() {
            entries.push(FieldState::new());
        }
        let mut list = Self {
            entries,
            verdict: Verdict::Valid,
        };
        list.revalidate();
        list
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FieldState] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&FieldState> {
        self.entries.get(index)
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Raw values of every entry, blanks included
    pub fn values(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.value().to_string())
            .collect()
    }

    /// Append a blank entry
    pub fn push_blank(&mut self) {
        self.entries.push(FieldState::new());
        self.revalidate();
    }

    /// Overwrite the value of one entry
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<(), FormError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(FormError::EntryOutOfRange { index, len })?;
        entry.set_value(value);
        self.revalidate();
        Ok(())
    }

    /// Remove one entry, refusing to remove the last one
    pub fn remove(&mut self, index: usize) -> Result<FieldState, FormError> {
        let len = self.entries.len();
        if index >= len {
            return Err(FormError::EntryOutOfRange { index, len });
        }
        if len == 1 {
            return Err(FormError::LastEntry);
        }
        let removed = self.entries.remove(index);
        self.revalidate();
        Ok(removed)
    }

    /// Recompute the list-level verdict
    pub fn revalidate(&mut self) {
        self.verdict = match validators::at_least_one_value(&self.entries) {
            Some(kind) => Verdict::invalid(kind),
            None => Verdict::Valid,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::ErrorKind;

    #[test]
    fn test_new_has_single_blank_entry() {
        let list = DynamicListState::new();
        assert_eq!(list.len(), 1);
        assert_eq!(list.values(), vec![String::new()]);
        assert_eq!(list.verdict(), &Verdict::invalid(ErrorKind::EmptyList));
    }

    #[test]
    fn test_from_empty_values_pads_to_one() {
        let list = DynamicListState::from_values(Vec::<String>::new());
        assert_eq!(list.len(), 1);
        assert!(!list.is_empty());
    }

    #[test]
    fn test_all_blank_then_add_value() {
        let mut list = DynamicListState::from_values(["", "  ", ""]);
        assert!(list.verdict().has_error(ErrorKind::EmptyList));

        list.push_blank();
        list.set(3, "X").unwrap();
        assert!(list.verdict().is_valid());
    }

    #[test]
    fn test_set_out_of_range() {
        let mut list = DynamicListState::new();
        let err = list.set(4, "X").unwrap_err();
        assert!(matches!(err, FormError::EntryOutOfRange { index: 4, len: 1 }));
    }

    #[test]
    fn test_remove_keeps_minimum_of_one() {
        let mut list = DynamicListState::from_values(["Alice"]);
        assert!(matches!(list.remove(0), Err(FormError::LastEntry)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_revalidates() {
        let mut list = DynamicListState::from_values(["Alice", ""]);
        assert!(list.verdict().is_valid());
        let removed = list.remove(0).unwrap();
        assert_eq!(removed.value(), "Alice");
        assert!(list.verdict().has_error(ErrorKind::EmptyList));
    }
}
