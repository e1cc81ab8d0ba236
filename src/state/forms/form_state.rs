//! Form state management for the book form

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use uuid::Uuid;

use super::field::{ErrorKind, FieldState, Verdict};
use super::grammar::{IdentifierGrammar, IsbnFormat};
use super::list::{DynamicListState, FormError};
use super::mode::{FormMode, ModeController};
use super::submit::{self, SubmitError, SubmitPolicy};
use super::validators::{self, Validator};
use crate::registry::{CheckResponse, IdentifierCheck, TransportError};
use crate::state::{FieldName, Record};

/// Tunables of a form session
#[derive(Clone)]
pub struct FormOptions {
    pub grammar: Arc<dyn IdentifierGrammar>,
    pub submit_policy: SubmitPolicy,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            grammar: IsbnFormat::default().into_grammar(),
            submit_policy: SubmitPolicy::default(),
        }
    }
}

/// The uniqueness lookup for the identifier currently in the field
struct PendingCheck {
    identifier: String,
    response: BoxFuture<'static, Result<CheckResponse, TransportError>>,
}

/// One form session: field states, the authors list, the mode and the
/// identifier check in flight.
///
/// Every mutating operation revalidates what it touched and recomputes the
/// aggregate verdict before returning. At most one identifier check exists
/// at a time; changing or locking the identifier drops the previous one,
/// which cancels its lookup. The check only makes progress while the host
/// drives it through [`FormModel::next_check_result`], [`FormModel::settle`]
/// or [`FormModel::poll_check_result`].
pub struct FormModel {
    session_id: Uuid,
    fields: [FieldState; 6],
    authors: DynamicListState,
    mode: ModeController,
    aggregate: Verdict,
    checker: Arc<dyn IdentifierCheck>,
    grammar: Arc<dyn IdentifierGrammar>,
    submit_policy: SubmitPolicy,
    in_flight: Option<PendingCheck>,
}

impl fmt::Debug for FormModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormModel")
            .field("session_id", &self.session_id)
            .field("mode", &self.mode.mode())
            .field("fields", &self.fields)
            .field("authors", &self.authors)
            .field("aggregate", &self.aggregate)
            .field(
                "check_in_flight",
                &self.in_flight.as_ref().map(|check| check.identifier.as_str()),
            )
            .finish_non_exhaustive()
    }
}

fn slot(name: FieldName) -> usize {
    match name {
        FieldName::Title => 0,
        FieldName::Subtitle => 1,
        FieldName::Identifier => 2,
        FieldName::Description => 3,
        FieldName::Published => 4,
        FieldName::ThumbnailUrl => 5,
    }
}

impl FormModel {
    /// Start an empty session in Create mode
    pub fn new(checker: Arc<dyn IdentifierCheck>, options: FormOptions) -> Self {
        let mut form = Self {
            session_id: Uuid::new_v4(),
            fields: Default::default(),
            authors: DynamicListState::new(),
            mode: ModeController::default(),
            aggregate: Verdict::Valid,
            checker,
            grammar: options.grammar,
            submit_policy: options.submit_policy,
            in_flight: None,
        };
        form.mode.apply(&mut form.fields[slot(FieldName::Identifier)]);
        for name in FieldName::ALL {
            form.revalidate_field(name);
        }
        form.recompute();
        tracing::debug!(session = %form.session_id, "form session started");
        form
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn mode(&self) -> FormMode {
        self.mode.mode()
    }

    pub fn field(&self, name: FieldName) -> &FieldState {
        &self.fields[slot(name)]
    }

    pub fn authors(&self) -> &DynamicListState {
        &self.authors
    }

    /// Conjunction of every enabled field and the authors list
    pub fn aggregate(&self) -> &Verdict {
        &self.aggregate
    }

    pub fn is_valid(&self) -> bool {
        self.aggregate.is_valid()
    }

    /// True while the current identifier is waiting for its uniqueness check
    pub fn has_pending_checks(&self) -> bool {
        let identifier = self.field(FieldName::Identifier);
        identifier.is_enabled() && identifier.verdict().is_pending()
    }

    pub fn has_check_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Populate the form from an existing record and switch to Edit mode
    #[tracing::instrument(skip_all, fields(session = %self.session_id))]
    pub fn load(&mut self, record: &Record) {
        for name in FieldName::ALL {
            self.fields[slot(name)].set_value(record.get(name));
        }
        self.authors = DynamicListState::from_values(record.authors.iter().cloned());
        self.mode.on_record(true);
        self.mode.apply(&mut self.fields[slot(FieldName::Identifier)]);
        for name in FieldName::ALL {
            self.revalidate_field(name);
        }
        self.recompute();
        tracing::info!(
            identifier = %record.identifier,
            authors = self.authors.len(),
            "record loaded for editing"
        );
    }

    /// React to the host handing over a new (or no) record.
    ///
    /// Without a record the form returns to Create mode, keeping its values.
    pub fn reset(&mut self, record: Option<&Record>) {
        match record {
            Some(record) => self.load(record),
            None => {
                self.mode.on_record(false);
                self.mode.apply(&mut self.fields[slot(FieldName::Identifier)]);
                self.revalidate_field(FieldName::Identifier);
                self.recompute();
                tracing::debug!(session = %self.session_id, "form switched to create mode");
            }
        }
    }

    /// Update one field and revalidate it
    pub fn set_field_value(&mut self, name: FieldName, value: impl Into<String>) {
        self.fields[slot(name)].set_value(value);
        self.revalidate_field(name);
        self.recompute();
    }

    /// Append a blank author entry
    pub fn add_list_entry(&mut self) {
        self.authors.push_blank();
        self.recompute();
    }

    pub fn set_list_entry(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        self.authors.set(index, value)?;
        self.recompute();
        Ok(())
    }

    pub fn remove_list_entry(&mut self, index: usize) -> Result<(), FormError> {
        self.authors.remove(index)?;
        self.recompute();
        Ok(())
    }

    /// Current values of every field, disabled ones included
    pub fn raw_value(&self) -> Record {
        let mut record = Record {
            authors: self.authors.values(),
            ..Default::default()
        };
        for name in FieldName::ALL {
            record.set(name, self.field(name).value().to_string());
        }
        record
    }

    /// Build the record to hand to the host.
    ///
    /// Blank authors are dropped. With a gated policy, anything but a Valid
    /// aggregate is refused.
    #[tracing::instrument(skip_all, fields(session = %self.session_id))]
    pub fn submit(&self) -> Result<Record, SubmitError> {
        if !self.submit_policy.allows(&self.aggregate) {
            tracing::warn!(verdict = %self.aggregate, "submission refused");
            return Err(SubmitError::NotValid {
                verdict: self.aggregate.clone(),
            });
        }
        let record = submit::normalize(self.raw_value());
        tracing::info!(
            mode = self.mode().label(),
            identifier = %record.identifier,
            authors = record.authors.len(),
            "record submitted"
        );
        Ok(record)
    }

    /// Drive the identifier check to completion and apply its answer.
    ///
    /// Returns the new identifier verdict, or `None` when no check is in
    /// flight. Dropping the returned future leaves the check in place.
    pub async fn next_check_result(&mut self) -> Option<Verdict> {
        let pending = self.in_flight.as_mut()?;
        let result = pending.response.as_mut().await;
        let identifier = self.in_flight.take()?.identifier;
        Some(self.apply_result(identifier, result))
    }

    /// Wait until no identifier check is in flight
    pub async fn settle(&mut self) {
        while self.next_check_result().await.is_some() {}
    }

    /// Poll the identifier check once without waiting.
    ///
    /// Returns the new identifier verdict when the check just finished.
    pub fn poll_check_result(&mut self) -> Option<Verdict> {
        let pending = self.in_flight.as_mut()?;
        let result = pending.response.as_mut().now_or_never()?;
        let identifier = self.in_flight.take()?.identifier;
        Some(self.apply_result(identifier, result))
    }

    fn validators_for(&self, name: FieldName) -> Vec<Validator<'_>> {
        match name {
            FieldName::Title => vec![Validator::Required],
            FieldName::Identifier => {
                vec![Validator::Required, Validator::Format(&*self.grammar)]
            }
            _ => Vec::new(),
        }
    }

    fn revalidate_field(&mut self, name: FieldName) {
        let verdict = validators::compose(self.field(name).value(), &self.validators_for(name));
        if name == FieldName::Identifier {
            self.cancel_check();
            if self.field(name).is_enabled() && verdict.is_valid() {
                self.start_check();
                return;
            }
        }
        tracing::trace!(
            session = %self.session_id,
            field = name.key(),
            verdict = %verdict,
            "field revalidated"
        );
        self.fields[slot(name)].set_verdict(verdict);
    }

    fn cancel_check(&mut self) {
        if let Some(check) = self.in_flight.take() {
            tracing::debug!(
                session = %self.session_id,
                identifier = %check.identifier,
                "identifier check superseded"
            );
        }
    }

    fn start_check(&mut self) {
        let identifier = self.field(FieldName::Identifier).value().to_string();
        self.fields[slot(FieldName::Identifier)].set_verdict(Verdict::Pending);
        tracing::debug!(session = %self.session_id, %identifier, "identifier check started");

        let checker = Arc::clone(&self.checker);
        let candidate = identifier.clone();
        let response = async move { checker.check(&candidate).await }.boxed();
        self.in_flight = Some(PendingCheck {
            identifier,
            response,
        });
    }

    fn apply_result(
        &mut self,
        identifier: String,
        result: Result<CheckResponse, TransportError>,
    ) -> Verdict {
        let field = &mut self.fields[slot(FieldName::Identifier)];
        if !field.is_enabled() || field.value() != identifier {
            tracing::debug!(
                session = %self.session_id,
                %identifier,
                "discarding identifier check for a stale value"
            );
            return field.verdict().clone();
        }

        let verdict = match result {
            Ok(CheckResponse { exists: true }) => {
                Verdict::invalid(ErrorKind::DuplicateIdentifier)
            }
            Ok(CheckResponse { exists: false }) => Verdict::Valid,
            Err(err) => {
                tracing::warn!(
                    session = %self.session_id,
                    %identifier,
                    error = %err,
                    "identifier check failed"
                );
                Verdict::invalid(ErrorKind::CheckFailed)
            }
        };
        field.set_verdict(verdict.clone());
        self.recompute();
        verdict
    }

    fn recompute(&mut self) {
        let aggregate = self
            .fields
            .iter()
            .filter_map(FieldState::effective_verdict)
            .cloned()
            .fold(self.authors.verdict().clone(), Verdict::and);
        if aggregate != self.aggregate {
            tracing::debug!(
                session = %self.session_id,
                verdict = %aggregate,
                "form verdict changed"
            );
        }
        self.aggregate = aggregate;
    }
}
