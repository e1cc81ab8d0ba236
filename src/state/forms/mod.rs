//! Form domain layer
//!
//! Field and list state, the validators that judge them, and the form model
//! that ties them together for create/edit sessions.

mod field;
mod form_state;
mod grammar;
mod list;
mod mode;
mod submit;
mod validators;

pub use field::{ErrorKind, FieldState, Verdict};
pub use form_state::{FormModel, FormOptions};
pub use grammar::{is_valid_isbn, IdentifierGrammar, IsbnFormat};
pub use list::{DynamicListState, FormError};
pub use mode::{FormMode, ModeController};
pub use submit::{normalize, SubmitError, SubmitPolicy};
pub use validators::{at_least_one_value, compose, format, required, Validator};
