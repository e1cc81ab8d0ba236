//! Book form - form state and validation engine for catalog records
//!
//! Holds the values and verdicts of a create/edit form for a book, checks
//! identifier uniqueness through a pluggable registry, and normalizes the
//! record handed back on submit.

pub mod config;
pub mod registry;
pub mod state;

pub use config::FormConfig;
pub use registry::{CheckResponse, IdentifierCheck, InMemoryRegistry, TransportError};
pub use state::{
    ErrorKind, FieldName, FieldState, FormMode, FormModel, FormOptions, Record, SubmitError,
    SubmitPolicy, Verdict,
};
