//! Form session state module

mod forms;
mod record;

pub use forms::*;
pub use record::*;
