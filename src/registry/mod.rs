//! Identifier registry port and adapters

mod memory;
mod traits;

pub use memory::InMemoryRegistry;
pub use traits::{CheckResponse, IdentifierCheck, TransportError};

#[cfg(test)]
pub use traits::MockIdentifierCheck;
