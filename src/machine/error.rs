//! Runtime errors for the registry mutation and lookup API.

use thiserror::Error;

/// Errors raised by misuse of the mutation and lookup API.
///
/// A rejected `goto` is not one of these: moving to an unregistered
/// state is an expected outcome and is reported through the boolean
/// return value instead.
#[derive(Debug, Error)]
pub enum MachineError {
    /// A mutation referenced a name missing from the state table.
    #[error("state '{name}' is not registered")]
    UnknownState { name: String },

    /// A lookup argument cannot be a state name.
    #[error("invalid state name argument: {reason}")]
    InvalidArgument { reason: String },
}
