//! Construction errors for machine configurations and builders.

use thiserror::Error;

/// Errors that can occur when building a state machine from its
/// configuration.
///
/// Construction either succeeds whole or fails with one of these; no
/// partially-initialized machine is ever returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured initial state is missing from the state table.
    #[error("initial state '{name}' not registered as a possible state")]
    UnknownInitialState { name: String },
}
