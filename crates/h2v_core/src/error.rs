use thiserror::Error;

/// Top-level error type for the how2validate core.
///
/// Unifies the contract-violation and configuration errors into a single
/// type for callers that orchestrate the full workflow. Provider HTTP
/// failures never appear here: they are classified into the returned
/// `ValidationResult` instead.
#[derive(Debug, Error)]
pub enum H2vError {
    /// A non-canonical state token crossed the resolver boundary.
    #[error(transparent)]
    State(#[from] crate::state::StateTokenError),

    /// Configuration could not be read or parsed.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}
