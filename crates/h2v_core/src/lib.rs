//! Core result model and status-resolution protocol for how2validate.
//!
//! This crate defines the uniform envelope a secret-validation call returns,
//! the active/inactive/error classification rules, and the outcome builder
//! that every provider validator feeds its raw HTTP result into. It's
//! designed to be embedded in CLIs and HTTP-facing wrappers alike.
//!
//! # Main Types
//!
//! - [`ValidationResult`] - The JSON wire envelope returned to callers
//! - [`SecretState`] - The canonical `"Active"` / `"InActive"` classification
//! - [`ProviderCallOutcome`] - Tagged raw outcome of one provider HTTP call
//! - [`OutcomeBuilder`] - Translates outcomes into `ValidationResult`s
//! - [`AppConfig`] - Injected application identity and fallback values
//!
//! # Error Handling
//!
//! This crate uses [`thiserror`] for structured, typed errors:
//!
//! - [`StateTokenError`] - A caller moved a non-canonical state token across
//!   the resolver boundary (a programming error, not a runtime condition)
//! - [`ConfigError`] - Configuration loading/parsing failures
//! - [`H2vError`] - Top-level error enum combining the above
//!
//! Provider HTTP failures are never surfaced as Rust errors: they are
//! classified into the returned [`ValidationResult`] instead.

/// Injected application configuration loaded from `how2validate.toml`.
pub mod config;
/// Error types combining state-token and configuration failures.
pub mod error;
/// The outcome builder translating raw provider outcomes into results.
pub mod outcome;
/// Common re-exports for internal use.
pub mod prelude;
/// Response redaction and secret masking helpers.
pub mod redact;
/// The status resolver mapping state tokens to process descriptions.
pub mod resolve;
/// The validation result envelope and its nested data types.
pub mod result;
/// The canonical secret state tokens.
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use error::H2vError;
pub use outcome::{BuildContext, OutcomeBuilder, ProviderCallOutcome};
pub use redact::{apply_response_visibility, is_empty_response, redact_secret};
pub use resolve::{resolve, status_message};
pub use result::{ValidationData, ValidationError, ValidationProcess, ValidationResult};
pub use state::{SecretState, StateTokenError};

/// Default filename for how2validate configuration.
pub const CONFIG_FILENAME: &str = "how2validate.toml";
