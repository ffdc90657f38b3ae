//! Provider validators for how2validate.
//!
//! Each provider issues one live authenticated request against its vendor's
//! API and adapts the raw HTTP result into a
//! [`ProviderCallOutcome`](h2v_core::ProviderCallOutcome) for the core
//! outcome builder. The [`ValidatorRegistry`] owns the shared HTTP client
//! and runs the full validate pipeline for a service id.

mod adapter;
mod provider;
/// Builtin provider validators, one module per vendor.
pub mod providers;
mod registry;
mod validator;

pub use adapter::call_outcome;
pub use provider::{Provider, ServiceDef};
pub use registry::{ValidateOptions, ValidatorRegistry};
pub use validator::{BoxFuture, SecretValidator, ValidationCallError};

/// HTTP `User-Agent` header sent on every validation request.
pub(crate) const USER_AGENT: &str = concat!("how2validate/", env!("CARGO_PKG_VERSION"));
