//! Secret validator trait and call-level errors.

use std::pin::Pin;

use h2v_core::ProviderCallOutcome;

/// A pinned, boxed, `Send` future used as the return type for async validation.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Errors that can occur before a provider call produces an outcome.
///
/// Failures of the call itself never appear here: they are classified into
/// the [`ProviderCallOutcome`] the validator returns.
#[derive(Debug, thiserror::Error)]
pub enum ValidationCallError {
    /// The HTTP client could not be initialised.
    #[error("failed to initialize HTTP client: {0}")]
    ClientInit(String),

    /// No validator is registered for the requested service.
    #[error("no validator registered for service: {service_id}")]
    UnsupportedService {
        /// Identifier of the service that has no registered validator.
        service_id: String,
    },
}

/// Trait for validators that check a secret against their vendor's API.
///
/// Implementations make exactly one request per call and fold every possible
/// result, including transport failures, into the returned outcome.
pub trait SecretValidator: Send + Sync {
    /// Issues the live request and classifies the raw result.
    fn check<'a>(&'a self, client: &'a reqwest::Client, secret: &'a str) -> BoxFuture<'a, ProviderCallOutcome>;
}
