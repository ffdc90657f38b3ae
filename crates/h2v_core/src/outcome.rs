use serde_json::Value;

use crate::config::AppConfig;
use crate::redact::is_empty_response;
use crate::resolve::status_message;
use crate::result::{ValidationData, ValidationProcess, ValidationResult};
use crate::state::SecretState;

/// Response body substitute when an inactive provider reply carried no data.
pub const NO_ADDITIONAL_DATA: &str = "No additional data.";

/// Response body substitute for an HTTP failure without a parseable body.
pub const AUTHENTICATION_FAILED: &str = "Authentication failed.";

/// Message used for failures that never produced an HTTP response.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// The raw outcome of one provider HTTP call.
///
/// Constructed by each provider validator's adapter layer so the outcome
/// builder dispatches on a closed enumeration instead of inspecting
/// duck-typed error shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCallOutcome {
    /// The provider answered with a 2xx response.
    Success {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body text.
        body: String,
    },
    /// The provider answered with a non-2xx response.
    HttpFailure {
        /// HTTP status code of the response.
        status: u16,
        /// Parsed JSON body, when the provider sent one.
        body: Option<Value>,
    },
    /// No HTTP response at all: network failure, timeout, DNS, or a body
    /// that could not be read.
    TransportFailure {
        /// Description of the underlying failure. Logged but never stored
        /// in the returned result.
        cause: String,
    },
}

/// Per-call identity and flags supplied by the provider validator.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
    /// Provider identifier (e.g. `"npm"`).
    pub provider: &'a str,
    /// Human-readable service name (e.g. `"npm_access_token"`).
    pub service: &'a str,
    /// Whether verbose response data should be logged alongside the message.
    pub include_response: bool,
    /// Report address override; the configured fallback applies when absent.
    pub report: Option<&'a str>,
    /// Suppresses log emission for embedded, non-interactive callers.
    pub quiet: bool,
}

impl<'a> BuildContext<'a> {
    /// Creates a context for one provider/service pair with default flags:
    /// no response detail, no report override, logging enabled.
    #[must_use]
    pub const fn new(provider: &'a str, service: &'a str) -> Self {
        Self {
            provider,
            service,
            include_response: false,
            report: None,
            quiet: false,
        }
    }
}

/// Assembles complete [`ValidationResult`]s from raw provider outcomes.
///
/// Holds a reference to the injected [`AppConfig`] for the app identity and
/// report-address fallback. All entry points are pure apart from optional
/// log emission; each call allocates a fresh result.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeBuilder<'a> {
    config: &'a AppConfig,
}

impl<'a> OutcomeBuilder<'a> {
    /// Creates a builder over the given configuration.
    #[must_use]
    pub const fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Builds the result for a successful (2xx) provider response.
    ///
    /// `status` is carried verbatim; the body is stored JSON-decoded when it
    /// parses, as a plain string otherwise.
    #[must_use]
    pub fn active(&self, ctx: &BuildContext<'_>, status: u16, body: &str) -> ValidationResult {
        let payload = serde_json::from_str::<Value>(body).unwrap_or_else(|_| Value::String(body.to_string()));
        let process = status_message(ctx.service, SecretState::Active, Some(payload));
        self.finish(ctx, status, process)
    }

    /// Builds the result for an explicit inactive/invalid credential reply.
    ///
    /// A missing `status` defaults to 0 explicitly; a missing or empty body
    /// becomes the literal string [`NO_ADDITIONAL_DATA`].
    #[must_use]
    pub fn inactive(&self, ctx: &BuildContext<'_>, status: Option<u16>, body: Option<&Value>) -> ValidationResult {
        let payload = match body {
            Some(value) if !is_empty_response(value) => value.clone(),
            _ => Value::String(NO_ADDITIONAL_DATA.to_string()),
        };
        let process = status_message(ctx.service, SecretState::Inactive, Some(payload));
        self.finish(ctx, status.unwrap_or(0), process)
    }

    /// Builds the result for a failed provider call.
    ///
    /// This is the sole error-classification branch point: an HTTP-level
    /// failure keeps the vendor's status code and body and resolves to
    /// `InActive`; anything without a response collapses into the fixed
    /// 500/"unexpected error" result. A `Success` outcome passed here is
    /// treated as active rather than misclassified.
    #[must_use]
    pub fn from_error(&self, ctx: &BuildContext<'_>, failure: &ProviderCallOutcome) -> ValidationResult {
        match failure {
            ProviderCallOutcome::Success { status, body } => self.active(ctx, *status, body),
            ProviderCallOutcome::HttpFailure { status, body } => {
                let payload = match body {
                    Some(value) if !is_empty_response(value) => value.clone(),
                    _ => Value::String(AUTHENTICATION_FAILED.to_string()),
                };
                let process = status_message(ctx.service, SecretState::Inactive, Some(payload));
                self.finish(ctx, *status, process)
            }
            ProviderCallOutcome::TransportFailure { cause } => {
                // The cause is logged but deliberately not stored: the
                // returned shape stays fixed for this branch.
                if !ctx.quiet {
                    tracing::warn!("provider call failed before a response arrived: {cause}");
                }

                let mut process = ValidationProcess::new(
                    SecretState::Inactive,
                    UNEXPECTED_ERROR.to_string(),
                    Value::String("{}".to_string()),
                );
                process.report = self.report_address(ctx);
                self.assemble(ctx, 500, process)
            }
        }
    }

    /// Dispatches a raw outcome to the matching entry point.
    #[must_use]
    pub fn from_outcome(&self, ctx: &BuildContext<'_>, outcome: &ProviderCallOutcome) -> ValidationResult {
        match outcome {
            ProviderCallOutcome::Success { status, body } => self.active(ctx, *status, body),
            failure => self.from_error(ctx, failure),
        }
    }

    /// Fills the report address, emits the log line, and wraps the envelope.
    fn finish(&self, ctx: &BuildContext<'_>, status: u16, mut process: ValidationProcess) -> ValidationResult {
        process.report = self.report_address(ctx);

        if !ctx.quiet {
            if ctx.include_response {
                tracing::info!(
                    "{}\nHere is the additional response data:\n{}",
                    process.message,
                    process.response
                );
            } else {
                tracing::info!("{}", process.message);
            }
        }

        self.assemble(ctx, status, process)
    }

    fn assemble(&self, ctx: &BuildContext<'_>, status: u16, process: ValidationProcess) -> ValidationResult {
        ValidationResult::new(
            status,
            &self.config.app_name,
            ValidationData {
                validate: process,
                provider: ctx.provider.to_string(),
                services: ctx.service.to_string(),
            },
        )
    }

    fn report_address(&self, ctx: &BuildContext<'_>) -> String {
        match ctx.report {
            Some(address) if !address.is_empty() => address.to_string(),
            _ => self.config.report_contact.clone(),
        }
    }
}
