use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::SecretState;

/// The top-level envelope describing one validation outcome.
///
/// Field names and nesting are the JSON wire contract consumed by any
/// downstream table printer or HTTP-facing wrapper; they must serialize
/// losslessly with exactly these names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// HTTP status code of the underlying provider call, or a synthetic 500
    /// for failures that never produced a response.
    pub status: u16,
    /// Identity of the invoking application or tool.
    pub app: String,
    /// The validation payload. Always present.
    pub data: ValidationData,
    /// Free-text error detail. Always present but rarely populated: error
    /// detail lives inside `data.validate` instead (an inherited asymmetry
    /// of the wire contract, not a bug).
    pub error: ValidationError,
    /// ISO 8601 UTC timestamp, set once at construction.
    pub timestamp: String,
}

impl ValidationResult {
    /// Creates an envelope around `data`, stamping the current UTC time and
    /// an empty error.
    #[must_use]
    pub fn new(status: u16, app: &str, data: ValidationData) -> Self {
        Self {
            status,
            app: app.to_string(),
            data,
            error: ValidationError::default(),
            timestamp: current_timestamp(),
        }
    }
}

/// Provider and service identity plus the resolved validation process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationData {
    /// The resolved state, message, and provider response.
    pub validate: ValidationProcess,
    /// Provider identifier (e.g. `"npm"`).
    pub provider: String,
    /// Human-readable service name (e.g. `"npm_access_token"`).
    pub services: String,
}

/// The resolved classification of one secret check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationProcess {
    /// Canonical `"Active"` / `"InActive"` state.
    pub state: SecretState,
    /// Human-readable sentence describing the secret's status.
    pub message: String,
    /// The provider's secondary payload: parsed JSON, a plain string, or the
    /// empty-object placeholder when the provider sent nothing.
    pub response: Value,
    /// Contact address for reporting; falls back to a configured default
    /// when the caller supplies none.
    pub report: String,
}

impl ValidationProcess {
    /// Creates a process description with an empty report address; the
    /// outcome builder fills the report in.
    #[must_use]
    pub fn new(state: SecretState, message: String, response: Value) -> Self {
        Self {
            state,
            message,
            response,
            report: String::new(),
        }
    }
}

/// Free-text error message, empty by default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationError {
    /// The error text, if any.
    pub message: String,
}

/// Returns the current UTC time in ISO 8601 format.
#[must_use]
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
