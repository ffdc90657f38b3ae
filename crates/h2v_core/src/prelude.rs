//! Convenience re-exports of the most commonly used types.

pub use crate::config::{AppConfig, ConfigError};
pub use crate::error::H2vError;
pub use crate::outcome::{BuildContext, OutcomeBuilder, ProviderCallOutcome};
pub use crate::redact::apply_response_visibility;
pub use crate::result::{ValidationData, ValidationError, ValidationProcess, ValidationResult};
pub use crate::state::{SecretState, StateTokenError};
