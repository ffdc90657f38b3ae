//! Provider trait and service definitions.

use crate::validator::SecretValidator;

/// One credential/token type offered by a provider.
#[derive(Debug, Clone, Copy)]
pub struct ServiceDef {
    /// Unique service identifier used for dispatch (e.g. `"npm_access_token"`).
    pub id: &'static str,
    /// Human-readable display name (e.g. `"npm Access Token"`).
    pub display_name: &'static str,
    /// Whether the service is enabled in the default scope listing.
    pub enabled: bool,
}

/// A third-party vendor whose credentials can be validated.
///
/// Each provider contributes one or more [`ServiceDef`] entries and a
/// [`SecretValidator`] per service that issues the live API call.
pub trait Provider: Send + Sync {
    /// Returns the unique identifier for this provider (e.g. `"npm"`).
    fn id(&self) -> &'static str;

    /// Returns the human-readable display name (e.g. `"npm"`).
    fn name(&self) -> &'static str;

    /// Returns the static slice of services this provider offers.
    fn services(&self) -> &'static [ServiceDef];

    /// Returns the validator for one of this provider's service ids, if the
    /// id belongs to this provider.
    fn validator(&self, service_id: &str) -> Option<&dyn SecretValidator>;
}
