//! Validator registry running the full validate pipeline.

use std::collections::HashMap;

use h2v_core::{AppConfig, BuildContext, OutcomeBuilder, ValidationResult, apply_response_visibility};

use crate::USER_AGENT;
use crate::provider::{Provider, ServiceDef};
use crate::providers::builtin_providers;
use crate::validator::ValidationCallError;

/// Central registry of all builtin provider validators.
///
/// Maps service identifiers to their owning providers and optionally holds
/// the shared HTTP client used for live validation. Validations run strictly
/// one call at a time with no shared mutable state; every call allocates a
/// fresh result.
pub struct ValidatorRegistry {
    providers: Vec<&'static dyn Provider>,
    service_to_provider: HashMap<&'static str, usize>,
    client: Option<reqwest::Client>,
    config: AppConfig,
}

/// Per-call options supplied by the invoking CLI or embedding application.
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// Whether verbose provider response data is kept in the result.
    pub include_response: bool,
    /// Report address override; the configured fallback applies when absent.
    pub report: Option<String>,
    /// Suppresses log emission for embedded, non-interactive callers.
    pub quiet: bool,
}

impl ValidatorRegistry {
    /// Creates a registry pre-loaded with all builtin providers but without
    /// an HTTP client; `validate` calls will fail until one is attached via
    /// [`Self::with_client`].
    #[must_use]
    pub fn builtin() -> Self {
        let providers = builtin_providers();
        let mut service_to_provider = HashMap::new();

        for (idx, provider) in providers.iter().enumerate() {
            for service in provider.services() {
                service_to_provider.insert(service.id, idx);
            }
        }

        Self {
            providers,
            service_to_provider,
            client: None,
            config: AppConfig::default(),
        }
    }

    /// Creates a registry with an HTTP client configured from `config`
    /// (per-call timeout, crate User-Agent).
    pub fn with_client(config: AppConfig) -> Result<Self, ValidationCallError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ValidationCallError::ClientInit(e.to_string()))?;

        let mut registry = Self::builtin();
        registry.client = Some(client);
        registry.config = config;
        Ok(registry)
    }

    /// Returns the underlying slice of registered providers.
    #[must_use]
    pub fn providers(&self) -> &[&'static dyn Provider] {
        &self.providers
    }

    /// Returns `(provider id, service)` pairs for every enabled service.
    pub fn enabled_services(&self) -> impl Iterator<Item = (&'static str, &'static ServiceDef)> {
        self.providers
            .iter()
            .flat_map(|p| p.services().iter().map(|s| (p.id(), s)))
            .filter(|(_, s)| s.enabled)
    }

    /// Returns the provider owning the given service id, if any.
    #[must_use]
    pub fn provider_for(&self, service_id: &str) -> Option<&'static dyn Provider> {
        self.service_to_provider
            .get(service_id)
            .and_then(|idx| self.providers.get(*idx))
            .copied()
    }

    /// Returns `true` if a validator is registered for the given service id.
    #[must_use]
    pub fn supports(&self, service_id: &str) -> bool {
        self.service_to_provider
            .get(service_id)
            .and_then(|idx| self.providers.get(*idx))
            .is_some_and(|p| p.validator(service_id).is_some())
    }

    /// Validates a secret against the provider registered for `service_id`.
    ///
    /// The validator's raw outcome is fed through the core outcome builder,
    /// so HTTP and transport failures come back as classified results, never
    /// as errors; only an unknown service or a missing client fails.
    pub async fn validate(
        &self,
        service_id: &str,
        secret: &str,
        options: &ValidateOptions,
    ) -> Result<ValidationResult, ValidationCallError> {
        let client = self.client.as_ref().ok_or_else(|| {
            ValidationCallError::ClientInit("registry not initialized with an HTTP client".to_string())
        })?;

        let provider = self
            .service_to_provider
            .get(service_id)
            .and_then(|idx| self.providers.get(*idx))
            .ok_or_else(|| ValidationCallError::UnsupportedService {
                service_id: service_id.to_string(),
            })?;

        let validator = provider
            .validator(service_id)
            .ok_or_else(|| ValidationCallError::UnsupportedService {
                service_id: service_id.to_string(),
            })?;

        let outcome = validator.check(client, secret).await;

        let ctx = BuildContext {
            provider: provider.id(),
            service: service_id,
            include_response: options.include_response,
            report: options.report.as_deref(),
            quiet: options.quiet,
        };
        let result = OutcomeBuilder::new(&self.config).from_outcome(&ctx, &outcome);

        Ok(apply_response_visibility(result, options.include_response))
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("provider_count", &self.providers.len())
            .field("service_count", &self.service_to_provider.len())
            .field("has_client", &self.client.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests use expect for clearer failure messages")]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_has_providers_and_services() {
        let registry = ValidatorRegistry::builtin();
        assert!(!registry.providers().is_empty());
        assert!(registry.enabled_services().count() >= registry.providers().len());
    }

    #[test]
    fn supports_known_service_ids() {
        let registry = ValidatorRegistry::builtin();
        assert!(registry.supports("npm_access_token"));
        assert!(registry.supports("github_personal_access_token"));
        assert!(registry.supports("openai_api_key"));
    }

    #[test]
    fn does_not_support_unknown_service_ids() {
        let registry = ValidatorRegistry::builtin();
        assert!(!registry.supports("unknown_service"));
    }

    #[test]
    fn service_ids_are_unique_across_providers() {
        let registry = ValidatorRegistry::builtin();
        let total: usize = registry.providers().iter().map(|p| p.services().len()).sum();
        assert_eq!(total, registry.service_to_provider.len());
    }

    #[test]
    fn every_listed_service_dispatches_to_a_validator() {
        let registry = ValidatorRegistry::builtin();
        for provider in registry.providers() {
            for service in provider.services() {
                assert!(
                    provider.validator(service.id).is_some(),
                    "service '{}' has no validator",
                    service.id
                );
            }
        }
    }

    #[tokio::test]
    async fn validate_without_client_fails() {
        let registry = ValidatorRegistry::builtin();
        let err = registry
            .validate("npm_access_token", "secret", &ValidateOptions::default())
            .await;
        assert!(matches!(err, Err(ValidationCallError::ClientInit(_))));
    }

    #[tokio::test]
    async fn validate_unknown_service_fails() {
        let registry = ValidatorRegistry::with_client(AppConfig::default()).expect("client should build");
        let err = registry
            .validate("unknown_service", "secret", &ValidateOptions::default())
            .await;
        assert!(matches!(err, Err(ValidationCallError::UnsupportedService { .. })));
    }

    #[test]
    fn default_is_equivalent_to_builtin() {
        let default_registry = ValidatorRegistry::default();
        let builtin_registry = ValidatorRegistry::builtin();
        assert_eq!(default_registry.providers().len(), builtin_registry.providers().len());
    }
}
