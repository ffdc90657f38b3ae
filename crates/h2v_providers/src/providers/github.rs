//! GitHub personal access token validation.

use h2v_core::ProviderCallOutcome;

use crate::USER_AGENT;
use crate::adapter::call_outcome;
use crate::provider::{Provider, ServiceDef};
use crate::validator::{BoxFuture, SecretValidator};

const GITHUB_USER_URL: &str = "https://api.github.com/user";

static SERVICES: &[ServiceDef] = &[ServiceDef {
    id: "github_personal_access_token",
    display_name: "GitHub Personal Access Token",
    enabled: true,
}];

/// GitHub secret validation provider.
pub struct GitHubProvider;

impl Provider for GitHubProvider {
    fn id(&self) -> &'static str {
        "github"
    }

    fn name(&self) -> &'static str {
        "GitHub"
    }

    fn services(&self) -> &'static [ServiceDef] {
        SERVICES
    }

    fn validator(&self, service_id: &str) -> Option<&dyn SecretValidator> {
        (service_id == "github_personal_access_token").then_some(&GitHubPatValidator as &dyn SecretValidator)
    }
}

/// Checks a GitHub personal access token against the `/user` endpoint.
pub struct GitHubPatValidator;

impl SecretValidator for GitHubPatValidator {
    fn check<'a>(&'a self, client: &'a reqwest::Client, secret: &'a str) -> BoxFuture<'a, ProviderCallOutcome> {
        Box::pin(async move {
            let sent = client
                .get(GITHUB_USER_URL)
                .header("Cache-Control", "no-cache")
                .header("Authorization", format!("Bearer {secret}"))
                .header("Accept", "application/vnd.github+json")
                .header("User-Agent", USER_AGENT)
                .send()
                .await;

            call_outcome(sent).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_has_correct_id() {
        assert_eq!(GitHubProvider.id(), "github");
    }

    #[test]
    fn validator_dispatches_only_on_own_service_ids() {
        assert!(GitHubProvider.validator("github_personal_access_token").is_some());
        assert!(GitHubProvider.validator("npm_access_token").is_none());
    }
}
