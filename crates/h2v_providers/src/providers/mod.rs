//! Builtin providers for live secret validation.

mod anthropic;
mod github;
mod hugging_face;
mod npm;
mod openai;
mod pagerduty;
mod sentry;
mod slack;
mod snyk;
mod sonarcloud;

pub use anthropic::AnthropicProvider;
pub use github::GitHubProvider;
pub use hugging_face::HuggingFaceProvider;
pub use npm::NpmProvider;
pub use openai::OpenAiProvider;
pub use pagerduty::PagerDutyProvider;
pub use sentry::SentryProvider;
pub use slack::SlackProvider;
pub use snyk::SnykProvider;
pub use sonarcloud::SonarCloudProvider;

use crate::provider::Provider;

/// Returns all builtin providers, one per supported vendor.
#[must_use]
pub fn builtin_providers() -> Vec<&'static dyn Provider> {
    vec![
        &AnthropicProvider,
        &GitHubProvider,
        &HuggingFaceProvider,
        &NpmProvider,
        &OpenAiProvider,
        &PagerDutyProvider,
        &SentryProvider,
        &SlackProvider,
        &SnykProvider,
        &SonarCloudProvider,
    ]
}
