//! Classification of raw HTTP results into provider call outcomes.

use h2v_core::ProviderCallOutcome;

/// Folds the result of a sent request into a [`ProviderCallOutcome`].
///
/// A 2xx response becomes `Success` with the raw body text; any other status
/// becomes `HttpFailure` with the body kept only when it parses as JSON.
/// Send errors and unreadable bodies become `TransportFailure`, which the
/// outcome builder collapses into the fixed unexpected-error result.
pub async fn call_outcome(sent: Result<reqwest::Response, reqwest::Error>) -> ProviderCallOutcome {
    let response = match sent {
        Ok(response) => response,
        Err(err) => {
            return ProviderCallOutcome::TransportFailure { cause: err.to_string() };
        }
    };

    let status = response.status().as_u16();
    match response.text().await {
        Ok(body) if (200..300).contains(&status) => ProviderCallOutcome::Success { status, body },
        Ok(body) => ProviderCallOutcome::HttpFailure {
            status,
            body: serde_json::from_str(&body).ok(),
        },
        Err(err) => ProviderCallOutcome::TransportFailure { cause: err.to_string() },
    }
}
