use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a validated secret is currently active.
///
/// The serialized tokens `"Active"` and `"InActive"` (exact casing) are part
/// of the public wire contract; case-sensitive comparisons downstream depend
/// on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecretState {
    /// The secret authenticated successfully and is operational.
    #[serde(rename = "Active")]
    Active,
    /// The secret was rejected, revoked, or could not be checked.
    #[serde(rename = "InActive")]
    Inactive,
}

impl SecretState {
    /// Returns the canonical wire token for this state.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "InActive",
        }
    }

    /// Returns the status phrase used in human-readable messages.
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Active => "active and operational",
            Self::Inactive => "inactive and not operational",
        }
    }
}

impl std::fmt::Display for SecretState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// A state token that is neither `"Active"` nor `"InActive"`.
///
/// This is a contract violation by the calling provider validator, not a
/// runtime condition: correct validator code never produces it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected state token '{token}': expected 'Active' or 'InActive'")]
pub struct StateTokenError {
    /// The token that failed to parse.
    pub token: String,
}

impl FromStr for SecretState {
    type Err = StateTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "InActive" => Ok(Self::Inactive),
            other => Err(StateTokenError {
                token: other.to_string(),
            }),
        }
    }
}
