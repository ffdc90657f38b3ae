use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Injected application configuration.
///
/// Loaded from an optional `how2validate.toml`; every field falls back to the
/// shipped default when absent. The struct is passed by reference into the
/// outcome builder and registry and never mutated after loading, so
/// deployments can override the identity values without recompiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application identity stamped into every validation result.
    pub app_name: String,
    /// Fallback report address used when a caller supplies none.
    pub report_contact: String,
    /// Per-call timeout for provider HTTP requests, in seconds.
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "How2Validate".to_string(),
            report_contact: "email@how2validate.com".to_string(),
            timeout_secs: 5,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Returns the per-call HTTP timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Errors that can occur when reading or parsing a `how2validate.toml`
/// configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read from disk.
    #[error("failed to read config '{path}': {source}")]
    Read {
        /// Path to the config file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file contained invalid TOML or unexpected values.
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        /// Path to the config file that could not be parsed.
        path: PathBuf,
        /// The underlying TOML deserialization error.
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests use expect for clearer failure messages")]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn defaults_carry_the_shipped_identity() {
        let config = AppConfig::default();
        assert_eq!(config.app_name, "How2Validate");
        assert_eq!(config.report_contact, "email@how2validate.com");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load(Path::new("/nonexistent/how2validate.toml")).expect("missing file should be fine");
        assert_eq!(config.app_name, "How2Validate");
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = AppConfig::from_toml("app_name = \"HostedValidator\"\n").expect("valid toml should parse");
        assert_eq!(config.app_name, "HostedValidator");
        assert_eq!(config.report_contact, "email@how2validate.com");
    }

    #[test]
    fn file_load_reads_overrides() {
        let mut file = NamedTempFile::new().expect("temp file should be created");
        writeln!(file, "report_contact = \"security@example.com\"").expect("temp file should be writable");

        let config = AppConfig::load(file.path()).expect("config should load");
        assert_eq!(config.report_contact, "security@example.com");
    }

    #[test]
    fn invalid_toml_reports_the_path() {
        let mut file = NamedTempFile::new().expect("temp file should be created");
        writeln!(file, "app_name = [not toml").expect("temp file should be writable");

        let err = AppConfig::load(file.path()).expect_err("invalid toml should fail");
        let ConfigError::Parse { path, .. } = err else {
            unreachable!("expected a parse error");
        };
        assert_eq!(path, file.path());
    }
}
