//! Runtime configuration for the CLI.

use std::path::PathBuf;

/// Default log filter when `TINCT_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

/// Settings resolved from the environment. Command-line flags override them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// `tracing` filter directive, e.g. `info` or `tinct_core=trace`.
    pub log_filter: String,
    /// Reference-case file `verify` uses when `--cases` is not given.
    pub cases_path: Option<PathBuf>,
}

impl CliConfig {
    /// Read `TINCT_LOG` and `TINCT_CASES`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_filter: lookup("TINCT_LOG")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            cases_path: lookup("TINCT_CASES")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.cases_path, None);
    }

    #[test]
    fn test_lookup_overrides() {
        let config = CliConfig::from_lookup(|key| match key {
            "TINCT_LOG" => Some("tinct_core=trace".to_string()),
            "TINCT_CASES" => Some("cases.json".to_string()),
            _ => None,
        });
        assert_eq!(config.log_filter, "tinct_core=trace");
        assert_eq!(config.cases_path, Some(PathBuf::from("cases.json")));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = CliConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, CliConfig::default());
    }
}
