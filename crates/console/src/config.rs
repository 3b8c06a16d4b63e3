//! Runtime configuration, read from the environment.

use warehouse_inventory::DEFAULT_TOP_N;

/// How the final report is printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Size of the "latest expiry" view.
    pub top_n: usize,
    pub report_format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            report_format: ReportFormat::Text,
        }
    }
}

impl Config {
    /// Reads `WAREHOUSE_TOP_N` and `WAREHOUSE_REPORT_FORMAT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an injectable variable source.
    ///
    /// Unusable values fall back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("WAREHOUSE_TOP_N") {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.top_n = n,
                _ => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_TOP_N,
                    "WAREHOUSE_TOP_N must be a positive integer; using default"
                ),
            }
        }

        if let Some(raw) = lookup("WAREHOUSE_REPORT_FORMAT") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "text" => config.report_format = ReportFormat::Text,
                "json" => config.report_format = ReportFormat::Json,
                _ => tracing::warn!(
                    value = %raw,
                    "WAREHOUSE_REPORT_FORMAT must be `text` or `json`; using text"
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.top_n, 3);
    }

    #[test]
    fn reads_top_n_and_format() {
        let config = Config::from_lookup(lookup(&[
            ("WAREHOUSE_TOP_N", " 5 "),
            ("WAREHOUSE_REPORT_FORMAT", "JSON"),
        ]));
        assert_eq!(config.top_n, 5);
        assert_eq!(config.report_format, ReportFormat::Json);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("WAREHOUSE_TOP_N", "0"),
            ("WAREHOUSE_REPORT_FORMAT", "yaml"),
        ]));
        assert_eq!(config, Config::default());

        let config = Config::from_lookup(lookup(&[("WAREHOUSE_TOP_N", "-2")]));
        assert_eq!(config.top_n, DEFAULT_TOP_N);
    }
}
