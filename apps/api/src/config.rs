use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::analysis::benchmark::DEFAULT_SPREAD;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Trimmed texts shorter than this are not analyzed.
    pub min_analysis_chars: usize,
    pub analysis_debounce_ms: u64,
    /// Upper bound (exclusive) of the industry-match perturbation. 0 disables it.
    pub industry_spread: f64,
    pub industry_seed: Option<u64>,
    pub max_batch_fields: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            min_analysis_chars: 10,
            analysis_debounce_ms: 800,
            industry_spread: DEFAULT_SPREAD,
            industry_seed: None,
            max_batch_fields: 20,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source (tests pass a map).
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let industry_spread = parse_var(&lookup, "INDUSTRY_SPREAD", defaults.industry_spread)?;
        if !(0.0..=100.0).contains(&industry_spread) {
            bail!("INDUSTRY_SPREAD must be between 0 and 100, got {industry_spread}");
        }

        let industry_seed = lookup("INDUSTRY_SEED")
            .map(|raw| {
                raw.parse::<u64>()
                    .with_context(|| format!("INDUSTRY_SEED must be an unsigned integer, got '{raw}'"))
            })
            .transpose()?;

        let max_batch_fields = parse_var(&lookup, "MAX_BATCH_FIELDS", defaults.max_batch_fields)?;
        if max_batch_fields == 0 {
            bail!("MAX_BATCH_FIELDS must be at least 1");
        }

        Ok(Config {
            port: parse_var(&lookup, "PORT", defaults.port)
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            min_analysis_chars: parse_var(
                &lookup,
                "MIN_ANALYSIS_CHARS",
                defaults.min_analysis_chars,
            )?,
            analysis_debounce_ms: parse_var(
                &lookup,
                "ANALYSIS_DEBOUNCE_MS",
                defaults.analysis_debounce_ms,
            )?,
            industry_spread,
            industry_seed,
            max_batch_fields,
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.min_analysis_chars, 10);
        assert_eq!(config.analysis_debounce_ms, 800);
        assert_eq!(config.industry_spread, 20.0);
        assert_eq!(config.industry_seed, None);
        assert_eq!(config.max_batch_fields, 20);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("RUST_LOG", "debug"),
            ("MIN_ANALYSIS_CHARS", "25"),
            ("INDUSTRY_SPREAD", "0"),
            ("INDUSTRY_SEED", "1234"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.min_analysis_chars, 25);
        assert_eq!(config.industry_spread, 0.0);
        assert_eq!(config.industry_seed, Some(1234));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(format!("{err:#}").contains("PORT"));
    }

    #[test]
    fn test_spread_out_of_range_is_rejected() {
        assert!(config_from(&[("INDUSTRY_SPREAD", "-1")]).is_err());
        assert!(config_from(&[("INDUSTRY_SPREAD", "150")]).is_err());
    }

    #[test]
    fn test_bad_seed_is_rejected() {
        let err = config_from(&[("INDUSTRY_SEED", "abc")]).unwrap_err();
        assert!(err.to_string().contains("INDUSTRY_SEED"));
    }

    #[test]
    fn test_zero_batch_limit_is_rejected() {
        assert!(config_from(&[("MAX_BATCH_FIELDS", "0")]).is_err());
    }
}
