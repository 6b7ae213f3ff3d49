//! Runtime configuration, resolved from the environment and then from flags.

use std::path::PathBuf;

use sweetshop_observability::LogFormat;

use crate::args::Cli;

pub const ENV_LOW_STOCK_THRESHOLD: &str = "SWEETSHOP_LOW_STOCK_THRESHOLD";
pub const ENV_CURRENCY: &str = "SWEETSHOP_CURRENCY";
pub const ENV_LOG_FORMAT: &str = "SWEETSHOP_LOG_FORMAT";
pub const ENV_SEED_FILE: &str = "SWEETSHOP_SEED_FILE";

pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;
pub const DEFAULT_CURRENCY: &str = "₹";

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub low_stock_threshold: i64,
    pub currency: String,
    pub log_format: LogFormat,
    /// `None` seeds the built-in sample sweets.
    pub seed_file: Option<PathBuf>,
    pub json: bool,
    /// Unusable settings that fell back to defaults. Logged once tracing is up.
    pub warnings: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            currency: DEFAULT_CURRENCY.to_string(),
            log_format: LogFormat::default(),
            seed_file: None,
            json: false,
            warnings: Vec::new(),
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup` (an environment stand-in).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_LOW_STOCK_THRESHOLD) {
            match raw.trim().parse::<i64>() {
                Ok(threshold) if threshold >= 0 => config.low_stock_threshold = threshold,
                _ => config.warnings.push(format!(
                    "{ENV_LOW_STOCK_THRESHOLD}={raw:?} is not a non-negative integer; using {DEFAULT_LOW_STOCK_THRESHOLD}"
                )),
            }
        }

        if let Some(currency) = lookup(ENV_CURRENCY) {
            config.currency = currency;
        }

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(e) => config.warnings.push(format!("{ENV_LOG_FORMAT}: {e}; using text")),
            }
        }

        config.seed_file = lookup(ENV_SEED_FILE)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        config
    }

    /// Flags take precedence over the environment.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        match cli.threshold {
            Some(threshold) if threshold >= 0 => self.low_stock_threshold = threshold,
            Some(threshold) => self.warnings.push(format!(
                "--threshold {threshold} is not a non-negative integer; using {}",
                self.low_stock_threshold
            )),
            None => {}
        }
        if let Some(format) = cli.log_format {
            self.log_format = format;
        }
        if let Some(seed) = &cli.seed {
            self.seed_file = Some(seed.clone());
        }
        self.json |= cli.json;
        self
    }

    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            tracing::warn!("{warning}");
        }
    }
}
