//! Application configuration management.

use serde::Deserialize;

use crate::types::FilterInput;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Input data configuration.
    #[serde(default)]
    pub input: InputConfig,
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
    /// Report filter as selected by the user.
    #[serde(default)]
    pub filter: FilterInput,
}

/// Input data configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Path to the chart of accounts CSV file.
    #[serde(default = "default_accounts_path")]
    pub accounts_path: String,
    /// Path to the journal entries CSV file.
    #[serde(default = "default_journal_path")]
    pub journal_path: String,
}

fn default_accounts_path() -> String {
    "data/accounts.csv".to_string()
}

fn default_journal_path() -> String {
    "data/journal.csv".to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            accounts_path: default_accounts_path(),
            journal_path: default_journal_path(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Output format name (`CSV`, `HTML` or `JSON`). Nothing is rendered when unset.
    #[serde(default)]
    pub format: Option<String>,
    /// `chrono` format string used to parse and print periods.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            date_format: default_date_format(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
