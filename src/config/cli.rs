use crate::config::toml_config::TomlConfig;
use crate::output::OutputFormat;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "customer-geo")]
#[command(about = "List customers with their distance from a reference point")]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the dataset URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Override the request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Field to sort by: id, name, latitude, longitude or distance
    #[arg(long)]
    pub property: Option<String>,

    /// Sort direction: asc or desc
    #[arg(long)]
    pub direction: Option<String>,

    /// Show a single customer by id
    #[arg(long, conflicts_with_all = ["property", "direction"])]
    pub id: Option<i64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliArgs {
    /// Loads the configuration file (or defaults) and applies command line overrides.
    pub fn load_config(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            config.source.timeout_seconds = Some(timeout);
        }
        if self.json_logs {
            config.logging.json = true;
        }

        Ok(config)
    }
}
