use super::settings::ScraperSettings;
use super::{resolve_year, RunConfig};
use crate::utils::error::{GraphError, Result};
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "gitgraphed")]
#[command(about = "Fetch a user's contribution graph and print it as JSON")]
pub struct CliConfig {
    /// Account whose public contribution graph is fetched
    #[arg(allow_hyphen_values = true)]
    pub username: Option<String>,

    /// Calendar year to fetch; defaults to the current year
    #[arg(allow_hyphen_values = true)]
    pub year: Option<String>,

    /// Anything after the year is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub extra: Vec<String>,

    #[arg(long, help = "TOML settings file ([http] base_url, timeout_secs, user_agent, accept)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Write the JSON document to this file instead of stdout")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Applies the fallback rules and validates the result.
    pub fn resolve(&self, current_year: i32) -> Result<RunConfig> {
        let username = self.username.clone().ok_or(GraphError::Usage)?;
        let year = resolve_year(self.year.as_deref(), current_year);

        let settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                ScraperSettings::from_file(path)?
            }
            None => ScraperSettings::default(),
        };

        let config = RunConfig::new(username, year, settings);
        config.validate()?;
        Ok(config)
    }
}
