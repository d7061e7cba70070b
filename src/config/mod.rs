#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use chrono::Datelike;
use settings::ScraperSettings;
use std::time::Duration;

/// Year fallback: absent or unparsable input means the current year.
pub fn resolve_year(raw: Option<&str>, current_year: i32) -> i32 {
    match raw {
        None => current_year,
        Some(text) => match text.trim().parse::<i32>() {
            Ok(year) => year,
            Err(_) => {
                tracing::warn!(
                    "Ignoring unparsable year '{}', using {}",
                    text,
                    current_year
                );
                current_year
            }
        },
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Fully resolved parameters for one fetch.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub username: String,
    pub year: i32,
    pub settings: ScraperSettings,
}

impl RunConfig {
    pub fn new(username: impl Into<String>, year: i32, settings: ScraperSettings) -> Self {
        Self {
            username: username.into(),
            year,
            settings,
        }
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("username", &self.username)?;
        self.settings.validate()
    }
}

impl ConfigProvider for RunConfig {
    fn base_url(&self) -> &str {
        &self.settings.http.base_url
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.settings.http.timeout_secs)
    }

    fn user_agent(&self) -> &str {
        &self.settings.http.user_agent
    }

    fn accept(&self) -> &str {
        &self.settings.http.accept
    }
}
