pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{settings::ScraperSettings, RunConfig};
pub use crate::core::{
    engine::GraphEngine,
    extract::RegexExtractor,
    fetch::HttpSource,
    output::{FileSink, StdoutSink},
    pipeline::ContributionPipeline,
};
pub use crate::domain::model::{ContribLevel, ContributionDay, ContributionGraph};
pub use crate::utils::error::{GraphError, Result};
