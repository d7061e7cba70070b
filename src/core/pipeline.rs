use crate::core::normalize::normalize_all;
use crate::core::{
    ConfigProvider, ContributionGraph, FragmentExtractor, HtmlSource, Pipeline, RawPage,
};
use crate::domain::model::ContributionDay;
use crate::utils::error::Result;

/// Wraps the parsed pieces into the output document.
///
/// The total is taken from the aggregate phrase as-is; it is not checked
/// against the sum of the day counts.
pub fn assemble_graph(
    username: &str,
    year: i32,
    total: Option<u64>,
    days: Vec<ContributionDay>,
) -> ContributionGraph {
    ContributionGraph {
        username: username.to_string(),
        total_contributions: total.unwrap_or(0),
        years: vec![year],
        days,
    }
}

pub struct ContributionPipeline<S: HtmlSource, E: FragmentExtractor, C: ConfigProvider> {
    source: S,
    extractor: E,
    config: C,
}

impl<S: HtmlSource, E: FragmentExtractor, C: ConfigProvider> ContributionPipeline<S, E, C> {
    pub fn new(source: S, extractor: E, config: C) -> Self {
        Self {
            source,
            extractor,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<S: HtmlSource, E: FragmentExtractor, C: ConfigProvider> Pipeline
    for ContributionPipeline<S, E, C>
{
    async fn extract(&self) -> Result<RawPage> {
        let html = self.source.fetch_page().await?;
        let page = self.extractor.extract(&html);

        if page.cells.is_empty() {
            tracing::warn!(
                "No contribution cells found for '{}'; the page layout may have changed",
                self.config.username()
            );
        }
        Ok(page)
    }

    async fn transform(&self, page: RawPage) -> Result<ContributionGraph> {
        let days = normalize_all(&page.cells);
        let skipped = page.cells.len() - days.len();
        if skipped > 0 {
            tracing::debug!("Skipped {} cells with unparsable dates", skipped);
        }

        Ok(assemble_graph(
            self.config.username(),
            self.config.year(),
            page.total,
            days,
        ))
    }
}
