use crate::domain::model::{ContributionGraph, RawPage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Where the raw contribution page comes from.
pub trait HtmlSource: Send + Sync {
    fn fetch_page(&self) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Where the encoded document goes.
pub trait GraphSink: Send + Sync {
    fn write_graph(&self, data: &[u8]) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Scans page text for the aggregate total and the per-day cells.
pub trait FragmentExtractor: Send + Sync {
    fn extract(&self, html: &str) -> RawPage;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn username(&self) -> &str;
    fn year(&self) -> i32;
    fn timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;
    fn accept(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<RawPage>;
    async fn transform(&self, page: RawPage) -> Result<ContributionGraph>;
}
