pub mod calendar;
pub mod engine;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod output;
pub mod pipeline;

pub use crate::domain::model::{ContributionGraph, RawPage};
pub use crate::domain::ports::{
    ConfigProvider, FragmentExtractor, GraphSink, HtmlSource, Pipeline,
};
pub use crate::utils::error::Result;
