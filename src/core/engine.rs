use crate::core::output::encode_graph;
use crate::core::{ContributionGraph, GraphSink, Pipeline};
use crate::utils::error::Result;

pub struct GraphEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GraphEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<ContributionGraph> {
        tracing::debug!("Extracting contribution cells...");
        let page = self.pipeline.extract().await?;
        tracing::info!("Extracted {} contribution cells", page.cells.len());

        tracing::debug!("Normalizing contribution cells...");
        let graph = self.pipeline.transform(page).await?;
        tracing::info!(
            "Built graph for '{}' with {} days ({} total contributions)",
            graph.username,
            graph.days.len(),
            graph.total_contributions
        );

        Ok(graph)
    }

    /// Runs the pipeline and writes the document only once everything succeeded.
    pub async fn run_into<S: GraphSink>(&self, sink: &S) -> Result<ContributionGraph> {
        let graph = self.run().await?;
        let encoded = encode_graph(&graph)?;
        sink.write_graph(&encoded).await?;
        Ok(graph)
    }
}
