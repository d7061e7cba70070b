use crate::core::{ContributionGraph, GraphSink};
use crate::utils::error::Result;
use std::io::Write;
use std::path::PathBuf;

/// Pretty JSON with two-space indentation and a trailing newline.
pub fn encode_graph(graph: &ContributionGraph) -> Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(graph)?;
    data.push(b'\n');
    Ok(data)
}

#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl GraphSink for StdoutSink {
    async fn write_graph(&self, data: &[u8]) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(data)?;
        stdout.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GraphSink for FileSink {
    async fn write_graph(&self, data: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(&self.path, data)?;
        tracing::info!("Output saved to: {}", self.path.display());
        Ok(())
    }
}
