//! CLI command implementations.

pub mod cuts;
pub mod diameters;
pub mod info;
pub mod report;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use grafo_adapters::{GraphReader, ReaderConfig};
use grafo_core::Graph;

use crate::output::Format;

/// Flags shared by every command.
#[derive(Clone, Copy)]
pub struct Options {
    /// Table or JSON output.
    pub format: Format,
    /// Print nothing on success.
    pub quiet: bool,
    /// Skip analysis at load time.
    pub lazy: bool,
}

/// Load the graph at `path`, or from stdin when `path` is `-`.
pub fn load(path: &Path, options: Options) -> Result<Graph> {
    let reader =
        GraphReader::with_config(ReaderConfig::default().with_eager_analysis(!options.lazy));

    let graph = if path.as_os_str() == "-" {
        reader
            .read(io::stdin().lock())
            .context("failed to read graph from stdin")?
    } else {
        reader
            .read_path(path)
            .with_context(|| format!("failed to read graph from {}", path.display()))?
    };

    tracing::info!(
        name = graph.name(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}
