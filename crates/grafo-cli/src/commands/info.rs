//! Graph info command.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use super::Options;
use crate::output::{self, Format};

/// Summary counts of a graph.
#[derive(Serialize)]
struct GraphInfoOutput {
    name: String,
    vertex_count: usize,
    edge_count: usize,
    component_count: usize,
    largest_component: usize,
    bipartite: bool,
}

/// Run the info command.
pub fn run(path: &Path, options: Options) -> Result<()> {
    let graph = super::load(path, options)?;
    let components = graph.components()?;

    let output = GraphInfoOutput {
        name: graph.name().to_string(),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        component_count: components.count(),
        largest_component: components.largest(),
        bipartite: graph.is_bipartite()?,
    };

    match options.format {
        Format::Json => output::print_json(&output, options.quiet)?,
        Format::Table => {
            let items = vec![
                ("Name", output.name),
                ("Vertices", output.vertex_count.to_string()),
                ("Edges", output.edge_count.to_string()),
                ("Components", output.component_count.to_string()),
                ("Largest Component", output.largest_component.to_string()),
                ("Bipartite", output.bipartite.to_string()),
            ];
            output::print_key_value_table(&items, options.quiet);
        }
    }

    Ok(())
}
