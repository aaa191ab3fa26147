//! Full analysis report command.

use std::path::Path;

use anyhow::Result;
use grafo_core::GraphReport;

use super::Options;
use crate::output::{self, Format};

/// Run the report command.
pub fn run(path: &Path, options: Options) -> Result<()> {
    let graph = super::load(path, options)?;
    let report = GraphReport::from_graph(&graph)?;

    match options.format {
        Format::Json => output::print_json(&report, options.quiet)?,
        Format::Table => {
            let items = vec![
                ("Name", report.name.to_string()),
                ("Vertices", report.vertex_count.to_string()),
                ("Edges", report.edge_count.to_string()),
                ("Components", report.component_count.to_string()),
                ("Largest Component", report.largest_component.to_string()),
                ("Bipartite", report.bipartite.to_string()),
                ("Articulation Points", report.rendered.articulation_points),
                ("Bridges", report.rendered.bridges),
                ("Diameters", report.rendered.diameters),
            ];
            output::print_key_value_table(&items, options.quiet);
        }
    }

    Ok(())
}
