//! Articulation points and bridges command.

use std::path::Path;

use anyhow::Result;
use comfy_table::Cell;
use grafo_core::report::{render_bridges, render_names};
use serde::Serialize;

use super::Options;
use crate::output::{self, Format};

/// Cut sets with their text renderings.
#[derive(Serialize)]
struct CutsOutput<'a> {
    articulation_points: &'a [std::sync::Arc<str>],
    bridges: &'a [grafo_core::Bridge],
    rendered_articulation_points: String,
    rendered_bridges: String,
}

/// Run the cuts command.
pub fn run(path: &Path, options: Options) -> Result<()> {
    let graph = super::load(path, options)?;
    let cuts = graph.cut_sets()?;

    match options.format {
        Format::Json => {
            let output = CutsOutput {
                articulation_points: &cuts.articulation_points,
                bridges: &cuts.bridges,
                rendered_articulation_points: render_names(&cuts.articulation_points),
                rendered_bridges: render_bridges(&cuts.bridges),
            };
            output::print_json(&output, options.quiet)?;
        }
        Format::Table => {
            if options.quiet {
                return Ok(());
            }

            let mut table = output::create_table();
            output::add_header(&mut table, &["Kind", "Vertices"]);
            for name in &cuts.articulation_points {
                table.add_row(vec![Cell::new("articulation point"), Cell::new(name)]);
            }
            for bridge in &cuts.bridges {
                table.add_row(vec![
                    Cell::new("bridge"),
                    Cell::new(format!("{} -- {}", bridge.first(), bridge.second())),
                ]);
            }
            println!("{table}");
            output::status(
                &format!(
                    "{} articulation point(s), {} bridge(s)",
                    cuts.articulation_points.len(),
                    cuts.bridges.len()
                ),
                options.quiet,
            );
        }
    }

    Ok(())
}
