//! Component diameters command.

use std::path::Path;

use anyhow::Result;
use grafo_core::report::render_diameters;
use serde::Serialize;

use super::Options;
use crate::output::{self, Format};

#[derive(Serialize)]
struct DiametersOutput<'a> {
    component_count: usize,
    diameters: &'a [u64],
    rendered: String,
}

/// Run the diameters command.
pub fn run(path: &Path, options: Options) -> Result<()> {
    let graph = super::load(path, options)?;
    let diameters = graph.diameters()?;

    let output = DiametersOutput {
        component_count: graph.component_count()?,
        diameters,
        rendered: render_diameters(diameters),
    };

    match options.format {
        Format::Json => output::print_json(&output, options.quiet)?,
        Format::Table => {
            let items = vec![
                ("Components", output.component_count.to_string()),
                ("Diameters", output.rendered),
                (
                    "Largest",
                    diameters
                        .last()
                        .map_or_else(|| "-".to_string(), ToString::to_string),
                ),
            ];
            output::print_key_value_table(&items, options.quiet);
        }
    }

    Ok(())
}
