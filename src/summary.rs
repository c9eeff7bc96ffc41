//! Human-readable chromosome report.

use std::fmt::Write as _;

use crate::activity::{active_depth, ActivitySet};
use crate::chromosome::Chromosome;

/// Render header, grid table (active cells marked `*`), output and activity
/// statistics. The table has one line per grid row.
pub fn summarize(chromosome: &Chromosome, active: &ActivitySet) -> String {
    let h = chromosome.header();
    let mut out = String::new();
    let _ = writeln!(out, "Inputs: {}", h.num_inputs);
    let _ = writeln!(out, "Outputs: {}", h.num_outputs);
    let _ = writeln!(out, "Size: {} x {}", h.grid_cols, h.grid_rows);
    let _ = writeln!(
        out,
        "Blocks: {}-ary, {} output(s), {} functions",
        h.inputs_per_node, h.outputs_per_node, h.num_functions
    );

    for row in 0..h.grid_rows {
        let cells: Vec<String> = (0..h.grid_cols)
            .filter_map(|col| chromosome.node(h.first_node_id() + col * h.grid_rows + row))
            .map(|node| {
                let mark = if active.contains(node.id) { '*' } else { ' ' };
                format!(
                    "([{:2}] {:2}, {:2}, {:2}){mark}",
                    node.id, node.input_a, node.input_b, node.function.id
                )
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join(" "));
    }

    let _ = writeln!(out, "Output: {}", chromosome.output());
    let _ = writeln!(
        out,
        "Active nodes: {} of {}",
        active.len(),
        chromosome.node_count()
    );
    match active_depth(chromosome, active) {
        Some(depth) => {
            let _ = writeln!(out, "Active depth: {depth}");
        }
        None => {
            let _ = writeln!(out, "Active depth: cyclic");
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/rust/test_summary.rs"]
mod tests;
