//! Canonical re-encoding in the producer's compat format.

use std::fmt::Write as _;

use super::types::Chromosome;

/// Encode as `{i, o, r, c, bi, bo, f}([id] a, b, f)...(out)` plus a newline.
pub fn encode(chromosome: &Chromosome) -> String {
    let h = chromosome.header();
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "{{{}, {}, {}, {}, {}, {}, {}}}",
        h.num_inputs,
        h.num_outputs,
        h.grid_rows,
        h.grid_cols,
        h.inputs_per_node,
        h.outputs_per_node,
        h.num_functions
    );
    for node in chromosome.nodes() {
        let _ = write!(
            out,
            "([{}] {}, {}, {})",
            node.id, node.input_a, node.input_b, node.function.id
        );
    }
    let _ = writeln!(out, "({})", chromosome.output());
    out
}
