//! Chromosome decoder: text encoding to [`Chromosome`].
//!
//! Grammar (whitespace between tokens is insignificant):
//!
//! ```text
//! chromosome := header node{rows*cols} output <ignored>
//! header     := ('{' | '(') uint ',' uint ',' uint ',' uint ',' uint ',' uint ',' uint ('}' | ')')
//! node       := '(' '[' id ']' uint ',' uint ',' uint ')'
//! output     := '(' uint ')'
//! ```
//!
//! The decoder reads exactly the declared number of node records and one
//! output record, so anything after the output record is ignored.

use std::collections::BTreeMap;

use super::cursor::Cursor;
use super::types::{Chromosome, Header, Node, NodeId, Ref};
use crate::error::DecodeError;
use crate::functions;

/// Header fields in encoding order, named for error messages.
const HEADER_FIELDS: [&str; 7] = [
    "input count",
    "output count",
    "grid rows",
    "grid columns",
    "node input arity",
    "node output arity",
    "function count",
];

// ─── Entry point ─────────────────────────────────────────────────────────────

/// Decode a textual chromosome.
pub fn decode(text: &str) -> Result<Chromosome, DecodeError> {
    let mut cursor = Cursor::new(text);
    let header = parse_header(&mut cursor)?;

    let mut nodes = BTreeMap::new();
    for id in header.first_node_id()..header.node_id_end() {
        let node = parse_node(&mut cursor, &header, id)?;
        nodes.insert(id, node);
    }

    let output = parse_output(&mut cursor, &header)?;
    Ok(Chromosome::new(header, nodes, output))
}

// ─── Header ──────────────────────────────────────────────────────────────────

fn parse_header(c: &mut Cursor) -> Result<Header, DecodeError> {
    let closer = match c.consume_any(&['{', '(']) {
        Some('{') => '}',
        Some(_) => ')',
        None => {
            return Err(DecodeError::header(
                c.pos,
                format!("expected '{{' or '(', found {}", c.describe_current()),
            ));
        }
    };

    let mut fields = [0u32; 7];
    for (i, name) in HEADER_FIELDS.iter().enumerate() {
        if i > 0 && !c.consume(',') {
            return Err(DecodeError::header(
                c.pos,
                format!("expected ',' before {name}, found {}", c.describe_current()),
            ));
        }
        fields[i] = c.match_uint().ok_or_else(|| {
            DecodeError::header(
                c.pos,
                format!("expected {name}, found {}", c.describe_current()),
            )
        })?;
    }
    if !c.consume(closer) {
        return Err(DecodeError::header(
            c.pos,
            format!("expected '{closer}', found {}", c.describe_current()),
        ));
    }

    let [
        num_inputs,
        num_outputs,
        grid_rows,
        grid_cols,
        inputs_per_node,
        outputs_per_node,
        num_functions,
    ] = fields;
    let header = Header {
        num_inputs,
        num_outputs,
        grid_rows,
        grid_cols,
        inputs_per_node,
        outputs_per_node,
        num_functions,
    };

    if num_outputs != 1 {
        return Err(DecodeError::header(
            c.pos,
            format!("expected a single-output circuit, header declares {num_outputs} outputs"),
        ));
    }
    if grid_rows == 0 || grid_cols == 0 {
        return Err(DecodeError::header(
            c.pos,
            format!("empty grid {grid_rows}x{grid_cols}"),
        ));
    }
    let fits = grid_rows
        .checked_mul(grid_cols)
        .and_then(|n| n.checked_add(num_inputs))
        .is_some();
    if !fits {
        return Err(DecodeError::header(c.pos, "node id range overflows"));
    }
    Ok(header)
}

// ─── Node records ────────────────────────────────────────────────────────────

fn parse_node(c: &mut Cursor, header: &Header, id: NodeId) -> Result<Node, DecodeError> {
    let expected = |c: &Cursor, what: &str| {
        DecodeError::node(
            id,
            c.pos,
            format!("expected {what}, found {}", c.describe_current()),
        )
    };

    if !c.consume('(') {
        return Err(expected(c, "'('"));
    }
    let record_pos = c.pos - 1;
    if !c.consume('[') {
        return Err(expected(c, "'['"));
    }
    c.skip_ws();
    let id_pos = c.pos;
    let found = c.match_uint().ok_or_else(|| expected(c, "node id"))?;
    if found != id {
        return Err(DecodeError::node(
            id,
            id_pos,
            format!("node id {found} out of sequence"),
        ));
    }
    if !c.consume(']') {
        return Err(expected(c, "']'"));
    }

    let a = c.match_uint().ok_or_else(|| expected(c, "input A reference"))?;
    if !c.consume(',') {
        return Err(expected(c, "','"));
    }
    let b = c.match_uint().ok_or_else(|| expected(c, "input B reference"))?;
    if !c.consume(',') {
        return Err(expected(c, "','"));
    }
    let f = c.match_uint().ok_or_else(|| expected(c, "function id"))?;
    if !c.consume(')') {
        return Err(expected(c, "')'"));
    }

    // References must point strictly backwards; this keeps the graph acyclic.
    for (port, raw) in [("A", a), ("B", b)] {
        if raw >= id {
            return Err(DecodeError::node(
                id,
                record_pos,
                format!("input {port} references {raw}, which is not below the node's own id"),
            ));
        }
    }

    let function =
        functions::lookup(f).map_err(|source| DecodeError::UnknownFunction { node: id, source })?;

    Ok(Node {
        id,
        input_a: Ref::from_raw(a, header.num_inputs),
        input_b: Ref::from_raw(b, header.num_inputs),
        function,
    })
}

// ─── Output record ───────────────────────────────────────────────────────────

fn parse_output(c: &mut Cursor, header: &Header) -> Result<Ref, DecodeError> {
    let expected = |c: &Cursor, what: &str| {
        DecodeError::output(
            c.pos,
            format!("expected {what}, found {}", c.describe_current()),
        )
    };

    if !c.consume('(') {
        return Err(expected(c, "'('"));
    }
    c.skip_ws();
    let ref_pos = c.pos;
    let raw = c.match_uint().ok_or_else(|| expected(c, "output reference"))?;
    if !c.consume(')') {
        return Err(expected(c, "')'"));
    }
    if raw >= header.node_id_end() {
        return Err(DecodeError::output(
            ref_pos,
            format!(
                "output references {raw}, but the highest node id is {}",
                header.node_id_end() - 1
            ),
        ));
    }
    Ok(Ref::from_raw(raw, header.num_inputs))
}

#[cfg(test)]
#[path = "../../tests/rust/test_chromosome_decoder.rs"]
mod tests;
