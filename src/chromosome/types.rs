//! Decoded chromosome data structures.
//!
//! A chromosome is built once by the decoder and is read-only afterwards.

use std::collections::BTreeMap;
use std::fmt;

use crate::functions::FunctionSpec;

// ─── Identifiers ─────────────────────────────────────────────────────────────

/// Node identifier. Node ids start right after the primary-input indices.
pub type NodeId = u32;

/// Source of a node input or of the circuit output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ref {
    /// Primary input, by index.
    Primary(u32),
    /// Output of another node.
    Node(NodeId),
}

impl Ref {
    /// Classify a raw encoded reference against the primary-input count.
    pub fn from_raw(raw: u32, num_inputs: u32) -> Self {
        if raw < num_inputs {
            Ref::Primary(raw)
        } else {
            Ref::Node(raw)
        }
    }

    /// The integer this reference is encoded as.
    pub fn raw(self) -> u32 {
        match self {
            Ref::Primary(i) | Ref::Node(i) => i,
        }
    }

    pub fn node(self) -> Option<NodeId> {
        match self {
            Ref::Node(id) => Some(id),
            Ref::Primary(_) => None,
        }
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw(), f)
    }
}

// ─── Header ──────────────────────────────────────────────────────────────────

/// The leading `{i,o,r,c,bi,bo,f}` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub num_inputs: u32,
    pub num_outputs: u32,
    pub grid_rows: u32,
    pub grid_cols: u32,
    pub inputs_per_node: u32,
    pub outputs_per_node: u32,
    pub num_functions: u32,
}

impl Header {
    pub fn node_count(&self) -> u32 {
        self.grid_rows * self.grid_cols
    }

    pub fn first_node_id(&self) -> NodeId {
        self.num_inputs
    }

    /// One past the highest node id.
    pub fn node_id_end(&self) -> NodeId {
        self.num_inputs + self.node_count()
    }
}

// ─── Node ────────────────────────────────────────────────────────────────────

/// One grid cell of the circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub input_a: Ref,
    pub input_b: Ref,
    pub function: &'static FunctionSpec,
}

impl Node {
    pub fn arity(&self) -> u8 {
        self.function.arity
    }

    /// Inputs the node's function actually consumes, in port order.
    pub fn live_inputs(&self) -> impl Iterator<Item = Ref> + '_ {
        [self.input_a, self.input_b]
            .into_iter()
            .take(usize::from(self.arity()))
    }
}

// ─── Chromosome ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    header: Header,
    nodes: BTreeMap<NodeId, Node>,
    output: Ref,
}

impl Chromosome {
    /// Assemble a chromosome. Callers guarantee the decoder's invariants.
    pub(crate) fn new(header: Header, nodes: BTreeMap<NodeId, Node>, output: Ref) -> Self {
        Self {
            header,
            nodes,
            output,
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn num_inputs(&self) -> u32 {
        self.header.num_inputs
    }

    pub fn output(&self) -> Ref {
        self.output
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Nodes in ascending id order.
    pub fn nodes(&self) -> impl DoubleEndedIterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::encoder::encode(self))
    }
}
