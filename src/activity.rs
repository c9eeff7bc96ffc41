//! Activity analysis: which nodes contribute to the circuit output.
//!
//! A node is active when it is the output node or feeds an active node
//! through an input its function actually consumes.

use std::collections::{BTreeSet, HashMap};

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::chromosome::{Chromosome, NodeId, Ref};

// ── ActivitySet ──────────────────────────────────────────────────────────────

/// Set of active node ids, iterated in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitySet(BTreeSet<NodeId>);

impl ActivitySet {
    pub fn contains(&self, id: NodeId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<NodeId> for ActivitySet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ── Backward sweep ───────────────────────────────────────────────────────────

/// Compute the active set by one descending sweep from the output.
///
/// Each node is visited once, highest id first. The set only grows, so the
/// sweep terminates even for hand-built graphs with forward references; such
/// references are simply not followed back up.
pub fn compute_active(chromosome: &Chromosome) -> ActivitySet {
    let Ref::Node(output) = chromosome.output() else {
        return ActivitySet::default();
    };

    let mut active = BTreeSet::from([output]);
    for node in chromosome.nodes().rev() {
        if !active.contains(&node.id) {
            continue;
        }
        active.extend(node.live_inputs().filter_map(Ref::node));
    }
    ActivitySet(active)
}

// ── Depth ────────────────────────────────────────────────────────────────────

/// Active nodes on the longest path from a primary input to the output.
///
/// Returns `Some(0)` when the output is a primary input and `None` if the
/// live connections are cyclic, which a decoded chromosome never is.
pub fn active_depth(chromosome: &Chromosome, active: &ActivitySet) -> Option<usize> {
    let Ref::Node(output) = chromosome.output() else {
        return Some(0);
    };

    let mut graph: DiGraph<NodeId, ()> = DiGraph::new();
    let index: HashMap<NodeId, NodeIndex> =
        active.iter().map(|id| (id, graph.add_node(id))).collect();

    for id in active.iter() {
        let (Some(node), Some(&to)) = (chromosome.node(id), index.get(&id)) else {
            continue;
        };
        for source in node.live_inputs().filter_map(Ref::node) {
            if let Some(&from) = index.get(&source) {
                graph.add_edge(from, to, ());
            }
        }
    }

    let order = toposort(&graph, None).ok()?;
    let mut depth: HashMap<NodeIndex, usize> = HashMap::new();
    for idx in order {
        let deepest_input = graph
            .neighbors_directed(idx, Direction::Incoming)
            .filter_map(|pred| depth.get(&pred).copied())
            .max()
            .unwrap_or(0);
        depth.insert(idx, deepest_input + 1);
    }
    index.get(&output).and_then(|idx| depth.get(idx).copied())
}

#[cfg(test)]
#[path = "../tests/rust/test_activity.rs"]
mod tests;
