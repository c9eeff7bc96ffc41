//! Diagram annotator: turns a decoded chromosome into template mutations.
//!
//! [`plan`] is pure and produces the full, deterministic list of
//! [`AnnotationOp`]s; [`apply`] replays them against a [`DiagramDocument`].

use crate::activity::ActivitySet;
use crate::chromosome::{Chromosome, Node, NodeId, Ref};
use crate::config::RenderPolicy;
use crate::document::DiagramDocument;
use crate::error::DiagramError;
use crate::layout::{connection_render, ConnectionRender, Grid, InputPort, Point};

// ── Template contract ────────────────────────────────────────────────────────

/// Label of the text element holding a node's function symbol.
pub const FUNCTION_LABEL: &str = "function";
/// Label of the border rectangle that must end up above all lines.
pub const FRAME_LABEL: &str = "mainrect";
/// Color the template paints node bodies with.
pub const TEMPLATE_BODY_COLOR: &str = "#cacaca";

/// Template label of a node's group element.
pub fn node_label(id: NodeId) -> String {
    format!("block{id}")
}

// ── Colors ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Connections feeding active nodes.
    ActiveLine,
    /// Connections of inactive nodes and unused port ticks.
    Inactive,
    /// Body of an active node.
    ActiveBody,
}

impl Color {
    pub fn hex(self) -> &'static str {
        match self {
            Color::ActiveLine => "#00ab00",
            Color::Inactive => "#cacaca",
            Color::ActiveBody => "#000000",
        }
    }
}

// ── Operations ───────────────────────────────────────────────────────────────

/// One mutation of the diagram template.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationOp {
    /// Line appended to the document root.
    DrawConnection { from: Point, to: Point, color: Color },
    /// Primary-input index written inside the target node's element.
    DrawTextConnection {
        target: NodeId,
        port: InputPort,
        anchor: Point,
        label: String,
        color: Color,
    },
    SetNodeLabel { node: NodeId, text: String },
    SetNodeColor { node: NodeId, color: Color },
    /// Recolor the tick mark of a port the node's function does not use.
    SetPortColor { node: NodeId, port: InputPort, color: Color },
    /// Move a labeled element to the end of the root, keeping its position.
    RaiseElement { label: String },
}

fn input_of(node: &Node, port: InputPort) -> Ref {
    match port {
        InputPort::A => node.input_a,
        InputPort::B => node.input_b,
    }
}

// ── Planning ─────────────────────────────────────────────────────────────────

/// Build the annotation sequence for a chromosome.
///
/// Order: output connection, then each node by ascending id (label, body
/// color, port A, port B), then the frame raise.
pub fn plan(
    chromosome: &Chromosome,
    active: &ActivitySet,
    policy: RenderPolicy,
) -> Vec<AnnotationOp> {
    let grid = Grid::of(chromosome);
    let mut ops = Vec::with_capacity(chromosome.node_count() * 4 + 2);

    // The output connection is always a line, even from a primary input.
    ops.push(AnnotationOp::DrawConnection {
        from: grid.source(chromosome.output()),
        to: grid.primary_out(),
        color: Color::ActiveLine,
    });

    for node in chromosome.nodes() {
        let is_active = active.contains(node.id);
        ops.push(AnnotationOp::SetNodeLabel {
            node: node.id,
            text: node.function.symbol.to_string(),
        });
        if is_active {
            ops.push(AnnotationOp::SetNodeColor {
                node: node.id,
                color: Color::ActiveBody,
            });
        }

        let line_color = if is_active {
            Color::ActiveLine
        } else {
            Color::Inactive
        };
        let as_text = policy.primary_text_for(is_active);

        for port in InputPort::BOTH {
            if node.arity() < port.min_arity() {
                ops.push(AnnotationOp::SetPortColor {
                    node: node.id,
                    port,
                    color: Color::Inactive,
                });
                continue;
            }
            let op = match connection_render(&grid, input_of(node, port), node.id, port, as_text) {
                ConnectionRender::Line { from, to } => AnnotationOp::DrawConnection {
                    from,
                    to,
                    color: line_color,
                },
                ConnectionRender::Text { anchor, label } => AnnotationOp::DrawTextConnection {
                    target: node.id,
                    port,
                    anchor,
                    label,
                    color: line_color,
                },
            };
            ops.push(op);
        }
    }

    ops.push(AnnotationOp::RaiseElement {
        label: FRAME_LABEL.to_string(),
    });
    ops
}

// ── Application ──────────────────────────────────────────────────────────────

fn find_node<D: DiagramDocument>(doc: &D, id: NodeId) -> Result<D::Element, DiagramError> {
    doc.find_element_by_label(doc.root(), &node_label(id))
}

/// Replay `ops` against `doc`, stopping at the first missing element.
pub fn apply<D: DiagramDocument>(doc: &mut D, ops: &[AnnotationOp]) -> Result<(), DiagramError> {
    let root = doc.root();
    for op in ops {
        match op {
            AnnotationOp::DrawConnection { from, to, color } => {
                doc.add_line(root, *from, *to, color.hex());
            }
            AnnotationOp::DrawTextConnection {
                target,
                anchor,
                label,
                color,
                ..
            } => {
                let element = find_node(doc, *target)?;
                doc.add_text(element, *anchor, label, color.hex());
            }
            AnnotationOp::SetNodeLabel { node, text } => {
                let element = find_node(doc, *node)?;
                let symbol = doc.find_element_by_label(element, FUNCTION_LABEL)?;
                doc.set_text(symbol, text);
            }
            AnnotationOp::SetNodeColor { node, color } => {
                let element = find_node(doc, *node)?;
                doc.set_style_color(element, TEMPLATE_BODY_COLOR, color.hex());
            }
            AnnotationOp::SetPortColor { node, port, color } => {
                let element = find_node(doc, *node)?;
                let tick = doc.find_element_by_label(element, port.tick_label())?;
                doc.set_stroke_color(tick, color.hex());
            }
            AnnotationOp::RaiseElement { label } => {
                let element = doc.find_element_by_label(root, label)?;
                let parent = doc.find_parent_by_label(root, label)?;
                let (dx, dy) = doc.get_translation_offset(parent);
                doc.shift_position(element, dx, dy)?;
                doc.reparent_to_root_end(element);
            }
        }
    }
    Ok(())
}

/// Plan and apply in one pass.
pub fn annotate<D: DiagramDocument>(
    chromosome: &Chromosome,
    active: &ActivitySet,
    policy: RenderPolicy,
    doc: &mut D,
) -> Result<(), DiagramError> {
    apply(doc, &plan(chromosome, active, policy))
}

#[cfg(test)]
#[path = "../tests/rust/test_annotate.rs"]
mod tests;
