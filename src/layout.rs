//! Layout engine: fixed anchor coordinates of the diagram template.
//!
//! Every constant here is part of the template's coordinate system. A
//! mismatch shows up as a misplaced line, never as an error.

use crate::chromosome::{Chromosome, NodeId, Ref};

// ─── Template geometry ───────────────────────────────────────────────────────

pub const PRIMARY_IN_X: f64 = 31.803 + 4.130;
pub const PRIMARY_IN_Y: f64 = 26.96;
pub const PRIMARY_IN_STEP: f64 = 26.14;

pub const PRIMARY_OUT_X: f64 = 723.204 - 4.130;
pub const PRIMARY_OUT_Y: f64 = 135.36;

pub const FIRST_IN_X: f64 = 75.669;
pub const FIRST_IN_Y: f64 = 36.78 + 1.391 / 2.0;
pub const FIRST_OUT_X: f64 = 108.053 + 9.850;
pub const FIRST_OUT_Y: f64 = 44.67 + 1.391 / 2.0;
pub const INB_STEP: f64 = 15.778;
pub const NODE_STEP_X: f64 = 80.0;
pub const NODE_STEP_Y: f64 = 60.0;

/// Body anchor of the first node, relative to its own template group.
pub const BODY_ORIGIN: Point = Point { x: 0.0, y: 0.0 };

/// Text anchors for primary-input labels, local to the node's element.
pub const PRIMARY_TEXT_X: f64 = 17.89436;
pub const PRIMARY_TEXT_A_Y: f64 = 164.57831;
pub const PRIMARY_TEXT_B_Y: f64 = 192.57831;

/// First grid column whose primary-input connections may become text.
pub const PRIMARY_TEXT_MIN_COLUMN: u32 = 1;

// ─── Point / ports ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One of the two input ports of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputPort {
    A,
    B,
}

impl InputPort {
    pub const BOTH: [InputPort; 2] = [InputPort::A, InputPort::B];

    /// Template label of the port's tick mark.
    pub fn tick_label(self) -> &'static str {
        match self {
            InputPort::A => "inA",
            InputPort::B => "inB",
        }
    }

    /// Lowest function arity that consumes this port.
    pub fn min_arity(self) -> u8 {
        match self {
            InputPort::A => 1,
            InputPort::B => 2,
        }
    }
}

/// Logical role of an anchor on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Body,
    Input(InputPort),
    Output,
}

// ─── Grid ────────────────────────────────────────────────────────────────────

/// Maps node ids to grid cells. Nodes fill the grid column by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub num_inputs: u32,
    pub rows: u32,
}

impl Grid {
    pub fn new(num_inputs: u32, rows: u32) -> Self {
        Self { num_inputs, rows }
    }

    pub fn of(chromosome: &Chromosome) -> Self {
        let h = chromosome.header();
        Self::new(h.num_inputs, h.grid_rows)
    }

    /// `(column, row)` of a node.
    pub fn cell(&self, id: NodeId) -> (u32, u32) {
        let index = id.saturating_sub(self.num_inputs);
        let rows = self.rows.max(1);
        (index / rows, index % rows)
    }

    pub fn column(&self, id: NodeId) -> u32 {
        self.cell(id).0
    }

    pub fn primary_in(&self, index: u32) -> Point {
        Point::new(PRIMARY_IN_X, PRIMARY_IN_Y + f64::from(index) * PRIMARY_IN_STEP)
    }

    pub fn primary_out(&self) -> Point {
        Point::new(PRIMARY_OUT_X, PRIMARY_OUT_Y)
    }

    /// Body anchor of a node: the translation the template applies to the
    /// node's `block{id}` group.
    ///
    /// Every block is drawn at the first node's position and shifted by its
    /// grid step, so bodies start at [`BODY_ORIGIN`] while the port constants
    /// are absolute coordinates of the first node's ports.
    pub fn body(&self, id: NodeId) -> Point {
        let (dx, dy) = self.step(id);
        Point::new(BODY_ORIGIN.x + dx, BODY_ORIGIN.y + dy)
    }

    /// Grid-step offset of a node from the first node.
    fn step(&self, id: NodeId) -> (f64, f64) {
        let (col, row) = self.cell(id);
        (f64::from(col) * NODE_STEP_X, f64::from(row) * NODE_STEP_Y)
    }

    pub fn input(&self, id: NodeId, port: InputPort) -> Point {
        let (dx, dy) = self.step(id);
        let a = Point::new(FIRST_IN_X + dx, FIRST_IN_Y + dy);
        match port {
            InputPort::A => a,
            InputPort::B => Point::new(a.x, a.y + INB_STEP),
        }
    }

    pub fn output(&self, id: NodeId) -> Point {
        let (dx, dy) = self.step(id);
        Point::new(FIRST_OUT_X + dx, FIRST_OUT_Y + dy)
    }

    pub fn anchor(&self, id: NodeId, anchor: Anchor) -> Point {
        match anchor {
            Anchor::Body => self.body(id),
            Anchor::Input(port) => self.input(id, port),
            Anchor::Output => self.output(id),
        }
    }

    /// Where a connection leaving `source` starts.
    pub fn source(&self, source: Ref) -> Point {
        match source {
            Ref::Primary(index) => self.primary_in(index),
            Ref::Node(id) => self.anchor(id, Anchor::Output),
        }
    }
}

pub fn primary_text_anchor(port: InputPort) -> Point {
    match port {
        InputPort::A => Point::new(PRIMARY_TEXT_X, PRIMARY_TEXT_A_Y),
        InputPort::B => Point::new(PRIMARY_TEXT_X, PRIMARY_TEXT_B_Y),
    }
}

// ─── Connection rendering ────────────────────────────────────────────────────

/// How one input connection is drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionRender {
    Line { from: Point, to: Point },
    /// Primary-input index written next to the port, local to the node.
    Text { anchor: Point, label: String },
}

/// Decide how the connection `source -> target.port` is drawn.
///
/// `as_text` asks for primary inputs to be written as labels; it only takes
/// effect from [`PRIMARY_TEXT_MIN_COLUMN`] onwards.
pub fn connection_render(
    grid: &Grid,
    source: Ref,
    target: NodeId,
    port: InputPort,
    as_text: bool,
) -> ConnectionRender {
    match source {
        Ref::Primary(index) if as_text && grid.column(target) >= PRIMARY_TEXT_MIN_COLUMN => {
            ConnectionRender::Text {
                anchor: primary_text_anchor(port),
                label: index.to_string(),
            }
        }
        _ => ConnectionRender::Line {
            from: grid.source(source),
            to: grid.anchor(target, Anchor::Input(port)),
        },
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_layout.rs"]
mod tests;
