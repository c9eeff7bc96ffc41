use super::*;

const EPS: f64 = 1e-9;

fn grid() -> Grid {
    Grid::new(9, 4)
}

fn assert_close(actual: Point, x: f64, y: f64) {
    assert!(
        (actual.x - x).abs() < EPS && (actual.y - y).abs() < EPS,
        "expected ({x}, {y}), got ({}, {})",
        actual.x,
        actual.y
    );
}

#[test]
fn test_cells_fill_columns_first() {
    let g = grid();
    assert_eq!(g.cell(9), (0, 0));
    assert_eq!(g.cell(12), (0, 3));
    assert_eq!(g.cell(13), (1, 0));
    assert_eq!(g.cell(40), (7, 3));
    assert_eq!(g.column(16), 1);
}

#[test]
fn test_primary_inputs() {
    let g = grid();
    assert_close(g.primary_in(0), 35.933, 26.96);
    assert_close(g.primary_in(2), 35.933, 26.96 + 2.0 * 26.14);
}

#[test]
fn test_primary_output() {
    assert_close(grid().primary_out(), 719.074, 135.36);
}

#[test]
fn test_first_node_ports() {
    let g = grid();
    assert_close(g.input(9, InputPort::A), 75.669, 37.4755);
    assert_close(g.input(9, InputPort::B), 75.669, 37.4755 + 15.778);
    assert_close(g.output(9), 117.903, 45.3655);
}

#[test]
fn test_ports_follow_grid_steps() {
    let g = grid();
    // Node 14 sits in column 1, row 1.
    assert_close(g.body(14), 80.0, 60.0);
    assert_close(g.input(14, InputPort::A), 155.669, 97.4755);
    assert_close(g.output(14), 197.903, 105.3655);
}

#[test]
fn test_anchor_dispatch() {
    let g = grid();
    assert_eq!(g.anchor(20, Anchor::Body), g.body(20));
    assert_eq!(g.anchor(20, Anchor::Input(InputPort::B)), g.input(20, InputPort::B));
    assert_eq!(g.anchor(20, Anchor::Output), g.output(20));
}

#[test]
fn test_source_points() {
    let g = grid();
    assert_eq!(g.source(Ref::Primary(3)), g.primary_in(3));
    assert_eq!(g.source(Ref::Node(17)), g.output(17));
}

#[test]
fn test_port_metadata() {
    assert_eq!(InputPort::A.tick_label(), "inA");
    assert_eq!(InputPort::B.tick_label(), "inB");
    assert_eq!(InputPort::A.min_arity(), 1);
    assert_eq!(InputPort::B.min_arity(), 2);
}

// ─── Connection rendering ────────────────────────────────────────────────────

#[test]
fn test_line_when_text_not_requested() {
    let g = grid();
    let r = connection_render(&g, Ref::Primary(4), 20, InputPort::A, false);
    assert_eq!(
        r,
        ConnectionRender::Line {
            from: g.primary_in(4),
            to: g.input(20, InputPort::A),
        }
    );
}

#[test]
fn test_text_for_primary_past_threshold() {
    let g = grid();
    let r = connection_render(&g, Ref::Primary(4), 13, InputPort::A, true);
    assert_eq!(
        r,
        ConnectionRender::Text {
            anchor: Point::new(PRIMARY_TEXT_X, PRIMARY_TEXT_A_Y),
            label: "4".to_string(),
        }
    );
    let r = connection_render(&g, Ref::Primary(7), 13, InputPort::B, true);
    assert_eq!(
        r,
        ConnectionRender::Text {
            anchor: Point::new(PRIMARY_TEXT_X, PRIMARY_TEXT_B_Y),
            label: "7".to_string(),
        }
    );
}

#[test]
fn test_line_in_first_column_even_as_text() {
    let g = grid();
    let r = connection_render(&g, Ref::Primary(4), 12, InputPort::A, true);
    assert!(matches!(r, ConnectionRender::Line { .. }));
}

#[test]
fn test_node_sources_always_lines() {
    let g = grid();
    let r = connection_render(&g, Ref::Node(10), 30, InputPort::B, true);
    assert_eq!(
        r,
        ConnectionRender::Line {
            from: g.output(10),
            to: g.input(30, InputPort::B),
        }
    );
}

#[test]
fn test_first_body_sits_at_origin() {
    let g = grid();
    assert_eq!(g.body(9), BODY_ORIGIN);
    assert_eq!(g.anchor(13, Anchor::Body), Point::new(80.0, 0.0));
}
