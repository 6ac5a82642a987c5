#![allow(clippy::float_cmp)]

use super::*;
use crate::palette::PALETTE;
use wire::PointFrame;

/// Records every draw call for assertions.
#[derive(Debug, Default)]
struct RecordingSurface {
    ops: Vec<Op>,
}

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear,
    Color(&'static str),
    Line(f64, f64, f64, f64),
    Dot(f64, f64),
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn set_color(&mut self, color: &'static str) {
        self.ops.push(Op::Color(color));
    }

    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.ops.push(Op::Line(x0, y0, x1, y1));
    }

    fn draw_dot(&mut self, x: f64, y: f64) {
        self.ops.push(Op::Dot(x, y));
    }
}

const W: f64 = 1000.0;
const H: f64 = 800.0;

fn frame(participant: u16, x: u16, y: u16, continuation: bool) -> PointFrame {
    PointFrame { participant, x, y, continuation }
}

// --- gating ---

#[test]
fn clean_store_renders_nothing() {
    let mut store = StrokeStore::new();
    let mut surface = RecordingSurface::default();
    let drew = render_pass(&mut store, &Viewport::default(), &mut surface, W, H);
    assert!(!drew);
    assert!(surface.ops.is_empty());
}

#[test]
fn second_pass_without_changes_is_a_noop() {
    let mut store = StrokeStore::new();
    store.record_point(&frame(1, 10, 10, false));
    let mut surface = RecordingSurface::default();

    assert!(render_pass(&mut store, &Viewport::default(), &mut surface, W, H));
    let ops_after_first = surface.ops.len();
    assert!(ops_after_first > 0);

    assert!(!render_pass(&mut store, &Viewport::default(), &mut surface, W, H));
    assert_eq!(surface.ops.len(), ops_after_first);
}

#[test]
fn stale_mark_causes_a_full_redraw() {
    let mut store = StrokeStore::new();
    store.record_point(&frame(1, 10, 10, false));
    let mut surface = RecordingSurface::default();
    render_pass(&mut store, &Viewport::default(), &mut surface, W, H);

    store.mark_stale();
    surface.ops.clear();
    assert!(render_pass(&mut store, &Viewport::default(), &mut surface, W, H));
    assert_eq!(surface.ops.first(), Some(&Op::Clear));
}

// --- segment semantics ---

#[test]
fn dot_then_line_for_a_two_point_segment() {
    let mut store = StrokeStore::new();
    store.record_point(&frame(1, 10, 10, false));
    store.record_point(&frame(1, 20, 10, true));
    let mut surface = RecordingSurface::default();

    render_pass(&mut store, &Viewport::default(), &mut surface, W, H);
    assert_eq!(
        surface.ops,
        vec![
            Op::Clear,
            Op::Color(PALETTE[1]),
            Op::Dot(10.0, 10.0),
            Op::Line(10.0, 10.0, 20.0, 10.0),
        ]
    );
}

#[test]
fn unflagged_point_starts_a_new_segment() {
    let mut store = StrokeStore::new();
    store.record_point(&frame(1, 10, 10, false));
    store.record_point(&frame(1, 20, 10, true));
    store.record_point(&frame(1, 500, 500, false));
    store.record_point(&frame(1, 510, 500, true));
    let mut surface = RecordingSurface::default();

    render_pass(&mut store, &Viewport::default(), &mut surface, W, H);
    // No line between (20,10) and (500,500); the new segment starts a dot.
    assert_eq!(
        surface.ops,
        vec![
            Op::Clear,
            Op::Color(PALETTE[1]),
            Op::Dot(10.0, 10.0),
            Op::Line(10.0, 10.0, 20.0, 10.0),
            Op::Dot(500.0, 500.0),
            Op::Line(500.0, 500.0, 510.0, 500.0),
        ]
    );
}

#[test]
fn first_point_never_continues_even_when_flagged() {
    let mut store = StrokeStore::new();
    store.record_point(&frame(1, 30, 30, true));
    let mut surface = RecordingSurface::default();

    render_pass(&mut store, &Viewport::default(), &mut surface, W, H);
    assert_eq!(
        surface.ops,
        vec![Op::Clear, Op::Color(PALETTE[1]), Op::Dot(30.0, 30.0)]
    );
}

// --- off-screen skipping ---

#[test]
fn offscreen_dot_is_skipped() {
    let mut store = StrokeStore::new();
    store.record_point(&frame(1, 5000, 10, false));
    let mut surface = RecordingSurface::default();

    render_pass(&mut store, &Viewport::default(), &mut surface, W, H);
    assert_eq!(surface.ops, vec![Op::Clear, Op::Color(PALETTE[1])]);
}

#[test]
fn line_with_offscreen_endpoint_is_skipped() {
    let mut store = StrokeStore::new();
    store.record_point(&frame(1, 990, 10, false));
    store.record_point(&frame(1, 1500, 10, true));
    let mut surface = RecordingSurface::default();

    render_pass(&mut store, &Viewport::default(), &mut surface, W, H);
    assert_eq!(
        surface.ops,
        vec![Op::Clear, Op::Color(PALETTE[1]), Op::Dot(990.0, 10.0)]
    );
}

#[test]
fn line_with_offscreen_previous_point_is_skipped() {
    let mut store = StrokeStore::new();
    store.record_point(&frame(1, 1500, 10, false));
    store.record_point(&frame(1, 990, 10, true));
    let mut surface = RecordingSurface::default();

    render_pass(&mut store, &Viewport::default(), &mut surface, W, H);
    // Neither the off-screen dot nor the half-off-screen line is drawn.
    assert_eq!(surface.ops, vec![Op::Clear, Op::Color(PALETTE[1])]);
}

#[test]
fn panning_brings_points_back_on_screen() {
    let mut store = StrokeStore::new();
    store.record_point(&frame(1, 5000, 10, false));
    let viewport = Viewport { zoom: 1.0, left_offset: 4500, top_offset: 0 };
    let mut surface = RecordingSurface::default();

    render_pass(&mut store, &viewport, &mut surface, W, H);
    assert!(surface.ops.contains(&Op::Dot(500.0, 10.0)));
}

// --- multi-participant ---

#[test]
fn participants_draw_in_id_order_with_their_own_colors() {
    let mut store = StrokeStore::new();
    store.record_point(&frame(130, 1, 1, false));
    store.record_point(&frame(2, 2, 2, false));
    let mut surface = RecordingSurface::default();

    render_pass(&mut store, &Viewport::default(), &mut surface, W, H);
    assert_eq!(
        surface.ops,
        vec![
            Op::Clear,
            Op::Color(PALETTE[2]),
            Op::Dot(2.0, 2.0),
            // 130 wraps to palette slot 2 as well: same color, separate stroke.
            Op::Color(PALETTE[2]),
            Op::Dot(1.0, 1.0),
        ]
    );
}

#[test]
fn zoom_scales_rendered_coordinates() {
    let mut store = StrokeStore::new();
    store.record_point(&frame(1, 100, 50, false));
    let viewport = Viewport { zoom: 2.0, left_offset: 0, top_offset: 0 };
    let mut surface = RecordingSurface::default();

    render_pass(&mut store, &viewport, &mut surface, W, H);
    assert!(surface.ops.contains(&Op::Dot(200.0, 100.0)));
}
