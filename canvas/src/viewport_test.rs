#![allow(clippy::float_cmp)]

use super::*;

// --- defaults ---

#[test]
fn default_viewport_is_identity() {
    let vp = Viewport::default();
    assert_eq!(vp.zoom, 1.0);
    assert_eq!(vp.left_offset, 0);
    assert_eq!(vp.top_offset, 0);
}

// --- to_screen ---

#[test]
fn to_screen_identity() {
    let vp = Viewport::default();
    assert_eq!(vp.to_screen_x(100, 1000.0), Some(100.0));
    assert_eq!(vp.to_screen_y(250, 1000.0), Some(250.0));
}

#[test]
fn to_screen_subtracts_offset_then_scales() {
    let vp = Viewport { zoom: 2.0, left_offset: 50, top_offset: 30 };
    assert_eq!(vp.to_screen_x(100, 1000.0), Some(100.0));
    assert_eq!(vp.to_screen_y(100, 1000.0), Some(140.0));
}

#[test]
fn to_screen_left_of_viewport_is_offscreen() {
    let vp = Viewport { zoom: 1.0, left_offset: 200, top_offset: 0 };
    assert_eq!(vp.to_screen_x(100, 1000.0), None);
}

#[test]
fn to_screen_beyond_bound_is_offscreen() {
    let vp = Viewport { zoom: 4.0, left_offset: 0, top_offset: 0 };
    assert_eq!(vp.to_screen_x(300, 1000.0), None);
    assert_eq!(vp.to_screen_x(250, 1000.0), Some(1000.0));
}

#[test]
fn to_screen_axes_use_their_own_offsets() {
    let vp = Viewport { zoom: 1.0, left_offset: 0, top_offset: 600 };
    assert_eq!(vp.to_screen_x(500, 1000.0), Some(500.0));
    assert_eq!(vp.to_screen_y(500, 1000.0), None);
}

// --- to_absolute ---

#[test]
fn to_absolute_identity() {
    let vp = Viewport::default();
    assert_eq!(vp.to_absolute_x(123.0), 123);
    assert_eq!(vp.to_absolute_y(45.0), 45);
}

#[test]
fn to_absolute_divides_by_zoom_and_adds_offset() {
    let vp = Viewport { zoom: 2.0, left_offset: 100, top_offset: 10 };
    assert_eq!(vp.to_absolute_x(50.0), 125);
    assert_eq!(vp.to_absolute_y(50.0), 35);
}

#[test]
fn to_absolute_rounds_tenth_then_whole_pixel() {
    let vp = Viewport { zoom: 3.0, left_offset: 7, top_offset: 0 };
    // 10 / 3 = 3.333.. -> 3.3 at a tenth, +7 = 10.3 -> 10
    assert_eq!(vp.to_absolute_x(10.0), 10);
    // 17 / 3 = 5.666.. -> 5.7, +7 = 12.7 -> 13
    assert_eq!(vp.to_absolute_x(17.0), 13);
}

#[test]
fn to_absolute_can_go_negative() {
    let vp = Viewport { zoom: 1.0, left_offset: -500, top_offset: 0 };
    assert_eq!(vp.to_absolute_x(100.0), -400);
}

#[test]
fn screen_round_trip_at_whole_zoom() {
    let vp = Viewport { zoom: 2.0, left_offset: 40, top_offset: 0 };
    let screen = vp.to_screen_x(140, 10_000.0).unwrap();
    assert_eq!(vp.to_absolute_x(screen), 140);
}

// --- zoom banding ---

#[test]
fn zoom_in_fine_band_below_one() {
    let mut vp = Viewport { zoom: 0.5, ..Viewport::default() };
    vp.zoom_in();
    assert_eq!(vp.zoom, 0.6);
}

#[test]
fn zoom_in_mid_band() {
    let mut vp = Viewport { zoom: 5.0, ..Viewport::default() };
    vp.zoom_in();
    assert_eq!(vp.zoom, 5.5);
}

#[test]
fn zoom_in_coarse_band_above_ten() {
    let mut vp = Viewport { zoom: 12.0, ..Viewport::default() };
    vp.zoom_in();
    assert_eq!(vp.zoom, 14.0);
}

#[test]
fn zoom_at_exactly_one_uses_mid_band() {
    let mut vp = Viewport { zoom: 1.0, ..Viewport::default() };
    vp.zoom_in();
    assert_eq!(vp.zoom, 1.5);
}

#[test]
fn zoom_out_fine_band_below_one() {
    let mut vp = Viewport { zoom: 0.6, ..Viewport::default() };
    vp.zoom_out();
    assert_eq!(vp.zoom, 0.5);
}

#[test]
fn zoom_out_mid_band() {
    let mut vp = Viewport { zoom: 5.0, ..Viewport::default() };
    vp.zoom_out();
    assert_eq!(vp.zoom, 4.5);
}

#[test]
fn zoom_out_coarse_band_above_ten() {
    let mut vp = Viewport { zoom: 14.0, ..Viewport::default() };
    vp.zoom_out();
    assert_eq!(vp.zoom, 12.0);
}

// --- zoom clamping ---

#[test]
fn repeated_zoom_in_stabilizes_at_max() {
    let mut vp = Viewport { zoom: 0.1, ..Viewport::default() };
    for _ in 0..200 {
        vp.zoom_in();
        assert!(vp.zoom >= ZOOM_MIN && vp.zoom <= ZOOM_MAX);
    }
    assert_eq!(vp.zoom, ZOOM_MAX);
    vp.zoom_in();
    assert_eq!(vp.zoom, ZOOM_MAX);
}

#[test]
fn repeated_zoom_out_stabilizes_at_min() {
    let mut vp = Viewport { zoom: 100.0, ..Viewport::default() };
    for _ in 0..200 {
        vp.zoom_out();
        assert!(vp.zoom >= ZOOM_MIN && vp.zoom <= ZOOM_MAX);
    }
    assert_eq!(vp.zoom, ZOOM_MIN);
    vp.zoom_out();
    assert_eq!(vp.zoom, ZOOM_MIN);
}

#[test]
fn zoom_out_at_min_stays_at_min() {
    let mut vp = Viewport { zoom: 0.1, ..Viewport::default() };
    vp.zoom_out();
    assert_eq!(vp.zoom, 0.1);
}

// --- pan ---

#[test]
fn pan_moves_offsets_in_fixed_steps() {
    let mut vp = Viewport::default();
    vp.pan_right();
    vp.pan_right();
    vp.pan_down();
    assert_eq!(vp.left_offset, 2 * OFFSET_STEP);
    assert_eq!(vp.top_offset, OFFSET_STEP);

    vp.pan_left();
    vp.pan_up();
    vp.pan_up();
    assert_eq!(vp.left_offset, OFFSET_STEP);
    assert_eq!(vp.top_offset, -OFFSET_STEP);
}

#[test]
fn pan_is_unbounded() {
    let mut vp = Viewport::default();
    for _ in 0..1000 {
        vp.pan_left();
    }
    assert_eq!(vp.left_offset, -1000 * OFFSET_STEP);
}

// --- round_tenth ---

#[test]
fn round_tenth_rounds_to_one_decimal() {
    assert_eq!(round_tenth(0.25), 0.3);
    assert_eq!(round_tenth(0.24), 0.2);
    assert_eq!(round_tenth(3.333), 3.3);
    assert_eq!(round_tenth(-0.25), -0.3);
}
