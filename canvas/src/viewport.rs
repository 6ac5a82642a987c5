//! Pan/zoom viewport and the absolute↔screen coordinate transforms.
//!
//! Stored points live in absolute canvas space so viewport changes never
//! touch data; every render pass maps them through the current offsets and
//! zoom. Off-screen results are reported as `None` rather than clipped, so
//! the render pass can skip whole segments cheaply.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::{OFFSET_STEP, ZOOM_MAX, ZOOM_MIN};

/// Viewport state: zoom factor plus pan offsets in absolute pixels.
///
/// `zoom` is kept inside `[ZOOM_MIN, ZOOM_MAX]`; offsets are unbounded and
/// move in fixed [`OFFSET_STEP`] increments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub left_offset: i64,
    pub top_offset: i64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { zoom: 1.0, left_offset: 0, top_offset: 0 }
    }
}

impl Viewport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Transforms ---

    /// Map an absolute x coordinate to screen pixels, or `None` when the
    /// result falls outside `[0, bound]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_screen_x(&self, abs: u16, bound: f64) -> Option<f64> {
        let screen = (f64::from(abs) - self.left_offset as f64) * self.zoom;
        if screen < 0.0 || screen > bound {
            return None;
        }
        Some(screen)
    }

    /// Map an absolute y coordinate to screen pixels, or `None` when the
    /// result falls outside `[0, bound]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_screen_y(&self, abs: u16, bound: f64) -> Option<f64> {
        let screen = (f64::from(abs) - self.top_offset as f64) * self.zoom;
        if screen < 0.0 || screen > bound {
            return None;
        }
        Some(screen)
    }

    /// Map a screen x coordinate back to absolute canvas space.
    ///
    /// Division by zoom is rounded to one decimal (the zoom step
    /// granularity) before rounding to a whole pixel. The result may be
    /// negative or past the canvas bound; range policing belongs to the
    /// input boundary.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn to_absolute_x(&self, screen: f64) -> i64 {
        (round_tenth(screen / self.zoom) + self.left_offset as f64).round() as i64
    }

    /// Map a screen y coordinate back to absolute canvas space.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn to_absolute_y(&self, screen: f64) -> i64 {
        (round_tenth(screen / self.zoom) + self.top_offset as f64).round() as i64
    }

    // --- Zoom controls ---

    /// Step the zoom up one notch and clamp to `[ZOOM_MIN, ZOOM_MAX]`.
    ///
    /// The step is piecewise in the band of the *current* zoom: fine 0.1
    /// steps below 1, coarse whole-number 2 steps above 10, 0.5 otherwise.
    pub fn zoom_in(&mut self) {
        self.zoom = clamp_zoom(step_zoom(self.zoom, 1.0));
    }

    /// Step the zoom down one notch and clamp to `[ZOOM_MIN, ZOOM_MAX]`.
    pub fn zoom_out(&mut self) {
        self.zoom = clamp_zoom(step_zoom(self.zoom, -1.0));
    }

    // --- Pan controls ---

    /// Shift the view one step to the right (content moves left).
    pub fn pan_right(&mut self) {
        self.left_offset += OFFSET_STEP;
    }

    /// Shift the view one step to the left.
    pub fn pan_left(&mut self) {
        self.left_offset -= OFFSET_STEP;
    }

    /// Shift the view one step down.
    pub fn pan_down(&mut self) {
        self.top_offset += OFFSET_STEP;
    }

    /// Shift the view one step up.
    pub fn pan_up(&mut self) {
        self.top_offset -= OFFSET_STEP;
    }
}

/// Apply one signed zoom step using the band the current zoom falls into.
fn step_zoom(zoom: f64, direction: f64) -> f64 {
    if zoom < 1.0 {
        round_tenth(zoom + direction * 0.1)
    } else if zoom > 10.0 {
        (zoom + direction * 2.0).round()
    } else {
        round_tenth(zoom + direction * 0.5)
    }
}

fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}

/// Round to the nearest tenth.
#[must_use]
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
