//! Headless [`Surface`] implementations for hosts without a real canvas.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use canvas::render::Surface;

/// Discards every draw call. For sessions that only send.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self) {}
    fn set_color(&mut self, _color: &'static str) {}
    fn draw_line(&mut self, _x0: f64, _y0: f64, _x1: f64, _y1: f64) {}
    fn draw_dot(&mut self, _x: f64, _y: f64) {}
}

/// Counts draw calls so a headless observer can report what a real canvas
/// would have painted.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatsSurface {
    pub clears: u64,
    pub lines: u64,
    pub dots: u64,
}

impl StatsSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One-line human-readable summary of the counters.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} repaints, {} line segments, {} dots",
            self.clears, self.lines, self.dots
        )
    }
}

impl Surface for StatsSurface {
    fn clear(&mut self) {
        self.clears += 1;
    }

    fn set_color(&mut self, _color: &'static str) {}

    fn draw_line(&mut self, _x0: f64, _y0: f64, _x1: f64, _y1: f64) {
        self.lines += 1;
    }

    fn draw_dot(&mut self, _x: f64, _y: f64) {
        self.dots += 1;
    }
}
