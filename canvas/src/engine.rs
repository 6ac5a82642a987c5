//! Session-scoped engine facade.
//!
//! One `Engine` per active canvas session: it owns the stroke store, the
//! viewport, and the surface dimensions, and keeps the two coupled rules in
//! one place — received points make a redraw due, and *every* viewport
//! mutation marks the store stale so the next tick repaints even without
//! new data.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wire::PointFrame;

use crate::render::{Surface, render_pass};
use crate::store::StrokeStore;
use crate::viewport::Viewport;

/// All mutable drawing state for one canvas session.
#[derive(Debug)]
pub struct Engine {
    store: StrokeStore,
    viewport: Viewport,
    width: f64,
    height: f64,
}

impl Engine {
    /// Create an engine for a surface of the given pixel dimensions.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { store: StrokeStore::new(), viewport: Viewport::default(), width, height }
    }

    // --- Data inputs ---

    /// Record a decoded point from the wire.
    pub fn apply(&mut self, frame: &PointFrame) {
        self.store.record_point(frame);
    }

    // --- Render ---

    /// Whether the next tick should repaint.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.store.needs_redraw()
    }

    /// Run one render pass against the given surface. Returns `true` when
    /// drawing work was performed.
    pub fn render<S: Surface>(&mut self, surface: &mut S) -> bool {
        render_pass(&mut self.store, &self.viewport, surface, self.width, self.height)
    }

    // --- Viewport controls (each forces the next render pass) ---

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
        self.store.mark_stale();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
        self.store.mark_stale();
    }

    pub fn pan_left(&mut self) {
        self.viewport.pan_left();
        self.store.mark_stale();
    }

    pub fn pan_right(&mut self) {
        self.viewport.pan_right();
        self.store.mark_stale();
    }

    pub fn pan_up(&mut self) {
        self.viewport.pan_up();
        self.store.mark_stale();
    }

    pub fn pan_down(&mut self) {
        self.viewport.pan_down();
        self.store.mark_stale();
    }

    /// Update surface dimensions (a resize invalidates the drawn frame).
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.store.mark_stale();
    }

    // --- Queries ---

    /// The current viewport state.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The stroke store (read-only).
    #[must_use]
    pub fn store(&self) -> &StrokeStore {
        &self.store
    }
}
