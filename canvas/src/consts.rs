//! Shared numeric constants for the canvas crate.

// ── Canvas space ────────────────────────────────────────────────

/// Exclusive upper bound of absolute canvas space on both axes.
pub const CANVAS_MAX: u16 = 8192;

// ── Viewport ────────────────────────────────────────────────────

/// Pan distance in absolute pixels per control press.
pub const OFFSET_STEP: i64 = 100;

/// Lower zoom clamp.
pub const ZOOM_MIN: f64 = 0.1;

/// Upper zoom clamp.
pub const ZOOM_MAX: f64 = 100.0;

// ── Render loop ─────────────────────────────────────────────────

/// Render pass period in milliseconds while the connection is live.
pub const RENDER_PERIOD_MS: u64 = 50;

/// Period multiplier applied once the connection closes; redraws keep
/// running (pan/zoom stay responsive) but far less often.
pub const SLOW_RENDER_FACTOR: u32 = 5;
