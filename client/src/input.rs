//! Pointer input → wire frames.
//!
//! Pure translation layer, no socket in sight: a pointer-down starts a new
//! segment (continuation unset), moves while pressed extend it (continuation
//! set), and pointer-up resends the last sent point unflagged so remote
//! renderers terminate the segment instead of dangling it. Out-of-range
//! coordinates are dropped here and never reach the wire; identical
//! consecutive move samples are suppressed to keep move floods off the
//! socket.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use canvas::consts::CANVAS_MAX;
use canvas::viewport::Viewport;
use wire::PointFrame;

/// Per-session pointer state for the local participant.
#[derive(Debug)]
pub struct PointerTracker {
    participant: u16,
    last_sent: Option<(u16, u16)>,
}

impl PointerTracker {
    #[must_use]
    pub fn new(participant: u16) -> Self {
        Self { participant, last_sent: None }
    }

    /// The local participant id stamped on outbound frames.
    #[must_use]
    pub fn participant(&self) -> u16 {
        self.participant
    }

    /// Pointer pressed down at screen coordinates: start a new segment.
    ///
    /// Returns `None` when the point lands outside canvas bounds.
    pub fn pointer_down(&mut self, x: f64, y: f64, viewport: &Viewport) -> Option<PointFrame> {
        let (abs_x, abs_y) = to_canvas(viewport, x, y)?;
        Some(PointFrame::new(self.participant, abs_x, abs_y, false))
    }

    /// Pointer moved at screen coordinates: extend the current segment.
    ///
    /// Ignored unless the device reports active contact (pressure or button
    /// state nonzero). Returns `None` for out-of-bounds points and for
    /// samples identical to the last one sent.
    pub fn pointer_move(
        &mut self,
        x: f64,
        y: f64,
        pressure: f64,
        buttons: u32,
        viewport: &Viewport,
    ) -> Option<PointFrame> {
        if pressure <= 0.0 && buttons == 0 {
            return None;
        }

        let (abs_x, abs_y) = to_canvas(viewport, x, y)?;
        if self.last_sent == Some((abs_x, abs_y)) {
            return None;
        }

        self.last_sent = Some((abs_x, abs_y));
        Some(PointFrame::new(self.participant, abs_x, abs_y, true))
    }

    /// Pointer released: resend the last sent point unflagged to terminate
    /// the segment. `None` when no move was ever sent.
    pub fn pointer_up(&mut self) -> Option<PointFrame> {
        let (x, y) = self.last_sent?;
        Some(PointFrame::new(self.participant, x, y, false))
    }
}

/// Convert screen coordinates to absolute canvas space, or `None` when the
/// result falls outside `[0, CANVAS_MAX)` on either axis.
fn to_canvas(viewport: &Viewport, x: f64, y: f64) -> Option<(u16, u16)> {
    let abs_x = viewport.to_absolute_x(x);
    let abs_y = viewport.to_absolute_y(y);

    let range = 0..i64::from(CANVAS_MAX);
    if !range.contains(&abs_x) || !range.contains(&abs_y) {
        return None;
    }

    // Infallible after the range check.
    Some((u16::try_from(abs_x).ok()?, u16::try_from(abs_y).ok()?))
}
