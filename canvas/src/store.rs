//! Stroke store: append-only point history per participant, plus the
//! received/rendered counters that gate the render loop.
//!
//! Points arrive already decoded from the wire and are kept in absolute
//! canvas space, so pan/zoom never mutates stored data. Buffers are never
//! pruned or reordered within a session; memory grows with session length.
//!
//! Participants are traversed in ascending id order. Cross-participant draw
//! order is an explicit non-guarantee of the protocol (disjoint strokes are
//! visually commutative); within one participant, order is arrival order.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;

use wire::PointFrame;

/// One participant's stroke history as parallel append-only sequences.
///
/// Invariant: `xs`, `ys`, and `continuations` always have equal length.
#[derive(Debug, Clone, Default)]
pub struct Stroke {
    xs: Vec<u16>,
    ys: Vec<u16>,
    continuations: Vec<bool>,
}

impl Stroke {
    fn push(&mut self, x: u16, y: u16, continuation: bool) {
        self.xs.push(x);
        self.ys.push(y);
        self.continuations.push(continuation);
    }

    /// Number of recorded points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns `true` when no point has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The point at `index` as `(x, y, continuation)`, in arrival order.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<(u16, u16, bool)> {
        let x = *self.xs.get(index)?;
        let y = *self.ys.get(index)?;
        let continuation = *self.continuations.get(index)?;
        Some((x, y, continuation))
    }

    /// The x sequence, in arrival order.
    #[must_use]
    pub fn xs(&self) -> &[u16] {
        &self.xs
    }

    /// The y sequence, in arrival order.
    #[must_use]
    pub fn ys(&self) -> &[u16] {
        &self.ys
    }

    /// The continuation flags, in arrival order.
    #[must_use]
    pub fn continuations(&self) -> &[bool] {
        &self.continuations
    }
}

/// In-memory store of every participant's points for one canvas session.
///
/// The counters are signed: `mark_stale` decrements `rendered` so a redraw
/// fires even when no point has arrived yet (`received == 0`).
#[derive(Debug, Default)]
pub struct StrokeStore {
    strokes: BTreeMap<u16, Stroke>,
    received: i64,
    rendered: i64,
}

impl StrokeStore {
    /// Create an empty store with counters in agreement (no redraw due).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decoded point to its participant's buffers, creating them on
    /// first sight of the id, and count it as received.
    pub fn record_point(&mut self, frame: &PointFrame) {
        self.strokes
            .entry(frame.participant)
            .or_default()
            .push(frame.x, frame.y, frame.continuation);
        self.received += 1;
    }

    /// Whether new data (or a viewport change) arrived since the last pass.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.received != self.rendered
    }

    /// Record that a render pass has consumed everything received so far.
    pub fn mark_rendered(&mut self) {
        self.rendered = self.received;
    }

    /// Force the next render pass even without new points (viewport moved,
    /// surface resized).
    pub fn mark_stale(&mut self) {
        self.rendered -= 1;
    }

    /// Iterate participants in ascending id order with their strokes.
    pub fn participants(&self) -> impl Iterator<Item = (u16, &Stroke)> {
        self.strokes.iter().map(|(id, stroke)| (*id, stroke))
    }

    /// Look up one participant's stroke history.
    #[must_use]
    pub fn stroke(&self, participant: u16) -> Option<&Stroke> {
        self.strokes.get(&participant)
    }

    /// Number of participants seen so far.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.strokes.len()
    }

    /// Total points received since session start.
    #[must_use]
    pub fn received(&self) -> i64 {
        self.received
    }
}
