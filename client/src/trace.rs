//! JSONL pointer-event traces.
//!
//! One JSON object per line, tagged by `event`:
//!
//! ```text
//! {"event":"down","x":120.0,"y":80.0}
//! {"event":"move","x":121.0,"y":82.0,"pressure":0.8}
//! {"event":"up"}
//! ```
//!
//! `pressure` defaults to 1.0 and `buttons` to 0 — a recorded move is
//! assumed to be a drag unless the trace says otherwise. `delay_ms` delays
//! the event relative to the previous one. Blank lines are skipped.

#[cfg(test)]
#[path = "trace_test.rs"]
mod trace_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::session::Command;

fn full_pressure() -> f64 {
    1.0
}

/// A single recorded pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum TraceEvent {
    /// Pointer pressed at screen coordinates.
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        delay_ms: u64,
    },
    /// Pointer dragged to screen coordinates.
    Move {
        x: f64,
        y: f64,
        #[serde(default = "full_pressure")]
        pressure: f64,
        #[serde(default)]
        buttons: u32,
        #[serde(default)]
        delay_ms: u64,
    },
    /// Pointer released.
    Up {
        #[serde(default)]
        delay_ms: u64,
    },
}

impl TraceEvent {
    /// The session command this event replays as.
    #[must_use]
    pub fn command(&self) -> Command {
        match *self {
            Self::Down { x, y, .. } => Command::PointerDown { x, y },
            Self::Move { x, y, pressure, buttons, .. } => {
                Command::PointerMove { x, y, pressure, buttons }
            }
            Self::Up { .. } => Command::PointerUp,
        }
    }

    /// Pause to apply before replaying this event.
    #[must_use]
    pub fn delay(&self) -> Duration {
        let ms = match *self {
            Self::Down { delay_ms, .. }
            | Self::Move { delay_ms, .. }
            | Self::Up { delay_ms } => delay_ms,
        };
        Duration::from_millis(ms)
    }
}

/// Parse one JSONL trace line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns the underlying JSON error for non-blank lines that are not a
/// valid trace event.
pub fn parse_trace_line(line: &str) -> Result<Option<TraceEvent>, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    serde_json::from_str::<TraceEvent>(trimmed).map(Some)
}
