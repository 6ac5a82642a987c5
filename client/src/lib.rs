//! Websocket client core for the shared canvas.
//!
//! This crate owns the connection lifecycle (`Connecting → Open → Closed`,
//! terminal — recovery is a fresh session), the translation of pointer input
//! into wire frames, and the render ticker that decouples redrawing from
//! message arrival. The drawing itself lives in the `canvas` crate; this
//! crate feeds it decoded frames and drives its render passes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Connection state machine and the single-task event loop |
//! | [`input`] | Pointer events → point frames (gating, bounds, de-duplication) |
//! | [`ticker`] | Periodic render scheduler with a post-close slow-down |
//! | [`surface`] | Headless [`canvas::render::Surface`] implementations |
//! | [`trace`] | JSONL pointer-event traces for replaying drawing sessions |

pub mod input;
pub mod session;
pub mod surface;
pub mod ticker;
pub mod trace;
