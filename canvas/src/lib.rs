//! Session-scoped drawing core for the shared canvas.
//!
//! This crate owns everything between a decoded [`wire::PointFrame`] and
//! pixels on a surface: the append-only per-participant stroke store, the
//! pan/zoom viewport with its coordinate transforms, the fixed participant
//! color palette, and the dirty-counter-gated render pass. It is transport
//! and UI agnostic; the `client` crate feeds it frames and drives the render
//! timer, and anything implementing [`render::Surface`] can be drawn to.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Session-scoped [`engine::Engine`] facade tying the parts together |
//! | [`store`] | Per-participant stroke buffers and the received/rendered counters |
//! | [`viewport`] | Pan/zoom state, abs↔screen transforms, zoom banding |
//! | [`render`] | The [`render::Surface`] seam and the render pass |
//! | [`palette`] | Fixed participant color table |
//! | [`consts`] | Shared numeric constants (canvas bounds, steps, periods) |

pub mod consts;
pub mod engine;
pub mod palette;
pub mod render;
pub mod store;
pub mod viewport;
