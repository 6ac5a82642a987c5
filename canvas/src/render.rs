//! The render pass: reconcile newly arrived points against the current
//! viewport and redraw the whole surface.
//!
//! Redrawing is gated on the store's dirty counters, so however fast points
//! flood in, drawing work happens at most once per timer tick. The drawing
//! backend sits behind [`Surface`] so the pass is testable without a browser
//! or GPU; hosts implement it over whatever pixel sink they own.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::palette::color_for;
use crate::store::StrokeStore;
use crate::viewport::Viewport;

/// Minimal drawing seam. All coordinates are screen pixels.
pub trait Surface {
    /// Erase the whole surface.
    fn clear(&mut self);
    /// Set the stroke color for subsequent draw calls (CSS hex string).
    fn set_color(&mut self, color: &'static str);
    /// Draw a line segment.
    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64);
    /// Draw a single point.
    fn draw_dot(&mut self, x: f64, y: f64);
}

/// Run one render pass. Returns `false` without touching the surface when
/// nothing changed since the last pass.
///
/// For every participant, in store order: continuation points draw a line
/// from the previous point to the current one (skipped when either endpoint
/// is off-screen), other points draw a dot. The first point of a sequence
/// never continues, whatever its flag says.
pub fn render_pass<S: Surface>(
    store: &mut StrokeStore,
    viewport: &Viewport,
    surface: &mut S,
    width: f64,
    height: f64,
) -> bool {
    if !store.needs_redraw() {
        return false;
    }

    surface.clear();
    for (participant, stroke) in store.participants() {
        surface.set_color(color_for(participant));

        for index in 0..stroke.len() {
            let Some((x, y, continuation)) = stroke.point(index) else {
                break;
            };

            if continuation && index > 0 {
                let Some((prev_x, prev_y, _)) = stroke.point(index - 1) else {
                    break;
                };
                let (Some(x0), Some(y0)) = (
                    viewport.to_screen_x(prev_x, width),
                    viewport.to_screen_y(prev_y, height),
                ) else {
                    continue;
                };
                let (Some(x1), Some(y1)) =
                    (viewport.to_screen_x(x, width), viewport.to_screen_y(y, height))
                else {
                    continue;
                };
                surface.draw_line(x0, y0, x1, y1);
            } else {
                let (Some(sx), Some(sy)) =
                    (viewport.to_screen_x(x, width), viewport.to_screen_y(y, height))
                else {
                    continue;
                };
                surface.draw_dot(sx, sy);
            }
        }
    }

    store.mark_rendered();
    true
}
