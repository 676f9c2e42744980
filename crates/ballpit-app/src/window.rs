//! Window render-scale management.

use bevy::prelude::*;

/// Upper bound on the window scale factor. High-density displays report 3x
/// and beyond; rendering the surface at full native scale roughly squares the
/// fill-rate cost, so the render target is bounded at 2x.
pub const MAX_RENDER_SCALE: f32 = 2.0;

/// Override to apply for a reported backend scale factor, if any.
fn render_scale_override(reported: f32) -> Option<f32> {
    (reported > MAX_RENDER_SCALE).then_some(MAX_RENDER_SCALE)
}

/// Clamps the primary window's scale factor whenever the backend reports one
/// above the cap, e.g. after the window moves to a denser monitor.
pub fn cap_render_scale(mut windows: Query<&mut Window>) {
    for mut window in &mut windows {
        let target = render_scale_override(window.resolution.base_scale_factor());
        if window.resolution.scale_factor_override() != target {
            window.resolution.set_scale_factor_override(target);
        }
    }
}
