use std::time::Instant;

use crate::app::App;

/// Size every lane's viewport from the terminal width and start the
/// configured loops. Lanes that cannot start (no items, zero width) are
/// skipped by the engine and simply stay static.
pub fn start_lanes(app: &mut App, terminal_width: u16, now: Instant) {
    app.set_viewports(lane_viewport(terminal_width));
    app.start_all(now);
}

/// Interior width of a lane box: the borders take one column per side.
pub fn lane_viewport(terminal_width: u16) -> f32 {
    f32::from(terminal_width.saturating_sub(2))
}
