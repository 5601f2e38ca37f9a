//! The `Scroller`: a registry of running loops and the per-frame update.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::track::{Layout, Track, TrackId};

use super::state::{Direction, LoopState, StartError};

/// Longest simulated step per frame, in seconds. Clamping avoids a visible
/// jump after a stall (blocked terminal, suspended process).
const MAX_FRAME_STEP: f32 = 0.05;

/// Quiet period after user interaction before motion resumes.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(900);

/// Owns the loop state for every animated track.
///
/// A track has at most one loop at a time; starting again tears the old
/// one down first. All entry points are safe to call for tracks with no
/// running loop.
pub struct Scroller {
    loops: HashMap<TrackId, LoopState>,
    quiet_period: Duration,
}

impl Default for Scroller {
    fn default() -> Self {
        Self::new()
    }
}

impl Scroller {
    pub fn new() -> Self {
        Self::with_quiet_period(DEFAULT_QUIET_PERIOD)
    }

    pub fn with_quiet_period(quiet_period: Duration) -> Self {
        Self {
            loops: HashMap::new(),
            quiet_period,
        }
    }

    /// Whether a loop is currently registered for `id`.
    pub fn is_running(&self, id: TrackId) -> bool {
        self.loops.contains_key(&id)
    }

    /// Loop state for `id`, if one is running.
    pub fn state(&self, id: TrackId) -> Option<&LoopState> {
        self.loops.get(&id)
    }

    /// Number of active loops across all tracks.
    pub fn active_loops(&self) -> usize {
        self.loops.len()
    }

    /// Start (or restart) the infinite loop for `track`.
    ///
    /// `initial_offset` pre-shifts the strip so a chosen item can sit
    /// centered before motion begins; any finite value is normalized into
    /// `[0, span)`. Returns whether the loop started; failures are
    /// absorbed and logged, never propagated.
    pub fn start(
        &mut self,
        track: &mut Track,
        direction: Direction,
        speed: f32,
        initial_offset: f32,
        now: Instant,
    ) -> bool {
        match self.try_start(track, direction, speed, initial_offset, now) {
            Ok(()) => true,
            Err(err) => {
                warn!("loop not started for track {:?}: {err}", track.id());
                false
            }
        }
    }

    fn try_start(
        &mut self,
        track: &mut Track,
        direction: Direction,
        speed: f32,
        initial_offset: f32,
        now: Instant,
    ) -> Result<(), StartError> {
        // Idempotent restart: never two loops for one track.
        self.stop(track);

        if track.is_empty() {
            return Err(StartError::EmptyTrack);
        }
        if !(speed > 0.0) {
            return Err(StartError::InvalidSpeed(speed));
        }
        let span = track.span_width();
        if span <= 0.0 {
            return Err(StartError::MeasurementUnavailable);
        }

        let saved_layout = track.layout().clone();
        track.duplicate();
        // Pin the strip to one non-wrapping row at its full content width
        // so the transform translates the whole strip.
        let content = track.content_width();
        track.set_layout(Layout {
            inline: true,
            wrap: false,
            width: Some(content),
            min_width: Some(content),
        });

        let offset = initial_offset.rem_euclid(span);
        let position = -offset;
        track.set_transform(position);

        self.loops.insert(
            track.id(),
            LoopState {
                position,
                speed,
                direction,
                single_span: span,
                interaction_paused: false,
                resume_at: None,
                visibility_paused: false,
                last_timestamp: now,
                saved_layout,
            },
        );

        debug!(
            "loop started for track {:?}: span {span}, speed {speed}, offset {offset}",
            track.id()
        );
        Ok(())
    }

    /// Advance the loop for `track` by one frame.
    ///
    /// A track whose loop was stopped (possibly mid-frame) has no registry
    /// entry, so an already-queued tick for it is a no-op.
    pub fn tick(&mut self, track: &mut Track, now: Instant) {
        let Some(state) = self.loops.get_mut(&track.id()) else {
            return;
        };

        if let Some(at) = state.resume_at {
            if now >= at {
                state.interaction_paused = false;
                state.resume_at = None;
            }
        }

        let dt = now
            .saturating_duration_since(state.last_timestamp)
            .as_secs_f32()
            .min(MAX_FRAME_STEP);
        state.last_timestamp = now;

        if !state.paused() && state.single_span > 0.0 {
            state.position += state.direction.signum() * state.speed * dt;
            // Wraparound keeps the visible window inside one of the two
            // duplicated copies, so the seam is never on screen.
            if state.position <= -state.single_span {
                state.position += state.single_span;
            }
            if state.position >= state.single_span {
                state.position -= state.single_span;
            }
            track.set_transform(state.position);
        }
    }

    /// Soft pause on user interaction. Each call re-arms the quiet timer;
    /// motion resumes once the last interaction is a full quiet period old.
    pub fn pause_shortly(&mut self, id: TrackId, now: Instant) {
        if let Some(state) = self.loops.get_mut(&id) {
            state.interaction_paused = true;
            state.resume_at = Some(now + self.quiet_period);
        }
    }

    /// Hard pause driven by the visibility of the track's container.
    /// Applied directly, with no quiet period.
    pub fn set_visible(&mut self, id: TrackId, visible: bool) {
        if let Some(state) = self.loops.get_mut(&id) {
            state.visibility_paused = !visible;
        }
    }

    /// Stop the loop for `track` and restore its pre-start state: clones
    /// removed, layout and transform restored, bookkeeping dropped.
    /// Safe to call when no loop is active.
    pub fn stop(&mut self, track: &mut Track) {
        let Some(state) = self.loops.remove(&track.id()) else {
            return;
        };

        track.remove_clones();
        track.set_layout(state.saved_layout);
        track.clear_transform();
        debug!("loop stopped for track {:?}", track.id());
    }
}
