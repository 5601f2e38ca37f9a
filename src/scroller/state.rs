//! Loop bookkeeping types: `Direction`, `LoopState` and `StartError`.

use std::time::Instant;

use thiserror::Error;

use crate::track::Layout;

/// Scroll direction along the track axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Content moves leftwards (negative translation).
    Left,
    /// Content moves rightwards (positive translation).
    Right,
}

impl Direction {
    /// Sign applied to the speed when advancing the position.
    pub fn signum(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Why a `start` attempt was skipped.
///
/// None of these propagate: the engine absorbs them into a log line and
/// leaves the track static at its natural layout.
#[derive(Debug, Error)]
pub enum StartError {
    #[error("track has no items to animate")]
    EmptyTrack,
    #[error("track content has no measurable width")]
    MeasurementUnavailable,
    #[error("scroll speed must be positive (got {0})")]
    InvalidSpeed(f32),
}

/// Transient animation state attached to a track while its loop runs.
///
/// There is exactly one writer: the engine mutates this from `tick` and
/// the signal entry points, all on the frame-loop thread.
#[derive(Debug, Clone)]
pub struct LoopState {
    /// Current offset in columns, kept within `(-single_span, single_span)`.
    pub position: f32,
    /// Scroll speed in columns per second.
    pub speed: f32,
    pub direction: Direction,
    /// Width of one un-duplicated copy of the content.
    pub single_span: f32,
    pub(super) interaction_paused: bool,
    /// When the interaction pause expires; re-armed on every interaction.
    pub(super) resume_at: Option<Instant>,
    pub(super) visibility_paused: bool,
    pub(super) last_timestamp: Instant,
    /// Layout captured at start, restored verbatim at stop.
    pub(super) saved_layout: Layout,
}

impl LoopState {
    /// Whether motion is currently blocked. The two pause sources combine
    /// with OR semantics: motion resumes only once both are clear.
    pub fn paused(&self) -> bool {
        self.interaction_paused || self.visibility_paused
    }

    /// Soft pause from user interaction; auto-expires after the quiet period.
    pub fn interaction_paused(&self) -> bool {
        self.interaction_paused
    }

    /// Hard pause from the track's container being off screen.
    pub fn visibility_paused(&self) -> bool {
        self.visibility_paused
    }
}
