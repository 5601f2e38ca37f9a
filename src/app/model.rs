//! Application model types: `App` and `LaneParams`.
//!
//! The `App` struct owns the tracks and the scroller and translates user
//! commands (toggle, reverse, speed changes, re-centering) into engine
//! calls. Every lane keeps its restart parameters here so a stopped lane
//! can be started again with its configured behavior.

use std::time::{Duration, Instant};

use crate::config::{DirectionSetting, Settings};
use crate::scroller::{Direction, Scroller};
use crate::track::{Item, Track, TrackId};

/// Restart parameters for one lane.
#[derive(Debug, Clone)]
pub struct LaneParams {
    pub direction: Direction,
    pub speed: f32,
    /// Item centered in the viewport when the lane (re)starts from scratch.
    pub start_item: Option<usize>,
}

/// The main application model.
pub struct App {
    pub tracks: Vec<Track>,
    pub scroller: Scroller,
    pub params: Vec<LaneParams>,
    pub selected: usize,

    /// Terminal focus; lost focus hard-pauses every running lane.
    focused: bool,
    /// Whether each lane's box currently fits on screen.
    on_screen: Vec<bool>,
}

impl App {
    /// Build the app model from loaded settings: one track and one set of
    /// lane parameters per `[[lanes]]` entry. Viewports start at zero and
    /// are sized by the runtime once the terminal width is known.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut tracks = Vec::with_capacity(settings.lanes.len());
        let mut params = Vec::with_capacity(settings.lanes.len());

        for (i, lane) in settings.lanes.iter().enumerate() {
            let items: Vec<Item> = lane
                .items
                .iter()
                .map(|l| Item::new(l.as_str(), lane.gap))
                .collect();
            tracks.push(Track::new(TrackId(i), items, 0.0));
            params.push(LaneParams {
                direction: match lane.direction {
                    DirectionSetting::Left => Direction::Left,
                    DirectionSetting::Right => Direction::Right,
                },
                speed: lane.speed,
                start_item: lane.start_item,
            });
        }

        let on_screen = vec![true; tracks.len()];
        Self {
            tracks,
            scroller: Scroller::with_quiet_period(Duration::from_millis(
                settings.scroller.quiet_period_ms,
            )),
            params,
            selected: 0,
            focused: true,
            on_screen,
        }
    }

    pub fn lane_count(&self) -> usize {
        self.tracks.len()
    }

    /// Resize every lane's visible window to `viewport` columns.
    pub fn set_viewports(&mut self, viewport: f32) {
        for track in &mut self.tracks {
            track.viewport = viewport;
        }
    }

    /// Start every configured lane, centering its start item when one is set.
    pub fn start_all(&mut self, now: Instant) {
        for i in 0..self.tracks.len() {
            let offset = self.configured_offset(i);
            self.start_lane(i, offset, now);
        }
    }

    /// Stop every lane, restoring each track to its pre-start state.
    pub fn stop_all(&mut self) {
        for track in &mut self.tracks {
            self.scroller.stop(track);
        }
    }

    /// Advance every running lane by one frame.
    pub fn tick_all(&mut self, now: Instant) {
        for track in &mut self.tracks {
            self.scroller.tick(track, now);
        }
    }

    /// Move lane selection down, wrapping around.
    pub fn select_next(&mut self) {
        if !self.tracks.is_empty() {
            self.selected = (self.selected + 1) % self.tracks.len();
        }
    }

    /// Move lane selection up, wrapping around.
    pub fn select_prev(&mut self) {
        if !self.tracks.is_empty() {
            self.selected = (self.selected + self.tracks.len() - 1) % self.tracks.len();
        }
    }

    /// Toggle the selected lane between running and stopped.
    pub fn toggle_selected(&mut self, now: Instant) {
        let i = self.selected;
        if i >= self.tracks.len() {
            return;
        }
        if self.scroller.is_running(self.tracks[i].id()) {
            self.scroller.stop(&mut self.tracks[i]);
        } else {
            let offset = self.configured_offset(i);
            self.start_lane(i, offset, now);
        }
    }

    /// Set the selected lane's scroll direction. A running lane restarts
    /// in place, keeping its current offset.
    pub fn set_direction_selected(&mut self, direction: Direction, now: Instant) {
        let i = self.selected;
        if i >= self.params.len() {
            return;
        }
        self.params[i].direction = direction;
        self.restart_if_running(i, now);
    }

    /// Adjust the selected lane's speed by `delta` columns/second, keeping
    /// it positive. A running lane restarts in place at the new speed.
    pub fn adjust_speed_selected(&mut self, delta: f32, now: Instant) {
        let i = self.selected;
        if i >= self.params.len() {
            return;
        }
        self.params[i].speed = (self.params[i].speed + delta).max(1.0);
        self.restart_if_running(i, now);
    }

    /// Restart the selected lane from its configured start item.
    pub fn recenter_selected(&mut self, now: Instant) {
        let i = self.selected;
        if i >= self.tracks.len() {
            return;
        }
        let offset = self.configured_offset(i);
        self.start_lane(i, offset, now);
    }

    /// Soft-pause a lane in response to pointer activity over it.
    pub fn interact(&mut self, lane: usize, now: Instant) {
        if let Some(track) = self.tracks.get(lane) {
            self.scroller.pause_shortly(track.id(), now);
        }
    }

    /// Terminal focus signal; combined with per-lane fit into one
    /// visibility level per lane.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        for i in 0..self.tracks.len() {
            self.apply_visibility(i);
        }
    }

    /// Whether lane `i`'s box currently fits on screen.
    pub fn set_lane_on_screen(&mut self, lane: usize, on_screen: bool) {
        let Some(flag) = self.on_screen.get_mut(lane) else {
            return;
        };
        if *flag == on_screen {
            return;
        }
        *flag = on_screen;
        self.apply_visibility(lane);
    }

    /// Terminal width changed: resize viewports and restart running lanes
    /// in place so their layout matches the new measurements.
    pub fn handle_resize(&mut self, viewport: f32, now: Instant) {
        self.set_viewports(viewport);
        for i in 0..self.tracks.len() {
            self.restart_if_running(i, now);
        }
    }

    /// Offset that pre-centers the lane's configured start item, if any.
    fn configured_offset(&self, lane: usize) -> f32 {
        match self.params[lane].start_item {
            Some(index) => self.tracks[lane].centering_offset(index),
            None => 0.0,
        }
    }

    fn start_lane(&mut self, lane: usize, offset: f32, now: Instant) {
        let direction = self.params[lane].direction;
        let speed = self.params[lane].speed;
        self.scroller
            .start(&mut self.tracks[lane], direction, speed, offset, now);
        self.apply_visibility(lane);
    }

    /// Restart a running lane with its current parameters, preserving the
    /// visual offset. Stopped lanes stay stopped.
    fn restart_if_running(&mut self, lane: usize, now: Instant) {
        let id = self.tracks[lane].id();
        let Some(state) = self.scroller.state(id) else {
            return;
        };
        // The engine normalizes, so the raw negated position is enough.
        let offset = -state.position;
        self.start_lane(lane, offset, now);
    }

    fn apply_visibility(&mut self, lane: usize) {
        let visible = self.focused && self.on_screen.get(lane).copied().unwrap_or(true);
        self.scroller.set_visible(self.tracks[lane].id(), visible);
    }
}
