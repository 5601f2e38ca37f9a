//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`,
//! plus the pure windowing helper that turns a track's transform into
//! the visible slice of its item strip.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::App;
use crate::config::{ControlsSettings, UiSettings};
use crate::track::Track;

/// Height of one lane box, borders included.
pub(crate) const LANE_HEIGHT: u16 = 3;

static CONTROLS_MAP: LazyLock<BTreeMap<String, String>> = LazyLock::new(|| {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    map.insert("j/k".to_string(), "select lane".to_string());
    map.insert("space".to_string(), "start/stop lane".to_string());
    map.insert("h/l".to_string(), "scroll left/right".to_string());
    // +/- is filled dynamically from config.
    map.insert("c".to_string(), "re-center".to_string());
    map.insert("q".to_string(), "quit".to_string());
    map
});

/// Render the controls help text, incorporating the speed step.
fn controls_text(speed_step: f32) -> String {
    // Keep the rendered order stable and human-friendly.
    let order = ["j/k", "space", "h/l", "+/-", "c", "q"];
    order
        .iter()
        .filter_map(|k| {
            if *k == "+/-" {
                Some(format!("[+/-] speed ±{speed_step} col/s"))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// The visible slice of a track's item strip at its current transform.
///
/// While a loop runs the strip is duplicated, so the window cycles through
/// the doubled content and the wraparound seam never shows. A static track
/// renders its natural layout without artificial cycling.
pub(crate) fn strip_window(track: &Track) -> String {
    let viewport = track.viewport.round().max(0.0) as usize;

    let mut strip = String::new();
    for item in track.items() {
        strip.push_str(item.label());
        let pad = item.extent().saturating_sub(item.label().chars().count());
        for _ in 0..pad {
            strip.push(' ');
        }
    }
    if strip.is_empty() {
        return String::new();
    }

    let cells: Vec<char> = strip.chars().collect();
    if track.is_duplicated() {
        let span = track.span_width();
        if span <= 0.0 {
            return String::new();
        }
        let start = (-track.transform()).rem_euclid(span).round() as usize % span as usize;
        cells.iter().cycle().skip(start).take(viewport).collect()
    } else {
        let offset = (-track.transform()).max(0.0).round() as usize;
        cells.iter().skip(offset).take(viewport).collect()
    }
}

/// Split `area` into header, one rect per lane and the footer. Shared with
/// the event loop so mouse hit-testing and visibility checks see the same
/// geometry the renderer uses.
pub(crate) fn lane_areas(area: Rect, lanes: usize) -> (Rect, Vec<Rect>, Rect) {
    let mut constraints = vec![Constraint::Length(3)];
    constraints.extend(std::iter::repeat(Constraint::Length(LANE_HEIGHT)).take(lanes));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    (
        chunks[0],
        chunks[1..=lanes].to_vec(),
        chunks[chunks.len() - 1],
    )
}

/// One-line status for a lane's box title.
fn lane_title(app: &App, index: usize) -> String {
    let track = &app.tracks[index];
    let marker = if index == app.selected { "> " } else { "  " };

    match app.scroller.state(track.id()) {
        Some(state) => {
            let arrow = match state.direction {
                crate::scroller::Direction::Left => "<-",
                crate::scroller::Direction::Right => "->",
            };
            let status = if state.visibility_paused() {
                " (off screen)"
            } else if state.interaction_paused() {
                " (paused)"
            } else {
                ""
            };
            format!(
                " {marker}lane {} {arrow} {:.0} col/s{status} ",
                index + 1,
                state.speed
            )
        }
        None => format!(" {marker}lane {} idle ", index + 1),
    }
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings, controls: &ControlsSettings) {
    let (header_area, lanes, footer_area) = lane_areas(frame.area(), app.lane_count());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" ostinato ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, header_area);

    // Lanes
    for (i, area) in lanes.iter().enumerate() {
        if area.height < LANE_HEIGHT {
            continue;
        }

        let title = if i == app.selected {
            Line::styled(
                lane_title(app, i),
                Style::default().add_modifier(Modifier::BOLD),
            )
        } else {
            Line::from(lane_title(app, i))
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .padding(Padding {
                left: 1,
                right: 1,
                top: 0,
                bottom: 0,
            });

        let body = Paragraph::new(strip_window(&app.tracks[i])).block(block);
        frame.render_widget(body, *area);
    }

    // Footer
    let footer = Paragraph::new(controls_text(controls.speed_step))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, footer_area);
}
