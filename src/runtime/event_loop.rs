use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::runtime::startup;
use crate::scroller::Direction;
use crate::ui;

/// Main terminal loop: advances every running lane once per frame, draws
/// the UI and routes input to the engine. Returns `Ok(())` when shutdown
/// is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let frame_interval = Duration::from_millis(settings.scroller.frame_ms.max(1));

    loop {
        let now = Instant::now();

        // Lanes pushed below the fold by a small terminal are off screen.
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let (_, lane_rects, _) = ui::lane_areas(area, app.lane_count());
        for (i, rect) in lane_rects.iter().enumerate() {
            app.set_lane_on_screen(i, rect.height >= ui::LANE_HEIGHT);
        }

        app.tick_all(now);
        terminal.draw(|f| ui::draw(f, app, &settings.ui, &settings.controls))?;

        if event::poll(frame_interval)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key_event(key, settings, app) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app, &lane_rects),
                Event::FocusGained => app.set_focused(true),
                Event::FocusLost => app.set_focused(false),
                Event::Resize(width, _) => {
                    app.handle_resize(startup::lane_viewport(width), Instant::now());
                }
                _ => {}
            }
        }
    }

    // Leave every track exactly as it was before the loops started.
    app.stop_all();

    Ok(())
}

/// Handle a key press. Returns `true` when the app should quit.
fn handle_key_event(key: KeyEvent, settings: &config::Settings, app: &mut App) -> bool {
    let now = Instant::now();

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char(' ') => app.toggle_selected(now),
        KeyCode::Char('h') => app.set_direction_selected(Direction::Left, now),
        KeyCode::Char('l') => app.set_direction_selected(Direction::Right, now),
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.adjust_speed_selected(settings.controls.speed_step, now);
        }
        KeyCode::Char('-') => {
            app.adjust_speed_selected(-settings.controls.speed_step, now);
        }
        KeyCode::Char('c') => app.recenter_selected(now),
        _ => {}
    }

    false
}

/// Pointer activity over a lane soft-pauses its loop, like hovering or
/// touching the strip would.
fn handle_mouse_event(mouse: MouseEvent, app: &mut App, lane_rects: &[Rect]) {
    match mouse.kind {
        MouseEventKind::Moved
        | MouseEventKind::Down(_)
        | MouseEventKind::Drag(_)
        | MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown => {
            let at = Position::new(mouse.column, mouse.row);
            if let Some(lane) = lane_rects.iter().position(|r| r.contains(at)) {
                app.interact(lane, Instant::now());
            }
        }
        _ => {}
    }
}
