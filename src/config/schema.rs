use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/ostinato/config.toml` or `~/.config/ostinato/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `OSTINATO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub scroller: ScrollerSettings,
    pub controls: ControlsSettings,
    pub lanes: Vec<LaneSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui: UiSettings::default(),
            scroller: ScrollerSettings::default(),
            controls: ControlsSettings::default(),
            lanes: default_lanes(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top "ostinato" header box.
    pub header_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ ostinato: the loop goes on ~ ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrollerSettings {
    /// Quiet period after user interaction before a lane resumes (milliseconds).
    pub quiet_period_ms: u64,
    /// Target frame interval for the animation loop (milliseconds).
    pub frame_ms: u64,
}

impl Default for ScrollerSettings {
    fn default() -> Self {
        Self {
            quiet_period_ms: 900,
            frame_ms: 33,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Columns-per-second added or removed when pressing `+` / `-`.
    pub speed_step: f32,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self { speed_step: 4.0 }
    }
}

/// One marquee lane: its items and loop parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LaneSettings {
    /// Item labels rendered along the lane.
    pub items: Vec<String>,
    /// Scroll direction for this lane.
    pub direction: DirectionSetting,
    /// Scroll speed in columns per second.
    pub speed: f32,
    /// Blank columns separating consecutive items.
    pub gap: usize,
    /// Item to center in the viewport before motion starts.
    pub start_item: Option<usize>,
}

impl Default for LaneSettings {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            direction: DirectionSetting::Left,
            speed: 32.0,
            gap: 3,
            start_item: None,
        }
    }
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectionSetting {
    #[serde(alias = "leftwards", alias = "leftward")]
    Left,
    #[serde(alias = "rightwards", alias = "rightward")]
    Right,
}

fn default_lanes() -> Vec<LaneSettings> {
    vec![
        LaneSettings {
            items: ["rust", "crossterm", "ratatui", "serde", "config"]
                .into_iter()
                .map(String::from)
                .collect(),
            ..LaneSettings::default()
        },
        LaneSettings {
            items: ["infinite", "seamless", "loop", "scrolling", "forever"]
                .into_iter()
                .map(String::from)
                .collect(),
            speed: 24.0,
            start_item: Some(2),
            ..LaneSettings::default()
        },
    ]
}
