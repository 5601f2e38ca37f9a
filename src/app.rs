//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the marquee lanes, the
//! engine and the per-lane restart parameters.

mod model;

pub use model::*;
