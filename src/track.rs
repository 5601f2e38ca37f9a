//! Track module: exposes the track and item model animated by the scroller.
//!
//! A `Track` is an ordered strip of fixed-width `Item`s plus the transform
//! and layout state the marquee engine manipulates while a loop runs.

mod model;

pub use model::*;
