//! Terminal front-end: runtime loop, renderer, and themes.
//!
//! Everything here is a consumer of the engine's [`FrameOutput`];
//! no interaction logic lives on this side of the boundary.
//!
//! [`FrameOutput`]: crate::engine::event::FrameOutput

pub mod render;
mod runtime;
pub mod theme;

pub use runtime::run;
