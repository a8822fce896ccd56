//! Wheel rendering
//!
//! The projector turns wheel state into a flat list of draw commands; the
//! commands are then replayed onto any [`Canvas`]. In the browser that is the
//! canvas 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod commands;
pub mod projector;

pub use commands::{Canvas, DrawCommand, render};
pub use projector::{project, project_frame};
