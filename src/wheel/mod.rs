//! Wheel model
//!
//! Everything here is pure and deterministic given a seed:
//! - Rotation advances only through `update(elapsed_ms)`
//! - Geometry is derived from the value count and configuration
//! - No rendering or platform dependencies

pub mod geometry;
pub mod rotation;
pub mod state;
pub mod tick;
pub mod values;

pub use geometry::SectorGeometry;
pub use rotation::RotationModel;
pub use state::{Wheel, radius_for_viewport};
pub use tick::{TickDetector, tick_index};
pub use values::{LabelSource, format_lines, parse_lines};
