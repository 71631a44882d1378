//! Donut chart geometry, palette, and the retained scene drawn by the UI and the exporter

mod geometry;
mod palette;
mod scene;

pub use geometry::*;
pub use palette::*;
pub use scene::*;
