// Phase registry
pub mod phases;

// Chart geometry and scene
pub mod chart;

// Markup conversion for the detail panel
pub mod markup;

// Interaction state
pub mod app;

// Terminal rendering
pub mod ui;

// Static SVG/HTML/JSON export
pub mod export;

// Command line, logging and errors
pub mod cli;
pub mod error;
pub mod logging;

pub use error::{Result, WheelError};
