//! Data models for the application
//!
//! This module contains the UI state held by the wheel.

mod app;
mod hover;

// Re-export all public types
pub use app::*;
pub use hover::*;
