//! CLI Interface: User input and terminal rendering
//!
//! # Components
//! - `input.rs`: Keystroke capture and command mapping using crossterm
//! - `display.rs`: Terminal rendering and UI
//! - `chart.rs`: Text line chart of average response time

pub mod chart;
pub mod display;
pub mod input;
