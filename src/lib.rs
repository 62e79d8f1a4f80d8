//! Lanekit - a two-lane project board for the terminal
//!
//! This library provides the core functionality for the lanekit CLI, including:
//! - The project model and its two status lanes
//! - Declarative input validation gating project creation
//! - An observable store that feeds listeners full-list snapshots
//! - A drag-and-drop protocol for moving projects between lanes
//! - The ratatui board binding all of it to the terminal

pub mod cli;
pub mod config;
pub mod dnd;
pub mod domain;
pub mod errors;
pub mod state;
pub mod tui;

// Re-export commonly used types
pub use errors::{LanekitError, Result};
pub use domain::{Project, ProjectStatus};
pub use state::{ProjectListener, ProjectStore};
