//! Terminal user interface for the board
//!
//! Renders the creation form and the status lanes, and maps keyboard
//! gestures onto the drag-and-drop protocol.

pub mod component;
pub mod input_form;
pub mod lane;
pub mod runner;
pub mod widgets;


// Re-export commonly used types
pub use component::Component;
pub use input_form::ProjectInput;
pub use lane::{LaneView, ProjectCard};
pub use runner::BoardRunner;
