//! Observable board state

mod store;

pub use store::{ProjectListener, ProjectStore};
