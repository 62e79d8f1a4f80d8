//! Project model: the work item shown on the board

use serde::{Deserialize, Serialize};

use super::status::ProjectStatus;

/// A work item on the board
///
/// Identity lives in `id`; everything else is payload. Only `status`
/// changes after creation, and only through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier, assigned by the store at creation
    pub id: String,

    /// Short title shown on the card
    pub title: String,

    /// Longer free-form description
    pub description: String,

    /// Number of people assigned, fixed at creation
    pub people: u32,

    /// Lane the project currently sits in
    pub status: ProjectStatus,
}

impl Project {
    /// Create a new project; every project starts in the active lane
    pub fn new(id: String, title: String, description: String, people: u32) -> Self {
        Project {
            id,
            title,
            description,
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Human-readable label for the assigned head count
    pub fn people_label(&self) -> String {
        if self.people > 1 {
            format!("{} persons", self.people)
        } else if self.people == 1 {
            "1 person".to_string()
        } else {
            "No one".to_string()
        }
    }
}
