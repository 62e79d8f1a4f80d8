//! Observable project store
//!
//! Owns the board's project list and pushes a fresh snapshot to every
//! registered listener after each change. The store is plain owned state;
//! whoever runs the board constructs one and hands out `&mut` access.

use tracing::debug;

use crate::domain::{Project, ProjectStatus};

/// Callback receiving a snapshot of the full project list after a change
pub type ProjectListener = Box<dyn FnMut(Vec<Project>)>;

/// Observable owner of the project list
///
/// Listeners live as long as the store: there is no unregistration, and
/// registering the same callback twice runs it twice per change. Each
/// listener gets its own copy of the list, so a listener mutating its
/// snapshot cannot affect the store or its peers.
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<ProjectListener>,
    next_id: u64,
}

impl ProjectStore {
    pub fn new() -> Self {
        ProjectStore {
            projects: Vec::new(),
            listeners: Vec::new(),
            next_id: 1,
        }
    }

    /// Register a listener for future changes
    ///
    /// The listener is not invoked at registration time; it first runs on
    /// the next mutation.
    pub fn add_listener(&mut self, listener: ProjectListener) {
        self.listeners.push(listener);
    }

    /// Create a project in the active lane and notify listeners
    ///
    /// Inputs are trusted here: validation happens at the creation gate
    /// before this call.
    pub fn add_project(&mut self, title: &str, description: &str, people: u32) {
        let id = self.fresh_id();
        debug!(id = %id, title, "project added");
        self.projects.push(Project::new(
            id,
            title.to_string(),
            description.to_string(),
            people,
        ));
        self.notify_listeners();
    }

    /// Move a project to another lane and notify listeners
    ///
    /// An unknown id is a silent no-op. A move to the lane the project is
    /// already in changes nothing and skips notification, so lanes do not
    /// re-render for nothing.
    pub fn move_project(&mut self, id: &str, new_status: ProjectStatus) {
        if let Some(project) = self.projects.iter_mut().find(|p| p.id == id) {
            if project.status != new_status {
                project.status = new_status;
                debug!(id, status = %new_status, "project moved");
                self.notify_listeners();
            }
        }
    }

    /// Read-only view of the current list, in insertion order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Issue the next id; ids are unique for the lifetime of the store
    fn fresh_id(&mut self) -> String {
        let id = format!("p{}", self.next_id);
        self.next_id += 1;
        id
    }

    /// Run every listener in registration order, each on its own copy of
    /// the list. A panicking listener unwinds out of the mutating call.
    fn notify_listeners(&mut self) {
        for listener in self.listeners.iter_mut() {
            listener(self.projects.clone());
        }
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}
