//! Gesture payload carried from drag start to drop

/// Kind of data a payload carries; drop targets check this before accepting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// A project id being moved between lanes
    ProjectMove,
}

/// Affordance marker for the gesture; tells the UI which cue to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEffect {
    /// The source is moved, not copied
    Move,
}

/// The data bundle attached to a drag gesture at its start
///
/// Deliberately minimal: the id is enough to find the project again, and
/// everything else about it is read from the store at drop time.
#[derive(Debug, Clone, PartialEq)]
pub struct DragPayload {
    pub kind: PayloadKind,
    pub project_id: String,
    pub effect: DragEffect,
}

impl DragPayload {
    /// Payload for moving the given project between lanes
    pub fn project_move(project_id: impl Into<String>) -> Self {
        DragPayload {
            kind: PayloadKind::ProjectMove,
            project_id: project_id.into(),
            effect: DragEffect::Move,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_move_payload() {
        let payload = DragPayload::project_move("p1");
        assert_eq!(payload.kind, PayloadKind::ProjectMove);
        assert_eq!(payload.project_id, "p1");
        assert_eq!(payload.effect, DragEffect::Move);
    }
}
