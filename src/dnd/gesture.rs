//! Drag gesture state machine
//!
//! A gesture runs Idle -> Dragging -> (dropped or cancelled) -> Idle.
//! The machine is pure: feeding an event returns the next state plus an
//! outcome when the gesture just ended. Event/state pairs that make no
//! sense leave the state untouched, so stray events cannot wedge it.

use crate::domain::ProjectStatus;

use super::payload::DragPayload;

/// Current state of the board's single drag gesture
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragGesture {
    /// No drag in progress
    #[default]
    Idle,
    /// A payload is being carried, possibly hovering over a lane
    Dragging {
        payload: DragPayload,
        over: Option<ProjectStatus>,
    },
}

impl DragGesture {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging { .. })
    }

    /// Payload carried by the gesture, if one is in progress
    pub fn payload(&self) -> Option<&DragPayload> {
        match self {
            DragGesture::Dragging { payload, .. } => Some(payload),
            DragGesture::Idle => None,
        }
    }

    /// Lane currently hovered by the gesture, if any
    pub fn hovered_lane(&self) -> Option<ProjectStatus> {
        match self {
            DragGesture::Dragging { over, .. } => *over,
            DragGesture::Idle => None,
        }
    }
}

/// Events driving the gesture
#[derive(Debug, Clone, PartialEq)]
pub enum GestureEvent {
    /// A drag started with the given payload attached
    Start(DragPayload),
    /// The gesture moved over a lane
    EnterLane(ProjectStatus),
    /// The gesture left the hovered lane without dropping
    LeaveLane,
    /// The carried payload was released
    Drop,
    /// The gesture was abandoned
    Cancel,
}

/// How a finished gesture ended
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// Payload released over a lane; the store move happens next
    Dropped {
        payload: DragPayload,
        lane: ProjectStatus,
    },
    /// Abandoned; the store must not be touched
    Cancelled,
}

/// Advance the gesture by one event
///
/// A drop with no hovered lane counts as a cancellation: the payload was
/// released over dead space and nothing may move.
pub fn process_event(
    gesture: DragGesture,
    event: GestureEvent,
) -> (DragGesture, Option<GestureOutcome>) {
    match (gesture, event) {
        (DragGesture::Idle, GestureEvent::Start(payload)) => {
            (DragGesture::Dragging { payload, over: None }, None)
        }
        (DragGesture::Dragging { payload, .. }, GestureEvent::EnterLane(lane)) => (
            DragGesture::Dragging {
                payload,
                over: Some(lane),
            },
            None,
        ),
        (DragGesture::Dragging { payload, .. }, GestureEvent::LeaveLane) => {
            (DragGesture::Dragging { payload, over: None }, None)
        }
        (
            DragGesture::Dragging {
                payload,
                over: Some(lane),
            },
            GestureEvent::Drop,
        ) => (
            DragGesture::Idle,
            Some(GestureOutcome::Dropped { payload, lane }),
        ),
        (DragGesture::Dragging { over: None, .. }, GestureEvent::Drop) => {
            (DragGesture::Idle, Some(GestureOutcome::Cancelled))
        }
        (DragGesture::Dragging { .. }, GestureEvent::Cancel) => {
            (DragGesture::Idle, Some(GestureOutcome::Cancelled))
        }
        // Any other pairing does not move the machine
        (state, _) => (state, None),
    }
}
