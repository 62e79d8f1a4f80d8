//! Drag-and-drop protocol between board widgets and the store
//!
//! Widgets opt into the protocol structurally: a thing that can be picked
//! up implements [`DragSource`], a lane that can receive it implements
//! [`DropTarget`], and a widget may implement either, both, or neither.
//! The gesture itself is a small pure state machine; the coordinator
//! turns completed gestures into store calls.

mod coordinator;
mod gesture;
mod payload;

pub use coordinator::{begin_drag, complete_drop, lane_accepts};
pub use gesture::{process_event, DragGesture, GestureEvent, GestureOutcome};
pub use payload::{DragEffect, DragPayload, PayloadKind};

use crate::domain::ProjectStatus;

/// Capability of a widget that can originate a drag gesture
pub trait DragSource {
    /// The payload attached to the gesture when the drag starts
    fn drag_payload(&self) -> DragPayload;
}

/// Capability of a widget that can receive a drop
pub trait DropTarget {
    /// Whether this target recognizes the payload; drives the droppable cue
    fn accepts(&self, payload: &DragPayload) -> bool;

    /// Status identifying the lane; dropped projects move here
    fn lane_status(&self) -> ProjectStatus;
}
