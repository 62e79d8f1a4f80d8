//! Glue between gesture outcomes and the store
//!
//! The coordinator owns no state of its own. It reads payloads off drag
//! sources and turns completed drops into store calls, swallowing
//! malformed payloads the same way an unknown id is swallowed.

use tracing::debug;

use crate::state::ProjectStore;

use super::payload::{DragPayload, PayloadKind};
use super::{DragSource, DropTarget};

/// Start a drag from a source widget, reading its payload off it
pub fn begin_drag(source: &impl DragSource) -> DragPayload {
    source.drag_payload()
}

/// Whether a lane should show its droppable cue for the carried payload
pub fn lane_accepts(target: &impl DropTarget, payload: Option<&DragPayload>) -> bool {
    match payload {
        Some(payload) => target.accepts(payload),
        None => false,
    }
}

/// Complete a drop over a lane
///
/// A missing payload, an unrecognized kind, or an empty project id is
/// ignored without touching the store. Dropping a project onto the lane
/// it already sits in is absorbed by the store's same-status check.
pub fn complete_drop(
    store: &mut ProjectStore,
    target: &impl DropTarget,
    payload: Option<&DragPayload>,
) {
    let payload = match payload {
        Some(payload) => payload,
        None => {
            debug!("drop without payload ignored");
            return;
        }
    };

    if payload.kind != PayloadKind::ProjectMove || payload.project_id.is_empty() {
        debug!(id = %payload.project_id, "drop with unrecognized payload ignored");
        return;
    }

    store.move_project(&payload.project_id, target.lane_status());
}
