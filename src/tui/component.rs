//! Widget lifecycle contract
//!
//! Board widgets share a two-step lifecycle: `configure` wires the widget
//! to the store once, before the first frame; `render` draws it into the
//! area the board assigns each frame. Widgets with no store wiring leave
//! `configure` empty.

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::state::ProjectStore;

/// Lifecycle capability every board widget implements
pub trait Component {
    /// One-time wiring against the store, such as listener registration
    fn configure(&mut self, store: &mut ProjectStore);

    /// Draw into the assigned area
    fn render(&self, frame: &mut Frame, area: Rect);
}
