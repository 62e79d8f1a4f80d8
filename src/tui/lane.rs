//! Lane widgets: one column of project cards per status
//!
//! Each lane subscribes to the store at configure time and keeps its own
//! filtered copy of the list in a shared cell, so the listener closure
//! and the widget can both reach it.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::dnd::{DragPayload, DragSource, DropTarget, PayloadKind};
use crate::domain::{Project, ProjectStatus};
use crate::state::ProjectStore;

use super::component::Component;
use super::widgets::{status_color, status_icon};

/// Card for a single project row; the thing a drag picks up
#[derive(Debug, Clone)]
pub struct ProjectCard {
    project: Project,
}

impl ProjectCard {
    pub fn new(project: Project) -> Self {
        ProjectCard { project }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Rows shown for this card
    fn list_item(&self) -> ListItem<'static> {
        let title_line = Line::from(vec![
            Span::styled(
                format!("{} ", status_icon(self.project.status)),
                Style::default().fg(status_color(self.project.status)),
            ),
            Span::styled(
                self.project.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        let people_line = Line::from(Span::styled(
            format!("  {} assigned", self.project.people_label()),
            Style::default().fg(Color::DarkGray),
        ));
        let description_line = Line::from(format!("  {}", self.project.description));
        ListItem::new(vec![title_line, people_line, description_line])
    }
}

impl DragSource for ProjectCard {
    fn drag_payload(&self) -> DragPayload {
        DragPayload::project_move(self.project.id.clone())
    }
}

/// One status lane, fed by a store listener
pub struct LaneView {
    status: ProjectStatus,
    assigned: Rc<RefCell<Vec<Project>>>,
    selected: usize,
    focused: bool,
    droppable: bool,
}

impl LaneView {
    pub fn new(status: ProjectStatus) -> Self {
        LaneView {
            status,
            assigned: Rc::new(RefCell::new(Vec::new())),
            selected: 0,
            focused: false,
            droppable: false,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Number of projects currently shown
    pub fn len(&self) -> usize {
        self.assigned.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.borrow().is_empty()
    }

    /// Copy of the projects currently assigned to this lane
    pub fn assigned(&self) -> Vec<Project> {
        self.assigned.borrow().clone()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Droppable cue, toggled as the gesture hovers this lane
    pub fn set_droppable(&mut self, droppable: bool) {
        self.droppable = droppable;
    }

    pub fn select_next(&mut self) {
        let len = self.len();
        if len > 0 && self.clamped_selection() + 1 < len {
            self.selected = self.clamped_selection() + 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.clamped_selection().saturating_sub(1);
    }

    /// Card for the current keyboard selection, if the lane has one
    pub fn selected_card(&self) -> Option<ProjectCard> {
        let assigned = self.assigned.borrow();
        assigned
            .get(self.clamped_selection())
            .cloned()
            .map(ProjectCard::new)
    }

    /// Selection clamped to the lane's current size; projects may have
    /// left the lane since the user last moved the cursor
    fn clamped_selection(&self) -> usize {
        let len = self.len();
        if len == 0 {
            0
        } else {
            self.selected.min(len - 1)
        }
    }
}

impl Component for LaneView {
    fn configure(&mut self, store: &mut ProjectStore) {
        let assigned = Rc::clone(&self.assigned);
        let status = self.status;
        store.add_listener(Box::new(move |projects| {
            *assigned.borrow_mut() = projects.into_iter().filter(|p| p.status == status).collect();
        }));
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let assigned = self.assigned.borrow();

        let border_style = if self.droppable {
            Style::default().fg(Color::Green)
        } else if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title = if self.droppable {
            format!("{} (drop here)", self.status.lane_title())
        } else {
            self.status.lane_title()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);

        let selection = self.clamped_selection();
        let items: Vec<ListItem> = assigned
            .iter()
            .enumerate()
            .map(|(i, project)| {
                let item = ProjectCard::new(project.clone()).list_item();
                if self.focused && i == selection {
                    item.style(Style::default().bg(Color::Blue))
                } else {
                    item
                }
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_widget(list, area);
    }
}

impl DropTarget for LaneView {
    fn accepts(&self, payload: &DragPayload) -> bool {
        payload.kind == PayloadKind::ProjectMove
    }

    fn lane_status(&self) -> ProjectStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured_lanes(store: &mut ProjectStore) -> (LaneView, LaneView) {
        let mut active = LaneView::new(ProjectStatus::Active);
        let mut finished = LaneView::new(ProjectStatus::Finished);
        active.configure(store);
        finished.configure(store);
        (active, finished)
    }

    #[test]
    fn test_lane_starts_empty_until_first_change() {
        let mut store = ProjectStore::new();
        store.add_project("Build shed", "Assemble the wooden shed kit", 2);

        // Subscribing does not deliver the current list
        let (active, _) = configured_lanes(&mut store);
        assert!(active.is_empty());
    }

    #[test]
    fn test_lane_filters_snapshot_by_status() {
        let mut store = ProjectStore::new();
        let (active, finished) = configured_lanes(&mut store);

        store.add_project("Build shed", "Assemble the wooden shed kit", 2);
        store.add_project("Paint fence", "Apply two coats of outdoor paint", 1);
        store.move_project("p2", ProjectStatus::Finished);

        let active_ids: Vec<String> = active.assigned().iter().map(|p| p.id.clone()).collect();
        let finished_ids: Vec<String> = finished.assigned().iter().map(|p| p.id.clone()).collect();
        assert_eq!(active_ids, vec!["p1"]);
        assert_eq!(finished_ids, vec!["p2"]);
    }

    #[test]
    fn test_lane_preserves_insertion_order() {
        let mut store = ProjectStore::new();
        let (active, _) = configured_lanes(&mut store);

        store.add_project("Build shed", "Assemble the wooden shed kit", 2);
        store.add_project("Paint fence", "Apply two coats of outdoor paint", 1);
        store.add_project("Plant hedge", "Twelve saplings along the back fence", 3);

        let titles: Vec<String> = active.assigned().iter().map(|p| p.title.clone()).collect();
        assert_eq!(titles, vec!["Build shed", "Paint fence", "Plant hedge"]);
    }

    #[test]
    fn test_selection_moves_within_bounds() {
        let mut store = ProjectStore::new();
        let (mut active, _) = configured_lanes(&mut store);

        store.add_project("Build shed", "Assemble the wooden shed kit", 2);
        store.add_project("Paint fence", "Apply two coats of outdoor paint", 1);

        assert_eq!(active.selected_card().unwrap().project().id, "p1");

        active.select_next();
        assert_eq!(active.selected_card().unwrap().project().id, "p2");

        // Already at the end
        active.select_next();
        assert_eq!(active.selected_card().unwrap().project().id, "p2");

        active.select_previous();
        assert_eq!(active.selected_card().unwrap().project().id, "p1");

        active.select_previous();
        assert_eq!(active.selected_card().unwrap().project().id, "p1");
    }

    #[test]
    fn test_selection_clamps_when_lane_shrinks() {
        let mut store = ProjectStore::new();
        let (mut active, _) = configured_lanes(&mut store);

        store.add_project("Build shed", "Assemble the wooden shed kit", 2);
        store.add_project("Paint fence", "Apply two coats of outdoor paint", 1);
        active.select_next();

        // The selected project leaves the lane
        store.move_project("p2", ProjectStatus::Finished);
        assert_eq!(active.selected_card().unwrap().project().id, "p1");
    }

    #[test]
    fn test_empty_lane_has_no_selection() {
        let mut store = ProjectStore::new();
        let (active, _) = configured_lanes(&mut store);
        assert!(active.selected_card().is_none());
    }

    #[test]
    fn test_card_payload_carries_project_id() {
        let card = ProjectCard::new(Project::new(
            "p7".to_string(),
            "Build shed".to_string(),
            "Assemble the wooden shed kit".to_string(),
            2,
        ));
        let payload = card.drag_payload();
        assert_eq!(payload.project_id, "p7");
        assert_eq!(payload.kind, PayloadKind::ProjectMove);
    }

    #[test]
    fn test_lane_accepts_project_move_payloads() {
        let lane = LaneView::new(ProjectStatus::Finished);
        assert!(lane.accepts(&DragPayload::project_move("p1")));
        assert_eq!(lane.lane_status(), ProjectStatus::Finished);
    }
}
