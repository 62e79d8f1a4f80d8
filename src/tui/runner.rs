//! Board runner: terminal lifecycle, event loop and keyboard mapping
//!
//! The keyboard stands in for a pointer: picking a card up starts a drag
//! gesture, the arrow keys hover it over a lane, and enter or space
//! releases it there. All of it runs single-threaded; the loop blocks on
//! the event poll between frames.

use std::io::{self, Stdout};
use std::time::Duration;

use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::debug;

use crate::config::BoardConfig;
use crate::dnd::{self, DragGesture, GestureEvent, GestureOutcome};
use crate::domain::{ProjectStatus, STATUS_LANES};
use crate::errors::Result;
use crate::state::ProjectStore;

use super::component::Component;
use super::input_form::ProjectInput;
use super::lane::LaneView;
use super::widgets;

/// Sample projects seeded in demo mode
const DEMO_PROJECTS: &[(&str, &str, u32)] = &[
    ("Build shed", "Assemble the wooden shed kit", 2),
    ("Paint fence", "Apply two coats of outdoor paint", 1),
    ("Plant hedge", "Twelve saplings along the back fence", 3),
];

/// Which part of the board owns the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Form,
    Lane(usize),
}

/// Main board runner
pub struct BoardRunner {
    store: ProjectStore,
    input: ProjectInput,
    lanes: Vec<LaneView>,
    gesture: DragGesture,
    focus: Focus,
    start_time: chrono::DateTime<chrono::Utc>,
    tick_rate: Duration,
}

impl BoardRunner {
    /// Build a board wired to a fresh store
    ///
    /// Widgets are configured before anything enters the store, so the
    /// lanes see every project from the first one on.
    pub fn new(config: &BoardConfig) -> Self {
        let mut store = ProjectStore::new();
        let mut input = ProjectInput::new(config.rules.clone());
        let mut lanes: Vec<LaneView> = STATUS_LANES.iter().map(|&s| LaneView::new(s)).collect();

        input.configure(&mut store);
        for lane in &mut lanes {
            lane.configure(&mut store);
        }

        let mut runner = BoardRunner {
            store,
            input,
            lanes,
            gesture: DragGesture::Idle,
            focus: Focus::Form,
            start_time: chrono::Utc::now(),
            tick_rate: Duration::from_millis(config.tick_rate_ms),
        };
        runner.apply_focus();
        runner
    }

    /// Seed a few sample projects through the normal creation path
    pub fn seed_demo(&mut self) {
        for (title, description, people) in DEMO_PROJECTS {
            self.store.add_project(title, description, *people);
        }
        // One finished project so both lanes have content
        if let Some(second) = self.store.projects().get(1).map(|p| p.id.clone()) {
            self.store.move_project(&second, ProjectStatus::Finished);
        }
    }

    /// Run the board (blocking call)
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Run board loop
        let result = self.run_board_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn run_board_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            self.draw(terminal)?;

            // Handle events (with timeout)
            if crossterm::event::poll(self.tick_rate)? {
                match crossterm::event::read()? {
                    crossterm::event::Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    crossterm::event::Event::Resize(_, _) => {
                        // Force redraw
                    }
                    _ => {}
                }
            }
        }
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        // Droppable cues follow the gesture before anything is painted
        let payload = self.gesture.payload().cloned();
        let hovered = self.gesture.hovered_lane();
        for lane in &mut self.lanes {
            let over_this_lane = hovered == Some(lane.status());
            let accepts = dnd::lane_accepts(&*lane, payload.as_ref());
            lane.set_droppable(over_this_lane && accepts);
        }

        let summary = self.footer_summary();
        let dragging = self.gesture.is_dragging();
        let start_time = self.start_time;

        terminal.draw(|f| {
            let size = f.area();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(6),
                    Constraint::Min(0),
                    Constraint::Length(4),
                ])
                .split(size);

            widgets::render_header(f, chunks[0]);
            self.input.render(f, chunks[1]);

            let lane_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(chunks[2]);
            for (lane, area) in self.lanes.iter().zip(lane_chunks.iter()) {
                lane.render(f, *area);
            }

            widgets::render_footer(f, chunks[3], &summary, dragging, start_time);
        })?;

        Ok(())
    }

    /// One line of board state for the footer
    fn footer_summary(&self) -> String {
        match self.gesture.payload() {
            Some(payload) => {
                let title = self
                    .store
                    .projects()
                    .iter()
                    .find(|p| p.id == payload.project_id)
                    .map(|p| p.title.clone())
                    .unwrap_or_else(|| payload.project_id.clone());
                let target = match self.gesture.hovered_lane() {
                    Some(lane) => lane.lane_title(),
                    None => "no lane".to_string(),
                };
                format!("Moving: {} | Target: {}", title, target)
            }
            None => {
                let active = self.lane_len(ProjectStatus::Active);
                let finished = self.lane_len(ProjectStatus::Finished);
                format!("Active: {} | Finished: {}", active, finished)
            }
        }
    }

    fn lane_len(&self, status: ProjectStatus) -> usize {
        // Lanes are built in STATUS_LANES order, so the lane index is the
        // position of its status
        self.lanes
            .get(status.lane_index())
            .map(|l| l.len())
            .unwrap_or(0)
    }

    /// Handle one key event; returns true when the board should quit
    pub(crate) fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool {
        use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl-C quits from anywhere, even mid-gesture
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.gesture.is_dragging() {
            self.handle_drag_key(key.code);
            return false;
        }

        match self.focus {
            Focus::Form => {
                self.handle_form_key(key.code);
                false
            }
            Focus::Lane(index) => self.handle_lane_key(key.code, index),
        }
    }

    fn handle_form_key(&mut self, code: crossterm::event::KeyCode) {
        use crossterm::event::KeyCode;

        match code {
            KeyCode::Tab => self.cycle_focus(),
            KeyCode::Down => self.input.focus_next_field(),
            KeyCode::Up => self.input.focus_previous_field(),
            KeyCode::Enter => {
                self.input.submit(&mut self.store);
            }
            KeyCode::Backspace => self.input.delete_char(),
            KeyCode::Char(c) => self.input.insert_char(c),
            _ => {}
        }
    }

    fn handle_lane_key(&mut self, code: crossterm::event::KeyCode, index: usize) -> bool {
        use crossterm::event::KeyCode;

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Tab => self.cycle_focus(),
            KeyCode::Down | KeyCode::Char('j') => self.lanes[index].select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.lanes[index].select_previous(),
            KeyCode::Left => self.focus_lane(0),
            KeyCode::Right => self.focus_lane(self.lanes.len() - 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.begin_drag_from_lane(index),
            _ => {}
        }
        false
    }

    fn handle_drag_key(&mut self, code: crossterm::event::KeyCode) {
        use crossterm::event::KeyCode;

        match code {
            KeyCode::Left => self.hover_lane(0),
            KeyCode::Right => self.hover_lane(self.lanes.len() - 1),
            KeyCode::Tab => {
                if let Some(current) = self.gesture.hovered_lane() {
                    self.hover_lane(current.other().lane_index());
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(outcome) = self.advance_gesture(GestureEvent::Drop) {
                    self.apply_outcome(outcome);
                }
            }
            KeyCode::Esc => {
                if let Some(outcome) = self.advance_gesture(GestureEvent::Cancel) {
                    self.apply_outcome(outcome);
                }
            }
            _ => {}
        }
    }

    /// Pick up the selected card, starting a gesture hovered over its own
    /// lane, the way a pointer drag starts over the card it grabbed
    fn begin_drag_from_lane(&mut self, index: usize) {
        if let Some(card) = self.lanes[index].selected_card() {
            let payload = dnd::begin_drag(&card);
            debug!(id = %payload.project_id, "drag started");
            self.advance_gesture(GestureEvent::Start(payload));
            self.advance_gesture(GestureEvent::EnterLane(self.lanes[index].status()));
        }
    }

    /// Hover the carried payload over the lane at `index`
    fn hover_lane(&mut self, index: usize) {
        if let Some(lane) = self.lanes.get(index) {
            let status = lane.status();
            if self.gesture.hovered_lane() != Some(status) {
                self.advance_gesture(GestureEvent::LeaveLane);
                self.advance_gesture(GestureEvent::EnterLane(status));
            }
        }
    }

    fn advance_gesture(&mut self, event: GestureEvent) -> Option<GestureOutcome> {
        let (next, outcome) = dnd::process_event(std::mem::take(&mut self.gesture), event);
        self.gesture = next;
        outcome
    }

    fn apply_outcome(&mut self, outcome: GestureOutcome) {
        match outcome {
            GestureOutcome::Dropped { payload, lane } => {
                if let Some(target) = self.lanes.get(lane.lane_index()) {
                    dnd::complete_drop(&mut self.store, target, Some(&payload));
                }
            }
            GestureOutcome::Cancelled => {
                debug!("drag cancelled");
            }
        }
    }

    fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Form => Focus::Lane(0),
            Focus::Lane(index) if index + 1 < self.lanes.len() => Focus::Lane(index + 1),
            Focus::Lane(_) => Focus::Form,
        };
        self.apply_focus();
    }

    fn focus_lane(&mut self, index: usize) {
        if index < self.lanes.len() {
            self.focus = Focus::Lane(index);
            self.apply_focus();
        }
    }

    fn apply_focus(&mut self) {
        self.input.set_focused(self.focus == Focus::Form);
        for (i, lane) in self.lanes.iter_mut().enumerate() {
            lane.set_focused(self.focus == Focus::Lane(i));
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &ProjectStore {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut ProjectStore {
        &mut self.store
    }

    #[cfg(test)]
    pub(crate) fn lanes(&self) -> &[LaneView] {
        &self.lanes
    }

    #[cfg(test)]
    pub(crate) fn gesture(&self) -> &DragGesture {
        &self.gesture
    }
}
