//! Project creation form
//!
//! Three text buffers the user types into, gathered and validated on
//! submit. Valid input becomes a project and clears the form; invalid
//! input leaves the buffers alone so the user can correct them.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{debug, warn};

use crate::domain::{validate_draft, CreationRules, ProjectDraft};
use crate::state::ProjectStore;

use super::component::Component;

/// Fields of the creation form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    People,
}

impl FormField {
    fn next(self) -> FormField {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::People,
            FormField::People => FormField::Title,
        }
    }

    fn previous(self) -> FormField {
        match self {
            FormField::Title => FormField::People,
            FormField::Description => FormField::Title,
            FormField::People => FormField::Description,
        }
    }

    fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::People => "People",
        }
    }
}

/// The creation form widget
pub struct ProjectInput {
    rules: CreationRules,
    title_input: String,
    description_input: String,
    people_input: String,
    field: FormField,
    focused: bool,
    notice: Option<String>,
}

impl ProjectInput {
    pub fn new(rules: CreationRules) -> Self {
        ProjectInput {
            rules,
            title_input: String::new(),
            description_input: String::new(),
            people_input: String::new(),
            field: FormField::Title,
            focused: false,
            notice: None,
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn focus_next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn focus_previous_field(&mut self) {
        self.field = self.field.previous();
    }

    /// Append a character to the focused field
    pub fn insert_char(&mut self, c: char) {
        self.field_buffer_mut().push(c);
        // Typing invalidates whatever the last submit said
        self.notice = None;
    }

    /// Remove the last character of the focused field
    pub fn delete_char(&mut self) {
        self.field_buffer_mut().pop();
    }

    /// Trimmed and coerced candidate built from the current buffers
    pub fn gather_values(&self) -> ProjectDraft {
        ProjectDraft::from_raw(&self.title_input, &self.description_input, &self.people_input)
    }

    /// Message shown under the fields after the last submit, if any
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Validate the current input against the creation rules.
    ///
    /// On success the project is added to the store and the form resets;
    /// on failure the buffers stay as typed and a notice explains the
    /// rules.
    pub fn submit(&mut self, store: &mut ProjectStore) -> bool {
        let draft = self.gather_values();
        if validate_draft(&draft, &self.rules) {
            debug!(title = %draft.title, "form input accepted");
            store.add_project(&draft.title, &draft.description, draft.people as u32);
            self.clear_input_values();
            self.notice = Some(format!("Added \"{}\"", draft.title));
            true
        } else {
            warn!(title = %draft.title, "form input rejected");
            self.notice = Some(format!(
                "Invalid input: title required, description of {}+ characters, people {} to {}",
                self.rules.description_min_length, self.rules.people_min, self.rules.people_max
            ));
            false
        }
    }

    fn clear_input_values(&mut self) {
        self.title_input.clear();
        self.description_input.clear();
        self.people_input.clear();
        self.field = FormField::Title;
    }

    fn field_buffer_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Title => &mut self.title_input,
            FormField::Description => &mut self.description_input,
            FormField::People => &mut self.people_input,
        }
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, field: FormField, value: &str) {
        let active = self.focused && self.field == field;
        let cursor = if active { "▏" } else { "" };
        let value_style = if active {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let line = Line::from(vec![
            Span::styled(
                format!("{:<13}", format!("{}:", field.label())),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(format!("{}{}", value, cursor), value_style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

impl Component for ProjectInput {
    fn configure(&mut self, _store: &mut ProjectStore) {
        // The form only pushes into the store on submit; nothing to wire
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("New project");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        self.render_field(frame, chunks[0], FormField::Title, &self.title_input);
        self.render_field(frame, chunks[1], FormField::Description, &self.description_input);
        self.render_field(frame, chunks[2], FormField::People, &self.people_input);

        if let Some(notice) = &self.notice {
            let notice_paragraph =
                Paragraph::new(notice.as_str()).style(Style::default().fg(Color::Yellow));
            frame.render_widget(notice_paragraph, chunks[3]);
        }
    }
}
