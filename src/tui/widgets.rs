//! Board chrome rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

use crate::domain::ProjectStatus;

/// Render the header section (3 lines)
pub fn render_header(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let border_width = area.width as usize;

    // Title line
    let title = Line::from(vec![
        Span::styled("┌─ Lanekit ", Style::default().fg(Color::Cyan)),
        Span::styled(
            "─".repeat(border_width.saturating_sub(12)),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("┐", Style::default().fg(Color::Cyan)),
    ]);
    let title_paragraph = Paragraph::new(Text::from(title)).alignment(Alignment::Left);
    f.render_widget(title_paragraph, chunks[0]);

    // Subtitle line
    f.render_widget(framed_line("Two-lane project board", border_width), chunks[1]);

    // Separator line
    f.render_widget(separator_line(border_width), chunks[2]);
}

/// Render the footer section (4 lines)
pub fn render_footer(
    f: &mut Frame,
    area: Rect,
    summary: &str,
    dragging: bool,
    start_time: chrono::DateTime<chrono::Utc>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let border_width = area.width as usize;

    // Separator line
    f.render_widget(separator_line(border_width), chunks[0]);

    // Summary line
    let summary_text = format!("{} | Runtime: {}", summary, format_runtime(start_time));
    f.render_widget(framed_line(&summary_text, border_width), chunks[1]);

    // Keyboard shortcuts line
    let keys_text = if dragging {
        "[left/right] choose lane  [enter/space] drop  [esc] cancel"
    } else {
        "[tab] focus  [up/down] select  [enter] submit / pick up  [q] quit"
    };
    f.render_widget(framed_line(keys_text, border_width), chunks[2]);

    // Bottom border line
    let bottom = Line::from(vec![
        Span::styled("└", Style::default().fg(Color::Cyan)),
        Span::styled(
            "─".repeat(border_width.saturating_sub(2)),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("┘", Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(Text::from(bottom)), chunks[3]);
}

// ===== HELPER FUNCTIONS =====

/// One content line framed by the outer box borders
fn framed_line(text: &str, border_width: usize) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled("│ ", Style::default().fg(Color::Cyan)),
        Span::styled(
            pad_to_width(text, border_width.saturating_sub(4)),
            Style::default(),
        ),
        Span::styled(" │", Style::default().fg(Color::Cyan)),
    ]);
    Paragraph::new(Text::from(line))
}

/// Horizontal separator joining the outer box borders
fn separator_line(border_width: usize) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled("├", Style::default().fg(Color::Cyan)),
        Span::styled(
            "─".repeat(border_width.saturating_sub(2)),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("┤", Style::default().fg(Color::Cyan)),
    ]);
    Paragraph::new(Text::from(line))
}

/// Get lane icon shown on cards
pub fn status_icon(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "→",
        ProjectStatus::Finished => "✓",
    }
}

/// Get lane accent color
pub fn status_color(status: ProjectStatus) -> Color {
    match status {
        ProjectStatus::Active => Color::Yellow,
        ProjectStatus::Finished => Color::Green,
    }
}

/// Pad string to width (truncate with ellipsis if too long)
fn pad_to_width(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let truncated: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    } else {
        format!("{:<width$}", text, width = width)
    }
}

/// Format runtime duration
pub fn format_runtime(start_time: chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let duration = now.signed_duration_since(start_time);

    let total_seconds = duration.num_seconds();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_to_width_pads_short_text() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
    }

    #[test]
    fn test_pad_to_width_truncates_with_ellipsis() {
        assert_eq!(pad_to_width("abcdef", 4), "abc…");
    }

    #[test]
    fn test_pad_to_width_handles_multibyte_text() {
        // Truncation counts characters, not bytes
        assert_eq!(pad_to_width("héllo there", 6), "héllo…");
    }

    #[test]
    fn test_status_icons_differ_per_lane() {
        assert_ne!(
            status_icon(ProjectStatus::Active),
            status_icon(ProjectStatus::Finished)
        );
    }
}
