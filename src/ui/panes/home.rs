//! Home screen: title banner and visualizer menu

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Menu entries in selection order.
pub const MENU: [&str; 3] = ["Sorting Visualizer", "Searching Visualizer", "Quit"];

/// Render the home screen with `selected` as the highlighted menu entry.
pub fn render_home(frame: &mut Frame, area: Rect, selected: usize) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(4),
            Constraint::Length(MENU.len() as u16 * 2),
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "algotty",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Explore and visualize classic algorithms, one step at a time",
            Style::default().fg(DEFAULT_THEME.muted),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[1]);

    let mut lines = Vec::with_capacity(MENU.len() * 2);
    for (i, entry) in MENU.iter().enumerate() {
        let line = if i == selected {
            Line::from(Span::styled(
                format!("▶ {} ◀", entry),
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                entry.to_string(),
                Style::default().fg(DEFAULT_THEME.fg),
            ))
        };
        lines.push(line);
        lines.push(Line::raw(""));
    }

    let menu = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(menu, rows[2]);
}
