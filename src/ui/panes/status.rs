//! Status bar rendering with keybindings and the playback state chip

use crate::player::PlayerState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `progress` is `(frames consumed, trace length)` while a session exists;
/// `hints` is the active screen's `(key, description)` list.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    progress: Option<(usize, usize)>,
    state: Option<PlayerState>,
    hints: &[(&str, &str)],
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    // Left side: step progress and status message
    let mut left_spans = Vec::new();
    if let Some((current, total)) = progress {
        left_spans.push(Span::styled(
            format!(" Step {}/{} ", current, total),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
        left_spans.push(Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.muted),
        ));
    }
    left_spans.push(Span::styled(
        format!(" {} ", message),
        Style::default()
            .bg(DEFAULT_THEME.status_bg)
            .fg(DEFAULT_THEME.fg),
    ));

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.muted).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.muted);

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    let chip = match state {
        Some(PlayerState::Running) => Some((" ▶ PLAYING ", DEFAULT_THEME.secondary)),
        Some(PlayerState::Paused) => Some((" ⏸ PAUSED ", DEFAULT_THEME.border_focused)),
        Some(PlayerState::Completed) => Some((" DONE ", DEFAULT_THEME.success)),
        Some(PlayerState::Idle) | None => None,
    };
    if let Some((text, color)) = chip {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
