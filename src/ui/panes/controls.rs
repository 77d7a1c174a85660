//! Header rows: algorithm/size/speed controls and the search input fields

use crate::trace::Outcome;
use crate::tracer::Algorithm;
use crate::ui::app::EditField;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn label_style() -> Style {
    Style::default().fg(DEFAULT_THEME.muted)
}

fn value_style() -> Style {
    Style::default().fg(DEFAULT_THEME.fg)
}

fn algo_style() -> Style {
    Style::default()
        .fg(DEFAULT_THEME.primary)
        .add_modifier(Modifier::BOLD)
}

/// Render the sorting screen's header: algorithm, array size, speed.
pub fn render_sort_controls(
    frame: &mut Frame,
    area: Rect,
    algorithm: Algorithm,
    size: usize,
    interval_ms: u64,
) {
    let line = Line::from(vec![
        Span::styled("Algorithm: ", label_style()),
        Span::styled(algorithm.name(), algo_style()),
        Span::raw("    "),
        Span::styled("Array size: ", label_style()),
        Span::styled(size.to_string(), value_style()),
        Span::raw("    "),
        Span::styled("Speed: ", label_style()),
        Span::styled(format!("{} ms/step", interval_ms), value_style()),
    ]);

    let block = Block::default()
        .title(" Sorting Visualizer ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the searching screen's header: algorithm, speed, and the two
/// editable input fields. The field being edited gets a cursor mark and the
/// focused color.
pub fn render_search_controls(
    frame: &mut Frame,
    area: Rect,
    algorithm: Algorithm,
    values_text: &str,
    target_text: &str,
    editing: Option<EditField>,
    interval_ms: u64,
) {
    let field_line = |label: &str, text: &str, placeholder: &str, active: bool| {
        let mut spans = vec![Span::styled(format!("{:<8}", label), label_style())];
        if text.is_empty() && !active {
            spans.push(Span::styled(
                placeholder.to_string(),
                Style::default().fg(DEFAULT_THEME.muted),
            ));
        } else {
            let style = if active {
                Style::default().fg(DEFAULT_THEME.border_focused)
            } else {
                value_style()
            };
            spans.push(Span::styled(text.to_string(), style));
        }
        if active {
            spans.push(Span::styled(
                "▏",
                Style::default().fg(DEFAULT_THEME.border_focused),
            ));
        }
        Line::from(spans)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Algorithm: ", label_style()),
            Span::styled(algorithm.name(), algo_style()),
            Span::raw("    "),
            Span::styled("Speed: ", label_style()),
            Span::styled(format!("{} ms/step", interval_ms), value_style()),
        ]),
        field_line(
            "Array:",
            values_text,
            "e.g. 1,2,3,4,5 — blank for the demo array",
            editing == Some(EditField::Values),
        ),
        field_line(
            "Target:",
            target_text,
            "enter a target value",
            editing == Some(EditField::Target),
        ),
    ];

    let border = if editing.is_some() {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };
    let block = Block::default()
        .title(" Searching Visualizer ")
        .borders(Borders::ALL)
        .border_style(border);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the one-line search result between the header and the chart.
///
/// Empty until the run completes; then "found at index" in blue or
/// "was not found" in red, as the original phrased it.
pub fn render_result_line(
    frame: &mut Frame,
    area: Rect,
    result: Option<(Outcome, Option<i64>)>,
) {
    let line = match result {
        Some((Outcome::Found(index), Some(target))) => Line::from(Span::styled(
            format!("Target {} found at index {}", target, index),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Some((Outcome::NotFound, Some(target))) => Line::from(Span::styled(
            format!("Target {} was not found", target),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        )),
        _ => Line::raw(""),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
