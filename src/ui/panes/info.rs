//! Algorithm info, live run metrics, and post-run summaries

use crate::trace::Outcome;
use crate::tracer::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

fn label_style() -> Style {
    Style::default().fg(DEFAULT_THEME.muted)
}

fn complexity_lines(algorithm: Algorithm) -> Vec<Line<'static>> {
    let c = algorithm.complexity();
    vec![
        Line::from(vec![
            Span::styled("Best:    ", label_style()),
            Span::raw(c.best),
        ]),
        Line::from(vec![
            Span::styled("Average: ", label_style()),
            Span::raw(c.average),
        ]),
        Line::from(vec![
            Span::styled("Worst:   ", label_style()),
            Span::raw(c.worst),
        ]),
    ]
}

/// Render the info pane: what the selected algorithm does and its
/// complexity cases.
pub fn render_info_pane(frame: &mut Frame, area: Rect, algorithm: Algorithm) {
    let mut lines = vec![
        Line::from(Span::styled(
            algorithm.name(),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(algorithm.description()),
        Line::raw(""),
    ];
    lines.extend(complexity_lines(algorithm));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        algorithm.complexity().note,
        label_style(),
    )));

    let block = Block::default()
        .title(" Algorithm ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

/// Render the run pane: live counters and elapsed time, plus a completion
/// note once the sort finishes.
pub fn render_run_pane(
    frame: &mut Frame,
    area: Rect,
    comparisons: usize,
    mutations: usize,
    elapsed: Duration,
    completed: bool,
) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Comparisons:        ", label_style()),
            Span::raw(comparisons.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Swaps/assignments:  ", label_style()),
            Span::raw(mutations.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Elapsed:            ", label_style()),
            Span::raw(format!("{:.2}s", elapsed.as_secs_f64())),
        ]),
    ];
    if completed {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Sorting complete — the array is in order",
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let block = Block::default()
        .title(" Run ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the searching screen's explanation pane: description, complexity
/// cases, and — once the run completes — the outcome sentence.
pub fn render_explain_pane(
    frame: &mut Frame,
    area: Rect,
    algorithm: Algorithm,
    result: Option<(Outcome, Option<i64>)>,
) {
    let mut lines = vec![Line::raw(algorithm.description()), Line::raw("")];
    lines.extend(complexity_lines(algorithm));

    if let Some((outcome, Some(target))) = result {
        lines.push(Line::raw(""));
        let sentence = match outcome {
            Outcome::Found(index) if algorithm == Algorithm::BinarySearch => Span::styled(
                format!(
                    "The algorithm found the target {} at index {} (in the sorted array).",
                    target, index
                ),
                Style::default().fg(DEFAULT_THEME.success),
            ),
            Outcome::Found(index) => Span::styled(
                format!("The algorithm found the target {} at index {}.", target, index),
                Style::default().fg(DEFAULT_THEME.success),
            ),
            Outcome::NotFound => Span::styled(
                format!("The target {} was not found in the list.", target),
                Style::default().fg(DEFAULT_THEME.error),
            ),
        };
        lines.push(Line::from(sentence));
    }

    let block = Block::default()
        .title(" Explanation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
