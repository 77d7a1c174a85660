//! Bar-chart pane: the array as vertical bars with per-step highlights

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Stop drawing value labels above this many bars; they would overlap.
const LABEL_LIMIT: usize = 20;

/// Render the array as a bar chart.
///
/// `highlighted` bars get `highlight` (orange probe on the searching screen,
/// red pair on the sorting screen); the `match_index` bar always wins with
/// the match green. Negative values are shifted up for display so every bar
/// has positive height; the label still shows the real value.
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    values: &[i64],
    highlighted: &FxHashSet<usize>,
    match_index: Option<usize>,
    highlight: Color,
) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if values.is_empty() {
        let paragraph = Paragraph::new("(no array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.muted));
        frame.render_widget(paragraph, area);
        return;
    }

    let offset = match values.iter().min() {
        Some(&min) if min <= 0 => 1 - min,
        _ => 0,
    };
    let show_labels = values.len() <= LABEL_LIMIT;

    // Adaptive bar width so the whole array fits the pane.
    let inner_width = area.width.saturating_sub(2);
    let per_bar = (inner_width / values.len() as u16).max(1);
    let bar_width = per_bar.saturating_sub(1).clamp(1, 6);

    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = if match_index == Some(i) {
                DEFAULT_THEME.bar_match
            } else if highlighted.contains(&i) {
                highlight
            } else {
                DEFAULT_THEME.bar
            };
            let label = if show_labels {
                value.to_string()
            } else {
                String::new()
            };
            Bar::default()
                .value((value + offset) as u64)
                .text_value(label)
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}
