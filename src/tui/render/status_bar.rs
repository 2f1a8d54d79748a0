//! Status bar: mode selector, document counts and key hints

use crate::app::{Mode, Typewriter};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::colors;

fn mode_option(mode: Mode, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(
            format!("(\u{2022}) {}", mode.label()),
            Style::default()
                .fg(colors::SELECTED)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("( ) {}", mode.label()),
            Style::default().fg(colors::TEXT_DIM),
        )
    }
}

/// Build the status line for the current state
#[must_use]
pub fn status_line(app: &Typewriter) -> Line<'static> {
    let separator = || Span::styled("  \u{2502}  ", Style::default().fg(colors::TEXT_MUTED));

    let mut spans = vec![Span::styled(
        " Backspace: ",
        Style::default().fg(colors::TEXT_DIM),
    )];
    for (i, &mode) in Mode::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(mode_option(mode, mode == app.mode));
    }

    spans.push(separator());
    spans.push(Span::styled(
        format!(
            "{} typed, {} struck",
            app.document.len(),
            app.document.struck_count()
        ),
        Style::default().fg(colors::TEXT_PRIMARY),
    ));

    spans.push(separator());
    spans.push(Span::styled(
        app.config.keys.status_hints(),
        Style::default().fg(colors::TEXT_MUTED),
    ));

    Line::from(spans)
}

/// Render the status bar
pub fn render_status_bar(frame: &mut Frame<'_>, app: &Typewriter, area: Rect) {
    let paragraph = Paragraph::new(status_line(app)).style(Style::default().bg(colors::SURFACE));
    frame.render_widget(paragraph, area);
}
