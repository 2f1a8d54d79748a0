//! Paper rendering
//!
//! The paper is a pure projection of the document: one unit per typed
//! character followed by a single cursor unit. It is rebuilt from scratch on
//! every draw, so the same document and blink phase always produce the same
//! lines.

use crate::app::Typewriter;
use crate::document::Document;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::colors;

/// One visual unit on the paper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// A typed character
    Glyph {
        /// The character as typed
        ch: char,
        /// Drawn crossed out when set
        struck: bool,
    },
    /// The trailing position marker; it carries no text
    Cursor,
}

/// Project the document into visual units, cursor last
#[must_use]
pub fn units(document: &Document) -> Vec<Unit> {
    document
        .iter()
        .map(|record| Unit::Glyph {
            ch: record.ch,
            struck: record.struck,
        })
        .chain(std::iter::once(Unit::Cursor))
        .collect()
}

fn unit_width(unit: Unit) -> usize {
    match unit {
        Unit::Glyph { ch, .. } => {
            let mut buf = [0_u8; 4];
            Span::raw(&*ch.encode_utf8(&mut buf)).width()
        }
        Unit::Cursor => 1,
    }
}

/// Break units into lines
///
/// Newline glyphs end the current line and are not drawn themselves. A line
/// that would run past `width` cells continues on the next one, the way the
/// carriage returns at the end of the platen.
#[must_use]
pub fn layout(units: &[Unit], width: usize) -> Vec<Vec<Unit>> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = Vec::new();
    let mut used = 0;

    for &unit in units {
        if let Unit::Glyph { ch: '\n', .. } = unit {
            lines.push(std::mem::take(&mut current));
            used = 0;
            continue;
        }

        let unit_width = unit_width(unit);
        if used > 0 && used + unit_width > width {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(unit);
        used += unit_width;
    }

    lines.push(current);
    lines
}

fn unit_span(unit: Unit, cursor_visible: bool) -> Span<'static> {
    match unit {
        Unit::Glyph { ch, struck: false } => {
            Span::styled(ch.to_string(), Style::default().fg(colors::INK))
        }
        Unit::Glyph { ch, struck: true } => Span::styled(
            ch.to_string(),
            Style::default()
                .fg(colors::INK_STRUCK)
                .add_modifier(Modifier::CROSSED_OUT),
        ),
        Unit::Cursor if cursor_visible => Span::styled(" ", Style::default().bg(colors::CURSOR)),
        Unit::Cursor => Span::raw(" "),
    }
}

/// Build the paper's lines for a text area `width` cells wide
#[must_use]
pub fn paper_lines(document: &Document, width: usize, cursor_visible: bool) -> Vec<Line<'static>> {
    layout(&units(document), width)
        .into_iter()
        .map(|line| {
            Line::from(
                line.into_iter()
                    .map(|unit| unit_span(unit, cursor_visible))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

/// Render the paper, scrolled so the cursor line is always visible
pub fn render_paper(frame: &mut Frame<'_>, app: &Typewriter, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " Typewriter ",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);

    let lines = paper_lines(
        &app.document,
        usize::from(inner.width),
        app.cursor_visible,
    );
    let skip = lines.len().saturating_sub(usize::from(inner.height));
    let visible: Vec<Line<'static>> = lines.into_iter().skip(skip).collect();

    let paragraph = Paragraph::new(visible)
        .style(Style::default().fg(colors::INK).bg(colors::PAPER_BG))
        .block(block);
    frame.render_widget(paragraph, area);
}
