//! TUI rendering
//!
//! - `colors`: Color palette definitions
//! - `paper`: the typed document, cursor included
//! - `status_bar`: mode selector and hints
//! - `help`: key binding overlay

pub mod colors;
pub mod help;
pub mod paper;
pub mod status_bar;

use crate::app::Typewriter;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &Typewriter) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    paper::render_paper(frame, app, chunks[0]);
    status_bar::render_status_bar(frame, app, chunks[1]);

    if app.show_help {
        help::render_help_overlay(frame, app);
    }
}
