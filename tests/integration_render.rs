//! Integration tests for TUI rendering
//!
//! Uses ratatui's `TestBackend` to verify rendering without a real terminal.

use pretty_assertions::assert_eq;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Modifier;
use typewriter::tui::{input, render};
use typewriter::{CharacterRecord, Effect, Mode, Typewriter};

fn press(app: &mut Typewriter, code: KeyCode) -> Effect {
    input::handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut Typewriter, text: &str) {
    for ch in text.chars() {
        let code = if ch == '\n' {
            KeyCode::Enter
        } else {
            KeyCode::Char(ch)
        };
        press(app, code);
    }
}

fn draw(app: &Typewriter) -> Result<Buffer, Box<dyn std::error::Error>> {
    let mut terminal = Terminal::new(TestBackend::new(40, 10))?;
    terminal.draw(|frame| render::render(frame, app))?;
    Ok(terminal.backend().buffer().clone())
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .filter_map(|x| buffer.cell((x, y)).map(ratatui::buffer::Cell::symbol))
        .collect()
}

fn record(ch: char, struck: bool) -> CharacterRecord {
    CharacterRecord { ch, struck }
}

// Paper text starts inside the border plus one column of padding
const TEXT_X: u16 = 2;
const TEXT_Y: u16 = 1;

#[test]
fn test_vintage_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = Typewriter::default();
    type_text(&mut app, "hi");
    press(&mut app, KeyCode::Backspace);

    assert_eq!(
        app.document.records(),
        &[record('h', false), record('i', true)]
    );

    let buffer = draw(&app)?;
    let h = buffer.cell((TEXT_X, TEXT_Y)).ok_or("missing cell")?;
    let i = buffer.cell((TEXT_X + 1, TEXT_Y)).ok_or("missing cell")?;
    assert_eq!(h.symbol(), "h");
    assert!(!h.modifier.contains(Modifier::CROSSED_OUT));
    assert_eq!(i.symbol(), "i");
    assert!(i.modifier.contains(Modifier::CROSSED_OUT));
    Ok(())
}

#[test]
fn test_minimal_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = Typewriter::default();
    press(&mut app, KeyCode::F(3));
    assert_eq!(app.mode, Mode::Minimal);

    type_text(&mut app, "hi");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.document.records(), &[record('h', false)]);

    let buffer = draw(&app)?;
    assert!(row_text(&buffer, TEXT_Y).starts_with("\u{2502} h "));
    Ok(())
}

#[test]
fn test_empty_backspace_in_both_modes() {
    for &mode in Mode::ALL {
        let mut app = Typewriter::default();
        app.mode = mode;
        assert_eq!(press(&mut app, KeyCode::Backspace), Effect::Render);
        assert!(app.document.is_empty());
    }
}

#[test]
fn test_shift_changes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    use ratatui::crossterm::event::ModifierKeyCode;

    let mut app = Typewriter::default();
    type_text(&mut app, "x");
    let before_doc = app.document.clone();
    let before = draw(&app)?;

    let effect = press(&mut app, KeyCode::Modifier(ModifierKeyCode::LeftShift));
    assert_eq!(effect, Effect::None);
    assert_eq!(app.document, before_doc);
    assert_eq!(draw(&app)?, before);
    Ok(())
}

#[test]
fn test_render_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = Typewriter::default();
    type_text(&mut app, "dear sir\nregards");
    press(&mut app, KeyCode::Backspace);

    assert_eq!(draw(&app)?, draw(&app)?);
    Ok(())
}

#[test]
fn test_newline_moves_to_next_row() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = Typewriter::default();
    type_text(&mut app, "ab\ncd");

    let buffer = draw(&app)?;
    assert!(row_text(&buffer, TEXT_Y).starts_with("\u{2502} ab "));
    assert!(row_text(&buffer, TEXT_Y + 1).starts_with("\u{2502} cd "));
    Ok(())
}

#[test]
fn test_paper_scrolls_to_cursor() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = Typewriter::default();
    // 40x10 terminal: 1 status row and 2 border rows leave 7 paper rows
    for line in 0..12 {
        type_text(&mut app, &format!("line {line}\n"));
    }
    type_text(&mut app, "last");

    let buffer = draw(&app)?;
    let bottom = TEXT_Y + 6;
    assert!(row_text(&buffer, bottom).starts_with("\u{2502} last "));
    assert!(row_text(&buffer, bottom - 1).starts_with("\u{2502} line 11 "));
    Ok(())
}

#[test]
fn test_status_bar_shows_mode_selector() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = Typewriter::default();
    let buffer = draw(&app)?;
    assert!(row_text(&buffer, 9).contains("(\u{2022}) vintage"));

    press(&mut app, KeyCode::Tab);
    let buffer = draw(&app)?;
    assert!(row_text(&buffer, 9).contains("(\u{2022}) minimal"));
    Ok(())
}

#[test]
fn test_help_overlay_renders() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = Typewriter::default();
    press(&mut app, KeyCode::F(1));
    assert!(app.show_help);

    let buffer = draw(&app)?;
    let screen: String = (0..buffer.area.height)
        .map(|y| row_text(&buffer, y))
        .collect();
    assert!(screen.contains("Keybindings"));
    Ok(())
}
