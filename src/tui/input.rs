//! Keyboard input
//!
//! Every key press is first checked against the key bindings (mode
//! selection, help, quit). Anything left over is named the way a browser
//! names keys and classified: `Backspace`, `Enter` and single-symbol keys
//! become commands, every other key is dropped without touching the state.

use crate::app::{Command, Effect, Mode, Typewriter};
use crate::config::Action;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};
use std::borrow::Cow;
use tracing::debug;

/// Name a key the way the browser's `KeyboardEvent.key` does
///
/// Printable keys are named by the symbol they produce; everything else gets
/// a multi-letter name (`Shift`, `ArrowLeft`, `F5`, ...).
#[must_use]
pub fn key_identifier(code: KeyCode) -> Cow<'static, str> {
    let name = match code {
        KeyCode::Char(c) => return Cow::Owned(c.to_string()),
        KeyCode::F(n) => return Cow::Owned(format!("F{n}")),
        KeyCode::Backspace => "Backspace",
        KeyCode::Enter => "Enter",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Tab | KeyCode::BackTab => "Tab",
        KeyCode::Delete => "Delete",
        KeyCode::Insert => "Insert",
        KeyCode::Esc => "Escape",
        KeyCode::CapsLock => "CapsLock",
        KeyCode::ScrollLock => "ScrollLock",
        KeyCode::NumLock => "NumLock",
        KeyCode::PrintScreen => "PrintScreen",
        KeyCode::Pause => "Pause",
        KeyCode::Menu => "ContextMenu",
        KeyCode::KeypadBegin => "Clear",
        KeyCode::Media(_) => "MediaKey",
        KeyCode::Modifier(modifier) => modifier_name(modifier),
        KeyCode::Null => "Unidentified",
    };
    Cow::Borrowed(name)
}

const fn modifier_name(modifier: ModifierKeyCode) -> &'static str {
    match modifier {
        ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => "Shift",
        ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => "Control",
        ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => "Alt",
        ModifierKeyCode::LeftSuper
        | ModifierKeyCode::RightSuper
        | ModifierKeyCode::LeftMeta
        | ModifierKeyCode::RightMeta => "Meta",
        ModifierKeyCode::LeftHyper | ModifierKeyCode::RightHyper => "Hyper",
        ModifierKeyCode::IsoLevel3Shift => "AltGraph",
        ModifierKeyCode::IsoLevel5Shift => "Level5Shift",
    }
}

/// Classify a key identifier into a typewriter command
///
/// `Backspace` and `Enter` are recognised by name; an identifier exactly one
/// symbol long types that symbol. Anything else yields `None`.
#[must_use]
pub fn classify(identifier: &str) -> Option<Command> {
    match identifier {
        "Backspace" => Some(Command::Delete),
        "Enter" => Some(Command::NewLine),
        _ => {
            let mut chars = identifier.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(Command::Type(ch)),
                _ => None,
            }
        }
    }
}

/// Whether the modifiers turn a character key into a shortcut
///
/// Ctrl or Alt alone makes a shortcut. Both together is how Windows reports
/// AltGr, which types the layout's third-level symbol (`@`, `{`, `€`).
const fn is_shortcut_chord(modifiers: KeyModifiers) -> bool {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);
    ctrl != alt
}

/// Translate a terminal key event into a typewriter command
///
/// Chords with Ctrl or Alt do not type: the terminal reports them as plain
/// characters, but they are shortcuts, not text. AltGr characters still type.
#[must_use]
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if matches!(key.code, KeyCode::Char(_)) && is_shortcut_chord(key.modifiers) {
        return None;
    }
    classify(&key_identifier(key.code))
}

fn handle_action(app: &mut Typewriter, action: Action) -> Effect {
    debug!(?action, "Key binding triggered");
    match action {
        Action::ToggleMode => app.apply(Command::SetMode(app.mode.toggled())),
        Action::SelectVintage => app.apply(Command::SetMode(Mode::Vintage)),
        Action::SelectMinimal => app.apply(Command::SetMode(Mode::Minimal)),
        Action::Help => {
            app.toggle_help();
            Effect::None
        }
        Action::Quit => {
            app.quit();
            Effect::None
        }
    }
}

/// Handle one key event against the application state
pub fn handle_key_event(app: &mut Typewriter, key: KeyEvent) -> Effect {
    if key.kind == KeyEventKind::Release {
        return Effect::None;
    }

    // Any key dismisses the help overlay without reaching the paper
    if app.show_help {
        app.toggle_help();
        return Effect::None;
    }

    if let Some(action) = app.config.keys.get_action(key.code, key.modifiers) {
        return handle_action(app, action);
    }

    match command_for_key(key) {
        Some(command) => app.apply(command),
        None => {
            debug!(key = %key_identifier(key.code), "Ignored key");
            Effect::None
        }
    }
}
