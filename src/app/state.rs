//! Application state
//!
//! [`Typewriter`] owns everything the program knows: the typed document, the
//! live backspace mode and the bits of view state (cursor blink, help
//! overlay). Input handling and rendering both take it explicitly.

use super::{Command, Effect, Mode};
use crate::config::Config;
use crate::document::Document;
use tracing::{debug, info};

/// Main application state
#[derive(Debug, Clone)]
pub struct Typewriter {
    /// Application configuration
    pub config: Config,

    /// Everything typed so far
    pub document: Document,

    /// Backspace mode, read live on every backspace
    pub mode: Mode,

    /// Whether the blinking cursor is currently drawn
    pub cursor_visible: bool,

    /// Whether the key binding help overlay is shown
    pub show_help: bool,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl Typewriter {
    /// Create a typewriter with an empty sheet of paper
    #[must_use]
    pub const fn new(config: Config) -> Self {
        let mode = config.mode;
        Self {
            config,
            document: Document::new(),
            mode,
            cursor_visible: true,
            show_help: false,
            should_quit: false,
        }
    }

    /// Apply one command to the state
    ///
    /// This is the only place the document and mode change.
    pub fn apply(&mut self, command: Command) -> Effect {
        match command {
            Command::Type(ch) => {
                self.document.push(ch);
                self.cursor_visible = true;
                Effect::Render
            }
            Command::NewLine => {
                self.document.push('\n');
                self.cursor_visible = true;
                Effect::Render
            }
            Command::Delete => {
                self.backspace();
                self.cursor_visible = true;
                Effect::Render
            }
            Command::SetMode(mode) => {
                if mode != self.mode {
                    info!(from = %self.mode, to = %mode, "Backspace mode changed");
                }
                self.mode = mode;
                Effect::None
            }
        }
    }

    fn backspace(&mut self) {
        match self.mode {
            Mode::Vintage => match self.document.strike_last() {
                Some(index) => debug!(index, "Struck character"),
                None => debug!("Nothing left to strike"),
            },
            Mode::Minimal => match self.document.pop() {
                Some(record) => debug!(ch = ?record.ch, "Removed character"),
                None => debug!("Nothing left to remove"),
            },
        }
    }

    /// Flip the cursor blink phase
    pub const fn blink(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }

    /// Show or hide the help overlay
    pub const fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Ask the run loop to exit
    pub const fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Map `(state, command)` to the next state
#[must_use]
pub fn reduce(mut state: Typewriter, command: Command) -> Typewriter {
    state.apply(command);
    state
}
