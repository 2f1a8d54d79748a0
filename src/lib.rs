//! Typewriter - a terminal typewriter
//!
//! Keystrokes land on a sheet of paper. Backspace either strikes the last
//! character through (vintage mode) or removes it (minimal mode).

pub mod app;
pub mod config;
pub mod document;
pub mod paths;
pub mod tui;

pub use app::{Command, Effect, Mode, Typewriter};
pub use config::Config;
pub use document::{CharacterRecord, Document};
