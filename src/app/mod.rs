//! Application state and logic

mod command;
mod event;
mod mode;
mod state;

pub use command::{Command, Effect};
pub use event::{Event, Handler};
pub use mode::{Mode, ParseModeError};
pub use state::{Typewriter, reduce};
