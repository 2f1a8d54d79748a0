//! Commands accepted by the typewriter

use super::Mode;

/// Everything that can change the typewriter's state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Append a printable symbol
    Type(char),
    /// Backspace, resolved by the current [`Mode`]
    Delete,
    /// Carriage return
    NewLine,
    /// Select a backspace mode
    SetMode(Mode),
}

/// What the view has to do after a command was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The paper must be rebuilt from the document
    Render,
    /// Nothing visible on the paper changed
    None,
}

impl Effect {
    /// Whether the paper must be rebuilt
    #[must_use]
    pub const fn needs_render(self) -> bool {
        matches!(self, Self::Render)
    }
}
