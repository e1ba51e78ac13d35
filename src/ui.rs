mod errors;
mod printer;
mod prompt;

pub use errors::UIError;
pub use printer::{Printer, warn};
pub use prompt::Prompt;

use crossterm::terminal::ClearType;

/// Defines the different clear options for UI prompts
#[derive(Debug, Clone, Copy)]
pub enum PromptClearMode {
    /// All cells.
    All,
    /// All cells from the cursor position downwards.
    FromCursorDown,
}

impl From<PromptClearMode> for ClearType {
    fn from(mode: PromptClearMode) -> Self {
        match mode {
            PromptClearMode::All => ClearType::All,
            PromptClearMode::FromCursorDown => ClearType::FromCursorDown,
        }
    }
}
