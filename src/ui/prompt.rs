use super::{PromptClearMode, UIError};
use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue, terminal,
};
use std::io::{Write, stdout};

struct TerminalGuard;

impl TerminalGuard {
    fn enable() -> Result<Self, UIError> {
        terminal::enable_raw_mode().map_err(|err| UIError::TerminalError(format!("failed to enable raw mode: {}", err)))?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

pub struct Prompt {
    /// Provide a ANSI escape code to set the text color of the selected item.
    select_color: String,
    /// Provide a ANSI escape code to set the text color of the unselected item.
    unselect_color: String,
    /// UTF-8 character to use as a marker for the selected item.
    marker: char,
    help_msg: bool,
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            select_color: String::from("\x1B[1;32m"),
            unselect_color: String::from("\x1B[0m"),
            marker: '▶',
            help_msg: true,
        }
    }
}

impl Prompt {
    /// Let the user pick one of `options`.
    ///
    /// Returns the index into `options`, or `None` when the prompt was dismissed with ESC or Ctrl-C.
    pub fn selectable_prompt(&self, question: &str, options: &[&str], search_enabled: bool) -> Result<Option<usize>, UIError> {
        if options.is_empty() {
            return Err(UIError::NoOptions);
        }

        let _guard = TerminalGuard::enable()?;
        let mut stdout = stdout();

        let mut filtered = fuzzy_search(options, "");
        let mut selected = 0;
        let mut input = String::new();

        let choice = loop {
            queue!(stdout, cursor::MoveTo(0, 0), terminal::Clear(PromptClearMode::All.into()))?;
            if self.help_msg {
                write!(stdout, "{} Use ↑ ↓ to navigate  |  Enter to select  |  ESC to quit", question)?;
            } else {
                write!(stdout, "{}", question)?;
            }

            if search_enabled {
                write!(stdout, "\r\nSearch: {}\r\n", input)?;
            } else {
                write!(stdout, "\r\n")?;
            }

            for (i, &index) in filtered.iter().enumerate() {
                let marker = if i == selected { self.marker } else { ' ' };
                let color = if i == selected { &self.select_color } else { &self.unselect_color };
                write!(stdout, "\r\n{} {} {} \x1B[0m", color, marker, options[index])?;
            }

            stdout.flush()?;

            let event = event::read().map_err(|err| UIError::TerminalError(format!("failed to read key: {}", err)))?;
            let event::Event::Key(KeyEvent { code, modifiers, kind, .. }) = event else {
                continue;
            };
            if kind != KeyEventKind::Press {
                continue;
            }

            match code {
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => break None,
                KeyCode::Up if selected > 0 => selected -= 1,
                KeyCode::Down if selected < filtered.len().saturating_sub(1) => selected += 1,
                KeyCode::Enter => {
                    if let Some(&index) = filtered.get(selected) {
                        break Some(index);
                    }
                }
                KeyCode::Char(c) if search_enabled => {
                    input.push(c);
                    filtered = fuzzy_search(options, &input);
                    selected = 0;
                }
                KeyCode::Backspace if search_enabled => {
                    input.pop();
                    filtered = fuzzy_search(options, &input);
                    selected = 0;
                }
                KeyCode::Esc => break None,
                _ => {}
            }
        };

        queue!(stdout, cursor::MoveTo(0, 0), terminal::Clear(PromptClearMode::FromCursorDown.into()))?;
        stdout.flush()?;
        Ok(choice)
    }
}

/// Performs a case-insensitive substring search, returning indices of matching options.
fn fuzzy_search(options: &[&str], query: &str) -> Vec<usize> {
    let query = query.to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| option.to_lowercase().contains(&query))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
#[path = "../test/ui/prompt.rs"]
mod tests;
