pub mod customer_menu;
pub mod owner_menu;
pub mod role_menu;

use crate::cli::core::CommandError;
use crate::cli::io::LineSource;
use crate::cli::output;

const MENU_PROMPT: &str = "Select an option: ";

#[derive(Debug, Clone)]
pub struct MenuEntry<A> {
    pub label: &'static str,
    pub action: A,
}

impl<A> MenuEntry<A> {
    pub const fn new(label: &'static str, action: A) -> Self {
        Self { label, action }
    }
}

/// Numbered menu; an entry is picked by its number or by its label.
#[derive(Debug, Clone)]
pub struct Menu<A> {
    pub title: &'static str,
    pub entries: Vec<MenuEntry<A>>,
}

impl<A: Copy> Menu<A> {
    pub fn new(title: &'static str, entries: Vec<MenuEntry<A>>) -> Self {
        Self { title, entries }
    }

    pub fn render(&self) -> String {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| format!("  {}) {}", idx + 1, entry.label))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn resolve(&self, input: &str) -> Option<A> {
        let input = input.trim();
        if let Ok(number) = input.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|idx| self.entries.get(idx))
                .map(|entry| entry.action);
        }
        self.entries
            .iter()
            .find(|entry| entry.label.eq_ignore_ascii_case(input))
            .map(|entry| entry.action)
    }

    /// Shows the menu until a valid entry is picked. End of input is returned as an error.
    pub fn choose(&self, source: &mut dyn LineSource) -> Result<A, CommandError> {
        loop {
            output::section(self.title);
            output::block(self.render());
            let line = source
                .read_line(MENU_PROMPT)?
                .ok_or(CommandError::EndOfInput)?;
            if line.trim().is_empty() {
                continue;
            }
            match self.resolve(&line) {
                Some(action) => return Ok(action),
                None => output::warning(format!(
                    "Unknown option `{}`. Enter a number from 1 to {}.",
                    line.trim(),
                    self.entries.len()
                )),
            }
        }
    }
}
