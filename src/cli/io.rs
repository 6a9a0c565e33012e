use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use chrono::NaiveDate;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use rustyline::{history::DefaultHistory, Editor};

use crate::cli::core::{CliError, CommandError};
use crate::errors::ShopError;

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Where the shell reads its next line from.
pub trait LineSource {
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CommandError>;
}

/// Line editor with history, used when a person is at the keyboard.
pub struct InteractiveSource {
    editor: Editor<(), DefaultHistory>,
}

impl InteractiveSource {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: Editor::new()?,
        })
    }
}

impl LineSource for InteractiveSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CommandError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.trim()).ok();
                }
                Ok(Some(line))
            }
            Err(err) => match CommandError::from(err) {
                CommandError::EndOfInput => Ok(None),
                other => Err(other),
            },
        }
    }
}

/// Reads piped input line by line and echoes it after the prompt.
pub struct ScriptSource<R> {
    reader: R,
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ScriptSource<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CommandError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{prompt}{line}")?;
        Ok(Some(line))
    }
}

/// Reads one trimmed line; end of input aborts the current command.
pub fn prompt_text(source: &mut dyn LineSource, prompt: &str) -> Result<String, CommandError> {
    source
        .read_line(&format!("{prompt}: "))?
        .map(|line| line.trim().to_string())
        .ok_or(CommandError::EndOfInput)
}

pub fn prompt_name(source: &mut dyn LineSource, prompt: &str) -> Result<String, CommandError> {
    let name = prompt_text(source, prompt)?;
    if name.is_empty() {
        return Err(ShopError::Validation("item name cannot be empty".into()).into());
    }
    Ok(name)
}

pub fn prompt_kilos(source: &mut dyn LineSource, prompt: &str) -> Result<u32, CommandError> {
    let raw = prompt_text(source, prompt)?;
    Ok(parse_kilos(&raw)?)
}

pub fn prompt_price(source: &mut dyn LineSource, prompt: &str) -> Result<Decimal, CommandError> {
    let raw = prompt_text(source, prompt)?;
    Ok(parse_price(&raw)?)
}

pub fn prompt_date(source: &mut dyn LineSource, prompt: &str) -> Result<NaiveDate, CommandError> {
    let raw = prompt_text(source, &format!("{prompt} (YYYY-MM-DD)"))?;
    Ok(parse_date(&raw)?)
}

/// Whole kilos only; fractional amounts are rejected rather than truncated.
pub fn parse_kilos(raw: &str) -> Result<u32, ShopError> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<u32>() {
        return Ok(value);
    }
    match Decimal::from_str(raw) {
        Ok(value) if value.is_sign_negative() => Err(ShopError::Validation(format!(
            "quantity cannot be negative (got {raw})"
        ))),
        Ok(value) if !value.fract().is_zero() => Err(ShopError::Validation(format!(
            "quantity must be a whole number of kilos (got {raw})"
        ))),
        Ok(value) => value
            .to_u32()
            .ok_or_else(|| ShopError::Validation(format!("quantity `{raw}` is too large"))),
        Err(_) => Err(ShopError::Validation(format!(
            "`{raw}` is not a valid quantity"
        ))),
    }
}

pub fn parse_price(raw: &str) -> Result<Decimal, ShopError> {
    let raw = raw.trim().trim_start_matches('$');
    let price = Decimal::from_str(raw)
        .map_err(|_| ShopError::Validation(format!("`{raw}` is not a valid price")))?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ShopError::Validation(format!(
            "unit price cannot be negative (got {raw})"
        )));
    }
    Ok(price)
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, ShopError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT).map_err(|_| {
        ShopError::Validation(format!("`{}` is not a date in YYYY-MM-DD form", raw.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilos_accept_whole_numbers_only() {
        assert_eq!(parse_kilos("3").unwrap(), 3);
        assert_eq!(parse_kilos(" 4.00 ").unwrap(), 4);
        assert!(parse_kilos("2.5").unwrap_err().to_string().contains("whole number"));
        assert!(parse_kilos("-1").unwrap_err().to_string().contains("negative"));
        assert!(parse_kilos("lots").is_err());
    }

    #[test]
    fn prices_allow_symbol_prefix() {
        assert_eq!(parse_price("$205.00").unwrap(), Decimal::new(205, 0));
        assert_eq!(parse_price("0").unwrap(), Decimal::ZERO);
        assert!(parse_price("-3").is_err());
        assert!(parse_price("cheap").is_err());
    }

    #[test]
    fn dates_require_iso_form() {
        assert_eq!(
            parse_date("2025-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
        assert!(parse_date("01/01/2025").is_err());
    }

    #[test]
    fn script_source_strips_line_endings_and_reports_eof() {
        let mut source = ScriptSource::new("Chicken\r\n3\n".as_bytes());
        assert_eq!(prompt_text(&mut source, "Item").unwrap(), "Chicken");
        assert_eq!(prompt_kilos(&mut source, "Kilos").unwrap(), 3);
        assert!(matches!(
            prompt_text(&mut source, "Item"),
            Err(CommandError::EndOfInput)
        ));
    }
}
