//! Error and control types shared by the shell, menus and commands.

use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::errors::ShopError;

/// Failures that end the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ShopError),
    #[error("terminal error: {0}")]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Failures of a single command; reported and then the menu is shown again.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Shop(#[from] ShopError),
    #[error(transparent)]
    Terminal(#[from] CliError),
    #[error("end of input")]
    EndOfInput,
}

impl From<ReadlineError> for CommandError {
    fn from(err: ReadlineError) -> Self {
        match err {
            ReadlineError::Eof | ReadlineError::Interrupted => CommandError::EndOfInput,
            other => CommandError::Terminal(CliError::Readline(other)),
        }
    }
}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::Terminal(CliError::Io(err))
    }
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Back,
    Exit,
}
