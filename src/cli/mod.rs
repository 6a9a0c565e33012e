pub mod commands;
pub mod core;
pub mod io;
pub mod menus;
pub mod output;
mod shell;
pub mod shell_context;

pub use shell::{run_cli, run_shell, SCRIPT_ENV_VAR};
