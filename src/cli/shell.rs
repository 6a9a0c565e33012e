use tracing::{debug, info};

use crate::cli::commands::{customer, owner};
use crate::cli::core::{CliError, CommandError, CommandResult, LoopControl};
use crate::cli::io::{InteractiveSource, LineSource, ScriptSource};
use crate::cli::menus::{
    customer_menu::{self, CustomerAction},
    owner_menu::{self, OwnerAction},
    role_menu::{self, Role},
};
use crate::cli::output;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::utils::build_info;

pub const SCRIPT_ENV_VAR: &str = "MEAT_COUNTER_CLI_SCRIPT";

type Handler = fn(&mut ShellContext, &mut dyn LineSource) -> CommandResult;

/// Entry point used by the binary: picks the input mode and runs until exit.
pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV_VAR).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };
    if mode == CliMode::Script {
        output::set_color_enabled(false);
    }

    output::info(format!(
        "Meat Counter {}",
        build_info::current().summary()
    ));
    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Interactive => {
            let mut source = InteractiveSource::new()?;
            run_shell(&mut context, &mut source)
        }
        CliMode::Script => run_shell(&mut context, &mut ScriptSource::stdin()),
    }
}

/// Role selection loop. Returns once the user exits or input runs out.
pub fn run_shell(context: &mut ShellContext, source: &mut dyn LineSource) -> Result<(), CliError> {
    let roles = role_menu::menu();
    loop {
        let role = match roles.choose(source) {
            Ok(role) => role,
            Err(err) => return finish(err),
        };
        debug!(?role, "role selected");
        let control = match role {
            Role::Owner => owner_loop(context, source),
            Role::Customer => customer_loop(context, source),
            Role::Exit => Ok(LoopControl::Exit),
        };
        match control {
            Ok(LoopControl::Exit) => {
                output::info("Goodbye.");
                info!("shell exited");
                return Ok(());
            }
            Ok(_) => {}
            Err(err) => return finish(err),
        }
    }
}

fn owner_loop(
    context: &mut ShellContext,
    source: &mut dyn LineSource,
) -> Result<LoopControl, CommandError> {
    let menu = owner_menu::menu();
    loop {
        let handler: Handler = match menu.choose(source)? {
            OwnerAction::AddItem => owner::add_item,
            OwnerAction::ListItems => owner::list_items,
            OwnerAction::UpdateItem => owner::update_item,
            OwnerAction::DeleteItem => owner::delete_item,
            OwnerAction::SalesReport => owner::sales_report,
            OwnerAction::Back => return Ok(LoopControl::Back),
            OwnerAction::Exit => return Ok(LoopControl::Exit),
        };
        dispatch(context, source, handler)?;
    }
}

fn customer_loop(
    context: &mut ShellContext,
    source: &mut dyn LineSource,
) -> Result<LoopControl, CommandError> {
    let menu = customer_menu::menu();
    loop {
        let handler: Handler = match menu.choose(source)? {
            CustomerAction::Browse => customer::browse,
            CustomerAction::Purchase => customer::purchase,
            CustomerAction::Back => return Ok(LoopControl::Back),
            CustomerAction::Exit => return Ok(LoopControl::Exit),
        };
        dispatch(context, source, handler)?;
    }
}

/// Runs one command, reporting domain failures without leaving the menu.
fn dispatch(
    context: &mut ShellContext,
    source: &mut dyn LineSource,
    handler: Handler,
) -> Result<LoopControl, CommandError> {
    let outcome = handler(context, source);
    context.report_save_failure();
    match outcome {
        Ok(()) => Ok(LoopControl::Continue),
        Err(err @ CommandError::Shop(_)) => {
            context.report_error(&err);
            Ok(LoopControl::Continue)
        }
        Err(err) => Err(err),
    }
}

fn finish(err: CommandError) -> Result<(), CliError> {
    match err {
        CommandError::EndOfInput => {
            output::info("Exiting shell.");
            Ok(())
        }
        CommandError::Terminal(err) => Err(err),
        CommandError::Shop(err) => Err(err.into()),
    }
}
