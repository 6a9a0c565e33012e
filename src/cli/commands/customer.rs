use crate::cli::core::CommandResult;
use crate::cli::io::{self, LineSource};
use crate::cli::output;
use crate::cli::shell_context::ShellContext;
use crate::domain::format_receipt;

use super::inventory_table;

pub fn browse(context: &mut ShellContext, _source: &mut dyn LineSource) -> CommandResult {
    if context.inventory.is_empty() {
        output::info("Nothing for sale right now.");
        return Ok(());
    }
    output::block(inventory_table(
        context.inventory.list(),
        &context.currency(),
        context.clock.today(),
    ));
    Ok(())
}

pub fn purchase(context: &mut ShellContext, source: &mut dyn LineSource) -> CommandResult {
    let name = io::prompt_name(source, "Item to buy")?;
    let quantity = io::prompt_kilos(source, "Kilos")?;

    let receipt = context.checkout().purchase(&name, quantity)?;
    output::success(format!("Purchased {} kg of {}", receipt.quantity, receipt.item_name));
    output::block(format_receipt(&receipt, &context.receipt_layout()));
    Ok(())
}
