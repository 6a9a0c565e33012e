use tracing::debug;

use crate::cli::core::CommandResult;
use crate::cli::io::{self, LineSource};
use crate::cli::output;
use crate::cli::shell_context::ShellContext;
use crate::core::SalesReport;
use crate::currency::CurrencyFormat;
use crate::domain::Item;

use super::inventory_table;

pub fn add_item(context: &mut ShellContext, source: &mut dyn LineSource) -> CommandResult {
    let name = io::prompt_name(source, "Item name")?;
    let unit_price = io::prompt_price(source, "Price per kg")?;
    let quantity = io::prompt_kilos(source, "Kilos in stock")?;
    let expiration_date = io::prompt_date(source, "Expiration date")?;

    let item = Item::new(name, unit_price, quantity, expiration_date)?;
    let description = item.describe(&context.currency());
    context.inventory.create(item)?;
    output::success(format!("Added {}", description));
    Ok(())
}

pub fn list_items(context: &mut ShellContext, _source: &mut dyn LineSource) -> CommandResult {
    if context.inventory.is_empty() {
        output::info("Inventory is empty.");
        return Ok(());
    }
    output::block(inventory_table(
        context.inventory.list(),
        &context.currency(),
        context.clock.today(),
    ));
    Ok(())
}

pub fn update_item(context: &mut ShellContext, source: &mut dyn LineSource) -> CommandResult {
    let name = io::prompt_name(source, "Item to update")?;
    let quantity = io::prompt_kilos(source, "New kilos in stock")?;
    let unit_price = io::prompt_price(source, "New price per kg")?;
    let expiration_date = io::prompt_date(source, "New expiration date")?;

    context
        .inventory
        .update(&name, quantity, unit_price, expiration_date)?;
    output::success(format!("Updated {}", name));
    Ok(())
}

pub fn delete_item(context: &mut ShellContext, source: &mut dyn LineSource) -> CommandResult {
    let name = io::prompt_name(source, "Item to delete")?;
    let removed = context.inventory.delete(&name)?;
    output::success(format!("Deleted {}", removed.name));
    Ok(())
}

pub fn sales_report(context: &mut ShellContext, _source: &mut dyn LineSource) -> CommandResult {
    let report = context.ledger.report();
    debug!(sales = context.ledger.sale_count(), "rendering sales report");
    if report.is_empty() {
        output::info("No sales recorded yet.");
        return Ok(());
    }
    output::block(render_sales_report(&report, &context.currency()));
    output::info(format!(
        "{} sale(s), {} in total",
        context.ledger.sale_count(),
        context.currency().format(context.ledger.total())
    ));
    Ok(())
}

pub fn render_sales_report(report: &SalesReport, currency: &CurrencyFormat) -> String {
    let section = |title: &str, rows: Vec<(String, String)>| {
        let mut lines = vec![format!("{title}:")];
        lines.extend(rows.into_iter().map(|(key, amount)| format!("  {key:<10} {amount:>14}")));
        lines.join("\n")
    };
    [
        section(
            "Daily sales",
            report
                .daily
                .iter()
                .map(|(day, amount)| (day.format("%Y-%m-%d").to_string(), currency.format(*amount)))
                .collect(),
        ),
        section(
            "Weekly sales",
            report
                .weekly
                .iter()
                .map(|(week, amount)| (week.to_string(), currency.format(*amount)))
                .collect(),
        ),
        section(
            "Monthly sales",
            report
                .monthly
                .iter()
                .map(|(month, amount)| (month.to_string(), currency.format(*amount)))
                .collect(),
        ),
    ]
    .join("\n")
}
