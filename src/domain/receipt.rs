use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::currency::CurrencyFormat;

pub const DEFAULT_RECEIPT_WIDTH: usize = 34;
pub const MIN_RECEIPT_WIDTH: usize = 24;
pub const MAX_RECEIPT_WIDTH: usize = 120;
const RECEIPT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Immutable summary of one completed purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub item_name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub timestamp: NaiveDateTime,
}

/// Presentation knobs for [`format_receipt`].
#[derive(Debug, Clone)]
pub struct ReceiptLayout {
    pub title: String,
    pub width: usize,
    pub currency: CurrencyFormat,
}

impl Default for ReceiptLayout {
    fn default() -> Self {
        Self {
            title: "Meat Counter".into(),
            width: DEFAULT_RECEIPT_WIDTH,
            currency: CurrencyFormat::default(),
        }
    }
}

/// Renders a receipt as a fixed-width text block.
pub fn format_receipt(receipt: &Receipt, layout: &ReceiptLayout) -> String {
    let width = layout.width.clamp(MIN_RECEIPT_WIDTH, MAX_RECEIPT_WIDTH);
    let heavy = "=".repeat(width);
    let light = "-".repeat(width);
    let currency = &layout.currency;

    let lines = [
        heavy.clone(),
        format!("{:^width$}", layout.title.trim()),
        format!("{:^width$}", "RECEIPT"),
        heavy.clone(),
        row("Date:", &receipt.timestamp.format(RECEIPT_TIMESTAMP_FORMAT).to_string(), width),
        row("Item:", &receipt.item_name, width),
        row("Quantity:", &format!("{} kg", receipt.quantity), width),
        row(
            "Unit price:",
            &format!("{}/kg", currency.format(receipt.unit_price)),
            width,
        ),
        light,
        row("TOTAL:", &currency.format(receipt.total_price), width),
        heavy,
    ];

    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

fn row(label: &str, value: &str, width: usize) -> String {
    let used = label.chars().count() + value.chars().count();
    if used >= width {
        format!("{label} {value}")
    } else {
        format!("{label}{}{value}", " ".repeat(width - used))
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_receipt(self, &ReceiptLayout::default()))
    }
}
