pub mod customer;
pub mod owner;

use chrono::NaiveDate;

use crate::{currency::CurrencyFormat, domain::Item};

use super::output::render_table;

/// Stock table shown to both roles.
pub fn inventory_table(items: &[Item], currency: &CurrencyFormat, today: NaiveDate) -> String {
    let rows: Vec<Vec<String>> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let status = if item.is_expired(today) {
                "expired"
            } else if item.quantity == 0 {
                "sold out"
            } else {
                ""
            };
            vec![
                (idx + 1).to_string(),
                item.name.clone(),
                format!("{}/kg", currency.format(item.unit_price)),
                format!("{} kg", item.quantity),
                item.expiration_date.format("%Y-%m-%d").to_string(),
                status.to_string(),
            ]
        })
        .collect();
    render_table(
        &["#", "Item", "Price", "Stock", "Expires", ""],
        &rows,
        &[0, 2, 3],
    )
}
