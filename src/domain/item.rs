use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::currency::CurrencyFormat;
use crate::errors::{Result, ShopError};

/// One stock-keeping unit sold by the kilo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub unit_price: Decimal,
    /// Whole kilos on hand.
    pub quantity: u32,
    pub expiration_date: NaiveDate,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
        expiration_date: NaiveDate,
    ) -> Result<Self> {
        let name = name.into().trim().to_string();
        validate_name(&name)?;
        validate_price(unit_price)?;
        Ok(Self {
            name,
            unit_price,
            quantity,
            expiration_date,
        })
    }

    /// Case-insensitive name comparison used for lookups and duplicate checks.
    pub fn matches_name(&self, candidate: &str) -> bool {
        normalize_name(&self.name) == normalize_name(candidate)
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiration_date < today
    }

    pub fn describe(&self, format: &CurrencyFormat) -> String {
        format!(
            "{} - {}/kg, {} kg in stock, expires {}",
            self.name,
            format.format(self.unit_price),
            self.quantity,
            self.expiration_date.format("%Y-%m-%d")
        )
    }
}

pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ShopError::Validation("item name cannot be empty".into()));
    }
    // The inventory file is comma separated with no escaping.
    if name.contains([',', '\n', '\r']) {
        return Err(ShopError::Validation(format!(
            "item name `{}` cannot contain commas or line breaks",
            name
        )));
    }
    Ok(())
}

pub(crate) fn validate_price(price: Decimal) -> Result<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ShopError::Validation(format!(
            "unit price cannot be negative (got {})",
            price
        )));
    }
    Ok(())
}
