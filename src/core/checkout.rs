use rust_decimal::Decimal;
use tracing::info;

use crate::{
    domain::{Receipt, SaleEvent},
    errors::{Result, ShopError},
};

use super::{clock::Clock, inventory::Inventory, sales_ledger::SalesLedger};

/// Runs a purchase against the inventory and the sales ledger.
pub struct Checkout<'a> {
    inventory: &'a mut Inventory,
    ledger: &'a mut SalesLedger,
    clock: &'a dyn Clock,
}

impl<'a> Checkout<'a> {
    pub fn new(
        inventory: &'a mut Inventory,
        ledger: &'a mut SalesLedger,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            inventory,
            ledger,
            clock,
        }
    }

    /// Sells `quantity` kilos of `item_name`.
    ///
    /// Nothing is deducted or recorded when the item is unknown, stock is short
    /// or the sale would overflow the running totals.
    pub fn purchase(&mut self, item_name: &str, quantity: u32) -> Result<Receipt> {
        let item = self
            .inventory
            .find(item_name)
            .ok_or_else(|| ShopError::NotFound(item_name.trim().to_string()))?;
        if quantity == 0 {
            return Err(ShopError::Validation(
                "quantity must be at least 1 kg".into(),
            ));
        }
        if quantity > item.quantity {
            return Err(ShopError::InsufficientStock {
                name: item.name.clone(),
                requested: quantity,
                available: item.quantity,
            });
        }

        let name = item.name.clone();
        let unit_price = item.unit_price;
        let total_price = unit_price.checked_mul(Decimal::from(quantity)).ok_or_else(|| {
            ShopError::Validation(format!(
                "total for {} kg of `{}` is too large",
                quantity, name
            ))
        })?;
        let timestamp = self.clock.now();
        let sale = SaleEvent::new(timestamp, total_price);
        self.ledger.check_sale(&sale)?;

        let remaining = self.inventory.deduct(&name, quantity)?;
        self.ledger.record_sale(&sale)?;
        info!(item = %name, quantity, total = %total_price, remaining, "purchase completed");

        Ok(Receipt {
            item_name: name,
            quantity,
            unit_price,
            total_price,
            timestamp,
        })
    }
}
