use chrono::NaiveDate;
use rust_decimal::Decimal;
use strsim::levenshtein;
use tracing::{info, warn};

use crate::{
    domain::item::{normalize_name, validate_price, Item},
    errors::{Result, ShopError},
    storage::{LoadReport, StorageBackend},
};

const SUGGESTION_DISTANCE: usize = 3;

/// Ordered in-memory stock list backed by a storage backend.
///
/// Every successful mutation is flushed to storage. A failed flush is logged,
/// the in-memory change is kept and the error waits in [`Inventory::take_save_failure`].
pub struct Inventory {
    items: Vec<Item>,
    storage: Box<dyn StorageBackend>,
    save_failure: Option<ShopError>,
}

impl Inventory {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            items: Vec::new(),
            storage,
            save_failure: None,
        }
    }

    /// Replaces the in-memory list with the stored records.
    ///
    /// A backend failure leaves the inventory empty and is reported as a warning.
    pub fn load(&mut self) -> LoadReport {
        match self.storage.load() {
            Ok(report) => {
                self.items = report.items.clone();
                info!(
                    location = %self.storage.location(),
                    items = self.items.len(),
                    skipped = report.warnings.len(),
                    "inventory loaded"
                );
                report
            }
            Err(err) => {
                warn!(location = %self.storage.location(), error = %err, "inventory load failed");
                self.items.clear();
                LoadReport {
                    items: Vec::new(),
                    warnings: vec![err.to_string()],
                }
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.storage.save(&self.items).map_err(|err| {
            warn!(location = %self.storage.location(), error = %err, "inventory save failed");
            err
        })
    }

    fn persist(&mut self) {
        self.save_failure = self.save().err();
    }

    /// The error from the most recent flush, if it failed. Cleared once taken.
    pub fn take_save_failure(&mut self) -> Option<ShopError> {
        self.save_failure.take()
    }

    pub fn storage_location(&self) -> String {
        self.storage.location()
    }

    pub fn create(&mut self, item: Item) -> Result<()> {
        if self.find(&item.name).is_some() {
            return Err(ShopError::Validation(format!(
                "an item named `{}` already exists",
                item.name
            )));
        }
        info!(name = %item.name, quantity = item.quantity, "item created");
        self.items.push(item);
        self.persist();
        Ok(())
    }

    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Case-insensitive lookup.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.matches_name(name))
    }

    /// Overwrites stock, price and expiration of the item with exactly `name`.
    pub fn update(
        &mut self,
        name: &str,
        quantity: u32,
        unit_price: Decimal,
        expiration_date: NaiveDate,
    ) -> Result<()> {
        validate_price(unit_price)?;
        let item = self
            .items
            .iter_mut()
            .find(|item| item.name == name)
            .ok_or_else(|| ShopError::NotFound(name.to_string()))?;
        item.quantity = quantity;
        item.unit_price = unit_price;
        item.expiration_date = expiration_date;
        info!(name, quantity, price = %unit_price, "item updated");
        self.persist();
        Ok(())
    }

    /// Removes the item with exactly `name`.
    pub fn delete(&mut self, name: &str) -> Result<Item> {
        let position = self
            .items
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| ShopError::NotFound(name.to_string()))?;
        let removed = self.items.remove(position);
        info!(name, "item deleted");
        self.persist();
        Ok(removed)
    }

    /// Checks and removes `amount` kilos in one step, returning what is left.
    pub fn deduct(&mut self, name: &str, amount: u32) -> Result<u32> {
        if amount == 0 {
            return Err(ShopError::Validation(
                "quantity must be at least 1 kg".into(),
            ));
        }
        let item = self
            .items
            .iter_mut()
            .find(|item| item.matches_name(name))
            .ok_or_else(|| ShopError::NotFound(name.trim().to_string()))?;
        let remaining = item
            .quantity
            .checked_sub(amount)
            .ok_or_else(|| ShopError::InsufficientStock {
                name: item.name.clone(),
                requested: amount,
                available: item.quantity,
            })?;
        item.quantity = remaining;
        self.persist();
        Ok(remaining)
    }

    /// Closest existing item name, for "did you mean" hints.
    pub fn suggest(&self, name: &str) -> Option<&str> {
        let wanted = normalize_name(name);
        self.items
            .iter()
            .map(|item| (levenshtein(&normalize_name(&item.name), &wanted), item))
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, item)| item.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Clone, Default)]
    struct MemoryStorage {
        saved: Rc<RefCell<Vec<Item>>>,
        saves: Rc<RefCell<usize>>,
        fail: bool,
    }

    impl StorageBackend for MemoryStorage {
        fn load(&self) -> Result<LoadReport> {
            if self.fail {
                return Err(ShopError::Persistence("unavailable".into()));
            }
            Ok(LoadReport {
                items: self.saved.borrow().clone(),
                warnings: Vec::new(),
            })
        }

        fn save(&self, items: &[Item]) -> Result<()> {
            if self.fail {
                return Err(ShopError::Persistence("unavailable".into()));
            }
            *self.saved.borrow_mut() = items.to_vec();
            *self.saves.borrow_mut() += 1;
            Ok(())
        }

        fn location(&self) -> String {
            "memory".into()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(name: &str, price: i64, quantity: u32) -> Item {
        Item::new(name, Decimal::new(price, 0), quantity, date(2025, 1, 1)).unwrap()
    }

    fn inventory_with(storage: &MemoryStorage) -> Inventory {
        let mut inventory = Inventory::new(Box::new(storage.clone()));
        inventory.create(item("Chicken", 205, 8)).unwrap();
        inventory.create(item("Beef", 300, 10)).unwrap();
        inventory
    }

    #[test]
    fn create_persists_and_rejects_duplicates() {
        let storage = MemoryStorage::default();
        let mut inventory = inventory_with(&storage);
        assert_eq!(*storage.saves.borrow(), 2);
        assert!(inventory.take_save_failure().is_none());
        assert_eq!(storage.saved.borrow().len(), 2);

        let err = inventory.create(item("CHICKEN", 1, 1)).unwrap_err();
        assert!(matches!(err, ShopError::Validation(_)));
        assert_eq!(inventory.list().len(), 2);
    }

    #[test]
    fn update_requires_exact_name() {
        let storage = MemoryStorage::default();
        let mut inventory = inventory_with(&storage);

        inventory
            .update("Beef", 20, Decimal::new(30000, 2), date(2025, 2, 1))
            .unwrap();
        let beef = inventory.find("beef").unwrap();
        assert_eq!(beef.quantity, 20);
        assert_eq!(beef.unit_price, Decimal::new(300, 0));
        assert_eq!(beef.expiration_date, date(2025, 2, 1));

        let before = inventory.list().to_vec();
        let err = inventory
            .update("beef", 1, Decimal::ONE, date(2025, 2, 1))
            .unwrap_err();
        assert!(matches!(err, ShopError::NotFound(_)));
        assert_eq!(inventory.list(), before.as_slice());
    }

    #[test]
    fn delete_removes_only_the_named_item() {
        let storage = MemoryStorage::default();
        let mut inventory = inventory_with(&storage);
        assert!(matches!(inventory.delete("Pork"), Err(ShopError::NotFound(_))));
        let removed = inventory.delete("Chicken").unwrap();
        assert_eq!(removed.name, "Chicken");
        let names: Vec<_> = storage.saved.borrow().iter().map(|i| i.name.clone()).collect();
        assert_eq!(names, vec!["Beef"]);
    }

    #[test]
    fn deduct_is_case_insensitive_and_never_goes_negative() {
        let storage = MemoryStorage::default();
        let mut inventory = inventory_with(&storage);

        assert_eq!(inventory.deduct("chicken", 3).unwrap(), 5);
        let err = inventory.deduct("Chicken", 6).unwrap_err();
        assert!(matches!(
            err,
            ShopError::InsufficientStock {
                requested: 6,
                available: 5,
                ..
            }
        ));
        assert_eq!(inventory.find("Chicken").unwrap().quantity, 5);
        assert_eq!(inventory.deduct("Chicken", 5).unwrap(), 0);
        assert!(matches!(inventory.deduct("Chicken", 0), Err(ShopError::Validation(_))));
    }

    #[test]
    fn load_failure_leaves_inventory_empty() {
        let storage = MemoryStorage {
            fail: true,
            ..MemoryStorage::default()
        };
        let mut inventory = Inventory::new(Box::new(storage));
        let report = inventory.load();
        assert!(inventory.is_empty());
        assert_eq!(report.warnings, vec!["Persistence error: unavailable".to_string()]);
    }

    #[test]
    fn save_failure_keeps_in_memory_change() {
        let storage = MemoryStorage {
            fail: true,
            ..MemoryStorage::default()
        };
        let mut inventory = Inventory::new(Box::new(storage));
        inventory.create(item("Pork", 250, 4)).unwrap();
        assert_eq!(inventory.list().len(), 1);
        assert!(matches!(
            inventory.take_save_failure(),
            Some(ShopError::Persistence(_))
        ));
        assert!(inventory.take_save_failure().is_none());
        assert!(inventory.save().is_err());
    }

    #[test]
    fn suggests_close_names() {
        let storage = MemoryStorage::default();
        let inventory = inventory_with(&storage);
        assert_eq!(inventory.suggest("chiken"), Some("Chicken"));
        assert_eq!(inventory.suggest("salmon fillet"), None);
    }
}
