#![allow(dead_code)]

use std::{cell::RefCell, path::PathBuf, rc::Rc, sync::Mutex};

use chrono::{NaiveDate, NaiveDateTime};
use meat_counter::{
    core::Inventory,
    domain::Item,
    errors::{Result, ShopError},
    storage::{LoadReport, StorageBackend},
};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory that outlives the calling test.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Storage double that keeps the last saved snapshot in memory.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    pub saved: Rc<RefCell<Vec<Item>>>,
    pub fail_saves: bool,
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> Result<LoadReport> {
        Ok(LoadReport {
            items: self.saved.borrow().clone(),
            warnings: Vec::new(),
        })
    }

    fn save(&self, items: &[Item]) -> Result<()> {
        if self.fail_saves {
            return Err(ShopError::Persistence("read-only test storage".into()));
        }
        *self.saved.borrow_mut() = items.to_vec();
        Ok(())
    }

    fn location(&self) -> String {
        "memory".into()
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(hour, minute, 0).expect("valid time")
}

pub fn item(name: &str, price: Decimal, quantity: u32) -> Item {
    Item::new(name, price, quantity, date(2030, 1, 1)).expect("valid item")
}

/// Inventory with Chicken (205.00/kg, 8 kg) and Beef (300.00/kg, 10 kg).
pub fn seeded_inventory(storage: &MemoryStorage) -> Inventory {
    let mut inventory = Inventory::new(Box::new(storage.clone()));
    inventory
        .create(item("Chicken", Decimal::new(20500, 2), 8))
        .expect("create chicken");
    inventory
        .create(item("Beef", Decimal::new(30000, 2), 10))
        .expect("create beef");
    inventory
}
