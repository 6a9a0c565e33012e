mod common;

use std::fs;

use common::{date, temp_home};
use meat_counter::{
    core::Inventory,
    domain::Item,
    storage::{FlatFileStorage, StorageBackend},
};
use rust_decimal_macros::dec;

fn sample_items() -> Vec<Item> {
    vec![
        Item::new("Chicken", dec!(205.00), 8, date(2025, 1, 5)).unwrap(),
        Item::new("Beef", dec!(300), 20, date(2025, 1, 1)).unwrap(),
        Item::new("Pork belly", dec!(0.99), 0, date(2024, 12, 31)).unwrap(),
    ]
}

#[test]
fn save_then_load_reproduces_every_item() {
    let path = temp_home().join("inventory.txt");
    let storage = FlatFileStorage::new(&path);

    let mut inventory = Inventory::new(Box::new(storage.clone()));
    for item in sample_items() {
        inventory.create(item).unwrap();
    }

    let mut reloaded = Inventory::new(Box::new(storage));
    let report = reloaded.load();
    assert!(report.warnings.is_empty());
    assert_eq!(reloaded.list(), sample_items().as_slice());
}

#[test]
fn mutations_are_flushed_to_disk() {
    let path = temp_home().join("inventory.txt");
    let mut inventory = Inventory::new(Box::new(FlatFileStorage::new(&path)));
    for item in sample_items() {
        inventory.create(item).unwrap();
    }

    inventory
        .update("Beef", 20, dec!(300.00), date(2025, 1, 1))
        .unwrap();
    inventory.delete("Pork belly").unwrap();
    inventory.deduct("chicken", 3).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Chicken,205.00,5,2025-01-05\nBeef,300.00,20,2025-01-01\n"
    );
}

#[test]
fn one_bad_line_does_not_abort_the_load() {
    let path = temp_home().join("inventory.txt");
    fs::write(
        &path,
        "Chicken,205.00,8,2025-01-05\n\
         Lamb,410.00,oops,2025-01-05\n\
         Turkey,180.00,4\n\
         Beef,300,20,1/1/2025 12:00:00 AM\n",
    )
    .unwrap();

    let mut inventory = Inventory::new(Box::new(FlatFileStorage::new(&path)));
    let report = inventory.load();

    let names: Vec<_> = inventory.list().iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Chicken", "Beef"]);
    assert_eq!(inventory.find("beef").unwrap().expiration_date, date(2025, 1, 1));
    assert_eq!(report.warnings.len(), 2);
    assert!(report.warnings[0].contains("invalid quantity"));
    assert!(report.warnings[1].contains("expected 4 fields"));
}

#[test]
fn unreadable_store_starts_empty() {
    let home = temp_home();
    // A directory where the file should be makes the read fail.
    let path = home.join("inventory.txt");
    fs::create_dir_all(&path).unwrap();

    let mut inventory = Inventory::new(Box::new(FlatFileStorage::new(&path)));
    let report = inventory.load();
    assert!(inventory.is_empty());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].starts_with("Persistence error"));
}

#[test]
fn failed_save_keeps_memory_state() {
    let home = temp_home();
    let path = home.join("inventory.txt");
    let storage = FlatFileStorage::new(&path);
    // Occupy the temp file name so the staged write fails.
    fs::create_dir_all(home.join("inventory.txt.tmp")).unwrap();

    let mut inventory = Inventory::new(Box::new(storage.clone()));
    inventory
        .create(Item::new("Duck", dec!(150), 2, date(2025, 2, 2)).unwrap())
        .unwrap();

    assert_eq!(inventory.list().len(), 1);
    assert!(inventory.save().is_err());
    assert!(storage.load().unwrap().items.is_empty());
}
