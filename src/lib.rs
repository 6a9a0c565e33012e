#![doc(test(attr(deny(warnings))))]

//! Meat Counter is a small inventory and point-of-sale simulator for a shop
//! selling perishable goods by the kilo: stock bookkeeping, a flat-file store,
//! purchases with receipts, and running sales totals.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Meat Counter tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
