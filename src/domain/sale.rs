use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// A completed purchase as seen by the sales ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleEvent {
    pub timestamp: NaiveDateTime,
    pub amount: Decimal,
}

impl SaleEvent {
    pub fn new(timestamp: NaiveDateTime, amount: Decimal) -> Self {
        Self { timestamp, amount }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}
