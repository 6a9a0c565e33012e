pub mod checkout;
pub mod clock;
pub mod inventory;
pub mod sales_ledger;

pub use checkout::Checkout;
pub use clock::{Clock, FixedClock, SystemClock};
pub use inventory::Inventory;
pub use sales_ledger::{MonthKey, SalesLedger, SalesReport, WeekKey};
