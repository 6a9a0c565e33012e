pub mod item;
pub mod receipt;
pub mod sale;

pub use item::Item;
pub use receipt::{format_receipt, Receipt};
pub use sale::SaleEvent;
