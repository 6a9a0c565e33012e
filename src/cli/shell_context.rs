use crate::{
    config::{Config, ConfigManager},
    core::{Checkout, Clock, Inventory, SalesLedger, SystemClock},
    currency::CurrencyFormat,
    domain::receipt::ReceiptLayout,
    errors::ShopError,
    storage::FlatFileStorage,
};

use super::core::{CliError, CommandError};
use super::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// State owned by one shell session.
pub struct ShellContext {
    pub mode: CliMode,
    pub config: Config,
    pub inventory: Inventory,
    pub ledger: SalesLedger,
    pub clock: Box<dyn Clock>,
}

impl ShellContext {
    /// Builds a session from the on-disk config and loads the inventory file.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let manager = ConfigManager::new()?;
        let config = manager.load_or_init()?;
        let storage = FlatFileStorage::new(manager.inventory_path(&config));
        let mut context = Self::from_parts(
            mode,
            config,
            Inventory::new(Box::new(storage)),
            Box::new(SystemClock),
        );
        context.load_inventory();
        Ok(context)
    }

    pub fn from_parts(
        mode: CliMode,
        config: Config,
        inventory: Inventory,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            mode,
            config,
            inventory,
            ledger: SalesLedger::new(),
            clock,
        }
    }

    pub fn load_inventory(&mut self) {
        let report = self.inventory.load();
        for warning in &report.warnings {
            output::warning(format!("Skipped inventory record: {}", warning));
        }
        output::info(format!(
            "Loaded {} item(s) from {}",
            self.inventory.list().len(),
            self.inventory.storage_location()
        ));
    }

    pub fn checkout(&mut self) -> Checkout<'_> {
        Checkout::new(&mut self.inventory, &mut self.ledger, self.clock.as_ref())
    }

    pub fn currency(&self) -> CurrencyFormat {
        self.config.currency_format()
    }

    pub fn receipt_layout(&self) -> ReceiptLayout {
        self.config.receipt_layout()
    }

    /// Surfaces a failed inventory flush from the last command.
    pub fn report_save_failure(&mut self) {
        if let Some(err) = self.inventory.take_save_failure() {
            output::warning(format!("Changes were not saved: {}", err));
        }
    }

    /// Prints a command failure; the shell keeps running afterwards.
    pub fn report_error(&self, err: &CommandError) {
        match err {
            CommandError::Shop(ShopError::NotFound(name)) => {
                output::error(format!("Item not found: {}", name));
                if let Some(suggestion) = self.inventory.suggest(name) {
                    output::info(format!("Did you mean `{}`?", suggestion));
                }
            }
            CommandError::Shop(shop) => output::error(shop),
            CommandError::Terminal(terminal) => output::error(terminal),
            CommandError::EndOfInput => {}
        }
    }
}
