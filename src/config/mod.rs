use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    currency::CurrencyFormat,
    domain::receipt::{ReceiptLayout, DEFAULT_RECEIPT_WIDTH, MAX_RECEIPT_WIDTH, MIN_RECEIPT_WIDTH},
    errors::ShopError,
    utils::paths,
};

const DEFAULT_INVENTORY_FILE: &str = "inventory.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store_name: String,
    pub currency_symbol: String,
    /// Relative paths resolve against the data directory.
    pub inventory_file: PathBuf,
    pub receipt_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_name: "Meat Counter".into(),
            currency_symbol: "$".into(),
            inventory_file: PathBuf::from(DEFAULT_INVENTORY_FILE),
            receipt_width: DEFAULT_RECEIPT_WIDTH,
        }
    }
}

impl Config {
    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat::with_symbol(self.currency_symbol.clone())
    }

    pub fn receipt_layout(&self) -> ReceiptLayout {
        ReceiptLayout {
            title: self.store_name.clone(),
            width: self.receipt_width,
            currency: self.currency_format(),
        }
    }
}

/// Reads and writes `config.json` inside the data directory.
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ShopError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ShopError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: paths::config_file_in(&base),
            base,
        })
    }

    /// Loads the config, falling back to defaults when the file does not exist yet.
    pub fn load(&self) -> Result<Config, ShopError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let mut config: Config = serde_json::from_str(&data)?;
        config.receipt_width = config
            .receipt_width
            .clamp(MIN_RECEIPT_WIDTH, MAX_RECEIPT_WIDTH);
        Ok(config)
    }

    /// Like [`ConfigManager::load`], but writes the defaults out on first run.
    pub fn load_or_init(&self) -> Result<Config, ShopError> {
        if self.path.exists() {
            return self.load();
        }
        let config = Config::default();
        match self.save(&config) {
            Ok(()) => info!(path = %self.path.display(), "default config written"),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "could not write default config")
            }
        }
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), ShopError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn inventory_path(&self, config: &Config) -> PathBuf {
        paths::resolve_in(&self.base, &config.inventory_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
        assert_eq!(
            manager.inventory_path(&Config::default()),
            dir.path().join("inventory.txt")
        );
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = Config {
            store_name: "Corner Butcher".into(),
            currency_symbol: "€".into(),
            inventory_file: PathBuf::from("/var/lib/shop/stock.txt"),
            receipt_width: 40,
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
        assert_eq!(
            manager.inventory_path(&config),
            PathBuf::from("/var/lib/shop/stock.txt")
        );
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(paths::config_file_in(dir.path()), r#"{ "currency_symbol": "₱" }"#).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.currency_symbol, "₱");
        assert_eq!(config.store_name, "Meat Counter");
    }

    #[test]
    fn malformed_file_is_a_persistence_error() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(paths::config_file_in(dir.path()), "{ not json").unwrap();
        assert!(matches!(manager.load(), Err(ShopError::Persistence(_))));
    }

    #[test]
    fn first_run_writes_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(manager.load_or_init().unwrap(), Config::default());
        let written = fs::read_to_string(paths::config_file_in(dir.path())).unwrap();
        assert!(written.contains("\"store_name\": \"Meat Counter\""));

        fs::write(
            paths::config_file_in(dir.path()),
            r#"{ "store_name": "Corner Butcher" }"#,
        )
        .unwrap();
        assert_eq!(manager.load_or_init().unwrap().store_name, "Corner Butcher");
    }

    #[test]
    fn receipt_width_is_clamped_on_load() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let file = paths::config_file_in(dir.path());
        fs::write(&file, r#"{ "receipt_width": 18446744073709551615 }"#).unwrap();
        assert_eq!(manager.load().unwrap().receipt_width, MAX_RECEIPT_WIDTH);
        fs::write(&file, r#"{ "receipt_width": 3 }"#).unwrap();
        assert_eq!(manager.load().unwrap().receipt_width, MIN_RECEIPT_WIDTH);
    }
}
