//! # Machine Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line (highest priority)                                    │
//! │     --data-dir /srv/vend                                               │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     VEND_DATA_DIR, VEND_MACHINE_NAME, VEND_REMOVE_SOLD_OUT             │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/vend/vend.toml (Linux)                                   │
//! │     ~/Library/Application Support/com.vend.machine/vend.toml (macOS)   │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     platform data dir, inventory.json, owner_credentials.json          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # vend.toml
//! [storage]
//! data_dir = "/srv/vend"
//! inventory_file = "inventory.json"
//! credentials_file = "owner_credentials.json"
//!
//! [checkout]
//! remove_sold_out = true
//!
//! [display]
//! machine_name = "Lobby Machine"
//! currency_symbol = "$"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use vend_core::{Money, PurchaseOptions};

use crate::error::{StoreError, StoreResult};
use crate::store::{Store, DEFAULT_CREDENTIALS_FILE, DEFAULT_INVENTORY_FILE};

// =============================================================================
// Sections
// =============================================================================

/// Where the record files live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Data directory. `None` means the platform data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_inventory_file")]
    pub inventory_file: String,

    #[serde(default = "default_credentials_file")]
    pub credentials_file: String,
}

fn default_inventory_file() -> String {
    DEFAULT_INVENTORY_FILE.to_string()
}

fn default_credentials_file() -> String {
    DEFAULT_CREDENTIALS_FILE.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            data_dir: None,
            inventory_file: default_inventory_file(),
            credentials_file: default_credentials_file(),
        }
    }
}

/// Purchase behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSettings {
    /// Drop items from the inventory once a purchase sells their last unit.
    #[serde(default = "default_true")]
    pub remove_sold_out: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        CheckoutSettings {
            remove_sold_out: true,
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Shown in the banner and on receipts.
    #[serde(default = "default_machine_name")]
    pub machine_name: String,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_machine_name() -> String {
    "Vending Machine".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            machine_name: default_machine_name(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// VendConfig
// =============================================================================

/// Complete machine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub checkout: CheckoutSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl VendConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (vend.toml), if present
    /// 3. Environment variables
    ///
    /// An explicit `config_path` that does not exist is treated the same as
    /// a missing default file.
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(path = %path.display(), "Loading config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(path = %path.display(), "Config file not found, using defaults");
            }
        }

        config.apply_overrides_from(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> StoreResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        Self::from_toml(&contents).map_err(|reason| StoreError::ConfigLoad {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parses TOML text; missing sections and keys take their defaults.
    pub fn from_toml(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }

    /// Applies `VEND_*` overrides read through `lookup`.
    ///
    /// [`VendConfig::load`] passes `std::env::var`; tests pass a map.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("VEND_DATA_DIR") {
            debug!(data_dir = %dir, "Overriding data directory from environment");
            self.storage.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(name) = lookup("VEND_MACHINE_NAME") {
            self.display.machine_name = name;
        }

        if let Some(value) = lookup("VEND_REMOVE_SOLD_OUT") {
            match parse_flag(&value) {
                Some(flag) => self.checkout.remove_sold_out = flag,
                None => warn!(value = %value, "Unknown VEND_REMOVE_SOLD_OUT value, ignoring"),
            }
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StoreResult<()> {
        for (key, name) in [
            ("inventory_file", &self.storage.inventory_file),
            ("credentials_file", &self.storage.credentials_file),
        ] {
            if name.trim().is_empty() {
                return Err(StoreError::InvalidConfig(format!("{} must not be empty", key)));
            }
            if name.contains(['/', '\\']) {
                return Err(StoreError::InvalidConfig(format!(
                    "{} must be a file name, got: {}",
                    key, name
                )));
            }
        }

        if self.storage.inventory_file == self.storage.credentials_file {
            return Err(StoreError::InvalidConfig(
                "inventory_file and credentials_file must differ".into(),
            ));
        }

        if self.display.machine_name.trim().is_empty() {
            return Err(StoreError::InvalidConfig(
                "machine_name must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "vend", "machine")
            .map(|dirs| dirs.config_dir().join("vend.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Configured data directory, or the platform data directory.
    pub fn data_dir(&self) -> StoreResult<PathBuf> {
        if let Some(dir) = &self.storage.data_dir {
            return Ok(dir.clone());
        }

        directories::ProjectDirs::from("com", "vend", "machine")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                StoreError::InvalidConfig(
                    "no home directory found; set storage.data_dir or VEND_DATA_DIR".into(),
                )
            })
    }

    /// Builds the store for the configured directory and file names.
    pub fn open_store(&self) -> StoreResult<Store> {
        Ok(Store::new(self.data_dir()?)
            .inventory_file(&self.storage.inventory_file)
            .credentials_file(&self.storage.credentials_file))
    }

    pub fn purchase_options(&self) -> PurchaseOptions {
        PurchaseOptions {
            remove_sold_out: self.checkout.remove_sold_out,
        }
    }

    /// Formats money with the configured currency symbol.
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with(&self.display.currency_symbol)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = VendConfig::default();
        assert_eq!(config.storage.inventory_file, "inventory.json");
        assert_eq!(config.storage.credentials_file, "owner_credentials.json");
        assert!(config.checkout.remove_sold_out);
        assert_eq!(config.display.currency_symbol, "$");
        assert!(config.validate().is_ok());
        assert_eq!(config.purchase_options(), PurchaseOptions::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = VendConfig::from_toml(
            r#"
            [checkout]
            remove_sold_out = false

            [display]
            machine_name = "Lobby"
            "#,
        )
        .unwrap();

        assert!(!config.checkout.remove_sold_out);
        assert_eq!(config.display.machine_name, "Lobby");
        assert_eq!(config.display.currency_symbol, "$");
        assert_eq!(config.storage, StorageSettings::default());
    }

    #[test]
    fn test_bad_toml() {
        let text = "[checkout]\nremove_sold_out = \"maybe\"";
        assert!(VendConfig::from_toml(text).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vend.toml");
        std::fs::write(
            &path,
            "[storage]\ndata_dir = \"/srv/vend\"\ninventory_file = \"stock.json\"\n",
        )
        .unwrap();

        let config = VendConfig::from_file(&path).unwrap();
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/srv/vend"));

        let store = config.open_store().unwrap();
        assert_eq!(
            store.inventory_path(),
            PathBuf::from("/srv/vend/stock.json")
        );
    }

    #[test]
    fn test_unparseable_file_is_config_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vend.toml");
        std::fs::write(&path, "[storage").unwrap();

        assert!(matches!(
            VendConfig::from_file(&path),
            Err(StoreError::ConfigLoad { .. })
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = VendConfig::default();
        config.apply_overrides_from(env(&[
            ("VEND_DATA_DIR", "/tmp/vend"),
            ("VEND_MACHINE_NAME", "Gym"),
            ("VEND_REMOVE_SOLD_OUT", "no"),
        ]));

        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/vend")));
        assert_eq!(config.display.machine_name, "Gym");
        assert!(!config.checkout.remove_sold_out);

        // Unknown flag values are ignored
        config.apply_overrides_from(env(&[("VEND_REMOVE_SOLD_OUT", "sometimes")]));
        assert!(!config.checkout.remove_sold_out);
    }

    #[test]
    fn test_config_validation() {
        let mut config = VendConfig::default();

        config.storage.inventory_file = String::new();
        assert!(config.validate().is_err());

        config.storage.inventory_file = "../inventory.json".into();
        assert!(config.validate().is_err());

        config.storage.inventory_file = "owner_credentials.json".into();
        assert!(config.validate().is_err());

        config.storage.inventory_file = "inventory.json".into();
        config.display.machine_name = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_format_currency() {
        let mut config = VendConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(300)), "$3.00");

        config.display.currency_symbol = "€".into();
        assert_eq!(config.format_currency(Money::from_cents(350)), "€3.50");
    }
}
