//! # Persistence Store
//!
//! Reads and writes the two record files in the data directory.
//!
//! ## File Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Data Directory                                     │
//! │                                                                         │
//! │  <data_dir>/                                                           │
//! │  ├── inventory.json            { "items": [ {code,name,...}, ... ] }   │
//! │  └── owner_credentials.json    { "owner_id": ..., "password": ... }    │
//! │                                                                         │
//! │  Load:  absent  → empty Inventory / None                               │
//! │         present, unreadable   → StoreError::Io                         │
//! │         present, undecodable  → StoreError::Corrupted                  │
//! │                                                                         │
//! │  Save:  create data_dir if missing, write whole file                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes are plain `fs::write` calls at checkpoints. A crash between an
//! in-memory change and the next save loses that change.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use vend_core::{Credentials, Inventory, Item};

use crate::error::{StoreError, StoreResult};

/// Default inventory file name.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// Default credentials file name.
pub const DEFAULT_CREDENTIALS_FILE: &str = "owner_credentials.json";

// =============================================================================
// Records
// =============================================================================

/// On-disk shape of the inventory file.
#[derive(Debug, Serialize, Deserialize)]
struct InventoryRecord {
    items: Vec<Item>,
}

#[derive(Debug, Clone, Copy)]
enum RecordKind {
    Inventory,
    Credentials,
}

impl RecordKind {
    fn label(self) -> &'static str {
        match self {
            RecordKind::Inventory => "inventory",
            RecordKind::Credentials => "credentials",
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// Handle on the data directory.
///
/// ## Example
/// ```rust,no_run
/// use vend_store::Store;
///
/// let store = Store::new("/var/lib/vend")
///     .inventory_file("stock.json")
///     .credentials_file("owner.json");
/// assert!(store.inventory_path().ends_with("stock.json"));
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
    inventory_file: String,
    credentials_file: String,
}

impl Store {
    /// Creates a store over `data_dir` with the default file names.
    ///
    /// Nothing is touched on disk until the first load or save.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Store {
            data_dir: data_dir.into(),
            inventory_file: DEFAULT_INVENTORY_FILE.to_string(),
            credentials_file: DEFAULT_CREDENTIALS_FILE.to_string(),
        }
    }

    /// Sets the inventory file name.
    pub fn inventory_file(mut self, name: impl Into<String>) -> Self {
        self.inventory_file = name.into();
        self
    }

    /// Sets the credentials file name.
    pub fn credentials_file(mut self, name: impl Into<String>) -> Self {
        self.credentials_file = name.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.data_dir.join(&self.inventory_file)
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.data_dir.join(&self.credentials_file)
    }

    fn path_for(&self, kind: RecordKind) -> PathBuf {
        match kind {
            RecordKind::Inventory => self.inventory_path(),
            RecordKind::Credentials => self.credentials_path(),
        }
    }

    // =========================================================================
    // Presence
    // =========================================================================

    /// Reports whether an inventory file exists.
    pub fn has_inventory(&self) -> StoreResult<bool> {
        self.exists(RecordKind::Inventory)
    }

    /// Reports whether a credentials file exists.
    pub fn has_credentials(&self) -> StoreResult<bool> {
        self.exists(RecordKind::Credentials)
    }

    fn exists(&self, kind: RecordKind) -> StoreResult<bool> {
        let path = self.path_for(kind);
        path.try_exists().map_err(|e| StoreError::io(&path, e))
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    /// Loads the inventory, or an empty one on first run.
    ///
    /// The items are re-inserted through [`Inventory::from_items`], so a file
    /// holding duplicate codes or names is reported as corrupted.
    pub fn load_inventory(&self) -> StoreResult<Inventory> {
        let Some(record) = self.read_record::<InventoryRecord>(RecordKind::Inventory)? else {
            return Ok(Inventory::new());
        };

        let inventory = Inventory::from_items(record.items)
            .map_err(|e| StoreError::corrupted(self.inventory_path(), e))?;

        debug!(items = inventory.len(), "Inventory loaded");
        Ok(inventory)
    }

    /// Writes the whole inventory.
    pub fn save_inventory(&self, inventory: &Inventory) -> StoreResult<()> {
        let record = InventoryRecord {
            items: inventory.items().cloned().collect(),
        };
        self.write_record(RecordKind::Inventory, &record)?;

        info!(items = inventory.len(), "Inventory saved");
        Ok(())
    }

    // =========================================================================
    // Credentials
    // =========================================================================

    /// Loads the owner credentials; `None` means first run.
    pub fn load_credentials(&self) -> StoreResult<Option<Credentials>> {
        let credentials = self.read_record::<Credentials>(RecordKind::Credentials)?;
        debug!(found = credentials.is_some(), "Credentials loaded");
        Ok(credentials)
    }

    /// Writes the owner credentials.
    pub fn save_credentials(&self, credentials: &Credentials) -> StoreResult<()> {
        self.write_record(RecordKind::Credentials, credentials)?;

        info!(owner_id = %credentials.owner_id, "Credentials saved");
        Ok(())
    }

    // =========================================================================
    // File Helpers
    // =========================================================================

    fn read_record<T: DeserializeOwned>(&self, kind: RecordKind) -> StoreResult<Option<T>> {
        let path = self.path_for(kind);

        if !self.exists(kind)? {
            debug!(path = %path.display(), record = kind.label(), "Record file not found");
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).map_err(|e| StoreError::io(&path, e))?;
        let record = serde_json::from_str(&contents).map_err(|e| StoreError::corrupted(&path, e))?;

        Ok(Some(record))
    }

    fn write_record<T: Serialize>(&self, kind: RecordKind, record: &T) -> StoreResult<()> {
        let path = self.path_for(kind);

        fs::create_dir_all(&self.data_dir).map_err(|e| StoreError::io(&self.data_dir, e))?;

        let contents = serde_json::to_string_pretty(record).map_err(|e| StoreError::Encode {
            what: kind.label(),
            reason: e.to_string(),
        })?;
        fs::write(&path, contents).map_err(|e| StoreError::io(&path, e))?;

        debug!(path = %path.display(), record = kind.label(), "Record written");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
