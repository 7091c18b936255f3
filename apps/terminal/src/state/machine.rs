//! Machine state: configuration, data directory, live inventory, owner gate.

use tracing::info;
use vend_core::{CoreResult, Inventory, Money};
use vend_store::{CredentialGate, Store, VendConfig};

use crate::error::AppResult;

/// State shared by every menu for the lifetime of the process.
#[derive(Debug)]
pub struct MachineState {
    pub config: VendConfig,
    pub store: Store,
    pub inventory: Inventory,
    pub gate: CredentialGate,
}

impl MachineState {
    /// Opens the data directory named by `config` and loads both records.
    ///
    /// Any failure here aborts start-up: an unreadable or corrupted file is
    /// never silently replaced.
    pub fn open(config: VendConfig) -> AppResult<Self> {
        let store = config.open_store()?;
        let inventory = store.load_inventory()?;
        let gate = CredentialGate::open(&store)?;

        info!(
            data_dir = %store.data_dir().display(),
            items = inventory.len(),
            owner_set_up = gate.is_initialized(),
            "Machine state loaded"
        );

        Ok(MachineState {
            config,
            store,
            inventory,
            gate,
        })
    }

    /// Applies `change` to a copy of the inventory, saves the copy, and only
    /// then makes it live.
    ///
    /// If the change is rejected or the save fails, the live inventory is
    /// untouched.
    pub fn update_inventory<T, F>(&mut self, change: F) -> AppResult<T>
    where
        F: FnOnce(&mut Inventory) -> CoreResult<T>,
    {
        let mut staged = self.inventory.clone();
        let value = change(&mut staged)?;
        self.store.save_inventory(&staged)?;
        self.inventory = staged;
        Ok(value)
    }

    /// Writes the live inventory as is.
    pub fn save_inventory(&self) -> AppResult<()> {
        self.store.save_inventory(&self.inventory)?;
        Ok(())
    }

    pub fn machine_name(&self) -> &str {
        &self.config.display.machine_name
    }

    pub fn currency_symbol(&self) -> &str {
        &self.config.display.currency_symbol
    }

    pub fn format_money(&self, amount: Money) -> String {
        self.config.format_currency(amount)
    }
}
