//! # Terminal Commands Module
//!
//! Every action the menus can take, as plain functions over explicit state.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── auth.rs     ◄─── Owner setup and login
//! ├── owner.rs    ◄─── Add, restock, adjust, price, remove, summary
//! ├── user.rs     ◄─── Cart manipulation and checkout
//! └── seed.rs     ◄─── Demo inventory
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  ui/menu.rs prompts for typed values                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  owner::update_price(                                                  │
//! │      state: &mut MachineState,  ◄── Passed in by the menu              │
//! │      code: &str,                ◄── From the prompt                    │
//! │      price: Money,              ◄── Parsed by the prompt               │
//! │  ) -> AppResult<Item>                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Menu renders the Item, or the AppError message, and re-prompts        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands never prompt or print, so every one of them is tested without
//! a terminal.

pub mod auth;
pub mod owner;
pub mod seed;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::state::MachineState;
    use vend_store::VendConfig;

    /// A machine state over a fresh temporary data directory.
    pub fn machine() -> (tempfile::TempDir, MachineState) {
        let dir = tempfile::tempdir().unwrap();
        let mut config = VendConfig::default();
        config.storage.data_dir = Some(dir.path().to_path_buf());
        let state = MachineState::open(config).unwrap();
        (dir, state)
    }
}
