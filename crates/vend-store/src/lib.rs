//! # vend-store: Persistence Layer for the Vending Machine
//!
//! Loads and saves the inventory and the owner credentials as JSON files,
//! reads the machine configuration, and guards the owner menu.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vend Data Flow                                   │
//! │                                                                         │
//! │  Terminal start-up                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  VendConfig::load() ──► Store (data_dir + file names)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    vend-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌───────────────┐  ┌──────────────────┐   │   │
//! │  │   │    Store      │  │ CredentialGate│  │    VendConfig    │   │   │
//! │  │   │  (store.rs)   │◄─│   (gate.rs)   │  │   (config.rs)    │   │   │
//! │  │   │               │  │               │  │                  │   │   │
//! │  │   │ inventory     │  │ Uninitialized │  │ defaults         │   │   │
//! │  │   │ credentials   │  │ Initialized   │  │ vend.toml        │   │   │
//! │  │   └───────────────┘  └───────────────┘  │ VEND_* env       │   │   │
//! │  │                                         └──────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   <data_dir>/inventory.json   <data_dir>/owner_credentials.json │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vend_store::{CredentialGate, Store};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new("./data");
//! let inventory = store.load_inventory()?;
//! let gate = CredentialGate::open(&store)?;
//! println!("{} items, owner set up: {}", inventory.len(), gate.is_initialized());
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod gate;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::VendConfig;
pub use error::{GateError, StoreError, StoreResult};
pub use gate::{CredentialGate, GateState};
pub use store::Store;
