//! # Vend Terminal
//!
//! The interactive front end of the vending machine.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vend Terminal                                    │
//! │                                                                         │
//! │  main.rs ────► Parses arguments, reports start-up failures (anyhow)    │
//! │                                                                         │
//! │  lib.rs ─────► Logging, config, state, dispatch (THIS FILE)            │
//! │                                                                         │
//! │  ui/ ────────► dialoguer menus, rendered tables and receipts           │
//! │                                                                         │
//! │  commands/ ──► add_item, restock, add_to_cart, checkout, seed, ...     │
//! │                                                                         │
//! │  state/ ─────► MachineState (config, store, inventory, gate)           │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                       Data directory                             │  │
//! │  │  inventory.json, owner_credentials.json                          │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Logging
//! Logs go to stderr so they never interleave with the menus on stdout.
//! `RUST_LOG` wins over `-v` when set.

use tracing::info;
use tracing_subscriber::EnvFilter;
use vend_store::VendConfig;

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;
pub mod ui;

pub use cli::{Cli, Commands};
pub use error::{AppError, AppResult, ErrorCode};
pub use state::MachineState;

// =============================================================================
// Entry Point
// =============================================================================

/// Loads configuration, opens the data directory and runs the requested
/// command.
pub fn run(cli: Cli) -> AppResult<()> {
    init_tracing(cli.verbose);

    let mut config = VendConfig::load(cli.config)?;
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = Some(dir);
    }

    let mut state = MachineState::open(config)?;

    match cli.command {
        Some(Commands::Seed { force }) => {
            let count = commands::seed::seed_inventory(&mut state, force)?;
            println!(
                "Stocked {} items in {}",
                count,
                state.store.inventory_path().display()
            );
            Ok(())
        }
        None => ui::run_session(&mut state),
    }
}

/// Default filter per `-v` count.
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info,vend=debug",
        2 => "debug",
        _ => "trace",
    }
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let initialized = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if initialized {
        info!(
            version = env!("CARGO_PKG_VERSION"),
            "Vend terminal starting"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(2), "debug");
        assert_eq!(default_filter(9), "trace");
    }

    #[test]
    fn test_run_seed_into_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("missing.toml");
        let cli = Cli {
            data_dir: Some(dir.path().join("data")),
            config: Some(config),
            verbose: 0,
            command: Some(Commands::Seed { force: false }),
        };

        run(cli).unwrap();

        let store = vend_store::Store::new(dir.path().join("data"));
        assert_eq!(
            store.load_inventory().unwrap().len(),
            commands::seed::DEMO_ITEMS.len()
        );
    }
}
