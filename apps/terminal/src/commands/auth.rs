//! # Owner Authentication Commands
//!
//! First-run setup and login against the credential gate.
//!
//! ```text
//! Owner menu
//!      │
//!      ├── gate uninitialized ──► setup_owner(id, password) ──► logged in
//!      │
//!      └── gate initialized ────► login_owner(id, password)
//!                                      │
//!                                      ├── Ok  ──► owner actions
//!                                      └── Err ──► AUTH_ERROR, back to main menu
//! ```

use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::state::MachineState;

/// Records the owner's credentials. Only allowed once per data directory.
pub fn setup_owner(state: &mut MachineState, owner_id: &str, password: &str) -> AppResult<()> {
    let owner_id = owner_id.trim();
    let password = password.trim();
    debug!(owner_id = %owner_id, "setup_owner command");

    if owner_id.is_empty() {
        return Err(AppError::validation("Owner ID must not be empty"));
    }
    if password.is_empty() {
        return Err(AppError::validation("Password must not be empty"));
    }

    state
        .gate
        .setup_credentials(&state.store, owner_id, password)?;
    Ok(())
}

pub fn login_owner(state: &MachineState, owner_id: &str, password: &str) -> AppResult<()> {
    let owner_id = owner_id.trim();
    debug!(owner_id = %owner_id, "login_owner command");

    state.gate.login(owner_id, password.trim())?;
    Ok(())
}
