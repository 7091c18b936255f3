//! # Credential Gate
//!
//! Guards the owner menu with the single owner login.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌───────────────┐   setup_credentials()   ┌───────────────────┐      │
//! │   │ Uninitialized │ ──────────────────────► │   Initialized     │      │
//! │   │ (no file)     │   persists the record   │ (file present)    │      │
//! │   └───────────────┘                         └───────────────────┘      │
//! │          │                                      │          │           │
//! │    login() → NotInitialized          login() → Ok / InvalidCredentials │
//! │                                      setup() → AlreadyInitialized      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{info, warn};
use vend_core::Credentials;

use crate::error::GateError;
use crate::store::Store;

/// Where the gate is in its one-way setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    Uninitialized,
    Initialized(Credentials),
}

/// The owner login check.
#[derive(Debug, Clone)]
pub struct CredentialGate {
    state: GateState,
}

impl CredentialGate {
    /// Picks the starting state from the credentials file.
    pub fn open(store: &Store) -> Result<Self, GateError> {
        let state = match store.load_credentials()? {
            Some(credentials) => GateState::Initialized(credentials),
            None => GateState::Uninitialized,
        };
        Ok(CredentialGate { state })
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.state, GateState::Initialized(_))
    }

    /// First-run setup: stores the owner record and moves to Initialized.
    ///
    /// The state only changes once the record is on disk.
    pub fn setup_credentials(
        &mut self,
        store: &Store,
        owner_id: &str,
        password: &str,
    ) -> Result<(), GateError> {
        if self.is_initialized() {
            return Err(GateError::AlreadyInitialized);
        }

        let credentials = Credentials::new(owner_id, password);
        store.save_credentials(&credentials)?;
        self.state = GateState::Initialized(credentials);

        info!(owner_id = %owner_id, "Owner credentials set up");
        Ok(())
    }

    /// Checks a login attempt.
    pub fn login(&self, owner_id: &str, password: &str) -> Result<(), GateError> {
        let GateState::Initialized(credentials) = &self.state else {
            return Err(GateError::NotInitialized);
        };

        credentials.verify(owner_id, password).map_err(|e| {
            warn!(owner_id = %owner_id, "Owner login failed");
            GateError::from(e)
        })?;

        info!(owner_id = %owner_id, "Owner logged in");
        Ok(())
    }
}
