//! # Session State
//!
//! Everything a running terminal session holds, passed explicitly into each
//! command.
//!
//! ## State Types
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  MachineState (one per process)          Cart (one per user visit)     │
//! │  ├── config     VendConfig               └── created in the user menu, │
//! │  ├── store      Store                        dropped on exit           │
//! │  ├── inventory  Inventory                                               │
//! │  └── gate       CredentialGate                                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod machine;

pub use machine::MachineState;
