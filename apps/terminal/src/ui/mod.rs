//! # Terminal UI
//!
//! ```text
//! ui/
//! ├── mod.rs      ◄─── You are here
//! ├── menu.rs     ◄─── dialoguer prompts and the menu loops
//! └── render.rs   ◄─── Tables, bill, receipt (pure Strings)
//! ```

pub mod menu;
pub mod render;

pub use menu::run_session;
