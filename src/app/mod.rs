// src/app/mod.rs
//! Application module - picker state and the dialog result contract.

pub mod state;

// Re-export the dialog surface
pub use state::{Outcome, Picker, PickerMode};
