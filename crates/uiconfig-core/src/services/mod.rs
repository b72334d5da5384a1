//! Core services.
//!
//! Services orchestrate between ports and domain rules. They don't know
//! about concrete store implementations.

mod settings_facade;

pub use settings_facade::SettingsFacade;
