//! Storage module.
//!
//! NSUserDefaults persistence for the settings store.

pub mod preferences;

pub use preferences::UserDefaults;
