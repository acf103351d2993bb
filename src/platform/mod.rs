//! Platform-specific implementations.
//!
//! Only macOS is supported. Everything the launcher needs from the OS goes
//! through the traits in `launcher` and `store`, implemented here.

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::*;
