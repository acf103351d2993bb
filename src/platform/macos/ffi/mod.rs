//! FFI bindings for macOS frameworks.
//!
//! Carbon for the hotkey, ServiceManagement for the login item, and the
//! objc2 bridge used by all AppKit code.

pub mod bridge;
pub mod carbon;
pub mod cocoa_utils;
pub mod service_management;

pub use carbon::*;
pub use cocoa_utils::*;
