//! macOS implementation using Cocoa/AppKit via objc2.
//!
//! - FFI bindings to Cocoa, Carbon and ServiceManagement
//! - UI components (ring overlay panel, status item, settings window)
//! - Input handling (Carbon hotkeys, workspace observers)
//! - Storage (NSUserDefaults persistence)
//! - App launching and the login item

pub mod app;
pub mod ffi;
pub mod handlers;
pub mod input;
pub mod login_item;
pub mod storage;
pub mod ui;
pub mod workspace;

// Re-export commonly used items
pub use app::*;
pub use ffi::bridge;
pub use handlers::*;
pub use storage::*;
pub use ui::*;
