//! Overlay module.
//!
//! The ring panel, its view and drawing, and the [`OverlayHost`] that
//! connects them to the launcher.
//!
//! [`OverlayHost`]: crate::launcher::OverlayHost

pub mod drawing;
pub mod host;
pub mod panel;
pub mod view;

pub use host::{MacOverlayHost, OverlaySurface};
