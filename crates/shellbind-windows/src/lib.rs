//! Windows implementation of the shellbind entry points.
//!
//! Everything here calls into the OS, so the crate is empty on other
//! platforms.
#![cfg(windows)]

/// Ctrl+C handling for message-pump commands.
pub mod ctrl_c;

/// Top-level window that receives drop and tray callbacks.
pub mod host;

/// Icon destruction and stock icons.
pub mod icon;

mod message_pump;

/// `shell32.dll` entry points.
pub mod native;

pub use host::{HostMessage, HostWindow, post_quit};
pub use icon::{application_icon, destroy_icon};
pub use native::{Native, shell};
