//! Platform-agnostic half of shellbind.
//!
//! Holds everything about the shell32 binding that does not need Windows
//! to build or test: UTF-16 and `BOOL` marshaling, the `#[repr(C)]`
//! structure layouts, `ShellExecuteW` error mapping, and the [`Shell`]
//! wrapper over the [`Shell32`] entry-point trait.

pub mod api;
pub mod browse;
pub mod config;
pub mod execute;
pub mod handle;
pub mod log;
pub mod notify;
pub mod point;
pub mod shell;
pub mod wide;

pub use api::Shell32;
pub use browse::{BrowseInfo, BrowseOptions};
pub use execute::{ExecuteError, ShowCommand};
pub use handle::{HDrop, HIcon, HInstance, Hwnd, IdList};
pub use notify::{Balloon, BalloonKind, NotifyIcon, NotifyIconData, NotifyMessage};
pub use point::{DropPoint, Point};
pub use shell::{DRAG_QUERY_COUNT, DropReport, DropSession, Shell};

/// A boxed error type for platform operations outside the binding itself
/// (window creation, icon loading).
pub type ShellResult<T> = Result<T, Box<dyn std::error::Error>>;
