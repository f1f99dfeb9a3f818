//! A resource monitor TUI: per-core CPU usage, RAM/swap, mounted disks and a
//! paged process list, laid out according to the terminal size.

pub mod collector;
pub mod config;
pub mod errors;
pub mod event;
pub mod tui;
pub mod types;

pub use errors::{Result, SysmonError};
