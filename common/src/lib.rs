//! Shared presentation pieces for `ipconv`: the run configuration and the status-line
//! macros used by the command handlers.

pub mod config;
mod macros;

#[doc(hidden)]
pub use tracing;

/// Target for lines printed verbatim, without a status prefix.
pub const PRINT_TARGET: &str = "ipconv::print";

/// Target for [`success!`] lines.
pub const SUCCESS_TARGET: &str = "ipconv::success";
