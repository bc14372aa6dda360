//! Shared terminal utilities.
//!
//! Box drawing, raw mode management, and styled output.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
