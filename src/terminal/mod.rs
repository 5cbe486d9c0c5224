//! Shared terminal utilities.
//!
//! Box drawing and styled output.

mod output;

pub use output::*;
