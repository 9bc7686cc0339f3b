//! Helper Utilities

mod fs;

pub use fs::*;
