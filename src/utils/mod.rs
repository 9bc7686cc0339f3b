//! Utilities

mod format;

pub use format::*;
