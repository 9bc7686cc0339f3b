//! Application Layer
//!
//! App initialization, window management and the page shell.

pub mod application;
pub mod navigation;
pub mod workspace;
