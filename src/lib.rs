//! Pharma Desk Library
//!
//! Record tables for a pharmacy admin desk: a headless search, sort and
//! pagination engine (`table`), the inventory, order and customer records
//! (`domain`), persisted settings, and an optional GPUI front end behind the
//! `gui` feature.

pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod logging;
pub mod table;
pub mod utils;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod components;
#[cfg(feature = "gui")]
pub mod theme;
