//! Components - Reusable UI Components
//!
//! GPUI elements that draw table views. They hold no data of their own.

pub mod composite;
pub mod primitives;
