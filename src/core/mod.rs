//! Core types used throughout tatami.
//!
//! This module exports the [`Ring`] collection that backs the ordered
//! group registry, the [`Group`] declaration and [`GroupRoster`] types,
//! and the validated [`WindowAttrs`] snapshot of a window's properties.

pub mod group;
pub mod ring;
pub mod types;
pub mod window;

pub use group::{Group, GroupRoster, GroupView};
pub use ring::{Ring, Selector};
pub use window::WindowAttrs;
