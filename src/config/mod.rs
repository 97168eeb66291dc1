//! Types for assembling a window manager configuration.

pub mod config;
pub mod layout;
pub mod rules;
pub mod widget;

pub use config::{no_checks, Config, ConfigBuilder};
pub use layout::{LayoutKind, LayoutSpec};
pub use rules::{Directive, MatchRule, Parameter};
pub use widget::{BarPosition, BarSpec, Widget};
