//! # Tatami - a tiling window manager configuration, in source
//!
//! Tatami is the configuration and policy layer of a tiling window manager.
//! The host runtime owns the hard parts: layout algorithms, protocol
//! plumbing, input handling, bar rendering and the event loop. What tatami
//! owns is everything the runtime consumes at startup, and the handful of
//! policy decisions a configuration is allowed to make:
//!
//! - the static configuration tables: groups, keybindings, layout
//!   parameters, status bar widgets, and floating-window rules, assembled
//!   with [`Config`] and its builder;
//! - the event callbacks the runtime invokes: [`Callbacks`] answers the
//!   window-created, window-killed and startup events, deciding which group
//!   a new window belongs to, and which group becomes visible when a group
//!   loses its last window.
//!
//! The runtime itself is reached only through the [`Runtime`] trait, which
//! exposes an ordered group registry, the current screen and window, and
//! two imperative commands (move a window to a group, switch the visible
//! group on a screen). Everything tatami decides is expressed against that
//! surface, which also makes the policy logic testable without a running
//! display server.
//!
//! ## Usage
//!
//! A configuration is a Rust program, dwm style: declare your tables,
//! validate them, and hand the resulting `Config` and `Callbacks` to the
//! runtime. See `src/bin/main.rs` for a complete worked configuration.
//!
//! [`Runtime`]: crate::runtime::Runtime

#![warn(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs
)]

pub mod bindings;
pub mod config;
pub mod core;
pub mod hooks;
pub mod runtime;
pub mod util;

pub use crate::core::types;
#[doc(inline)]
pub use crate::config::{Config, ConfigBuilder};
#[doc(inline)]
pub use crate::hooks::Callbacks;

use std::io;

use thiserror::Error;

use crate::runtime::RuntimeError;

/// Everything that could possibly go wrong while assembling a
/// configuration or answering a runtime event.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TatamiError {
    /// An error reported by the host runtime while executing a command.
    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    /// Unable to spawn an external process.
    #[error("error while running program: {0}")]
    SpawnProc(String),

    /// A keybinding string could not be parsed.
    #[error("could not parse keybinding: {0}")]
    ParseKeybind(String),

    /// A reference to a group not present in the configuration.
    #[error("unknown group {0}")]
    UnknownGroup(String),

    /// An event from the runtime was missing required fields.
    #[error("malformed event: {0}")]
    MalformedEvent(String),

    /// A name conflict in the configured groups, layouts or keybinds.
    #[error("namespace conflict: {0}")]
    NamespaceConflict(String),

    /// One or more configuration invariants was not upheld.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<io::Error> for TatamiError {
    fn from(e: io::Error) -> TatamiError {
        TatamiError::SpawnProc(e.to_string())
    }
}

/// The general result type used by tatami.
pub type Result<T> = ::core::result::Result<T, TatamiError>;
