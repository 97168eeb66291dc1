//! Status bar widget declarations.
//!
//! The bar is rendered by the host runtime; a config only declares which
//! widgets appear on it, in what order, and with what parameters.

use crate::core::types::Color;

/// Where the bar is anchored on its screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarPosition {
    /// Along the top edge.
    Top,
    /// Along the bottom edge.
    Bottom,
}

/// A single widget on the status bar.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Widget {
    /// One box per group, highlighting the visible one.
    GroupBox {
        /// The highlight color of the visible group's box.
        highlight: Color,
    },
    /// The name of the layout the visible group is using.
    CurrentLayout,
    /// The title of the focused window.
    WindowName,
    /// An expanding gap between adjacent widgets.
    Spacer,
    /// A system tray.
    Systray,
    /// A clock rendered with a strftime-style format string.
    Clock {
        /// The strftime format string.
        format: String,
    },
    /// Battery charge, warning below the given percentage.
    Battery {
        /// The percentage below which the widget turns urgent.
        low_threshold: u8,
    },
}

/// The declaration of a status bar.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarSpec {
    pub(crate) position: BarPosition,
    pub(crate) height: u32,
    pub(crate) widgets: Vec<Widget>,
}

impl BarSpec {
    /// Creates a bar declaration with the given widgets, left to right.
    pub fn new<W>(position: BarPosition, height: u32, widgets: W) -> Self
    where
        W: IntoIterator<Item = Widget>,
    {
        Self {
            position,
            height,
            widgets: widgets.into_iter().collect(),
        }
    }

    /// The edge the bar is anchored to.
    pub fn position(&self) -> BarPosition {
        self.position
    }

    /// The height of the bar, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The widgets on the bar, left to right.
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }
}
