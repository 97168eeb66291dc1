//! Layout parameter specifications.
//!
//! The layout algorithms themselves live in the host runtime; a config
//! only declares which layouts exist, under what names groups can refer
//! to them, and the parameters the host should run them with.

/// The family of layout a [`LayoutSpec`] configures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutKind {
    /// A simple floating style that does not enforce any rules.
    Floating,
    /// A dynamically tiled style with a master region and satellite
    /// windows, similar to XMonad or Qtile.
    DTiled,
    /// A monocle style where the focused window fills the screen.
    Max,
    /// A layout implemented by the host under the given name.
    Other(String),
}

impl LayoutKind {
    /// Construct the `LayoutKind::Other` variant.
    pub fn other<S: Into<String>>(name: S) -> LayoutKind {
        LayoutKind::Other(name.into())
    }

    /// Check whether self is floating.
    ///
    /// Returns false if it is `Self::Other(_)`, even if the host-side
    /// layout happens to float its windows.
    pub fn is_floating(&self) -> bool {
        matches!(self, Self::Floating)
    }
}

/// A named set of layout parameters.
///
/// Groups refer to layouts by the spec's name; validation checks that
/// every referenced name is declared.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSpec {
    pub(crate) name: String,
    pub(crate) kind: LayoutKind,
    pub(crate) ratio: f32,
    pub(crate) gap_px: u32,
    pub(crate) border_px: u32,
}

impl LayoutSpec {
    /// Creates a new spec with default parameters.
    pub fn new<S: Into<String>>(name: S, kind: LayoutKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ratio: 0.5,
            gap_px: 0,
            border_px: 2,
        }
    }

    /// Sets the master region ratio.
    pub fn ratio(mut self, ratio: f32) -> Self {
        self.ratio = ratio;
        self
    }

    /// Sets the gap between windows, in pixels.
    pub fn gap_px(mut self, gap_px: u32) -> Self {
        self.gap_px = gap_px;
        self
    }

    /// Sets the window border thickness, in pixels.
    pub fn border_px(mut self, border_px: u32) -> Self {
        self.border_px = border_px;
        self
    }

    /// The name groups refer to this layout by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The layout family being configured.
    pub fn kind(&self) -> &LayoutKind {
        &self.kind
    }
}
