//! A validated snapshot of a window's attributes.
//!
//! The host runtime hands tatami loosely-typed window payloads; they are
//! converted into a [`WindowAttrs`] at the event boundary so the decision
//! logic only ever sees owned, validated fields.

/// The attributes of a window that matching rules can inspect.
///
/// Mirrors the ICCCM `WM_CLASS` convention: `instance` is the specific
/// instance name, `class` the general application class. Both are matched
/// by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowAttrs {
    pub(crate) instance: String,
    pub(crate) class: String,
    pub(crate) title: String,
    pub(crate) transient: bool,
}

impl WindowAttrs {
    /// Creates a new set of attributes from an (instance, class) pair.
    pub fn new<S: Into<String>>(instance: S, class: S) -> Self {
        Self {
            instance: instance.into(),
            class: class.into(),
            title: String::new(),
            transient: false,
        }
    }

    /// Sets the window title.
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    /// Marks the window as transient for another window.
    pub fn transient(mut self, transient: bool) -> Self {
        self.transient = transient;
        self
    }

    /// The instance portion of the window's class property.
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// The class portion of the window's class property.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// The window's current title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the window is transient (a dialog or popup).
    pub fn is_transient(&self) -> bool {
        self.transient
    }
}
