//! Events received from the host runtime, and the actions taken in
//! response.
//!
//! The host hands over loosely-typed payloads; [`Event::from_raw`]
//! validates them into tagged event structs at the boundary, so the
//! decision logic never sees a partially-filled payload.

use crate::core::types::{ScreenId, WindowId};
use crate::core::window::WindowAttrs;
use crate::runtime::Runtime;
use crate::{Result, TatamiError};

/// An event payload as delivered by the host runtime.
///
/// Fields the host may fail to supply are optional here and checked
/// during validation.
#[derive(Debug, Clone)]
pub enum RawEvent {
    /// The runtime has finished initializing.
    Startup,
    /// A new top-level window was created.
    WindowCreated {
        /// The new window.
        window: Option<WindowId>,
        /// Its attributes at creation time.
        attrs: Option<WindowAttrs>,
    },
    /// A window was destroyed.
    WindowKilled {
        /// The window that was destroyed.
        window: Option<WindowId>,
        /// The index of the group that contained it.
        group: Option<usize>,
    },
}

/// A validated window-created event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowCreated {
    pub(crate) window: WindowId,
    pub(crate) attrs: WindowAttrs,
}

impl WindowCreated {
    /// The newly created window.
    pub fn window(&self) -> WindowId {
        self.window
    }

    /// The new window's attributes.
    pub fn attrs(&self) -> &WindowAttrs {
        &self.attrs
    }
}

/// A validated window-killed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowKilled {
    pub(crate) window: WindowId,
    pub(crate) group: usize,
}

impl WindowKilled {
    /// The window that was destroyed.
    pub fn window(&self) -> WindowId {
        self.window
    }

    /// The index of the group that contained the window.
    pub fn group(&self) -> usize {
        self.group
    }
}

/// A validated event, ready for the decision logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The runtime has finished initializing.
    Startup,
    /// A new top-level window was created.
    WindowCreated(WindowCreated),
    /// A window was destroyed.
    WindowKilled(WindowKilled),
}

impl Event {
    /// Validates a raw payload into a tagged event.
    ///
    /// A missing field is a [`TatamiError::MalformedEvent`], never a
    /// panic.
    pub fn from_raw(raw: RawEvent) -> Result<Event> {
        match raw {
            RawEvent::Startup => Ok(Event::Startup),
            RawEvent::WindowCreated { window, attrs } => {
                let window = window
                    .ok_or_else(|| TatamiError::MalformedEvent("window-created without id".into()))?;
                let attrs = attrs.ok_or_else(|| {
                    TatamiError::MalformedEvent("window-created without attributes".into())
                })?;
                Ok(Event::WindowCreated(WindowCreated { window, attrs }))
            }
            RawEvent::WindowKilled { window, group } => {
                let window = window
                    .ok_or_else(|| TatamiError::MalformedEvent("window-killed without id".into()))?;
                let group = group.ok_or_else(|| {
                    TatamiError::MalformedEvent("window-killed without group index".into())
                })?;
                Ok(Event::WindowKilled(WindowKilled { window, group }))
            }
        }
    }
}

/// A command the policy layer has decided to issue against the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move the window into the named group.
    MoveWindowToGroup {
        /// The window to move.
        window: WindowId,
        /// The group to move it to.
        group: String,
    },
    /// Make the named group visible on the given screen.
    SwitchToGroup {
        /// The screen to switch on.
        screen: ScreenId,
        /// The group to make visible.
        group: String,
    },
}

impl Action {
    /// Applies the action against the runtime. Failures propagate
    /// untouched; no retries happen at this level.
    pub(crate) fn apply<R: Runtime>(&self, rt: &mut R) -> Result<()> {
        match self {
            Action::MoveWindowToGroup { window, group } => {
                rt.move_window_to_group(*window, group)?;
            }
            Action::SwitchToGroup { screen, group } => {
                rt.switch_to_group(*screen, group)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_raw_events_convert() {
        let ev = Event::from_raw(RawEvent::WindowKilled {
            window: Some(7),
            group: Some(2),
        })
        .unwrap();

        assert_eq!(ev, Event::WindowKilled(WindowKilled { window: 7, group: 2 }));
    }

    #[test]
    fn missing_fields_are_malformed() {
        let err = Event::from_raw(RawEvent::WindowCreated {
            window: Some(7),
            attrs: None,
        })
        .unwrap_err();

        assert!(matches!(err, TatamiError::MalformedEvent(_)));

        let err = Event::from_raw(RawEvent::WindowKilled {
            window: None,
            group: Some(0),
        })
        .unwrap_err();

        assert!(matches!(err, TatamiError::MalformedEvent(_)));
    }
}
