//! The boundary between the configuration and the host runtime.
//!
//! Everything tatami knows about the live window manager comes through
//! the [`Runtime`] trait: an ordered snapshot of the group registry, the
//! current screen and window, and the two imperative commands the policy
//! logic is allowed to issue. The host implements this trait; tatami
//! also ships [`DummyRuntime`], an in-memory implementation used for
//! testing and for dry-running a configuration.

use std::collections::VecDeque;

use thiserror::Error;

use crate::core::group::GroupView;
use crate::core::ring::{Ring, Selector};
use crate::core::types::{ScreenId, WindowId};

/// An error reported by the host runtime while executing a command.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The named group is not known to the runtime.
    #[error("unknown group {0}")]
    UnknownGroup(String),

    /// The given window is not tracked by the runtime.
    #[error("unknown window {0}")]
    UnknownWindow(WindowId),

    /// Any other error surfaced by the host backend.
    #[error("backend error: {0}")]
    Backend(String),
}

/// The result type used at the runtime boundary.
pub type Result<T> = ::core::result::Result<T, RuntimeError>;

/// The surface the host runtime exposes to the configuration layer.
///
/// Commands are imperative and not retried here; a failure propagates
/// to the caller untouched.
pub trait Runtime {
    /// A snapshot of the group registry, in the same stable order as the
    /// configured roster.
    fn groups(&self) -> Vec<GroupView>;

    /// The screen currently holding input focus.
    fn current_screen(&self) -> ScreenId;

    /// The window currently holding input focus, if any.
    fn current_window(&self) -> Option<WindowId>;

    /// Moves a window into the named group.
    fn move_window_to_group(&mut self, window: WindowId, group: &str) -> Result<()>;

    /// Makes the named group the visible group on the given screen.
    ///
    /// This must not toggle: switching to a group that is already
    /// visible on the screen is a no-op, not a switch away.
    fn switch_to_group(&mut self, screen: ScreenId, group: &str) -> Result<()>;
}

/// A command issued against a [`DummyRuntime`], recorded for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A `move_window_to_group` call.
    MoveWindow {
        /// The window that was moved.
        window: WindowId,
        /// The group it was moved to.
        group: String,
    },
    /// A `switch_to_group` call.
    SwitchGroup {
        /// The screen the switch was issued on.
        screen: ScreenId,
        /// The group that was made visible.
        group: String,
    },
}

/// The state of a single group inside a [`DummyRuntime`].
#[derive(Debug, Clone, Default)]
pub struct GroupState {
    name: String,
    windows: VecDeque<WindowId>,
}

impl GroupState {
    /// Creates a new, empty group.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            windows: VecDeque::new(),
        }
    }

    /// Creates a group already containing the given windows.
    pub fn with_windows<S, W>(name: S, windows: W) -> Self
    where
        S: Into<String>,
        W: IntoIterator<Item = WindowId>,
    {
        Self {
            name: name.into(),
            windows: windows.into_iter().collect(),
        }
    }
}

/// A runtime that does not interface with any display server at all,
/// and should mainly be used for testing.
///
/// `DummyRuntime` tracks groups and their windows in memory and records
/// every command issued against it, so a test (or a dry run of a
/// configuration) can assert on exactly what the policy layer did.
#[derive(Debug, Clone, Default)]
pub struct DummyRuntime {
    groups: Ring<GroupState>,
    current_screen: ScreenId,
    current_window: Option<WindowId>,
    commands: Vec<Command>,
}

impl DummyRuntime {
    /// Creates a new DummyRuntime with the given groups; the first group
    /// starts out visible.
    pub fn new<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = GroupState>,
    {
        let mut groups: Ring<GroupState> = groups.into_iter().collect();
        if !groups.is_empty() {
            groups.set_focused(0);
        }
        Self {
            groups,
            current_screen: 0,
            current_window: None,
            commands: Vec::new(),
        }
    }

    /// Sets the screen reported by `current_screen`.
    pub fn set_current_screen(&mut self, screen: ScreenId) {
        self.current_screen = screen;
    }

    /// Sets the window reported by `current_window`.
    pub fn set_current_window(&mut self, window: Option<WindowId>) {
        self.current_window = window;
    }

    /// Adds a window to the named group directly, without recording a
    /// command.
    pub fn add_window(&mut self, group: &str, window: WindowId) {
        if let Some((_, g)) = self.groups.element_by_mut(|g| g.name == group) {
            g.windows.push_back(window);
        }
    }

    /// Removes a window from whatever group holds it.
    ///
    /// Returns the index of the group it was removed from and the number
    /// of windows remaining in that group, mirroring what a host runtime
    /// reports alongside a window-killed event.
    pub fn kill_window(&mut self, window: WindowId) -> Option<(usize, usize)> {
        let (idx, group) = self
            .groups
            .element_by_mut(|g| g.windows.contains(&window))?;
        group.windows.retain(|w| *w != window);
        if self.current_window == Some(window) {
            self.current_window = None;
        }
        Some((idx, group.windows.len()))
    }

    /// The name of the group currently visible.
    pub fn visible_group(&self) -> Option<&str> {
        self.groups.focused().map(|g| g.name.as_str())
    }

    /// The commands recorded so far, in issue order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the log empty.
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}

impl Runtime for DummyRuntime {
    fn groups(&self) -> Vec<GroupView> {
        self.groups
            .iter()
            .map(|g| GroupView::new(g.name.clone(), g.windows.len()))
            .collect()
    }

    fn current_screen(&self) -> ScreenId {
        self.current_screen
    }

    fn current_window(&self) -> Option<WindowId> {
        self.current_window
    }

    fn move_window_to_group(&mut self, window: WindowId, group: &str) -> Result<()> {
        // resolve the target before touching the source group, so a
        // failed move leaves the window where it was
        let Some(target) = self.groups.index(Selector::Condition(&|g| g.name == group)) else {
            return Err(RuntimeError::UnknownGroup(group.into()));
        };

        if let Some((_, source)) = self.groups.element_by_mut(|g| g.windows.contains(&window)) {
            source.windows.retain(|w| *w != window);
        }
        self.groups[target].windows.push_back(window);

        self.commands.push(Command::MoveWindow {
            window,
            group: group.into(),
        });
        Ok(())
    }

    fn switch_to_group(&mut self, screen: ScreenId, group: &str) -> Result<()> {
        let Some(idx) = self.groups.index(Selector::Condition(&|g| g.name == group)) else {
            return Err(RuntimeError::UnknownGroup(group.into()));
        };

        // non-toggling: switching to the visible group stays put
        self.groups.set_focused(idx);

        self.commands.push(Command::SwitchGroup {
            screen,
            group: group.into(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runtime() -> DummyRuntime {
        DummyRuntime::new(vec![
            GroupState::new("term"),
            GroupState::with_windows("web", [1, 2]),
            GroupState::new("chat"),
        ])
    }

    #[test]
    fn snapshot_order_and_counts() {
        let rt = runtime();
        let views = rt.groups();

        assert_eq!(views.len(), 3);
        assert_eq!(views[1].name(), "web");
        assert_eq!(views[1].window_count(), 2);
        assert!(views[0].is_empty());
    }

    #[test]
    fn move_window_between_groups() {
        let mut rt = runtime();
        rt.move_window_to_group(1, "chat").unwrap();

        let views = rt.groups();
        assert_eq!(views[1].window_count(), 1);
        assert_eq!(views[2].window_count(), 1);
        assert_eq!(
            rt.commands(),
            &[Command::MoveWindow {
                window: 1,
                group: "chat".into()
            }]
        );
    }

    #[test]
    fn move_to_unknown_group_errors() {
        let mut rt = runtime();

        let err = rt.move_window_to_group(1, "mail").unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownGroup(g) if g == "mail"));

        // the failed move must not disturb the source group
        assert_eq!(rt.groups()[1].window_count(), 2);
        assert!(rt.commands().is_empty());
    }

    #[test]
    fn kill_window_reports_group_and_remaining() {
        let mut rt = runtime();

        assert_eq!(rt.kill_window(1), Some((1, 1)));
        assert_eq!(rt.kill_window(2), Some((1, 0)));
        assert_eq!(rt.kill_window(99), None);
    }

    #[test]
    fn switch_is_not_a_toggle() {
        let mut rt = runtime();
        rt.switch_to_group(0, "web").unwrap();
        rt.switch_to_group(0, "web").unwrap();

        assert_eq!(rt.visible_group(), Some("web"));
    }
}
