//! Event callbacks and the policy decisions behind them.
//!
//! The host runtime invokes three callbacks: startup, window created and
//! window killed. [`Callbacks`] implements all three on top of two pure
//! decision functions:
//!
//! - [`fallback_group`]: when a group loses its last window, pick the
//!   group that becomes visible in its place;
//! - [`auto_placement`]: when a window is created, pick the group whose
//!   rules claim it, if any.
//!
//! Both are stateless functions of their event argument and the
//! configuration captured at startup; every side effect they imply is
//! expressed as an [`Action`] and applied through the [`Runtime`] trait.

pub mod event;

pub use event::{Action, Event, RawEvent, WindowCreated, WindowKilled};

use std::collections::HashMap;

use custom_debug_derive::Debug;
use strum::EnumIter;
use tracing::{debug, warn};

use crate::config::Config;
use crate::core::group::{GroupRoster, GroupView};
use crate::core::window::WindowAttrs;
use crate::runtime::Runtime;
use crate::util;
use crate::{Result, TatamiError};

/// The callback a user hook attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum HookPoint {
    /// After the runtime has initialized and the startup policy has run.
    Startup,
    /// After a new window has been placed.
    WindowCreated,
    /// After a destroyed window's group fallback has been handled.
    WindowKilled,
}

/// Arbitrary user code run at a [`HookPoint`], after the built-in
/// policy for that point.
///
/// A `Hook` is just a boxed [`FnMut`] receiving the runtime and the
/// configuration.
pub type Hook<R> = Box<dyn FnMut(&mut R, &Config)>;

/// User hooks, grouped by the point they run at.
///
/// Clone is not implemented for this type since hooks are not Clone.
#[derive(Debug)]
pub struct Hooks<R: Runtime> {
    #[debug(skip)]
    hooks: HashMap<HookPoint, Vec<Hook<R>>>,
}

impl<R: Runtime> Default for Hooks<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Runtime> Hooks<R> {
    /// Creates an empty set of hooks.
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }

    /// Registers a hook at the given point.
    ///
    /// Hooks at the same point run in registration order.
    pub fn insert<F>(&mut self, point: HookPoint, hook: F)
    where
        F: FnMut(&mut R, &Config) + 'static,
    {
        self.hooks.entry(point).or_default().push(Box::new(hook));
    }

    pub(crate) fn run(&mut self, point: HookPoint, rt: &mut R, config: &Config) {
        if let Some(hooks) = self.hooks.get_mut(&point) {
            for hook in hooks.iter_mut() {
                hook(rt, config);
            }
        }
    }
}

/// Picks the group to make visible after the group at `killed` loses a
/// window.
///
/// Returns `None` if the group still has windows: nothing needs to
/// change, no matter how often this is asked. Otherwise the nearest
/// preceding non-empty group is chosen, falling back to index 0
/// unconditionally (even if group 0 is itself empty).
pub fn fallback_group(groups: &[GroupView], killed: usize) -> Option<usize> {
    let killed_view = groups.get(killed)?;
    if !killed_view.is_empty() {
        return None;
    }

    Some(
        (0..killed)
            .rev()
            .find(|&i| !groups[i].is_empty())
            .unwrap_or(0),
    )
}

/// Picks the group a newly created window should be placed in.
///
/// Groups are consulted in declaration order and the first group with a
/// rule matching the window wins; `None` means the window stays where
/// the runtime put it.
pub fn auto_placement(roster: &GroupRoster, attrs: &WindowAttrs) -> Option<usize> {
    roster.iter().position(|g| g.matches(attrs))
}

/// The callback functions exposed to the host runtime.
///
/// A `Callbacks` borrows the validated [`Config`] for the life of the
/// process; it holds no other state, so every invocation is a pure
/// function of the event and the configuration, plus the commands it
/// issues against the runtime.
#[derive(Debug)]
pub struct Callbacks<'cfg, R: Runtime> {
    config: &'cfg Config,
    hooks: Hooks<R>,
}

impl<'cfg, R: Runtime> Callbacks<'cfg, R> {
    /// Creates the callbacks over a validated configuration.
    pub fn new(config: &'cfg Config) -> Self {
        Self {
            config,
            hooks: Hooks::new(),
        }
    }

    /// Creates the callbacks with user hooks attached.
    pub fn with_hooks(config: &'cfg Config, hooks: Hooks<R>) -> Self {
        Self { config, hooks }
    }

    /// The configuration the callbacks were registered with.
    pub fn config(&self) -> &Config {
        self.config
    }

    /// Validates a raw payload and routes it to the matching callback.
    pub fn dispatch(&mut self, rt: &mut R, raw: RawEvent) -> Result<()> {
        match Event::from_raw(raw)? {
            Event::Startup => self.on_startup(rt),
            Event::WindowCreated(ev) => self.on_window_created(rt, &ev),
            Event::WindowKilled(ev) => self.on_window_killed(rt, &ev),
        }
    }

    /// The startup callback: spawns the autostart commands, then runs
    /// user hooks.
    ///
    /// A command that fails to spawn is logged and skipped; one missing
    /// program should not take the session down with it.
    pub fn on_startup(&mut self, rt: &mut R) -> Result<()> {
        for cmd in self.config.autostart() {
            debug!("autostart: {}", cmd);
            if let Err(e) = util::run_command_line(cmd) {
                warn!("could not autostart '{}': {}", cmd, e);
            }
        }

        self.hooks.run(HookPoint::Startup, rt, self.config);
        Ok(())
    }

    /// The window-created callback: applies auto-placement, then runs
    /// user hooks.
    ///
    /// If a group claims the window, it is moved there and that group is
    /// made visible on its own screen. At most one group is activated.
    pub fn on_window_created(&mut self, rt: &mut R, ev: &WindowCreated) -> Result<()> {
        if let Some(idx) = auto_placement(self.config.groups(), ev.attrs()) {
            if let Some(group) = self.config.groups().get(idx) {
                debug!(
                    "window {} ({}) claimed by group {}",
                    ev.window(),
                    ev.attrs().class(),
                    group.name()
                );

                let actions = [
                    Action::MoveWindowToGroup {
                        window: ev.window(),
                        group: group.name().into(),
                    },
                    Action::SwitchToGroup {
                        screen: group.screen(),
                        group: group.name().into(),
                    },
                ];
                for action in &actions {
                    action.apply(rt)?;
                }
            }
        }

        self.hooks.run(HookPoint::WindowCreated, rt, self.config);
        Ok(())
    }

    /// The window-killed callback: applies group fallback, then runs
    /// user hooks.
    ///
    /// Issues exactly one switch on the current screen when the killed
    /// window was the last one in its group, and nothing otherwise.
    pub fn on_window_killed(&mut self, rt: &mut R, ev: &WindowKilled) -> Result<()> {
        let views = rt.groups();
        if ev.group() >= views.len() {
            return Err(TatamiError::MalformedEvent(format!(
                "group index {} out of range ({} groups)",
                ev.group(),
                views.len()
            )));
        }

        if let Some(target) = fallback_group(&views, ev.group()) {
            debug!(
                "group {:?} emptied, falling back to {:?}",
                views[ev.group()],
                views[target]
            );

            let screen = rt.current_screen();
            Action::SwitchToGroup {
                screen,
                group: views[target].name().into(),
            }
            .apply(rt)?;
        }

        self.hooks.run(HookPoint::WindowKilled, rt, self.config);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::config::rules::MatchRule;
    use crate::config::no_checks;
    use crate::core::group::Group;
    use crate::runtime::{Command, DummyRuntime, GroupState};

    fn config() -> Config {
        Config::builder()
            .groups(GroupRoster::new(vec![
                Group::new("term", 0, vec!["tall".into()]),
                Group::new("web", 0, vec!["tall".into()])
                    .with_rules([MatchRule::class("firefox")]),
                Group::new("chat", 1, vec!["tall".into()])
                    .with_rules([MatchRule::class("discord"), MatchRule::class("firefox")]),
            ]))
            .finish(no_checks)
            .unwrap()
    }

    fn runtime(counts: [usize; 3]) -> DummyRuntime {
        let names = ["term", "web", "chat"];
        DummyRuntime::new(names.iter().zip(counts).map(|(name, n)| {
            GroupState::with_windows(*name, (0..n as u64).map(|i| i + 100))
        }))
    }

    fn killed(window: u64, group: usize) -> RawEvent {
        RawEvent::WindowKilled {
            window: Some(window),
            group: Some(group),
        }
    }

    #[test_log::test]
    fn fallback_noop_when_group_not_emptied() {
        let config = config();
        let mut cb = Callbacks::new(&config);
        // group 1 still has a window left after the kill
        let mut rt = runtime([0, 1, 0]);

        // repeated invocations stay a no-op
        for _ in 0..3 {
            cb.dispatch(&mut rt, killed(200, 1)).unwrap();
        }

        assert!(rt.commands().is_empty());
    }

    #[test_log::test]
    fn fallback_switches_to_nearest_preceding_nonempty() {
        let config = config();
        let mut cb = Callbacks::new(&config);
        let mut rt = runtime([0, 1, 0]);

        cb.dispatch(&mut rt, killed(200, 2)).unwrap();

        assert_eq!(
            rt.commands(),
            &[Command::SwitchGroup {
                screen: 0,
                group: "web".into()
            }]
        );
    }

    #[test]
    fn fallback_defaults_to_first_group_even_if_empty() {
        let config = config();
        let mut cb = Callbacks::new(&config);
        // every other group is empty: [term(empty), web(empty), chat(just emptied)]
        let mut rt = runtime([0, 0, 0]);

        cb.dispatch(&mut rt, killed(200, 2)).unwrap();

        assert_eq!(
            rt.commands(),
            &[Command::SwitchGroup {
                screen: 0,
                group: "term".into()
            }]
        );
    }

    #[test]
    fn fallback_from_first_group_reselects_it() {
        let config = config();
        let mut cb = Callbacks::new(&config);
        let mut rt = runtime([0, 0, 0]);

        cb.dispatch(&mut rt, killed(100, 0)).unwrap();

        // the backward scan is empty, so the terminal rule reselects
        // group 0 and the handler still issues exactly one switch
        assert_eq!(
            rt.commands(),
            &[Command::SwitchGroup {
                screen: 0,
                group: "term".into()
            }]
        );
    }

    #[test]
    fn fallback_switch_happens_on_current_screen() {
        let config = config();
        let mut cb = Callbacks::new(&config);
        let mut rt = runtime([1, 0, 0]);
        rt.set_current_screen(1);

        cb.dispatch(&mut rt, killed(200, 2)).unwrap();

        assert_eq!(
            rt.commands(),
            &[Command::SwitchGroup {
                screen: 1,
                group: "term".into()
            }]
        );
    }

    #[test]
    fn fallback_rejects_out_of_range_group() {
        let config = config();
        let mut cb = Callbacks::new(&config);
        let mut rt = runtime([0, 0, 0]);

        let err = cb.dispatch(&mut rt, killed(200, 7)).unwrap_err();

        assert!(matches!(err, TatamiError::MalformedEvent(_)));
        assert!(rt.commands().is_empty());
    }

    fn created(window: u64, class: &str) -> RawEvent {
        RawEvent::WindowCreated {
            window: Some(window),
            attrs: Some(WindowAttrs::new(class.to_lowercase().as_str(), class)),
        }
    }

    #[test_log::test]
    fn placement_first_declared_match_wins() {
        let config = config();
        let mut cb = Callbacks::new(&config);
        let mut rt = runtime([0, 0, 0]);

        // both "web" and "chat" match firefox; "web" is declared first
        cb.dispatch(&mut rt, created(42, "firefox")).unwrap();

        assert_eq!(
            rt.commands(),
            &[
                Command::MoveWindow {
                    window: 42,
                    group: "web".into()
                },
                Command::SwitchGroup {
                    screen: 0,
                    group: "web".into()
                },
            ]
        );
    }

    #[test]
    fn placement_activates_on_the_groups_own_screen() {
        let config = config();
        let mut cb = Callbacks::new(&config);
        let mut rt = runtime([0, 0, 0]);

        cb.dispatch(&mut rt, created(42, "discord")).unwrap();

        assert_eq!(
            rt.commands(),
            &[
                Command::MoveWindow {
                    window: 42,
                    group: "chat".into()
                },
                Command::SwitchGroup {
                    screen: 1,
                    group: "chat".into()
                },
            ]
        );
    }

    #[test]
    fn placement_no_match_is_a_noop() {
        let config = config();
        let mut cb = Callbacks::new(&config);
        let mut rt = runtime([1, 1, 1]);

        cb.dispatch(&mut rt, created(42, "gimp")).unwrap();

        assert!(rt.commands().is_empty());
    }

    #[test]
    fn user_hooks_run_after_policy() {
        let config = config();
        let seen = Rc::new(RefCell::new(0usize));

        let mut hooks = Hooks::new();
        let counter = Rc::clone(&seen);
        hooks.insert(HookPoint::WindowKilled, move |rt: &mut DummyRuntime, _| {
            // policy already ran by the time the hook fires
            *counter.borrow_mut() = rt.commands().len();
        });

        let mut cb = Callbacks::with_hooks(&config, hooks);
        let mut rt = runtime([0, 1, 0]);

        cb.dispatch(&mut rt, killed(200, 2)).unwrap();

        assert_eq!(*seen.borrow(), 1);
    }

    #[test]
    fn startup_runs_user_hooks() {
        let config = config();
        let fired = Rc::new(RefCell::new(false));

        let mut hooks = Hooks::new();
        let flag = Rc::clone(&fired);
        hooks.insert(HookPoint::Startup, move |_: &mut DummyRuntime, _| {
            *flag.borrow_mut() = true;
        });

        let mut cb = Callbacks::with_hooks(&config, hooks);
        let mut rt = runtime([0, 0, 0]);

        cb.dispatch(&mut rt, RawEvent::Startup).unwrap();

        assert!(*fired.borrow());
    }

    #[test]
    fn pure_fallback_properties() {
        let views = |counts: &[usize]| -> Vec<GroupView> {
            counts
                .iter()
                .enumerate()
                .map(|(i, n)| GroupView::new(format!("g{}", i), *n))
                .collect()
        };

        // not the last window: no switch, regardless of call count
        assert_eq!(fallback_group(&views(&[0, 0, 2]), 2), None);

        // nearest preceding non-empty group wins
        assert_eq!(fallback_group(&views(&[1, 2, 0]), 2), Some(1));
        assert_eq!(fallback_group(&views(&[3, 0, 0]), 2), Some(0));

        // no preceding non-empty group: index 0 unconditionally
        assert_eq!(fallback_group(&views(&[0, 0, 0]), 2), Some(0));
        assert_eq!(fallback_group(&views(&[0, 0, 0]), 0), Some(0));

        // groups after the killed index never count
        assert_eq!(fallback_group(&views(&[0, 0, 5]), 1), Some(0));
    }
}
