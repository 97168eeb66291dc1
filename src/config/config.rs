//! The central configuration object.
//!
//! [`Config`] holds every table the host runtime consumes at startup:
//! groups, keybindings, layout parameters, the status bar, floating
//! rules and autostart commands. It is constructed once, validated, and
//! then passed by shared reference into callback registration; nothing
//! mutates it afterwards.

use crate::bindings::{BindAction, Keybinds};
use crate::core::group::GroupRoster;
use crate::core::types::Color;
use crate::{Result, TatamiError::*};

use super::layout::LayoutSpec;
use super::rules::MatchRule;
use super::widget::BarSpec;

//* I would use an Option<F> instead of doing this bodge, but
//* passing in None would cause type inference issues.
/// A const function that simply returns Ok. Pass this into validate if
/// you have no user-defined checks to run.
pub const fn no_checks(_: &Config) -> Result<()> {
    Ok(())
}

/// The central configuration object.
///
/// `Config` stores the static tables described in the crate docs. It
/// provides a `validate` method that ensures the tables are internally
/// consistent: groups exist, layout references resolve, keybind targets
/// are declared. `validate` can also run user-defined code to check
/// user-defined invariants.
///
/// # Construction
///
/// To build a `Config`, use the [`ConfigBuilder`] type.
///
/// # Example
///
/// ```rust
/// use tatami::config::{no_checks, Config};
///
/// // a default config that upholds all invariants
/// let config = Config::new();
///
/// config.validate(no_checks).expect("invalid config");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// The groups, in declaration order.
    pub(crate) groups: GroupRoster,
    /// The set of layout parameter specs being used.
    pub(crate) layouts: Vec<LayoutSpec>,
    /// The keybinding table.
    pub(crate) keybinds: Keybinds,
    /// The status bar, if any.
    pub(crate) bar: Option<BarSpec>,
    /// Rules marking windows the host should float instead of tile.
    pub(crate) float_rules: Vec<MatchRule>,
    /// Commands to spawn on startup.
    pub(crate) autostart: Vec<String>,
    /// The width of the window border.
    pub(crate) border_px: u32,
    /// The border color of unfocused windows.
    pub(crate) unfocused: Color,
    /// The border color of focused windows.
    pub(crate) focused: Color,
    /// The border color of windows marked urgent.
    pub(crate) urgent: Color,
}

impl Config {
    /// Returns the default construction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a [`ConfigBuilder`] to build your Config with the
    /// 'builder' idiom.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks the configuration to verify that all invariants are upheld.
    ///
    /// The predefined invariants: at least one group and one layout are
    /// declared, group and layout names are unique, every layout a group
    /// references is declared, and every group a keybind action names is
    /// declared. `checks` runs afterwards for user-defined invariants;
    /// pass in [`no_checks`] if you have none.
    pub fn validate<F>(&self, checks: F) -> Result<()>
    where
        F: FnOnce(&Config) -> Result<()>,
    {
        if self.groups.is_empty() {
            return Err(InvalidConfig("groups is empty".into()));
        }
        if self.layouts.is_empty() {
            return Err(InvalidConfig("layouts is empty".into()));
        }

        for (idx, group) in self.groups.iter().enumerate() {
            if self.groups.index_of(group.name()) != Some(idx) {
                return Err(NamespaceConflict(format!("duplicate group {}", group.name())));
            }
            for layout in group.layouts() {
                if !self.layouts.iter().any(|l| l.name() == layout.as_str()) {
                    return Err(InvalidConfig(format!(
                        "group {} references undeclared layout {}",
                        group.name(),
                        layout
                    )));
                }
            }
        }

        for (idx, layout) in self.layouts.iter().enumerate() {
            if self.layouts.iter().position(|l| l.name() == layout.name()) != Some(idx) {
                return Err(NamespaceConflict(format!("duplicate layout {}", layout.name())));
            }
        }

        for action in self.keybinds.values() {
            if let BindAction::GotoGroup(name) | BindAction::SendToGroup(name) = action {
                if !self.groups.contains(name) {
                    return Err(UnknownGroup(name.clone()));
                }
            }
        }

        checks(self)?;
        Ok(())
    }

    /// The groups, in declaration order.
    pub fn groups(&self) -> &GroupRoster {
        &self.groups
    }

    /// All layout parameter specs available to the host.
    pub fn layouts(&self) -> &[LayoutSpec] {
        &self.layouts
    }

    /// The keybinding table.
    pub fn keybinds(&self) -> &Keybinds {
        &self.keybinds
    }

    /// The status bar declaration, if one is configured.
    pub fn bar(&self) -> Option<&BarSpec> {
        self.bar.as_ref()
    }

    /// The rules marking windows that should not be tiled.
    pub fn float_rules(&self) -> &[MatchRule] {
        &self.float_rules
    }

    /// The commands spawned by the startup callback.
    pub fn autostart(&self) -> &[String] {
        &self.autostart
    }

    /// The thickness of the window borders, in pixels.
    pub fn border_px(&self) -> u32 {
        self.border_px
    }

    /// The border color of unfocused windows.
    pub fn unfocused(&self) -> Color {
        self.unfocused
    }

    /// The border color of focused windows.
    pub fn focused(&self) -> Color {
        self.focused
    }

    /// The border color of urgent windows.
    pub fn urgent(&self) -> Color {
        self.urgent
    }
}

impl Default for Config {
    fn default() -> Config {
        use super::layout::LayoutKind;
        use crate::core::group::Group;

        let layouts = vec![String::from("tall"), String::from("floating")];
        Config {
            groups: GroupRoster::new(vec![
                Group::new("1", 0, layouts.clone()),
                Group::new("2", 0, layouts.clone()),
                Group::new("3", 0, layouts),
            ]),
            layouts: vec![
                LayoutSpec::new("tall", LayoutKind::DTiled),
                LayoutSpec::new("floating", LayoutKind::Floating),
            ],
            keybinds: Keybinds::new(),
            bar: None,
            float_rules: Vec::new(),
            autostart: Vec::new(),
            border_px: 2,
            unfocused: Color::from(0x555555),
            focused: Color::from(0xdddddd),
            urgent: Color::from(0xee0000),
        }
    }
}

/// A helper type to construct a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    inner: Config,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder`.
    pub fn new() -> Self {
        Self {
            inner: Config::default(),
        }
    }

    /// Sets the groups, replacing the defaults.
    pub fn groups(mut self, groups: GroupRoster) -> Self {
        self.inner.groups = groups;
        self
    }

    /// Sets the layout specs, replacing the defaults.
    pub fn layouts<L>(mut self, layouts: L) -> Self
    where
        L: IntoIterator<Item = LayoutSpec>,
    {
        self.inner.layouts = layouts.into_iter().collect();
        self
    }

    /// Sets the keybinding table.
    pub fn keybinds(mut self, keybinds: Keybinds) -> Self {
        self.inner.keybinds = keybinds;
        self
    }

    /// Declares the status bar.
    pub fn bar(mut self, bar: BarSpec) -> Self {
        self.inner.bar = Some(bar);
        self
    }

    /// Sets which windows should not be placed under layout.
    pub fn float_rules<R>(mut self, float_rules: R) -> Self
    where
        R: IntoIterator<Item = MatchRule>,
    {
        self.inner.float_rules = float_rules.into_iter().collect();
        self
    }

    /// Sets the commands spawned on startup.
    pub fn autostart<A, S>(mut self, autostart: A) -> Self
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.autostart = autostart.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the border thickness, in pixels.
    pub fn border_px(mut self, border_px: u32) -> Self {
        self.inner.border_px = border_px;
        self
    }

    /// Sets the border color of unfocused windows.
    pub fn unfocused(mut self, unfocused: Color) -> Self {
        self.inner.unfocused = unfocused;
        self
    }

    /// Sets the border color of focused windows.
    pub fn focused(mut self, focused: Color) -> Self {
        self.inner.focused = focused;
        self
    }

    /// Sets the border color of urgent windows.
    pub fn urgent(mut self, urgent: Color) -> Self {
        self.inner.urgent = urgent;
        self
    }

    /// Finishes Config construction, validates it and returns
    /// a completed config if validation is successful.
    ///
    /// You can supply an additional `check` to run
    /// additional code to validate your config.
    pub fn finish<F>(self, check: F) -> Result<Config>
    where
        F: FnOnce(&Config) -> Result<()>,
    {
        let config = self.inner;
        config.validate(check)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{kb, BindAction, ModKey};
    use crate::core::group::{Group, GroupRoster};
    use crate::TatamiError;

    #[test]
    fn default_config_is_valid() {
        Config::new().validate(no_checks).unwrap();
    }

    #[test]
    fn empty_groups_rejected() {
        let result = Config::builder()
            .groups(GroupRoster::new(Vec::new()))
            .finish(no_checks);

        assert!(matches!(result, Err(TatamiError::InvalidConfig(_))));
    }

    #[test]
    fn duplicate_group_names_rejected() {
        let result = Config::builder()
            .groups(GroupRoster::new(vec![
                Group::new("web", 0, vec!["tall".into()]),
                Group::new("web", 0, vec!["tall".into()]),
            ]))
            .finish(no_checks);

        assert!(matches!(result, Err(TatamiError::NamespaceConflict(_))));
    }

    #[test]
    fn undeclared_layout_rejected() {
        let result = Config::builder()
            .groups(GroupRoster::new(vec![Group::new(
                "web",
                0,
                vec!["spiral".into()],
            )]))
            .finish(no_checks);

        assert!(matches!(result, Err(TatamiError::InvalidConfig(_))));
    }

    #[test]
    fn keybind_to_unknown_group_rejected() {
        let mut keybinds = Keybinds::new();
        keybinds.insert(
            kb(vec![ModKey::Meta], 0x34),
            BindAction::GotoGroup("4".into()),
        );

        let result = Config::builder().keybinds(keybinds).finish(no_checks);

        assert!(matches!(result, Err(TatamiError::UnknownGroup(g)) if g == "4"));
    }

    #[test]
    fn user_checks_run_after_builtin_checks() {
        let result = Config::builder().finish(|cfg: &Config| {
            if cfg.bar().is_none() {
                Err(TatamiError::InvalidConfig("missing bar".into()))
            } else {
                Ok(())
            }
        });

        assert!(matches!(result, Err(TatamiError::InvalidConfig(_))));
    }
}
