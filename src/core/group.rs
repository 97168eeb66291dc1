//! Groups: named collections of windows switched as a unit.
//!
//! A [`Group`] is declared once at startup and persists for the process
//! lifetime. The declarations form a fixed, stably ordered sequence (the
//! [`GroupRoster`]); all policy decisions are made in terms of indices
//! into that sequence.

use std::fmt;

use crate::config::rules::MatchRule;
use crate::core::ring::{Ring, Selector};
use crate::core::types::ScreenId;
use crate::core::window::WindowAttrs;

/// A declaration of a group.
///
/// Each group carries a name, the screen it should appear on, the layouts
/// it cycles through (by name, resolved against the configured
/// [`LayoutSpec`]s), and an ordered sequence of match rules used to
/// auto-assign newly created windows to it.
///
/// [`LayoutSpec`]: crate::config::layout::LayoutSpec
#[derive(Debug, Clone)]
pub struct Group {
    pub(crate) name: String,
    pub(crate) screen: ScreenId,
    pub(crate) layouts: Vec<String>,
    pub(crate) rules: Vec<MatchRule>,
}

impl Group {
    /// Creates a new group declaration.
    pub fn new<S, L>(name: S, screen: ScreenId, layouts: L) -> Self
    where
        S: Into<String>,
        L: IntoIterator<Item = String>,
    {
        Self {
            name: name.into(),
            screen,
            layouts: layouts.into_iter().collect(),
            rules: Vec::new(),
        }
    }

    /// Attaches auto-placement rules to the group declaration.
    pub fn with_rules<R>(mut self, rules: R) -> Self
    where
        R: IntoIterator<Item = MatchRule>,
    {
        self.rules = rules.into_iter().collect();
        self
    }

    /// The name of the group.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The screen the group belongs to.
    pub fn screen(&self) -> ScreenId {
        self.screen
    }

    /// The layouts the group cycles through, by name.
    pub fn layouts(&self) -> &[String] {
        &self.layouts
    }

    /// The auto-placement rules attached to the group.
    pub fn rules(&self) -> &[MatchRule] {
        &self.rules
    }

    /// Tests whether any of the group's rules matches the given window.
    pub fn matches(&self, attrs: &WindowAttrs) -> bool {
        self.rules.iter().any(|r| r.matches(attrs))
    }
}

/// The ordered registry of group declarations.
///
/// Group ordering is total and stable for the lifetime of the roster;
/// a group's index doubles as its identity in all decision logic.
#[derive(Debug, Clone, Default)]
pub struct GroupRoster {
    groups: Ring<Group>,
}

impl GroupRoster {
    /// Creates a roster from group declarations, in declaration order.
    pub fn new<G>(groups: G) -> Self
    where
        G: IntoIterator<Item = Group>,
    {
        Self {
            groups: groups.into_iter().collect(),
        }
    }

    /// The number of declared groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Tests whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the group at the given index.
    pub fn get(&self, idx: usize) -> Option<&Group> {
        self.groups.get(idx)
    }

    /// Iterates over the groups in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    /// Finds a group by name, returning its index and the declaration.
    pub fn find(&self, name: &str) -> Option<(usize, &Group)> {
        self.groups.element_by(|g| g.name == name)
    }

    /// Returns the index of the group with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.groups.index(Selector::Condition(&|g| g.name == name))
    }

    /// Tests whether a group with the given name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }
}

/// A snapshot of a live group, as reported by the host runtime.
///
/// Views are ordered identically to the roster; the decision functions
/// consume views, never live runtime objects.
#[derive(Clone, PartialEq, Eq)]
pub struct GroupView {
    pub(crate) name: String,
    pub(crate) windows: usize,
}

impl fmt::Debug for GroupView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.name, self.windows)
    }
}

impl GroupView {
    /// Creates a new view of a live group.
    pub fn new<S: Into<String>>(name: S, windows: usize) -> Self {
        Self {
            name: name.into(),
            windows,
        }
    }

    /// The name of the group.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of windows currently contained in the group.
    pub fn window_count(&self) -> usize {
        self.windows
    }

    /// Tests whether the group currently holds no windows.
    pub fn is_empty(&self) -> bool {
        self.windows == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> GroupRoster {
        GroupRoster::new(vec![
            Group::new("term", 0, vec!["tall".into()]),
            Group::new("web", 0, vec!["tall".into(), "max".into()]),
            Group::new("chat", 1, vec!["max".into()]),
        ])
    }

    #[test]
    fn roster_lookup() {
        let roster = roster();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.index_of("web"), Some(1));
        assert!(roster.contains("chat"));
        assert!(!roster.contains("mail"));

        let (idx, group) = roster.find("chat").unwrap();
        assert_eq!(idx, 2);
        assert_eq!(group.screen(), 1);
    }

    #[test]
    fn roster_preserves_declaration_order() {
        let roster = roster();
        let names: Vec<&str> = roster.iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["term", "web", "chat"]);
    }
}
