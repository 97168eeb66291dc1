//! Window match rules for use in a config.
//!
//! A [`MatchRule`] is a predicate over window attributes, used both for
//! auto-assigning newly created windows to groups and for marking windows
//! that should float instead of being tiled.

use std::hash::{Hash, Hasher};
use std::mem;

use indexmap::set::IndexSet;

use crate::core::window::WindowAttrs;

/// A rule that can be matched against windows.
///
/// A rule holds a set of directives, all of which must be satisfied for
/// the rule to match. At most one directive per parameter kind is kept;
/// inserting a second directive on the same parameter is a no-op.
///
/// An empty rule matches nothing.
#[derive(Debug, Clone)]
pub struct MatchRule {
    pub(crate) directives: IndexSet<Directive>,
}

impl MatchRule {
    /// Creates an empty MatchRule.
    pub fn empty() -> Self {
        Self {
            directives: IndexSet::new(),
        }
    }

    /// Creates a MatchRule with the given directives.
    pub fn new<D>(directives: D) -> Self
    where
        D: IntoIterator<Item = Directive>,
    {
        Self {
            directives: directives.into_iter().collect(),
        }
    }

    /// Shorthand for a rule matching a window class exactly.
    pub fn class<S: Into<String>>(class: S) -> Self {
        Self::new([Directive::Match(Parameter::Class(class.into()))])
    }

    /// Shorthand for a rule matching a window instance exactly.
    pub fn instance<S: Into<String>>(instance: S) -> Self {
        Self::new([Directive::Match(Parameter::Instance(instance.into()))])
    }

    /// Shorthand for a rule matching transient windows.
    pub fn transient() -> Self {
        Self::new([Directive::Match(Parameter::Transient(true))])
    }

    /// Inserts a new directive into the rule.
    ///
    /// Keeps the existing directive if one on the same parameter is
    /// already present.
    pub fn insert_directive(&mut self, directive: Directive) {
        self.directives.insert(directive);
    }

    /// Tests the rule against a window's attributes.
    ///
    /// All directives must be satisfied; an empty rule never matches.
    pub fn matches(&self, attrs: &WindowAttrs) -> bool {
        !self.directives.is_empty() && self.directives.iter().all(|d| d.satisfied_by(attrs))
    }
}

/// Directives to control what the MatchRule matches on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Directive {
    /// Match on this parameter.
    Match(Parameter),
    /// Exclude anything that matches this parameter (the complement of Match).
    Exclude(Parameter),
}

impl Directive {
    fn satisfied_by(&self, attrs: &WindowAttrs) -> bool {
        match self {
            Directive::Match(p) => p.matches(attrs),
            Directive::Exclude(p) => !p.matches(attrs),
        }
    }
}

/// Parameters that can be matched on.
///
/// `Parameter` implements `PartialEq` and `Eq` such that if two instances
/// are the same variant, they are equal regardless of the contained
/// value. For example:
///
/// ```
/// use tatami::config::rules::Parameter;
///
/// let lhs = Parameter::Class(String::from("firefox"));
/// let rhs = Parameter::Class(String::from("Alacritty"));
///
/// assert_eq!(lhs, rhs);
/// ```
///
/// This gives the per-parameter deduplication behavior on [`MatchRule`].
#[derive(Debug, Clone)]
pub enum Parameter {
    /// The instance portion of the window's class property.
    Instance(String),
    /// The class portion of the window's class property.
    Class(String),
    /// The current title of the window.
    Title(String),
    /// Whether the window is transient.
    Transient(bool),
}

impl Parameter {
    fn matches(&self, attrs: &WindowAttrs) -> bool {
        match self {
            Parameter::Instance(s) => attrs.instance() == s,
            Parameter::Class(s) => attrs.class() == s,
            Parameter::Title(s) => attrs.title() == s,
            Parameter::Transient(t) => attrs.is_transient() == *t,
        }
    }
}

impl PartialEq for Parameter {
    fn eq(&self, rhs: &Parameter) -> bool {
        mem::discriminant(self) == mem::discriminant(rhs)
    }
}

impl Eq for Parameter {}

// implement Hash to hash the enum's discriminant, ignoring the contained value.
impl Hash for Parameter {
    fn hash<H>(&self, h: &mut H)
    where
        H: Hasher,
    {
        mem::discriminant(self).hash(h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn firefox() -> WindowAttrs {
        WindowAttrs::new("Navigator", "firefox").with_title("Mozilla Firefox")
    }

    #[test]
    fn class_rule_matches_exactly() {
        let rule = MatchRule::class("firefox");

        assert!(rule.matches(&firefox()));
        assert!(!rule.matches(&WindowAttrs::new("alacritty", "Alacritty")));
    }

    #[test]
    fn all_directives_must_hold() {
        let rule = MatchRule::new([
            Directive::Match(Parameter::Class("firefox".into())),
            Directive::Exclude(Parameter::Transient(true)),
        ]);

        assert!(rule.matches(&firefox()));
        assert!(!rule.matches(&firefox().transient(true)));
    }

    #[test]
    fn empty_rule_matches_nothing() {
        assert!(!MatchRule::empty().matches(&firefox()));
    }

    #[test]
    fn directives_dedup_per_parameter() {
        let mut rule = MatchRule::class("firefox");
        // same parameter kind, different value: first one wins
        rule.insert_directive(Directive::Match(Parameter::Class("discord".into())));

        assert_eq!(rule.directives.len(), 1);
        assert!(rule.matches(&firefox()));
    }
}
