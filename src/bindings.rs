//! Types for parsing and creating key bindings.
//!
//! Keybindings are static configuration tables: each [`Keybind`] maps to
//! a [`BindAction`], a data description of what the host runtime should
//! do when the bind fires. Binds are written as strings in the usual
//! modifier-prefix notation (`"M-S-Return"`) and parsed by [`Keymap`].

use std::collections::HashMap;

use bitflags::bitflags;
use indexmap::IndexMap;
use strum::EnumIter;

use crate::core::types::Direction;
use crate::{Result, TatamiError};

/// An X11-style keysym.
pub type Keysym = u32;

bitflags! {
    /// A bitmask of modifier keys, laid out as in the X11 protocol.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModMask: u16 {
        /// The Shift modifier.
        const SHIFT = 1 << 0;
        /// The Caps Lock modifier.
        const LOCK = 1 << 1;
        /// The Control modifier.
        const CONTROL = 1 << 2;
        /// Mod1, conventionally Alt.
        const MOD1 = 1 << 3;
        /// Mod2, conventionally Num Lock.
        const MOD2 = 1 << 4;
        /// Mod3, rarely bound.
        const MOD3 = 1 << 5;
        /// Mod4, conventionally the Super/Meta key.
        const MOD4 = 1 << 6;
        /// Mod5, conventionally AltGr.
        const MOD5 = 1 << 7;
    }
}

/// A type representing a modifier key tied to a certain keybind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum ModKey {
    /// The Ctrl key.
    Ctrl,
    /// The Alt key.
    Alt,
    /// The Shift key.
    Shift,
    /// The Super/Meta key.
    Meta,
}

#[doc(hidden)]
impl From<Vec<ModKey>> for ModMask {
    fn from(from: Vec<ModKey>) -> ModMask {
        from.into_iter().fold(ModMask::empty(), |acc, n| match n {
            ModKey::Ctrl => acc | ModMask::CONTROL,
            ModKey::Alt => acc | ModMask::MOD1,
            ModKey::Shift => acc | ModMask::SHIFT,
            ModKey::Meta => acc | ModMask::MOD4,
        })
    }
}

/// Representation of a keybind understood by the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keybind {
    pub(crate) modmask: ModMask,
    pub(crate) sym: Keysym,
}

impl Keybind {
    /// Creates a new `Keybind`.
    pub fn new<M: Into<ModMask>>(modifiers: M, sym: Keysym) -> Self {
        Self {
            modmask: modifiers.into(),
            sym,
        }
    }
}

/// Convenience function for constructing a keybind.
pub fn kb(modmask: Vec<ModKey>, sym: Keysym) -> Keybind {
    Keybind {
        modmask: modmask.into(),
        sym,
    }
}

/// What the host runtime should do when a keybind fires.
///
/// Actions are plain data; the host interprets them. Group references
/// are by name and are checked during config validation.
#[derive(Debug, Clone, PartialEq)]
pub enum BindAction {
    /// Spawn an external program.
    Spawn(String),
    /// Switch the current screen to the named group.
    GotoGroup(String),
    /// Send the focused window to the named group.
    SendToGroup(String),
    /// Cycle the visible group in the given direction.
    CycleGroup(Direction),
    /// Cycle the visible group's layout in the given direction.
    CycleLayout(Direction),
    /// Cycle window focus within the visible group.
    CycleFocus(Direction),
    /// Close the focused window.
    KillFocused,
    /// Toggle the focused window between floating and tiled.
    ToggleFloat,
    /// Quit the window manager.
    Quit,
}

/// The keybinding table: binds to actions, in declaration order.
///
/// Inserting a bind that is already present replaces its action.
pub type Keybinds = IndexMap<Keybind, BindAction>;

/// A type that resolves key names to keysyms and parses keybinding
/// strings.
///
/// The map is built into the binary and covers the names a configuration
/// actually uses: single ASCII characters plus the common named keys
/// (`Return`, `Tab`, `space`, arrows, `F1`-`F12`, and so on). Unknown
/// names fail with [`TatamiError::ParseKeybind`].
#[derive(Clone, Debug, PartialEq)]
pub struct Keymap {
    named: HashMap<&'static str, Keysym>,
}

impl Default for Keymap {
    fn default() -> Keymap {
        Keymap::new()
    }
}

/// Named keysyms, values as defined in `X11/keysymdef.h`.
const NAMED_KEYSYMS: &[(&str, Keysym)] = &[
    ("space", 0x0020),
    ("BackSpace", 0xff08),
    ("Tab", 0xff09),
    ("Return", 0xff0d),
    ("Escape", 0xff1b),
    ("Delete", 0xffff),
    ("Home", 0xff50),
    ("Left", 0xff51),
    ("Up", 0xff52),
    ("Right", 0xff53),
    ("Down", 0xff54),
    ("Prior", 0xff55),
    ("Next", 0xff56),
    ("End", 0xff57),
    ("Print", 0xff61),
];

impl Keymap {
    /// Creates a new keymap.
    pub fn new() -> Keymap {
        let mut named: HashMap<&'static str, Keysym> = NAMED_KEYSYMS.iter().copied().collect();

        // F1 to F12
        for n in 0..12u32 {
            const FKEYS: [&str; 12] = [
                "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12",
            ];
            named.insert(FKEYS[n as usize], 0xffbe + n);
        }

        Keymap { named }
    }

    /// Parses a string as a keybinding.
    ///
    /// Follows the format "mod-key", where the modifiers are
    ///
    /// Ctrl = C,
    /// Shift = S,
    /// Alt = A,
    /// Meta = M,
    ///
    /// and the final token is a key name.
    pub fn parse_keybinding(&self, kb: &str) -> Result<Keybind> {
        let mut modifiers: Vec<ModKey> = Vec::new();
        let mut sym = None;
        for token in kb.split('-') {
            match token {
                "C" => {
                    modifiers.push(ModKey::Ctrl);
                }
                "S" => {
                    modifiers.push(ModKey::Shift);
                }
                "A" => {
                    modifiers.push(ModKey::Alt);
                }
                "M" => {
                    modifiers.push(ModKey::Meta);
                }
                n => {
                    sym = self.lookup_key(n);
                }
            }
        }

        if let Some(sym) = sym {
            Ok(Keybind {
                modmask: modifiers.into(),
                sym,
            })
        } else {
            Err(TatamiError::ParseKeybind(kb.into()))
        }
    }

    fn lookup_key(&self, s: &str) -> Option<Keysym> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            // keysym values for printable ASCII are the character itself
            if c.is_ascii_graphic() {
                return Some(c as Keysym);
            }
        }
        self.named.get(s).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keybind() {
        let map = Keymap::new();

        let modshift_down = map.parse_keybinding("M-S-Down").unwrap();
        let modshift_a = map.parse_keybinding("M-S-a").unwrap();
        let mod_ret = map.parse_keybinding("M-Return").unwrap();

        let mod4 = ModKey::Meta;
        let shift = ModKey::Shift;

        assert_eq!(modshift_down, kb(vec![mod4, shift], 0xff54));
        assert_eq!(modshift_a, kb(vec![mod4, shift], 0x61));
        assert_eq!(mod_ret, kb(vec![mod4], 0xff0d));
    }

    #[test]
    fn test_parse_fkeys() {
        let map = Keymap::new();

        let f1 = map.parse_keybinding("M-F1").unwrap();
        let f12 = map.parse_keybinding("M-F12").unwrap();

        assert_eq!(f1.sym, 0xffbe);
        assert_eq!(f12.sym, 0xffc9);
    }

    #[test]
    fn test_parse_unknown_key() {
        let map = Keymap::new();

        assert!(map.parse_keybinding("M-NoSuchKey").is_err());
        assert!(map.parse_keybinding("M-S").is_err());
    }

    #[test]
    fn test_modmask_fold() {
        let mask: ModMask = vec![ModKey::Meta, ModKey::Shift].into();

        assert_eq!(mask, ModMask::MOD4 | ModMask::SHIFT);
    }
}
