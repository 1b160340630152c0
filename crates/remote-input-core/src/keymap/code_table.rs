//! Platform-neutral key name → HID Usage ID table.
//!
//! The table is built once from [`HidKeyCode::ALL`] and is read-only
//! afterwards.  Lookups are exact and case-sensitive: `"KeyA"` maps to 0x04,
//! `"keya"` and `"A"` do not map at all.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::keymap::hid::HidKeyCode;

/// Immutable mapping from key name to HID Usage ID.
///
/// A miss returns 0 ([`HidKeyCode::Unknown`]), which the injector treats as
/// "do not inject".
#[derive(Debug, Clone)]
pub struct KeyCodeTable {
    by_name: HashMap<&'static str, HidKeyCode>,
}

static SHARED: OnceLock<KeyCodeTable> = OnceLock::new();

impl KeyCodeTable {
    /// Builds a table covering every named [`HidKeyCode`].
    pub fn new() -> Self {
        let by_name: HashMap<_, _> = HidKeyCode::ALL
            .into_iter()
            .filter_map(|code| code.name().map(|name| (name, code)))
            .collect();
        Self { by_name }
    }

    /// Returns the process-wide table, building it on first use.
    pub fn shared() -> &'static KeyCodeTable {
        SHARED.get_or_init(|| {
            let table = KeyCodeTable::new();
            debug!("key code table built with {} entries", table.len());
            table
        })
    }

    /// Looks up the HID Usage ID for `name`, or 0 if it is not mapped.
    pub fn lookup(&self, name: &str) -> u16 {
        self.resolve(name).as_u16()
    }

    /// Looks up the [`HidKeyCode`] for `name`, or [`HidKeyCode::Unknown`].
    pub fn resolve(&self, name: &str) -> HidKeyCode {
        self.by_name.get(name).copied().unwrap_or(HidKeyCode::Unknown)
    }

    /// Reverse direction: the key name for a HID Usage ID.
    pub fn name_of(&self, usage: u16) -> Option<&'static str> {
        HidKeyCode::from_u16(usage).name()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for KeyCodeTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_letters_digits_and_modifiers() {
        // Arrange
        let table = KeyCodeTable::new();

        // Act / Assert
        assert_eq!(table.lookup("KeyA"), 0x04);
        assert_eq!(table.lookup("KeyZ"), 0x1D);
        assert_eq!(table.lookup("Digit1"), 0x1E);
        assert_eq!(table.lookup("Digit0"), 0x27);
        assert_eq!(table.lookup("ArrowUp"), 0x52);
        assert_eq!(table.lookup("F12"), 0x45);
    }

    #[test]
    fn test_left_and_right_modifiers_are_distinct() {
        let table = KeyCodeTable::new();
        let pairs = [
            ("ControlLeft", "ControlRight"),
            ("ShiftLeft", "ShiftRight"),
            ("AltLeft", "AltRight"),
            ("MetaLeft", "MetaRight"),
        ];
        for (left, right) in pairs {
            let (l, r) = (table.lookup(left), table.lookup(right));
            assert_ne!(l, 0, "{left} must be mapped");
            assert_ne!(r, 0, "{right} must be mapped");
            assert_ne!(l, r, "{left} and {right} must be distinct usages");
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = KeyCodeTable::new();
        assert_eq!(table.lookup("keya"), 0);
        assert_eq!(table.lookup("KEYA"), 0);
        assert_eq!(table.lookup("A"), 0);
    }

    #[test]
    fn test_unknown_names_map_to_zero() {
        let table = KeyCodeTable::new();
        for name in ["ZZZZ", "", "Unknown", "Key A", "IntlRo"] {
            assert_eq!(table.lookup(name), 0, "{name:?} must be unmapped");
            assert_eq!(table.resolve(name), HidKeyCode::Unknown);
        }
    }

    #[test]
    fn test_table_covers_every_named_code() {
        let table = KeyCodeTable::new();
        assert_eq!(table.len(), HidKeyCode::ALL.len());
        for code in HidKeyCode::ALL {
            let name = code.name().unwrap_or_default();
            assert_eq!(table.resolve(name), code);
        }
    }

    #[test]
    fn test_name_of_reverses_lookup() {
        let table = KeyCodeTable::new();
        assert_eq!(table.name_of(table.lookup("PageDown")), Some("PageDown"));
        assert_eq!(table.name_of(0), None);
    }

    #[test]
    fn test_shared_returns_the_same_instance() {
        let a = KeyCodeTable::shared() as *const KeyCodeTable;
        let b = KeyCodeTable::shared() as *const KeyCodeTable;
        assert_eq!(a, b);
    }
}
