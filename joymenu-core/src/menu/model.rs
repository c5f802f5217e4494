//! Flat menu table

use heapless::Vec;

use super::entry::{EntryKind, MenuEntry, Parameter};

/// Longest group the length scan will accept
///
/// A group whose terminator is not found within this many entries is
/// reported as length 0.
pub const MAX_GROUP_SCAN: usize = 24;

/// Menu table errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuError {
    /// Table capacity exceeded
    Full,
    /// Sub-menu entry at `index` points past the end of the table
    DanglingLink { index: usize },
    /// Sub-menu entry at `index` points at a group with no terminator in reach
    MalformedGroup { index: usize },
    /// Parameter entry at `index` has `min > max` or starts out of bounds
    InvalidParameter { index: usize },
}

/// Menu table with room for `N` entries
#[derive(Debug, Clone)]
pub struct Menu<const N: usize> {
    entries: Vec<MenuEntry, N>,
}

impl<const N: usize> Menu<N> {
    /// Create an empty menu
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a menu from a static table
    pub fn from_entries(entries: &[MenuEntry]) -> Result<Self, MenuError> {
        let mut menu = Self::new();
        for entry in entries {
            menu.push(*entry)?;
        }
        Ok(menu)
    }

    /// Append an entry
    pub fn push(&mut self, entry: MenuEntry) -> Result<(), MenuError> {
        self.entries.push(entry).map_err(|_| MenuError::Full)
    }

    /// Number of entries, terminators included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at `index`
    pub fn get(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index)
    }

    /// Get the entry at `index` mutably
    pub fn get_mut(&mut self, index: usize) -> Option<&mut MenuEntry> {
        self.entries.get_mut(index)
    }

    /// Get the parameter at `index`, if that entry is a parameter
    pub fn parameter(&self, index: usize) -> Option<&Parameter> {
        self.get(index).and_then(MenuEntry::parameter_value)
    }

    /// Get the parameter at `index` mutably
    pub fn parameter_mut(&mut self, index: usize) -> Option<&mut Parameter> {
        match self.get_mut(index).map(|entry| &mut entry.kind) {
            Some(EntryKind::Parameter(param)) => Some(param),
            _ => None,
        }
    }

    /// Iterate over all entries
    pub fn iter(&self) -> impl Iterator<Item = &MenuEntry> {
        self.entries.iter()
    }

    /// Count the entries of the group starting at `start`
    ///
    /// Scans forward for a `GroupEnd`. Returns 0 when no terminator turns
    /// up within [`MAX_GROUP_SCAN`] entries or before the table ends.
    pub fn group_length(&self, start: usize) -> usize {
        for offset in 0..=MAX_GROUP_SCAN {
            match self.entries.get(start + offset) {
                Some(entry) if entry.is_group_end() => return offset,
                Some(_) => {}
                None => return 0,
            }
        }
        0
    }

    /// Check every sub-menu link and parameter range
    ///
    /// Navigation itself follows links without checking them; this lets
    /// firmware report a broken table at startup.
    pub fn validate(&self) -> Result<(), MenuError> {
        for (index, entry) in self.entries.iter().enumerate() {
            match entry.kind {
                EntryKind::Submenu { target } => {
                    if target >= self.entries.len() {
                        return Err(MenuError::DanglingLink { index });
                    }
                    if self.group_length(target) == 0 {
                        return Err(MenuError::MalformedGroup { index });
                    }
                }
                EntryKind::Parameter(param) if !param.is_valid() => {
                    return Err(MenuError::InvalidParameter { index });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl<const N: usize> Default for Menu<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::ActionId;

    fn sample_menu() -> Menu<16> {
        Menu::from_entries(&[
            MenuEntry::submenu("Settings", 4),
            MenuEntry::action("Run", ActionId(0)),
            MenuEntry::stub("About"),
            MenuEntry::group_end(),
            MenuEntry::parameter("Speed", 5, 0, 10, 2),
            MenuEntry::submenu("Back", 0),
            MenuEntry::group_end(),
        ])
        .unwrap()
    }

    #[test]
    fn test_group_length() {
        let menu = sample_menu();
        assert_eq!(menu.group_length(0), 3);
        assert_eq!(menu.group_length(4), 2);
        // Starting on a terminator is an empty group
        assert_eq!(menu.group_length(3), 0);
        // Past the end
        assert_eq!(menu.group_length(40), 0);
    }

    #[test]
    fn test_group_length_scan_limit() {
        let mut menu: Menu<64> = Menu::new();
        for _ in 0..MAX_GROUP_SCAN {
            menu.push(MenuEntry::stub("x")).unwrap();
        }
        menu.push(MenuEntry::group_end()).unwrap();
        assert_eq!(menu.group_length(0), MAX_GROUP_SCAN);

        let mut menu: Menu<64> = Menu::new();
        for _ in 0..=MAX_GROUP_SCAN {
            menu.push(MenuEntry::stub("x")).unwrap();
        }
        menu.push(MenuEntry::group_end()).unwrap();
        assert_eq!(menu.group_length(0), 0);
        // The same table read from one entry in fits again
        assert_eq!(menu.group_length(1), MAX_GROUP_SCAN);
    }

    #[test]
    fn test_unterminated_table() {
        let menu: Menu<4> =
            Menu::from_entries(&[MenuEntry::stub("a"), MenuEntry::stub("b")]).unwrap();
        assert_eq!(menu.group_length(0), 0);
    }

    #[test]
    fn test_push_full() {
        let mut menu: Menu<1> = Menu::new();
        assert_eq!(menu.push(MenuEntry::group_end()), Ok(()));
        assert_eq!(menu.push(MenuEntry::group_end()), Err(MenuError::Full));
    }

    #[test]
    fn test_parameter_access() {
        let mut menu = sample_menu();
        assert!(menu.parameter(0).is_none());
        assert_eq!(menu.parameter(4).map(|p| p.value), Some(5));

        if let Some(param) = menu.parameter_mut(4) {
            param.value = 9;
        }
        assert_eq!(menu.parameter(4).map(|p| p.value), Some(9));
    }

    #[test]
    fn test_validate() {
        assert_eq!(sample_menu().validate(), Ok(()));

        let dangling: Menu<4> =
            Menu::from_entries(&[MenuEntry::submenu("Lost", 9), MenuEntry::group_end()]).unwrap();
        assert_eq!(dangling.validate(), Err(MenuError::DanglingLink { index: 0 }));

        let malformed: Menu<4> = Menu::from_entries(&[
            MenuEntry::submenu("Bad", 2),
            MenuEntry::group_end(),
            MenuEntry::stub("no end"),
        ])
        .unwrap();
        assert_eq!(
            malformed.validate(),
            Err(MenuError::MalformedGroup { index: 0 })
        );
    }

    #[test]
    fn test_validate_parameter_bounds() {
        let inverted: Menu<4> = Menu::from_entries(&[
            MenuEntry::stub("ok"),
            MenuEntry::parameter("Rev", 5, 10, 0, 1),
            MenuEntry::group_end(),
        ])
        .unwrap();
        assert_eq!(
            inverted.validate(),
            Err(MenuError::InvalidParameter { index: 1 })
        );

        let outside: Menu<4> = Menu::from_entries(&[
            MenuEntry::parameter("High", 12, 0, 10, 1),
            MenuEntry::group_end(),
        ])
        .unwrap();
        assert_eq!(
            outside.validate(),
            Err(MenuError::InvalidParameter { index: 0 })
        );

        let edge: Menu<4> = Menu::from_entries(&[
            MenuEntry::parameter("Fixed", 3, 3, 3, 1),
            MenuEntry::group_end(),
        ])
        .unwrap();
        assert_eq!(edge.validate(), Ok(()));
    }
}
