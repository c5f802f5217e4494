//! Navigation state
//!
//! Where the cursor is, which group is active, and whether up/down move
//! the cursor or edit a value. Everything here is pure bookkeeping; the
//! engine adds the display and feedback side effects.

use crate::menu::Menu;

/// What the joystick directions act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Directions move the cursor
    Navigate,
    /// Directions change the parameter under the cursor
    Edit,
}

/// Cursor and active group bounds
///
/// Invariant: `group_start <= cursor < group_start + group_length` whenever
/// `group_length > 0`, and `mode == Edit` only while the cursor is on a
/// parameter entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NavigationState {
    /// Table index of the selected entry
    pub cursor: usize,
    /// Table index of the first entry of the active group
    pub group_start: usize,
    /// Entries in the active group; 0 means the group is malformed
    pub group_length: usize,
    pub mode: Mode,
}

impl NavigationState {
    /// Start at the top of the table
    pub fn new<const N: usize>(menu: &Menu<N>) -> Self {
        Self {
            cursor: 0,
            group_start: 0,
            group_length: menu.group_length(0),
            mode: Mode::Navigate,
        }
    }

    /// One past the last index of the active group
    pub fn group_end(&self) -> usize {
        self.group_start + self.group_length
    }

    /// Check if the active group can be navigated
    pub fn has_group(&self) -> bool {
        self.group_length > 0
    }

    /// Move to the previous entry, wrapping to the last
    pub fn select_prev(&mut self) {
        if !self.has_group() {
            return;
        }
        if self.cursor <= self.group_start {
            self.cursor = self.group_end() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Move to the next entry, wrapping to the first
    pub fn select_next(&mut self) {
        if !self.has_group() {
            return;
        }
        if self.cursor + 1 >= self.group_end() {
            self.cursor = self.group_start;
        } else {
            self.cursor += 1;
        }
    }

    /// Jump to the first entry of the group
    pub fn select_first(&mut self) {
        if self.has_group() {
            self.cursor = self.group_start;
        }
    }

    /// Jump to the last entry of the group
    pub fn select_last(&mut self) {
        if self.has_group() {
            self.cursor = self.group_end() - 1;
        }
    }

    /// Make the group starting at `target` active, cursor on its first entry
    ///
    /// The target is not checked: a link into the middle of a group opens
    /// the tail of that group.
    pub fn enter_group<const N: usize>(&mut self, target: usize, menu: &Menu<N>) {
        self.group_start = target;
        self.cursor = target;
        self.group_length = menu.group_length(target);
        self.mode = Mode::Navigate;
    }

    /// Toggle edit mode on a parameter; anything else forces navigation
    pub fn change_mode<const N: usize>(&mut self, menu: &Menu<N>) {
        self.mode = match (menu.parameter(self.cursor), self.mode) {
            (Some(_), Mode::Navigate) => Mode::Edit,
            _ => Mode::Navigate,
        };
    }

    /// Re-read the active group after the table was changed underneath us
    ///
    /// Keeps the cursor inside the (possibly shorter) group and drops edit
    /// mode if the cursor no longer sits on a parameter.
    pub fn refresh<const N: usize>(&mut self, menu: &Menu<N>) {
        self.group_length = menu.group_length(self.group_start);
        if self.has_group() && self.cursor >= self.group_end() {
            self.cursor = self.group_end() - 1;
        }
        if self.mode == Mode::Edit && menu.parameter(self.cursor).is_none() {
            self.mode = Mode::Navigate;
        }
    }

    /// Check if a parameter is being edited
    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Edit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{ActionId, MenuEntry};
    use proptest::prelude::*;

    fn menu() -> Menu<16> {
        Menu::from_entries(&[
            MenuEntry::submenu("Setup", 5),
            MenuEntry::parameter("Level", 5, 0, 10, 2),
            MenuEntry::action("Go", ActionId(1)),
            MenuEntry::stub("Info"),
            MenuEntry::group_end(),
            MenuEntry::parameter("Gain", 1, 0, 3, 1),
            MenuEntry::submenu("Back", 0),
            MenuEntry::group_end(),
        ])
        .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = NavigationState::new(&menu());
        assert_eq!(state.cursor, 0);
        assert_eq!(state.group_start, 0);
        assert_eq!(state.group_length, 4);
        assert_eq!(state.mode, Mode::Navigate);
    }

    #[test]
    fn test_wrap_around() {
        let mut state = NavigationState::new(&menu());

        state.select_prev();
        assert_eq!(state.cursor, 3);

        state.select_next();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_first_and_last() {
        let mut state = NavigationState::new(&menu());
        state.select_last();
        assert_eq!(state.cursor, 3);
        state.select_first();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_enter_group() {
        let menu = menu();
        let mut state = NavigationState::new(&menu);

        state.enter_group(5, &menu);
        assert_eq!(state.cursor, 5);
        assert_eq!(state.group_start, 5);
        assert_eq!(state.group_length, 2);

        // Wrapping stays inside the sub-menu
        state.select_next();
        state.select_next();
        assert_eq!(state.cursor, 5);
    }

    #[test]
    fn test_enter_group_mid_group_is_permitted() {
        let menu = menu();
        let mut state = NavigationState::new(&menu);

        state.enter_group(2, &menu);
        assert_eq!(state.group_start, 2);
        assert_eq!(state.group_length, 2);
    }

    #[test]
    fn test_change_mode() {
        let menu = menu();
        let mut state = NavigationState::new(&menu);

        // Not a parameter: stays in navigation
        state.change_mode(&menu);
        assert_eq!(state.mode, Mode::Navigate);

        state.select_next();
        state.change_mode(&menu);
        assert_eq!(state.mode, Mode::Edit);
        state.change_mode(&menu);
        assert_eq!(state.mode, Mode::Navigate);
    }

    #[test]
    fn test_change_mode_off_parameter_forces_navigate() {
        let menu = menu();
        let mut state = NavigationState::new(&menu);
        state.cursor = 2;
        state.mode = Mode::Edit;

        state.change_mode(&menu);
        assert_eq!(state.mode, Mode::Navigate);
    }

    #[test]
    fn test_empty_group_does_not_move() {
        let menu: Menu<4> = Menu::from_entries(&[MenuEntry::stub("x")]).unwrap();
        let mut state = NavigationState::new(&menu);
        assert_eq!(state.group_length, 0);

        state.select_prev();
        state.select_next();
        state.select_last();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_refresh_after_table_change() {
        let mut menu = menu();
        let mut state = NavigationState::new(&menu);
        state.cursor = 1;
        state.change_mode(&menu);
        assert!(state.is_editing());

        // Shrink the group to one entry
        if let Some(entry) = menu.get_mut(1) {
            *entry = MenuEntry::group_end();
        }
        state.refresh(&menu);

        assert_eq!(state.group_length, 1);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.mode, Mode::Navigate);
    }

    proptest! {
        #[test]
        fn prop_full_lap_returns_to_start(start in 0usize..4, forward in any::<bool>()) {
            let menu = menu();
            let mut state = NavigationState::new(&menu);
            state.cursor = start;

            for _ in 0..state.group_length {
                if forward {
                    state.select_next();
                } else {
                    state.select_prev();
                }
                prop_assert!(state.cursor >= state.group_start);
                prop_assert!(state.cursor < state.group_end());
            }

            prop_assert_eq!(state.cursor, start);
        }
    }
}
