//! Demo menu
//!
//! Main menu with two sub-menus: settings (editable parameters) and
//! actions. Sub-menu links are table indices, so keep them in step with
//! the layout below.

use joymenu_core::menu::MenuError;
use joymenu_core::{ActionId, Menu, MenuEntry};

/// Menu table capacity
pub const MENU_CAPACITY: usize = 16;

/// First entry of the settings group
const SETTINGS: usize = 6;
/// First entry of the actions group
const ACTIONS: usize = 11;

/// Index of the LCD contrast parameter
pub const CONTRAST: usize = SETTINGS;

pub const TOGGLE_BACKLIGHT: ActionId = ActionId(0);
pub const RESET_SETTINGS: ActionId = ActionId(1);
pub const APPLY_CONTRAST: ActionId = ActionId(2);

/// Menu table as shipped; also the source of parameter defaults
const ENTRIES: [MenuEntry; 15] = [
    // Main (0)
    MenuEntry::submenu("Settings", SETTINGS),
    MenuEntry::submenu("Actions", ACTIONS),
    MenuEntry::parameter("Volume", 4, 0, 10, 2),
    MenuEntry::stub("About"),
    MenuEntry::stub("Help"),
    MenuEntry::group_end(),
    // Settings (6)
    MenuEntry::parameter("Contrast", 64, 0, 127, 8),
    MenuEntry::parameter("Speed", 3, 1, 9, 2),
    MenuEntry::parameter("Offset", 0, -50, 50, 10),
    MenuEntry::submenu("Back", 0),
    MenuEntry::group_end(),
    // Actions (11)
    MenuEntry::action("Light", TOGGLE_BACKLIGHT),
    MenuEntry::action("Reset", RESET_SETTINGS),
    MenuEntry::action("Contrast!", APPLY_CONTRAST),
    MenuEntry::group_end(),
];

/// Build the demo menu
pub fn build() -> Result<Menu<MENU_CAPACITY>, MenuError> {
    Menu::from_entries(&ENTRIES)
}

/// Hardware change requested by an action
///
/// Actions only get the menu table; anything that touches a device is
/// handed back to the UI loop, which owns the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum DeviceRequest {
    ToggleBacklight,
    SetContrast(u8),
}

/// Action handler for the demo menu
#[derive(Default)]
pub struct DemoActions {
    pending: Option<DeviceRequest>,
}

impl DemoActions {
    /// Take the request left by the last action, if any
    pub fn take_request(&mut self) -> Option<DeviceRequest> {
        self.pending.take()
    }
}

impl joymenu_core::traits::ActionHandler<MENU_CAPACITY> for DemoActions {
    fn run(&mut self, action: ActionId, menu: &mut Menu<MENU_CAPACITY>) {
        self.pending = match action {
            TOGGLE_BACKLIGHT => Some(DeviceRequest::ToggleBacklight),
            RESET_SETTINGS => {
                reset_parameters(menu);
                None
            }
            APPLY_CONTRAST => menu
                .parameter(CONTRAST)
                .map(|param| DeviceRequest::SetContrast(param.value.clamp(0, 127) as u8)),
            _ => None,
        };
    }
}

/// Put every parameter back to its shipped value
fn reset_parameters(menu: &mut Menu<MENU_CAPACITY>) {
    for (index, entry) in ENTRIES.iter().enumerate() {
        if let (Some(default), Some(param)) = (entry.parameter_value(), menu.parameter_mut(index)) {
            param.value = default.value;
        }
    }
}
