//! Menu entry definitions

/// Identifier handed to the action handler when an action entry fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActionId(pub u8);

/// Editable integer parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Parameter {
    /// Current value, always within `[min, max]` after any adjustment
    pub value: i16,
    pub min: i16,
    pub max: i16,
    /// Coarse step used by up/down while editing
    pub step: i16,
}

/// Result of adjusting a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Adjusted {
    /// Stored value after clamping
    pub value: i16,
    /// The unclamped result was outside `[min, max]`
    pub clamped: bool,
}

impl Parameter {
    /// Create a parameter
    pub const fn new(value: i16, min: i16, max: i16, step: i16) -> Self {
        Self {
            value,
            min,
            max,
            step,
        }
    }

    /// Add `delta` and clamp the result into `[min, max]`
    pub fn adjust(&mut self, delta: i32) -> Adjusted {
        let raw = self.value as i32 + delta;
        let (value, clamped) = if raw > self.max as i32 {
            (self.max, true)
        } else if raw < self.min as i32 {
            (self.min, true)
        } else {
            (raw as i16, false)
        };

        self.value = value;
        Adjusted { value, clamped }
    }

    /// Check if the current value is inside the bounds
    pub fn in_range(&self) -> bool {
        self.min <= self.value && self.value <= self.max
    }

    /// Check that the bounds are ordered and hold the current value
    pub fn is_valid(&self) -> bool {
        self.min <= self.max && self.in_range()
    }
}

/// What an entry does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EntryKind {
    /// Opens the group starting at `target`
    Submenu { target: usize },
    /// Editable value
    Parameter(Parameter),
    /// Runs user logic
    Action(ActionId),
    /// Closes a group; never displayed
    GroupEnd,
    /// Placeholder that only acknowledges the press
    Stub,
}

/// One row of the menu table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuEntry {
    /// Display text
    pub label: &'static str,
    pub kind: EntryKind,
}

impl MenuEntry {
    /// Link to the group starting at `target`
    pub const fn submenu(label: &'static str, target: usize) -> Self {
        Self {
            label,
            kind: EntryKind::Submenu { target },
        }
    }

    /// Editable value with bounds and step
    pub const fn parameter(label: &'static str, value: i16, min: i16, max: i16, step: i16) -> Self {
        Self {
            label,
            kind: EntryKind::Parameter(Parameter::new(value, min, max, step)),
        }
    }

    /// Entry that fires `action`
    pub const fn action(label: &'static str, action: ActionId) -> Self {
        Self {
            label,
            kind: EntryKind::Action(action),
        }
    }

    /// Group terminator
    pub const fn group_end() -> Self {
        Self {
            label: "",
            kind: EntryKind::GroupEnd,
        }
    }

    /// Placeholder entry
    pub const fn stub(label: &'static str) -> Self {
        Self {
            label,
            kind: EntryKind::Stub,
        }
    }

    /// Check if this entry terminates a group
    pub fn is_group_end(&self) -> bool {
        matches!(self.kind, EntryKind::GroupEnd)
    }

    /// Parameter payload, if this is a parameter entry
    pub fn parameter_value(&self) -> Option<&Parameter> {
        match &self.kind {
            EntryKind::Parameter(param) => Some(param),
            _ => None,
        }
    }
}
