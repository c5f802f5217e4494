//! What a single input did

use super::state::Mode;
use crate::menu::ActionId;

/// Result of processing one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Released stick or an empty group; nothing happened
    Ignored,
    /// Cursor moved (possibly wrapped, possibly to the same entry)
    Moved { cursor: usize },
    /// Parameter under the cursor changed
    Adjusted { value: i16, clamped: bool },
    /// Switched between navigating and editing
    ModeChanged(Mode),
    /// A sub-menu became the active group
    EnteredGroup { start: usize, length: usize },
    /// An action callback ran
    ActionRun(ActionId),
    /// Press on an entry with nothing to do; acknowledged with a blink
    Rejected,
}

impl Outcome {
    /// Check if the screen content may have changed
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Outcome::Ignored | Outcome::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_redraw() {
        assert!(!Outcome::Ignored.needs_redraw());
        assert!(!Outcome::Rejected.needs_redraw());
        assert!(Outcome::Moved { cursor: 2 }.needs_redraw());
        assert!(Outcome::ModeChanged(Mode::Edit).needs_redraw());
        assert!(Outcome::ActionRun(ActionId(3)).needs_redraw());
    }
}
