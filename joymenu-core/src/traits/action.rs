//! Action callback trait

use crate::menu::{ActionId, Menu};

/// User logic behind `Action` entries
///
/// Called synchronously from inside `process_direction`. The handler gets
/// the menu itself, so it may read or rewrite parameter values.
pub trait ActionHandler<const N: usize> {
    /// Run the action bound to `action`
    fn run(&mut self, action: ActionId, menu: &mut Menu<N>);
}

impl<F, const N: usize> ActionHandler<N> for F
where
    F: FnMut(ActionId, &mut Menu<N>),
{
    fn run(&mut self, action: ActionId, menu: &mut Menu<N>) {
        self(action, menu)
    }
}
