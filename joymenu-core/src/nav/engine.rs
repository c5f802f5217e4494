//! Menu system: navigation state plus the devices it drives
//!
//! The engine is single-threaded and synchronous. Action callbacks run
//! inside [`MenuSystem::process_direction`] and may rewrite the menu table;
//! the navigation state is re-read from the table afterwards.

use embedded_hal::delay::DelayNs;

use super::outcome::Outcome;
use super::state::{Mode, NavigationState};
use crate::config::MenuConfig;
use crate::input::{decode, wait_for_direction, Direction};
use crate::menu::{ActionId, EntryKind, Menu};
use crate::traits::{
    ActionHandler, Backlight, DisplayError, DisplaySink, DisplaySinkExt, InputSource, Style,
};
use crate::viewport::Viewport;

/// Shown while an action callback runs
pub const PROCESSING_MESSAGE: &str = "Processing ...";

/// Shown once at power-up
pub const WELCOME_MESSAGE: &str = "Starting ...";

/// Row used for transient messages
const MESSAGE_ROW: u8 = 2;

/// Menu table, navigation state and the hardware they are shown on
pub struct MenuSystem<D, B, T, const N: usize> {
    menu: Menu<N>,
    state: NavigationState,
    display: D,
    backlight: B,
    delay: T,
    config: MenuConfig,
}

impl<D, B, T, const N: usize> MenuSystem<D, B, T, N>
where
    D: DisplaySink,
    B: Backlight,
    T: DelayNs,
{
    /// Create the system with the cursor on the first entry of the table
    pub fn new(menu: Menu<N>, display: D, mut backlight: B, delay: T, config: MenuConfig) -> Self {
        if config.backlight_on_start {
            backlight.on();
        } else {
            backlight.off();
        }

        Self {
            state: NavigationState::new(&menu),
            menu,
            display,
            backlight,
            delay,
            config,
        }
    }

    /// Show the power-up banner, wait, then clear
    pub fn welcome(&mut self) -> Result<(), DisplayError> {
        self.display.say(1, MESSAGE_ROW, WELCOME_MESSAGE, Style::Normal)?;
        self.display.flush()?;
        self.delay
            .delay_ms(self.config.pause_ms(self.config.welcome_pause_ticks));
        self.display.clear()?;
        self.display.flush()
    }

    /// Apply one decoded direction
    ///
    /// Never fails: display errors during transitions are dropped and a
    /// malformed group simply ignores input.
    pub fn process_direction<A>(&mut self, direction: Direction, actions: &mut A) -> Outcome
    where
        A: ActionHandler<N>,
    {
        if direction == Direction::Off || !self.state.has_group() {
            return Outcome::Ignored;
        }

        let editing = self.state.mode == Mode::Edit;
        match direction {
            Direction::Up if editing => self.adjust_by_step(1),
            Direction::Up => self.moved(NavigationState::select_prev),
            Direction::Down if editing => self.adjust_by_step(-1),
            Direction::Down => self.moved(NavigationState::select_next),
            Direction::Left if editing => self.adjust(-1),
            Direction::Left => self.moved(NavigationState::select_first),
            Direction::Right if editing => self.adjust(1),
            Direction::Right => self.moved(NavigationState::select_last),
            Direction::Press => self.press(actions),
            Direction::Off => Outcome::Ignored,
        }
    }

    /// Draw the visible part of the active group
    ///
    /// Returns the window that was drawn, or `None` for an empty group
    /// (the screen is left untouched).
    pub fn render(&mut self) -> Result<Option<Viewport>, DisplayError> {
        let rows = self.config.visible_rows as usize;
        let Some(view) = Viewport::compute(
            self.state.cursor,
            self.state.group_start,
            self.state.group_length,
            rows,
        ) else {
            return Ok(None);
        };

        for (row, index) in view.indices().enumerate() {
            let Some(entry) = self.menu.get(index) else {
                break;
            };
            let selected = index == self.state.cursor;
            let style = Style::selected_if(selected);

            match &entry.kind {
                EntryKind::Parameter(param) => {
                    // While editing only the value is inverted
                    let label_style = if selected && self.state.is_editing() {
                        Style::Normal
                    } else {
                        style
                    };
                    self.display
                        .say_value(0, row as u8, entry.label, param.value, label_style, style)?;
                }
                _ => self.display.say(0, row as u8, entry.label, style)?,
            }
        }

        for row in view.len..rows {
            self.display.clear_line(row as u8)?;
        }

        self.display.flush()?;
        Ok(Some(view))
    }

    /// One turn of the classic blocking loop
    ///
    /// Sample, act, redraw, then block until the stick is released.
    pub fn step_blocking<S, A>(
        &mut self,
        source: &mut S,
        actions: &mut A,
    ) -> Result<Outcome, DisplayError>
    where
        S: InputSource,
        A: ActionHandler<N>,
    {
        let outcome = self.process_direction(decode(source.sample()), actions);
        let rendered = self.render();
        wait_for_direction(source, &mut self.delay, Direction::Off, self.config.tick_ms);
        rendered.map(|_| outcome)
    }

    /// Get the menu table
    pub fn menu(&self) -> &Menu<N> {
        &self.menu
    }

    /// Get the menu table mutably
    ///
    /// Call [`MenuSystem::refresh`] after changing group structure.
    pub fn menu_mut(&mut self) -> &mut Menu<N> {
        &mut self.menu
    }

    /// Get the navigation state
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Re-read the active group from the table
    pub fn refresh(&mut self) {
        self.state.refresh(&self.menu);
    }

    /// Get the display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get the display mutably
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Get the backlight
    pub fn backlight(&self) -> &B {
        &self.backlight
    }

    /// Get the backlight mutably
    pub fn backlight_mut(&mut self) -> &mut B {
        &mut self.backlight
    }

    /// Get the configuration
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    fn moved(&mut self, step: fn(&mut NavigationState)) -> Outcome {
        step(&mut self.state);
        Outcome::Moved {
            cursor: self.state.cursor,
        }
    }

    fn adjust_by_step(&mut self, sign: i32) -> Outcome {
        let step = self
            .menu
            .parameter(self.state.cursor)
            .map(|param| param.step as i32)
            .unwrap_or(0);
        self.adjust(sign * step)
    }

    fn adjust(&mut self, delta: i32) -> Outcome {
        let Some(param) = self.menu.parameter_mut(self.state.cursor) else {
            // Cursor is no longer on a parameter
            self.state.mode = Mode::Navigate;
            return Outcome::ModeChanged(Mode::Navigate);
        };

        let result = param.adjust(delta);
        if result.clamped {
            self.backlight.blink(1);
        }

        Outcome::Adjusted {
            value: result.value,
            clamped: result.clamped,
        }
    }

    fn press<A: ActionHandler<N>>(&mut self, actions: &mut A) -> Outcome {
        let Some(kind) = self.menu.get(self.state.cursor).map(|entry| entry.kind) else {
            self.backlight.blink(1);
            return Outcome::Rejected;
        };

        match kind {
            EntryKind::Parameter(_) => {
                self.state.change_mode(&self.menu);
                Outcome::ModeChanged(self.state.mode)
            }
            EntryKind::Submenu { target } => {
                self.state.enter_group(target, &self.menu);
                self.clear_after(self.config.submenu_pause_ticks);
                Outcome::EnteredGroup {
                    start: self.state.group_start,
                    length: self.state.group_length,
                }
            }
            EntryKind::Action(action) => self.run_action(action, actions),
            EntryKind::GroupEnd | EntryKind::Stub => {
                self.backlight.blink(1);
                Outcome::Rejected
            }
        }
    }

    fn run_action<A: ActionHandler<N>>(&mut self, action: ActionId, actions: &mut A) -> Outcome {
        self.clear_after(self.config.action_pause_ticks);
        self.display
            .say(0, MESSAGE_ROW, PROCESSING_MESSAGE, Style::Normal)
            .and_then(|_| self.display.flush())
            .ok();

        actions.run(action, &mut self.menu);
        self.state.refresh(&self.menu);

        self.clear_after(self.config.action_pause_ticks);

        Outcome::ActionRun(action)
    }

    fn clear_after(&mut self, ticks: u8) {
        self.delay.delay_ms(self.config.pause_ms(ticks));
        self.display.clear().ok();
    }
}
