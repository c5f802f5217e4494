//! Joystick input decoding
//!
//! The joystick shield wires its five switches into a resistor ladder on a
//! single analog pin. Each direction lands in its own band of the 10-bit
//! reading. The band edges are a calibration contract with the hardware
//! and must not be retuned here.

use embedded_hal::delay::DelayNs;

use crate::traits::InputSource;

/// Readings below this (but above zero) are a press
pub const PRESS_BELOW: u16 = 150;
/// Readings below this are down
pub const DOWN_BELOW: u16 = 350;
/// Readings below this are right
pub const RIGHT_BELOW: u16 = 510;
/// Readings below this are up; anything at or above is released
pub const UP_BELOW: u16 = 750;

/// Decoded joystick direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Stick released
    Off,
    Up,
    Down,
    Left,
    Right,
    /// Stick pushed in
    Press,
}

impl Direction {
    /// Check if the stick is deflected or pressed
    pub fn is_active(&self) -> bool {
        !matches!(self, Direction::Off)
    }
}

/// Map a raw 10-bit sample to a direction
///
/// Total over the input range: every value maps to exactly one direction.
pub const fn decode(raw: u16) -> Direction {
    if raw == 0 {
        Direction::Left
    } else if raw < PRESS_BELOW {
        Direction::Press
    } else if raw < DOWN_BELOW {
        Direction::Down
    } else if raw < RIGHT_BELOW {
        Direction::Right
    } else if raw < UP_BELOW {
        Direction::Up
    } else {
        Direction::Off
    }
}

/// Block until the stick reads `target`
///
/// Samples once per `tick_ms`, then waits one more tick after the match
/// so the caller does not see contact bounce. There is no timeout and no
/// way to cancel: a caller that must stay responsive uses [`InputPoller`]
/// from its own scheduling loop instead.
pub fn wait_for_direction<S, D>(source: &mut S, delay: &mut D, target: Direction, tick_ms: u32)
where
    S: InputSource,
    D: DelayNs,
{
    loop {
        delay.delay_ms(tick_ms);
        if decode(source.sample()) == target {
            break;
        }
    }
    delay.delay_ms(tick_ms);
}

/// Non-blocking edge detector over decoded samples
///
/// Feed one sample per tick. A direction is reported once, on the first
/// tick it appears; holding the stick produces nothing further until it
/// has been released to `Off`. This gives the same "act, then wait for
/// release" behavior as [`wait_for_direction`] without blocking.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputPoller {
    armed: bool,
}

impl InputPoller {
    /// Create a poller that accepts the first non-off reading
    pub const fn new() -> Self {
        Self { armed: true }
    }

    /// Feed a raw sample, returning a direction on a fresh deflection
    pub fn poll(&mut self, raw: u16) -> Option<Direction> {
        self.poll_direction(decode(raw))
    }

    /// Feed an already decoded direction
    pub fn poll_direction(&mut self, direction: Direction) -> Option<Direction> {
        if !direction.is_active() {
            self.armed = true;
            return None;
        }

        if self.armed {
            self.armed = false;
            Some(direction)
        } else {
            None
        }
    }

    /// Check if the poller is waiting for a new deflection
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

impl Default for InputPoller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(decode(0), Direction::Left);
        assert_eq!(decode(1), Direction::Press);
        assert_eq!(decode(149), Direction::Press);
        assert_eq!(decode(150), Direction::Down);
        assert_eq!(decode(349), Direction::Down);
        assert_eq!(decode(350), Direction::Right);
        assert_eq!(decode(509), Direction::Right);
        assert_eq!(decode(510), Direction::Up);
        assert_eq!(decode(749), Direction::Up);
        assert_eq!(decode(750), Direction::Off);
        assert_eq!(decode(1023), Direction::Off);
        assert_eq!(decode(u16::MAX), Direction::Off);
    }

    #[test]
    fn test_poller_reports_once_per_deflection() {
        let mut poller = InputPoller::new();

        assert_eq!(poller.poll(1023), None);
        assert_eq!(poller.poll(600), Some(Direction::Up));
        // Held
        assert_eq!(poller.poll(600), None);
        assert_eq!(poller.poll(600), None);
        assert!(!poller.is_armed());

        // Released, then pushed again
        assert_eq!(poller.poll(900), None);
        assert!(poller.is_armed());
        assert_eq!(poller.poll(600), Some(Direction::Up));
    }

    #[test]
    fn test_poller_ignores_direction_change_while_held() {
        let mut poller = InputPoller::new();

        assert_eq!(poller.poll(200), Some(Direction::Down));
        // Sliding across bands without releasing is not a new input
        assert_eq!(poller.poll(400), None);
        assert_eq!(poller.poll(800), None);
        assert_eq!(poller.poll(400), Some(Direction::Right));
    }

    struct Script<'a> {
        samples: &'a [u16],
        next: usize,
    }

    impl InputSource for Script<'_> {
        fn sample(&mut self) -> u16 {
            let value = self.samples[self.next.min(self.samples.len() - 1)];
            self.next += 1;
            value
        }
    }

    #[derive(Default)]
    struct CountingDelay {
        total_ms: u32,
        calls: u32,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ms += ns / 1_000_000;
            self.calls += 1;
        }

        fn delay_ms(&mut self, ms: u32) {
            self.total_ms += ms;
            self.calls += 1;
        }
    }

    #[test]
    fn test_wait_for_direction_polls_until_match() {
        let mut source = Script {
            samples: &[600, 600, 100, 1000],
            next: 0,
        };
        let mut delay = CountingDelay::default();

        wait_for_direction(&mut source, &mut delay, Direction::Off, 100);

        assert_eq!(source.next, 4);
        // One delay before each of the four samples, plus the settle delay
        assert_eq!(delay.calls, 5);
        assert_eq!(delay.total_ms, 500);
    }

    #[test]
    fn test_wait_for_direction_immediate_match() {
        let mut source = Script {
            samples: &[0],
            next: 0,
        };
        let mut delay = CountingDelay::default();

        wait_for_direction(&mut source, &mut delay, Direction::Left, 10);

        assert_eq!(source.next, 1);
        assert_eq!(delay.total_ms, 20);
    }
}
