//! Joystick polling task
//!
//! Samples the joystick once per tick and forwards each fresh deflection
//! to the UI loop. Holding the stick sends nothing more until it has been
//! released.

use defmt::*;
use embassy_time::{Duration, Ticker};

use joymenu_core::traits::InputSource;
use joymenu_core::InputPoller;
use joymenu_drivers::AnalogJoystick;
use joymenu_hal_rp2040::AdcInput;

use crate::channels::INPUT_CHANNEL;

/// Joystick wired to the RP2040 ADC
pub type Joystick = AnalogJoystick<AdcInput<'static>>;

/// Input task - polls the joystick every `tick_ms`
#[embassy_executor::task]
pub async fn input_task(mut joystick: Joystick, tick_ms: u32) {
    info!("Input task started ({} ms tick)", tick_ms);

    let mut ticker = Ticker::every(Duration::from_millis(tick_ms as u64));
    let mut poller = InputPoller::new();
    let mut reported_errors = 0;

    loop {
        ticker.next().await;

        if let Some(direction) = poller.poll(joystick.sample()) {
            debug!("Joystick: {}", direction);
            INPUT_CHANNEL.send(direction).await;
        }

        if joystick.errors() != reported_errors {
            reported_errors = joystick.errors();
            warn!("Joystick ADC conversion failed ({} total)", reported_errors);
        }
    }
}
