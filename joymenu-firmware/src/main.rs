//! Joymenu - Joystick Menu Firmware
//!
//! Firmware binary for an RP2040 board carrying a PCD8544 84x48 LCD, a
//! backlight and a five-way analog joystick (the LCD4884 shield layout).
//! The joystick is polled in its own task; the main task owns the menu
//! system and the display and redraws after every input.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{self, Blocking, Spi};
use embassy_time::Delay;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use {defmt_rtt as _, panic_probe as _};

use joymenu_core::traits::Backlight;
use joymenu_core::{MenuSystem, Outcome};
use joymenu_display::TextDisplay;
use joymenu_drivers::{AnalogJoystick, Pcd8544, PinBacklight};
use joymenu_hal_rp2040::{AdcChannel, AdcInput, BacklightOutput};

use crate::channels::INPUT_CHANNEL;
use crate::config::MENU_CONFIG;
use crate::menu_def::{DemoActions, DeviceRequest, MENU_CAPACITY};

mod channels;
mod config;
mod menu_def;
mod tasks;

/// LCD SPI clock (PCD8544 tops out at 4 MHz)
const LCD_SPI_HZ: u32 = 4_000_000;

/// Character grid of the PCD8544
const LCD_ROWS: usize = 6;
const LCD_COLS: usize = 14;

type Lcd = Pcd8544<
    ExclusiveDevice<Spi<'static, SPI0, Blocking>, Output<'static>, NoDelay>,
    Output<'static>,
    Output<'static>,
>;
type Display = TextDisplay<Lcd, LCD_ROWS, LCD_COLS>;
type Light = PinBacklight<BacklightOutput<'static>, Delay>;
type System = MenuSystem<Display, Light, Delay, MENU_CAPACITY>;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Joymenu firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    let config = MENU_CONFIG;
    info!("Peripherals initialized, config: {}", config);

    // LCD on SPI0 (SCK=GPIO18, MOSI=GPIO19, CS=GPIO17, DC=GPIO20, RST=GPIO21)
    let mut spi_config = spi::Config::default();
    spi_config.frequency = LCD_SPI_HZ;
    let bus = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let cs = Output::new(p.PIN_17, Level::High);
    let device = match ExclusiveDevice::new_no_delay(bus, cs) {
        Ok(device) => device,
        Err(never) => match never {},
    };
    let dc = Output::new(p.PIN_20, Level::Low);
    let rst = Output::new(p.PIN_21, Level::High);

    let mut lcd: Lcd = Pcd8544::new(device, dc, rst);
    if let Err(e) = lcd.init(&mut Delay) {
        error!("LCD init failed: {}", e);
    }
    let display: Display = unwrap!(TextDisplay::new(lcd));
    info!("LCD initialized");

    // Backlight (GPIO22, active high)
    let light_pin = BacklightOutput::new(Output::new(p.PIN_22, Level::Low));
    let backlight: Light = PinBacklight::new_active_high(light_pin, Delay, config.tick_ms);

    // Joystick ladder on ADC0 (GPIO26)
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let channel = Channel::new_pin(p.PIN_26, Pull::None);
    let input = AdcInput::new(adc, channel, AdcChannel::Adc0);
    info!("Joystick on {} (GPIO{})", input.id(), input.id().gpio());
    let joystick = AnalogJoystick::new(input);

    // Menu
    let menu = unwrap!(menu_def::build());
    if let Err(e) = menu.validate() {
        error!("Menu table is broken: {}", e);
    }
    info!("Menu loaded: {} entries", menu.len());

    let mut system: System = MenuSystem::new(menu, display, backlight, Delay, config);
    let mut actions = DemoActions::default();

    if let Err(e) = system.display_mut().reset() {
        warn!("Display reset failed: {}", e);
    }
    if let Err(e) = system.welcome() {
        warn!("Welcome banner failed: {}", e);
    }
    redraw(&mut system);

    // Spawn tasks
    spawner.spawn(tasks::input_task(joystick, config.tick_ms)).unwrap();

    info!("Input task spawned, menu running");

    loop {
        let direction = INPUT_CHANNEL.receive().await;
        let outcome = system.process_direction(direction, &mut actions);

        match outcome {
            Outcome::Ignored => continue,
            Outcome::Rejected => debug!("{} rejected", direction),
            other => info!("{} -> {}", direction, other),
        }

        if let Some(request) = actions.take_request() {
            apply(&mut system, request);
        }

        if outcome.needs_redraw() {
            redraw(&mut system);
        }
    }
}

/// Render the menu, logging rather than failing on display errors
fn redraw(system: &mut System) {
    match system.render() {
        Ok(Some(view)) => trace!("Rendered rows {}..{}", view.first, view.first + view.len),
        Ok(None) => warn!("Active group is empty or malformed"),
        Err(e) => warn!("Render failed: {}", e),
    }
}

/// Carry out a hardware change requested by an action
fn apply(system: &mut System, request: DeviceRequest) {
    info!("Applying {}", request);
    match request {
        DeviceRequest::ToggleBacklight => system.backlight_mut().toggle(),
        DeviceRequest::SetContrast(contrast) => {
            if let Err(e) = system.display_mut().backend_mut().set_contrast(contrast) {
                warn!("Contrast change failed: {}", e);
            }
        }
    }
}
