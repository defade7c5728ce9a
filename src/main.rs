//! fall-monitor firmware entry point (nRF52840, SoftDevice S140).
//!
//! Brings up the Embassy HAL, the on-board RGB status LED and the BLE
//! peripheral. All connection logic lives in the library crate.

#![no_std]
#![no_main]

mod ble;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Level, Output, OutputDrive};
use embassy_nrf::interrupt::Priority;
use fall_monitor::{config, RgbIndicator};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("fall-monitor starting");

    // The SoftDevice reserves interrupt priorities 0, 1 and 4.
    let mut nrf_config = embassy_nrf::config::Config::default();
    nrf_config.gpiote_interrupt_priority = Priority::P2;
    nrf_config.time_interrupt_priority = Priority::P2;
    let p = embassy_nrf::init(nrf_config);

    // All channels dark until the first connection event.
    let off = if config::LED_ACTIVE_LOW {
        Level::High
    } else {
        Level::Low
    };
    let led = RgbIndicator::new(
        Output::new(p.P0_24, off, OutputDrive::Standard),
        Output::new(p.P0_16, off, OutputDrive::Standard),
        Output::new(p.P0_06, off, OutputDrive::Standard),
    );

    let sd = ble::enable_softdevice();
    unwrap!(spawner.spawn(ble::softdevice_task(sd)));
    unwrap!(spawner.spawn(ble::peripheral_task(sd, led)));
}
