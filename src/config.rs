//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// BLE

/// Complete local name placed in the advertising payload.
pub const BLE_DEVICE_NAME: &str = "FallDetector";

/// Advertising interval (in 0.625 ms units). 160 = 100 ms.
pub const BLE_ADV_INTERVAL: u32 = 160;

/// BLE connection interval range (in 1.25 ms units).
/// 24..40 = 30..50 ms, enough for accelerometer-rate notifications.
pub const BLE_CONN_INTERVAL_MIN: u16 = 24;
pub const BLE_CONN_INTERVAL_MAX: u16 = 40;

/// BLE slave latency (number of connection events the peripheral can skip).
pub const BLE_SLAVE_LATENCY: u16 = 0;

/// BLE supervision timeout (in 10 ms units). 400 = 4 s.
pub const BLE_SUP_TIMEOUT: u16 = 400;

/// Back-off before retrying when the SoftDevice refuses to advertise (ms).
pub const ADV_RETRY_DELAY_MS: u64 = 500;

// GPIO pin assignments (Arduino Nano 33 BLE on-board RGB LED)
//
// These are logical names; actual `embassy_nrf::peripherals::*` pins are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   LEDR → P0.24
//   LEDG → P0.16
//   LEDB → P0.06

/// The on-board RGB LED is wired common-anode: driving a line low lights it.
pub const LED_ACTIVE_LOW: bool = true;
