//! Host-testable core of the fall-monitor firmware.
//!
//! Everything here is pure logic or generic over `embedded-hal` traits, so
//! it builds for the nRF52840 and runs under `cargo test --lib` on the host
//! (no embedded hardware required).
//!
//! - [`connection`]: BLE connection state and its LED/advertising side effects.
//! - [`indicator`]: RGB status LED levels and a GPIO-backed driver.
//! - [`magnitude`]: Signal Vector Magnitude and cube-root product magnitude.
//! - [`advertising`]: the peripheral's advertising payload.
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and wires these modules to the SoftDevice and the board pins.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod log;

pub mod advertising;
pub mod config;
pub mod connection;
pub mod error;
pub mod indicator;
pub mod magnitude;

pub use connection::{Advertiser, ConnectionEvents, ConnectionManager, ConnectionState};
pub use error::{BleError, Error};
pub use indicator::{Indicator, IndicatorState, RgbIndicator};
pub use magnitude::{product_magnitude, vector_magnitude, TriaxialSample};
