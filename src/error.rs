//! Unified error type for fall-monitor.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.

/// Top-level error type used across the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Status LED
    /// Writing one of the RGB indicator lines failed.
    Indicator,

    // BLE
    /// The request to resume advertising could not be issued.
    Advertise,

    /// The SoftDevice returned a BLE-level error.
    Ble(BleError),
}

/// Subset of BLE errors we propagate (keeps the enum `Copy`-friendly).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BleError {
    /// GAP raw error code from the SoftDevice.
    Raw(u32),
    /// Connectable advertising could not start.
    AdvertiseFailed,
}

// Convenience conversions

impl From<BleError> for Error {
    fn from(e: BleError) -> Self {
        Error::Ble(e)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Indicator => f.write_str("status LED write failed"),
            Error::Advertise => f.write_str("advertising request failed"),
            Error::Ble(BleError::Raw(code)) => write!(f, "softdevice error {:#x}", code),
            Error::Ble(BleError::AdvertiseFailed) => f.write_str("could not start advertising"),
        }
    }
}
