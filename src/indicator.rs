//! RGB status LED.
//!
//! The LED is three independent digital lines. States are expressed as the
//! literal line levels written to the pins, not as logical colours, because
//! the on-board LED is active-low (see [`crate::config::LED_ACTIVE_LOW`]).

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::Error;

/// Levels for the red, green and blue lines, written in that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorState {
    pub red: PinState,
    pub green: PinState,
    pub blue: PinState,
}

impl IndicatorState {
    /// A central is connected: only green is driven low (lit).
    pub const CONNECTED: Self = Self {
        red: PinState::High,
        green: PinState::Low,
        blue: PinState::High,
    };

    /// No central: red low, green high, blue high.
    ///
    /// These are exactly the levels the firmware has always written on
    /// disconnect. On the active-low board LED they light red only; keep
    /// the blue level as-is until the intended colour is confirmed.
    pub const DISCONNECTED: Self = Self {
        red: PinState::Low,
        green: PinState::High,
        blue: PinState::High,
    };

    /// Whether `line` is lit on an LED with the given polarity.
    pub fn is_lit(line: PinState, active_low: bool) -> bool {
        (line == PinState::Low) == active_low
    }
}

/// Anything that can display an [`IndicatorState`].
pub trait Indicator {
    fn show(&mut self, state: IndicatorState) -> Result<(), Error>;
}

/// Three GPIO lines driving a discrete RGB LED.
pub struct RgbIndicator<R, G, B> {
    red: R,
    green: G,
    blue: B,
}

impl<R, G, B> RgbIndicator<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self { red, green, blue }
    }

    /// Release the pins.
    pub fn into_pins(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

impl<R, G, B> Indicator for RgbIndicator<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    /// Writes all three lines even if an earlier one fails; the first
    /// failure is reported.
    fn show(&mut self, state: IndicatorState) -> Result<(), Error> {
        let red = self.red.set_state(state.red).map_err(|_| Error::Indicator);
        let green = self.green.set_state(state.green).map_err(|_| Error::Indicator);
        let blue = self.blue.set_state(state.blue).map_err(|_| Error::Indicator);
        red.and(green).and(blue)
    }
}
