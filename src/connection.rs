//! BLE connection state handler.
//!
//! The BLE stack owns the radio; this module only reacts to its
//! connect/disconnect notifications. A single [`ConnectionManager`] holds the
//! connection flag and drives two collaborators on every transition:
//!
//! - an [`Indicator`] (the RGB status LED), and
//! - an [`Advertiser`] that makes the device discoverable again after a
//!   central goes away.
//!
//! Side effects follow the *event*, not the state change: a duplicate
//! connect notification repaints the LED, a duplicate disconnect asks for
//! advertising again.

use crate::error::Error;
use crate::indicator::{Indicator, IndicatorState};

/// Connection state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionState {
    /// No central connected (initial).
    #[default]
    Disconnected,
    /// A central is connected.
    Connected,
}

/// Re-arms BLE advertising so a new central can connect.
pub trait Advertiser {
    fn resume_advertising(&mut self) -> Result<(), Error>;
}

/// Connection lifecycle callbacks, invoked by the BLE stack.
///
/// `P` is whatever the stack uses to identify the remote device. It is
/// never stored.
pub trait ConnectionEvents<P: ?Sized> {
    fn on_connect(&mut self, peer: &P);
    fn on_disconnect(&mut self, peer: &P);
}

/// Owns the connection flag and its side-effect collaborators.
pub struct ConnectionManager<I, A> {
    state: ConnectionState,
    indicator: I,
    advertiser: A,
}

impl<I: Indicator, A: Advertiser> ConnectionManager<I, A> {
    /// Starts disconnected. Does not touch the LED.
    pub const fn new(indicator: I, advertiser: A) -> Self {
        Self {
            state: ConnectionState::Disconnected,
            indicator,
            advertiser,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    pub fn advertiser(&self) -> &A {
        &self.advertiser
    }

    pub fn into_parts(self) -> (I, A) {
        (self.indicator, self.advertiser)
    }

    /// A central connected.
    pub fn connected(&mut self) {
        self.transition(ConnectionState::Connected);
        self.show(IndicatorState::CONNECTED);
    }

    /// The central disconnected: advertise again, then repaint.
    pub fn disconnected(&mut self) {
        self.transition(ConnectionState::Disconnected);
        if let Err(e) = self.advertiser.resume_advertising() {
            warn!("BLE: resume advertising failed: {:?}", e);
        }
        self.show(IndicatorState::DISCONNECTED);
    }

    fn transition(&mut self, next: ConnectionState) {
        if self.state == next {
            debug!("BLE: repeated {:?} notification", next);
        } else {
            info!("BLE: {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }

    // LED writes are fire-and-forget.
    fn show(&mut self, led: IndicatorState) {
        if let Err(e) = self.indicator.show(led) {
            warn!("LED: {:?}", e);
        }
    }
}

impl<P: ?Sized, I: Indicator, A: Advertiser> ConnectionEvents<P> for ConnectionManager<I, A> {
    fn on_connect(&mut self, _peer: &P) {
        self.connected();
    }

    fn on_disconnect(&mut self, _peer: &P) {
        self.disconnected();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[derive(Default)]
    struct Led {
        shown: Vec<IndicatorState>,
        fail: bool,
    }

    impl Indicator for Led {
        fn show(&mut self, state: IndicatorState) -> Result<(), Error> {
            self.shown.push(state);
            if self.fail {
                Err(Error::Indicator)
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct Adv {
        requests: usize,
        fail: bool,
    }

    impl Advertiser for Adv {
        fn resume_advertising(&mut self) -> Result<(), Error> {
            self.requests += 1;
            if self.fail {
                Err(Error::Advertise)
            } else {
                Ok(())
            }
        }
    }

    type Manager = ConnectionManager<Led, Adv>;

    #[test]
    fn starts_disconnected_without_side_effects() {
        let m = Manager::new(Led::default(), Adv::default());
        assert_eq!(m.state(), ConnectionState::Disconnected);
        assert!(!m.is_connected());
        assert!(m.indicator().shown.is_empty());
        assert_eq!(m.advertiser().requests, 0);
    }

    #[test]
    fn connect_sets_flag_and_green() {
        let mut m = Manager::new(Led::default(), Adv::default());
        m.on_connect(&());
        assert!(m.is_connected());
        assert_eq!(m.indicator().shown, [IndicatorState::CONNECTED]);
        assert_eq!(m.advertiser().requests, 0);
    }

    #[test]
    fn connect_then_disconnect_sequence() {
        let mut m = Manager::new(Led::default(), Adv::default());
        m.on_connect(&());
        m.on_disconnect(&());

        assert_eq!(m.state(), ConnectionState::Disconnected);
        assert_eq!(
            m.indicator().shown,
            [IndicatorState::CONNECTED, IndicatorState::DISCONNECTED]
        );
        assert_eq!(m.advertiser().requests, 1);
    }

    #[test]
    fn duplicate_connect_repaints() {
        let mut m = Manager::new(Led::default(), Adv::default());
        m.on_connect(&());
        assert!(m.is_connected());
        m.on_connect(&());
        assert!(m.is_connected());
        assert_eq!(
            m.indicator().shown,
            [IndicatorState::CONNECTED, IndicatorState::CONNECTED]
        );
    }

    #[test]
    fn disconnect_while_idle_still_advertises() {
        let mut m = Manager::new(Led::default(), Adv::default());
        m.on_disconnect(&());
        m.on_disconnect(&());
        assert!(!m.is_connected());
        assert_eq!(m.advertiser().requests, 2);
        assert_eq!(m.indicator().shown.len(), 2);
    }

    #[test]
    fn collaborator_failures_do_not_block_transition() {
        let led = Led {
            fail: true,
            ..Default::default()
        };
        let adv = Adv {
            fail: true,
            ..Default::default()
        };
        let mut m = Manager::new(led, adv);

        m.on_connect(&());
        assert!(m.is_connected());

        m.on_disconnect(&());
        assert!(!m.is_connected());
        assert_eq!(m.advertiser().requests, 1);
        // LED write still attempted after the advertise failure.
        assert_eq!(m.indicator().shown.last(), Some(&IndicatorState::DISCONNECTED));
    }

    #[test]
    fn peer_handle_is_opaque() {
        let mut m = Manager::new(Led::default(), Adv::default());
        ConnectionEvents::<str>::on_connect(&mut m, "AA:BB:CC:DD:EE:FF");
        ConnectionEvents::<[u8; 6]>::on_disconnect(&mut m, &[0; 6]);
        assert_eq!(m.advertiser().requests, 1);
    }

    #[test]
    fn into_parts_returns_collaborators() {
        let mut m = Manager::new(Led::default(), Adv::default());
        m.on_disconnect(&());
        let (led, adv) = m.into_parts();
        assert_eq!(led.shown, [IndicatorState::DISCONNECTED]);
        assert_eq!(adv.requests, 1);
    }
}
