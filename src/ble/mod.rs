//! Bluetooth Low Energy subsystem.
//!
//! This module drives the Nordic SoftDevice S140 in **Peripheral** role:
//!
//! 1. **Advertising** - connectable, scannable undirected advertising with
//!    the device name, restarted whenever the connection manager asks for it.
//! 2. **Link** - once a central connects, the link is held open until the
//!    central goes away. No GATT services are exposed yet.
//! 3. **Connection Manager** - every connect/disconnect is forwarded to
//!    [`ConnectionManager`], which paints the status LED and re-arms
//!    advertising.

use core::mem;

use defmt::{info, warn};
use embassy_nrf::gpio::Output;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};
use fall_monitor::advertising::advertising_payload;
use fall_monitor::config;
use fall_monitor::{Advertiser, BleError, ConnectionEvents, ConnectionManager, Error, RgbIndicator};
use nrf_softdevice::ble::gatt_server::{self, WriteOp};
use nrf_softdevice::ble::peripheral::{self, AdvertiseError};
use nrf_softdevice::ble::Connection;
use nrf_softdevice::{raw, Softdevice};

/// Board RGB LED as wired in `main.rs`.
pub type StatusLed = RgbIndicator<Output<'static>, Output<'static>, Output<'static>>;

/// Raised whenever advertising should (re)start.
static ADVERTISE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Hands the restart request to [`peripheral_task`]'s advertising loop.
pub struct SignalAdvertiser;

impl Advertiser for SignalAdvertiser {
    fn resume_advertising(&mut self) -> Result<(), Error> {
        ADVERTISE.signal(());
        Ok(())
    }
}

/// GATT server with no services: keeps the link serviced until disconnect.
struct NoServices;

impl gatt_server::Server for NoServices {
    type Event = ();

    fn on_write(
        &self,
        _conn: &Connection,
        _handle: u16,
        _op: WriteOp,
        _offset: usize,
        _data: &[u8],
    ) -> Option<Self::Event> {
        None
    }
}

/// Enable the SoftDevice for a single peripheral link.
pub fn enable_softdevice() -> &'static Softdevice {
    let sd_config = nrf_softdevice::Config {
        clock: Some(raw::nrf_clock_lf_cfg_t {
            source: raw::NRF_CLOCK_LF_SRC_XTAL as u8,
            rc_ctiv: 0,
            rc_temp_ctiv: 0,
            accuracy: raw::NRF_CLOCK_LF_ACCURACY_20_PPM as u8,
        }),
        conn_gap: Some(raw::ble_gap_conn_cfg_t {
            conn_count: 1,
            event_length: 24,
        }),
        conn_gatt: Some(raw::ble_gatt_conn_cfg_t { att_mtu: 256 }),
        gatts_attr_tab_size: Some(raw::ble_gatts_cfg_attr_tab_size_t {
            attr_tab_size: raw::BLE_GATTS_ATTR_TAB_SIZE_DEFAULT,
        }),
        gap_role_count: Some(raw::ble_gap_cfg_role_count_t {
            adv_set_count: 1,
            periph_role_count: 1,
            central_role_count: 0,
            central_sec_count: 0,
            _bitfield_1: raw::ble_gap_cfg_role_count_t::new_bitfield_1(0),
        }),
        gap_device_name: Some(raw::ble_gap_cfg_device_name_t {
            p_value: config::BLE_DEVICE_NAME.as_ptr() as _,
            current_len: config::BLE_DEVICE_NAME.len() as u16,
            max_len: config::BLE_DEVICE_NAME.len() as u16,
            write_perm: unsafe { mem::zeroed() },
            _bitfield_1: raw::ble_gap_cfg_device_name_t::new_bitfield_1(
                raw::BLE_GATTS_VLOC_STACK as u8,
            ),
        }),
        ..Default::default()
    };

    info!("Starting SoftDevice");
    Softdevice::enable(&sd_config)
}

#[embassy_executor::task]
pub async fn softdevice_task(sd: &'static Softdevice) -> ! {
    sd.run().await
}

/// Advertise, hold the link, repeat.
///
/// The loop only restarts advertising when [`ADVERTISE`] is raised, which
/// the connection manager does from its disconnect handler.
#[embassy_executor::task]
pub async fn peripheral_task(sd: &'static Softdevice, led: StatusLed) -> ! {
    let mut manager = ConnectionManager::new(led, SignalAdvertiser);
    let adv_data = advertising_payload(config::BLE_DEVICE_NAME);
    let server = NoServices;

    // Nothing has disconnected yet, so arm the first round by hand.
    ADVERTISE.signal(());

    loop {
        ADVERTISE.wait().await;

        let conn = match advertise(sd, &adv_data).await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("BLE: {}", e);
                Timer::after(Duration::from_millis(config::ADV_RETRY_DELAY_MS)).await;
                ADVERTISE.signal(());
                continue;
            }
        };

        let peer = conn.peer_address();
        manager.on_connect(&peer);
        request_conn_params(&conn);

        // Returns once the central disconnects.
        let _ = gatt_server::run(&conn, &server, |_| {}).await;
        info!("BLE: link to {} closed", peer);

        manager.on_disconnect(&peer);
    }
}

async fn advertise(sd: &Softdevice, adv_data: &[u8]) -> Result<Connection, Error> {
    let adv_config = peripheral::Config {
        interval: config::BLE_ADV_INTERVAL,
        ..Default::default()
    };
    let adv = peripheral::ConnectableAdvertisement::ScannableUndirected {
        adv_data,
        scan_data: &[],
    };

    info!("BLE: advertising as {}", config::BLE_DEVICE_NAME);
    peripheral::advertise_connectable(sd, adv, &adv_config)
        .await
        .map_err(|e| match e {
            AdvertiseError::Raw(code) => BleError::Raw(code as u32).into(),
            _ => BleError::AdvertiseFailed.into(),
        })
}

fn request_conn_params(conn: &Connection) {
    let params = raw::ble_gap_conn_params_t {
        min_conn_interval: config::BLE_CONN_INTERVAL_MIN,
        max_conn_interval: config::BLE_CONN_INTERVAL_MAX,
        slave_latency: config::BLE_SLAVE_LATENCY,
        conn_sup_timeout: config::BLE_SUP_TIMEOUT,
    };
    if let Err(e) = conn.set_conn_params(params) {
        warn!("BLE: set_conn_params error: {:?}", e);
    }
}
