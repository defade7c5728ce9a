//! Advertising payload for the peripheral role.
//!
//! Built once at startup from [`crate::config::BLE_DEVICE_NAME`]: a Flags AD
//! structure followed by the local name.

use heapless::Vec;

/// Legacy advertising PDUs carry at most 31 bytes of AD structures.
pub const ADV_PAYLOAD_MAX: usize = 31;

const AD_TYPE_FLAGS: u8 = 0x01;
const AD_TYPE_SHORTENED_LOCAL_NAME: u8 = 0x08;
const AD_TYPE_COMPLETE_LOCAL_NAME: u8 = 0x09;

/// LE General Discoverable Mode | BR/EDR Not Supported.
pub const FLAGS_LE_ONLY_GENERAL_DISC: u8 = 0x06;

/// Flags + local name. Names that do not fit are cut and advertised as a
/// shortened local name.
pub fn advertising_payload(name: &str) -> Vec<u8, ADV_PAYLOAD_MAX> {
    let mut data = Vec::new();
    let _ = data.extend_from_slice(&[0x02, AD_TYPE_FLAGS, FLAGS_LE_ONLY_GENERAL_DISC]);

    let room = ADV_PAYLOAD_MAX - data.len() - 2;
    let (name, ad_type) = if name.len() > room {
        (&name.as_bytes()[..room], AD_TYPE_SHORTENED_LOCAL_NAME)
    } else {
        (name.as_bytes(), AD_TYPE_COMPLETE_LOCAL_NAME)
    };

    let _ = data.extend_from_slice(&[name.len() as u8 + 1, ad_type]);
    let _ = data.extend_from_slice(name);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_then_complete_name() {
        let data = advertising_payload("FallDetector");
        assert_eq!(&data[..3], &[0x02, 0x01, 0x06]);
        assert_eq!(data[3], 13); // len = type byte + 12 name bytes
        assert_eq!(data[4], AD_TYPE_COMPLETE_LOCAL_NAME);
        assert_eq!(&data[5..], b"FallDetector");
        assert_eq!(data.len(), 17);
    }

    #[test]
    fn empty_name_still_has_name_structure() {
        let data = advertising_payload("");
        assert_eq!(data.as_slice(), &[0x02, 0x01, 0x06, 0x01, 0x09]);
    }

    #[test]
    fn long_name_is_shortened_to_fit() {
        let name = "Fall-Detector-Wearable-Left-Wrist-01";
        let data = advertising_payload(name);
        assert_eq!(data.len(), ADV_PAYLOAD_MAX);
        assert_eq!(data[4], AD_TYPE_SHORTENED_LOCAL_NAME);
        assert_eq!(data[3] as usize, ADV_PAYLOAD_MAX - 4);
        assert_eq!(&data[5..], &name.as_bytes()[..26]);
    }

    #[test]
    fn name_exactly_filling_pdu_is_complete() {
        let name = "ABCDEFGHIJKLMNOPQRSTUVWXYZ"; // 26 bytes
        let data = advertising_payload(name);
        assert_eq!(data.len(), ADV_PAYLOAD_MAX);
        assert_eq!(data[4], AD_TYPE_COMPLETE_LOCAL_NAME);
    }
}
