#![allow(dead_code)]

use nfc_oob_gap::advdata::{AdvDataEncoder, LocalDevice};
use nfc_oob_gap::assigned::appearance::Appearance;
use nfc_oob_gap::assigned::le_device_address::LeDeviceAddress;
use nfc_oob_gap::BluetoothDeviceAddress;

pub const DEVICE_NAME: &str = "OOB Test Device";

/// Install the test logger
///
/// Only the first call within a test binary actually installs it.
pub fn init_logger() {
    let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Trace, simplelog::Config::default());
}

pub fn device() -> LocalDevice {
    LocalDevice {
        name: DEVICE_NAME.into(),
        address: LeDeviceAddress::random(BluetoothDeviceAddress([0xC1, 0xB2, 0xA3, 0x94, 0x85, 0xF6])),
        appearance: Appearance::GENERIC_PHONE,
    }
}

pub fn standard_encoder() -> AdvDataEncoder<LocalDevice> {
    AdvDataEncoder::new(device())
}

/// Get the AD types of the structures within `data`, in order
pub fn ad_types(data: &[u8]) -> Vec<u8> {
    let mut types = Vec::new();

    let mut offset = 0;

    while offset < data.len() {
        let len = data[offset] as usize;

        types.push(data[offset + 1]);

        offset += 1 + len;
    }

    assert_eq!(offset, data.len(), "last AD structure runs past the data");

    types
}
