//! Core types of `nfc-oob`
//!
//! These are the types shared by the other crates of `nfc-oob`. The most important one is the
//! [`EncodeBuffer`](buffer::EncodeBuffer), the buffer every encoder of advertising data is handed.
#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod buffer;

/// A Bluetooth device address
///
/// The address is stored in the same little endian byte order used when it is sent within a
/// Bluetooth packet, so the first byte is the least significant byte of the address.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BluetoothDeviceAddress(pub [u8; 6]);

impl BluetoothDeviceAddress {
    /// The number of bytes within a Bluetooth device address
    pub const LEN: usize = 6;

    /// Create a `BluetoothDeviceAddress` where every byte is zero
    pub const fn zeroed() -> Self {
        BluetoothDeviceAddress([0; 6])
    }
}

impl From<[u8; 6]> for BluetoothDeviceAddress {
    fn from(a: [u8; 6]) -> Self {
        BluetoothDeviceAddress(a)
    }
}

impl core::ops::Deref for BluetoothDeviceAddress {
    type Target = [u8; 6];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl core::ops::DerefMut for BluetoothDeviceAddress {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl core::fmt::Display for BluetoothDeviceAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // displayed most significant byte first
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[5], self.0[4], self.0[3], self.0[2], self.0[1], self.0[0]
        )
    }
}
