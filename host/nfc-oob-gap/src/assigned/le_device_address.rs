//! LE Bluetooth Device Address data type
//!
//! The data is the six bytes of the address followed by one byte for the type of address. The
//! lowest bit of the type byte is set when the address is a random address.

use super::{AdStruct, AssignedTypes, ConvertError, IntoStruct, StructIntermediate};
use crate::BluetoothDeviceAddress;

/// LE Bluetooth Device Address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeDeviceAddress {
    address: BluetoothDeviceAddress,
    is_random: bool,
}

impl LeDeviceAddress {
    const ASSIGNED_TYPE: AssignedTypes = AssignedTypes::LEBluetoothDeviceAddress;

    /// The size of the AD struct
    pub const STRUCT_SIZE: usize = BluetoothDeviceAddress::LEN + 1 + super::HEADER_SIZE;

    /// Create a `LeDeviceAddress` for a public address
    pub fn public(address: BluetoothDeviceAddress) -> Self {
        LeDeviceAddress {
            address,
            is_random: false,
        }
    }

    /// Create a `LeDeviceAddress` for a random address
    pub fn random(address: BluetoothDeviceAddress) -> Self {
        LeDeviceAddress {
            address,
            is_random: true,
        }
    }

    pub fn is_random(&self) -> bool {
        self.is_random
    }

    pub fn into_inner(self) -> BluetoothDeviceAddress {
        self.address
    }
}

impl core::ops::Deref for LeDeviceAddress {
    type Target = BluetoothDeviceAddress;

    fn deref(&self) -> &Self::Target {
        &self.address
    }
}

impl IntoStruct for LeDeviceAddress {
    fn data_len(&self) -> usize {
        self.address.len() + 1
    }

    fn convert_into<'a>(&self, ad: &'a mut [u8]) -> Result<AdStruct<'a>, ConvertError> {
        let mut interm = StructIntermediate::try_new(ad, Self::ASSIGNED_TYPE, self.data_len())?;

        self.address
            .iter()
            .chain(core::iter::once(&(self.is_random as u8)))
            .for_each(|b| {
                if let Some(byte) = interm.next() {
                    *byte = *b
                }
            });

        Ok(interm.finish())
    }
}
