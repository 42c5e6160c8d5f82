//! Standard advertising data fields
//!
//! Out of band data for LE pairing may contain the same AD structures that are sent within
//! advertising data. These are the LE device address, appearance, flags, the local name, and lists
//! of service UUIDs. The [`AdvDataEncoder`] encodes these fields with information it gets from a
//! [`GapDevice`].
//!
//! The structures are always placed in the same order:
//! 1) LE device address
//! 2) appearance
//! 3) flags
//! 4) local name
//! 5) complete list of 16-bit service UUIDs
//! 6) complete list of 128-bit service UUIDs
//!
//! The same steps are taken in both modes of an [`EncodeBuffer`], so the size measured for a
//! `StandardFields` is the size written for it (as long as the device information does not change
//! between the two).

use crate::assigned::appearance::Appearance;
use crate::assigned::flags::Flags;
use crate::assigned::le_device_address::LeDeviceAddress;
use crate::assigned::local_name::LocalName;
use crate::assigned::service_uuids::Services;
use crate::assigned::{encode_struct, ConvertError};
use alloc::string::String;
use nfc_oob_core::buffer::EncodeBuffer;

/// How the local name is included
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NameMode {
    /// The name is not included
    #[default]
    None,
    /// The complete local name is included
    Full,
    /// The name is shortened to at most this number of bytes
    Short(usize),
}

/// The standard fields of advertising data
///
/// These are the fields rendered by an implementation of [`StandardFieldEncoder`]. The values that
/// come from the device itself (the address, appearance, and name) are only selected here, their
/// values are retrieved from a [`GapDevice`] when encoding.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardFields {
    /// Include the LE Bluetooth device address
    pub include_le_address: bool,
    /// Include the appearance
    pub include_appearance: bool,
    /// The flags, these are not included if no flag is enabled
    pub flags: Flags,
    /// Include the local name
    pub name: NameMode,
    /// The complete list of 16-bit service UUIDs, not included if empty
    pub service_uuids_16: Services<u16>,
    /// The complete list of 128-bit service UUIDs, not included if empty
    pub service_uuids_128: Services<u128>,
}

impl StandardFields {
    /// Check if no field is selected
    pub fn is_empty(&self) -> bool {
        !self.include_le_address
            && !self.include_appearance
            && !self.flags.any()
            && self.name == NameMode::None
            && self.service_uuids_16.is_empty()
            && self.service_uuids_128.is_empty()
    }
}

/// Error from a [`GapDevice`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    /// The device name could not be retrieved
    NameUnavailable,
    /// The device address could not be retrieved
    AddressUnavailable,
    /// The appearance could not be retrieved
    AppearanceUnavailable,
}

impl core::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DeviceError::NameUnavailable => f.write_str("device name is unavailable"),
            DeviceError::AddressUnavailable => f.write_str("device address is unavailable"),
            DeviceError::AppearanceUnavailable => f.write_str("device appearance is unavailable"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DeviceError {}

/// Information about this device
///
/// This is implemented by whatever holds the GAP information of the device, usually the
/// Bluetooth stack.
pub trait GapDevice {
    /// Get the device name
    fn device_name(&self) -> Result<&str, DeviceError>;

    /// Get the LE Bluetooth device address
    fn device_address(&self) -> Result<LeDeviceAddress, DeviceError>;

    /// Get the appearance
    fn appearance(&self) -> Result<Appearance, DeviceError>;
}

impl<T: GapDevice + ?Sized> GapDevice for &T {
    fn device_name(&self) -> Result<&str, DeviceError> {
        (**self).device_name()
    }

    fn device_address(&self) -> Result<LeDeviceAddress, DeviceError> {
        (**self).device_address()
    }

    fn appearance(&self) -> Result<Appearance, DeviceError> {
        (**self).appearance()
    }
}

/// A `GapDevice` with fixed information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDevice {
    pub name: String,
    pub address: LeDeviceAddress,
    pub appearance: Appearance,
}

impl GapDevice for LocalDevice {
    fn device_name(&self) -> Result<&str, DeviceError> {
        Ok(&self.name)
    }

    fn device_address(&self) -> Result<LeDeviceAddress, DeviceError> {
        Ok(self.address)
    }

    fn appearance(&self) -> Result<Appearance, DeviceError> {
        Ok(self.appearance)
    }
}

/// Error for encoding the standard fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Failed to encode an AD structure
    Convert(ConvertError),
    /// Failed to get information from the device
    Device(DeviceError),
}

impl From<ConvertError> for Error {
    fn from(e: ConvertError) -> Self {
        Error::Convert(e)
    }
}

impl From<DeviceError> for Error {
    fn from(e: DeviceError) -> Self {
        Error::Device(e)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Convert(e) => core::fmt::Display::fmt(e, f),
            Error::Device(e) => core::fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// An encoder of the standard fields
///
/// An implementation must follow the protocol of an [`EncodeBuffer`]. When the buffer is
/// measuring, the offset must be advanced by exactly the number of bytes that would be written for
/// the same `fields` by a writing buffer.
pub trait StandardFieldEncoder {
    fn encode_standard(&mut self, fields: &StandardFields, buffer: &mut EncodeBuffer<'_>) -> Result<(), Error>;
}

/// The encoder of [`StandardFields`] for a [`GapDevice`]
#[derive(Debug, Clone)]
pub struct AdvDataEncoder<D> {
    device: D,
}

impl<D> AdvDataEncoder<D>
where
    D: GapDevice,
{
    pub fn new(device: D) -> Self {
        AdvDataEncoder { device }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn into_device(self) -> D {
        self.device
    }
}

impl<D> StandardFieldEncoder for AdvDataEncoder<D>
where
    D: GapDevice,
{
    fn encode_standard(&mut self, fields: &StandardFields, buffer: &mut EncodeBuffer<'_>) -> Result<(), Error> {
        if fields.include_le_address {
            encode_struct(&self.device.device_address()?, buffer)?;
        }

        if fields.include_appearance {
            encode_struct(&self.device.appearance()?, buffer)?;
        }

        if fields.flags.any() {
            encode_struct(&fields.flags, buffer)?;
        }

        match fields.name {
            NameMode::None => (),
            NameMode::Full => {
                encode_struct(&LocalName::new(self.device.device_name()?), buffer)?;
            }
            NameMode::Short(len) => {
                encode_struct(&LocalName::shortened(self.device.device_name()?, len), buffer)?;
            }
        }

        if !fields.service_uuids_16.is_empty() {
            encode_struct(&fields.service_uuids_16, buffer)?;
        }

        if !fields.service_uuids_128.is_empty() {
            encode_struct(&fields.service_uuids_128, buffer)?;
        }

        Ok(())
    }
}
