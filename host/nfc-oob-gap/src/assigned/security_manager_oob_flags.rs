//! Security Manager Out of Band Flags
//!
//! This data type is sent as part of the out of band data for LE pairing. It is a single byte of
//! flags describing the OOB data and the LE abilities of the sending device (Core Specification
//! Supplement, Part A, Section 1.7).

use super::{AdStruct, AssignedTypes, ConvertError, IntoStruct, StructIntermediate};

/// The flags of the Security Manager OOB flags data type
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OobFlagLabel {
    /// OOB data is present
    OobDataPresent,
    /// LE is supported by the host
    LeSupportedHost,
    /// Simultaneous LE and BR/EDR to the same device capable (host)
    SimultaneousLeAndBrEdrHost,
    /// The address of the device is a random address
    RandomAddress,
}

impl OobFlagLabel {
    fn bit(&self) -> u8 {
        match self {
            OobFlagLabel::OobDataPresent => 1 << 0,
            OobFlagLabel::LeSupportedHost => 1 << 1,
            OobFlagLabel::SimultaneousLeAndBrEdrHost => 1 << 2,
            OobFlagLabel::RandomAddress => 1 << 3,
        }
    }
}

/// Security Manager OOB flags
///
/// The flags are kept as the raw byte, so any value given by the user is sent as is.
///
/// ```
/// # use nfc_oob_gap::assigned::security_manager_oob_flags::{OobFlagLabel, SecurityManagerOobFlags};
/// let mut flags = SecurityManagerOobFlags::new();
///
/// flags.set(OobFlagLabel::OobDataPresent, true);
/// flags.set(OobFlagLabel::SimultaneousLeAndBrEdrHost, true);
///
/// assert_eq!(0x05, flags.into_raw());
/// ```
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecurityManagerOobFlags(u8);

impl SecurityManagerOobFlags {
    const ASSIGNED_TYPE: AssignedTypes = AssignedTypes::SecurityManagerOutOfBandFlags;

    /// Size of the AD struct
    pub const STRUCT_SIZE: usize = 1 + super::HEADER_SIZE;

    /// Create a `SecurityManagerOobFlags` with no flags set
    pub fn new() -> Self {
        SecurityManagerOobFlags(0)
    }

    /// Set the state of a flag
    pub fn set(&mut self, label: OobFlagLabel, state: bool) {
        if state {
            self.0 |= label.bit()
        } else {
            self.0 &= !label.bit()
        }
    }

    /// Check if a flag is set
    pub fn is_set(&self, label: OobFlagLabel) -> bool {
        self.0 & label.bit() != 0
    }

    /// Get the raw byte
    pub fn into_raw(self) -> u8 {
        self.0
    }
}

impl From<u8> for SecurityManagerOobFlags {
    fn from(raw: u8) -> Self {
        SecurityManagerOobFlags(raw)
    }
}

impl IntoStruct for SecurityManagerOobFlags {
    fn data_len(&self) -> usize {
        1
    }

    fn convert_into<'a>(&self, b: &'a mut [u8]) -> Result<AdStruct<'a>, ConvertError> {
        let mut interim = StructIntermediate::try_new(b, Self::ASSIGNED_TYPE, self.data_len())?;

        if let Some(byte) = interim.next() {
            *byte = self.0;
        }

        Ok(interim.finish())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn raw_flags_are_kept() {
        let mut buffer = [0u8; 3];

        let ad_struct = SecurityManagerOobFlags::from(0x05).convert_into(&mut buffer).unwrap();

        assert_eq!(&[0x02, 0x11, 0x05], ad_struct.into_inner());
    }

    #[test]
    fn set_and_clear() {
        let mut flags = SecurityManagerOobFlags::from(0xF0);

        flags.set(OobFlagLabel::RandomAddress, true);
        flags.set(OobFlagLabel::LeSupportedHost, true);

        assert!(flags.is_set(OobFlagLabel::RandomAddress));
        assert!(!flags.is_set(OobFlagLabel::OobDataPresent));

        flags.set(OobFlagLabel::LeSupportedHost, false);

        assert_eq!(0xF8, flags.into_raw());
    }
}
