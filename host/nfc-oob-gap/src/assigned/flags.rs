//! Advertising Data: Flags
//!
//! The flags are always a single byte within out of band data. A `Flags` with no enabled flag is
//! not placed within the data at all (see [`StandardFields`]).
//!
//! [`StandardFields`]: crate::advdata::StandardFields

use super::{AdStruct, AssignedTypes, ConvertError, IntoStruct, StructIntermediate};

/// The list of Flags defined in the Core Specification Supplement
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum FlagLabel {
    /// LE limited discoverable mode
    LeLimitedDiscoverableMode,
    /// LE general discoverable mode
    LeGeneralDiscoverableMode,
    /// BR/EDR not supported
    BrEdrNotSupported,
    /// The controller supports simultaneous BR/EDR and LE to the same device
    ControllerSupportsSimultaneousLeAndBrEdr,
}

impl core::fmt::Display for FlagLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            FlagLabel::LeLimitedDiscoverableMode => f.write_str("le limited discoverable mode"),
            FlagLabel::LeGeneralDiscoverableMode => f.write_str("le general discoverable mode"),
            FlagLabel::BrEdrNotSupported => f.write_str("BR/EDR not supported"),
            FlagLabel::ControllerSupportsSimultaneousLeAndBrEdr => {
                f.write_str("this controller is capable of simultaneous LE and BR/EDR to the same device")
            }
        }
    }
}

impl FlagLabel {
    fn get_position(&self) -> usize {
        match *self {
            FlagLabel::LeLimitedDiscoverableMode => 0,
            FlagLabel::LeGeneralDiscoverableMode => 1,
            FlagLabel::BrEdrNotSupported => 2,
            FlagLabel::ControllerSupportsSimultaneousLeAndBrEdr => 3,
        }
    }
}

/// AD flags type
///
/// ```rust
/// # use nfc_oob_gap::assigned::flags::{FlagLabel, Flags};
/// let mut flags = Flags::new();
///
/// flags.enable(FlagLabel::LeGeneralDiscoverableMode);
/// flags.enable(FlagLabel::BrEdrNotSupported);
///
/// assert_eq!(0x06, flags.into_raw());
/// ```
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags(u8);

impl Flags {
    const ASSIGNED_TYPE: AssignedTypes = AssignedTypes::Flags;

    /// The size of the AD struct
    pub const STRUCT_SIZE: usize = 1 + super::HEADER_SIZE;

    /// Creates a flags object with no enabled flag
    pub fn new() -> Self {
        Flags(0)
    }

    /// Enable a flag
    pub fn enable(&mut self, label: FlagLabel) {
        self.0 |= 1 << label.get_position()
    }

    /// Disable a flag
    pub fn disable(&mut self, label: FlagLabel) {
        self.0 &= !(1 << label.get_position())
    }

    /// Check if a flag is enabled
    pub fn is_enabled(&self, label: FlagLabel) -> bool {
        self.0 & 1 << label.get_position() != 0
    }

    /// Check if any flag is enabled
    ///
    /// This also checks the bits not assigned to a [`FlagLabel`].
    pub fn any(&self) -> bool {
        self.0 != 0
    }

    pub fn into_raw(self) -> u8 {
        self.0
    }
}

impl From<u8> for Flags {
    fn from(raw: u8) -> Self {
        Flags(raw)
    }
}

impl IntoStruct for Flags {
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
