//! LE Secure Connection Confirmation Value
//!
//! This advertising data is sent as part of the out of band (OOB) data for LE Secure Connections
//! pairing. It is the confirmation value generated by the security manager with the `f4` function
//! (Bluetooth Core Spec. v5.2 | Vol. 3, Part H | Sec. 2.3.5.6.4). Generating the value is not done
//! here, this only places it within an AD structure.

use super::{AdStruct, AssignedTypes, ConvertError, IntoStruct, StructIntermediate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScConfirmValue(pub [u8; 16]);

impl ScConfirmValue {
    pub(crate) const ASSIGNED_TYPE: AssignedTypes = AssignedTypes::LESecureConnectionsConfirmationValue;

    /// Size of the confirmation value
    pub const DATA_LEN: usize = 16;

    /// Size of the AD struct
    pub const STRUCT_SIZE: usize = Self::DATA_LEN + super::HEADER_SIZE;

    /// Create a ScConfirmValue
    pub fn new(c: [u8; 16]) -> Self {
        ScConfirmValue(c)
    }

    /// The AD type of this value
    pub fn assigned_type() -> u8 {
        Self::ASSIGNED_TYPE.val()
    }
}

impl From<u128> for ScConfirmValue {
    fn from(c: u128) -> Self {
        ScConfirmValue(c.to_le_bytes())
    }
}

impl IntoStruct for ScConfirmValue {
    fn data_len(&self) -> usize {
        Self::DATA_LEN
    }

    fn convert_into<'a>(&self, ad: &'a mut [u8]) -> Result<AdStruct<'a>, ConvertError> {
        let mut interm = StructIntermediate::try_new(ad, Self::ASSIGNED_TYPE, Self::DATA_LEN)?;

        self.0.iter().for_each(|b| {
            if let Some(byte) = interm.next() {
                *byte = *b
            }
        });

        Ok(interm.finish())
    }
}
