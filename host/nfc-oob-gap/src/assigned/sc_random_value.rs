//! LE Secure Connection Random Value
//!
//! This advertising data is sent as part of the out of band (OOB) data for LE Secure Connections
//! pairing. It contains the random value used to generate the confirmation value sent along with
//! it (Bluetooth Core Spec. v5.2 | Vol. 3, Part H | Sec. 2.3.5.6.4).

use super::{AdStruct, AssignedTypes, ConvertError, IntoStruct, StructIntermediate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScRandomValue(pub [u8; 16]);

impl ScRandomValue {
    pub(crate) const ASSIGNED_TYPE: AssignedTypes = AssignedTypes::LESecureConnectionsRandomValue;

    /// Size of the random value
    pub const DATA_LEN: usize = 16;

    /// Size of the AD struct
    pub const STRUCT_SIZE: usize = Self::DATA_LEN + super::HEADER_SIZE;

    pub fn new(r: [u8; 16]) -> Self {
        ScRandomValue(r)
    }

    /// The AD type of this value
    pub fn assigned_type() -> u8 {
        Self::ASSIGNED_TYPE.val()
    }

    pub fn into_inner(self) -> [u8; 16] {
        self.0
    }
}

impl From<u128> for ScRandomValue {
    fn from(r: u128) -> Self {
        ScRandomValue(r.to_le_bytes())
    }
}

impl IntoStruct for ScRandomValue {
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
