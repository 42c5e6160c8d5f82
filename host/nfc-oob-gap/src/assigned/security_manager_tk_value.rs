//! Security Manager TK Value
//!
//! This is the data type sent as part of the out of band data between two Security Managers
//! performing LE legacy pairing. The temporary key (TK) is the secret both devices use to
//! authenticate the pairing.

use super::{AdStruct, AssignedTypes, ConvertError, IntoStruct, StructIntermediate};

#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecurityManagerTkValue([u8; 16]);

impl SecurityManagerTkValue {
    pub(crate) const ASSIGNED_TYPE: AssignedTypes = AssignedTypes::SecurityManagerTKValue;

    /// Size of the TK
    pub const DATA_LEN: usize = 16;

    /// Size of the AD struct
    pub const STRUCT_SIZE: usize = Self::DATA_LEN + super::HEADER_SIZE;

    /// Create a `SecurityManagerTkValue`
    ///
    /// The bytes are sent in the same order as they are within `tk`.
    pub fn new(tk: [u8; 16]) -> Self {
        SecurityManagerTkValue(tk)
    }

    /// Get the bytes of the TK
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// The AD type of this value
    pub fn assigned_type() -> u8 {
        Self::ASSIGNED_TYPE.val()
    }

    /// Write the TK into the payload of an already encoded structure
    ///
    /// Only the first [`DATA_LEN`](Self::DATA_LEN) bytes of `payload` are written. This is also
    /// used to refresh the TK within an encoded structure.
    ///
    /// # Panic
    /// `payload` must be at least `DATA_LEN` bytes.
    pub fn write_payload(&self, payload: &mut [u8]) {
        payload[..Self::DATA_LEN].copy_from_slice(&self.0)
    }
}

impl From<u128> for SecurityManagerTkValue {
    /// The TK is converted to little endian bytes
    fn from(tk: u128) -> Self {
        SecurityManagerTkValue(tk.to_le_bytes())
    }
}

// the TK is a secret
impl core::fmt::Debug for SecurityManagerTkValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SecurityManagerTkValue(..)")
    }
}

impl IntoStruct for SecurityManagerTkValue {
    fn data_len(&self) -> usize {
        Self::DATA_LEN
    }

    fn convert_into<'a>(&self, ad: &'a mut [u8]) -> Result<AdStruct<'a>, ConvertError> {
        let mut interm = StructIntermediate::try_new(ad, Self::ASSIGNED_TYPE, Self::DATA_LEN)?;

        interm.extend(&self.0).ok_or(ConvertError::OutOfSpace {
            required: Self::STRUCT_SIZE,
            remaining: 0,
        })?;

        Ok(interm.finish())
    }
}
