//! Appearance data type
//!
//! The external appearance of the device, as one of the values of the appearance assigned numbers.

use super::{AdStruct, AssignedTypes, ConvertError, IntoStruct, StructIntermediate};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Appearance(pub u16);

impl Appearance {
    const ASSIGNED_TYPE: AssignedTypes = AssignedTypes::Appearance;

    /// The size of the AD struct
    pub const STRUCT_SIZE: usize = 2 + super::HEADER_SIZE;

    /// Unknown appearance
    pub const UNKNOWN: Appearance = Appearance(0x0000);
    /// Generic phone
    pub const GENERIC_PHONE: Appearance = Appearance(0x0040);
    /// Generic computer
    pub const GENERIC_COMPUTER: Appearance = Appearance(0x0080);
    /// Generic heart rate sensor
    pub const GENERIC_HEART_RATE_SENSOR: Appearance = Appearance(0x0340);
}

impl IntoStruct for Appearance {
    fn data_len(&self) -> usize {
        2
    }

    fn convert_into<'a>(&self, b: &'a mut [u8]) -> Result<AdStruct<'a>, ConvertError> {
        let mut interm = StructIntermediate::try_new(b, Self::ASSIGNED_TYPE, self.data_len())?;

        interm.extend(&self.0.to_le_bytes()).ok_or(ConvertError::OutOfSpace {
            required: Self::STRUCT_SIZE,
            remaining: 0,
        })?;

        Ok(interm.finish())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn little_endian_appearance() {
        let mut buffer = [0u8; Appearance::STRUCT_SIZE];

        let ad_struct = Appearance::GENERIC_HEART_RATE_SENSOR.convert_into(&mut buffer).unwrap();

        assert_eq!(&[3, 0x19, 0x40, 0x03], ad_struct.into_inner());
    }
}
