//! Assigned numbers and the associated data formats
//!
//! The assigned numbers for GAP come from the Bluetooth SIG and can be found on the official
//! [Bluetooth](https://www.bluetooth.com/specifications/assigned-numbers/) webpage. These numbers
//! are used to identify the meaning and corresponding data format of an *AD struct*. The general
//! format of an AD struct is one byte for length, one byte for the assigned number, and multiple
//! bytes for the data. The length is the size of the assigned number plus the size of the data.
//!
//! Only the AD types that are sent as part of out of band pairing data are within this module.

pub mod appearance;
pub mod flags;
pub mod le_device_address;
pub mod le_role;
pub mod local_name;
pub mod sc_confirm_value;
pub mod sc_random_value;
pub mod security_manager_oob_flags;
pub mod security_manager_tk_value;
pub mod service_uuids;

use nfc_oob_core::buffer::{EncodeBuffer, OutOfSpace};

/// The size of the header of an AD structure
///
/// The full size of an AD structure is this plus the size of the data.
pub const HEADER_SIZE: usize = 2;

/// The maximum size of the data within an AD structure
///
/// The length byte includes the assigned type, so this is one less than the maximum of a byte.
pub const MAX_DATA_LEN: usize = u8::MAX as usize - 1;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AssignedTypes {
    Flags,
    CompleteListOf16bitServiceClassUUIDs,
    CompleteListOf128bitServiceClassUUIDs,
    ShortenedLocalName,
    CompleteLocalName,
    SecurityManagerTKValue,
    SecurityManagerOutOfBandFlags,
    Appearance,
    LEBluetoothDeviceAddress,
    LERole,
    LESecureConnectionsConfirmationValue,
    LESecureConnectionsRandomValue,
}

impl AssignedTypes {
    pub const fn val(&self) -> u8 {
        match *self {
            AssignedTypes::Flags => 0x01,
            AssignedTypes::CompleteListOf16bitServiceClassUUIDs => 0x03,
            AssignedTypes::CompleteListOf128bitServiceClassUUIDs => 0x07,
            AssignedTypes::ShortenedLocalName => 0x08,
            AssignedTypes::CompleteLocalName => 0x09,
            AssignedTypes::SecurityManagerTKValue => 0x10,
            AssignedTypes::SecurityManagerOutOfBandFlags => 0x11,
            AssignedTypes::Appearance => 0x19,
            AssignedTypes::LEBluetoothDeviceAddress => 0x1B,
            AssignedTypes::LERole => 0x1C,
            AssignedTypes::LESecureConnectionsConfirmationValue => 0x22,
            AssignedTypes::LESecureConnectionsRandomValue => 0x23,
        }
    }
}

/// Error when converting a type into an AD structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// There is not enough room in the buffer for the structure
    OutOfSpace {
        /// The size of the entire structure
        required: usize,
        /// The number of bytes remaining within the buffer
        remaining: usize,
    },
    /// The data is too large to be described by the length byte
    DataTooLarge { len: usize },
}

impl From<OutOfSpace> for ConvertError {
    fn from(e: OutOfSpace) -> Self {
        ConvertError::OutOfSpace {
            required: e.required,
            remaining: e.remaining,
        }
    }
}

impl core::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConvertError::OutOfSpace { required, remaining } => write!(
                f,
                "Not enough space in buffer for the AD structure. It requires {} bytes but only {} \
                bytes are available within the buffer",
                required, remaining
            ),
            ConvertError::DataTooLarge { len } => write!(
                f,
                "AD structure data of {} bytes exceeds the maximum of {} bytes",
                len, MAX_DATA_LEN
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConvertError {}

/// An intermediary for help creating an AD Structure from a local type
///
/// The length and type bytes are filled in by `finish`, the data bytes are added with `next` or
/// `extend`.
struct StructIntermediate<'a> {
    len: u8,
    struct_type: u8,
    ad: &'a mut [u8],
}

impl<'a> StructIntermediate<'a> {
    /// Try to create a new `StructIntermediate`
    ///
    /// # Error
    /// `b` must be large enough for the header and `data_len` bytes of data.
    fn try_new(b: &'a mut [u8], struct_type: AssignedTypes, data_len: usize) -> Result<Self, ConvertError> {
        if data_len > MAX_DATA_LEN {
            return Err(ConvertError::DataTooLarge { len: data_len });
        }

        let required = HEADER_SIZE + data_len;

        if b.len() < required {
            return Err(ConvertError::OutOfSpace {
                required,
                remaining: b.len(),
            });
        }

        // The length starts at 1 because that is the size of the ad type
        Ok(Self {
            len: 1,
            struct_type: struct_type.val(),
            ad: &mut b[..required],
        })
    }

    /// Get the next byte
    fn next(&mut self) -> Option<&mut u8> {
        let len = self.len.checked_add(1)?;

        // This works because `self.len` is initialized to one.
        // AD struct -> [len, ad type, ad data .. ]
        if (len as usize) < self.ad.len() {
            self.len = len;

            self.ad.get_mut(len as usize)
        } else {
            None
        }
    }

    /// Extend the data by `bytes`
    ///
    /// Either all of `bytes` are added or none of them are.
    fn extend(&mut self, bytes: &[u8]) -> Option<()> {
        let start = self.len as usize + 1;

        let end = start.checked_add(bytes.len()).filter(|end| *end <= self.ad.len())?;

        self.ad[start..end].copy_from_slice(bytes);

        self.len = (end - 1) as u8;

        Some(())
    }

    /// Fill-out the header
    fn finish(self) -> AdStruct<'a> {
        self.ad[0] = self.len;
        self.ad[1] = self.struct_type;

        let size = 1 + self.len as usize;

        AdStruct(&self.ad[..size])
    }
}

/// A trait for converting a local type into an Advertising Data (AD) Structure
pub trait IntoStruct {
    /// The length of the data within the AD struct
    ///
    /// This does not include the header of the structure.
    fn data_len(&self) -> usize;

    /// Convert into an AD structure
    ///
    /// Input `b` is the buffer to contain the structure. The structure is placed at the beginning
    /// of the buffer.
    fn convert_into<'a>(&self, b: &'a mut [u8]) -> Result<AdStruct<'a>, ConvertError>;

    /// The size of the AD structure
    fn struct_size(&self) -> usize {
        HEADER_SIZE + self.data_len()
    }
}

/// An encoded AD structure
///
/// This is returned by [`IntoStruct::convert_into`] and refers to the bytes of the structure
/// within the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdStruct<'a>(&'a [u8]);

impl<'a> AdStruct<'a> {
    /// Return the type (assigned number)
    pub fn get_type(&self) -> u8 {
        self.0[1]
    }

    /// Get the data bytes
    pub fn get_data(&self) -> &'a [u8] {
        &self.0[HEADER_SIZE..]
    }

    /// Get the size of the structure
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Convert into the bytes of the structure
    pub fn into_inner(self) -> &'a [u8] {
        self.0
    }
}

/// Encode an AD structure into an `EncodeBuffer`
///
/// When `buffer` is measuring only the size of the structure is added to the offset of `buffer`
/// and `None` is returned. Otherwise the structure is written at the current offset and the
/// returned value is the offset of the first byte of the structure's *data* (the byte after the
/// assigned type).
///
/// # Error
/// An error is returned if the data is too large for an AD structure (in either mode) or there is
/// not enough room left within a writing buffer.
pub fn encode_struct<T>(t: &T, buffer: &mut EncodeBuffer<'_>) -> Result<Option<usize>, ConvertError>
where
    T: IntoStruct + ?Sized,
{
    let data_len = t.data_len();

    if data_len > MAX_DATA_LEN {
        return Err(ConvertError::DataTooLarge { len: data_len });
    }

    match buffer.reserve(HEADER_SIZE + data_len)? {
        None => Ok(None),
        Some((offset, bytes)) => {
            let ad_struct = t.convert_into(bytes)?;

            log::trace!(
                "(GAP) AD structure of type {:#04x} ({} bytes) at offset {}",
                ad_struct.get_type(),
                ad_struct.size(),
                offset
            );

            Ok(Some(offset + HEADER_SIZE))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Raw<'a>(AssignedTypes, &'a [u8]);

    impl IntoStruct for Raw<'_> {
        fn data_len(&self) -> usize {
            self.1.len()
        }

        fn convert_into<'a>(&self, b: &'a mut [u8]) -> Result<AdStruct<'a>, ConvertError> {
            let mut interim = StructIntermediate::try_new(b, self.0, self.data_len())?;

            interim.extend(self.1).ok_or(ConvertError::OutOfSpace {
                required: self.struct_size(),
                remaining: 0,
            })?;

            Ok(interim.finish())
        }
    }

    #[test]
    fn header_is_length_then_type() {
        let mut buffer = [0u8; 8];

        let ad_struct = Raw(AssignedTypes::LERole, &[3]).convert_into(&mut buffer).unwrap();

        assert_eq!(&[2, 0x1C, 3], ad_struct.into_inner());
        assert_eq!(0x1C, ad_struct.get_type());
        assert_eq!(&[3], ad_struct.get_data());
    }

    #[test]
    fn next_stops_at_end_of_structure() {
        let mut buffer = [0u8; 8];

        let mut interim = StructIntermediate::try_new(&mut buffer, AssignedTypes::Flags, 1).unwrap();

        assert!(interim.next().is_some());
        assert!(interim.next().is_none());

        assert_eq!(3, interim.finish().size());
    }

    #[test]
    fn encode_struct_returns_data_offset() {
        let mut data = [0u8; 10];

        let mut buffer = EncodeBuffer::writing(&mut data);

        buffer.reserve(4).unwrap();

        let offset = encode_struct(&Raw(AssignedTypes::Appearance, &[0x41, 0x03]), &mut buffer).unwrap();

        assert_eq!(Some(6), offset);
        assert_eq!(8, buffer.offset());
        assert_eq!(&data[4..8], &[3, 0x19, 0x41, 0x03]);
    }

    #[test]
    fn encode_struct_measuring() {
        let mut buffer = EncodeBuffer::measuring();

        let offset = encode_struct(&Raw(AssignedTypes::Appearance, &[0x41, 0x03]), &mut buffer).unwrap();

        assert_eq!(None, offset);
        assert_eq!(4, buffer.offset());
    }

    #[test]
    fn encode_struct_too_small() {
        let mut data = [0u8; 3];

        let mut buffer = EncodeBuffer::writing(&mut data);

        let result = encode_struct(&Raw(AssignedTypes::Appearance, &[0x41, 0x03]), &mut buffer);

        assert_eq!(
            Err(ConvertError::OutOfSpace {
                required: 4,
                remaining: 3
            }),
            result
        );
    }

    #[test]
    fn encode_struct_too_large_in_both_modes() {
        let data = [0u8; MAX_DATA_LEN + 1];

        let raw = Raw(AssignedTypes::Flags, &data);

        let mut measure = EncodeBuffer::measuring();

        assert_eq!(
            Err(ConvertError::DataTooLarge { len: MAX_DATA_LEN + 1 }),
            encode_struct(&raw, &mut measure)
        );

        let mut out = [0u8; 300];

        let mut write = EncodeBuffer::writing(&mut out);

        assert_eq!(
            Err(ConvertError::DataTooLarge { len: MAX_DATA_LEN + 1 }),
            encode_struct(&raw, &mut write)
        );
    }
}
