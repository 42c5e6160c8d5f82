//! The encoder of OOB advertising data

use crate::error::Error;
use crate::fields;
use crate::registry::{PositionRegistry, RegistryKind};
use crate::spec::AdvertisingDataSpec;
use crate::validator;
use alloc::vec;
use alloc::vec::Vec;
use nfc_oob_core::buffer::EncodeBuffer;
use nfc_oob_gap::advdata::StandardFieldEncoder;

/// The kinds of fields within OOB advertising data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    OobFlags,
    LescData,
    TkValue,
    LeRole,
    Standard,
}

/// The order fields are encoded in
///
/// Fields that are not within an `AdvertisingDataSpec` are skipped, the order of the remaining
/// fields is never changed.
pub const ENCODING_ORDER: [FieldKind; 5] = [
    FieldKind::OobFlags,
    FieldKind::LescData,
    FieldKind::TkValue,
    FieldKind::LeRole,
    FieldKind::Standard,
];

/// Encoder of OOB advertising data
///
/// The security fields of an [`AdvertisingDataSpec`] are encoded by this, and the standard fields
/// are encoded by the `StandardFieldEncoder` it was created with. The positions of the TK value
/// and LE Secure Connections data are recorded within the [`PositionRegistry`] owned by this.
///
/// Encoding is done by calling [`encode`](OobAdvDataEncoder::encode) twice. The first call is
/// without a buffer and returns the size of the encoded data. The second call is with a buffer of
/// (at least) that size.
///
/// ```
/// # use nfc_oob_advdata::{AdvertisingDataSpec, OobAdvDataEncoder};
/// # use nfc_oob_gap::advdata::{AdvDataEncoder, LocalDevice};
/// # use nfc_oob_gap::assigned::appearance::Appearance;
/// # use nfc_oob_gap::assigned::le_device_address::LeDeviceAddress;
/// # use nfc_oob_gap::assigned::security_manager_oob_flags::SecurityManagerOobFlags;
/// # use nfc_oob_gap::BluetoothDeviceAddress;
/// let device = LocalDevice {
///     name: "device".into(),
///     address: LeDeviceAddress::public(BluetoothDeviceAddress::zeroed()),
///     appearance: Appearance::UNKNOWN,
/// };
///
/// let mut encoder = OobAdvDataEncoder::new(AdvDataEncoder::new(device));
///
/// let spec = AdvertisingDataSpec {
///     oob_flags: Some(SecurityManagerOobFlags::from(0x05)),
///     ..Default::default()
/// };
///
/// let size = encoder.encode(&spec, None).unwrap();
///
/// let mut data = vec![0u8; size];
///
/// encoder.encode(&spec, Some(&mut data[..])).unwrap();
///
/// assert_eq!(data, [0x02, 0x11, 0x05]);
/// ```
#[derive(Debug)]
pub struct OobAdvDataEncoder<E, const TK_SLOTS: usize = 1, const LESC_SLOTS: usize = 1> {
    delegate: E,
    registry: PositionRegistry<TK_SLOTS, LESC_SLOTS>,
}

impl<E> OobAdvDataEncoder<E>
where
    E: StandardFieldEncoder,
{
    /// Create a new `OobAdvDataEncoder`
    ///
    /// The registry has one slot for a TK position and one slot for the LE Secure Connections
    /// positions. Use [`with_registry`](OobAdvDataEncoder::with_registry) for more slots.
    pub fn new(delegate: E) -> Self {
        Self::with_registry(delegate, PositionRegistry::new())
    }
}

impl<E, const TK_SLOTS: usize, const LESC_SLOTS: usize> OobAdvDataEncoder<E, TK_SLOTS, LESC_SLOTS>
where
    E: StandardFieldEncoder,
{
    /// Create a new `OobAdvDataEncoder` with a `PositionRegistry`
    pub fn with_registry(delegate: E, registry: PositionRegistry<TK_SLOTS, LESC_SLOTS>) -> Self {
        OobAdvDataEncoder { delegate, registry }
    }

    pub fn delegate(&self) -> &E {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut E {
        &mut self.delegate
    }

    /// Get the position registry
    pub fn registry(&self) -> &PositionRegistry<TK_SLOTS, LESC_SLOTS> {
        &self.registry
    }

    /// Get the position registry mutably
    ///
    /// This is used to [`invalidate`](PositionRegistry::invalidate) the registry once the buffer
    /// of the encoded data is no longer used.
    pub fn registry_mut(&mut self) -> &mut PositionRegistry<TK_SLOTS, LESC_SLOTS> {
        &mut self.registry
    }

    /// Encode OOB advertising data
    ///
    /// When `buffer` is `None` nothing is written and the returned value is the number of bytes
    /// needed for the encoded data. Otherwise the data is written to the front of `buffer` and the
    /// number of bytes written is returned.
    ///
    /// # Error
    /// * `InvalidParameter` if `spec` contains a field that cannot be sent within OOB data or
    ///   has an invalid LE role. Nothing is written when an unsupported field is found.
    /// * `DataSizeExceeded` if `buffer` is too small.
    /// * `RegistryFull` if there is no room left in the registry for a position.
    /// * `Delegate` for errors from the standard field encoder.
    ///
    /// When an error is returned the content of `buffer` is not valid. Positions recorded within
    /// the registry during the failed call are removed.
    pub fn encode(&mut self, spec: &AdvertisingDataSpec, buffer: Option<&mut [u8]>) -> Result<usize, Error> {
        let mut buffer = EncodeBuffer::new(buffer);

        self.encode_into(spec, &mut buffer)
    }

    /// Encode OOB advertising data into an `EncodeBuffer`
    ///
    /// The data is encoded starting at the current offset of `buffer`. The returned value is the
    /// size of the encoded data.
    pub fn encode_into(&mut self, spec: &AdvertisingDataSpec, buffer: &mut EncodeBuffer<'_>) -> Result<usize, Error> {
        match buffer.capacity() {
            None => log::debug!("(OOB) measuring OOB advertising data"),
            Some(capacity) => log::debug!("(OOB) encoding OOB advertising data into a buffer of {} bytes", capacity),
        }

        validator::validate(spec).map_err(|field| {
            log::warn!("(OOB) rejected advertising data, {} is not supported", field);

            Error::from(field)
        })?;

        let start = buffer.offset();

        let mut registered = Registered::default();

        match self.encode_fields(spec, buffer, &mut registered) {
            Ok(()) => {
                let size = buffer.offset() - start;

                log::debug!("(OOB) OOB advertising data is {} bytes", size);

                Ok(size)
            }
            Err(e) => {
                registered.roll_back(&mut self.registry);

                log::debug!("(OOB) failed to encode OOB advertising data: {}", e);

                Err(e)
            }
        }
    }

    /// Get the number of bytes needed for the encoded data
    pub fn required_len(&mut self, spec: &AdvertisingDataSpec) -> Result<usize, Error> {
        self.encode(spec, None)
    }

    /// Encode OOB advertising data into a new `Vec`
    ///
    /// Both passes are done by this method.
    pub fn encode_to_vec(&mut self, spec: &AdvertisingDataSpec) -> Result<Vec<u8>, Error> {
        let size = self.required_len(spec)?;

        let mut data = vec![0u8; size];

        let written = self.encode(spec, Some(&mut data[..]))?;

        data.truncate(written);

        Ok(data)
    }

    fn encode_fields(
        &mut self,
        spec: &AdvertisingDataSpec,
        buffer: &mut EncodeBuffer<'_>,
        registered: &mut Registered,
    ) -> Result<(), Error> {
        for kind in ENCODING_ORDER {
            match kind {
                FieldKind::OobFlags => {
                    if let Some(flags) = &spec.oob_flags {
                        fields::encode_oob_flags(flags, buffer)?;
                    }
                }
                FieldKind::LescData => {
                    if let Some(lesc) = &spec.lesc_data {
                        registered.lesc = fields::encode_lesc_data(lesc, buffer, &mut self.registry)?;
                    }
                }
                FieldKind::TkValue => {
                    if let Some(tk) = &spec.tk_value {
                        registered.tk = fields::encode_tk_value(tk, buffer, &mut self.registry)?;
                    }
                }
                FieldKind::LeRole => {
                    if let Some(role) = spec.le_role {
                        fields::encode_le_role(role, buffer)?;
                    }
                }
                FieldKind::Standard => {
                    let delegate = &mut self.delegate;

                    let standard = &spec.standard;

                    buffer.with_remainder(|rest| delegate.encode_standard(standard, rest))?;
                }
            }
        }

        Ok(())
    }
}

/// The slots registered during a call to `encode`
#[derive(Default)]
struct Registered {
    tk: Option<usize>,
    lesc: Option<usize>,
}

impl Registered {
    fn roll_back<const TK_SLOTS: usize, const LESC_SLOTS: usize>(
        self,
        registry: &mut PositionRegistry<TK_SLOTS, LESC_SLOTS>,
    ) {
        if let Some(slot) = self.tk {
            registry.remove(RegistryKind::TkValue, slot);
        }

        if let Some(slot) = self.lesc {
            registry.remove(RegistryKind::LescData, slot);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nfc_oob_gap::advdata::{self, StandardFields};
    use nfc_oob_gap::assigned::le_role::RequestedRole;
    use nfc_oob_gap::assigned::security_manager_oob_flags::SecurityManagerOobFlags;
    use nfc_oob_gap::assigned::security_manager_tk_value::SecurityManagerTkValue;

    /// Encodes a fixed number of `0xEE` bytes
    struct Filler(usize);

    impl StandardFieldEncoder for Filler {
        fn encode_standard(
            &mut self,
            _: &StandardFields,
            buffer: &mut EncodeBuffer<'_>,
        ) -> Result<(), advdata::Error> {
            if let Some((_, bytes)) = buffer
                .reserve(self.0)
                .map_err(|e| advdata::Error::Convert(e.into()))?
            {
                bytes.fill(0xEE)
            }

            Ok(())
        }
    }

    #[test]
    fn order_is_fixed() {
        assert_eq!(FieldKind::OobFlags, ENCODING_ORDER[0]);
        assert_eq!(FieldKind::Standard, ENCODING_ORDER[ENCODING_ORDER.len() - 1]);
    }

    #[test]
    fn delegate_gets_the_remainder() {
        let mut encoder = OobAdvDataEncoder::new(Filler(2));

        let spec = AdvertisingDataSpec {
            oob_flags: Some(SecurityManagerOobFlags::from(0x01)),
            ..Default::default()
        };

        assert_eq!(Ok(5), encoder.required_len(&spec));

        let mut data = [0u8; 6];

        assert_eq!(Ok(5), encoder.encode(&spec, Some(&mut data[..])));

        assert_eq!([0x02, 0x11, 0x01, 0xEE, 0xEE, 0x00], data);
    }

    #[test]
    fn delegate_out_of_space() {
        let mut encoder = OobAdvDataEncoder::new(Filler(2));

        let spec = AdvertisingDataSpec {
            oob_flags: Some(SecurityManagerOobFlags::from(0x01)),
            ..Default::default()
        };

        let mut data = [0u8; 4];

        assert_eq!(
            Err(Error::DataSizeExceeded {
                required: 2,
                remaining: 1
            }),
            encoder.encode(&spec, Some(&mut data[..]))
        );
    }

    #[test]
    fn failed_encode_rolls_back_registry() {
        let mut encoder = OobAdvDataEncoder::new(Filler(0));

        let spec = AdvertisingDataSpec {
            tk_value: Some(SecurityManagerTkValue::from(3u128)),
            le_role: Some(RequestedRole(0)),
            ..Default::default()
        };

        let mut data = [0u8; 32];

        assert!(encoder.encode(&spec, Some(&mut data[..])).is_err());

        assert!(encoder.registry().is_empty());
    }

    #[test]
    fn encode_to_vec() {
        let mut encoder = OobAdvDataEncoder::new(Filler(1));

        let spec = AdvertisingDataSpec {
            le_role: Some(RequestedRole::ONLY_PERIPHERAL),
            ..Default::default()
        };

        assert_eq!(Ok(vec![0x02, 0x1C, 0x00, 0xEE]), encoder.encode_to_vec(&spec));
    }
}
