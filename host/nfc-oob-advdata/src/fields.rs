//! Encoders of the security fields
//!
//! Each encoder follows the protocol of an [`EncodeBuffer`]: a measuring buffer only has the size
//! of the field added to its offset, a writing buffer has the field written at its offset. Only a
//! writing buffer registers positions within the [`PositionRegistry`].

use crate::error::Error;
use crate::registry::{PositionRegistry, RegistryKind};
use crate::spec::LescOobData;
use nfc_oob_core::buffer::EncodeBuffer;
use nfc_oob_gap::assigned::{encode_struct, ConvertError};
use nfc_oob_gap::assigned::le_role::{LeRole, RequestedRole};
use nfc_oob_gap::assigned::sc_confirm_value::ScConfirmValue;
use nfc_oob_gap::assigned::sc_random_value::ScRandomValue;
use nfc_oob_gap::assigned::security_manager_oob_flags::SecurityManagerOobFlags;
use nfc_oob_gap::assigned::security_manager_tk_value::SecurityManagerTkValue;

pub(crate) fn encode_oob_flags(flags: &SecurityManagerOobFlags, buffer: &mut EncodeBuffer<'_>) -> Result<(), Error> {
    encode_struct(flags, buffer)?;

    Ok(())
}

/// Encode the TK value
///
/// The slot of the registered position is returned when the TK is written.
pub(crate) fn encode_tk_value<const TK: usize, const LESC: usize>(
    tk: &SecurityManagerTkValue,
    buffer: &mut EncodeBuffer<'_>,
    registry: &mut PositionRegistry<TK, LESC>,
) -> Result<Option<usize>, Error> {
    if !buffer.is_measuring() && !registry.has_free_slot(RegistryKind::TkValue) {
        log::warn!("(OOB) no free slot to record the position of the TK value");

        return Err(Error::RegistryFull(RegistryKind::TkValue));
    }

    match encode_struct(tk, buffer)? {
        None => Ok(None),
        Some(offset) => {
            let slot = registry
                .register_tk(offset)
                .ok_or(Error::RegistryFull(RegistryKind::TkValue))?;

            log::trace!("(OOB) TK value at offset {} recorded in slot {}", offset, slot);

            Ok(Some(slot))
        }
    }
}

/// Encode the LE Secure Connections confirm and random values
///
/// The confirm value is always immediately followed by the random value. Neither value is written
/// unless there is room for both. The slot of the registered positions is returned when the
/// values are written.
pub(crate) fn encode_lesc_data<const TK: usize, const LESC: usize>(
    lesc: &LescOobData,
    buffer: &mut EncodeBuffer<'_>,
    registry: &mut PositionRegistry<TK, LESC>,
) -> Result<Option<usize>, Error> {
    if !buffer.is_measuring() && !registry.has_free_slot(RegistryKind::LescData) {
        log::warn!("(OOB) no free slot to record the positions of the LE Secure Connections data");

        return Err(Error::RegistryFull(RegistryKind::LescData));
    }

    const PAIR_SIZE: usize = ScConfirmValue::STRUCT_SIZE + ScRandomValue::STRUCT_SIZE;

    if let Some(remaining) = buffer.remaining().filter(|remaining| *remaining < PAIR_SIZE) {
        return Err(Error::DataSizeExceeded {
            required: PAIR_SIZE,
            remaining,
        });
    }

    let confirm = encode_struct(&lesc.confirm, buffer)?;

    let random = encode_struct(&lesc.random, buffer)?;

    match (confirm, random) {
        (Some(confirm), Some(random)) => {
            let slot = registry
                .register_lesc(confirm, random)
                .ok_or(Error::RegistryFull(RegistryKind::LescData))?;

            log::trace!(
                "(OOB) LE Secure Connections confirm at offset {} and random at offset {} recorded in slot {}",
                confirm,
                random,
                slot
            );

            Ok(Some(slot))
        }
        _ => Ok(None),
    }
}

/// Encode the LE role
///
/// A measuring buffer only has the size of the structure added to its offset, the role is not
/// checked. When writing, an invalid role is rejected before anything is written.
pub(crate) fn encode_le_role(role: RequestedRole, buffer: &mut EncodeBuffer<'_>) -> Result<(), Error> {
    if buffer.is_measuring() {
        buffer.reserve(LeRole::STRUCT_SIZE).map_err(ConvertError::from)?;

        return Ok(());
    }

    let le_role = LeRole::try_from(role).map_err(|e| {
        log::warn!("(OOB) {}", e);

        e
    })?;

    encode_struct(&le_role, buffer)?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::InvalidParameter;
    use nfc_oob_gap::assigned::le_role::InvalidRole;

    #[test]
    fn oob_flags_example() {
        let mut data = [0u8; 3];

        let mut buffer = EncodeBuffer::writing(&mut data);

        encode_oob_flags(&SecurityManagerOobFlags::from(0x05), &mut buffer).unwrap();

        assert_eq!(3, buffer.offset());
        assert_eq!([0x02, 0x11, 0x05], data);
    }

    #[test]
    fn oob_flags_too_small() {
        let mut data = [0u8; 2];

        let mut buffer = EncodeBuffer::writing(&mut data);

        assert_eq!(
            Err(Error::DataSizeExceeded {
                required: 3,
                remaining: 2
            }),
            encode_oob_flags(&SecurityManagerOobFlags::from(0x05), &mut buffer)
        );
    }

    #[test]
    fn measuring_does_not_register() {
        let mut registry = PositionRegistry::<1, 1>::new();

        let mut buffer = EncodeBuffer::measuring();

        let tk = SecurityManagerTkValue::from(7u128);

        let lesc = LescOobData::new(1u128.into(), 2u128.into());

        assert_eq!(Ok(None), encode_lesc_data(&lesc, &mut buffer, &mut registry));
        assert_eq!(Ok(None), encode_tk_value(&tk, &mut buffer, &mut registry));

        assert_eq!(54, buffer.offset());
        assert!(registry.is_empty());
    }

    #[test]
    fn tk_registry_full() {
        let mut registry = PositionRegistry::<1, 1>::new();

        registry.register_tk(100).unwrap();

        let mut data = [0u8; 18];

        let mut buffer = EncodeBuffer::writing(&mut data);

        assert_eq!(
            Err(Error::RegistryFull(RegistryKind::TkValue)),
            encode_tk_value(&SecurityManagerTkValue::from(7u128), &mut buffer, &mut registry)
        );

        assert_eq!(0, buffer.offset());
    }

    #[test]
    fn invalid_role_only_rejected_when_writing() {
        let mut measure = EncodeBuffer::measuring();

        assert_eq!(Ok(()), encode_le_role(RequestedRole(5), &mut measure));
        assert_eq!(LeRole::STRUCT_SIZE, measure.offset());

        let mut data = [0u8; 3];

        let mut write = EncodeBuffer::writing(&mut data);

        assert_eq!(
            Err(Error::InvalidParameter(InvalidParameter::LeRole(InvalidRole(5)))),
            encode_le_role(RequestedRole(5), &mut write)
        );
        assert_eq!(0, write.offset());
        assert_eq!([0u8; 3], data);
    }

    #[test]
    fn lesc_pair_needs_room_for_both() {
        let mut registry = PositionRegistry::<1, 1>::new();

        let mut data = [0u8; 20];

        let mut buffer = EncodeBuffer::writing(&mut data);

        let lesc = LescOobData::new(ScConfirmValue::new([0x11; 16]), ScRandomValue::new([0x22; 16]));

        assert_eq!(
            Err(Error::DataSizeExceeded {
                required: 36,
                remaining: 20
            }),
            encode_lesc_data(&lesc, &mut buffer, &mut registry)
        );

        assert_eq!(0, buffer.offset());
        assert!(registry.is_empty());
        assert_eq!([0u8; 20], data);
    }

    #[test]
    fn role_wire_code() {
        let mut data = [0u8; 3];

        let mut write = EncodeBuffer::writing(&mut data);

        encode_le_role(RequestedRole::CENTRAL_PREFERRED, &mut write).unwrap();

        assert_eq!([0x02, 0x1C, 0x03], data);
    }
}
