//! Validation of an `AdvertisingDataSpec`
//!
//! Every field of an `AdvertisingDataSpec` (and of the `StandardFields` within it) is named within
//! [`validate`]. Adding a field to either structure breaks the build here until the field is
//! classified as either supported or unsupported.

use crate::spec::AdvertisingDataSpec;
use nfc_oob_gap::advdata::StandardFields;

/// A field of [`AdvertisingDataSpec`] that cannot be sent within OOB data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnsupportedField {
    TxPowerLevel,
    PeripheralConnectionIntervalRange,
    ManufacturerData,
    ServiceData,
    IncompleteServiceUuids,
    SolicitedServiceUuids,
}

impl core::fmt::Display for UnsupportedField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UnsupportedField::TxPowerLevel => f.write_str("TX power level"),
            UnsupportedField::PeripheralConnectionIntervalRange => {
                f.write_str("peripheral connection interval range")
            }
            UnsupportedField::ManufacturerData => f.write_str("manufacturer specific data"),
            UnsupportedField::ServiceData => f.write_str("service data"),
            UnsupportedField::IncompleteServiceUuids => f.write_str("incomplete list of service UUIDs"),
            UnsupportedField::SolicitedServiceUuids => f.write_str("service solicitation UUIDs"),
        }
    }
}

/// Validate an `AdvertisingDataSpec`
///
/// The first unsupported field that is present is returned as the error.
pub fn validate(spec: &AdvertisingDataSpec) -> Result<(), UnsupportedField> {
    let AdvertisingDataSpec {
        oob_flags: _,
        tk_value: _,
        lesc_data: _,
        le_role: _,
        standard:
            StandardFields {
                include_le_address: _,
                include_appearance: _,
                flags: _,
                name: _,
                service_uuids_16: _,
                service_uuids_128: _,
            },
        tx_power_level,
        peripheral_connection_interval_range,
        manufacturer_data,
        service_data,
        incomplete_service_uuids_16,
        incomplete_service_uuids_128,
        solicited_service_uuids_16,
        solicited_service_uuids_128,
    } = spec;

    if tx_power_level.is_some() {
        return Err(UnsupportedField::TxPowerLevel);
    }

    if peripheral_connection_interval_range.is_some() {
        return Err(UnsupportedField::PeripheralConnectionIntervalRange);
    }

    if manufacturer_data.is_some() {
        return Err(UnsupportedField::ManufacturerData);
    }

    if !service_data.is_empty() {
        return Err(UnsupportedField::ServiceData);
    }

    if !incomplete_service_uuids_16.is_empty() || !incomplete_service_uuids_128.is_empty() {
        return Err(UnsupportedField::IncompleteServiceUuids);
    }

    if !solicited_service_uuids_16.is_empty() || !solicited_service_uuids_128.is_empty() {
        return Err(UnsupportedField::SolicitedServiceUuids);
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::spec::{ConnectionIntervalRange, LescOobData, ManufacturerData, ServiceData};
    use alloc::vec;
    use nfc_oob_gap::advdata::NameMode;
    use nfc_oob_gap::assigned::flags::Flags;
    use nfc_oob_gap::assigned::le_role::RequestedRole;
    use nfc_oob_gap::assigned::security_manager_oob_flags::SecurityManagerOobFlags;
    use nfc_oob_gap::assigned::security_manager_tk_value::SecurityManagerTkValue;

    #[test]
    fn supported_fields_pass() {
        let mut spec = AdvertisingDataSpec {
            oob_flags: Some(SecurityManagerOobFlags::from(0x0F)),
            tk_value: Some(SecurityManagerTkValue::from(1u128)),
            lesc_data: Some(LescOobData::new(2u128.into(), 3u128.into())),
            le_role: Some(RequestedRole(9)),
            ..Default::default()
        };

        spec.standard.include_le_address = true;
        spec.standard.include_appearance = true;
        spec.standard.flags = Flags::from(0x06);
        spec.standard.name = NameMode::Short(4);
        spec.standard.service_uuids_16.add(0x180F);
        spec.standard.service_uuids_128.add(0x1234);

        assert_eq!(Ok(()), validate(&spec));
    }

    #[test]
    fn each_unsupported_field_is_rejected() {
        let cases: [(fn(&mut AdvertisingDataSpec), UnsupportedField); 8] = [
            (|s| s.tx_power_level = Some(0), UnsupportedField::TxPowerLevel),
            (
                |s| s.peripheral_connection_interval_range = Some(ConnectionIntervalRange { min: 6, max: 12 }),
                UnsupportedField::PeripheralConnectionIntervalRange,
            ),
            (
                |s| {
                    s.manufacturer_data = Some(ManufacturerData {
                        company_identifier: 0x0059,
                        data: vec![],
                    })
                },
                UnsupportedField::ManufacturerData,
            ),
            (
                |s| s.service_data.push(ServiceData { uuid: 0x180F, data: vec![100] }),
                UnsupportedField::ServiceData,
            ),
            (
                |s| {
                    s.incomplete_service_uuids_16.add(0x180F);
                },
                UnsupportedField::IncompleteServiceUuids,
            ),
            (
                |s| {
                    s.incomplete_service_uuids_128.add(1);
                },
                UnsupportedField::IncompleteServiceUuids,
            ),
            (
                |s| {
                    s.solicited_service_uuids_16.add(0x1812);
                },
                UnsupportedField::SolicitedServiceUuids,
            ),
            (
                |s| {
                    s.solicited_service_uuids_128.add(1);
                },
                UnsupportedField::SolicitedServiceUuids,
            ),
        ];

        for (set, expected) in cases {
            let mut spec = AdvertisingDataSpec {
                oob_flags: Some(SecurityManagerOobFlags::from(0x05)),
                ..Default::default()
            };

            set(&mut spec);

            assert_eq!(Err(expected), validate(&spec));
            assert!(!spec.is_supported());
        }
    }
}
