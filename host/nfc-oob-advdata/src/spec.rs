//! The description of the advertising data to encode

use alloc::vec::Vec;
use nfc_oob_gap::advdata::StandardFields;
use nfc_oob_gap::assigned::le_role::RequestedRole;
use nfc_oob_gap::assigned::sc_confirm_value::ScConfirmValue;
use nfc_oob_gap::assigned::sc_random_value::ScRandomValue;
use nfc_oob_gap::assigned::security_manager_oob_flags::SecurityManagerOobFlags;
use nfc_oob_gap::assigned::security_manager_tk_value::SecurityManagerTkValue;
use nfc_oob_gap::assigned::service_uuids::Services;

/// The out of band data for LE Secure Connections pairing
///
/// The confirm value and random value are always sent together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LescOobData {
    pub confirm: ScConfirmValue,
    pub random: ScRandomValue,
}

impl LescOobData {
    pub fn new(confirm: ScConfirmValue, random: ScRandomValue) -> Self {
        LescOobData { confirm, random }
    }
}

/// Peripheral connection interval range
///
/// The minimum and maximum are in units of 1.25 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectionIntervalRange {
    pub min: u16,
    pub max: u16,
}

/// Manufacturer specific data
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManufacturerData {
    pub company_identifier: u16,
    pub data: Vec<u8>,
}

/// Service data for a 16-bit service UUID
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceData {
    pub uuid: u16,
    pub data: Vec<u8>,
}

/// Specification of the advertising data within OOB data
///
/// The security fields (`oob_flags`, `tk_value`, `lesc_data`, and `le_role`) are encoded by the
/// [`OobAdvDataEncoder`] and the `standard` fields are encoded by its [`StandardFieldEncoder`].
///
/// The remaining fields are advertising data that has no place within OOB data. They exist so that
/// a specification shared with the advertising of the device can be checked, an
/// `AdvertisingDataSpec` containing any of them is rejected by the encoder.
///
/// ```
/// # use nfc_oob_advdata::AdvertisingDataSpec;
/// # use nfc_oob_gap::assigned::security_manager_oob_flags::SecurityManagerOobFlags;
/// let spec = AdvertisingDataSpec {
///     oob_flags: Some(SecurityManagerOobFlags::from(0x05)),
///     ..Default::default()
/// };
///
/// assert!(spec.is_supported());
/// ```
///
/// [`OobAdvDataEncoder`]: crate::OobAdvDataEncoder
/// [`StandardFieldEncoder`]: nfc_oob_gap::advdata::StandardFieldEncoder
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvertisingDataSpec {
    /// Security Manager OOB flags
    pub oob_flags: Option<SecurityManagerOobFlags>,
    /// The TK value for LE legacy pairing
    pub tk_value: Option<SecurityManagerTkValue>,
    /// The confirm and random values for LE Secure Connections pairing
    pub lesc_data: Option<LescOobData>,
    /// The LE role
    pub le_role: Option<RequestedRole>,
    /// The fields encoded by the standard field encoder
    pub standard: StandardFields,
    /// TX power level (unsupported)
    pub tx_power_level: Option<i8>,
    /// Peripheral connection interval range (unsupported)
    pub peripheral_connection_interval_range: Option<ConnectionIntervalRange>,
    /// Manufacturer specific data (unsupported)
    pub manufacturer_data: Option<ManufacturerData>,
    /// Service data (unsupported)
    pub service_data: Vec<ServiceData>,
    /// Incomplete list of 16-bit service UUIDs (unsupported)
    pub incomplete_service_uuids_16: Services<u16>,
    /// Incomplete list of 128-bit service UUIDs (unsupported)
    pub incomplete_service_uuids_128: Services<u128>,
    /// 16-bit service solicitation UUIDs (unsupported)
    pub solicited_service_uuids_16: Services<u16>,
    /// 128-bit service solicitation UUIDs (unsupported)
    pub solicited_service_uuids_128: Services<u128>,
}

impl AdvertisingDataSpec {
    /// Check if every field of this `AdvertisingDataSpec` can be encoded
    pub fn is_supported(&self) -> bool {
        crate::validator::validate(self).is_ok()
    }
}
