//! LE Role data type
//!
//! The roles the device can support with Bluetooth LE along with the preferred role for connection
//! establishment.

use super::{AdStruct, AssignedTypes, ConvertError, IntoStruct, StructIntermediate};

/// LE device role
///
/// Gives information on the roles the device can support with Bluetooth LE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LeRole {
    /// Only Peripheral role supported
    OnlyPeripheral,
    /// Only central role supported
    OnlyCentral,
    /// Peripheral and Central roles are supported, but the Peripheral role is preferred for
    /// connection establishment.
    PeripheralPreferred,
    /// Peripheral and Central roles are supported, but the Central is role is preferred for
    /// connection establishment.
    CentralPreferred,
}

impl LeRole {
    const ASSIGNED_TYPE: AssignedTypes = AssignedTypes::LERole;

    /// The size of the AD struct
    pub const STRUCT_SIZE: usize = 1 + super::HEADER_SIZE;

    /// Get the value sent within the AD struct
    pub fn val(&self) -> u8 {
        match self {
            LeRole::OnlyPeripheral => 0,
            LeRole::OnlyCentral => 1,
            LeRole::PeripheralPreferred => 2,
            LeRole::CentralPreferred => 3,
        }
    }
}

impl IntoStruct for LeRole {
    fn data_len(&self) -> usize {
        1
    }

    fn convert_into<'a>(&self, b: &'a mut [u8]) -> Result<AdStruct<'a>, ConvertError> {
        let mut interm = StructIntermediate::try_new(b, Self::ASSIGNED_TYPE, self.data_len())?;

        if let Some(byte) = interm.next() {
            *byte = self.val();
        }

        Ok(interm.finish())
    }
}

/// The LE role as selected by the application
///
/// Applications commonly keep the LE role as a number within their configuration where zero means
/// the role is not included. This is that number. The numbering is *not* the value sent within the
/// AD structure, a `RequestedRole` must be converted into a [`LeRole`] first.
///
/// ```
/// # use nfc_oob_gap::assigned::le_role::{LeRole, RequestedRole};
/// assert_eq!(Ok(LeRole::OnlyCentral), LeRole::try_from(RequestedRole::ONLY_CENTRAL));
///
/// assert!(LeRole::try_from(RequestedRole(7)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestedRole(pub u8);

impl RequestedRole {
    pub const ONLY_PERIPHERAL: RequestedRole = RequestedRole(1);
    pub const ONLY_CENTRAL: RequestedRole = RequestedRole(2);
    pub const PERIPHERAL_PREFERRED: RequestedRole = RequestedRole(3);
    pub const CENTRAL_PREFERRED: RequestedRole = RequestedRole(4);
}

impl From<LeRole> for RequestedRole {
    fn from(role: LeRole) -> Self {
        match role {
            LeRole::OnlyPeripheral => RequestedRole::ONLY_PERIPHERAL,
            LeRole::OnlyCentral => RequestedRole::ONLY_CENTRAL,
            LeRole::PeripheralPreferred => RequestedRole::PERIPHERAL_PREFERRED,
            LeRole::CentralPreferred => RequestedRole::CENTRAL_PREFERRED,
        }
    }
}

impl TryFrom<RequestedRole> for LeRole {
    type Error = InvalidRole;

    fn try_from(requested: RequestedRole) -> Result<Self, Self::Error> {
        match requested {
            RequestedRole::ONLY_PERIPHERAL => Ok(LeRole::OnlyPeripheral),
            RequestedRole::ONLY_CENTRAL => Ok(LeRole::OnlyCentral),
            RequestedRole::PERIPHERAL_PREFERRED => Ok(LeRole::PeripheralPreferred),
            RequestedRole::CENTRAL_PREFERRED => Ok(LeRole::CentralPreferred),
            RequestedRole(raw) => Err(InvalidRole(raw)),
        }
    }
}

/// Error for a [`RequestedRole`] that is not one of the four LE roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRole(pub u8);

impl core::fmt::Display for InvalidRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} is not a valid LE role", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidRole {}
