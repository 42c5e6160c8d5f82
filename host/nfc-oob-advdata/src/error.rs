use crate::registry::RegistryKind;
use crate::validator::UnsupportedField;
use nfc_oob_gap::advdata;
use nfc_oob_gap::assigned::le_role::InvalidRole;
use nfc_oob_gap::assigned::ConvertError;

/// A parameter of an `AdvertisingDataSpec` that cannot be encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidParameter {
    #[error("{0} cannot be sent within OOB advertising data")]
    Unsupported(UnsupportedField),
    #[error("{0}")]
    LeRole(InvalidRole),
    #[error("data of {0} bytes is too large for an AD structure")]
    DataTooLarge(usize),
}

/// Error for encoding OOB advertising data
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("buffer too small, {required} bytes are needed but only {remaining} bytes remain")]
    DataSizeExceeded { required: usize, remaining: usize },
    #[error("invalid parameter, {0}")]
    InvalidParameter(#[from] InvalidParameter),
    #[error("no free slot within the registry for the position of the {0}")]
    RegistryFull(RegistryKind),
    #[error("failed to encode the standard fields, {0}")]
    Delegate(advdata::Error),
}

impl From<ConvertError> for Error {
    fn from(e: ConvertError) -> Self {
        match e {
            ConvertError::OutOfSpace { required, remaining } => Error::DataSizeExceeded { required, remaining },
            ConvertError::DataTooLarge { len } => InvalidParameter::DataTooLarge(len).into(),
        }
    }
}

impl From<advdata::Error> for Error {
    /// Running out of space within the standard fields is the same error as running out of space
    /// anywhere else.
    fn from(e: advdata::Error) -> Self {
        match e {
            advdata::Error::Convert(ConvertError::OutOfSpace { required, remaining }) => {
                Error::DataSizeExceeded { required, remaining }
            }
            e => Error::Delegate(e),
        }
    }
}

impl From<UnsupportedField> for Error {
    fn from(field: UnsupportedField) -> Self {
        InvalidParameter::Unsupported(field).into()
    }
}

impl From<InvalidRole> for Error {
    fn from(role: InvalidRole) -> Self {
        InvalidParameter::LeRole(role).into()
    }
}
