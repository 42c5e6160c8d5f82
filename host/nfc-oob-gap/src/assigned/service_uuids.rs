//! Advertising Data: Service Class UUID Data Type
//!
//! The struct Services is the data type for the complete list of service class UUIDs. Only lists
//! of 16-bit and 128-bit UUIDs are sent within out of band data.

use super::{AdStruct, AssignedTypes, ConvertError, IntoStruct, StructIntermediate};
use alloc::collections::BTreeSet;
use core::iter::FromIterator;

/// The UUID sizes that can be within a list of services
///
/// This is implemented for `u16` and `u128`.
pub trait ServiceUuid: Ord + Copy {
    const COMPLETE: AssignedTypes;

    const SIZE: usize;

    fn for_each_le_byte<F: FnMut(u8)>(&self, f: F);
}

macro_rules! impl_service_uuid {
    ( $size:ty, $complete:expr ) => {
        impl ServiceUuid for $size {
            const COMPLETE: AssignedTypes = $complete;

            const SIZE: usize = core::mem::size_of::<$size>();

            fn for_each_le_byte<F: FnMut(u8)>(&self, f: F) {
                self.to_le_bytes().into_iter().for_each(f)
            }
        }
    };
}

impl_service_uuid!(u16, AssignedTypes::CompleteListOf16bitServiceClassUUIDs);
impl_service_uuid!(u128, AssignedTypes::CompleteListOf128bitServiceClassUUIDs);

/// Service UUIDs
///
/// This is a set of service UUIDs that are either all 16 bit or all 128 bit UUIDs. `Services` is a
/// set, so duplicate UUIDs cannot exist within an instance of `Services`. The list is always sent
/// as a *complete* list.
///
/// ```
/// # use nfc_oob_gap::assigned::service_uuids::Services;
/// let services: Services<u16> = [0x180D_u16, 0x180F, 0x180D].into_iter().collect();
///
/// assert_eq!(2, services.len());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Services<T>
where
    T: Ord,
{
    set: BTreeSet<T>,
}

impl<T> Services<T>
where
    T: Ord,
{
    /// Create an empty list of services
    pub fn new() -> Self {
        Self { set: BTreeSet::new() }
    }

    /// Add a UUID
    ///
    /// False is returned if the UUID was already within the list.
    pub fn add(&mut self, uuid: T) -> bool {
        self.set.insert(uuid)
    }
}

impl<T> AsRef<BTreeSet<T>> for Services<T>
where
    T: Ord,
{
    fn as_ref(&self) -> &BTreeSet<T> {
        &self.set
    }
}

impl<T> core::ops::Deref for Services<T>
where
    T: Ord,
{
    type Target = BTreeSet<T>;

    fn deref(&self) -> &Self::Target {
        self.as_ref()
    }
}

impl<T, U> FromIterator<U> for Services<T>
where
    T: Ord,
    U: Into<T>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = U>,
    {
        Services {
            set: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T> IntoStruct for Services<T>
where
    T: ServiceUuid,
{
    fn data_len(&self) -> usize {
        self.set.len() * T::SIZE
    }

    fn convert_into<'a>(&self, b: &'a mut [u8]) -> Result<AdStruct<'a>, ConvertError> {
        let mut interim = StructIntermediate::try_new(b, T::COMPLETE, self.data_len())?;

        self.set.iter().for_each(|uuid| {
            uuid.for_each_le_byte(|b| {
                if let Some(byte) = interim.next() {
                    *byte = b
                }
            })
        });

        Ok(interim.finish())
    }
}
