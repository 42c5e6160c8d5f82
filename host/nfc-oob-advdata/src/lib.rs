#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod encoder;
mod error;
mod fields;
pub mod registry;
pub mod spec;
pub mod validator;

pub use encoder::OobAdvDataEncoder;
pub use error::{Error, InvalidParameter};
pub use registry::{PositionRecord, PositionRegistry, RegistryError, RegistryKind};
pub use spec::{AdvertisingDataSpec, LescOobData};
