//! Bluetooth LE out of band pairing data for NFC
//!
//! A device that supports pairing over NFC places its out of band (OOB) pairing data within the
//! NDEF message read by the peer. That data is a sequence of advertising data (AD) structures. This
//! library encodes those structures, it does not do any of the cryptography for generating the
//! values and it has no NFC or radio transport.
//!
//! * [`buffer`] has the encode buffer used for both measuring and writing the data.
//! * [`gap`] has the AD structures and the encoder of the standard advertising fields.
//! * [`advdata`] has the encoder of OOB advertising data and the registry used to refresh the
//!   secret values within already encoded data.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![no_std]

#[doc(inline)]
pub use nfc_oob_core::buffer;

#[cfg(feature = "gap")]
#[doc(inline)]
pub use nfc_oob_gap as gap;

#[cfg(feature = "advdata")]
#[doc(inline)]
pub use nfc_oob_advdata as advdata;

pub use nfc_oob_core::BluetoothDeviceAddress;

#[cfg(feature = "advdata")]
pub use nfc_oob_advdata::{AdvertisingDataSpec, OobAdvDataEncoder};
