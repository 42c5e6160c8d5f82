#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub use nfc_oob_core::BluetoothDeviceAddress;

pub mod advdata;
pub mod assigned;
