//! Local name data type
//!
//! The local name is the name for the Bluetooth device. The data for the local name structure is
//! just a sequence of utf-8 characters. There are two versions of a local name, the complete local
//! name and the shortened local name. The shortened local name is used when the full local name
//! would not fit within the data.
//!
//! A shortened name is made by cutting the complete name down to a number of bytes. The cut is
//! always made on a character boundary, so the shortened name may be a few bytes shorter than
//! requested when the name contains characters encoded with more than one byte.
//!
//! ```
//! # use nfc_oob_gap::assigned::local_name::LocalName;
//! let short = LocalName::shortened("My Device", 2);
//!
//! assert_eq!("My", short.as_str());
//! assert!(!short.is_complete());
//!
//! // not actually shorter, so the name is complete
//! let complete = LocalName::shortened("My Device", 20);
//!
//! assert!(complete.is_complete());
//! ```

use super::{AdStruct, AssignedTypes, ConvertError, IntoStruct, StructIntermediate};

/// A Local Name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalName<'a> {
    name: &'a str,
    is_complete: bool,
}

impl<'a> LocalName<'a> {
    /// Create a complete local name
    pub fn new(complete_name: &'a str) -> Self {
        LocalName {
            name: complete_name,
            is_complete: true,
        }
    }

    /// Create a shortened local name
    ///
    /// The name is cut to at most `max_len` bytes. If `complete_name` is not longer than `max_len`
    /// then the returned `LocalName` is the complete name.
    pub fn shortened(complete_name: &'a str, max_len: usize) -> Self {
        if complete_name.len() <= max_len {
            return LocalName::new(complete_name);
        }

        let mut len = max_len;

        while !complete_name.is_char_boundary(len) {
            len -= 1;
        }

        LocalName {
            name: &complete_name[..len],
            is_complete: false,
        }
    }

    /// Get the string slice for the name
    pub fn as_str(&self) -> &'a str {
        self.name
    }

    /// Check if the name is complete
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    fn assigned_type(&self) -> AssignedTypes {
        if self.is_complete {
            AssignedTypes::CompleteLocalName
        } else {
            AssignedTypes::ShortenedLocalName
        }
    }
}

impl IntoStruct for LocalName<'_> {
    fn data_len(&self) -> usize {
        self.name.len()
    }

    fn convert_into<'b>(&self, b: &'b mut [u8]) -> Result<AdStruct<'b>, ConvertError> {
        let mut interim = StructIntermediate::try_new(b, self.assigned_type(), self.data_len())?;

        interim.extend(self.name.as_bytes()).ok_or(ConvertError::OutOfSpace {
            required: self.struct_size(),
            remaining: 0,
        })?;

        Ok(interim.finish())
    }
}
