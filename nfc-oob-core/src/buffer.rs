//! Dual-mode encode buffer
//!
//! Encoding advertising data is done in two passes by the caller. The first pass is done without
//! a buffer to figure out how many bytes are needed, and the second pass is done with a buffer of
//! that size to actually write the data. Both passes go through the same encoders with an
//! [`EncodeBuffer`], the only difference being the [`Mode`] it was created with.
//!
//! ```
//! # use nfc_oob_core::buffer::EncodeBuffer;
//! fn encode(buffer: &mut EncodeBuffer<'_>) -> Result<(), nfc_oob_core::buffer::OutOfSpace> {
//!     if let Some((_, bytes)) = buffer.reserve(3)? {
//!         bytes.copy_from_slice(&[2, 0x11, 0x05]);
//!     }
//!
//!     Ok(())
//! }
//!
//! let mut measure = EncodeBuffer::measuring();
//!
//! encode(&mut measure).unwrap();
//!
//! let mut data = vec![0u8; measure.offset()];
//!
//! let mut write = EncodeBuffer::writing(&mut data);
//!
//! encode(&mut write).unwrap();
//!
//! assert_eq!(measure.offset(), write.offset());
//! assert_eq!(data, [2, 0x11, 0x05]);
//! ```

/// The mode of an [`EncodeBuffer`]
#[derive(Debug)]
pub enum Mode<'a> {
    /// Only the size of the encoded data is computed
    Measuring,
    /// The encoded data is written to a buffer of fixed capacity
    Writing(&'a mut [u8]),
}

/// A buffer for encoding
///
/// An `EncodeBuffer` is a running offset along with a [`Mode`]. When measuring, reserving bytes
/// always succeeds and only moves the offset. When writing, reserving bytes fails if they would
/// run past the end of the buffer.
#[derive(Debug)]
pub struct EncodeBuffer<'a> {
    mode: Mode<'a>,
    offset: usize,
}

impl<'a> EncodeBuffer<'a> {
    /// Create an `EncodeBuffer` that only measures the encoded size
    pub fn measuring() -> Self {
        EncodeBuffer {
            mode: Mode::Measuring,
            offset: 0,
        }
    }

    /// Create an `EncodeBuffer` that writes to `buffer`
    ///
    /// The capacity of the `EncodeBuffer` is the length of `buffer`.
    pub fn writing(buffer: &'a mut [u8]) -> Self {
        EncodeBuffer {
            mode: Mode::Writing(buffer),
            offset: 0,
        }
    }

    /// Create an `EncodeBuffer` from an optional buffer
    ///
    /// `None` creates a measuring buffer.
    pub fn new(buffer: Option<&'a mut [u8]>) -> Self {
        match buffer {
            Some(buffer) => Self::writing(buffer),
            None => Self::measuring(),
        }
    }

    /// Check if this is a measuring buffer
    pub fn is_measuring(&self) -> bool {
        matches!(self.mode, Mode::Measuring)
    }

    /// Get the current offset
    ///
    /// This is the number of bytes that were reserved so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get the capacity
    ///
    /// A measuring buffer has no capacity.
    pub fn capacity(&self) -> Option<usize> {
        match &self.mode {
            Mode::Measuring => None,
            Mode::Writing(buffer) => Some(buffer.len()),
        }
    }

    /// Get the number of bytes that can still be reserved
    pub fn remaining(&self) -> Option<usize> {
        self.capacity().map(|capacity| capacity.saturating_sub(self.offset))
    }

    /// Get the bytes that were written
    ///
    /// This returns `None` for a measuring buffer.
    pub fn written(&self) -> Option<&[u8]> {
        match &self.mode {
            Mode::Measuring => None,
            Mode::Writing(buffer) => buffer.get(..self.offset),
        }
    }

    /// Reserve the next `size` bytes
    ///
    /// The offset is advanced by `size` on success. A measuring buffer always succeeds and returns
    /// `None`. A writing buffer returns the offset of the reserved bytes along with the bytes
    /// themselves, or an error if `size` bytes would run past the end of the buffer. The offset is
    /// not changed when an error is returned.
    pub fn reserve(&mut self, size: usize) -> Result<Option<(usize, &mut [u8])>, OutOfSpace> {
        let start = self.offset;

        match self.mode {
            Mode::Measuring => {
                self.offset += size;

                Ok(None)
            }
            Mode::Writing(ref mut buffer) => {
                let remaining = buffer.len().saturating_sub(start);

                let end = start
                    .checked_add(size)
                    .filter(|end| *end <= buffer.len())
                    .ok_or(OutOfSpace {
                        required: size,
                        remaining,
                    })?;

                self.offset = end;

                Ok(Some((start, &mut buffer[start..end])))
            }
        }
    }

    /// Encode into the remainder of this buffer
    ///
    /// The closure is given a new `EncodeBuffer` of the same mode that starts at the current
    /// offset. For a writing buffer, the capacity of the new buffer is the remaining capacity of
    /// this buffer. If the closure succeeds this buffer's offset is advanced by the offset reached
    /// within the new buffer, otherwise the offset is unchanged.
    ///
    /// The offsets seen within the closure are relative to the start of the remainder.
    pub fn with_remainder<F, T, E>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut EncodeBuffer<'_>) -> Result<T, E>,
    {
        let start = self.offset;

        let mut remainder = match self.mode {
            Mode::Measuring => EncodeBuffer::measuring(),
            Mode::Writing(ref mut buffer) => {
                let start = core::cmp::min(start, buffer.len());

                EncodeBuffer::writing(&mut buffer[start..])
            }
        };

        let ret = f(&mut remainder)?;

        let used = remainder.offset;

        self.offset += used;

        Ok(ret)
    }
}

/// Error for when there is not enough room left in a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfSpace {
    /// The number of bytes that were to be reserved
    pub required: usize,
    /// The number of bytes remaining in the buffer
    pub remaining: usize,
}

impl core::fmt::Display for OutOfSpace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "buffer out of space, {} bytes are required but only {} bytes remain",
            self.required, self.remaining
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfSpace {}
