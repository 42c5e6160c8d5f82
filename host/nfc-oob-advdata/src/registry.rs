//! Positions of the secret values within encoded OOB data
//!
//! The TK value and the LE Secure Connections confirm and random values are regenerated by the
//! security manager while the encoded OOB data is still in use (for example the NFC tag keeps
//! presenting the same message). Instead of encoding the data again, the new values are written
//! over the old ones at the positions recorded when the data was encoded.
//!
//! A [`PositionRegistry`] does not own the buffer of the encoded data, it only stores offsets into
//! it. Every record carries the *generation* of the registry it was made in, and the registry
//! generation is advanced by [`invalidate`](PositionRegistry::invalidate). Invalidate the registry
//! whenever the buffer is freed or encoded again, then any copy of an old record is rejected
//! instead of writing into unrelated data.
//!
//! Overwriting is always checked against the buffer given. The recorded payload must be within
//! the buffer and the byte before the payload must still be the AD type of the record.

use core::fmt;
use nfc_oob_gap::assigned::sc_confirm_value::ScConfirmValue;
use nfc_oob_gap::assigned::sc_random_value::ScRandomValue;
use nfc_oob_gap::assigned::security_manager_tk_value::SecurityManagerTkValue;

/// The kind of position within a [`PositionRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryKind {
    /// The position of a TK value
    TkValue,
    /// The positions of the LE Secure Connections confirm and random values
    LescData,
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryKind::TkValue => f.write_str("TK value"),
            RegistryKind::LescData => f.write_str("LE Secure Connections data"),
        }
    }
}

/// The location of a payload within the encoded data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionRecord {
    ad_type: u8,
    offset: usize,
    len: usize,
    generation: u32,
}

impl PositionRecord {
    /// The AD type of the structure containing the payload
    pub fn ad_type(&self) -> u8 {
        self.ad_type
    }

    /// The offset of the first byte of the payload
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The length of the payload
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The generation of the registry this record was made in
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// The byte range of the payload
    pub fn range(&self) -> core::ops::Range<usize> {
        self.offset..self.offset + self.len
    }
}

/// The positions of the LE Secure Connections confirm and random values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LescPosition {
    pub confirm: PositionRecord,
    pub random: PositionRecord,
}

/// Error for accessing a payload through a [`PositionRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("the record was made in generation {record} but the registry is at generation {current}")]
    StaleRecord { record: u32, current: u32 },
    #[error("payload at offset {offset} of {len} bytes is outside of the buffer of {buffer_len} bytes")]
    OutOfBounds { offset: usize, len: usize, buffer_len: usize },
    #[error("expected AD type {expected:#04x} before the payload but found {found:#04x}")]
    TypeMismatch { expected: u8, found: u8 },
    #[error("the payload is {expected} bytes but {found} bytes were given")]
    LengthMismatch { expected: usize, found: usize },
}

/// Registry of the payload positions of the secret OOB values
///
/// The TK positions are a group. Every TK value that is encoded while the registry has a free TK
/// slot is recorded, and [`update_tk`](PositionRegistry::update_tk) writes the new TK to all of
/// them. This is for when the same data is encoded more than once (such as into multiple NDEF
/// records) and every copy must carry the current TK.
///
/// The number of slots is set by `TK_SLOTS` and `LESC_SLOTS`.
#[derive(Debug, Clone)]
pub struct PositionRegistry<const TK_SLOTS: usize = 1, const LESC_SLOTS: usize = 1> {
    tk: [Option<PositionRecord>; TK_SLOTS],
    lesc: [Option<LescPosition>; LESC_SLOTS],
    generation: u32,
}

impl<const TK_SLOTS: usize, const LESC_SLOTS: usize> Default for PositionRegistry<TK_SLOTS, LESC_SLOTS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const TK_SLOTS: usize, const LESC_SLOTS: usize> PositionRegistry<TK_SLOTS, LESC_SLOTS> {
    /// Create an empty registry
    pub fn new() -> Self {
        PositionRegistry {
            tk: [None; TK_SLOTS],
            lesc: [None; LESC_SLOTS],
            generation: 0,
        }
    }

    /// The current generation
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Check if nothing is recorded
    pub fn is_empty(&self) -> bool {
        self.tk.iter().all(Option::is_none) && self.lesc.iter().all(Option::is_none)
    }

    /// Check if there is a free slot of `kind`
    pub fn has_free_slot(&self, kind: RegistryKind) -> bool {
        match kind {
            RegistryKind::TkValue => self.tk.iter().any(Option::is_none),
            RegistryKind::LescData => self.lesc.iter().any(Option::is_none),
        }
    }

    /// Iterate over the recorded TK positions
    pub fn tk_positions(&self) -> impl Iterator<Item = &PositionRecord> + '_ {
        self.tk.iter().filter_map(Option::as_ref)
    }

    /// Iterate over the recorded LE Secure Connections positions
    pub fn lesc_positions(&self) -> impl Iterator<Item = &LescPosition> + '_ {
        self.lesc.iter().filter_map(Option::as_ref)
    }

    /// Get the TK position within `slot`
    pub fn tk_position(&self, slot: usize) -> Option<PositionRecord> {
        self.tk.get(slot).copied().flatten()
    }

    /// Get the LE Secure Connections position within `slot`
    pub fn lesc_position(&self, slot: usize) -> Option<LescPosition> {
        self.lesc.get(slot).copied().flatten()
    }

    /// Record the position of a TK payload
    ///
    /// The slot of the record is returned, or `None` if every TK slot is used.
    pub fn register_tk(&mut self, offset: usize) -> Option<usize> {
        let record = self.record(SecurityManagerTkValue::assigned_type(), offset, SecurityManagerTkValue::DATA_LEN);

        Self::insert(&mut self.tk, record)
    }

    /// Record the positions of the LE Secure Connections confirm and random payloads
    ///
    /// The slot of the record is returned, or `None` if every LE Secure Connections slot is used.
    pub fn register_lesc(&mut self, confirm_offset: usize, random_offset: usize) -> Option<usize> {
        let position = LescPosition {
            confirm: self.record(ScConfirmValue::assigned_type(), confirm_offset, ScConfirmValue::DATA_LEN),
            random: self.record(ScRandomValue::assigned_type(), random_offset, ScRandomValue::DATA_LEN),
        };

        Self::insert(&mut self.lesc, position)
    }

    /// Remove a record
    pub fn remove(&mut self, kind: RegistryKind, slot: usize) {
        match kind {
            RegistryKind::TkValue => {
                if let Some(entry) = self.tk.get_mut(slot) {
                    *entry = None
                }
            }
            RegistryKind::LescData => {
                if let Some(entry) = self.lesc.get_mut(slot) {
                    *entry = None
                }
            }
        }
    }

    /// Invalidate every record
    ///
    /// All slots are freed and the generation is advanced, so copies of the records made before
    /// this call can no longer be used to access a buffer.
    pub fn invalidate(&mut self) {
        self.tk = [None; TK_SLOTS];
        self.lesc = [None; LESC_SLOTS];
        self.generation = self.generation.wrapping_add(1);

        log::debug!("(OOB) position registry invalidated, generation is now {}", self.generation);
    }

    /// Get the payload of a record from `buffer`
    pub fn read<'a>(&self, record: &PositionRecord, buffer: &'a [u8]) -> Result<&'a [u8], RegistryError> {
        self.check(record, buffer)?;

        Ok(&buffer[record.range()])
    }

    /// Overwrite the payload of a record within `buffer`
    ///
    /// `payload` must be the same length as the recorded payload.
    pub fn overwrite(&self, record: &PositionRecord, buffer: &mut [u8], payload: &[u8]) -> Result<(), RegistryError> {
        if payload.len() != record.len {
            return Err(RegistryError::LengthMismatch {
                expected: record.len,
                found: payload.len(),
            });
        }

        self.check(record, buffer)?;

        buffer[record.range()].copy_from_slice(payload);

        Ok(())
    }

    /// Write a new TK to every recorded TK position
    ///
    /// Every record is checked before anything is written, so either all TK payloads are updated
    /// or none of them are. The number of updated payloads is returned.
    pub fn update_tk(&self, buffer: &mut [u8], tk: &SecurityManagerTkValue) -> Result<usize, RegistryError> {
        for record in self.tk_positions() {
            self.check(record, buffer)?;
        }

        let mut count = 0;

        for record in self.tk_positions() {
            tk.write_payload(&mut buffer[record.range()]);

            count += 1;
        }

        log::trace!("(OOB) updated {} TK value(s)", count);

        Ok(count)
    }

    /// Write new LE Secure Connections values to every recorded position
    ///
    /// Like `update_tk`, either every position is updated or none are. The number of updated
    /// confirm and random pairs is returned.
    pub fn update_lesc(
        &self,
        buffer: &mut [u8],
        confirm: &ScConfirmValue,
        random: &ScRandomValue,
    ) -> Result<usize, RegistryError> {
        for position in self.lesc_positions() {
            self.check(&position.confirm, buffer)?;
            self.check(&position.random, buffer)?;
        }

        let mut count = 0;

        for position in self.lesc_positions() {
            buffer[position.confirm.range()].copy_from_slice(&confirm.0);
            buffer[position.random.range()].copy_from_slice(&random.0);

            count += 1;
        }

        log::trace!("(OOB) updated {} LE Secure Connections value pair(s)", count);

        Ok(count)
    }

    fn record(&self, ad_type: u8, offset: usize, len: usize) -> PositionRecord {
        PositionRecord {
            ad_type,
            offset,
            len,
            generation: self.generation,
        }
    }

    fn insert<T>(slots: &mut [Option<T>], value: T) -> Option<usize> {
        let (slot, entry) = slots.iter_mut().enumerate().find(|(_, entry)| entry.is_none())?;

        *entry = Some(value);

        Some(slot)
    }

    fn check(&self, record: &PositionRecord, buffer: &[u8]) -> Result<(), RegistryError> {
        if record.generation != self.generation {
            return Err(RegistryError::StaleRecord {
                record: record.generation,
                current: self.generation,
            });
        }

        let out_of_bounds = RegistryError::OutOfBounds {
            offset: record.offset,
            len: record.len,
            buffer_len: buffer.len(),
        };

        let end = record.offset.checked_add(record.len).ok_or(out_of_bounds)?;

        if record.offset == 0 || end > buffer.len() {
            return Err(out_of_bounds);
        }

        let found = buffer[record.offset - 1];

        if found != record.ad_type {
            return Err(RegistryError::TypeMismatch {
                expected: record.ad_type,
                found,
            });
        }

        Ok(())
    }
}
