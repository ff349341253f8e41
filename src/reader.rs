use byteorder::{ByteOrder, LittleEndian};

use crate::error::DecodeError;

/// Bounds-checked primitive access over a borrowed save image.
///
/// Offsets are relative to the reader's origin, which is the start of the
/// image unless the reader has been rebased onto a save slot. Multi-byte reads
/// are little-endian. Every read that would run past the end of the image
/// fails with [`DecodeError::OutOfRange`] rather than truncating.
#[derive(Clone, Copy, Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    origin: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, origin: 0 }
    }

    /// A reader over the same image whose offsets start at `origin`.
    pub fn rebased(&self, origin: usize) -> Self {
        Self {
            data: self.data,
            origin,
        }
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    pub fn read_byte(&self, offset: usize) -> Result<u8, DecodeError> {
        Ok(self.read_slice(offset, 1)?[0])
    }

    pub fn read_word(&self, offset: usize) -> Result<u16, DecodeError> {
        Ok(LittleEndian::read_u16(self.read_slice(offset, 2)?))
    }

    pub fn read_dword(&self, offset: usize) -> Result<u32, DecodeError> {
        Ok(LittleEndian::read_u32(self.read_slice(offset, 4)?))
    }

    pub fn read_slice(&self, offset: usize, length: usize) -> Result<&'a [u8], DecodeError> {
        let offset = self.origin.saturating_add(offset);
        let out_of_range = || {
            log::error!(
                "Offset table defect: {length} byte read at 0x{offset:x} in a {} byte image",
                self.data.len()
            );
            DecodeError::OutOfRange {
                offset,
                width: length,
                length: self.data.len(),
            }
        };
        let end = offset.checked_add(length).ok_or_else(out_of_range)?;
        self.data.get(offset..end).ok_or_else(out_of_range)
    }

    /// Reads exactly `N` bytes into an owned array.
    pub fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_slice(offset, N)?);
        Ok(out)
    }
}
