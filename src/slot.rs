//! Active save slot selection for third generation images.
//!
//! The game alternates between two save regions so that a crash mid-write
//! leaves the previous save intact. Each region ends its first section with a
//! save counter; the larger counter marks the region written last.

use crate::{error::DecodeError, reader::ByteReader};

const SAVE_INDEX_OFFSET: usize = 0x0ffc;
const SAVE_A_OFFSET: usize = 0x0000;
const SAVE_B_OFFSET: usize = 0xe000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveSlot {
    A,
    B,
}

impl SaveSlot {
    pub fn index(&self) -> u8 {
        match self {
            SaveSlot::A => 0,
            SaveSlot::B => 1,
        }
    }

    /// Shift applied to every field offset when this slot is active.
    pub fn base_offset(&self) -> usize {
        match self {
            SaveSlot::A => SAVE_A_OFFSET,
            SaveSlot::B => SAVE_B_OFFSET,
        }
    }

    fn counter_offset(&self) -> usize {
        self.base_offset() + SAVE_INDEX_OFFSET
    }
}

/// Picks the slot with the strictly greater counter. Ties go to slot A.
pub fn choose_slot(counter_a: u32, counter_b: u32) -> SaveSlot {
    if counter_b > counter_a {
        SaveSlot::B
    } else {
        SaveSlot::A
    }
}

pub fn select_active_slot(reader: &ByteReader<'_>) -> Result<SaveSlot, DecodeError> {
    let counter_a = reader.read_dword(SaveSlot::A.counter_offset())?;
    let counter_b = reader.read_dword(SaveSlot::B.counter_offset())?;
    let slot = choose_slot(counter_a, counter_b);
    log::debug!(
        "Save counters A: {counter_a}, B: {counter_b}; using slot {}",
        slot.index()
    );
    Ok(slot)
}
