//! Per-generation save layouts.
//!
//! Offsets are for English releases. Third generation offsets are relative to
//! the active save slot; the first two generations have a single layout
//! anchored at the start of the image.

use crate::{generation::Generation, save::Provenance};

/// Nicknames and trainer names are stored in fixed 11 byte cells.
pub const NAME_CELL_LENGTH: usize = 11;
pub const MAX_PARTY_SIZE: usize = 6;
pub const MOVE_SLOTS: usize = 4;

#[derive(Clone, Copy, Debug)]
pub struct TextField {
    pub offset: usize,
    pub length: usize,
}

#[derive(Clone, Copy, Debug)]
pub enum MoneyLayout {
    /// Three bytes of binary-coded decimal.
    Bcd { offset: usize },
    /// A double word obfuscated with a fixed XOR mask.
    Masked { offset: usize, mask: u32 },
}

#[derive(Clone, Copy, Debug)]
pub enum BadgeLayout {
    /// One bit per badge over `length` consecutive bytes, first byte lowest.
    Bitmap { offset: usize, length: usize },
    /// Not decoded; the given mask is reported as-is.
    Placeholder { mask: u16 },
}

#[derive(Clone, Copy, Debug)]
pub struct PokedexLayout {
    pub owned: usize,
    pub seen: usize,
    pub length: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct PlayTimeLayout {
    pub hours: usize,
    /// Hours are a little-endian word rather than a single byte.
    pub wide_hours: bool,
    pub minutes: usize,
    pub seconds: usize,
    /// `Placeholder` when the offsets are not known to hold the clock on real
    /// saves; the bytes are still read.
    pub provenance: Provenance,
}

#[derive(Clone, Copy, Debug)]
pub enum SpeciesSource {
    /// A species list of one byte per party member.
    List(usize),
    /// A byte inside each party record.
    InRecord(usize),
}

#[derive(Clone, Copy, Debug)]
pub enum NicknameSource {
    /// A fixed table of name cells.
    Table(usize),
    /// Name cells that start right after the last stored party record.
    AfterRecords,
}

/// Field offsets inside one party record.
#[derive(Clone, Copy, Debug)]
pub struct RecordLayout {
    pub current_hp: usize,
    pub level: usize,
    pub max_hp: usize,
    pub attack: usize,
    pub defense: usize,
    pub speed: usize,
    /// Special (gen 1) or special attack (gen 2).
    pub special: usize,
    /// Present only where the special stat is split.
    pub special_defense: Option<usize>,
    pub moves: usize,
    pub move_pp: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct PartyLayout {
    pub count: usize,
    pub species: SpeciesSource,
    pub records: usize,
    pub record_size: usize,
    pub nicknames: NicknameSource,
    pub record: RecordLayout,
}

#[derive(Clone, Copy, Debug)]
pub enum RosterLayout {
    Party(PartyLayout),
    /// Encrypted party structures that are not decoded.
    Placeholder,
}

#[derive(Clone, Copy, Debug)]
pub struct OffsetTable {
    pub trainer_name: TextField,
    pub rival_name: Option<TextField>,
    pub gender: Option<usize>,
    pub money: MoneyLayout,
    pub badges: BadgeLayout,
    pub pokedex: Option<PokedexLayout>,
    pub play_time: PlayTimeLayout,
    pub roster: RosterLayout,
}

pub const GEN1: OffsetTable = OffsetTable {
    trainer_name: TextField {
        offset: 0x2598,
        length: NAME_CELL_LENGTH,
    },
    rival_name: Some(TextField {
        offset: 0x25f6,
        length: NAME_CELL_LENGTH,
    }),
    gender: None,
    money: MoneyLayout::Bcd { offset: 0x25f3 },
    badges: BadgeLayout::Bitmap {
        offset: 0x2602,
        length: 1,
    },
    pokedex: Some(PokedexLayout {
        owned: 0x25a3,
        seen: 0x25b6,
        length: 19,
    }),
    play_time: PlayTimeLayout {
        hours: 0x2ced,
        wide_hours: false,
        minutes: 0x2cee,
        seconds: 0x2cef,
        provenance: Provenance::Decoded,
    },
    roster: RosterLayout::Party(PartyLayout {
        count: 0x2f2c,
        species: SpeciesSource::List(0x2f2d),
        records: 0x2f34,
        record_size: 44,
        nicknames: NicknameSource::Table(0x307e),
        record: RecordLayout {
            current_hp: 0x01,
            level: 0x21,
            max_hp: 0x22,
            attack: 0x24,
            defense: 0x26,
            speed: 0x28,
            special: 0x2a,
            special_defense: None,
            moves: 0x08,
            move_pp: 0x0c,
        },
    }),
};

pub const GEN2: OffsetTable = OffsetTable {
    trainer_name: TextField {
        offset: 0x2009,
        length: NAME_CELL_LENGTH,
    },
    rival_name: None,
    gender: None,
    money: MoneyLayout::Bcd { offset: 0x23db },
    // Johto badges, then Kanto badges
    badges: BadgeLayout::Bitmap {
        offset: 0x23e4,
        length: 2,
    },
    pokedex: None,
    play_time: PlayTimeLayout {
        hours: 0x2053,
        wide_hours: false,
        minutes: 0x2054,
        seconds: 0x2055,
        provenance: Provenance::Decoded,
    },
    roster: RosterLayout::Party(PartyLayout {
        count: 0x288a,
        species: SpeciesSource::InRecord(0x00),
        records: 0x288b,
        record_size: 48,
        nicknames: NicknameSource::AfterRecords,
        record: RecordLayout {
            current_hp: 0x01,
            level: 0x1f,
            max_hp: 0x22,
            attack: 0x24,
            defense: 0x26,
            speed: 0x28,
            special: 0x2a,
            special_defense: Some(0x2c),
            moves: 0x02,
            move_pp: 0x06,
        },
    }),
};

pub const GEN3: OffsetTable = OffsetTable {
    trainer_name: TextField {
        offset: 0x0000,
        length: 7,
    },
    rival_name: None,
    gender: Some(0x0008),
    money: MoneyLayout::Masked {
        offset: 0x0490,
        mask: 0x1234_5678,
    },
    badges: BadgeLayout::Placeholder { mask: 0xff },
    pokedex: None,
    play_time: PlayTimeLayout {
        hours: 0x000e,
        wide_hours: true,
        minutes: 0x0010,
        seconds: 0x0011,
        provenance: Provenance::Placeholder,
    },
    roster: RosterLayout::Placeholder,
};

impl OffsetTable {
    pub fn for_generation(generation: Generation) -> &'static OffsetTable {
        match generation {
            Generation::One => &GEN1,
            Generation::Two => &GEN2,
            Generation::Three => &GEN3,
        }
    }
}
