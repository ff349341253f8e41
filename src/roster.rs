use serde::Serialize;

use crate::{
    error::DecodeError,
    layout::{
        NicknameSource, PartyLayout, SpeciesSource, MAX_PARTY_SIZE, MOVE_SLOTS, NAME_CELL_LENGTH,
    },
    reader::ByteReader,
    text::TextCodec,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MoveSlot {
    pub id: u16,
    pub pp: u8,
    /// Filled in by a [`crate::directory::Directory`]; the decoder leaves it empty.
    pub max_pp: Option<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialStat {
    /// First generation's single Special stat.
    Unified(u16),
    Split { attack: u16, defense: u16 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub current_hp: u16,
    pub max_hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub special: SpecialStat,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub species: u16,
    pub nickname: String,
    pub level: u8,
    pub stats: Stats,
    pub moves: Vec<MoveSlot>,
}

/// Keeps the stored move slots with a non-zero id, in their stored order.
///
/// Every slot is checked on its own; an empty slot does not end the list.
pub fn collect_moves(ids: [u8; MOVE_SLOTS], pp: [u8; MOVE_SLOTS]) -> Vec<MoveSlot> {
    ids.into_iter()
        .zip(pp)
        .filter(|(id, _)| *id != 0)
        .map(|(id, pp)| MoveSlot {
            id: id.into(),
            pp,
            max_pp: None,
        })
        .collect()
}

/// Clamps the stored party size to [`MAX_PARTY_SIZE`].
pub fn clamp_party_count(stored: u8) -> usize {
    let count = stored as usize;
    if count > MAX_PARTY_SIZE {
        log::warn!("Stored party count {count} exceeds {MAX_PARTY_SIZE}, truncating");
        MAX_PARTY_SIZE
    } else {
        count
    }
}

pub fn read_party(
    reader: &ByteReader<'_>,
    party: &PartyLayout,
    codec: TextCodec,
) -> Result<Vec<RosterEntry>, DecodeError> {
    let count = clamp_party_count(reader.read_byte(party.count)?);
    log::debug!("Reading {count} party members");

    let nickname_table = match party.nicknames {
        NicknameSource::Table(offset) => offset,
        NicknameSource::AfterRecords => party.records + count * party.record_size,
    };

    (0..count)
        .map(|idx| {
            let record_offset = party.records + idx * party.record_size;
            let nickname_offset = nickname_table + idx * NAME_CELL_LENGTH;
            let entry = read_entry(reader, party, codec, idx, record_offset, nickname_offset)?;
            log::trace!("Party slot {idx}: {entry:?}");
            Ok(entry)
        })
        .collect()
}

fn read_entry(
    reader: &ByteReader<'_>,
    party: &PartyLayout,
    codec: TextCodec,
    idx: usize,
    record_offset: usize,
    nickname_offset: usize,
) -> Result<RosterEntry, DecodeError> {
    let layout = &party.record;
    let species = match party.species {
        SpeciesSource::List(offset) => reader.read_byte(offset + idx)?,
        SpeciesSource::InRecord(offset) => reader.read_byte(record_offset + offset)?,
    };
    let word = |field: usize| reader.read_word(record_offset + field);

    let special = match layout.special_defense {
        Some(special_defense) => SpecialStat::Split {
            attack: word(layout.special)?,
            defense: word(special_defense)?,
        },
        None => SpecialStat::Unified(word(layout.special)?),
    };

    let stats = Stats {
        current_hp: word(layout.current_hp)?,
        max_hp: word(layout.max_hp)?,
        attack: word(layout.attack)?,
        defense: word(layout.defense)?,
        speed: word(layout.speed)?,
        special,
    };

    let move_ids = reader.read_array::<MOVE_SLOTS>(record_offset + layout.moves)?;
    let move_pp = reader.read_array::<MOVE_SLOTS>(record_offset + layout.move_pp)?;

    Ok(RosterEntry {
        species: species.into(),
        nickname: codec.decode(reader.read_slice(nickname_offset, NAME_CELL_LENGTH)?),
        level: reader.read_byte(record_offset + layout.level)?,
        stats,
        moves: collect_moves(move_ids, move_pp),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GEN1;

    #[test]
    fn empty_move_slots_are_dropped_in_place() {
        let moves = collect_moves([10, 0, 33, 0], [35, 0, 30, 0]);
        assert_eq!(
            moves,
            vec![
                MoveSlot {
                    id: 10,
                    pp: 35,
                    max_pp: None
                },
                MoveSlot {
                    id: 33,
                    pp: 30,
                    max_pp: None
                },
            ]
        );
    }

    #[test]
    fn no_moves_gives_empty_list() {
        assert!(collect_moves([0; 4], [7; 4]).is_empty());
    }

    #[test]
    fn party_count_is_clamped() {
        assert_eq!(clamp_party_count(0), 0);
        assert_eq!(clamp_party_count(6), 6);
        assert_eq!(clamp_party_count(9), 6);
        assert_eq!(clamp_party_count(0xff), 6);
    }

    #[test]
    fn reads_gen1_record_fields() {
        let crate::layout::RosterLayout::Party(party) = GEN1.roster else {
            panic!("gen 1 has a decoded party");
        };
        let mut image = vec![0u8; 0x8000];
        image[0x2f2c] = 1;
        image[0x2f2d] = 0x99;
        let record = 0x2f34;
        image[record + 0x01..record + 0x03].copy_from_slice(&20u16.to_le_bytes());
        image[record + 0x08..record + 0x0c].copy_from_slice(&[33, 45, 0, 0]);
        image[record + 0x0c..record + 0x10].copy_from_slice(&[35, 40, 0, 0]);
        image[record + 0x21] = 5;
        image[record + 0x22..record + 0x24].copy_from_slice(&21u16.to_le_bytes());
        image[record + 0x2a..record + 0x2c].copy_from_slice(&12u16.to_le_bytes());
        image[0x307e..0x3083].copy_from_slice(&[0x81, 0x8e, 0x81, 0x50, 0x80]);

        let party = read_party(&ByteReader::new(&image), &party, TextCodec::Gen1).unwrap();
        assert_eq!(party.len(), 1);
        let entry = &party[0];
        assert_eq!(entry.species, 0x99);
        assert_eq!(entry.nickname, "BOB");
        assert_eq!(entry.level, 5);
        assert_eq!(entry.stats.current_hp, 20);
        assert_eq!(entry.stats.max_hp, 21);
        assert_eq!(entry.stats.special, SpecialStat::Unified(12));
        assert_eq!(
            entry.moves.iter().map(|slot| slot.id).collect::<Vec<_>>(),
            vec![33, 45]
        );
    }
}
