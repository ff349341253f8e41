use serde::Serialize;

use crate::{
    bcd::{decode_money, MAX_MONEY},
    bits::count_bits_in,
    error::DecodeError,
    generation::{detect, Generation},
    layout::{BadgeLayout, MoneyLayout, OffsetTable, PlayTimeLayout, RosterLayout, TextField},
    reader::ByteReader,
    roster::{read_party, RosterEntry},
    slot::select_active_slot,
    text::TextCodec,
};

/// Whether a value was read from the image or stands in for data that is not
/// decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Decoded,
    Placeholder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PlayerGender {
    Male,
    Female,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlayTime {
    pub hours: u16,
    pub minutes: u8,
    pub seconds: u8,
    /// Third generation clocks are read from fixed slot offsets without
    /// following the slot's section order, so they are `Placeholder`.
    pub provenance: Provenance,
}

impl PlayTime {
    pub fn total_seconds(&self) -> u32 {
        self.hours as u32 * 3600 + self.minutes as u32 * 60 + self.seconds as u32
    }
}

impl std::fmt::Display for PlayTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Badges {
    /// One bit per badge. In the second generation the low byte holds the
    /// Johto badges and the high byte the Kanto badges.
    pub mask: u16,
    pub count: u32,
    pub provenance: Provenance,
}

impl std::fmt::Display for Badges {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} badges", self.count)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PokedexTally {
    pub owned: u32,
    pub seen: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TrainerRecord {
    pub generation: Generation,
    pub trainer_name: String,
    /// First generation only.
    pub rival_name: Option<String>,
    /// Third generation only.
    pub gender: Option<PlayerGender>,
    pub money: u32,
    pub badges: Badges,
    /// First generation only.
    pub pokedex: Option<PokedexTally>,
    pub play_time: PlayTime,
    pub roster: Vec<RosterEntry>,
    /// Third generation party data is encrypted and is not decoded; such
    /// records carry a `Placeholder` roster.
    pub roster_provenance: Provenance,
}

impl TrainerRecord {
    pub fn is_roster_placeholder(&self) -> bool {
        self.roster_provenance == Provenance::Placeholder
    }
}

/// Decodes a whole save image. Either every field is decoded or the image is
/// rejected; no partial record is produced.
pub fn decode(image: &[u8]) -> Result<TrainerRecord, DecodeError> {
    let generation = detect(image.len())?;
    log::debug!("Detected {generation}");

    let reader = ByteReader::new(image);
    let reader = match generation {
        Generation::Three => reader.rebased(select_active_slot(&reader)?.base_offset()),
        Generation::One | Generation::Two => reader,
    };
    let table = OffsetTable::for_generation(generation);
    let codec = TextCodec::for_generation(generation);
    let fields = FieldReader { reader, codec };

    let (roster, roster_provenance) = match &table.roster {
        RosterLayout::Party(party) => (read_party(&reader, party, codec)?, Provenance::Decoded),
        RosterLayout::Placeholder => {
            log::debug!("Party data for {generation} is not decoded");
            (Vec::new(), Provenance::Placeholder)
        }
    };

    Ok(TrainerRecord {
        generation,
        trainer_name: fields.text(table.trainer_name)?,
        rival_name: table
            .rival_name
            .map(|rival| fields.text(rival))
            .transpose()?,
        gender: table
            .gender
            .map(|offset| fields.byte(offset).map(determine_player_gender))
            .transpose()?,
        money: fields.money(table.money)?,
        badges: fields.badges(table.badges)?,
        pokedex: table
            .pokedex
            .map(|pokedex| {
                Ok::<_, DecodeError>(PokedexTally {
                    owned: count_bits_in(fields.slice(pokedex.owned, pokedex.length)?),
                    seen: count_bits_in(fields.slice(pokedex.seen, pokedex.length)?),
                })
            })
            .transpose()?,
        play_time: fields.play_time(table.play_time)?,
        roster,
        roster_provenance,
    })
}

struct FieldReader<'a> {
    reader: ByteReader<'a>,
    codec: TextCodec,
}

impl<'a> FieldReader<'a> {
    fn byte(&self, offset: usize) -> Result<u8, DecodeError> {
        self.reader.read_byte(offset)
    }

    fn slice(&self, offset: usize, length: usize) -> Result<&'a [u8], DecodeError> {
        self.reader.read_slice(offset, length)
    }

    fn text(&self, field: TextField) -> Result<String, DecodeError> {
        Ok(self.codec.decode(self.slice(field.offset, field.length)?))
    }

    fn money(&self, layout: MoneyLayout) -> Result<u32, DecodeError> {
        match layout {
            MoneyLayout::Bcd { offset } => Ok(decode_money(self.reader.read_array(offset)?)),
            MoneyLayout::Masked { offset, mask } => {
                let money = self.reader.read_dword(offset)? ^ mask;
                Ok(money.min(MAX_MONEY))
            }
        }
    }

    fn badges(&self, layout: BadgeLayout) -> Result<Badges, DecodeError> {
        match layout {
            BadgeLayout::Bitmap { offset, length } => {
                let bitmap = self.slice(offset, length)?;
                let mask = bitmap
                    .iter()
                    .enumerate()
                    .fold(0u16, |mask, (idx, byte)| mask | ((*byte as u16) << (8 * idx)));
                Ok(Badges {
                    mask,
                    count: count_bits_in(bitmap),
                    provenance: Provenance::Decoded,
                })
            }
            BadgeLayout::Placeholder { mask } => Ok(Badges {
                mask,
                count: mask.count_ones(),
                provenance: Provenance::Placeholder,
            }),
        }
    }

    fn play_time(&self, layout: PlayTimeLayout) -> Result<PlayTime, DecodeError> {
        let hours = if layout.wide_hours {
            self.reader.read_word(layout.hours)?
        } else {
            self.byte(layout.hours)?.into()
        };
        Ok(PlayTime {
            hours,
            minutes: self.byte(layout.minutes)?,
            seconds: self.byte(layout.seconds)?,
            provenance: layout.provenance,
        })
    }
}

fn determine_player_gender(data: u8) -> PlayerGender {
    if data == 0x00 {
        PlayerGender::Male
    } else {
        PlayerGender::Female
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_time_formats_with_padding() {
        let play_time = PlayTime {
            hours: 12,
            minutes: 3,
            seconds: 7,
            provenance: Provenance::Decoded,
        };
        assert_eq!(play_time.to_string(), "12:03:07");
        assert_eq!(play_time.total_seconds(), 12 * 3600 + 3 * 60 + 7);
    }

    #[test]
    fn badges_display_count() {
        let badges = Badges {
            mask: 0b1011,
            count: 3,
            provenance: Provenance::Decoded,
        };
        assert_eq!(badges.to_string(), "3 badges");
    }

    #[test]
    fn unsupported_lengths_abort() {
        assert_eq!(
            decode(&[0u8; 1000]),
            Err(DecodeError::UnsupportedFormat { length: 1000 })
        );
    }

    #[test]
    fn gender_byte() {
        assert_eq!(determine_player_gender(0), PlayerGender::Male);
        assert_eq!(determine_player_gender(1), PlayerGender::Female);
    }
}
