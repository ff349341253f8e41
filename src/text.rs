use crate::generation::Generation;

/// Stand-in for the first generation's single-glyph species symbol.
pub const SPECIES_SYMBOL: char = 'P';

const GEN1_TERMINATOR: u8 = 0x50;
const MODERN_TERMINATOR: u8 = 0xff;

/// In-game character encodings. Decoding is lossy and one-way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextCodec {
    /// Red/Blue/Yellow, terminated by `0x50`.
    Gen1,
    /// Gold/Silver/Crystal and the third generation, terminated by `0xFF`.
    Modern,
}

impl TextCodec {
    pub fn for_generation(generation: Generation) -> Self {
        match generation {
            Generation::One => TextCodec::Gen1,
            Generation::Two | Generation::Three => TextCodec::Modern,
        }
    }

    fn terminator(self) -> u8 {
        match self {
            TextCodec::Gen1 => GEN1_TERMINATOR,
            TextCodec::Modern => MODERN_TERMINATOR,
        }
    }

    /// Decodes up to `text_data.len()` bytes, stopping early at the terminator.
    pub fn decode(self, text_data: &[u8]) -> String {
        let terminator = self.terminator();
        text_data
            .iter()
            .take_while(|byte| **byte != terminator)
            .map(|byte| self.decode_char(*byte))
            .collect()
    }

    fn decode_char(self, byte: u8) -> char {
        match byte {
            0x80..=0x99 => (b'A' + (byte - 0x80)) as char,
            0xa0..=0xb9 => (b'a' + (byte - 0xa0)) as char,
            0xf6..=0xff => (b'0' + (byte - 0xf6)) as char,
            0x7f => ' ',
            0xe8 if self == TextCodec::Gen1 => SPECIES_SYMBOL,
            _ => '?',
        }
    }
}
