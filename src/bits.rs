//! Population counts for badge and Pokedex bitmaps.

pub fn count_bits(byte: u8) -> u32 {
    byte.count_ones()
}

pub fn count_bits_in(data: &[u8]) -> u32 {
    data.iter().map(|byte| count_bits(*byte)).sum()
}
