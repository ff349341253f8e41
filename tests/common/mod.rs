#![allow(dead_code)]

pub const GEN1_LENGTH: usize = 32768;
pub const GEN2_LENGTH: usize = 65536;
pub const GEN3_LENGTH: usize = 131072;

pub const GEN1_TRAINER_NAME: usize = 0x2598;
pub const GEN1_RIVAL_NAME: usize = 0x25f6;
pub const GEN1_MONEY: usize = 0x25f3;
pub const GEN1_BADGES: usize = 0x2602;
pub const GEN1_POKEDEX_OWNED: usize = 0x25a3;
pub const GEN1_POKEDEX_SEEN: usize = 0x25b6;
pub const GEN1_PLAY_TIME: usize = 0x2ced;
pub const GEN1_PARTY_COUNT: usize = 0x2f2c;
pub const GEN1_PARTY_SPECIES: usize = 0x2f2d;
pub const GEN1_PARTY_RECORDS: usize = 0x2f34;
pub const GEN1_RECORD_SIZE: usize = 44;
pub const GEN1_NICKNAMES: usize = 0x307e;

pub const GEN2_TRAINER_NAME: usize = 0x2009;
pub const GEN2_MONEY: usize = 0x23db;
pub const GEN2_BADGES: usize = 0x23e4;
pub const GEN2_PLAY_TIME: usize = 0x2053;
pub const GEN2_PARTY_COUNT: usize = 0x288a;
pub const GEN2_PARTY_RECORDS: usize = 0x288b;
pub const GEN2_RECORD_SIZE: usize = 48;

pub const GEN3_SLOT_B: usize = 0xe000;
pub const GEN3_COUNTER: usize = 0x0ffc;
pub const GEN3_MONEY: usize = 0x0490;
pub const GEN3_MONEY_MASK: u32 = 0x1234_5678;

pub fn put(image: &mut [u8], offset: usize, bytes: &[u8]) {
    image[offset..offset + bytes.len()].copy_from_slice(bytes);
}

pub fn put_word(image: &mut [u8], offset: usize, value: u16) {
    put(image, offset, &value.to_le_bytes());
}

pub fn put_dword(image: &mut [u8], offset: usize, value: u32) {
    put(image, offset, &value.to_le_bytes());
}

/// Writes a first generation party record.
pub fn put_gen1_member(
    image: &mut [u8],
    idx: usize,
    species: u8,
    level: u8,
    moves: [u8; 4],
    pp: [u8; 4],
) {
    let record = GEN1_PARTY_RECORDS + idx * GEN1_RECORD_SIZE;
    image[GEN1_PARTY_SPECIES + idx] = species;
    put_word(image, record + 0x01, 30 + idx as u16);
    put(image, record + 0x08, &moves);
    put(image, record + 0x0c, &pp);
    image[record + 0x21] = level;
    put_word(image, record + 0x22, 40 + idx as u16);
    put_word(image, record + 0x24, 11);
    put_word(image, record + 0x26, 12);
    put_word(image, record + 0x28, 13);
    put_word(image, record + 0x2a, 14);
}

/// A first generation image with trainer "ARS" and one Pikachu.
pub fn gen1_image() -> Vec<u8> {
    let mut image = vec![0u8; GEN1_LENGTH];
    put(&mut image, GEN1_TRAINER_NAME, &[0x80, 0x91, 0x92, 0x50]);
    put(&mut image, GEN1_MONEY, &[0x12, 0x34, 0x56]);
    image[GEN1_PARTY_COUNT] = 1;
    put_gen1_member(&mut image, 0, 25, 12, [10, 0, 33, 0], [35, 0, 30, 0]);
    put(&mut image, GEN1_NICKNAMES, &[0x8f, 0x88, 0x8a, 0x80, 0x50]);
    image
}
