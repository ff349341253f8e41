//! Name and move metadata lookups used after decoding.
//!
//! The decoder only emits numeric identifiers. A [`Directory`] turns them into
//! display names and maximum PP for callers that want them.

use crate::{generation::Generation, save::TrainerRecord};

/// PP reported for moves missing from every table.
pub const DEFAULT_MAX_PP: u8 = 20;

pub trait Directory {
    fn species_name(&self, id: u16, generation: Generation) -> Option<String>;
    fn move_name(&self, id: u16, generation: Generation) -> Option<String>;
    fn move_max_pp(&self, id: u16, generation: Generation) -> Option<u8>;
}

pub fn display_species(directory: &impl Directory, id: u16, generation: Generation) -> String {
    directory
        .species_name(id, generation)
        .unwrap_or_else(|| format!("Pokemon #{id}"))
}

pub fn display_move(directory: &impl Directory, id: u16, generation: Generation) -> String {
    directory
        .move_name(id, generation)
        .unwrap_or_else(|| format!("Move #{id}"))
}

/// Returns a copy of `record` with every move slot's `max_pp` filled in.
pub fn resolve_max_pp(record: &TrainerRecord, directory: &impl Directory) -> TrainerRecord {
    let mut resolved = record.clone();
    for entry in resolved.roster.iter_mut() {
        for slot in entry.moves.iter_mut() {
            slot.max_pp = directory.move_max_pp(slot.id, record.generation);
        }
    }
    resolved
}

/// Tables consulted in order; the first table holding an id answers for it.
#[derive(Clone, Debug, Default)]
pub struct RuleList<T: 'static> {
    tables: Vec<&'static [(u16, T)]>,
}

impl<T: Copy> RuleList<T> {
    pub fn new(general: &'static [(u16, T)]) -> Self {
        Self {
            tables: vec![general],
        }
    }

    /// Places `overrides` ahead of every table already in the list.
    pub fn with_overrides(mut self, overrides: &'static [(u16, T)]) -> Self {
        self.tables.insert(0, overrides);
        self
    }

    pub fn lookup(&self, id: u16) -> Option<T> {
        self.tables.iter().find_map(|table| {
            table
                .iter()
                .find(|(entry_id, _)| *entry_id == id)
                .map(|(_, value)| *value)
        })
    }
}

/// Built-in directory covering the early species and moves.
#[derive(Clone, Debug)]
pub struct StaticDirectory {
    species: RuleList<&'static str>,
    moves: RuleList<&'static str>,
    move_pp: RuleList<u8>,
}

impl Default for StaticDirectory {
    fn default() -> Self {
        Self {
            species: RuleList::new(SPECIES_NAMES),
            moves: RuleList::new(MOVE_NAMES),
            move_pp: RuleList::new(MOVE_PP),
        }
    }
}

impl StaticDirectory {
    pub fn with_species_overrides(mut self, overrides: &'static [(u16, &'static str)]) -> Self {
        self.species = self.species.with_overrides(overrides);
        self
    }

    pub fn with_move_pp_overrides(mut self, overrides: &'static [(u16, u8)]) -> Self {
        self.move_pp = self.move_pp.with_overrides(overrides);
        self
    }
}

impl Directory for StaticDirectory {
    fn species_name(&self, id: u16, _generation: Generation) -> Option<String> {
        self.species.lookup(id).map(str::to_owned)
    }

    fn move_name(&self, id: u16, _generation: Generation) -> Option<String> {
        self.moves.lookup(id).map(str::to_owned)
    }

    fn move_max_pp(&self, id: u16, _generation: Generation) -> Option<u8> {
        Some(self.move_pp.lookup(id).unwrap_or(DEFAULT_MAX_PP))
    }
}

const SPECIES_NAMES: &[(u16, &str)] = &[
    (1, "Bulbasaur"),
    (2, "Ivysaur"),
    (3, "Venusaur"),
    (4, "Charmander"),
    (5, "Charmeleon"),
    (6, "Charizard"),
    (7, "Squirtle"),
    (8, "Wartortle"),
    (9, "Blastoise"),
    (10, "Caterpie"),
    (11, "Metapod"),
    (12, "Butterfree"),
    (13, "Weedle"),
    (14, "Kakuna"),
    (15, "Beedrill"),
    (16, "Pidgey"),
    (17, "Pidgeotto"),
    (18, "Pidgeot"),
    (19, "Rattata"),
    (20, "Raticate"),
    (21, "Spearow"),
    (22, "Fearow"),
    (23, "Ekans"),
    (24, "Arbok"),
    (25, "Pikachu"),
    (26, "Raichu"),
];

const MOVE_NAMES: &[(u16, &str)] = &[
    (1, "Pound"),
    (2, "Karate Chop"),
    (3, "Double Slap"),
    (4, "Comet Punch"),
    (5, "Mega Punch"),
    (6, "Pay Day"),
    (7, "Fire Punch"),
    (8, "Ice Punch"),
    (9, "Thunder Punch"),
    (10, "Scratch"),
    (11, "Vice Grip"),
    (12, "Guillotine"),
    (13, "Razor Wind"),
    (14, "Swords Dance"),
    (15, "Cut"),
    (16, "Gust"),
    (17, "Wing Attack"),
    (18, "Whirlwind"),
    (19, "Fly"),
    (20, "Bind"),
    (21, "Slam"),
    (22, "Vine Whip"),
    (23, "Stomp"),
    (24, "Double Kick"),
    (25, "Mega Kick"),
    (26, "Jump Kick"),
    (27, "Rolling Kick"),
    (28, "Sand Attack"),
    (29, "Headbutt"),
    (30, "Horn Attack"),
    (31, "Fury Attack"),
    (32, "Horn Drill"),
    (33, "Tackle"),
    (34, "Body Slam"),
    (35, "Wrap"),
    (36, "Take Down"),
    (37, "Thrash"),
    (38, "Double-Edge"),
    (39, "Tail Whip"),
    (40, "Poison Sting"),
    (41, "Twineedle"),
    (42, "Pin Missile"),
    (43, "Leer"),
    (44, "Bite"),
    (45, "Growl"),
    (46, "Roar"),
    (47, "Sing"),
    (48, "Supersonic"),
    (49, "Sonic Boom"),
    (50, "Disable"),
    (51, "Acid"),
    (52, "Ember"),
    (53, "Flamethrower"),
    (54, "Mist"),
    (55, "Water Gun"),
    (56, "Hydro Pump"),
    (57, "Surf"),
    (58, "Ice Beam"),
    (59, "Blizzard"),
    (60, "Psybeam"),
    (85, "Thunderbolt"),
    (86, "Thunder Wave"),
    (87, "Thunder"),
    (98, "Quick Attack"),
];

const MOVE_PP: &[(u16, u8)] = &[
    (1, 35),
    (2, 25),
    (3, 10),
    (4, 15),
    (5, 20),
    (6, 20),
    (7, 15),
    (8, 15),
    (9, 15),
    (10, 35),
    (11, 30),
    (12, 5),
    (13, 10),
    (14, 30),
    (15, 30),
    (16, 35),
    (17, 35),
    (18, 20),
    (19, 15),
    (20, 20),
    (21, 20),
    (22, 10),
    (23, 20),
    (24, 30),
    (25, 5),
    (26, 25),
    (27, 15),
    (28, 15),
    (29, 15),
    (30, 25),
    (85, 15),
    (86, 20),
    (87, 10),
    (98, 30),
];

#[cfg(test)]
mod tests {
    use super::*;

    const GEN: Generation = Generation::One;

    #[test]
    fn known_and_unknown_names() {
        let directory = StaticDirectory::default();
        assert_eq!(display_species(&directory, 25, GEN), "Pikachu");
        assert_eq!(display_species(&directory, 200, GEN), "Pokemon #200");
        assert_eq!(display_move(&directory, 33, GEN), "Tackle");
        assert_eq!(display_move(&directory, 99, GEN), "Move #99");
    }

    #[test]
    fn unknown_moves_default_to_twenty_pp() {
        let directory = StaticDirectory::default();
        assert_eq!(directory.move_max_pp(12, GEN), Some(5));
        assert_eq!(directory.move_max_pp(150, GEN), Some(DEFAULT_MAX_PP));
    }

    #[test]
    fn overrides_are_consulted_first() {
        static RENAMES: &[(u16, &str)] = &[(25, "Sparky")];
        static PP: &[(u16, u8)] = &[(12, 8)];
        let directory = StaticDirectory::default()
            .with_species_overrides(RENAMES)
            .with_move_pp_overrides(PP);
        assert_eq!(directory.species_name(25, GEN).as_deref(), Some("Sparky"));
        assert_eq!(directory.species_name(26, GEN).as_deref(), Some("Raichu"));
        assert_eq!(directory.move_max_pp(12, GEN), Some(8));
        assert_eq!(directory.move_max_pp(1, GEN), Some(35));
    }
}
