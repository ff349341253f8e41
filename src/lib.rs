//! Read-only decoding of Pokemon save images from the first three
//! generations.
//!
//! ```no_run
//! let image = std::fs::read("red.sav").unwrap();
//! let record = pksav::decode(&image).unwrap();
//! println!("{} has {} and {}", record.trainer_name, record.badges, record.play_time);
//! ```
//!
//! Third generation support is limited to the save slot counters and the
//! money of the active slot. Badges, play time and the party are placeholders
//! there, flagged through [`save::Provenance::Placeholder`].

pub mod bcd;
pub mod bits;
pub mod directory;
pub mod error;
pub mod generation;
pub mod layout;
pub mod reader;
pub mod roster;
pub mod save;
pub mod slot;
pub mod text;

#[cfg(feature = "cli")]
pub mod inspect;

pub use error::DecodeError;
pub use generation::Generation;
pub use save::{decode, TrainerRecord};
