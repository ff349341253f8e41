use anyhow::Context;
use clap::Args;
use prettytable::{format, row, Table};
use std::{io::Write, path::PathBuf};

use crate::{
    directory::{display_move, display_species, resolve_max_pp, StaticDirectory},
    roster::SpecialStat,
    save::{decode, Provenance, TrainerRecord},
};

#[derive(Debug, Args)]
pub struct Opts {
    /// Path to a .sav image.
    pub sav: PathBuf,
    /// Print the decoded record as JSON.
    #[arg(long)]
    pub json: bool,
    /// Print numeric species and move ids instead of names.
    #[arg(long)]
    pub no_names: bool,
}

pub fn run(opts: Opts, out: &mut impl Write) -> anyhow::Result<()> {
    let image = std::fs::read(&opts.sav)
        .with_context(|| format!("Unable to read {}", opts.sav.display()))?;
    let record = decode(&image)
        .with_context(|| format!("Unable to decode {}", opts.sav.display()))?;
    log::info!(
        "Decoded {} save for {}",
        record.generation,
        record.trainer_name
    );

    let directory = StaticDirectory::default();
    if opts.json {
        let record = resolve_max_pp(&record, &directory);
        serde_json::to_writer_pretty(&mut *out, &record)?;
        writeln!(out)?;
    } else {
        write_summary(&record, &directory, !opts.no_names, out)?;
    }
    Ok(())
}

fn placeholder_label(provenance: Provenance) -> &'static str {
    match provenance {
        Provenance::Decoded => "",
        Provenance::Placeholder => " (placeholder)",
    }
}

fn write_summary(
    record: &TrainerRecord,
    directory: &StaticDirectory,
    names: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let generation = record.generation;
    writeln!(out, "Trainer: {}", record.trainer_name)?;
    if let Some(rival) = &record.rival_name {
        writeln!(out, "Rival: {rival}")?;
    }
    if let Some(gender) = record.gender {
        writeln!(out, "Gender: {gender:?}")?;
    }
    writeln!(out, "Game: {generation}")?;
    writeln!(out, "Money: ${}", record.money)?;
    writeln!(
        out,
        "Badges: {}{}",
        record.badges,
        placeholder_label(record.badges.provenance)
    )?;
    if let Some(pokedex) = record.pokedex {
        writeln!(out, "Pokedex: {} owned, {} seen", pokedex.owned, pokedex.seen)?;
    }
    writeln!(
        out,
        "Play Time: {}{}",
        record.play_time,
        placeholder_label(record.play_time.provenance)
    )?;

    if record.is_roster_placeholder() {
        writeln!(out, "Party: not decoded for this generation (placeholder)")?;
        return Ok(());
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(row![
        "SLOT", "POKEMON", "NICKNAME", "LV", "HP", "ATK", "DEF", "SPD", "SPC", "MOVES"
    ]);
    for (idx, entry) in record.roster.iter().enumerate() {
        let species = if names {
            display_species(directory, entry.species, generation)
        } else {
            format!("#{}", entry.species)
        };
        let special = match entry.stats.special {
            SpecialStat::Unified(special) => special.to_string(),
            SpecialStat::Split { attack, defense } => format!("{attack}/{defense}"),
        };
        let moves = entry
            .moves
            .iter()
            .map(|slot| {
                let name = if names {
                    display_move(directory, slot.id, generation)
                } else {
                    format!("#{}", slot.id)
                };
                format!("{name} ({})", slot.pp)
            })
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(row![
            idx + 1,
            species,
            entry.nickname,
            entry.level,
            format!("{}/{}", entry.stats.current_hp, entry.stats.max_hp),
            entry.stats.attack,
            entry.stats.defense,
            entry.stats.speed,
            special,
            moves
        ]);
    }

    writeln!(out, "Party ({}):", record.roster.len())?;
    table.print(out)?;
    Ok(())
}
