use std::num::ParseIntError;

use dugout_engine::{ManualEntry, ParsePositionError, Position};

use crate::{util, view::SeasonStatsView};

use super::DirApp;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RecordArg {
    /// Stats row as PLAYER:POSITION[:COUNT]; may be repeated
    #[arg(long = "entry", short, required = true, value_parser = parse_entry)]
    entries: Vec<ManualEntry>,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ResetStatsArg {
    /// Do not ask for confirmation
    #[arg(long)]
    yes: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
enum ParseEntryError {
    #[display("expected PLAYER:POSITION[:COUNT], got '{input}'")]
    Format { input: String },
    #[display("{_0}")]
    Position(ParsePositionError),
    #[display("invalid count '{count}': {source}")]
    Count {
        count: String,
        source: ParseIntError,
    },
}

/// Parses `PLAYER:POSITION[:COUNT]`.
///
/// An empty player or position is kept so that the batch reports which row is
/// missing a selection.
fn parse_entry(input: &str) -> Result<ManualEntry, ParseEntryError> {
    let parts: Vec<_> = input.split(':').map(str::trim).collect();
    let (player, position, count) = match parts.as_slice() {
        [player, position] => (*player, *position, "1"),
        [player, position, count] => (*player, *position, *count),
        _ => {
            return Err(ParseEntryError::Format {
                input: input.to_owned(),
            });
        }
    };
    let position = if position.is_empty() {
        None
    } else {
        Some(
            position
                .parse::<Position>()
                .map_err(ParseEntryError::Position)?,
        )
    };
    let count = count.parse().map_err(|source| ParseEntryError::Count {
        count: count.to_owned(),
        source,
    })?;
    Ok(ManualEntry {
        player: player.to_owned(),
        position,
        count,
    })
}

pub(crate) fn run_record(arg: &RecordArg, app: &mut DirApp) -> anyhow::Result<()> {
    app.record_manual_entries(&arg.entries)?;
    println!("Recorded {} entries.", arg.entries.len());
    println!();
    print!("{}", SeasonStatsView(app.season_stats()));
    Ok(())
}

pub(crate) fn run_reset(arg: &ResetStatsArg, app: &mut DirApp) -> anyhow::Result<()> {
    let confirmed =
        arg.yes || util::confirm("Clear all season stats? This cannot be undone.")?;
    if app.reset_season_stats(confirmed)? {
        println!("Season stats cleared.");
    } else {
        println!("Season stats left unchanged.");
    }
    Ok(())
}
