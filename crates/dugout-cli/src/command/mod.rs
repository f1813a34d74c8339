use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use crate::{app::App, store::DirStore, view::OverviewView};

use self::{
    backup::{ExportArg, ImportArg},
    game::GenerateArg,
    roster::RosterArg,
    stats::{RecordArg, ResetStatsArg},
};

mod backup;
mod game;
mod roster;
mod stats;

type DirApp = App<DirStore>;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Directory holding the roster, season stats and current game
    #[arg(long, global = true, env = "DUGOUT_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,
    /// What to do (defaults to `show`)
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// List or edit the team roster
    Roster(#[clap(flatten)] RosterArg),
    /// Generate a lineup for the players present today
    Generate(#[clap(flatten)] GenerateArg),
    /// Move the current batter to the end of the batting order
    NextBatter,
    /// Add the current lineup to the season stats
    SaveGame,
    /// Record season stats by hand
    Record(#[clap(flatten)] RecordArg),
    /// Clear all season stats
    ResetStats(#[clap(flatten)] ResetStatsArg),
    /// Export roster and season stats as CSV
    Export(#[clap(flatten)] ExportArg),
    /// Replace roster and season stats from a CSV export
    Import(#[clap(flatten)] ImportArg),
    /// Print the roster, current game and season stats
    Show,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let store = DirStore::open(&args.data_dir)?;
    let data_dir = store.dir().display().to_string();
    let mut app =
        App::load(store).with_context(|| format!("Failed to load data from {data_dir}"))?;

    match args.mode.unwrap_or(Mode::Show) {
        Mode::Roster(arg) => roster::run(&arg, &mut app)?,
        Mode::Generate(arg) => game::run_generate(&arg, &mut app)?,
        Mode::NextBatter => game::run_next_batter(&mut app)?,
        Mode::SaveGame => game::run_save(&mut app)?,
        Mode::Record(arg) => stats::run_record(&arg, &mut app)?,
        Mode::ResetStats(arg) => stats::run_reset(&arg, &mut app)?,
        Mode::Export(arg) => backup::run_export(&arg, &app)?,
        Mode::Import(arg) => backup::run_import(&arg, &mut app)?,
        Mode::Show => run_show(&app),
    }
    Ok(())
}

fn run_show(app: &DirApp) {
    print!(
        "{}",
        OverviewView {
            roster: app.roster(),
            game: app.game(),
            season_stats: app.season_stats(),
        }
    );
}
