use dugout_engine::LineupSeed;
use rand::Rng as _;

use crate::view::{BattingOrderView, GameView, SeasonStatsView};

use super::DirApp;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Names of the players present for this game
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    players: Vec<String>,
    /// Treat every roster player as present
    #[arg(long)]
    all: bool,
    /// Also shuffle a batting order
    #[arg(long)]
    batting_order: bool,
    /// Seed for reproducible lineups (32 hex characters)
    #[arg(long)]
    seed: Option<LineupSeed>,
}

pub(crate) fn run_generate(arg: &GenerateArg, app: &mut DirApp) -> anyhow::Result<()> {
    let game_roster = if arg.all {
        app.select_all()?
    } else {
        app.select_game_roster(&arg.players)?
    };
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let session = app.generate_lineup(game_roster, arg.batting_order, seed)?;
    print!("{}", GameView(session));
    Ok(())
}

pub(crate) fn run_next_batter(app: &mut DirApp) -> anyhow::Result<()> {
    let order = app.advance_batter()?;
    print!("{}", BattingOrderView(order));
    Ok(())
}

pub(crate) fn run_save(app: &mut DirApp) -> anyhow::Result<()> {
    app.commit_game()?;
    println!("Game saved.");
    println!();
    print!("{}", SeasonStatsView(app.season_stats()));
    Ok(())
}
