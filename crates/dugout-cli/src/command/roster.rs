use clap::Subcommand;

use crate::view::RosterView;

use super::DirApp;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RosterArg {
    #[command(subcommand)]
    action: Option<RosterAction>,
}

#[derive(Debug, Clone, Subcommand)]
enum RosterAction {
    /// Print the roster
    List,
    /// Add players (as non-pitchers)
    Add {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Remove a player; their season stats are kept
    Remove { name: String },
    /// Allow or disallow a player to pitch
    TogglePitcher { name: String },
}

pub(crate) fn run(arg: &RosterArg, app: &mut DirApp) -> anyhow::Result<()> {
    match arg.action.as_ref().unwrap_or(&RosterAction::List) {
        RosterAction::List => print!("{}", RosterView(app.roster())),
        RosterAction::Add { names } => {
            for name in names {
                let player = app.add_player(name)?;
                println!("Added {}", player.name);
            }
        }
        RosterAction::Remove { name } => {
            let player = app.remove_player(name)?;
            println!("Removed {}", player.name);
        }
        RosterAction::TogglePitcher { name } => {
            if app.toggle_pitcher(name)? {
                println!("{name} can now pitch");
            } else {
                println!("{name} can no longer pitch");
            }
        }
    }
    Ok(())
}
