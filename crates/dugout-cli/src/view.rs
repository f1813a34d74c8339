//! Plain-text rendering of application state.
//!
//! Each view borrows the data it renders and implements [`fmt::Display`], so commands
//! can print it directly or write it anywhere a formatter reaches.

use std::fmt;

use dugout_engine::{BattingOrder, InningAssignment, Roster, SeasonStats};

use crate::app::GameSession;

#[derive(Debug, Clone, Copy)]
pub struct RosterView<'a>(pub &'a Roster);

impl fmt::Display for RosterView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roster = self.0;
        if roster.is_empty() {
            return writeln!(f, "No players on the roster.");
        }
        writeln!(f, "Roster ({} players)", roster.len())?;
        for player in roster.players() {
            if player.is_pitcher {
                writeln!(f, "  {} (P)", player.name)?;
            } else {
                writeln!(f, "  {}", player.name)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BattingOrderView<'a>(pub &'a BattingOrder);

impl fmt::Display for BattingOrderView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self.0;
        writeln!(f, "Batting order")?;
        let upcoming = [
            ("Now batting:", order.current()),
            ("On deck:", order.on_deck()),
            ("In the hole:", order.in_the_hole()),
        ];
        for (label, batter) in upcoming {
            if let Some(batter) = batter {
                writeln!(f, "  {label:<13}{batter}")?;
            }
        }
        writeln!(f)?;
        for (i, batter) in order.iter().enumerate() {
            writeln!(f, "  {:>2}. {batter}", i + 1)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AssignmentsView<'a>(pub &'a [InningAssignment]);

impl fmt::Display for AssignmentsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, inning) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "Inning {}", inning.inning())?;
            for (position, player) in inning.positions() {
                writeln!(f, "  {position:<12} {player}")?;
            }
            if inning.bench().is_empty() {
                writeln!(f, "  Bench: (none)")?;
            } else {
                writeln!(f, "  Bench: {}", inning.bench().join(", "))?;
            }
        }
        Ok(())
    }
}

/// Lifetime counts per player, most played position first.
#[derive(Debug, Clone, Copy)]
pub struct SeasonStatsView<'a>(pub &'a SeasonStats);

impl fmt::Display for SeasonStatsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.0;
        if stats.is_empty() {
            return writeln!(f, "No stats saved yet. Save a game to see player history.");
        }
        writeln!(f, "Season stats")?;
        for player in stats.players() {
            let counts = stats
                .positions_by_count(player)
                .into_iter()
                .map(|(position, count)| format!("{position}: {count}"))
                .collect::<Vec<_>>();
            writeln!(f, "  {player}: {}", counts.join(" | "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GameView<'a>(pub &'a GameSession);

impl fmt::Display for GameView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let status = if session.is_committed() {
            "saved"
        } else {
            "not saved"
        };
        writeln!(
            f,
            "Game with {} players (seed {}, {status})",
            session.game_roster().len(),
            session.seed()
        )?;
        if let Some(order) = session.batting_order() {
            writeln!(f)?;
            write!(f, "{}", BattingOrderView(order))?;
        }
        writeln!(f)?;
        write!(f, "{}", AssignmentsView(session.assignments()))
    }
}

/// Everything at once: roster, current game (if any) and season stats.
#[derive(Debug, Clone, Copy)]
pub struct OverviewView<'a> {
    pub roster: &'a Roster,
    pub game: Option<&'a GameSession>,
    pub season_stats: &'a SeasonStats,
}

impl fmt::Display for OverviewView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", RosterView(self.roster))?;
        writeln!(f)?;
        match self.game {
            Some(game) => write!(f, "{}", GameView(game))?,
            None => writeln!(f, "No lineup generated.")?,
        }
        writeln!(f)?;
        write!(f, "{}", SeasonStatsView(self.season_stats))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use dugout_engine::{Player, Position};

    use super::*;

    #[test]
    fn test_roster_view() {
        let roster = Roster::from_players([Player::pitcher("Sam"), Player::new("Ann")]).unwrap();
        assert_eq!(
            RosterView(&roster).to_string(),
            "Roster (2 players)\n  Sam (P)\n  Ann\n"
        );
        assert_eq!(
            RosterView(&Roster::new()).to_string(),
            "No players on the roster.\n"
        );
    }

    #[test]
    fn test_batting_order_labels() {
        let order = BattingOrder::from_names(["Ann", "Bo", "Cy", "Di"]);
        let text = BattingOrderView(&order).to_string();
        assert_eq!(
            text,
            "Batting order\n  Now batting: Ann\n  On deck:     Bo\n  In the hole: Cy\n\n   1. Ann\n   2. Bo\n   3. Cy\n   4. Di\n"
        );
    }

    #[test]
    fn test_batting_order_labels_short_order() {
        let mut order = BattingOrder::from_names(["Ann", "Bo"]);
        order.advance();
        let text = BattingOrderView(&order).to_string();
        assert_eq!(
            text,
            "Batting order\n  Now batting: Bo\n  On deck:     Ann\n\n   1. Bo\n   2. Ann\n"
        );
    }

    #[test]
    fn test_assignments_view() {
        let positions = BTreeMap::from([
            (Position::Catcher, "Bo".to_owned()),
            (Position::Pitcher, "Sam".to_owned()),
        ]);
        let innings = [InningAssignment::new(1, positions, vec!["Ann".to_owned()])];
        assert_eq!(
            AssignmentsView(&innings).to_string(),
            "Inning 1\n  Pitcher      Sam\n  Catcher      Bo\n  Bench: Ann\n"
        );
    }

    #[test]
    fn test_season_stats_view() {
        let mut stats = SeasonStats::new();
        stats.increment("Sam", Position::Pitcher, 3);
        stats.increment("Sam", Position::Catcher, 1);
        stats.increment("Ann", Position::LeftField, 2);
        assert_eq!(
            SeasonStatsView(&stats).to_string(),
            "Season stats\n  Ann: Left Field: 2\n  Sam: Pitcher: 3 | Catcher: 1\n"
        );
    }

    #[test]
    fn test_empty_season_stats_view() {
        let text = SeasonStatsView(&SeasonStats::new()).to_string();
        assert!(text.starts_with("No stats saved yet."));
    }
}
