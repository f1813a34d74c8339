//! Application state and the operations a front end invokes on it.
//!
//! [`App`] owns the roster, the season stats and the current game session, and
//! persists each of them through a [`KeyValueStore`]. Every mutating operation works
//! on a copy of the affected value, writes the copy, and only then replaces the
//! in-memory value, so a failed write leaves both the store and the app unchanged.
//!
//! Operations touching two keys (game commit, import) write one key, then the
//! other; if the second write fails, the first key is written back to its
//! previous value before the error is returned.

use std::io;

use anyhow::Context as _;
use dugout_engine::{
    BattingOrder, GameRoster, InningAssignment, LineupSeed, ManualEntry, Player, Roster,
    RosterError, SeasonStats, StoredPlayer,
};
use dugout_evaluator::game_assigner::GameAssigner;
use serde::{Deserialize, Serialize};

use crate::{
    interchange,
    store::{KeyValueStore, read_json, write_json},
};

pub const ROSTER_KEY: &str = "roster";
pub const SEASON_STATS_KEY: &str = "seasonStats";
pub const CURRENT_GAME_KEY: &str = "currentGame";

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    #[display("no lineup has been generated yet")]
    NoActiveGame,
    #[display("the current game has no batting order")]
    NoBattingOrder,
    #[display("game already saved")]
    AlreadyCommitted,
}

/// A generated lineup and whether it has been folded into the season stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    seed: LineupSeed,
    game_roster: GameRoster,
    batting_order: Option<BattingOrder>,
    assignments: Vec<InningAssignment>,
    committed: bool,
}

impl GameSession {
    #[must_use]
    pub fn seed(&self) -> LineupSeed {
        self.seed
    }

    #[must_use]
    pub fn game_roster(&self) -> &GameRoster {
        &self.game_roster
    }

    #[must_use]
    pub fn batting_order(&self) -> Option<&BattingOrder> {
        self.batting_order.as_ref()
    }

    #[must_use]
    pub fn assignments(&self) -> &[InningAssignment] {
        &self.assignments
    }

    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.committed
    }
}

#[derive(Debug)]
pub struct App<S> {
    store: S,
    roster: Roster,
    season_stats: SeasonStats,
    game: Option<GameSession>,
    assigner: GameAssigner<'static>,
}

impl<S> App<S>
where
    S: KeyValueStore,
{
    /// Loads persisted state, upgrading a legacy roster of bare names in place.
    pub fn load(mut store: S) -> anyhow::Result<Self> {
        tracing::debug!(keys = ?store.list()?, "Opened store");
        let stored: Option<Vec<StoredPlayer>> = read_json(&store, ROSTER_KEY)?;
        let (roster, migrated) = Roster::from_stored(stored.unwrap_or_default());
        if migrated {
            tracing::info!(players = roster.len(), "Upgraded legacy roster records");
            write_json(&mut store, ROSTER_KEY, &roster)?;
        }
        let season_stats = read_json(&store, SEASON_STATS_KEY)?.unwrap_or_default();
        let game = read_json(&store, CURRENT_GAME_KEY)?;
        Ok(Self {
            store,
            roster,
            season_stats,
            game,
            assigner: GameAssigner::default(),
        })
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn season_stats(&self) -> &SeasonStats {
        &self.season_stats
    }

    #[must_use]
    pub fn game(&self) -> Option<&GameSession> {
        self.game.as_ref()
    }

    pub fn add_player(&mut self, name: &str) -> anyhow::Result<Player> {
        let mut roster = self.roster.clone();
        let player = roster.add(name)?.clone();
        self.save_roster(roster)?;
        Ok(player)
    }

    /// Removes a player from the roster. Their season stats are kept.
    pub fn remove_player(&mut self, name: &str) -> anyhow::Result<Player> {
        let mut roster = self.roster.clone();
        let player = roster.remove(name)?;
        self.save_roster(roster)?;
        Ok(player)
    }

    /// Flips the pitcher flag and returns the new value.
    pub fn toggle_pitcher(&mut self, name: &str) -> anyhow::Result<bool> {
        let mut roster = self.roster.clone();
        let is_pitcher = roster.toggle_pitcher(name)?;
        self.save_roster(roster)?;
        Ok(is_pitcher)
    }

    /// Builds the game roster from the named players, all of whom must be on the roster.
    pub fn select_game_roster<I, N>(&self, names: I) -> anyhow::Result<GameRoster>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let mut present = vec![];
        for name in names {
            let name = name.as_ref().trim();
            if !self.roster.contains(name) {
                return Err(RosterError::UnknownPlayer {
                    name: name.to_owned(),
                }
                .into());
            }
            present.push(name.to_owned());
        }
        Ok(GameRoster::new(present)?)
    }

    pub fn select_all(&self) -> anyhow::Result<GameRoster> {
        self.select_game_roster(self.roster.names())
    }

    /// Generates a new lineup, replacing any previous game session.
    ///
    /// The batting order (when requested) and the inning assignments draw from the
    /// same generator, so a seed reproduces the whole session.
    pub fn generate_lineup(
        &mut self,
        game_roster: GameRoster,
        with_batting_order: bool,
        seed: LineupSeed,
    ) -> anyhow::Result<&GameSession> {
        let mut rng = seed.rng();
        let batting_order =
            with_batting_order.then(|| BattingOrder::generate(&game_roster, &mut rng));
        let assignments = self.assigner.generate_assignments(
            &game_roster,
            &self.roster,
            &self.season_stats,
            &mut rng,
        );
        tracing::debug!(%seed, players = game_roster.len(), "Generated lineup");

        let session = GameSession {
            seed,
            game_roster,
            batting_order,
            assignments,
            committed: false,
        };
        write_json(&mut self.store, CURRENT_GAME_KEY, &session)?;
        Ok(self.game.insert(session))
    }

    /// Moves the current batter to the back of the batting order.
    pub fn advance_batter(&mut self) -> anyhow::Result<&BattingOrder> {
        let mut session = self.game.clone().ok_or(GameError::NoActiveGame)?;
        session
            .batting_order
            .as_mut()
            .ok_or(GameError::NoBattingOrder)?
            .advance();
        let session = self.save_game(session)?;
        session
            .batting_order
            .as_ref()
            .ok_or_else(|| GameError::NoBattingOrder.into())
    }

    /// Adds the current game's assignments to the season stats.
    pub fn commit_game(&mut self) -> anyhow::Result<()> {
        let mut session = self.game.clone().ok_or(GameError::NoActiveGame)?;
        if session.committed {
            return Err(GameError::AlreadyCommitted.into());
        }
        let previous_stats = self.season_stats.clone();
        let mut stats = previous_stats.clone();
        stats.commit_assignments(&session.assignments);
        self.save_stats(stats)?;

        session.committed = true;
        if let Err(e) = self.save_game(session) {
            self.restore_stats(previous_stats);
            return Err(e);
        }
        tracing::info!("Saved game to season stats");
        Ok(())
    }

    /// Applies manually entered stats as one batch; any bad row rejects them all.
    pub fn record_manual_entries(&mut self, entries: &[ManualEntry]) -> anyhow::Result<()> {
        for entry in entries {
            let name = entry.player.trim();
            if !name.is_empty() && !self.roster.contains(name) {
                return Err(RosterError::UnknownPlayer {
                    name: name.to_owned(),
                }
                .into());
            }
        }
        let mut stats = self.season_stats.clone();
        stats.apply_manual_entries(entries)?;
        self.save_stats(stats)?;
        tracing::info!(rows = entries.len(), "Recorded manual stats");
        Ok(())
    }

    /// Clears all season stats. Returns `false` without touching anything unless
    /// `confirmed`.
    pub fn reset_season_stats(&mut self, confirmed: bool) -> anyhow::Result<bool> {
        if !confirmed {
            return Ok(false);
        }
        self.save_stats(SeasonStats::new())?;
        tracing::info!("Reset season stats");
        Ok(true)
    }

    pub fn export_csv<W>(&self, writer: W) -> anyhow::Result<()>
    where
        W: io::Write,
    {
        interchange::write_csv(&self.roster, &self.season_stats, writer)
            .context("Failed to write CSV")
    }

    /// Replaces the roster and season stats with the contents of an export.
    ///
    /// The input is fully parsed before anything is written. Returns `false` without
    /// touching anything unless `confirmed`.
    pub fn import_csv<R>(&mut self, reader: R, confirmed: bool) -> anyhow::Result<bool>
    where
        R: io::Read,
    {
        let (roster, stats) = interchange::read_csv(reader).context("Failed to parse CSV")?;
        if !confirmed {
            return Ok(false);
        }
        let players = roster.len();
        let previous_roster = self.roster.clone();
        self.save_roster(roster)?;
        if let Err(e) = self.save_stats(stats) {
            self.restore_roster(previous_roster);
            return Err(e);
        }
        tracing::info!(players, "Imported roster and season stats");
        Ok(true)
    }

    fn save_roster(&mut self, roster: Roster) -> anyhow::Result<()> {
        write_json(&mut self.store, ROSTER_KEY, &roster)?;
        self.roster = roster;
        Ok(())
    }

    fn save_stats(&mut self, stats: SeasonStats) -> anyhow::Result<()> {
        write_json(&mut self.store, SEASON_STATS_KEY, &stats)?;
        self.season_stats = stats;
        Ok(())
    }

    fn save_game(&mut self, session: GameSession) -> anyhow::Result<&GameSession> {
        write_json(&mut self.store, CURRENT_GAME_KEY, &session)?;
        Ok(self.game.insert(session))
    }

    /// Writes back the roster after a later write of the same operation failed.
    fn restore_roster(&mut self, previous: Roster) {
        if let Err(e) = write_json(&mut self.store, ROSTER_KEY, &previous) {
            tracing::error!(error = %e, "Failed to restore roster");
        }
        self.roster = previous;
    }

    /// Writes back the season stats after a later write of the same operation failed.
    fn restore_stats(&mut self, previous: SeasonStats) {
        if let Err(e) = write_json(&mut self.store, SEASON_STATS_KEY, &previous) {
            tracing::error!(error = %e, "Failed to restore season stats");
        }
        self.season_stats = previous;
    }
}

#[cfg(test)]
impl<S> App<S> {
    fn store(&self) -> &S {
        &self.store
    }

    fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
