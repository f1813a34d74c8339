use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::InningAssignment;

use super::position::Position;

/// Lifetime play counts, keyed by player name and then by position.
///
/// The table is sparse: an absent entry reads as zero, and zero counts are never
/// stored. It grows through [`Self::commit_assignments`] and
/// [`Self::apply_manual_entries`] and shrinks only through [`Self::clear`].
///
/// # Example
///
/// ```
/// use dugout_engine::{Position, SeasonStats};
///
/// let mut stats = SeasonStats::new();
/// stats.increment("Sam", Position::Pitcher, 2);
///
/// assert_eq!(stats.count("Sam", Position::Pitcher), 2);
/// assert_eq!(stats.count("Sam", Position::Catcher), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonStats {
    players: BTreeMap<String, BTreeMap<Position, u32>>,
}

/// One operator-entered row: `count` innings played by `player` at `position`.
///
/// Rows mirror an entry form, so a row may be incomplete; validation happens in
/// [`SeasonStats::apply_manual_entries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualEntry {
    pub player: String,
    pub position: Option<Position>,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ManualEntryError {
    #[display("row {row}: no player selected")]
    MissingPlayer { row: usize },
    #[display("row {row}: no position selected")]
    MissingPosition { row: usize },
    #[display("row {row}: count must be a positive integer, got {count}")]
    InvalidCount { row: usize, count: i64 },
}

impl ManualEntry {
    #[must_use]
    pub fn new(player: impl Into<String>, position: Position, count: i64) -> Self {
        Self {
            player: player.into(),
            position: Some(position),
            count,
        }
    }

    /// Checks the row; `row` is the 1-based row number used in the error.
    fn validate(&self, row: usize) -> Result<(&str, Position, u32), ManualEntryError> {
        let player = self.player.trim();
        if player.is_empty() {
            return Err(ManualEntryError::MissingPlayer { row });
        }
        let position = self
            .position
            .ok_or(ManualEntryError::MissingPosition { row })?;
        let count = u32::try_from(self.count)
            .ok()
            .filter(|count| *count > 0)
            .ok_or(ManualEntryError::InvalidCount {
                row,
                count: self.count,
            })?;
        Ok((player, position, count))
    }
}

impl SeasonStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            players: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns how many innings `player` has played at `position` (0 if unrecorded).
    #[must_use]
    pub fn count(&self, player: &str, position: Position) -> u32 {
        self.players
            .get(player)
            .and_then(|counts| counts.get(&position))
            .copied()
            .unwrap_or(0)
    }

    /// Iterates over player names with recorded stats, in name order.
    pub fn players(&self) -> impl Iterator<Item = &str> + '_ {
        self.players.keys().map(String::as_str)
    }

    /// Returns the recorded positions of `player`, most played first.
    ///
    /// Ties keep canonical position order.
    #[must_use]
    pub fn positions_by_count(&self, player: &str) -> Vec<(Position, u32)> {
        let mut counts: Vec<_> = self
            .players
            .get(player)
            .into_iter()
            .flatten()
            .map(|(pos, count)| (*pos, *count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    /// Adds `by` plays; a zero increment leaves the table untouched.
    pub fn increment(&mut self, player: &str, position: Position, by: u32) {
        if by == 0 {
            return;
        }
        let count = self
            .players
            .entry(player.to_owned())
            .or_default()
            .entry(position)
            .or_insert(0);
        *count = count.saturating_add(by);
    }

    /// Folds a finished game into the table: one play per filled position per inning.
    pub fn commit_assignments(&mut self, assignments: &[InningAssignment]) {
        for inning in assignments {
            for (position, player) in inning.positions() {
                self.increment(player, position, 1);
            }
        }
    }

    /// Applies manually entered rows as one batch.
    ///
    /// Every row is validated before any is applied, so a single bad row leaves
    /// the table unchanged.
    pub fn apply_manual_entries(&mut self, entries: &[ManualEntry]) -> Result<(), ManualEntryError> {
        let validated = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| entry.validate(i + 1))
            .collect::<Result<Vec<_>, _>>()?;
        for (player, position, count) in validated {
            self.increment(player, position, count);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.players.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn inning(number: u32, fielded: &[(Position, &str)]) -> InningAssignment {
        let positions = fielded
            .iter()
            .map(|(pos, name)| (*pos, (*name).to_owned()))
            .collect::<BTreeMap<_, _>>();
        InningAssignment::new(number, positions, vec![])
    }

    #[test]
    fn test_absent_counts_read_as_zero() {
        let stats = SeasonStats::new();
        assert_eq!(stats.count("Nobody", Position::Catcher), 0);
        assert!(stats.is_empty());
    }

    #[test]
    fn test_commit_counts_innings_per_position() {
        let game = [
            inning(1, &[(Position::Pitcher, "Sam"), (Position::Catcher, "Ann")]),
            inning(2, &[(Position::Pitcher, "Sam"), (Position::LeftField, "Ann")]),
        ];
        let mut stats = SeasonStats::new();
        stats.commit_assignments(&game);
        assert_eq!(stats.count("Sam", Position::Pitcher), 2);
        assert_eq!(stats.count("Ann", Position::Catcher), 1);
        assert_eq!(stats.count("Ann", Position::LeftField), 1);
    }

    #[test]
    fn test_commit_twice_doubles_counts() {
        let game = [
            inning(1, &[(Position::Shortstop, "Bo"), (Position::RightField, "Cy")]),
            inning(2, &[(Position::Shortstop, "Cy"), (Position::RightField, "Bo")]),
            inning(3, &[(Position::Shortstop, "Bo")]),
        ];
        let mut once = SeasonStats::new();
        once.commit_assignments(&game);
        let mut twice = SeasonStats::new();
        twice.commit_assignments(&game);
        twice.commit_assignments(&game);

        for player in once.players() {
            for pos in Position::ALL {
                assert_eq!(twice.count(player, pos), once.count(player, pos) * 2);
            }
        }
        assert_eq!(twice.count("Bo", Position::Shortstop), 4);
    }

    #[test]
    fn test_positions_by_count_sorts_descending() {
        let mut stats = SeasonStats::new();
        stats.increment("Ann", Position::Catcher, 1);
        stats.increment("Ann", Position::LeftField, 3);
        stats.increment("Ann", Position::Pitcher, 1);
        assert_eq!(
            stats.positions_by_count("Ann"),
            [
                (Position::LeftField, 3),
                (Position::Pitcher, 1),
                (Position::Catcher, 1),
            ]
        );
        assert!(stats.positions_by_count("Bo").is_empty());
    }

    #[test]
    fn test_clear() {
        let mut stats = SeasonStats::new();
        stats.increment("Ann", Position::Catcher, 1);
        stats.clear();
        assert!(stats.is_empty());
    }

    mod manual_entry {
        use super::*;

        #[test]
        fn test_valid_rows_are_added() {
            let mut stats = SeasonStats::new();
            stats.increment("Ann", Position::Catcher, 1);
            stats
                .apply_manual_entries(&[
                    ManualEntry::new("Ann", Position::Catcher, 2),
                    ManualEntry::new("Bo", Position::CenterField, 1),
                ])
                .unwrap();
            assert_eq!(stats.count("Ann", Position::Catcher), 3);
            assert_eq!(stats.count("Bo", Position::CenterField), 1);
        }

        #[test]
        fn test_bad_row_rejects_whole_batch() {
            let mut stats = SeasonStats::new();
            let entries = [
                ManualEntry::new("Ann", Position::Catcher, 2),
                ManualEntry::new("Bo", Position::CenterField, 0),
            ];
            let err = stats.apply_manual_entries(&entries).unwrap_err();
            assert_eq!(err, ManualEntryError::InvalidCount { row: 2, count: 0 });
            assert!(stats.is_empty());
        }

        #[test]
        fn test_missing_selections() {
            let mut stats = SeasonStats::new();
            let no_player = ManualEntry::new("  ", Position::Pitcher, 1);
            assert_eq!(
                stats.apply_manual_entries(&[no_player]).unwrap_err(),
                ManualEntryError::MissingPlayer { row: 1 }
            );
            let no_position = ManualEntry {
                player: "Ann".to_owned(),
                position: None,
                count: 1,
            };
            assert_eq!(
                stats.apply_manual_entries(&[no_position]).unwrap_err(),
                ManualEntryError::MissingPosition { row: 1 }
            );
        }

        #[test]
        fn test_negative_count() {
            let mut stats = SeasonStats::new();
            let err = stats
                .apply_manual_entries(&[ManualEntry::new("Ann", Position::Pitcher, -3)])
                .unwrap_err();
            assert!(err.to_string().contains("-3"));
        }
    }
}
