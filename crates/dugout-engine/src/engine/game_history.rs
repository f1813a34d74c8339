use std::collections::HashMap;

use crate::core::Position;

use super::InningAssignment;

/// Positions each player has taken so far in the current game, oldest first.
///
/// Created empty for every lineup generation and discarded afterwards.
#[derive(Debug, Clone, Default)]
pub struct PlayerGameHistory {
    positions: HashMap<String, Vec<Position>>,
}

impl PlayerGameHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn positions_of(&self, player: &str) -> &[Position] {
        self.positions.get(player).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn last_position(&self, player: &str) -> Option<Position> {
        self.positions_of(player).last().copied()
    }

    #[must_use]
    pub fn has_played(&self, player: &str, position: Position) -> bool {
        self.positions_of(player).contains(&position)
    }

    /// Appends every filled position of a finished inning.
    pub fn record_inning(&mut self, inning: &InningAssignment) {
        for (position, player) in inning.positions() {
            self.positions
                .entry(player.to_owned())
                .or_default()
                .push(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_innings_in_order() {
        let mut history = PlayerGameHistory::new();
        assert_eq!(history.last_position("Ann"), None);

        for (number, pos) in [(1, Position::Catcher), (2, Position::RightField)] {
            let positions = [(pos, "Ann".to_owned())].into_iter().collect();
            history.record_inning(&InningAssignment::new(number, positions, vec![]));
        }

        assert_eq!(
            history.positions_of("Ann"),
            [Position::Catcher, Position::RightField]
        );
        assert_eq!(history.last_position("Ann"), Some(Position::RightField));
        assert!(history.has_played("Ann", Position::Catcher));
        assert!(!history.has_played("Ann", Position::Pitcher));
        assert!(history.positions_of("Bo").is_empty());
    }
}
