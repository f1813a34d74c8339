use std::collections::VecDeque;

use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use super::GameRoster;

/// Cyclic batting order; the front element is at bat.
///
/// # Example
///
/// ```
/// use dugout_engine::BattingOrder;
///
/// let mut order = BattingOrder::from_names(["Ann", "Bo", "Cy"]);
/// order.advance();
///
/// assert_eq!(order.current(), Some("Bo"));
/// assert_eq!(order.on_deck(), Some("Cy"));
/// assert_eq!(order.in_the_hole(), Some("Ann"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattingOrder {
    batters: VecDeque<String>,
}

impl BattingOrder {
    /// Shuffles every present player into a new order.
    ///
    /// Independent of the per-inning field selection.
    pub fn generate<R>(roster: &GameRoster, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut batters = roster.players().to_vec();
        batters.shuffle(rng);
        Self {
            batters: batters.into(),
        }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            batters: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Sends the current batter to the back of the order. No-op when empty.
    pub fn advance(&mut self) {
        if let Some(batter) = self.batters.pop_front() {
            self.batters.push_back(batter);
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.get(0)
    }

    #[must_use]
    pub fn on_deck(&self) -> Option<&str> {
        self.get(1)
    }

    #[must_use]
    pub fn in_the_hole(&self) -> Option<&str> {
        self.get(2)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.batters.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.batters.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.batters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batters.is_empty()
    }
}
