use serde::{Deserialize, Serialize};

use super::player::Player;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RosterError {
    #[display("player name must not be empty")]
    EmptyName,
    #[display("player '{name}' is already on the roster")]
    DuplicateName { name: String },
    #[display("player '{name}' is not on the roster")]
    UnknownPlayer { name: String },
}

/// Ordered list of players with unique names.
///
/// Removing a player does not touch [`SeasonStats`](super::SeasonStats); stats keyed
/// by a removed name stay behind as orphans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

/// A roster element as it may appear in persisted data.
///
/// Early versions stored the roster as bare names; those load as non-pitchers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StoredPlayer {
    Legacy(String),
    Current(Player),
}

impl Roster {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            players: Vec::new(),
        }
    }

    /// Builds a roster from complete player records, rejecting empty or repeated names.
    pub fn from_players<I>(players: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = Player>,
    {
        let mut roster = Self::new();
        for player in players {
            roster.insert(player)?;
        }
        Ok(roster)
    }

    /// Upgrades persisted records to a roster.
    ///
    /// Returns the roster and whether any legacy record was upgraded, in which
    /// case the caller should write the structured form back. Blank and
    /// repeated names are dropped rather than failing the load.
    #[must_use]
    pub fn from_stored(records: Vec<StoredPlayer>) -> (Self, bool) {
        let mut roster = Self::new();
        let mut migrated = false;
        for record in records {
            let player = match record {
                StoredPlayer::Legacy(name) => {
                    migrated = true;
                    Player::new(name)
                }
                StoredPlayer::Current(player) => player,
            };
            // Dropped records count as a change that must be rewritten.
            if roster.insert(player).is_err() {
                migrated = true;
            }
        }
        (roster, migrated)
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.players.iter().map(|p| p.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns whether `name` is on the roster and may pitch.
    #[must_use]
    pub fn is_pitcher(&self, name: &str) -> bool {
        self.get(name).is_some_and(|p| p.is_pitcher)
    }

    /// Adds a non-pitcher with the given (trimmed) name.
    pub fn add(&mut self, name: &str) -> Result<&Player, RosterError> {
        self.insert(Player::new(name.trim()))?;
        Ok(&self.players[self.players.len() - 1])
    }

    pub fn remove(&mut self, name: &str) -> Result<Player, RosterError> {
        let index = self.index_of(name)?;
        Ok(self.players.remove(index))
    }

    /// Flips the pitcher flag and returns the new value.
    pub fn toggle_pitcher(&mut self, name: &str) -> Result<bool, RosterError> {
        let index = self.index_of(name)?;
        let player = &mut self.players[index];
        player.is_pitcher = !player.is_pitcher;
        Ok(player.is_pitcher)
    }

    /// Appends a complete player record, rejecting an empty or repeated name.
    pub fn insert(&mut self, player: Player) -> Result<(), RosterError> {
        if player.name.trim().is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.contains(&player.name) {
            return Err(RosterError::DuplicateName { name: player.name });
        }
        self.players.push(player);
        Ok(())
    }

    fn index_of(&self, name: &str) -> Result<usize, RosterError> {
        self.players
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| RosterError::UnknownPlayer {
                name: name.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_rejects_duplicates() {
        let mut roster = Roster::new();
        assert_eq!(roster.add("  Alex ").unwrap().name, "Alex");
        assert_eq!(
            roster.add("Alex").unwrap_err(),
            RosterError::DuplicateName {
                name: "Alex".to_owned()
            }
        );
        assert_eq!(roster.add("   ").unwrap_err(), RosterError::EmptyName);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_new_players_are_not_pitchers() {
        let mut roster = Roster::new();
        roster.add("Blair").unwrap();
        assert!(!roster.is_pitcher("Blair"));
        assert!(!roster.is_pitcher("Nobody"));
    }

    #[test]
    fn test_toggle_pitcher() {
        let mut roster = Roster::new();
        roster.add("Casey").unwrap();
        assert!(roster.toggle_pitcher("Casey").unwrap());
        assert!(roster.is_pitcher("Casey"));
        assert!(!roster.toggle_pitcher("Casey").unwrap());
        assert!(matches!(
            roster.toggle_pitcher("Drew"),
            Err(RosterError::UnknownPlayer { .. })
        ));
    }

    #[test]
    fn test_insert_keeps_pitcher_flag() {
        let mut roster = Roster::new();
        roster.insert(Player::pitcher("Sam")).unwrap();
        assert!(roster.is_pitcher("Sam"));
        assert_eq!(
            roster.insert(Player::new("Sam")).unwrap_err(),
            RosterError::DuplicateName {
                name: "Sam".to_owned()
            }
        );
        assert_eq!(
            roster.insert(Player::new("")).unwrap_err(),
            RosterError::EmptyName
        );
        assert!(roster.is_pitcher("Sam"));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut roster = Roster::from_players(["A", "B", "C"].map(Player::new)).unwrap();
        let removed = roster.remove("B").unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(roster.names().collect::<Vec<_>>(), ["A", "C"]);
        assert!(roster.remove("B").is_err());
    }

    mod stored_records {
        use super::*;

        #[test]
        fn test_legacy_names_become_non_pitchers() {
            let records: Vec<StoredPlayer> = serde_json::from_str(r#"["Ann", "Bo"]"#).unwrap();
            let (roster, migrated) = Roster::from_stored(records);
            assert!(migrated);
            assert_eq!(
                roster.players(),
                [Player::new("Ann"), Player::new("Bo")]
            );
        }

        #[test]
        fn test_structured_records_are_not_migrated() {
            let records: Vec<StoredPlayer> =
                serde_json::from_str(r#"[{"name":"Ann","isPitcher":true}]"#).unwrap();
            let (roster, migrated) = Roster::from_stored(records);
            assert!(!migrated);
            assert!(roster.is_pitcher("Ann"));
        }

        #[test]
        fn test_roster_serializes_as_plain_array() {
            let roster = Roster::from_players([Player::pitcher("Sam")]).unwrap();
            let json = serde_json::to_string(&roster).unwrap();
            assert_eq!(json, r#"[{"name":"Sam","isPitcher":true}]"#);
        }
    }
}
