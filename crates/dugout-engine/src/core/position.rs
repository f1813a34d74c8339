use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the nine defensive positions of a softball field.
///
/// Declaration order is the canonical enumeration order: it fixes the column
/// order of the bulk interchange format and the order in which the assignment
/// engine enumerates open positions.
///
/// Positions serialize as their display name (e.g. `"1st Base"`), which is the
/// form used by persisted season stats.
///
/// # Example
///
/// ```
/// use dugout_engine::{Position, PositionGroup};
///
/// let pos: Position = "ss".parse().unwrap();
/// assert_eq!(pos, Position::Shortstop);
/// assert_eq!(pos.group(), PositionGroup::Infield);
/// assert_eq!(Position::LeftField.to_string(), "Left Field");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Position {
    Pitcher = 0,
    Catcher = 1,
    FirstBase = 2,
    SecondBase = 3,
    ThirdBase = 4,
    Shortstop = 5,
    LeftField = 6,
    CenterField = 7,
    RightField = 8,
}

/// The two disjoint partitions of [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum PositionGroup {
    #[display("IF")]
    Infield,
    #[display("OF")]
    Outfield,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown position: '{input}'")]
pub struct ParsePositionError {
    input: String,
}

impl Position {
    /// Number of positions (9).
    pub const LEN: usize = 9;

    /// All positions in canonical order.
    pub const ALL: [Position; Self::LEN] = [
        Position::Pitcher,
        Position::Catcher,
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::Shortstop,
        Position::LeftField,
        Position::CenterField,
        Position::RightField,
    ];

    #[must_use]
    pub const fn group(self) -> PositionGroup {
        match self {
            Position::Pitcher
            | Position::Catcher
            | Position::FirstBase
            | Position::SecondBase
            | Position::ThirdBase
            | Position::Shortstop => PositionGroup::Infield,
            Position::LeftField | Position::CenterField | Position::RightField => {
                PositionGroup::Outfield
            }
        }
    }

    /// Returns the display name, e.g. `"2nd Base"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Position::Pitcher => "Pitcher",
            Position::Catcher => "Catcher",
            Position::FirstBase => "1st Base",
            Position::SecondBase => "2nd Base",
            Position::ThirdBase => "3rd Base",
            Position::Shortstop => "Shortstop",
            Position::LeftField => "Left Field",
            Position::CenterField => "Center Field",
            Position::RightField => "Right Field",
        }
    }

    /// Returns the scorebook abbreviation, e.g. `"2B"`.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Position::Pitcher => "P",
            Position::Catcher => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::Shortstop => "SS",
            Position::LeftField => "LF",
            Position::CenterField => "CF",
            Position::RightField => "RF",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Accepts either the display name or the abbreviation, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Position::ALL
            .into_iter()
            .find(|pos| {
                pos.name().eq_ignore_ascii_case(trimmed)
                    || pos.abbreviation().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ParsePositionError {
                input: s.to_owned(),
            })
    }
}

impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_groups_partition_all_positions() {
        let infield = Position::ALL
            .iter()
            .filter(|p| p.group().is_infield())
            .count();
        let outfield = Position::ALL
            .iter()
            .filter(|p| p.group().is_outfield())
            .count();
        assert_eq!(infield, 6);
        assert_eq!(outfield, 3);
    }

    #[test]
    fn test_index_matches_canonical_order() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }

    #[test]
    fn test_parse_name_and_abbreviation() {
        for pos in Position::ALL {
            assert_eq!(pos.name().parse::<Position>().unwrap(), pos);
            assert_eq!(pos.abbreviation().parse::<Position>().unwrap(), pos);
            assert_eq!(
                pos.name().to_lowercase().parse::<Position>().unwrap(),
                pos
            );
        }
        assert_eq!(
            "  center field ".parse::<Position>().unwrap(),
            Position::CenterField
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Designated Hitter".parse::<Position>().unwrap_err();
        assert!(err.to_string().contains("Designated Hitter"));
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn test_serialize_as_display_name() {
        let json = serde_json::to_string(&Position::FirstBase).unwrap();
        assert_eq!(json, "\"1st Base\"");
        let pos: Position = serde_json::from_str("\"Right Field\"").unwrap();
        assert_eq!(pos, Position::RightField);
    }

    #[test]
    fn test_map_keys_use_display_name() {
        let mut counts = BTreeMap::new();
        counts.insert(Position::ThirdBase, 2);
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"3rd Base":2}"#);
        let back: BTreeMap<Position, u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, counts);
    }
}
