use serde::{Deserialize, Serialize};

/// A roster entry: a unique name plus the pitcher-eligibility flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(rename = "isPitcher")]
    pub is_pitcher: bool,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_pitcher: false,
        }
    }

    #[must_use]
    pub fn pitcher(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_pitcher: true,
        }
    }
}
