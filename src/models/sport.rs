//! Sport catalog offered when creating a tournament.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Football,
    Basketball,
    Tennis,
    Volleyball,
    Fifa,
    Lol,
    Csgo,
    Fortnite,
    #[default]
    Custom,
}

impl Sport {
    pub const ALL: [Sport; 9] = [
        Sport::Football,
        Sport::Basketball,
        Sport::Tennis,
        Sport::Volleyball,
        Sport::Fifa,
        Sport::Lol,
        Sport::Csgo,
        Sport::Fortnite,
        Sport::Custom,
    ];

    /// Catalog id, as stored in the serialized tournament.
    pub fn id(self) -> &'static str {
        match self {
            Sport::Football => "football",
            Sport::Basketball => "basketball",
            Sport::Tennis => "tennis",
            Sport::Volleyball => "volleyball",
            Sport::Fifa => "fifa",
            Sport::Lol => "lol",
            Sport::Csgo => "csgo",
            Sport::Fortnite => "fortnite",
            Sport::Custom => "custom",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Sport::Football => "Football",
            Sport::Basketball => "Basketball",
            Sport::Tennis => "Tennis",
            Sport::Volleyball => "Volleyball",
            Sport::Fifa => "FIFA",
            Sport::Lol => "League of Legends",
            Sport::Csgo => "CS:GO",
            Sport::Fortnite => "Fortnite",
            Sport::Custom => "Custom",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Sport::Football => "⚽",
            Sport::Basketball => "🏀",
            Sport::Tennis => "🎾",
            Sport::Volleyball => "🏐",
            Sport::Fifa => "🎮",
            Sport::Lol => "🎯",
            Sport::Csgo => "🔫",
            Sport::Fortnite => "🛠️",
            Sport::Custom => "✨",
        }
    }
}

impl FromStr for Sport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Sport::ALL
            .into_iter()
            .find(|sport| sport.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown sport: {s}"))
    }
}
