//! Team (participant) and the slot a team occupies in a match.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in match slots and lookups).
pub type TeamId = Uuid;

/// Avatar colors handed out to new teams.
pub const AVATAR_PALETTE: [&str; 8] = [
    "red", "blue", "green", "yellow", "purple", "pink", "indigo", "teal",
];

/// Names reserved for the sentinel slots; no real team may use them.
pub const RESERVED_NAMES: [&str; 2] = ["BYE", "TBD"];

/// A team competing in the tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Visual tag for the UI; the engine never interprets it.
    pub avatar: String,
}

impl Team {
    /// Create a new team with a fresh id and a random avatar from [`AVATAR_PALETTE`].
    pub fn new<R: Rng + ?Sized>(name: impl Into<String>, rng: &mut R) -> Self {
        let avatar = AVATAR_PALETTE
            .choose(rng)
            .copied()
            .unwrap_or(AVATAR_PALETTE[0]);
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            avatar: avatar.to_string(),
        }
    }

    /// True if `name` equals this team's name, ignoring case.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// What occupies one side of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "teamId", rename_all = "snake_case")]
pub enum Slot {
    /// A registered team.
    Team(TeamId),
    /// Automatic win for the other side.
    Bye,
    /// Waiting for the winner of an earlier match.
    Tbd,
}

impl Slot {
    pub fn team_id(&self) -> Option<TeamId> {
        match self {
            Slot::Team(id) => Some(*id),
            Slot::Bye | Slot::Tbd => None,
        }
    }

    /// Bye and Tbd are placeholders, not participants.
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Slot::Team(_))
    }
}
