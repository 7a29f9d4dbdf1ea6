//! Tournament, its Format, and TournamentError.

use crate::models::game::{GameMatch, MatchId};
use crate::models::sport::Sport;
use crate::models::team::{Slot, Team, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Why a reported score was rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScoreProblem {
    Negative(i64),
    TooLarge(i64),
    /// Equal scores in an elimination match leave no winner to advance.
    DrawInElimination,
}

impl std::fmt::Display for ScoreProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreProblem::Negative(s) => write!(f, "{s} is negative"),
            ScoreProblem::TooLarge(s) => write!(f, "{s} is too large"),
            ScoreProblem::DrawInElimination => write!(f, "elimination matches cannot end in a draw"),
        }
    }
}

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TournamentError {
    /// Team name is empty after trimming.
    #[error("Team name cannot be empty")]
    EmptyName,
    /// A team with this name already exists (names are unique, case-insensitive).
    #[error("A team named {0:?} already exists")]
    DuplicateName(String),
    /// BYE and TBD are placeholders, not teams.
    #[error("{0:?} is a reserved name")]
    ReservedName(String),
    #[error("Tournament name is required")]
    EmptyTournamentName,
    #[error("Need at least 2 teams, got {0}")]
    InsufficientParticipants(usize),
    #[error("Match {0} not found")]
    MatchNotFound(MatchId),
    #[error("Invalid score: {0}")]
    InvalidScore(ScoreProblem),
    /// One of the slots is still TBD, or the match is a bye.
    #[error("Match {0} cannot be played yet")]
    MatchNotPlayable(MatchId),
    #[error("Tournament {0} not found")]
    TournamentNotFound(TournamentId),
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// How the tournament is played.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Round-robin: every team meets every other team once.
    #[default]
    Groups,
    /// Single-elimination bracket.
    Elimination,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "groups" => Ok(Format::Groups),
            "elimination" => Ok(Format::Elimination),
            other => Err(format!("unknown format: {other} (expected groups or elimination)")),
        }
    }
}

/// Full tournament: teams, generated matches, and metadata.
///
/// Serializes as `{id, name, type, sport, teams, matches, createdAt}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    #[serde(rename = "type")]
    pub format: Format,
    #[serde(default)]
    pub sport: Sport,
    pub teams: Vec<Team>,
    pub matches: Vec<GameMatch>,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Look up a team by name (case-insensitive).
    pub fn team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.has_name(name))
    }

    pub fn get_match(&self, id: &str) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// The match in which `a` and `b` face each other, in either order.
    pub fn find_match_between(&self, a: TeamId, b: TeamId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| {
            (m.team1 == Slot::Team(a) && m.team2 == Slot::Team(b))
                || (m.team1 == Slot::Team(b) && m.team2 == Slot::Team(a))
        })
    }

    /// Display name for a slot: the team name, or BYE / TBD.
    pub fn slot_name(&self, slot: Slot) -> &str {
        match slot {
            Slot::Team(id) => self.team(id).map(|t| t.name.as_str()).unwrap_or("?"),
            Slot::Bye => "BYE",
            Slot::Tbd => "TBD",
        }
    }

    /// Highest round number (the final in a bracket). 0 if there are no matches.
    pub fn max_round(&self) -> u32 {
        self.matches.iter().map(|m| m.round).max().unwrap_or(0)
    }

    /// Matches grouped by round, each round ordered by position.
    pub fn matches_by_round(&self) -> BTreeMap<u32, Vec<&GameMatch>> {
        let mut rounds: BTreeMap<u32, Vec<&GameMatch>> = BTreeMap::new();
        for m in &self.matches {
            rounds.entry(m.round).or_default().push(m);
        }
        for matches in rounds.values_mut() {
            matches.sort_by_key(|m| m.position);
        }
        rounds
    }

    /// Every match has a result.
    pub fn is_completed(&self) -> bool {
        !self.matches.is_empty() && self.matches.iter().all(|m| m.completed)
    }
}
