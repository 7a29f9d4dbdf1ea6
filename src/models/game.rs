//! Match (game) between two slots, and the Side a result refers to.

use crate::models::team::Slot;
use serde::{Deserialize, Serialize};

/// Positional identifier of a match: `match-{i}-{j}` in groups, `match-r{round}-{position}` in brackets.
pub type MatchId = String;

/// One side of a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    One,
    Two,
}

impl Side {
    /// Slot one for even positions, slot two for odd ones.
    pub fn from_position(position: usize) -> Self {
        if position % 2 == 0 {
            Side::One
        } else {
            Side::Two
        }
    }

    pub fn other(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

/// A single match. `completed` is true exactly when both scores are set.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMatch {
    pub id: MatchId,
    pub team1: Slot,
    pub team2: Slot,
    /// None if not yet played.
    pub score1: Option<u32>,
    pub score2: Option<u32>,
    pub completed: bool,
    /// 1-based. Group matches are all round 1.
    pub round: u32,
    /// Index of this match within its round.
    pub position: usize,
    /// Bracket only: the match the winner advances to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_match_id: Option<MatchId>,
    /// Bracket only: which slot of `next_match_id` the winner fills.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_side: Option<Side>,
}

impl GameMatch {
    pub fn new(
        id: impl Into<MatchId>,
        team1: Slot,
        team2: Slot,
        round: u32,
        position: usize,
    ) -> Self {
        Self {
            id: id.into(),
            team1,
            team2,
            score1: None,
            score2: None,
            completed: false,
            round,
            position,
            next_match_id: None,
            next_side: None,
        }
    }

    pub fn slot(&self, side: Side) -> Slot {
        match side {
            Side::One => self.team1,
            Side::Two => self.team2,
        }
    }

    pub fn slot_mut(&mut self, side: Side) -> &mut Slot {
        match side {
            Side::One => &mut self.team1,
            Side::Two => &mut self.team2,
        }
    }

    /// Set both scores and mark the match completed.
    pub fn record(&mut self, score1: u32, score2: u32) {
        self.score1 = Some(score1);
        self.score2 = Some(score2);
        self.completed = true;
    }

    /// Both scores, if the match has been played.
    pub fn scores(&self) -> Option<(u32, u32)> {
        match (self.score1, self.score2) {
            (Some(s1), Some(s2)) if self.completed => Some((s1, s2)),
            _ => None,
        }
    }

    /// Side with the higher score; slot two on equal scores. None until completed.
    pub fn winning_side(&self) -> Option<Side> {
        self.scores()
            .map(|(s1, s2)| if s1 > s2 { Side::One } else { Side::Two })
    }

    pub fn winner(&self) -> Option<Slot> {
        self.winning_side().map(|side| self.slot(side))
    }

    pub fn loser(&self) -> Option<Slot> {
        self.winning_side().map(|side| self.slot(side.other()))
    }

    pub fn is_draw(&self) -> bool {
        matches!(self.scores(), Some((s1, s2)) if s1 == s2)
    }

    /// Both slots hold real teams.
    pub fn is_playable(&self) -> bool {
        !self.team1.is_sentinel() && !self.team2.is_sentinel()
    }

    /// Exactly one real team against a Bye. Returns the side of the real team.
    pub fn bye_side(&self) -> Option<Side> {
        match (self.team1, self.team2) {
            (Slot::Team(_), Slot::Bye) => Some(Side::One),
            (Slot::Bye, Slot::Team(_)) => Some(Side::Two),
            _ => None,
        }
    }
}
