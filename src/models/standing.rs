//! Standing (one row of the ranking table), PodiumEntry and TournamentSummary.

use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};

/// Derived statistics for one team. Never stored; rebuilt from the matches on each request.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub team_id: TeamId,
    pub name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl Standing {
    /// Empty row for `team`.
    pub fn new(team: &Team) -> Self {
        Self {
            team_id: team.id,
            name: team.name.clone(),
            ..Self::default()
        }
    }

    /// Record one played match with the team's own score and the opponent's.
    pub fn add_result(&mut self, own: u32, opponent: u32) {
        self.played += 1;
        self.goals_for += own;
        self.goals_against += opponent;
        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);
        if own > opponent {
            self.wins += 1;
            self.points += 3;
        } else if own < opponent {
            self.losses += 1;
        } else {
            self.draws += 1;
            self.points += 1;
        }
    }
}

/// A podium place: 1 = winner, 2 = runner-up, 3 = third.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodiumEntry {
    pub position: u8,
    pub team_id: TeamId,
}

/// Counts shown on a results page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSummary {
    pub total_matches: usize,
    pub played_matches: usize,
    pub teams: usize,
    /// Groups only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_goals: Option<u64>,
    /// Goals per played match, 0.0 before any result. Groups only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_goals: Option<f64>,
}
