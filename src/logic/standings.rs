//! Standings: ranking table for groups, podium for brackets.

use crate::config::ThirdPlacePolicy;
use crate::models::{
    Format, GameMatch, PodiumEntry, Slot, Standing, TeamId, Tournament, TournamentSummary,
};

/// Ranking table built from scratch out of the completed matches.
///
/// Only matches between two registered teams count. Sorted by points, then goal
/// difference, then goals scored; remaining ties keep team registration order.
pub fn compute_standings(tournament: &Tournament) -> Vec<Standing> {
    let mut table: Vec<Standing> = tournament.teams.iter().map(Standing::new).collect();

    for m in tournament.matches.iter().filter(|m| m.completed) {
        let (Slot::Team(id1), Slot::Team(id2), Some((score1, score2))) = (m.team1, m.team2, m.scores())
        else {
            continue;
        };
        let idx1 = table.iter().position(|s| s.team_id == id1);
        let idx2 = table.iter().position(|s| s.team_id == id2);
        if let (Some(idx1), Some(idx2)) = (idx1, idx2) {
            table[idx1].add_result(score1, score2);
            table[idx2].add_result(score2, score1);
        }
    }

    // sort_by is stable
    table.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
    });
    table
}

/// Podium of a bracket. Empty until the final is completed, and always empty
/// for groups, which are ranked by [`compute_standings`] instead.
///
/// There is no third-place match, so third place comes from the semifinal losers
/// according to `policy`. Byes never reach the podium.
pub fn compute_podium(tournament: &Tournament, policy: ThirdPlacePolicy) -> Vec<PodiumEntry> {
    if tournament.format != Format::Elimination {
        return Vec::new();
    }
    let max_round = tournament.max_round();
    let Some(final_match) = tournament
        .matches
        .iter()
        .find(|m| m.round == max_round && m.completed)
    else {
        return Vec::new();
    };

    let mut podium = Vec::new();
    if let Some(winner) = final_match.winner().and_then(|s| s.team_id()) {
        podium.push(entry(1, winner));
    }
    if let Some(runner_up) = final_match.loser().and_then(|s| s.team_id()) {
        podium.push(entry(2, runner_up));
    }

    let mut semifinals: Vec<&GameMatch> = tournament
        .matches
        .iter()
        .filter(|m| max_round > 1 && m.round == max_round - 1)
        .collect();
    semifinals.sort_by_key(|m| m.position);
    if semifinals.len() != 2 {
        return podium;
    }
    let losers = semifinals
        .iter()
        .filter(|m| m.completed)
        .filter_map(|m| m.loser().and_then(|s| s.team_id()));
    match policy {
        ThirdPlacePolicy::FirstSemifinalLoser => podium.extend(losers.take(1).map(|id| entry(3, id))),
        ThirdPlacePolicy::Shared => podium.extend(losers.map(|id| entry(3, id))),
    }
    podium
}

/// Headline numbers for a results page, rebuilt from the matches on each call.
///
/// Goal totals are only given for groups: bracket byes carry a synthetic 1-0.
pub fn compute_summary(tournament: &Tournament) -> TournamentSummary {
    let completed: Vec<(u32, u32)> =
        tournament.matches.iter().filter_map(GameMatch::scores).collect();
    let (total_goals, average_goals) = match tournament.format {
        Format::Groups => {
            let goals: u64 = completed
                .iter()
                .map(|&(s1, s2)| u64::from(s1) + u64::from(s2))
                .sum();
            let average = if completed.is_empty() {
                0.0
            } else {
                goals as f64 / completed.len() as f64
            };
            (Some(goals), Some(average))
        }
        Format::Elimination => (None, None),
    };
    TournamentSummary {
        total_matches: tournament.matches.len(),
        played_matches: completed.len(),
        teams: tournament.teams.len(),
        total_goals,
        average_goals,
    }
}

fn entry(position: u8, team_id: TeamId) -> PodiumEntry {
    PodiumEntry { position, team_id }
}

/// The tournament winner, once every match is played.
///
/// Groups: top of the standings. Elimination: winner of the final.
pub fn champion(tournament: &Tournament) -> Option<TeamId> {
    if !tournament.is_completed() {
        return None;
    }
    match tournament.format {
        Format::Groups => compute_standings(tournament).first().map(|s| s.team_id),
        Format::Elimination => compute_podium(tournament, ThirdPlacePolicy::default())
            .into_iter()
            .find(|e| e.position == 1)
            .map(|e| e.team_id),
    }
}
