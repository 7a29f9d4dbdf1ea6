//! Result reporting: record a score, then advance the winner through the bracket.

use crate::config::EngineConfig;
use crate::models::{Format, GameMatch, ScoreProblem, Side, Tournament, TournamentError};

/// Report a result with the default [`EngineConfig`].
pub fn report_result(
    tournament: &Tournament,
    match_id: &str,
    score1: i64,
    score2: i64,
) -> Result<Tournament, TournamentError> {
    report_result_with(tournament, match_id, score1, score2, &EngineConfig::default())
}

/// Record `score1`-`score2` for `match_id` and return the updated tournament.
///
/// Reporting an already completed match overwrites it; the winner is written again
/// into the next match, so corrections reach the immediate successor. In a bracket,
/// pending byes are then resolved. On error the input is left untouched.
pub fn report_result_with(
    tournament: &Tournament,
    match_id: &str,
    score1: i64,
    score2: i64,
    config: &EngineConfig,
) -> Result<Tournament, TournamentError> {
    let m = tournament
        .get_match(match_id)
        .ok_or_else(|| TournamentError::MatchNotFound(match_id.to_string()))?;
    let score1 = validate_score(score1)?;
    let score2 = validate_score(score2)?;
    if !m.is_playable() {
        return Err(TournamentError::MatchNotPlayable(m.id.clone()));
    }
    if tournament.format == Format::Elimination
        && score1 == score2
        && !config.allow_elimination_draws
    {
        return Err(TournamentError::InvalidScore(ScoreProblem::DrawInElimination));
    }

    let mut updated = tournament.clone();
    apply_result(&mut updated.matches, match_id, score1, score2)?;
    log::debug!(
        "Tournament {}: {} {} - {} {}",
        updated.id,
        updated.slot_name(m.team1),
        score1,
        score2,
        updated.slot_name(m.team2)
    );
    if updated.format == Format::Elimination {
        resolve_byes(&mut updated.matches);
    }
    Ok(updated)
}

/// Scores must be non-negative and fit in a `u32`.
pub fn validate_score(score: i64) -> Result<u32, TournamentError> {
    if score < 0 {
        return Err(TournamentError::InvalidScore(ScoreProblem::Negative(score)));
    }
    u32::try_from(score).map_err(|_| TournamentError::InvalidScore(ScoreProblem::TooLarge(score)))
}

/// Set the scores of one match, mark it completed, and propagate its winner.
pub fn apply_result(
    matches: &mut [GameMatch],
    match_id: &str,
    score1: u32,
    score2: u32,
) -> Result<(), TournamentError> {
    let idx = matches
        .iter()
        .position(|m| m.id == match_id)
        .ok_or_else(|| TournamentError::MatchNotFound(match_id.to_string()))?;
    matches[idx].record(score1, score2);
    propagate_winner(matches, idx);
    Ok(())
}

/// Write the winner of `matches[idx]` into its successor's slot.
/// Only the immediate successor is touched. A final (no successor) is a no-op.
fn propagate_winner(matches: &mut [GameMatch], idx: usize) {
    let m = &matches[idx];
    let (Some(next_id), Some(side), Some(winner)) =
        (m.next_match_id.clone(), m.next_side, m.winner())
    else {
        return;
    };
    if let Some(next) = matches.iter_mut().find(|n| n.id == next_id) {
        *next.slot_mut(side) = winner;
    }
}

/// Synthetic result for a bye: the real team wins 1-0.
fn bye_scores(team_side: Side) -> (u32, u32) {
    match team_side {
        Side::One => (1, 0),
        Side::Two => (0, 1),
    }
}

/// A bye match still needs (re)resolving if it lacks the synthetic result or
/// its successor does not hold the advancing team.
fn needs_bye_resolution(matches: &[GameMatch], m: &GameMatch) -> bool {
    let Some(side) = m.bye_side() else {
        return false;
    };
    let expected = bye_scores(side);
    if m.scores() != Some(expected) {
        return true;
    }
    match (&m.next_match_id, m.next_side) {
        (Some(next_id), Some(next_side)) => matches
            .iter()
            .find(|n| &n.id == next_id)
            .is_some_and(|next| next.slot(next_side) != m.slot(side)),
        _ => false,
    }
}

fn next_pending_bye(matches: &[GameMatch]) -> Option<usize> {
    matches.iter().position(|m| needs_bye_resolution(matches, m))
}

/// Complete every match with one real team against a Bye, until none is left.
/// Returns how many bye results were applied.
pub fn resolve_byes(matches: &mut [GameMatch]) -> usize {
    let mut resolved = 0;
    while let Some(idx) = next_pending_bye(matches) {
        let Some(side) = matches[idx].bye_side() else {
            break;
        };
        let (score1, score2) = bye_scores(side);
        matches[idx].record(score1, score2);
        propagate_winner(matches, idx);
        log::debug!("Resolved bye in {}", matches[idx].id);
        resolved += 1;
    }
    resolved
}
