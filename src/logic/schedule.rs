//! Schedule generation: round-robin groups and single-elimination brackets.

use crate::models::{Format, GameMatch, Side, Slot, Team, TournamentError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Generate every match of the tournament for `teams` in `format`.
///
/// `rng` only shuffles group matches; brackets pair teams in the given order.
pub fn generate_schedule<R: Rng + ?Sized>(
    teams: &[Team],
    format: Format,
    rng: &mut R,
) -> Result<Vec<GameMatch>, TournamentError> {
    if teams.len() < 2 {
        return Err(TournamentError::InsufficientParticipants(teams.len()));
    }
    let matches = match format {
        Format::Groups => generate_group_matches(teams, rng),
        Format::Elimination => generate_bracket(teams),
    };
    log::debug!(
        "Generated {} {:?} matches for {} teams",
        matches.len(),
        format,
        teams.len()
    );
    Ok(matches)
}

/// Round-robin: every unordered pair once, all in round 1.
///
/// 1. Build pairs `(i, j)` with `i < j`, id `match-{i}-{j}`.
/// 2. Shuffle with `rng`.
/// 3. Reorder with [`space_matches`] so teams rarely play back to back.
pub fn generate_group_matches<R: Rng + ?Sized>(teams: &[Team], rng: &mut R) -> Vec<GameMatch> {
    let n = teams.len();
    let mut matches = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            matches.push(GameMatch::new(
                format!("match-{i}-{j}"),
                Slot::Team(teams[i].id),
                Slot::Team(teams[j].id),
                1,
                0,
            ));
        }
    }
    matches.shuffle(rng);

    let mut ordered = space_matches(matches);
    for (position, m) in ordered.iter_mut().enumerate() {
        m.position = position;
    }
    ordered
}

/// Best-effort spacing pass, not an optimal scheduler.
///
/// Picks the first remaining match where neither team played in the previous slot,
/// falling back to the first remaining match when every candidate would play back to back.
pub fn space_matches(matches: Vec<GameMatch>) -> Vec<GameMatch> {
    if matches.len() <= 1 {
        return matches;
    }
    let mut remaining = matches;
    let mut ordered = Vec::with_capacity(remaining.len());
    let mut last_played: HashMap<Slot, usize> = HashMap::new();

    while !remaining.is_empty() {
        let index = ordered.len();
        let rested = |slot: &Slot| last_played.get(slot).map_or(true, |&last| index - last > 1);
        let pick = remaining
            .iter()
            .position(|m| rested(&m.team1) && rested(&m.team2))
            .unwrap_or(0);
        let m = remaining.remove(pick);
        last_played.insert(m.team1, index);
        last_played.insert(m.team2, index);
        ordered.push(m);
    }
    ordered
}

/// Number of bracket rounds for `team_count` teams: `ceil(log2(team_count))`.
pub fn rounds_needed(team_count: usize) -> u32 {
    if team_count <= 1 {
        return 0;
    }
    team_count.next_power_of_two().trailing_zeros()
}

/// Number of matches in each bracket round, first round first.
///
/// Round 1 has `ceil(n / 2)` matches (an odd leftover team plays a Bye);
/// each later round halves the previous one, rounding up, down to the final.
pub fn bracket_round_sizes(team_count: usize) -> Vec<usize> {
    let mut sizes = Vec::new();
    let mut size = team_count.div_ceil(2);
    if size == 0 {
        return sizes;
    }
    sizes.push(size);
    while size > 1 {
        size = size.div_ceil(2);
        sizes.push(size);
    }
    sizes
}

/// Id of the bracket match at `position` in `round`.
pub fn bracket_match_id(round: u32, position: usize) -> String {
    format!("match-r{round}-{position}")
}

/// Single elimination bracket.
///
/// Round 1 pairs `(team[2i], team[2i+1])`. Later slots start as TBD; a later match
/// with a single feeder gets a Bye in slot two so its lone entrant advances.
/// The winner of position `i` advances to position `i / 2` of the next round,
/// into slot one for even `i` and slot two for odd `i`.
pub fn generate_bracket(teams: &[Team]) -> Vec<GameMatch> {
    let sizes = bracket_round_sizes(teams.len());
    let rounds = sizes.len();
    let mut matches = Vec::with_capacity(sizes.iter().sum());

    for (r, &size) in sizes.iter().enumerate() {
        let round = r as u32 + 1;
        for position in 0..size {
            let (team1, team2) = if r == 0 {
                let team1 = Slot::Team(teams[2 * position].id);
                let team2 = teams
                    .get(2 * position + 1)
                    .map_or(Slot::Bye, |t| Slot::Team(t.id));
                (team1, team2)
            } else if 2 * position + 1 < sizes[r - 1] {
                (Slot::Tbd, Slot::Tbd)
            } else {
                (Slot::Tbd, Slot::Bye)
            };

            let id = bracket_match_id(round, position);
            let mut m = GameMatch::new(id, team1, team2, round, position);
            if r + 1 < rounds {
                m.next_match_id = Some(bracket_match_id(round + 1, position / 2));
                m.next_side = Some(Side::from_position(position));
            }
            matches.push(m);
        }
    }
    matches
}
