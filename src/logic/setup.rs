//! Setup: turn a validated registry into a tournament with its full schedule.

use crate::logic::registry::Registry;
use crate::logic::resolver::resolve_byes;
use crate::logic::schedule::generate_schedule;
use crate::models::{Format, Sport, Tournament, TournamentError};
use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

/// Create the tournament: require a name and at least 2 teams, generate every match,
/// and complete first-round byes so their teams are already in round 2.
pub fn create_tournament<R: Rng + ?Sized>(
    name: &str,
    sport: Sport,
    format: Format,
    registry: Registry,
    rng: &mut R,
) -> Result<Tournament, TournamentError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TournamentError::EmptyTournamentName);
    }
    if !registry.can_finalize() {
        return Err(TournamentError::InsufficientParticipants(registry.len()));
    }
    if format == Format::Elimination {
        if let Some(missing) = registry.bracket_size_advice() {
            log::warn!(
                "{} teams is not a power of two; {} more would fill the bracket",
                registry.len(),
                missing
            );
        }
    }

    let teams = registry.into_teams();
    let mut matches = generate_schedule(&teams, format, rng)?;
    if format == Format::Elimination {
        resolve_byes(&mut matches);
    }

    let tournament = Tournament {
        id: Uuid::new_v4(),
        name: name.to_string(),
        format,
        sport,
        teams,
        matches,
        created_at: Utc::now(),
    };
    log::info!(
        "Created {:?} tournament {:?} ({}) with {} teams and {} matches",
        tournament.format,
        tournament.name,
        tournament.id,
        tournament.teams.len(),
        tournament.matches.len()
    );
    Ok(tournament)
}
