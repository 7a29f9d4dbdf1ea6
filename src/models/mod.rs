//! Data structures for the tournament engine: teams, matches, tournaments, standings.

mod game;
mod sport;
mod standing;
mod team;
mod tournament;

pub use game::{GameMatch, MatchId, Side};
pub use sport::Sport;
pub use standing::{PodiumEntry, Standing, TournamentSummary};
pub use team::{Slot, Team, TeamId, AVATAR_PALETTE, RESERVED_NAMES};
pub use tournament::{Format, ScoreProblem, Tournament, TournamentError, TournamentId};
