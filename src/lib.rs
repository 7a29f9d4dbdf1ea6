//! Tournament engine: library with models and business logic.
//!
//! Builds round-robin group schedules and single-elimination brackets, applies
//! reported results (advancing bracket winners), and derives standings and podiums.

pub mod config;
pub mod logic;
pub mod models;
pub mod repository;
pub mod service;

pub use config::{EngineConfig, ThirdPlacePolicy};
pub use logic::{
    apply_result, bracket_match_id, bracket_round_sizes, champion, compute_podium,
    compute_standings, compute_summary, create_tournament, generate_bracket,
    generate_group_matches, generate_schedule, report_result, report_result_with, resolve_byes,
    rounds_needed, space_matches, validate_score, Registry,
};
pub use models::{
    Format, GameMatch, MatchId, PodiumEntry, ScoreProblem, Side, Slot, Sport, Standing, Team,
    TeamId, Tournament, TournamentError, TournamentId, TournamentSummary, AVATAR_PALETTE,
    RESERVED_NAMES,
};
pub use repository::{InMemoryRepository, TournamentRepository};
pub use service::TournamentService;
