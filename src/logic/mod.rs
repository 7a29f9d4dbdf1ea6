//! Tournament business logic: registration, scheduling, results, standings.

mod registry;
mod resolver;
mod schedule;
mod setup;
mod standings;

pub use registry::Registry;
pub use resolver::{apply_result, report_result, report_result_with, resolve_byes, validate_score};
pub use schedule::{
    bracket_match_id, bracket_round_sizes, generate_bracket, generate_group_matches,
    generate_schedule, rounds_needed, space_matches,
};
pub use setup::create_tournament;
pub use standings::{champion, compute_podium, compute_standings, compute_summary};
