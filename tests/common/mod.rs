//! Shared helpers for the integration tests.
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use tournament_engine::{
    create_tournament, report_result, Format, Registry, Sport, TeamId, Tournament,
};

pub fn tournament(names: &[&str], format: Format) -> Tournament {
    let registry = Registry::from_names(names).unwrap();
    create_tournament("Cup", Sport::Football, format, registry, &mut StdRng::seed_from_u64(7)).unwrap()
}

pub fn team_id(t: &Tournament, name: &str) -> TeamId {
    t.team_by_name(name).unwrap().id
}

/// Report `a` `score_a` - `score_b` `b`, whichever slot each team is in.
pub fn play(t: &Tournament, a: &str, b: &str, score_a: i64, score_b: i64) -> Tournament {
    let (ia, ib) = (team_id(t, a), team_id(t, b));
    let m = t.find_match_between(ia, ib).unwrap();
    let (s1, s2) = if m.team1.team_id() == Some(ia) {
        (score_a, score_b)
    } else {
        (score_b, score_a)
    };
    report_result(t, &m.id, s1, s2).unwrap()
}
