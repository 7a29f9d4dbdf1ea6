//! Integration tests for team registration and tournament creation.

mod common;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tournament_engine::{
    create_tournament, Format, Registry, Sport, TournamentError, AVATAR_PALETTE,
};

#[test]
fn add_trims_name_and_assigns_palette_avatar() {
    let mut r = Registry::new();
    let team = r.add_participant("  Alpha  ").unwrap();
    assert_eq!(team.name, "Alpha");
    assert!(AVATAR_PALETTE.contains(&team.avatar.as_str()));
    let id = team.id;
    assert_eq!(r.len(), 1);

    let second = r.add_participant("Beta").unwrap().id;
    assert_eq!(r.teams()[0].id, id);
    assert_eq!(r.teams()[1].id, second);
}

#[test]
fn add_rejects_empty_name() {
    let mut r = Registry::new();
    assert!(matches!(r.add_participant("   "), Err(TournamentError::EmptyName)));
    assert!(r.is_empty());
}

#[test]
fn add_rejects_duplicate_ignoring_case() {
    let mut r = Registry::new();
    r.add_participant("Alpha").unwrap();
    assert!(matches!(
        r.add_participant(" ALPHA "),
        Err(TournamentError::DuplicateName(name)) if name == "ALPHA"
    ));
    assert_eq!(r.len(), 1);
}

#[test]
fn add_rejects_sentinel_names() {
    let mut r = Registry::new();
    assert!(matches!(r.add_participant("bye"), Err(TournamentError::ReservedName(_))));
    assert!(matches!(r.add_participant("Tbd"), Err(TournamentError::ReservedName(_))));
}

#[test]
fn ids_are_unique() {
    let r = Registry::from_names(["A", "B", "C"]).unwrap();
    let t = r.teams();
    assert_ne!(t[0].id, t[1].id);
    assert_ne!(t[1].id, t[2].id);
    assert_ne!(t[0].id, t[2].id);
}

#[test]
fn remove_is_idempotent() {
    let mut r = Registry::from_names(["A", "B"]).unwrap();
    let id = r.teams()[0].id;
    r.remove_participant(id);
    r.remove_participant(id);
    assert_eq!(r.len(), 1);
    assert_eq!(r.teams()[0].name, "B");
}

#[test]
fn can_finalize_needs_two_teams() {
    let mut r = Registry::new();
    assert!(!r.can_finalize());
    r.add_participant("A").unwrap();
    assert!(!r.can_finalize());
    r.add_participant("B").unwrap();
    assert!(r.can_finalize());
}

#[test]
fn bracket_size_advice_counts_missing_teams() {
    assert_eq!(Registry::new().bracket_size_advice(), None);
    assert_eq!(Registry::from_names(["A", "B", "C", "D"]).unwrap().bracket_size_advice(), None);
    assert_eq!(Registry::from_names(["A", "B", "C", "D", "E"]).unwrap().bracket_size_advice(), Some(3));
    assert_eq!(Registry::from_names(["A", "B", "C"]).unwrap().bracket_size_advice(), Some(1));
}

#[test]
fn create_requires_two_teams() {
    let r = Registry::from_names(["Solo"]).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        create_tournament("Cup", Sport::Custom, Format::Groups, r, &mut rng),
        Err(TournamentError::InsufficientParticipants(1))
    );
}

#[test]
fn create_requires_name() {
    let r = Registry::from_names(["A", "B"]).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        create_tournament("  ", Sport::Custom, Format::Groups, r, &mut rng),
        Err(TournamentError::EmptyTournamentName)
    );
}

#[test]
fn create_keeps_teams_in_registration_order() {
    let t = common::tournament(&["Alpha", "Beta", "Gamma"], Format::Groups);
    let names: Vec<_> = t.teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Alpha", "Beta", "Gamma"]);
    assert_eq!(t.name, "Cup");
    assert_eq!(t.sport, Sport::Football);
    assert!(!t.is_completed());
}
