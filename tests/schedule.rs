//! Integration tests for schedule generation: round-robin groups and brackets.

mod common;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tournament_engine::{
    bracket_round_sizes, generate_bracket, generate_group_matches, generate_schedule,
    rounds_needed, space_matches, Format, GameMatch, Registry, Side, Slot, TournamentError,
};

#[test]
fn groups_pair_every_team_once() {
    let r = Registry::from_names(["Alpha", "Beta", "Gamma"]).unwrap();
    let matches = generate_group_matches(r.teams(), &mut StdRng::seed_from_u64(3));
    assert_eq!(matches.len(), 3);

    let ids: HashSet<_> = matches.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, HashSet::from(["match-0-1", "match-0-2", "match-1-2"]));
    for (i, m) in matches.iter().enumerate() {
        assert_eq!(m.round, 1);
        assert_eq!(m.position, i);
        assert!(!m.completed);
        assert_eq!(m.next_match_id, None);
    }
}

#[test]
fn group_match_slots_follow_team_order() {
    let r = Registry::from_names(["Alpha", "Beta", "Gamma", "Delta"]).unwrap();
    let teams = r.teams();
    let matches = generate_group_matches(teams, &mut StdRng::seed_from_u64(11));
    let m = matches.iter().find(|m| m.id == "match-1-3").unwrap();
    assert_eq!(m.team1, Slot::Team(teams[1].id));
    assert_eq!(m.team2, Slot::Team(teams[3].id));
}

#[test]
fn groups_are_deterministic_for_a_seed() {
    let r = Registry::from_names(["A", "B", "C", "D", "E", "F"]).unwrap();
    let first = generate_group_matches(r.teams(), &mut StdRng::seed_from_u64(42));
    let second = generate_group_matches(r.teams(), &mut StdRng::seed_from_u64(42));
    assert_eq!(first, second);
}

#[test]
fn spacing_prefers_rested_teams_and_falls_back_to_first() {
    let r = Registry::from_names(["A", "B", "C", "D"]).unwrap();
    let t = r.teams();
    let game = |a: usize, b: usize| {
        GameMatch::new(format!("match-{a}-{b}"), Slot::Team(t[a].id), Slot::Team(t[b].id), 1, 0)
    };
    let input = vec![game(0, 1), game(0, 2), game(0, 3), game(1, 2), game(1, 3), game(2, 3)];

    let ordered: Vec<_> = space_matches(input).into_iter().map(|m| m.id).collect();
    // After A-B only C-D is rested; after C-D nobody is, so the first remaining (A-C) is taken.
    assert_eq!(
        ordered,
        ["match-0-1", "match-2-3", "match-0-2", "match-1-3", "match-0-3", "match-1-2"]
    );
}

#[test]
fn schedule_needs_two_teams() {
    let r = Registry::from_names(["Solo"]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        generate_schedule(r.teams(), Format::Elimination, &mut rng),
        Err(TournamentError::InsufficientParticipants(1))
    );
}

#[test]
fn rounds_needed_is_ceil_log2() {
    assert_eq!(rounds_needed(2), 1);
    assert_eq!(rounds_needed(3), 2);
    assert_eq!(rounds_needed(4), 2);
    assert_eq!(rounds_needed(5), 3);
    assert_eq!(rounds_needed(8), 3);
    assert_eq!(rounds_needed(9), 4);
}

#[test]
fn round_sizes_halve_rounding_up() {
    assert_eq!(bracket_round_sizes(2), [1]);
    assert_eq!(bracket_round_sizes(5), [3, 2, 1]);
    assert_eq!(bracket_round_sizes(8), [4, 2, 1]);
    assert_eq!(bracket_round_sizes(9), [5, 3, 2, 1]);
}

#[test]
fn four_team_bracket_wiring() {
    let r = Registry::from_names(["A", "B", "C", "D"]).unwrap();
    let t = r.teams();
    let matches = generate_bracket(t);
    assert_eq!(matches.len(), 3);

    let r1_0 = &matches[0];
    assert_eq!(r1_0.id, "match-r1-0");
    assert_eq!((r1_0.team1, r1_0.team2), (Slot::Team(t[0].id), Slot::Team(t[1].id)));
    assert_eq!(r1_0.next_match_id.as_deref(), Some("match-r2-0"));
    assert_eq!(r1_0.next_side, Some(Side::One));

    let r1_1 = &matches[1];
    assert_eq!((r1_1.team1, r1_1.team2), (Slot::Team(t[2].id), Slot::Team(t[3].id)));
    assert_eq!(r1_1.next_match_id.as_deref(), Some("match-r2-0"));
    assert_eq!(r1_1.next_side, Some(Side::Two));

    let final_match = &matches[2];
    assert_eq!(final_match.id, "match-r2-0");
    assert_eq!(final_match.round, 2);
    assert_eq!((final_match.team1, final_match.team2), (Slot::Tbd, Slot::Tbd));
    assert_eq!(final_match.next_match_id, None);
    assert_eq!(final_match.next_side, None);
}

#[test]
fn odd_bracket_gives_leftover_team_a_bye() {
    let r = Registry::from_names(["A", "B", "C", "D", "E"]).unwrap();
    let t = r.teams();
    let matches = generate_bracket(t);
    let ids: Vec<_> = matches.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(
        ids,
        ["match-r1-0", "match-r1-1", "match-r1-2", "match-r2-0", "match-r2-1", "match-r3-0"]
    );

    let leftover = &matches[2];
    assert_eq!((leftover.team1, leftover.team2), (Slot::Team(t[4].id), Slot::Bye));
    assert_eq!(leftover.next_match_id.as_deref(), Some("match-r2-1"));
    assert_eq!(leftover.next_side, Some(Side::One));

    // Only one feeder, so slot two is a bye.
    let r2_1 = &matches[4];
    assert_eq!((r2_1.team1, r2_1.team2), (Slot::Tbd, Slot::Bye));
    assert_eq!(r2_1.next_side, Some(Side::Two));
}

#[test]
fn creation_resolves_byes_up_the_bracket() {
    let t = common::tournament(&["A", "B", "C", "D", "E"], Format::Elimination);
    let e = Slot::Team(common::team_id(&t, "E"));

    let leftover = t.get_match("match-r1-2").unwrap();
    assert!(leftover.completed);
    assert_eq!(leftover.scores(), Some((1, 0)));

    let r2_1 = t.get_match("match-r2-1").unwrap();
    assert_eq!(r2_1.team1, e);
    assert!(r2_1.completed);

    let final_match = t.get_match("match-r3-0").unwrap();
    assert_eq!((final_match.team1, final_match.team2), (Slot::Tbd, e));
    assert!(!final_match.completed);

    // Regular matches are untouched.
    assert!(!t.get_match("match-r1-0").unwrap().completed);
    assert!(!t.get_match("match-r2-0").unwrap().completed);
}

#[test]
fn two_team_bracket_is_just_a_final() {
    let t = common::tournament(&["A", "B"], Format::Elimination);
    assert_eq!(t.matches.len(), 1);
    assert_eq!(t.max_round(), 1);
    assert_eq!(t.matches[0].next_match_id, None);
}

#[test]
fn matches_by_round_orders_positions() {
    let t = common::tournament(&["A", "B", "C", "D", "E", "F", "G", "H"], Format::Elimination);
    let rounds = t.matches_by_round();
    let sizes: Vec<_> = rounds.values().map(Vec::len).collect();
    assert_eq!(sizes, [4, 2, 1]);
    for matches in rounds.values() {
        for (i, m) in matches.iter().enumerate() {
            assert_eq!(m.position, i);
        }
    }
}
