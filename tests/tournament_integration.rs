//! End to end checks of the tournament operations against a real SQLite file.

use std::collections::HashSet;

use swiss_tournament::database::{Database, PlayerId, Standing};
use swiss_tournament::services::TournamentService;

fn fresh_tournament() -> (tempfile::TempDir, TournamentService) {
    let dir = tempfile::tempdir().unwrap();
    let service = TournamentService::with_database(Database::new(dir.path().join("tournament.db")));
    service.initialize().unwrap();
    (dir, service)
}

fn standing_of(standings: &[Standing], id: PlayerId) -> &Standing {
    standings.iter().find(|s| s.id == id).unwrap()
}

#[test]
fn test_count_is_zero_after_reset() {
    let (_dir, service) = fresh_tournament();
    for name in ["Ann", "Ben", "Cid", "Dot", "Eve"] {
        service.register_player(name).unwrap();
    }
    assert_eq!(service.count_players().unwrap(), 5);

    service.reset_matches().unwrap();
    service.reset_players().unwrap();

    assert_eq!(service.count_players().unwrap(), 0);
}

#[test]
fn test_new_players_start_without_results() {
    let (_dir, service) = fresh_tournament();
    for name in ["Melpomene Murray", "Randy Schwartz", "Shawn Lin", "Tina Mott"] {
        service.register_player(name).unwrap();
    }

    let standings = service.player_standings().unwrap();

    assert_eq!(standings.len(), 4);
    assert!(standings.iter().all(|s| s.wins == 0 && s.matches == 0));
}

#[test]
fn test_report_match_updates_both_players() {
    let (_dir, service) = fresh_tournament();
    let a = service.register_player("Bruno Walton").unwrap();
    let b = service.register_player("Boots O'Neal").unwrap();

    service.report_match(a, b).unwrap();

    let standings = service.player_standings().unwrap();
    let winner = standing_of(&standings, a);
    let loser = standing_of(&standings, b);
    assert_eq!((winner.wins, winner.matches), (1, 1));
    assert_eq!((loser.wins, loser.matches), (0, 1));
    assert_eq!(standings[0].id, a);
}

#[test]
fn test_standings_invariants_hold() {
    let (_dir, service) = fresh_tournament();
    let ids: Vec<PlayerId> = ["A", "B", "C", "D"]
        .iter()
        .map(|name| service.register_player(name).unwrap())
        .collect();
    service.report_match(ids[0], ids[1]).unwrap();
    service.report_match(ids[2], ids[3]).unwrap();
    service.report_match(ids[0], ids[2]).unwrap();

    let standings = service.player_standings().unwrap();

    assert!(standings.iter().all(|s| s.matches >= s.wins && s.wins >= 0));
    assert!(standings.windows(2).all(|w| w[0].wins >= w[1].wins));
}

#[test]
fn test_pairings_after_first_round() {
    let (_dir, service) = fresh_tournament();
    let ids: Vec<PlayerId> = ["Twilight Sparkle", "Fluttershy", "Applejack", "Pinkie Pie"]
        .iter()
        .map(|name| service.register_player(name).unwrap())
        .collect();
    // wins [1, 1, 0, 0]
    service.report_match(ids[0], ids[2]).unwrap();
    service.report_match(ids[1], ids[3]).unwrap();

    let pairings = service.swiss_pairings().unwrap();

    assert_eq!(pairings.len(), 2);
    let standings = service.player_standings().unwrap();
    let mut seen = HashSet::new();
    for pairing in &pairings {
        assert!(pairing.id1 < pairing.id2);
        assert_eq!(
            standing_of(&standings, pairing.id1).wins,
            standing_of(&standings, pairing.id2).wins
        );
        assert!(seen.insert(pairing.id1));
        assert!(seen.insert(pairing.id2));
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn test_odd_field_leaves_one_player_unpaired() {
    let (_dir, service) = fresh_tournament();
    for name in ["One", "Two", "Three"] {
        service.register_player(name).unwrap();
    }

    let pairings = service.swiss_pairings().unwrap();

    assert_eq!(pairings.len(), 1);
}

#[test]
fn test_no_players_means_no_pairings() {
    let (_dir, service) = fresh_tournament();
    assert!(service.swiss_pairings().unwrap().is_empty());
}

#[test]
fn test_reset_matches_is_idempotent() {
    let (_dir, service) = fresh_tournament();
    let a = service.register_player("A").unwrap();
    let b = service.register_player("B").unwrap();
    service.report_match(a, b).unwrap();

    service.reset_matches().unwrap();
    let first = service.player_standings().unwrap();
    service.reset_matches().unwrap();
    let second = service.player_standings().unwrap();

    assert_eq!(first, second);
    assert!(service.list_matches().unwrap().is_empty());
}

#[test]
fn test_registered_name_round_trips() {
    let (_dir, service) = fresh_tournament();
    service.register_player("Alice").unwrap();

    let standings = service.player_standings().unwrap();

    assert!(standings.iter().any(|s| s.name == "Alice"));
}

#[test]
fn test_markup_in_names_is_stripped() {
    let (_dir, service) = fresh_tournament();
    service.register_player("<script>alert(1)</script>Mallory").unwrap();

    let players = service.list_players().unwrap();

    assert_eq!(players[0].name, "Mallory");
}

#[test]
fn test_report_with_unknown_player_fails() {
    let (_dir, service) = fresh_tournament();
    let a = service.register_player("Known").unwrap();

    assert!(service.report_match(a, a + 100).is_err());
    assert!(service.list_matches().unwrap().is_empty());
}

#[test]
fn test_uninitialized_database_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let service = TournamentService::with_database(Database::new(dir.path().join("missing.db")));

    assert!(service.count_players().is_err());
}

#[test]
fn test_reset_players_is_idempotent() {
    let (_dir, service) = fresh_tournament();
    service.register_player("Gone Soon").unwrap();

    service.reset_players().unwrap();
    service.reset_players().unwrap();

    assert_eq!(service.count_players().unwrap(), 0);
}

#[test]
fn test_reset_players_on_empty_table() {
    let (_dir, service) = fresh_tournament();

    service.reset_players().unwrap();

    assert_eq!(service.count_players().unwrap(), 0);
    assert!(service.player_standings().unwrap().is_empty());
}
