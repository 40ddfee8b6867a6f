//! Integration tests for the podium rating engine
//!
//! These tests validate the entire system working together, including:
//! - End-to-end replay of single- and multi-season histories
//! - Season snapshot locking and immutability under later seasons
//! - Predictive match probabilities from pre-season ratings
//! - Exposure-based rankings and tie-breaking determinism
//! - Per-tier player summaries and team summaries

use podium::tournament::TournamentEngine;
use podium::types::{Match, Rating, Tier};
use podium::utils::within_tolerance;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

fn one_season_history() -> Vec<Match> {
    vec![Match::new(1, "ann", "bob", "cid", "dee", Tier::WinnerFinal)]
}

fn two_season_inversion_history() -> Vec<Match> {
    vec![
        Match::new(1, "ann", "bob", "cid", "dee", Tier::WinnerFinal),
        Match::new(2, "cid", "dee", "ann", "bob", Tier::WinnerFinal),
    ]
}

#[test]
fn test_single_match_end_to_end() {
    init_tracing();

    let matches = one_season_history();
    let engine = TournamentEngine::with_defaults(matches.clone()).unwrap();

    // Winners rank ahead of losers
    let ranking = engine.current_ranking();
    let names: Vec<&str> = ranking.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["ann", "bob", "cid", "dee"]);

    // Every player entered at the baseline
    assert_eq!(
        engine.player_rating_before_season("ann", 1),
        Some(Rating::new(2000.0, 200.0))
    );

    // Symmetric priors make the prediction exactly even
    assert_eq!(engine.match_probability(&matches[0]).unwrap(), 0.5);
}

#[test]
fn test_two_season_inversion() {
    let engine = TournamentEngine::with_defaults(two_season_inversion_history()).unwrap();

    let ann_s1 = engine.ledger().season_rating("ann", 1).unwrap();
    let ann_s2 = engine.ledger().season_rating("ann", 2).unwrap();
    let cid_s1 = engine.ledger().season_rating("cid", 1).unwrap();
    let cid_s2 = engine.ledger().season_rating("cid", 2).unwrap();

    assert_ne!(ann_s1, ann_s2);

    // ann won season 1 and lost season 2; cid mirrored her. Their exposure
    // deltas must point in opposite directions.
    let ann_delta = ann_s2.exposure() - ann_s1.exposure();
    let cid_delta = cid_s2.exposure() - cid_s1.exposure();
    assert!(ann_delta < 0.0, "ann delta was {ann_delta}");
    assert!(cid_delta > 0.0, "cid delta was {cid_delta}");

    // Having lost back the season-1 upset, cid now outranks ann
    let ranking = engine.current_ranking();
    let position = |name: &str| ranking.iter().position(|(n, _)| n == name).unwrap();
    assert!(position("cid") < position("ann"));
}

#[test]
fn test_season_snapshots_immutable_under_later_seasons() {
    let history = two_season_inversion_history();
    let season_one_only = TournamentEngine::with_defaults(history[..1].to_vec()).unwrap();
    let both_seasons = TournamentEngine::with_defaults(history).unwrap();

    // Processing season 2 must not rewrite anyone's season-1 record
    for name in ["ann", "bob", "cid", "dee"] {
        assert_eq!(
            season_one_only.ledger().season_rating(name, 1),
            both_seasons.ledger().season_rating(name, 1),
            "season-1 snapshot changed for {name}"
        );
    }
    assert_eq!(
        season_one_only.season_ranking(1),
        both_seasons.season_ranking(1)
    );
}

#[test]
fn test_late_debut_is_seeded_at_previous_season() {
    let matches = vec![
        Match::new(1, "ann", "bob", "cid", "dee", Tier::WinnerFinal),
        Match::new(2, "ann", "eve", "bob", "cid", Tier::Semifinal),
    ];
    let engine = TournamentEngine::with_defaults(matches.clone()).unwrap();

    // eve never played in season 1 but carries a baseline seed there
    assert_eq!(
        engine.ledger().season_rating("eve", 1),
        Some(Rating::new(2000.0, 200.0))
    );
    assert_eq!(
        engine.player_rating_before_season("eve", 2),
        Some(Rating::new(2000.0, 200.0))
    );

    // The season-2 match is predictable for all four participants
    let probability = engine.match_probability(&matches[1]).unwrap();
    assert!(probability > 0.0 && probability < 1.0);
}

#[test]
fn test_match_probability_tracks_established_ratings() {
    // ann and bob win twice in season 1, so a season-2 rematch against the
    // same opponents should favor them.
    let matches = vec![
        Match::new(1, "ann", "bob", "cid", "dee", Tier::Semifinal),
        Match::new(1, "ann", "bob", "cid", "dee", Tier::WinnerFinal),
        Match::new(2, "ann", "bob", "cid", "dee", Tier::WinnerFinal),
    ];
    let engine = TournamentEngine::with_defaults(matches.clone()).unwrap();

    let rematch_probability = engine.match_probability(&matches[2]).unwrap();
    assert!(
        rematch_probability > 0.5,
        "expected favorites, got {rematch_probability}"
    );

    // The reversed fixture is the complementary prediction
    let reversed = Match::new(2, "cid", "dee", "ann", "bob", Tier::WinnerFinal);
    let reversed_probability = engine.match_probability(&reversed).unwrap();
    assert!(within_tolerance(
        rematch_probability + reversed_probability,
        1.0,
        1e-9
    ));
}

#[test]
fn test_players_summary_splits_tiers() {
    // One sf and one wf match over the same four players in different
    // pairings
    let matches = vec![
        Match::new(1, "ann", "bob", "cid", "dee", Tier::Semifinal),
        Match::new(1, "ann", "cid", "bob", "dee", Tier::WinnerFinal),
    ];
    let engine = TournamentEngine::with_defaults(matches).unwrap();

    let summary = engine.players_summary();
    for player in ["ann", "bob", "cid", "dee"] {
        assert_eq!(summary[player].matches_for(Tier::Semifinal), 1);
        assert_eq!(summary[player].matches_for(Tier::WinnerFinal), 1);
        assert_eq!(summary[player].matches_for(Tier::LoserFinal), 0);
    }

    assert_eq!(summary["ann"].wins.sf, 1);
    assert_eq!(summary["ann"].wins.wf, 1);
    assert_eq!(summary["cid"].losses.sf, 1);
    assert_eq!(summary["cid"].wins.wf, 1);
    assert_eq!(summary["dee"].losses.sf, 1);
    assert_eq!(summary["dee"].losses.wf, 1);
}

#[test]
fn test_teams_summary_and_win_rates() {
    let matches = vec![
        Match::new(1, "ann", "bob", "cid", "dee", Tier::Semifinal),
        Match::new(2, "bob", "ann", "cid", "dee", Tier::WinnerFinal),
        Match::new(3, "cid", "dee", "ann", "bob", Tier::WinnerFinal),
    ];
    let engine = TournamentEngine::with_defaults(matches).unwrap();

    let teams = engine.teams_summary();
    assert_eq!(teams["ann + bob"].wins, 2);
    assert_eq!(teams["ann + bob"].losses, 1);
    assert_eq!(teams["cid + dee"].wins, 1);
    assert_eq!(teams["cid + dee"].losses, 2);
    assert_eq!(teams["ann + bob"].win_rate(), Some(2.0 / 3.0));

    assert_eq!(engine.player_win_rate("ann"), Some(2.0 / 3.0));
    assert_eq!(engine.player_win_rate("dee"), Some(1.0 / 3.0));
    assert_eq!(engine.player_win_rate("nobody"), None);
}

#[test]
fn test_exposure_series_for_charting() {
    let engine = TournamentEngine::with_defaults(two_season_inversion_history()).unwrap();

    assert_eq!(engine.season_axis(), vec![0, 1, 2]);

    let series = engine.player_exposure_series("ann").unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series[0], Some(Rating::new(2000.0, 200.0).exposure()));
    assert!(series[1].unwrap() > series[0].unwrap());
    assert!(series[2].unwrap() < series[1].unwrap());

    assert_eq!(engine.player_exposure_series("nobody"), None);
}

#[test]
fn test_ranking_is_reproducible_across_rebuilds() {
    let matches = vec![
        Match::new(1, "ann", "bob", "cid", "dee", Tier::Semifinal),
        Match::new(1, "eve", "fay", "gus", "hal", Tier::Semifinal),
        Match::new(1, "ann", "bob", "eve", "fay", Tier::WinnerFinal),
        Match::new(1, "cid", "dee", "gus", "hal", Tier::LoserFinal),
        Match::new(2, "eve", "fay", "ann", "bob", Tier::WinnerFinal),
    ];

    let first = TournamentEngine::with_defaults(matches.clone()).unwrap();
    let second = TournamentEngine::with_defaults(matches).unwrap();

    assert_eq!(first.current_ranking(), second.current_ranking());
    for season in first.seasons() {
        assert_eq!(first.season_ranking(season), second.season_ranking(season));
    }
}
