//! Integration tests for the pitch-elo rating engine
//!
//! These tests exercise the public API end to end:
//! - Rank lookup across the full table
//! - ELO deltas and their symmetry
//! - Team balancing feeding match settlement
//! - Configuration driving the calculator

mod fixtures;

use pitch_elo::config::AppConfig;
use pitch_elo::rating::{
    auto_balance, can_captain, elo_delta, filter_by_rating_range, progress_within_tier,
    rank_for_rating, team_average_rating, EloRatingCalculator, RankCategory, RankTable,
    RatingCalculator,
};
use pitch_elo::types::{GameMode, MatchFormat, Player};
use proptest::prelude::*;

use fixtures::{club_roster, rating_of};

#[test]
fn test_underdog_win_scenario() {
    // 1150 beats 1300: expected ~0.2966, delta 32 * 0.7034 = 22.51
    let delta = elo_delta(1150, 1300, true, 32);
    assert_eq!(delta, 23);

    let new_rating = 1150 + delta;
    let tier = rank_for_rating(new_rating);
    assert_eq!(tier.name, "Oro 1");
    assert_eq!(tier.category, RankCategory::Gold);
}

#[test]
fn test_progress_through_rank_after_wins() {
    let mut rating = 1180;
    let start_tier = rank_for_rating(rating).tier;

    for _ in 0..3 {
        rating += elo_delta(rating, 1200, true, 32);
    }

    let tier = rank_for_rating(rating);
    assert!(tier.tier > start_tier);
    let progress = progress_within_tier(rating, tier);
    assert!((0.0..=100.0).contains(&progress));
}

#[test]
fn test_captain_builds_and_settles_match() {
    let roster = club_roster();
    let captain = &roster[0];
    assert!(can_captain(captain.rating, 1200));

    let eligible: Vec<Player> = filter_by_rating_range(&roster, 1200, 1300)
        .into_iter()
        .cloned()
        .collect();
    assert!(eligible.iter().all(|p| (1200..=1300).contains(&p.rating)));

    let per_team = MatchFormat::FiveASide.players_per_team();
    let (home, away) = auto_balance(&eligible, per_team);
    assert_eq!(home.len(), per_team);
    assert_eq!(away.len(), per_team);

    let calculator = EloRatingCalculator::default();
    let result = calculator
        .calculate_rating_changes(GameMode::Competitive, &home, &away, true)
        .unwrap();

    assert_eq!(result.home_average, team_average_rating(&home));
    assert_eq!(result.rating_changes.len(), per_team * 2);

    for change in &result.rating_changes {
        let before = rating_of(&eligible, &change.player_id).unwrap();
        assert_eq!(change.old_rating, before);
        assert_eq!(change.new_rating, before + change.delta);
    }

    let home_delta = result.change_for(&home[0].id).unwrap().delta;
    let away_delta = result.change_for(&away[0].id).unwrap().delta;
    assert!(home_delta > 0);
    assert!(away_delta < 0);
    assert!((home_delta + away_delta).abs() <= 1);
}

#[test]
fn test_friendly_match_does_not_move_ratings() {
    let roster = club_roster();
    let (home, away) = auto_balance(&roster, MatchFormat::ElevenASide.players_per_team());

    let calculator = EloRatingCalculator::default();
    let result = calculator
        .calculate_rating_changes(GameMode::Casual, &home, &away, false)
        .unwrap();

    assert_eq!(result.rating_changes.len(), 22);
    assert!(result.rating_changes.iter().all(|c| c.delta == 0));
}

#[test]
fn test_config_drives_calculator() {
    let config = AppConfig::from_toml_str("[rating]\nk_factor = 16\n").unwrap();
    let calculator = EloRatingCalculator::new(config.rating).unwrap();

    let home = vec![Player::new("h", "Home", 1200)];
    let away = vec![Player::new("a", "Away", 1200)];
    let result = calculator
        .calculate_rating_changes(GameMode::Tournament, &home, &away, true)
        .unwrap();

    assert_eq!(result.change_for("h").unwrap().delta, 8);
    assert_eq!(result.change_for("a").unwrap().delta, -8);
}

#[test]
fn test_strict_lookup_matches_fallback_inside_table() {
    let table = RankTable::standard();
    for rating in (500..=9999).step_by(37) {
        assert_eq!(table.find_rank(rating).unwrap(), table.rank_for_rating(rating));
    }
    assert!(table.find_rank(-100).is_err());
    assert_eq!(table.rank_for_rating(-100), table.rank_for_rating(500));
}

proptest! {
    #[test]
    fn prop_rank_contains_rating(rating in 500i32..=9999) {
        let tier = rank_for_rating(rating);
        prop_assert!(tier.contains(rating));
    }

    #[test]
    fn prop_rank_is_monotonic(a in 500i32..=9999, b in 500i32..=9999) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank_for_rating(low).tier <= rank_for_rating(high).tier);
    }

    #[test]
    fn prop_delta_is_antisymmetric(p in 0i32..5000, o in 0i32..5000, k in 1i32..100) {
        let gain = elo_delta(p, o, true, k);
        let loss = elo_delta(o, p, false, k);
        prop_assert!((gain + loss).abs() <= 1);
    }

    #[test]
    fn prop_delta_bounded_by_k(p in -1000i32..12000, o in -1000i32..12000, won: bool, k in 1i32..100) {
        let delta = elo_delta(p, o, won, k);
        if won {
            prop_assert!(delta >= 0 && delta <= k);
        } else {
            prop_assert!(delta <= 0 && delta >= -k);
        }
    }

    #[test]
    fn prop_progress_in_bounds(rating in -20000i32..20000) {
        let tier = rank_for_rating(rating);
        let progress = progress_within_tier(rating, tier);
        prop_assert!((0.0..=100.0).contains(&progress));
    }

    #[test]
    fn prop_average_within_range(ratings in prop::collection::vec(0i32..10000, 1..30)) {
        let average = team_average_rating(&ratings);
        let min = *ratings.iter().min().unwrap();
        let max = *ratings.iter().max().unwrap();
        prop_assert!(average >= min && average <= max);
    }

    #[test]
    fn prop_balance_keeps_team_sizes(ratings in prop::collection::vec(0i32..10000, 0..30), per_team in 1usize..12) {
        let (one, two) = auto_balance(&ratings, per_team);
        prop_assert!(one.len() <= per_team && two.len() <= per_team);
        prop_assert_eq!(one.len() + two.len(), ratings.len().min(per_team * 2));
    }
}
