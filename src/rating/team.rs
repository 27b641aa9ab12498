//! Team building helpers
//!
//! Balancing, rating-range filtering and captain eligibility for organised
//! matches.

use crate::rating::elo::team_average_rating;
use crate::types::{Rated, Rating};

/// Minimum rating required to organise a match as captain
pub const DEFAULT_CAPTAIN_MIN_RATING: Rating = 1200;

/// Whether a player with `rating` may act as captain
pub fn can_captain(rating: Rating, min_captain_rating: Rating) -> bool {
    rating >= min_captain_rating
}

/// Players whose rating lies in `[min_rating, max_rating]`
pub fn filter_by_rating_range<P: Rated>(
    players: &[P],
    min_rating: Rating,
    max_rating: Rating,
) -> Vec<&P> {
    players
        .iter()
        .filter(|p| {
            let rating = p.rating();
            rating >= min_rating && rating <= max_rating
        })
        .collect()
}

/// Split players into two teams of at most `players_per_team`
///
/// Players are ranked strongest first and dealt alternately, so each team
/// receives every other player. When one team is full the rest go to the
/// other; anything past `2 * players_per_team` is left out.
pub fn auto_balance<P: Rated + Clone>(players: &[P], players_per_team: usize) -> (Vec<P>, Vec<P>) {
    let mut sorted: Vec<&P> = players.iter().collect();
    sorted.sort_by(|a, b| b.rating().cmp(&a.rating()));

    let mut team_one = Vec::with_capacity(players_per_team);
    let mut team_two = Vec::with_capacity(players_per_team);

    for (index, player) in sorted.into_iter().enumerate() {
        if index % 2 == 0 && team_one.len() < players_per_team {
            team_one.push(player.clone());
        } else if team_two.len() < players_per_team {
            team_two.push(player.clone());
        } else if team_one.len() < players_per_team {
            team_one.push(player.clone());
        }
    }

    (team_one, team_two)
}

/// Absolute difference between two team averages
pub fn rating_gap<A: Rated, B: Rated>(team_a: &[A], team_b: &[B]) -> Rating {
    let gap = team_average_rating(team_a).abs_diff(team_average_rating(team_b));
    Rating::try_from(gap).unwrap_or(Rating::MAX)
}
