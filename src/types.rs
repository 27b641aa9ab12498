//! Common types used throughout the rating engine

use serde::{Deserialize, Serialize};

/// A player's ELO rating
pub type Rating = i32;

/// Unique identifier for players
pub type PlayerId = String;

/// Anything that carries an ELO rating
pub trait Rated {
    fn rating(&self) -> Rating;
}

impl Rated for Rating {
    fn rating(&self) -> Rating {
        *self
    }
}

impl<T: Rated + ?Sized> Rated for &T {
    fn rating(&self) -> Rating {
        (**self).rating()
    }
}

/// Player information used for team building and match settlement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub rating: Rating,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, rating: Rating) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rating,
        }
    }
}

impl Rated for Player {
    fn rating(&self) -> Rating {
        self.rating
    }
}

/// Kind of match being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Competitive,
    Casual,
    Private,
    Tournament,
}

impl GameMode {
    /// Whether results in this mode move players' ratings
    pub fn affects_elo(&self) -> bool {
        matches!(self, GameMode::Competitive | GameMode::Tournament)
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Competitive => write!(f, "Competitive"),
            GameMode::Casual => write!(f, "Casual"),
            GameMode::Private => write!(f, "Private"),
            GameMode::Tournament => write!(f, "Tournament"),
        }
    }
}

/// Team size of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchFormat {
    #[serde(rename = "5v5")]
    FiveASide,
    #[serde(rename = "7v7")]
    SevenASide,
    #[serde(rename = "11v11")]
    ElevenASide,
}

impl MatchFormat {
    pub fn players_per_team(&self) -> usize {
        match self {
            MatchFormat::FiveASide => 5,
            MatchFormat::SevenASide => 7,
            MatchFormat::ElevenASide => 11,
        }
    }
}

impl std::fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchFormat::FiveASide => write!(f, "5v5"),
            MatchFormat::SevenASide => write!(f, "7v7"),
            MatchFormat::ElevenASide => write!(f, "11v11"),
        }
    }
}

/// Rating change for a player after a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingChange {
    pub player_id: PlayerId,
    pub old_rating: Rating,
    pub new_rating: Rating,
    pub delta: i32,
}
