//! Rank tiers and the shipped rank table
//!
//! A rank table is an ordered run of inclusive rating bands. Lookups scan the
//! table front to back and fall back to the first tier on a miss, so every
//! rating maps to some rank.

use crate::error::{EloError, Result};
use crate::types::Rating;
use serde::Serialize;

/// Rating assigned as the upper bound of the top tier
pub const TOP_TIER_SENTINEL: Rating = 9999;

/// Display category grouping several tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankCategory {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Elite,
}

impl RankCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankCategory::Bronze => "bronze",
            RankCategory::Silver => "silver",
            RankCategory::Gold => "gold",
            RankCategory::Platinum => "platinum",
            RankCategory::Diamond => "diamond",
            RankCategory::Elite => "elite",
        }
    }
}

impl std::fmt::Display for RankCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single rating band
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankTier {
    pub name: &'static str,
    /// 1-based position in the table
    pub tier: u8,
    pub min_elo: Rating,
    pub max_elo: Rating,
    pub category: RankCategory,
    pub color: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

impl RankTier {
    /// Whether `rating` falls inside this tier's inclusive bounds
    pub fn contains(&self, rating: Rating) -> bool {
        rating >= self.min_elo && rating <= self.max_elo
    }

    /// Width of the band in rating points
    pub fn span(&self) -> i64 {
        i64::from(self.max_elo) - i64::from(self.min_elo)
    }
}

macro_rules! tier {
    ($name:expr, $tier:expr, $min:expr, $max:expr, $category:ident, $color:expr, $icon:expr, $description:expr) => {
        RankTier {
            name: $name,
            tier: $tier,
            min_elo: $min,
            max_elo: $max,
            category: RankCategory::$category,
            color: $color,
            icon: $icon,
            description: $description,
        }
    };
}

/// The 19 tiers shipped with the application, lowest first
pub static RANK_TIERS: [RankTier; 19] = [
    tier!("Bronce 1", 1, 500, 599, Bronze, "#CD7F32", "Shield", "Iniciando tu camino"),
    tier!("Bronce 2", 2, 600, 699, Bronze, "#CD7F32", "Shield", "Aprendiendo lo básico"),
    tier!("Bronce 3", 3, 700, 799, Bronze, "#CD7F32", "Shield", "Dominando fundamentos"),
    tier!("Plata 1", 4, 800, 899, Silver, "#C0C0C0", "Medal", "Jugador competente"),
    tier!("Plata 2", 5, 900, 999, Silver, "#C0C0C0", "Medal", "Habilidad en desarrollo"),
    tier!("Plata 3", 6, 1000, 1099, Silver, "#C0C0C0", "Medal", "Jugador sólido"),
    tier!("Oro 1", 7, 1100, 1199, Gold, "#FFD700", "Star", "Jugador experimentado"),
    tier!("Oro 2", 8, 1200, 1299, Gold, "#FFD700", "Star", "Habilidad sobresaliente"),
    tier!("Oro 3", 9, 1300, 1399, Gold, "#FFD700", "Star", "Elite en desarrollo"),
    tier!("Platino 1", 10, 1400, 1499, Platinum, "#E5E4E2", "Award", "Jugador excepcional"),
    tier!("Platino 2", 11, 1500, 1599, Platinum, "#E5E4E2", "Award", "Habilidad superior"),
    tier!("Platino 3", 12, 1600, 1699, Platinum, "#E5E4E2", "Award", "Casi diamante"),
    tier!("Diamante 1", 13, 1700, 1799, Diamond, "#B9F2FF", "Gem", "Jugador brillante"),
    tier!("Diamante 2", 14, 1800, 1899, Diamond, "#B9F2FF", "Gem", "Maestría técnica"),
    tier!("Diamante 3", 15, 1900, 1999, Diamond, "#B9F2FF", "Gem", "Entre los mejores"),
    tier!("Maestro", 16, 2000, 2199, Elite, "#9C27B0", "Trophy", "Maestro del juego"),
    tier!("Gran Maestro", 17, 2200, 2399, Elite, "#7B1FA2", "Trophy", "Habilidad extraordinaria"),
    tier!("Challenger", 18, 2400, 2599, Elite, "#6A1B9A", "Crown", "Desafiante de leyendas"),
    tier!("Leyenda", 19, 2600, TOP_TIER_SENTINEL, Elite, "#4A148C", "Crown", "Leyenda viviente"),
];

/// An ordered, non-empty view over rank tiers
#[derive(Debug, Clone, Copy)]
pub struct RankTable<'a> {
    tiers: &'a [RankTier],
}

impl RankTable<'static> {
    /// The table shipped with the application
    pub fn standard() -> Self {
        Self { tiers: &RANK_TIERS }
    }
}

impl Default for RankTable<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> RankTable<'a> {
    /// Build a table from caller-supplied tiers
    ///
    /// Tiers must be non-empty, have `min_elo <= max_elo`, and strictly
    /// increasing `tier` ordinals. Gaps between bands are allowed; ratings in
    /// a gap resolve to the first tier.
    pub fn new(tiers: &'a [RankTier]) -> Result<Self> {
        if tiers.is_empty() {
            return Err(EloError::ConfigurationError {
                message: "Rank table must contain at least one tier".to_string(),
            }
            .into());
        }

        for tier in tiers {
            if tier.min_elo > tier.max_elo {
                return Err(EloError::ConfigurationError {
                    message: format!(
                        "Tier {} has min_elo {} above max_elo {}",
                        tier.name, tier.min_elo, tier.max_elo
                    ),
                }
                .into());
            }
        }

        for pair in tiers.windows(2) {
            if pair[1].tier <= pair[0].tier {
                return Err(EloError::ConfigurationError {
                    message: format!(
                        "Tier ordinals must increase: {} follows {}",
                        pair[1].tier, pair[0].tier
                    ),
                }
                .into());
            }
        }

        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &'a [RankTier] {
        self.tiers
    }

    /// First tier of the table, used as the fallback for unmatched ratings
    pub fn lowest(&self) -> &'a RankTier {
        &self.tiers[0]
    }

    /// Whether each band starts exactly one point above the previous band's end
    pub fn is_contiguous(&self) -> bool {
        self.tiers
            .windows(2)
            .all(|pair| pair[0].max_elo.checked_add(1) == Some(pair[1].min_elo))
    }

    /// Tier containing `rating`, or the first tier when none does
    ///
    /// Ratings below the table, above the sentinel, or inside a gap all land
    /// on the lowest tier. Use [`RankTable::find_rank`] to tell those apart.
    pub fn rank_for_rating(&self, rating: Rating) -> &'a RankTier {
        self.tiers
            .iter()
            .find(|tier| tier.contains(rating))
            .unwrap_or_else(|| self.lowest())
    }

    /// Tier containing `rating`, or `EloError::Unranked`
    pub fn find_rank(&self, rating: Rating) -> Result<&'a RankTier> {
        self.tiers
            .iter()
            .find(|tier| tier.contains(rating))
            .ok_or_else(|| EloError::Unranked { rating }.into())
    }

    /// Tier directly above `tier`, if any
    pub fn next_tier(&self, tier: &RankTier) -> Option<&'a RankTier> {
        let position = self.tiers.iter().position(|t| t.tier == tier.tier)?;
        self.tiers.get(position + 1)
    }
}

/// Rank for `rating` in the shipped table, falling back to the first tier
pub fn rank_for_rating(rating: Rating) -> &'static RankTier {
    RankTable::standard().rank_for_rating(rating)
}
