use serde::{Deserialize, Serialize};

/// Ранг престижа.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrestigeRank {
    Greenhorn,
    Drifter,
    Gunslinger,
    Desperado,
    Legend,
}

impl PrestigeRank {
    pub const ALL: [PrestigeRank; 5] = [
        PrestigeRank::Greenhorn,
        PrestigeRank::Drifter,
        PrestigeRank::Gunslinger,
        PrestigeRank::Desperado,
        PrestigeRank::Legend,
    ];

    /// Очки престижа, с которых начинается ранг.
    pub const fn threshold(self) -> u32 {
        match self {
            PrestigeRank::Greenhorn => 0,
            PrestigeRank::Drifter => 1_000,
            PrestigeRank::Gunslinger => 5_000,
            PrestigeRank::Desperado => 15_000,
            PrestigeRank::Legend => 40_000,
        }
    }

    pub const fn gold_bonus(self) -> f64 {
        match self {
            PrestigeRank::Greenhorn => 1.00,
            PrestigeRank::Drifter => 1.05,
            PrestigeRank::Gunslinger => 1.10,
            PrestigeRank::Desperado => 1.20,
            PrestigeRank::Legend => 1.35,
        }
    }

    pub const fn xp_bonus(self) -> f64 {
        match self {
            PrestigeRank::Greenhorn => 1.00,
            PrestigeRank::Drifter => 1.10,
            PrestigeRank::Gunslinger => 1.15,
            PrestigeRank::Desperado => 1.25,
            PrestigeRank::Legend => 1.50,
        }
    }

    pub fn next(self) -> Option<PrestigeRank> {
        PrestigeRank::ALL.get(self as usize + 1).copied()
    }
}

/// Ранг по очкам.
pub fn prestige_rank(points: u32) -> PrestigeRank {
    PrestigeRank::ALL
        .into_iter()
        .rev()
        .find(|r| points >= r.threshold())
        .unwrap_or(PrestigeRank::Greenhorn)
}

/// Сколько очков до следующего ранга; None на вершине.
pub fn points_to_next_rank(points: u32) -> Option<u32> {
    prestige_rank(points)
        .next()
        .map(|next| next.threshold() - points)
}
