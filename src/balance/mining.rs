// src/balance/mining.rs

use serde::{Deserialize, Serialize};

/// Насколько подозрение спадает за день тишины.
pub const SUSPICION_DECAY_PER_DAY: u32 = 5;

pub const MAX_SUSPICION: u32 = 100;

/// Руда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OreType {
    Coal,
    Copper,
    Silver,
    Gold,
}

impl OreType {
    /// Рыночная цена за единицу.
    pub const fn market_value(self) -> u32 {
        match self {
            OreType::Coal => 4,
            OreType::Copper => 10,
            OreType::Silver => 35,
            OreType::Gold => 90,
        }
    }

    /// Подозрение за одну добычу на незаконном участке.
    pub const fn suspicion_per_extraction(self) -> u32 {
        match self {
            OreType::Coal => 1,
            OreType::Copper => 2,
            OreType::Silver => 5,
            OreType::Gold => 8,
        }
    }
}

/// Уровень подозрения шерифа.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SuspicionLevel {
    Unnoticed,
    Watched,
    Suspected,
    Investigated,
    Raided,
}

impl SuspicionLevel {
    /// Доля рыночной цены, которую платит скупщик.
    pub const fn fence_rate(self) -> f64 {
        match self {
            SuspicionLevel::Unnoticed => 0.70,
            SuspicionLevel::Watched => 0.60,
            SuspicionLevel::Suspected => 0.45,
            SuspicionLevel::Investigated => 0.30,
            // Когда участок накрыли, скупщики не берут.
            SuspicionLevel::Raided => 0.0,
        }
    }
}

/// Уровень по подозрению 0..100 (больше 100 — как 100).
pub const fn suspicion_level(suspicion: u32) -> SuspicionLevel {
    match suspicion {
        0..=19 => SuspicionLevel::Unnoticed,
        20..=44 => SuspicionLevel::Watched,
        45..=69 => SuspicionLevel::Suspected,
        70..=89 => SuspicionLevel::Investigated,
        _ => SuspicionLevel::Raided,
    }
}

/// Подозрение после добычи `units` единиц.
pub fn add_extraction_suspicion(suspicion: u32, ore: OreType, units: u32) -> u32 {
    suspicion
        .saturating_add(ore.suspicion_per_extraction().saturating_mul(units))
        .min(MAX_SUSPICION)
}

/// Подозрение после `days` дней тишины.
pub fn decay_suspicion(suspicion: u32, days: u32) -> u32 {
    suspicion.saturating_sub(SUSPICION_DECAY_PER_DAY.saturating_mul(days))
}

/// Выплата скупщика за партию.
pub fn fence_payout(ore: OreType, units: u32, suspicion: u32) -> u32 {
    let rate = suspicion_level(suspicion).fence_rate();
    (ore.market_value() as f64 * units as f64 * rate).round() as u32
}
