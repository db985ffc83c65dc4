//! Износ бизнеса: состояние 0..100 падает каждый день, от состояния
//! зависит тир и доход.

use serde::{Deserialize, Serialize};

use crate::balance::economy::BusinessType;

/// Дней без визита, после которых износ ускоряется.
pub const NEGLECT_DAYS_MINOR: u32 = 3;
pub const NEGLECT_DAYS_MAJOR: u32 = 7;

const NEGLECT_MULT_MINOR: f64 = 1.5;
const NEGLECT_MULT_MAJOR: f64 = 2.0;

pub const MAX_CONDITION: f64 = 100.0;

/// Тир состояния.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConditionTier {
    Degraded,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ConditionTier {
    /// Нижняя граница тира (включительно).
    pub const fn min_condition(self) -> f64 {
        match self {
            ConditionTier::Excellent => 90.0,
            ConditionTier::Good => 70.0,
            ConditionTier::Fair => 50.0,
            ConditionTier::Poor => 25.0,
            ConditionTier::Degraded => 0.0,
        }
    }

    pub const fn income_multiplier(self) -> f64 {
        match self {
            ConditionTier::Excellent => 1.10,
            ConditionTier::Good => 1.00,
            ConditionTier::Fair => 0.85,
            ConditionTier::Poor => 0.60,
            ConditionTier::Degraded => 0.30,
        }
    }
}

/// Тир по состоянию. Определена на всём f64: вход обрезается в [0, 100],
/// NaN считается нулём.
pub fn condition_tier(condition: f64) -> ConditionTier {
    let c = if condition.is_nan() {
        0.0
    } else {
        condition.clamp(0.0, MAX_CONDITION)
    };

    [
        ConditionTier::Excellent,
        ConditionTier::Good,
        ConditionTier::Fair,
        ConditionTier::Poor,
    ]
    .into_iter()
    .find(|tier| c >= tier.min_condition())
    .unwrap_or(ConditionTier::Degraded)
}

/// Очки износа в день.
pub const fn daily_decay(kind: BusinessType) -> f64 {
    match kind {
        BusinessType::Saloon => 2.0,
        BusinessType::GeneralStore => 1.5,
        BusinessType::Blacksmith => 1.0,
        BusinessType::Stable => 1.5,
        BusinessType::Ranch => 1.0,
        BusinessType::Bank => 0.5,
    }
}

/// Стоимость ремонта одного очка состояния.
pub const fn repair_cost_per_point(kind: BusinessType) -> u32 {
    match kind {
        BusinessType::Saloon => 12,
        BusinessType::GeneralStore => 10,
        BusinessType::Blacksmith => 8,
        BusinessType::Stable => 6,
        BusinessType::Ranch => 9,
        BusinessType::Bank => 25,
    }
}

/// Множитель износа за забытый бизнес.
pub const fn neglect_multiplier(days_unvisited: u32) -> f64 {
    if days_unvisited > NEGLECT_DAYS_MAJOR {
        NEGLECT_MULT_MAJOR
    } else if days_unvisited > NEGLECT_DAYS_MINOR {
        NEGLECT_MULT_MINOR
    } else {
        1.0
    }
}

/// Состояние после `days` дней. Не уходит ниже нуля.
pub fn apply_decay(condition: f64, kind: BusinessType, days: u32, days_unvisited: u32) -> f64 {
    let loss = daily_decay(kind) * days as f64 * neglect_multiplier(days_unvisited);
    (condition - loss).clamp(0.0, MAX_CONDITION)
}

/// Цена ремонта до полного состояния.
pub fn repair_cost(kind: BusinessType, condition: f64) -> u32 {
    let missing = (MAX_CONDITION - condition.clamp(0.0, MAX_CONDITION)).ceil();
    missing as u32 * repair_cost_per_point(kind)
}
