//! Разрешение исхода: бросок [0, 100) → дискретный исход + множитель награды.
//!
//! Таблица — 4 возрастающие верхние границы (крит. провал / провал /
//! частичный / успех), всё выше последней — крит. успех.

use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;

/// Верхняя граница броска (не включительно).
pub const ROLL_MAX: f64 = 100.0;

/// Максимальное значение порога после сдвига: крит. успех остаётся возможным.
const MAX_THRESHOLD: f64 = 99.0;

/// Тиры активностей: 1..=5.
pub const MIN_TIER: u8 = 1;
pub const MAX_TIER: u8 = 5;

/// Сдвиг порогов за каждый тир сверх первого.
const TIER_SHIFT: f64 = 4.0;

/// Исход действия, по возрастанию.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    CriticalFailure = 0,
    Failure = 1,
    Partial = 2,
    Success = 3,
    CriticalSuccess = 4,
}

impl Outcome {
    pub const ALL: [Outcome; 5] = [
        Outcome::CriticalFailure,
        Outcome::Failure,
        Outcome::Partial,
        Outcome::Success,
        Outcome::CriticalSuccess,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn is_success(self) -> bool {
        self >= Outcome::Success
    }
}

/// Сложность. Сдвигает все пороги.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Extreme,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn threshold_shift(self) -> f64 {
        match self {
            Difficulty::Easy => -10.0,
            Difficulty::Normal => 0.0,
            Difficulty::Hard => 10.0,
            Difficulty::Extreme => 20.0,
        }
    }
}

/// Вид активности со своей таблицей исходов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Expedition,
    Raid,
    Contract,
}

/// Результат разрешения.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct OutcomeResult {
    pub outcome: Outcome,
    pub reward_multiplier: f64,
    /// Бросок, по которому разрешали (уже с бонусами).
    pub roll: f64,
}

/// Таблица исходов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OutcomeTable {
    /// Верхние границы CF / F / P / S (не включительно).
    thresholds: [f64; 4],
    /// Множители награды CF / F / P / S / CS.
    multipliers: [f64; 5],
}

impl OutcomeTable {
    /// Строгий конструктор: пороги не убывают и лежат в [0, 100].
    pub fn new(thresholds: [f64; 4], multipliers: [f64; 5]) -> Result<Self, EngineError> {
        if thresholds.iter().any(|t| !t.is_finite() || *t < 0.0 || *t > ROLL_MAX) {
            return Err(EngineError::InvalidOutcomeTable(format!(
                "thresholds {thresholds:?} must lie in [0, 100]"
            )));
        }
        if thresholds.windows(2).any(|w| w[1] < w[0]) {
            return Err(EngineError::InvalidOutcomeTable(format!(
                "thresholds {thresholds:?} must be ascending"
            )));
        }
        if multipliers.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(EngineError::InvalidOutcomeTable(format!(
                "multipliers {multipliers:?} must be finite and non-negative"
            )));
        }
        Ok(Self {
            thresholds,
            multipliers,
        })
    }

    /// Базовая таблица вида активности (тир 1, Normal).
    pub fn for_activity(kind: ActivityKind) -> Self {
        let (thresholds, multipliers) = match kind {
            ActivityKind::Expedition => ([5.0, 25.0, 50.0, 92.0], [0.0, 0.2, 0.6, 1.0, 1.75]),
            ActivityKind::Raid => ([8.0, 35.0, 55.0, 90.0], [0.0, 0.1, 0.5, 1.0, 2.0]),
            ActivityKind::Contract => ([3.0, 20.0, 45.0, 95.0], [0.0, 0.25, 0.5, 1.0, 1.5]),
        };
        Self {
            thresholds,
            multipliers,
        }
    }

    /// Таблица с учётом тира (1..=5, вне диапазона — обрезается) и сложности.
    pub fn scaled(&self, tier: u8, difficulty: Difficulty) -> Self {
        let tier = tier.clamp(MIN_TIER, MAX_TIER);
        let shift = (tier - MIN_TIER) as f64 * TIER_SHIFT + difficulty.threshold_shift();

        let mut thresholds = self.thresholds;
        let mut floor = 0.0;
        for t in thresholds.iter_mut() {
            *t = (*t + shift).clamp(floor, MAX_THRESHOLD);
            floor = *t;
        }

        Self {
            thresholds,
            multipliers: self.multipliers,
        }
    }

    /// Таблица активности сразу под тир и сложность.
    pub fn for_activity_scaled(kind: ActivityKind, tier: u8, difficulty: Difficulty) -> Self {
        Self::for_activity(kind).scaled(tier, difficulty)
    }

    pub fn thresholds(&self) -> &[f64; 4] {
        &self.thresholds
    }

    pub fn reward_multiplier(&self, outcome: Outcome) -> f64 {
        self.multipliers[outcome.index()]
    }

    /// Бросок → исход. Первая полоса, чья граница строго больше броска.
    pub fn resolve(&self, roll: f64) -> Result<OutcomeResult, EngineError> {
        if !(0.0..ROLL_MAX).contains(&roll) {
            return Err(EngineError::RollOutOfRange(roll));
        }

        let outcome = self
            .thresholds
            .iter()
            .position(|upper| roll < *upper)
            .map_or(Outcome::CriticalSuccess, |i| Outcome::ALL[i]);

        Ok(OutcomeResult {
            outcome,
            reward_multiplier: self.reward_multiplier(outcome),
            roll,
        })
    }
}
