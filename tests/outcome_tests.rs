//! Таблицы исходов: полосы, тиры, сложность, ошибки.

use destiny_deck::engine::*;
use proptest::prelude::*;

#[test]
fn expedition_bands_at_base_tier() {
    let t = OutcomeTable::for_activity(ActivityKind::Expedition);
    let cases = [
        (0.0, Outcome::CriticalFailure, 0.0),
        (10.0, Outcome::Failure, 0.2),
        (49.99, Outcome::Partial, 0.6),
        (50.0, Outcome::Success, 1.0),
        (99.99, Outcome::CriticalSuccess, 1.75),
    ];
    for (roll, outcome, mult) in cases {
        let r = t.resolve(roll).unwrap();
        assert_eq!(r.outcome, outcome, "roll {roll}");
        assert_eq!(r.reward_multiplier, mult);
        assert_eq!(r.roll, roll);
    }
}

#[test]
fn roll_out_of_range_is_rejected() {
    let t = OutcomeTable::for_activity(ActivityKind::Raid);
    for roll in [-0.1, 100.0, 250.0, f64::NAN] {
        assert!(matches!(t.resolve(roll), Err(EngineError::RollOutOfRange(_))));
    }
}

#[test]
fn harder_difficulty_worsens_the_same_roll() {
    let at = |difficulty, roll| {
        OutcomeTable::for_activity_scaled(ActivityKind::Raid, 1, difficulty)
            .resolve(roll)
            .unwrap()
            .outcome
    };

    // Raid: [8, 35, 55, 90] → Hard: [18, 45, 65, 99] → Easy: [0, 25, 45, 80].
    assert_eq!(at(Difficulty::Normal, 57.0), Outcome::Success);
    assert_eq!(at(Difficulty::Hard, 57.0), Outcome::Partial);
    assert_eq!(at(Difficulty::Normal, 50.0), Outcome::Partial);
    assert_eq!(at(Difficulty::Easy, 50.0), Outcome::Success);
    assert_eq!(at(Difficulty::Easy, 0.0), Outcome::Failure);
}

#[test]
fn tier_shifts_thresholds_by_four_per_step() {
    let base = OutcomeTable::for_activity(ActivityKind::Expedition);
    let t3 = base.scaled(3, Difficulty::Normal);
    assert_eq!(t3.thresholds(), &[13.0, 33.0, 58.0, 99.0]);
}

#[test]
fn tier_is_clamped_into_range() {
    let base = OutcomeTable::for_activity(ActivityKind::Contract);
    assert_eq!(base.scaled(0, Difficulty::Normal), base.scaled(1, Difficulty::Normal));
    assert_eq!(base.scaled(9, Difficulty::Normal), base.scaled(5, Difficulty::Normal));
}

#[test]
fn custom_table_must_be_ascending() {
    let err = OutcomeTable::new([10.0, 5.0, 50.0, 90.0], [0.0, 0.1, 0.5, 1.0, 2.0]).unwrap_err();
    assert!(matches!(err, EngineError::InvalidOutcomeTable(_)));

    let err = OutcomeTable::new([10.0, 20.0, 50.0, 120.0], [0.0, 0.1, 0.5, 1.0, 2.0]).unwrap_err();
    assert!(matches!(err, EngineError::InvalidOutcomeTable(_)));

    let ok = OutcomeTable::new([10.0, 20.0, 50.0, 90.0], [0.0, 0.1, 0.5, 1.0, 2.0]).unwrap();
    assert_eq!(ok.resolve(95.0).unwrap().outcome, Outcome::CriticalSuccess);
}

#[test]
fn success_helper() {
    assert!(Outcome::Success.is_success());
    assert!(Outcome::CriticalSuccess.is_success());
    assert!(!Outcome::Partial.is_success());
}

proptest! {
    #[test]
    fn outcome_is_monotone_in_roll(
        kind_idx in 0usize..3,
        tier in 1u8..=5,
        diff_idx in 0usize..4,
        a in 0.0f64..100.0,
        b in 0.0f64..100.0,
    ) {
        let kind = [ActivityKind::Expedition, ActivityKind::Raid, ActivityKind::Contract][kind_idx];
        let table = OutcomeTable::for_activity_scaled(kind, tier, Difficulty::ALL[diff_idx]);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_out = table.resolve(lo).unwrap();
        let hi_out = table.resolve(hi).unwrap();
        prop_assert!(lo_out.outcome <= hi_out.outcome);
        prop_assert!(lo_out.reward_multiplier <= hi_out.reward_multiplier);
    }
}
