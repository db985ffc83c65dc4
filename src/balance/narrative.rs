//! Тексты для игрока: что сказать про руку, исход и состояние бизнеса.

use crate::balance::decay::ConditionTier;
use crate::engine::outcome::{ActivityKind, Outcome};
use crate::eval::HandRank;

pub fn hand_flavor(rank: HandRank) -> &'static str {
    match rank {
        HandRank::HighCard => "Nothing but a lonely high card and a prayer.",
        HandRank::Pair => "A pair. Enough to keep your hat on.",
        HandRank::TwoPair => "Two pair. The dealer's eyebrow twitches.",
        HandRank::ThreeOfAKind => "Three of a kind. The saloon goes quiet.",
        HandRank::Straight => "A clean straight, like a rail line to fortune.",
        HandRank::Flush => "A flush. Every card sings the same song.",
        HandRank::FullHouse => "Full house. The whole town's coming to your party.",
        HandRank::FourOfAKind => "Four of a kind. Somebody's reaching for a gun.",
        HandRank::StraightFlush => "A straight flush. Folks will talk about this one.",
        HandRank::RoyalFlush => "A royal flush. Destiny herself tips her hat.",
    }
}

pub fn outcome_flavor(activity: ActivityKind, outcome: Outcome) -> &'static str {
    match (activity, outcome) {
        (ActivityKind::Expedition, Outcome::CriticalFailure) => {
            "Your horse comes back alone. You follow three days later."
        }
        (ActivityKind::Expedition, Outcome::Failure) => "The trail runs cold and so do your boots.",
        (ActivityKind::Expedition, Outcome::Partial) => "You come back dusty, with a little to show for it.",
        (ActivityKind::Expedition, Outcome::Success) => "The frontier gives up its secrets.",
        (ActivityKind::Expedition, Outcome::CriticalSuccess) => {
            "You found what maps only whisper about."
        }

        (ActivityKind::Raid, Outcome::CriticalFailure) => "Ambush! The law was waiting for you.",
        (ActivityKind::Raid, Outcome::Failure) => "The guards held. Your crew scatters.",
        (ActivityKind::Raid, Outcome::Partial) => "You grab what you can and ride hard.",
        (ActivityKind::Raid, Outcome::Success) => "Clean job. Saddlebags heavy with coin.",
        (ActivityKind::Raid, Outcome::CriticalSuccess) => "They'll be singing ballads about this heist.",

        (ActivityKind::Contract, Outcome::CriticalFailure) => "The client wants your head, not your excuses.",
        (ActivityKind::Contract, Outcome::Failure) => "The job falls through. No pay today.",
        (ActivityKind::Contract, Outcome::Partial) => "Half a job, half the pay.",
        (ActivityKind::Contract, Outcome::Success) => "Job done. The client counts out your gold.",
        (ActivityKind::Contract, Outcome::CriticalSuccess) => "Above and beyond. The client adds a bonus.",
    }
}

pub fn condition_flavor(tier: ConditionTier) -> &'static str {
    match tier {
        ConditionTier::Excellent => "Fresh paint and polished brass.",
        ConditionTier::Good => "Well kept, if a little dusty.",
        ConditionTier::Fair => "Creaky floorboards and a leaky roof.",
        ConditionTier::Poor => "Customers step around the holes.",
        ConditionTier::Degraded => "Tumbleweeds are the only regulars.",
    }
}
