//! Налёты банд и войны между бандами.

use serde::{Deserialize, Serialize};

/// Продолжительность войны банд, часов.
pub const GANG_WAR_DURATION_HOURS: u32 = 48;
/// Минимум членов банды, чтобы объявить войну.
pub const GANG_WAR_MIN_MEMBERS: u8 = 3;
/// Стоимость объявления войны из казны банды.
pub const GANG_WAR_DECLARE_COST: u32 = 2_500;
/// Очки территории за победу в войне.
pub const GANG_WAR_TERRITORY_REWARD: u32 = 100;

/// Цель налёта.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RaidTarget {
    Stagecoach,
    Train,
    Bank,
    RivalHideout,
}

/// Параметры налёта на цель.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RaidProfile {
    pub min_crew: u8,
    pub max_crew: u8,
    pub cooldown_hours: u32,
    pub base_loot: u32,
    pub heat_gain: u32,
    /// Тир таблицы исходов (1..=5).
    pub tier: u8,
}

pub const fn raid_profile(target: RaidTarget) -> RaidProfile {
    match target {
        RaidTarget::Stagecoach => RaidProfile {
            min_crew: 2,
            max_crew: 4,
            cooldown_hours: 6,
            base_loot: 400,
            heat_gain: 10,
            tier: 1,
        },
        RaidTarget::Train => RaidProfile {
            min_crew: 3,
            max_crew: 6,
            cooldown_hours: 12,
            base_loot: 1_200,
            heat_gain: 25,
            tier: 3,
        },
        RaidTarget::Bank => RaidProfile {
            min_crew: 4,
            max_crew: 8,
            cooldown_hours: 24,
            base_loot: 3_000,
            heat_gain: 40,
            tier: 5,
        },
        RaidTarget::RivalHideout => RaidProfile {
            min_crew: 3,
            max_crew: 8,
            cooldown_hours: 18,
            base_loot: 800,
            heat_gain: 15,
            tier: 2,
        },
    }
}

/// Годится ли команда такого размера.
pub fn crew_size_ok(target: RaidTarget, crew: u8) -> bool {
    let p = raid_profile(target);
    (p.min_crew..=p.max_crew).contains(&crew)
}

/// Доля каждого: добыча × множитель исхода, поровну на команду.
///
/// Команда обрезается до допустимого диапазона цели.
pub fn loot_share(target: RaidTarget, reward_multiplier: f64, crew: u8) -> u32 {
    let p = raid_profile(target);
    let crew = crew.clamp(p.min_crew, p.max_crew) as f64;
    (p.base_loot as f64 * reward_multiplier / crew).floor() as u32
}
