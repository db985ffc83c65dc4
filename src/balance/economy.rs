// src/balance/economy.rs

use serde::{Deserialize, Serialize};

use crate::balance::decay::{condition_tier, ConditionTier};

/// Налог с дохода бизнеса.
pub const BUSINESS_TAX_RATE: f64 = 0.05;

/// Какую долю цены покупки вернут при продаже.
pub const PROPERTY_SALE_REFUND: f64 = 0.60;

/// Прибавка к доходу за каждого работника.
pub const EMPLOYEE_INCOME_BONUS: f64 = 0.08;

/// Тип бизнеса, которым может владеть игрок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BusinessType {
    Saloon,
    GeneralStore,
    Blacksmith,
    Stable,
    Ranch,
    Bank,
}

impl BusinessType {
    pub const ALL: [BusinessType; 6] = [
        BusinessType::Saloon,
        BusinessType::GeneralStore,
        BusinessType::Blacksmith,
        BusinessType::Stable,
        BusinessType::Ranch,
        BusinessType::Bank,
    ];
}

/// Экономика одного типа бизнеса.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct BusinessEconomy {
    pub purchase_price: u32,
    pub base_daily_income: u32,
    pub max_employees: u8,
}

pub const fn business_economy(kind: BusinessType) -> BusinessEconomy {
    match kind {
        BusinessType::Saloon => BusinessEconomy {
            purchase_price: 5_000,
            base_daily_income: 120,
            max_employees: 4,
        },
        BusinessType::GeneralStore => BusinessEconomy {
            purchase_price: 4_000,
            base_daily_income: 90,
            max_employees: 3,
        },
        BusinessType::Blacksmith => BusinessEconomy {
            purchase_price: 3_500,
            base_daily_income: 75,
            max_employees: 2,
        },
        BusinessType::Stable => BusinessEconomy {
            purchase_price: 3_000,
            base_daily_income: 60,
            max_employees: 3,
        },
        BusinessType::Ranch => BusinessEconomy {
            purchase_price: 8_000,
            base_daily_income: 160,
            max_employees: 6,
        },
        BusinessType::Bank => BusinessEconomy {
            purchase_price: 20_000,
            base_daily_income: 400,
            max_employees: 5,
        },
    }
}

/// Чистый дневной доход: база × состояние × работники, минус налог.
///
/// Работников сверх лимита не считаем.
pub fn daily_income(kind: BusinessType, condition: f64, employees: u8) -> u32 {
    let eco = business_economy(kind);
    let staff = employees.min(eco.max_employees) as f64;
    let tier: ConditionTier = condition_tier(condition);

    let gross = eco.base_daily_income as f64
        * tier.income_multiplier()
        * (1.0 + EMPLOYEE_INCOME_BONUS * staff);
    (gross * (1.0 - BUSINESS_TAX_RATE)).round() as u32
}

/// Сколько вернут за продажу.
pub fn sale_refund(kind: BusinessType) -> u32 {
    (business_economy(kind).purchase_price as f64 * PROPERTY_SALE_REFUND).round() as u32
}
