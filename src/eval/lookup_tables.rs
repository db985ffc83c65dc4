use crate::domain::card::Rank;

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маска колеса A2345: туз играет как единица.
pub const WHEEL_MASK: RankMask = mask_from_ranks(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);

/// Маска бродвея TJQKA.
pub const BROADWAY_MASK: RankMask =
    mask_from_ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]);

/// Получить битовую маску для одного ранга.
pub const fn rank_to_bit(rank: Rank) -> RankMask {
    1 << (rank as u8 - 2)
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        mask |= rank_to_bit(ranks[i]);
        i += 1;
    }
    mask
}

/// Маска стрита, у которого старшая карта `high` (Six..=Ace).
const fn run_mask(high: Rank) -> RankMask {
    0b1_1111 << (high as u8 - 6)
}

/// Найти стрит в битовой маске рангов.
/// Возвращает старшую карту стрита, если он есть.
///
/// Особый случай: колесо (A2345) → Rank::Five.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    // От бродвея вниз: нужен самый сильный стрит.
    for high in Rank::ALL.iter().rev().take_while(|r| **r >= Rank::Six) {
        let m = run_mask(*high);
        if rank_mask & m == m {
            return Some(*high);
        }
    }
    if rank_mask & WHEEL_MASK == WHEEL_MASK {
        return Some(Rank::Five);
    }
    None
}

/// Ранги стрита от старшего к младшему. В колесе туз — последний.
pub fn straight_ranks(high: Rank) -> [Rank; 5] {
    if high == Rank::Five {
        return [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace];
    }
    let top = high.value();
    let at = |d: u8| Rank::from_value(top.saturating_sub(d)).unwrap_or(Rank::Two);
    [at(0), at(1), at(2), at(3), at(4)]
}
