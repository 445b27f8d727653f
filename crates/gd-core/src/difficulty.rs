//! Level difficulty tiers.
//!
//! Both are sparse code tables on the wire:
//!
//! ```text
//! difficulty:       0=N/A 10=Easy 20=Normal 30=Hard 40=Harder 50=Insane
//! demon difficulty: 3=Easy 4=Medium 0=Hard 5=Insane 6=Extreme
//! ```
//!
//! Auto and demon levels are flagged separately on the level row; a
//! demon level still carries difficulty code `50`.

use crate::code::Coded;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Difficulty {
    NotAvailable,
    Easy,
    Normal,
    Hard,
    Harder,
    Insane,
}

impl Coded for Difficulty {
    const KIND: &'static str = "Difficulty";
    const TABLE: &'static [(i64, Self)] = &[
        (0, Difficulty::NotAvailable),
        (10, Difficulty::Easy),
        (20, Difficulty::Normal),
        (30, Difficulty::Hard),
        (40, Difficulty::Harder),
        (50, Difficulty::Insane),
    ];
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DemonDifficulty {
    Easy,
    Medium,
    Hard,
    Insane,
    Extreme,
}

impl Coded for DemonDifficulty {
    const KIND: &'static str = "DemonDifficulty";
    const TABLE: &'static [(i64, Self)] = &[
        (3, DemonDifficulty::Easy),
        (4, DemonDifficulty::Medium),
        (0, DemonDifficulty::Hard),
        (5, DemonDifficulty::Insane),
        (6, DemonDifficulty::Extreme),
    ];
}
