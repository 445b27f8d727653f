//! Level search strategies and filters.
//!
//! Request-side only: these codes are sent as parameters of a level
//! search (`type`, `diff`, `demonFilter`). Note that the search filter
//! codes differ from the difficulty codes found in level rows.

use crate::code::{code_of, Coded};
use crate::difficulty::DemonDifficulty;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum SearchStrategy {
    #[default]
    Regular,
    MostDownloaded,
    MostLiked,
    Trending,
    Recent,
    ByUser,
    Featured,
    Magic,
    Awarded,
    Followed,
    HallOfFame,
}

impl Coded for SearchStrategy {
    const KIND: &'static str = "SearchStrategy";
    const TABLE: &'static [(i64, Self)] = &[
        (0, SearchStrategy::Regular),
        (1, SearchStrategy::MostDownloaded),
        (2, SearchStrategy::MostLiked),
        (3, SearchStrategy::Trending),
        (4, SearchStrategy::Recent),
        (5, SearchStrategy::ByUser),
        (6, SearchStrategy::Featured),
        (7, SearchStrategy::Magic),
        (11, SearchStrategy::Awarded),
        (12, SearchStrategy::Followed),
        (16, SearchStrategy::HallOfFame),
    ];
}

impl SearchStrategy {
    /// Code sent on the wire.
    pub fn code(self) -> i64 {
        // Every variant appears in TABLE.
        code_of(self).unwrap_or(0)
    }
}

/// Difficulty filter for level searches (`diff` parameter).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DifficultyFilter {
    NotAvailable,
    Auto,
    Demon,
    Easy,
    Normal,
    Hard,
    Harder,
    Insane,
}

impl Coded for DifficultyFilter {
    const KIND: &'static str = "DifficultyFilter";
    const TABLE: &'static [(i64, Self)] = &[
        (-1, DifficultyFilter::NotAvailable),
        (-3, DifficultyFilter::Auto),
        (-2, DifficultyFilter::Demon),
        (1, DifficultyFilter::Easy),
        (2, DifficultyFilter::Normal),
        (3, DifficultyFilter::Hard),
        (4, DifficultyFilter::Harder),
        (5, DifficultyFilter::Insane),
    ];
}

impl DifficultyFilter {
    pub fn code(self) -> i64 {
        code_of(self).unwrap_or(-1)
    }
}

/// Code of a demon tier in the `demonFilter` search parameter (`1..=5`).
pub fn demon_filter_code(tier: DemonDifficulty) -> i64 {
    match tier {
        DemonDifficulty::Easy => 1,
        DemonDifficulty::Medium => 2,
        DemonDifficulty::Hard => 3,
        DemonDifficulty::Insane => 4,
        DemonDifficulty::Extreme => 5,
    }
}
