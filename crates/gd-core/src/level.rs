//! Level preview, as returned by level searches.

use crate::difficulty::{DemonDifficulty, Difficulty};
use crate::length::Length;
use crate::page::Page;
use crate::song::SongRef;

/// Summary of a level as listed in search results.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LevelPreview {
    // Identification
    pub id: u64,
    pub name: String,
    pub description: String,
    pub version: u32,

    // Creator
    pub creator_id: u64,

    /// `"-"` when the creator is missing from the response.
    pub creator_name: String,

    // Rating
    pub difficulty: Difficulty,
    pub demon_difficulty: DemonDifficulty,
    pub stars: u32,
    pub requested_stars: u32,
    pub featured_score: u32,
    pub epic: bool,
    pub demon: bool,
    pub auto: bool,

    // Stats
    pub downloads: u64,
    /// Can go negative on disliked levels.
    pub likes: i64,
    pub length: Length,
    pub coin_count: u32,
    pub coins_verified: bool,
    pub object_count: u64,

    /// Source level for copies; `0` for originals.
    pub original_id: u64,

    pub song: SongRef,
}

impl LevelPreview {
    pub fn is_featured(&self) -> bool {
        self.featured_score > 0
    }

    pub fn is_rated(&self) -> bool {
        self.stars > 0
    }
}

pub type LevelPage = Page<LevelPreview>;
