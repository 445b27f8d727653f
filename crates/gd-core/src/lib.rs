//! gd-core
//!
//! Domain model for the Geometry Dash API client:
//! - entities (level / user previews, messages, songs, page info)
//! - numeric code tables, with "by position" ([`Ordinal`]) and
//!   "by explicit code" ([`Coded`]) constructors
//!
//! Decoding these from the wire lives in `gd-protocol`; this crate is
//! pure data.

pub mod code;
pub mod error;

pub mod difficulty;
pub mod icon;
pub mod length;
pub mod search;

pub mod level;
pub mod message;
pub mod page;
pub mod song;
pub mod user;

pub use code::{Coded, Ordinal};
pub use error::{Lookup, UnknownCode};

pub use difficulty::{DemonDifficulty, Difficulty};
pub use icon::IconType;
pub use length::Length;
pub use search::{demon_filter_code, DifficultyFilter, SearchStrategy};

pub use level::{LevelPage, LevelPreview};
pub use message::{Message, MessagePage};
pub use page::{Page, PageInfo};
pub use song::{stock_track, Song, SongRef};
pub use user::{UserPage, UserPreview};
