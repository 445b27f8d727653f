//! Level search responses.
//!
//! ```text
//! levels # creators # songs # page info # hash
//! ```
//!
//! - levels:    `|`-separated rows of `index:value` pairs
//! - creators:  `|`-separated `playerID:name:accountID`
//! - songs:     `~:~`-separated rich sub-rows (see [`song_codec`](crate::song_codec))
//! - page info: `total:offset:page_size`
//!
//! The trailing hash section is ignored.

use gd_core::{stock_track, LevelPage, LevelPreview, Page, Song, SongRef};
use tracing::{debug, warn};

use crate::error::DecodeError;
use crate::resolver::{
    resolve_page_info, resolve_plain_table, resolve_rich_table, PlainTable, RichTable,
};
use crate::schema::{Fallback, FieldKind, FieldSpec, Schema};
use crate::song_codec::keyed_song;
use crate::tokenizer::{classify, index_row, rows, sections, Payload, RawRow};
use crate::wire_types::{
    FIELD_DELIMITER, LEVEL_SEARCH, NAME_PLACEHOLDER, RICH_FIELD_DELIMITER, RICH_ROW_DELIMITER,
    ROW_DELIMITER,
};

pub const ID: FieldSpec = FieldSpec::new(1, "id", FieldKind::Number, Fallback::Required);
pub const NAME: FieldSpec = FieldSpec::new(2, "name", FieldKind::Text, Fallback::Required);
pub const DESCRIPTION: FieldSpec = FieldSpec::new(3, "description", FieldKind::Base64Text, Fallback::Text(""));
pub const VERSION: FieldSpec = FieldSpec::new(5, "version", FieldKind::Number, Fallback::Zero);
pub const CREATOR_ID: FieldSpec = FieldSpec::new(6, "creator_id", FieldKind::Number, Fallback::Zero);
pub const DIFFICULTY: FieldSpec = FieldSpec::new(9, "difficulty", FieldKind::Code, Fallback::Zero);
pub const DOWNLOADS: FieldSpec = FieldSpec::new(10, "downloads", FieldKind::Number, Fallback::Zero);
pub const STOCK_TRACK: FieldSpec = FieldSpec::new(12, "stock_track", FieldKind::Number, Fallback::Zero);
pub const LIKES: FieldSpec = FieldSpec::new(14, "likes", FieldKind::Number, Fallback::Zero);
pub const LENGTH: FieldSpec = FieldSpec::new(15, "length", FieldKind::Ordinal, Fallback::Zero);
pub const DEMON: FieldSpec = FieldSpec::new(17, "demon", FieldKind::Flag, Fallback::False);
pub const STARS: FieldSpec = FieldSpec::new(18, "stars", FieldKind::Number, Fallback::Zero);
pub const FEATURED_SCORE: FieldSpec = FieldSpec::new(19, "featured_score", FieldKind::Number, Fallback::Zero);
pub const AUTO: FieldSpec = FieldSpec::new(25, "auto", FieldKind::Flag, Fallback::False);
pub const ORIGINAL_ID: FieldSpec = FieldSpec::new(30, "original_id", FieldKind::Number, Fallback::Zero);
pub const CUSTOM_SONG_ID: FieldSpec = FieldSpec::new(35, "custom_song_id", FieldKind::Number, Fallback::Zero);
pub const COIN_COUNT: FieldSpec = FieldSpec::new(37, "coin_count", FieldKind::Number, Fallback::Zero);
pub const COINS_VERIFIED: FieldSpec = FieldSpec::new(38, "coins_verified", FieldKind::Flag, Fallback::False);
pub const REQUESTED_STARS: FieldSpec = FieldSpec::new(39, "requested_stars", FieldKind::Number, Fallback::Zero);
pub const EPIC: FieldSpec = FieldSpec::new(42, "epic", FieldKind::Flag, Fallback::False);
pub const DEMON_DIFFICULTY: FieldSpec = FieldSpec::new(43, "demon_difficulty", FieldKind::Code, Fallback::Zero);
pub const OBJECT_COUNT: FieldSpec = FieldSpec::new(45, "object_count", FieldKind::Number, Fallback::Zero);

pub const LEVEL_SCHEMA: Schema = Schema {
    entity: "level",
    fields: &[
        ID,
        NAME,
        DESCRIPTION,
        VERSION,
        CREATOR_ID,
        DIFFICULTY,
        DOWNLOADS,
        STOCK_TRACK,
        LIKES,
        LENGTH,
        DEMON,
        STARS,
        FEATURED_SCORE,
        AUTO,
        ORIGINAL_ID,
        CUSTOM_SONG_ID,
        COIN_COUNT,
        COINS_VERIFIED,
        REQUESTED_STARS,
        EPIC,
        DEMON_DIFFICULTY,
        OBJECT_COUNT,
    ],
};

/// Auxiliary tables of a level search response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelAux {
    /// Creator player ID → name.
    pub creators: PlainTable,
    /// Custom song ID → song.
    pub songs: RichTable<Song>,
}

impl LevelAux {
    /// Resolve the creators and songs sections.
    pub fn resolve(creators: &str, songs: &str) -> Result<Self, DecodeError> {
        Ok(LevelAux {
            creators: resolve_plain_table(creators, ROW_DELIMITER, FIELD_DELIMITER)?,
            songs: resolve_rich_table(songs, RICH_ROW_DELIMITER, RICH_FIELD_DELIMITER, keyed_song)?,
        })
    }
}

/// Decode a full level search response.
///
/// Fails on the first malformed level row.
pub fn decode_level_search(raw: &str) -> Result<LevelPage, DecodeError> {
    let body = match classify(raw, &LEVEL_SEARCH) {
        Payload::NoData => return Ok(Page::empty()),
        Payload::Data(body) => body,
    };

    let parts = sections(body, 4);
    let aux = LevelAux::resolve(parts[1], parts[2])?;
    let info = resolve_page_info(parts[3])?;

    let levels = rows(parts[0])
        .into_iter()
        .map(|row| index_row(row, FIELD_DELIMITER).and_then(|r| assemble_level(&r, &aux)))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        levels = levels.len(),
        creators = aux.creators.len(),
        songs = aux.songs.len(),
        total = info.total,
        "decoded level search"
    );
    Ok(Page::new(levels, info))
}

/// Assemble one level row against the response's auxiliary tables.
pub fn assemble_level(row: &RawRow<'_>, aux: &LevelAux) -> Result<LevelPreview, DecodeError> {
    LEVEL_SCHEMA.check_required(row)?;

    let creator_id = CREATOR_ID.number(row)?;
    let song = resolve_song(STOCK_TRACK.number(row)?, CUSTOM_SONG_ID.number(row)?, &aux.songs);

    Ok(LevelPreview {
        id: ID.number(row)?,
        name: NAME.text(row)?,
        description: DESCRIPTION.base64_text(row)?,
        version: VERSION.number(row)?,
        creator_id,
        creator_name: aux.creators.get_or(creator_id, NAME_PLACEHOLDER),
        difficulty: DIFFICULTY.coded(row)?,
        demon_difficulty: DEMON_DIFFICULTY.coded(row)?,
        stars: STARS.number(row)?,
        requested_stars: REQUESTED_STARS.number(row)?,
        featured_score: FEATURED_SCORE.number(row)?,
        epic: EPIC.flag(row),
        demon: DEMON.flag(row),
        auto: AUTO.flag(row),
        downloads: DOWNLOADS.number(row)?,
        likes: LIKES.number(row)?,
        length: LENGTH.ordinal(row)?,
        coin_count: COIN_COUNT.number(row)?,
        coins_verified: COINS_VERIFIED.flag(row),
        object_count: OBJECT_COUNT.number(row)?,
        original_id: ORIGINAL_ID.number(row)?,
        song,
    })
}

/// Resolve a level's song reference.
///
/// 1. non-zero inline code → stock track;
/// 2. otherwise a non-zero custom song ID → song section lookup;
/// 3. neither → stock track `0`.
///
/// Anything that cannot be found becomes [`SongRef::Unknown`] instead of
/// failing the row.
pub fn resolve_song(stock_code: u64, custom_song_id: u64, songs: &RichTable<Song>) -> SongRef {
    if stock_code != 0 {
        return match stock_track(stock_code) {
            Some(s) => SongRef::Resolved(s),
            None => {
                warn!(stock_code, "stock track code outside known table");
                SongRef::Unknown {
                    song_id: stock_code,
                }
            }
        };
    }

    if custom_song_id != 0 {
        return match songs.get(custom_song_id) {
            Some(s) => SongRef::Resolved(s.clone()),
            None => {
                warn!(custom_song_id, "custom song missing from response");
                SongRef::Unknown {
                    song_id: custom_song_id,
                }
            }
        };
    }

    stock_track(0)
        .map(SongRef::Resolved)
        .unwrap_or(SongRef::Unknown { song_id: 0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gd_core::{DemonDifficulty, Difficulty, Length};

    fn aux() -> LevelAux {
        LevelAux::resolve(
            "4170784:Serponge:5765",
            "1~|~803223~|~2~|~Supernova~|~3~|~1067~|~4~|~Xtrullor~|~5~|~9.46",
        )
        .unwrap()
    }

    fn level(row: &str, aux: &LevelAux) -> Result<LevelPreview, DecodeError> {
        assemble_level(&index_row(row, FIELD_DELIMITER)?, aux)
    }

    #[test]
    fn schema_is_valid() {
        assert_eq!(LEVEL_SCHEMA.validate(), Ok(()));
        let required: Vec<_> = LEVEL_SCHEMA.required().map(|f| f.name).collect();
        assert_eq!(required, vec!["id", "name"]);
    }

    #[test]
    fn minimal_row_uses_defaults() {
        let l = level("1:128:2:1", &LevelAux::default()).unwrap();
        assert_eq!(l.id, 128);
        assert_eq!(l.name, "1");
        assert_eq!(l.description, "");
        assert_eq!(l.creator_name, "-");
        assert_eq!(l.difficulty, Difficulty::NotAvailable);
        assert_eq!(l.demon_difficulty, DemonDifficulty::Hard);
        assert_eq!(l.length, Length::Tiny);
        assert!(!l.epic);
        assert_eq!(l.likes, 0);
        assert_eq!(l.song.song().map(|s| s.title.as_str()), Some("Stereo Madness"));
    }

    #[test]
    fn missing_id_is_malformed() {
        let err = level("2:Bloodbath:9:50", &aux()).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedRow { .. }));
        assert_eq!(err.row(), "2:Bloodbath:9:50");
    }

    #[test]
    fn unparsable_id_is_malformed() {
        assert!(level("1:abc:2:Name", &aux()).is_err());
    }

    #[test]
    fn creator_name_resolves_or_placeholder() {
        let a = aux();
        assert_eq!(level("1:1:2:x:6:4170784", &a).unwrap().creator_name, "Serponge");
        assert_eq!(level("1:1:2:x:6:99", &a).unwrap().creator_name, "-");
    }

    #[test]
    fn song_inline_code_wins() {
        let l = level("1:1:2:x:12:3:35:803223", &aux()).unwrap();
        let song = l.song.song().unwrap();
        assert_eq!(song.title, "Dry Out");
        assert!(!song.custom);
    }

    #[test]
    fn song_custom_lookup() {
        let l = level("1:1:2:x:12:0:35:803223", &aux()).unwrap();
        let song = l.song.song().unwrap();
        assert_eq!(song.title, "Supernova");
        assert!(song.custom);
    }

    #[test]
    fn song_dangling_reference_is_unknown() {
        let l = level("1:1:2:x:12:0:35:555", &aux()).unwrap();
        assert_eq!(l.song, SongRef::Unknown { song_id: 555 });

        let l = level("1:1:2:x:12:99", &aux()).unwrap();
        assert_eq!(l.song, SongRef::Unknown { song_id: 99 });
    }

    #[test]
    fn bad_difficulty_code_is_out_of_range() {
        let err = level("1:1:2:x:9:35", &aux()).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::OutOfRangeEnumCode { field: "difficulty", .. }
        ));
    }

    #[test]
    fn assembly_is_deterministic() {
        let a = aux();
        let row = "1:10565740:2:Bloodbath:6:4170784:9:50:17:1:43:6:18:10:42:1:35:803223";
        assert_eq!(level(row, &a).unwrap(), level(row, &a).unwrap());
    }
}
