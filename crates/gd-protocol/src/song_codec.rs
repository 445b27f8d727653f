//! Song records.
//!
//! Songs are encoded as rich sub-rows (`index~|~value~|~...`), both in
//! the song section of level searches and as the whole body of a song
//! info response.
//!
//! ```text
//! 1 id · 2 title · 3 artist id · 4 author · 5 size (MB) · 10 download URL (percent-encoded)
//! ```

use gd_core::Song;

use crate::error::DecodeError;
use crate::schema::{Fallback, FieldKind, FieldSpec, Schema};
use crate::tokenizer::{classify, index_row, Payload, RawRow};
use crate::wire_types::{NAME_PLACEHOLDER, RICH_FIELD_DELIMITER, SONG_INFO};

pub const ID: FieldSpec = FieldSpec::new(1, "id", FieldKind::Number, Fallback::Required);
pub const TITLE: FieldSpec = FieldSpec::new(2, "title", FieldKind::Text, Fallback::Text(NAME_PLACEHOLDER));
pub const ARTIST_ID: FieldSpec = FieldSpec::new(3, "artist_id", FieldKind::Number, Fallback::Zero);
pub const AUTHOR: FieldSpec = FieldSpec::new(4, "author", FieldKind::Text, Fallback::Text(NAME_PLACEHOLDER));
pub const SIZE: FieldSpec = FieldSpec::new(5, "size", FieldKind::Text, Fallback::Text(NAME_PLACEHOLDER));
pub const DOWNLOAD_URL: FieldSpec = FieldSpec::new(10, "download_url", FieldKind::UrlText, Fallback::Absent);

pub const SONG_SCHEMA: Schema = Schema {
    entity: "song",
    fields: &[ID, TITLE, ARTIST_ID, AUTHOR, SIZE, DOWNLOAD_URL],
};

/// Assemble a custom song from one rich sub-row.
pub fn assemble_song(row: &RawRow<'_>) -> Result<Song, DecodeError> {
    SONG_SCHEMA.check_required(row)?;
    Ok(Song {
        id: ID.number(row)?,
        title: TITLE.text(row)?,
        author: AUTHOR.text(row)?,
        artist_id: ARTIST_ID.number(row)?,
        size: SIZE.text(row)?,
        download_url: DOWNLOAD_URL.url_text(row)?,
        custom: true,
    })
}

/// Adapter for [`resolve_rich_table`](crate::resolver::resolve_rich_table).
pub fn keyed_song(row: &RawRow<'_>) -> Result<(u64, Song), DecodeError> {
    let song = assemble_song(row)?;
    Ok((song.id, song))
}

/// Decode a song info response. Sentinels (not found / banned) yield `None`.
pub fn decode_song_info(raw: &str) -> Result<Option<Song>, DecodeError> {
    let body = match classify(raw, &SONG_INFO) {
        Payload::NoData => return Ok(None),
        Payload::Data(body) => body,
    };
    let row = index_row(body, RICH_FIELD_DELIMITER)?;
    assemble_song(&row).map(Some)
}
