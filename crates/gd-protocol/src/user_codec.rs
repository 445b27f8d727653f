//! User search responses: `users # page info`.
//!
//! The server blanks fields it has no value for, so every user field is
//! optional and defaults to `0` (or `"-"` for the name).

use gd_core::{Page, UserPage, UserPreview};
use tracing::debug;

use crate::error::DecodeError;
use crate::resolver::resolve_page_info;
use crate::schema::{Fallback, FieldKind, FieldSpec, Schema};
use crate::tokenizer::{classify, index_row, rows, sections, Payload, RawRow};
use crate::wire_types::{FIELD_DELIMITER, NAME_PLACEHOLDER, USER_SEARCH};

pub const NAME: FieldSpec = FieldSpec::new(1, "name", FieldKind::Text, Fallback::Text(NAME_PLACEHOLDER));
pub const PLAYER_ID: FieldSpec = FieldSpec::new(2, "player_id", FieldKind::Number, Fallback::Zero);
pub const STARS: FieldSpec = FieldSpec::new(3, "stars", FieldKind::Number, Fallback::Zero);
pub const DEMONS: FieldSpec = FieldSpec::new(4, "demons", FieldKind::Number, Fallback::Zero);
pub const CREATOR_POINTS: FieldSpec = FieldSpec::new(8, "creator_points", FieldKind::Number, Fallback::Zero);
pub const ICON_ID: FieldSpec = FieldSpec::new(9, "icon_id", FieldKind::Number, Fallback::Zero);
pub const COLOR1: FieldSpec = FieldSpec::new(10, "color1", FieldKind::Number, Fallback::Zero);
pub const COLOR2: FieldSpec = FieldSpec::new(11, "color2", FieldKind::Number, Fallback::Zero);
pub const SECRET_COINS: FieldSpec = FieldSpec::new(13, "secret_coins", FieldKind::Number, Fallback::Zero);
pub const ICON_TYPE: FieldSpec = FieldSpec::new(14, "icon_type", FieldKind::Ordinal, Fallback::Zero);
pub const GLOW: FieldSpec = FieldSpec::new(15, "glow", FieldKind::NonZeroFlag, Fallback::False);
pub const ACCOUNT_ID: FieldSpec = FieldSpec::new(16, "account_id", FieldKind::Number, Fallback::Zero);
pub const USER_COINS: FieldSpec = FieldSpec::new(17, "user_coins", FieldKind::Number, Fallback::Zero);

pub const USER_SCHEMA: Schema = Schema {
    entity: "user",
    fields: &[
        NAME,
        PLAYER_ID,
        STARS,
        DEMONS,
        CREATOR_POINTS,
        ICON_ID,
        COLOR1,
        COLOR2,
        SECRET_COINS,
        ICON_TYPE,
        GLOW,
        ACCOUNT_ID,
        USER_COINS,
    ],
};

/// Decode a user search response. Fails on the first malformed row.
pub fn decode_user_search(raw: &str) -> Result<UserPage, DecodeError> {
    let body = match classify(raw, &USER_SEARCH) {
        Payload::NoData => return Ok(Page::empty()),
        Payload::Data(body) => body,
    };

    let parts = sections(body, 2);
    let info = resolve_page_info(parts[1])?;
    let users = rows(parts[0])
        .into_iter()
        .map(|row| index_row(row, FIELD_DELIMITER).and_then(|r| assemble_user(&r)))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(users = users.len(), total = info.total, "decoded user search");
    Ok(Page::new(users, info))
}

pub fn assemble_user(row: &RawRow<'_>) -> Result<UserPreview, DecodeError> {
    Ok(UserPreview {
        account_id: ACCOUNT_ID.number(row)?,
        player_id: PLAYER_ID.number(row)?,
        name: NAME.text(row)?,
        stars: STARS.number(row)?,
        demons: DEMONS.number(row)?,
        creator_points: CREATOR_POINTS.number(row)?,
        secret_coins: SECRET_COINS.number(row)?,
        user_coins: USER_COINS.number(row)?,
        icon_id: ICON_ID.number(row)?,
        icon_type: ICON_TYPE.ordinal(row)?,
        color1: COLOR1.number(row)?,
        color2: COLOR2.number(row)?,
        glow: GLOW.nonzero_flag(row)?,
    })
}
