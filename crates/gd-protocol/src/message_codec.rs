//! Private message responses.
//!
//! The inbox listing is `messages # page info`; reading a single
//! message returns one row which additionally carries the body.
//!
//! ```text
//! 1 id · 2 sender account · 3 sender player · 4 subject (base64)
//! 5 body (base64 + XOR) · 6 sender name · 7 age · 8 read · 9 outgoing
//! ```

use gd_core::{Message, MessagePage, Page};
use tracing::debug;

use crate::cipher;
use crate::error::DecodeError;
use crate::resolver::resolve_page_info;
use crate::schema::{Fallback, FieldKind, FieldSpec, Schema};
use crate::tokenizer::{classify, index_row, rows, sections, Payload, RawRow};
use crate::wire_types::{FIELD_DELIMITER, MESSAGE_LIST, MESSAGE_READ, NAME_PLACEHOLDER};

pub const ID: FieldSpec = FieldSpec::new(1, "id", FieldKind::Number, Fallback::Required);
pub const SENDER_ACCOUNT_ID: FieldSpec = FieldSpec::new(2, "sender_account_id", FieldKind::Number, Fallback::Zero);
pub const SENDER_PLAYER_ID: FieldSpec = FieldSpec::new(3, "sender_player_id", FieldKind::Number, Fallback::Zero);
pub const SUBJECT: FieldSpec = FieldSpec::new(4, "subject", FieldKind::Base64Text, Fallback::Text(""));
pub const BODY: FieldSpec = FieldSpec::new(5, "body", FieldKind::Base64Text, Fallback::Absent);
pub const SENDER_NAME: FieldSpec = FieldSpec::new(6, "sender_name", FieldKind::Text, Fallback::Text(NAME_PLACEHOLDER));
pub const AGE: FieldSpec = FieldSpec::new(7, "age", FieldKind::Text, Fallback::Text(""));
pub const READ: FieldSpec = FieldSpec::new(8, "read", FieldKind::Flag, Fallback::False);
pub const OUTGOING: FieldSpec = FieldSpec::new(9, "outgoing", FieldKind::Flag, Fallback::False);

pub const MESSAGE_SCHEMA: Schema = Schema {
    entity: "message",
    fields: &[
        ID,
        SENDER_ACCOUNT_ID,
        SENDER_PLAYER_ID,
        SUBJECT,
        BODY,
        SENDER_NAME,
        AGE,
        READ,
        OUTGOING,
    ],
};

/// Decode an inbox / outbox listing. Fails on the first malformed row.
pub fn decode_message_list(raw: &str) -> Result<MessagePage, DecodeError> {
    let body = match classify(raw, &MESSAGE_LIST) {
        Payload::NoData => return Ok(Page::empty()),
        Payload::Data(body) => body,
    };

    let parts = sections(body, 2);
    let info = resolve_page_info(parts[1])?;
    let messages = rows(parts[0])
        .into_iter()
        .map(|row| index_row(row, FIELD_DELIMITER).and_then(|r| assemble_message(&r)))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(messages = messages.len(), total = info.total, "decoded message list");
    Ok(Page::new(messages, info))
}

/// Decode a single message read. `None` when the message does not exist.
pub fn decode_message(raw: &str) -> Result<Option<Message>, DecodeError> {
    let body = match classify(raw, &MESSAGE_READ) {
        Payload::NoData => return Ok(None),
        Payload::Data(body) => body,
    };
    let row = index_row(body, FIELD_DELIMITER)?;
    assemble_message(&row).map(Some)
}

pub fn assemble_message(row: &RawRow<'_>) -> Result<Message, DecodeError> {
    MESSAGE_SCHEMA.check_required(row)?;
    Ok(Message {
        id: ID.number(row)?,
        sender_account_id: SENDER_ACCOUNT_ID.number(row)?,
        sender_player_id: SENDER_PLAYER_ID.number(row)?,
        sender_name: SENDER_NAME.text(row)?,
        subject: SUBJECT.base64_text(row)?,
        body: BODY.optional(row, |v| cipher::decode_message_body(v).ok())?,
        age: AGE.text(row)?,
        read: READ.flag(row),
        outgoing: OUTGOING.flag(row),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTED: &str = "6:Viprin:3:2795:2:503085:1:9001:4:SGkgZnJpZW5k:8:1:9:0:7:5 hours";

    #[test]
    fn schema_is_valid() {
        assert_eq!(MESSAGE_SCHEMA.validate(), Ok(()));
    }

    #[test]
    fn decodes_listing() {
        let page = decode_message_list(&format!("{LISTED}#1:0:50")).unwrap();
        assert_eq!(page.len(), 1);
        let m = &page.items[0];
        assert_eq!(m.id, 9001);
        assert_eq!(m.sender_account_id, 503085);
        assert_eq!(m.sender_player_id, 2795);
        assert_eq!(m.sender_name, "Viprin");
        assert_eq!(m.subject, "Hi friend");
        assert_eq!(m.body, None);
        assert_eq!(m.age, "5 hours");
        assert!(m.read);
        assert!(!m.outgoing);
    }

    #[test]
    fn decodes_single_message_body() {
        let m = decode_message(&format!("{LISTED}:5:eVFeWV4RQFpQQ1QV")).unwrap().unwrap();
        assert_eq!(m.body.as_deref(), Some("Hello there!"));
    }

    #[test]
    fn both_sentinels_are_empty() {
        assert!(decode_message_list("-1").unwrap().is_empty());
        assert!(decode_message_list("-2").unwrap().is_empty());
        assert_eq!(decode_message("-1"), Ok(None));
    }

    #[test]
    fn bad_subject_is_malformed() {
        let err = decode_message_list("1:5:4:!!!").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedRow { .. }));
    }
}
