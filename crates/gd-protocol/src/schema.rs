//! Per-endpoint field schemas.
//!
//! Records on the wire carry no field names, only positions. Each
//! entity's layout is therefore written down once as a [`Schema`]: an
//! ordered list of [`FieldSpec`]s `(index, name, kind, fallback)`.
//! Assemblers read every field through its `FieldSpec`, so parsing and
//! defaulting rules live in one place and the layout itself can be
//! checked with [`Schema::validate`].
//!
//! Parsing policy, shared by all fields:
//! - an empty value counts as absent;
//! - absent + [`Fallback::Required`] is a `MalformedRow`;
//! - absent otherwise uses the fallback (`0`, `false`, a fixed string);
//! - present but unparsable is always a `MalformedRow`, never a default.

use std::collections::HashSet;
use std::str::FromStr;

use gd_core::{Coded, Ordinal};

use crate::cipher;
use crate::error::DecodeError;
use crate::tokenizer::RawRow;

/// How a field's raw text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Integer of the target field's width (`i64`, `u32`, ...).
    Number,
    /// `"1"` is true, anything else (including absent) is false.
    Flag,
    /// Any non-zero integer is true.
    NonZeroFlag,
    /// Raw string.
    Text,
    /// URL-safe base64 encoded string.
    Base64Text,
    /// Percent-encoded string.
    UrlText,
    /// Enumeration via explicit code table.
    Code,
    /// Enumeration via position.
    Ordinal,
}

/// What to do when a field is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Absence is a decode error.
    Required,
    /// Numeric zero (or the variant for code/ordinal zero).
    Zero,
    /// `false`.
    False,
    /// A fixed string.
    Text(&'static str),
    /// No value (`Option::None`).
    Absent,
}

/// One positional field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub index: u32,
    pub name: &'static str,
    pub kind: FieldKind,
    pub fallback: Fallback,
}

impl FieldSpec {
    pub const fn new(index: u32, name: &'static str, kind: FieldKind, fallback: Fallback) -> Self {
        FieldSpec {
            index,
            name,
            kind,
            fallback,
        }
    }

    fn missing(&self, row: &RawRow<'_>) -> DecodeError {
        DecodeError::malformed(
            row.source(),
            format!("missing required field `{}` (index {})", self.name, self.index),
        )
    }

    fn unparsable(&self, row: &RawRow<'_>, value: &str) -> DecodeError {
        DecodeError::malformed(
            row.source(),
            format!("field `{}` (index {}) has bad value {:?}", self.name, self.index, value),
        )
    }

    /// Parse an integer field.
    pub fn number<T>(&self, row: &RawRow<'_>) -> Result<T, DecodeError>
    where
        T: FromStr + Default,
    {
        debug_assert!(matches!(
            self.kind,
            FieldKind::Number | FieldKind::Code | FieldKind::Ordinal | FieldKind::NonZeroFlag
        ));
        match row.get(self.index) {
            Some(v) => v.parse::<T>().map_err(|_| self.unparsable(row, v)),
            None if self.fallback == Fallback::Required => Err(self.missing(row)),
            None => Ok(T::default()),
        }
    }

    /// Read a `"0"/"1"` flag. Never fails.
    pub fn flag(&self, row: &RawRow<'_>) -> bool {
        debug_assert_eq!(self.kind, FieldKind::Flag);
        row.get(self.index) == Some("1")
    }

    /// Read a flag that is set by any non-zero integer.
    pub fn nonzero_flag(&self, row: &RawRow<'_>) -> Result<bool, DecodeError> {
        debug_assert_eq!(self.kind, FieldKind::NonZeroFlag);
        Ok(self.number::<i64>(row)? != 0)
    }

    /// Read a raw string field.
    pub fn text(&self, row: &RawRow<'_>) -> Result<String, DecodeError> {
        debug_assert_eq!(self.kind, FieldKind::Text);
        match row.get(self.index) {
            Some(v) => Ok(v.to_string()),
            None => self.text_fallback(row),
        }
    }

    /// Read and decode a base64 string field.
    pub fn base64_text(&self, row: &RawRow<'_>) -> Result<String, DecodeError> {
        debug_assert_eq!(self.kind, FieldKind::Base64Text);
        match row.get(self.index) {
            Some(v) => cipher::decode_base64_text(v).map_err(|_| self.unparsable(row, v)),
            None => self.text_fallback(row),
        }
    }

    /// Read and decode a percent-encoded string field, if present.
    pub fn url_text(&self, row: &RawRow<'_>) -> Result<Option<String>, DecodeError> {
        debug_assert_eq!(self.kind, FieldKind::UrlText);
        match row.get(self.index) {
            Some(v) => urlencoding::decode(v)
                .map(|s| Some(s.into_owned()))
                .map_err(|_| self.unparsable(row, v)),
            None if self.fallback == Fallback::Required => Err(self.missing(row)),
            None => Ok(None),
        }
    }

    /// Read an optional field, passing the raw value through `decode`.
    pub fn optional<T>(
        &self,
        row: &RawRow<'_>,
        decode: impl FnOnce(&str) -> Option<T>,
    ) -> Result<Option<T>, DecodeError> {
        match row.get(self.index) {
            Some(v) => decode(v).map(Some).ok_or_else(|| self.unparsable(row, v)),
            None if self.fallback == Fallback::Required => Err(self.missing(row)),
            None => Ok(None),
        }
    }

    /// Resolve an enumeration through its code table.
    pub fn coded<E: Coded>(&self, row: &RawRow<'_>) -> Result<E, DecodeError> {
        debug_assert_eq!(self.kind, FieldKind::Code);
        let code = self.number::<i64>(row)?;
        E::from_code(code).map_err(|source| DecodeError::OutOfRangeEnumCode {
            row: row.source().to_string(),
            field: self.name,
            source,
        })
    }

    /// Resolve an enumeration by position.
    pub fn ordinal<E: Ordinal>(&self, row: &RawRow<'_>) -> Result<E, DecodeError> {
        debug_assert_eq!(self.kind, FieldKind::Ordinal);
        let pos = self.number::<i64>(row)?;
        E::from_ordinal(pos).map_err(|source| DecodeError::OutOfRangeEnumCode {
            row: row.source().to_string(),
            field: self.name,
            source,
        })
    }

    fn text_fallback(&self, row: &RawRow<'_>) -> Result<String, DecodeError> {
        match self.fallback {
            Fallback::Required => Err(self.missing(row)),
            Fallback::Text(s) => Ok(s.to_string()),
            _ => Ok(String::new()),
        }
    }
}

/// The full positional layout of one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub entity: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields
            .iter()
            .filter(|f| f.fallback == Fallback::Required)
    }

    /// Fail fast if any required field is absent from `row`.
    pub fn check_required(&self, row: &RawRow<'_>) -> Result<(), DecodeError> {
        match self.required().find(|f| row.get(f.index).is_none()) {
            Some(f) => Err(f.missing(row)),
            None => Ok(()),
        }
    }

    /// Check the layout itself: unique indices and names, and a
    /// fallback that makes sense for each kind.
    pub fn validate(&self) -> Result<(), String> {
        let mut indices = HashSet::new();
        let mut names = HashSet::new();
        for f in self.fields {
            if !indices.insert(f.index) {
                return Err(format!("{}: duplicate index {}", self.entity, f.index));
            }
            if !names.insert(f.name) {
                return Err(format!("{}: duplicate name {}", self.entity, f.name));
            }
            let ok = match f.kind {
                FieldKind::Flag => f.fallback == Fallback::False,
                FieldKind::NonZeroFlag => f.fallback == Fallback::False,
                FieldKind::Number | FieldKind::Code | FieldKind::Ordinal => {
                    matches!(f.fallback, Fallback::Required | Fallback::Zero)
                }
                FieldKind::Text => matches!(f.fallback, Fallback::Required | Fallback::Text(_)),
                FieldKind::Base64Text => matches!(
                    f.fallback,
                    Fallback::Required | Fallback::Text(_) | Fallback::Absent
                ),
                FieldKind::UrlText => matches!(f.fallback, Fallback::Required | Fallback::Absent),
            };
            if !ok {
                return Err(format!(
                    "{}: field `{}` has fallback {:?} incompatible with {:?}",
                    self.entity, f.name, f.fallback, f.kind
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::index_row;
    use crate::wire_types::FIELD_DELIMITER;
    use gd_core::{Difficulty, Length};

    const ID: FieldSpec = FieldSpec::new(1, "id", FieldKind::Number, Fallback::Required);
    const NAME: FieldSpec = FieldSpec::new(2, "name", FieldKind::Text, Fallback::Text("-"));
    const LIKES: FieldSpec = FieldSpec::new(14, "likes", FieldKind::Number, Fallback::Zero);
    const EPIC: FieldSpec = FieldSpec::new(42, "epic", FieldKind::Flag, Fallback::False);
    const GLOW: FieldSpec = FieldSpec::new(15, "glow", FieldKind::NonZeroFlag, Fallback::False);
    const DIFF: FieldSpec = FieldSpec::new(9, "difficulty", FieldKind::Code, Fallback::Zero);
    const LEN: FieldSpec = FieldSpec::new(16, "length", FieldKind::Ordinal, Fallback::Zero);

    const SAMPLE: Schema = Schema {
        entity: "sample",
        fields: &[ID, NAME, LIKES, EPIC, GLOW, DIFF, LEN],
    };

    #[test]
    fn sample_schema_is_valid() {
        assert_eq!(SAMPLE.validate(), Ok(()));
        assert_eq!(SAMPLE.field("likes"), Some(&LIKES));
        assert_eq!(SAMPLE.required().count(), 1);
    }

    #[test]
    fn validate_catches_duplicates_and_bad_fallbacks() {
        const DUP: Schema = Schema {
            entity: "dup",
            fields: &[ID, FieldSpec::new(1, "other", FieldKind::Number, Fallback::Zero)],
        };
        assert!(DUP.validate().unwrap_err().contains("duplicate index"));

        const BAD: Schema = Schema {
            entity: "bad",
            fields: &[FieldSpec::new(3, "flag", FieldKind::Flag, Fallback::Zero)],
        };
        assert!(BAD.validate().is_err());
    }

    #[test]
    fn absent_optional_fields_use_fallbacks() {
        let row = index_row("1:10", FIELD_DELIMITER).unwrap();
        assert_eq!(ID.number::<u64>(&row), Ok(10));
        assert_eq!(NAME.text(&row).unwrap(), "-");
        assert_eq!(LIKES.number::<i64>(&row), Ok(0));
        assert!(!EPIC.flag(&row));
        assert_eq!(GLOW.nonzero_flag(&row), Ok(false));
        assert_eq!(DIFF.coded::<Difficulty>(&row), Ok(Difficulty::NotAvailable));
        assert_eq!(LEN.ordinal::<Length>(&row), Ok(Length::Tiny));
    }

    #[test]
    fn empty_value_is_absent() {
        let row = index_row("1::2:", FIELD_DELIMITER).unwrap();
        assert!(ID.number::<u64>(&row).is_err());
        assert_eq!(NAME.text(&row).unwrap(), "-");
        assert!(SAMPLE.check_required(&row).is_err());
    }

    #[test]
    fn present_but_unparsable_is_malformed() {
        let row = index_row("1:10:14:lots", FIELD_DELIMITER).unwrap();
        let err = LIKES.number::<i64>(&row).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedRow { .. }));
        assert_eq!(err.row(), "1:10:14:lots");
    }

    #[test]
    fn width_is_enforced() {
        let row = index_row("14:-3", FIELD_DELIMITER).unwrap();
        assert_eq!(LIKES.number::<i64>(&row), Ok(-3));
        assert!(LIKES.number::<u32>(&row).is_err());
    }

    #[test]
    fn flags() {
        let row = index_row("42:1:15:2", FIELD_DELIMITER).unwrap();
        assert!(EPIC.flag(&row));
        assert_eq!(GLOW.nonzero_flag(&row), Ok(true));

        let row = index_row("42:2", FIELD_DELIMITER).unwrap();
        assert!(!EPIC.flag(&row));
    }

    #[test]
    fn out_of_range_codes() {
        let row = index_row("9:35:16:9", FIELD_DELIMITER).unwrap();
        let err = DIFF.coded::<Difficulty>(&row).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::OutOfRangeEnumCode { field: "difficulty", .. }
        ));
        assert!(matches!(
            LEN.ordinal::<Length>(&row),
            Err(DecodeError::OutOfRangeEnumCode { field: "length", .. })
        ));
    }
}
