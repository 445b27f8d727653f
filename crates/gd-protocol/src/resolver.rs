//! Cross-reference resolution of auxiliary sections.
//!
//! Primary rows refer to other data by numeric key (creator player ID,
//! custom song ID). The referenced data travels in later sections of the
//! same response and is turned into lookup tables here, once per
//! response, before any primary row is assembled.
//!
//! - [`PlainTable`]: `key:value[:...]` rows, e.g. `4170784:Serponge:5765`.
//! - [`RichTable`]: rows that are themselves indexed records and need
//!   full sub-assembly, e.g. the song section.
//!
//! An empty or missing section yields an empty table; lookups against
//! it return `None` and callers apply their own default.

use std::collections::HashMap;

use gd_core::PageInfo;
use tracing::trace;

use crate::error::DecodeError;
use crate::tokenizer::{index_row, split_rows, RawRow};
use crate::wire_types::FIELD_DELIMITER;

/// Numeric key → display string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainTable {
    entries: HashMap<u64, String>,
}

impl PlainTable {
    pub fn get(&self, key: u64) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    /// Resolved value, or `placeholder` when the key is unknown.
    pub fn get_or(&self, key: u64, placeholder: &str) -> String {
        self.get(key).unwrap_or(placeholder).to_string()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u64, String)> for PlainTable {
    fn from_iter<I: IntoIterator<Item = (u64, String)>>(iter: I) -> Self {
        PlainTable {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Numeric key → fully assembled sub-entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichTable<T> {
    entries: HashMap<u64, T>,
}

impl<T> RichTable<T> {
    pub fn get(&self, key: u64) -> Option<&T> {
        self.entries.get(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for RichTable<T> {
    fn default() -> Self {
        RichTable {
            entries: HashMap::new(),
        }
    }
}

impl<T> FromIterator<(u64, T)> for RichTable<T> {
    fn from_iter<I: IntoIterator<Item = (u64, T)>>(iter: I) -> Self {
        RichTable {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Build a [`PlainTable`] from `key<field>value` rows.
///
/// Tokens past the second are ignored (the creators section appends the
/// account ID). Fewer than two tokens, or a non-numeric key, is an error.
pub fn resolve_plain_table(
    section: &str,
    row_delimiter: &str,
    field_delimiter: &str,
) -> Result<PlainTable, DecodeError> {
    let table = split_rows(section, row_delimiter)
        .into_iter()
        .map(|row| {
            let mut tokens = row.split(field_delimiter);
            let (Some(key), Some(value)) = (tokens.next(), tokens.next()) else {
                return Err(DecodeError::malformed(row, "expected key and value"));
            };
            let key = key
                .parse::<u64>()
                .map_err(|_| DecodeError::malformed(row, format!("bad key {key:?}")))?;
            Ok((key, value.to_string()))
        })
        .collect::<Result<PlainTable, _>>()?;

    trace!(entries = table.len(), "resolved plain table");
    Ok(table)
}

/// Build a [`RichTable`] whose rows are indexed records.
///
/// `assemble` decodes one row into `(key, entity)` using the entity's own
/// schema.
pub fn resolve_rich_table<T, F>(
    section: &str,
    row_delimiter: &str,
    field_delimiter: &str,
    assemble: F,
) -> Result<RichTable<T>, DecodeError>
where
    F: Fn(&RawRow<'_>) -> Result<(u64, T), DecodeError>,
{
    let table = split_rows(section, row_delimiter)
        .into_iter()
        .map(|row| index_row(row, field_delimiter).and_then(|r| assemble(&r)))
        .collect::<Result<RichTable<T>, _>>()?;

    trace!(entries = table.len(), "resolved rich table");
    Ok(table)
}

/// Decode a trailing `total:offset:page_size` section.
pub fn resolve_page_info(section: &str) -> Result<PageInfo, DecodeError> {
    if section.is_empty() {
        return Ok(PageInfo::default());
    }

    let nums = section
        .split(FIELD_DELIMITER)
        .map(|t| t.parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| DecodeError::malformed(section, "bad page info"))?;

    match nums.as_slice() {
        [total, offset, page_size, ..] => Ok(PageInfo {
            total: *total,
            offset: *offset,
            page_size: *page_size,
        }),
        _ => Err(DecodeError::malformed(section, "page info needs 3 values")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire_types::{RICH_FIELD_DELIMITER, RICH_ROW_DELIMITER, ROW_DELIMITER};

    #[test]
    fn plain_table_from_creators_section() {
        let t = resolve_plain_table("4170784:Serponge:5765|503085:Viprin:2795", ROW_DELIMITER, FIELD_DELIMITER)
            .unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(503085), Some("Viprin"));
        assert_eq!(t.get(1), None);
        assert_eq!(t.get_or(1, "-"), "-");
    }

    #[test]
    fn empty_section_is_empty_table() {
        let t = resolve_plain_table("", ROW_DELIMITER, FIELD_DELIMITER).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.get_or(4170784, "-"), "-");

        let r: RichTable<u64> =
            resolve_rich_table("", RICH_ROW_DELIMITER, RICH_FIELD_DELIMITER, |_| Ok((0, 0))).unwrap();
        assert!(r.is_empty());
    }

    #[test]
    fn plain_table_rejects_bad_rows() {
        assert!(resolve_plain_table("justaname", ROW_DELIMITER, FIELD_DELIMITER).is_err());
        assert!(resolve_plain_table("x:name", ROW_DELIMITER, FIELD_DELIMITER).is_err());
    }

    #[test]
    fn rich_table_uses_assembler() {
        let section = "1~|~10~|~2~|~a~:~1~|~20~|~2~|~b";
        let t = resolve_rich_table(section, RICH_ROW_DELIMITER, RICH_FIELD_DELIMITER, |row| {
            let id = row.get(1).unwrap_or("0").parse::<u64>().unwrap_or(0);
            Ok((id, row.get(2).unwrap_or("").to_string()))
        })
        .unwrap();
        assert_eq!(t.get(20).map(String::as_str), Some("b"));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn rich_table_propagates_row_errors() {
        let err = resolve_rich_table::<(), _>("1~|~10~|~2", RICH_ROW_DELIMITER, RICH_FIELD_DELIMITER, |_| {
            Ok((0, ()))
        })
        .unwrap_err();
        assert_eq!(err.row(), "1~|~10~|~2");
    }

    #[test]
    fn page_info() {
        assert_eq!(
            resolve_page_info("9999:20:10").unwrap(),
            PageInfo {
                total: 9999,
                offset: 20,
                page_size: 10
            }
        );
        assert_eq!(resolve_page_info("").unwrap(), PageInfo::default());
        assert!(resolve_page_info("1:2").is_err());
        assert!(resolve_page_info("a:b:c").is_err());
    }
}
