//! Tokenizer and raw row extraction.
//!
//! Turns an opaque response string into sections, rows, and finally a
//! [`RawRow`]: a position-indexed view of one record.
//!
//! Splitting follows the server's conventions:
//! - an empty string yields no pieces at all;
//! - interior empty pieces are kept (sections are positional);
//! - trailing empty pieces are dropped (the server sometimes ends a
//!   section with a stray delimiter).

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::DecodeError;
use crate::wire_types::{Endpoint, ROW_DELIMITER, SECTION_DELIMITER};

/// Outcome of looking at a response before any splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload<'a> {
    /// Empty body or one of the endpoint's sentinels: no matching records.
    NoData,

    /// A body worth decoding (surrounding whitespace trimmed).
    Data(&'a str),
}

/// Classify a raw response for `endpoint`.
pub fn classify<'a>(raw: &'a str, endpoint: &Endpoint) -> Payload<'a> {
    let body = raw.trim();
    if body.is_empty() {
        debug!(path = endpoint.path, "empty response");
        return Payload::NoData;
    }
    if endpoint.is_sentinel(body) {
        debug!(path = endpoint.path, sentinel = body, "sentinel response");
        return Payload::NoData;
    }
    Payload::Data(body)
}

/// Split `s` on `delimiter`.
pub fn split<'a>(s: &'a str, delimiter: &str) -> Vec<&'a str> {
    if s.is_empty() {
        return Vec::new();
    }
    let mut parts: Vec<&str> = s.split(delimiter).collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}

/// Split a full response into its top-level sections.
pub fn split_sections<'a>(raw: &'a str, delimiter: &str) -> Vec<&'a str> {
    let sections = split(raw, delimiter);
    trace!(count = sections.len(), "split sections");
    sections
}

/// Split one section into rows.
pub fn split_rows<'a>(section: &'a str, delimiter: &str) -> Vec<&'a str> {
    split(section, delimiter)
}

/// Convenience: sections on `#`, padded so that indexing up to
/// `expected` never goes out of bounds (missing sections are empty).
pub fn sections(raw: &str, expected: usize) -> Vec<&str> {
    let mut parts = split_sections(raw, SECTION_DELIMITER);
    if parts.len() < expected {
        parts.resize(expected, "");
    }
    parts
}

/// Convenience: rows of a primary section on `|`.
pub fn rows(section: &str) -> Vec<&str> {
    split_rows(section, ROW_DELIMITER)
}

/// One delimited record, indexed by field position.
///
/// Borrows from the response; lives only while entities are assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow<'a> {
    source: &'a str,
    fields: HashMap<u32, &'a str>,
}

impl<'a> RawRow<'a> {
    /// Raw, unsplit row text (used for diagnostics).
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Value at `index` exactly as sent, including empty strings.
    pub fn raw(&self, index: u32) -> Option<&'a str> {
        self.fields.get(&index).copied()
    }

    /// Value at `index`, treating an empty string as absent.
    pub fn get(&self, index: u32) -> Option<&'a str> {
        self.raw(index).filter(|v| !v.is_empty())
    }

    pub fn contains(&self, index: u32) -> bool {
        self.fields.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field indices present in this row, ascending.
    pub fn indices(&self) -> Vec<u32> {
        let mut idx: Vec<u32> = self.fields.keys().copied().collect();
        idx.sort_unstable();
        idx
    }
}

/// Build a [`RawRow`] from alternating `index<delim>value` tokens.
///
/// An odd token count or a non-numeric index is a decode error. When an
/// index repeats, the last value wins.
pub fn index_row<'a>(row: &'a str, delimiter: &str) -> Result<RawRow<'a>, DecodeError> {
    let tokens: Vec<&str> = row.split(delimiter).collect();
    if tokens.len() % 2 != 0 {
        return Err(DecodeError::malformed(
            row,
            format!("odd token count {}", tokens.len()),
        ));
    }

    let mut fields = HashMap::with_capacity(tokens.len() / 2);
    for pair in tokens.chunks_exact(2) {
        let index = pair[0]
            .parse::<u32>()
            .map_err(|_| DecodeError::malformed(row, format!("bad field index {:?}", pair[0])))?;
        fields.insert(index, pair[1]);
    }

    Ok(RawRow {
        source: row,
        fields,
    })
}
