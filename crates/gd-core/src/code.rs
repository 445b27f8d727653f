//! Numeric-code-to-variant mapping.
//!
//! The server encodes enumerations in two different ways:
//!
//! - **by position**: the value is an index into a fixed, ordered list
//!   of variants (level length, icon type);
//! - **by explicit code**: the value is a sparse, non-contiguous code
//!   (difficulty `0/10/20/...`, demon tier `0/3/4/5/6`).
//!
//! [`Ordinal`] and [`Coded`] give each enumeration one constructor per
//! path, both failing with [`UnknownCode`] on out-of-range input.

use crate::error::{Lookup, UnknownCode};

/// Enumerations resolved by position.
pub trait Ordinal: Copy + 'static {
    /// Name used in error messages.
    const KIND: &'static str;

    /// All variants, in wire order.
    const VARIANTS: &'static [Self];

    /// Resolve a raw ordinal.
    fn from_ordinal(value: i64) -> Result<Self, UnknownCode> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::VARIANTS.get(i).copied())
            .ok_or(UnknownCode {
                kind: Self::KIND,
                lookup: Lookup::Ordinal,
                value,
            })
    }
}

/// Enumerations resolved through an explicit code table.
pub trait Coded: Copy + Sized + 'static {
    /// Name used in error messages.
    const KIND: &'static str;

    /// `(code, variant)` pairs.
    const TABLE: &'static [(i64, Self)];

    /// Resolve a raw code.
    fn from_code(code: i64) -> Result<Self, UnknownCode> {
        Self::TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, v)| *v)
            .ok_or(UnknownCode {
                kind: Self::KIND,
                lookup: Lookup::Code,
                value: code,
            })
    }
}

/// Reverse lookup helper for [`Coded`] enumerations with `PartialEq`.
pub fn code_of<T: Coded + PartialEq>(variant: T) -> Option<i64> {
    T::TABLE
        .iter()
        .find(|(_, v)| *v == variant)
        .map(|(c, _)| *c)
}
