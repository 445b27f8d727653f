//! Error types for the core domain model.
//!
//! The entities themselves are plain data and cannot fail. The only
//! fallible operation in this crate is turning a raw numeric code from
//! the server into one of the enumerations, which is reported as
//! [`UnknownCode`].

use thiserror::Error;

/// A numeric code (or ordinal position) with no matching variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: no variant for {lookup} {value}")]
pub struct UnknownCode {
    /// Name of the enumeration being resolved, e.g. `"Difficulty"`.
    pub kind: &'static str,

    /// Which constructor path was used.
    pub lookup: Lookup,

    /// The offending raw value.
    pub value: i64,
}

/// The two ways a raw number maps to a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Position in the fixed ordered variant list.
    Ordinal,
    /// Explicit, possibly sparse, code table.
    Code,
}

impl std::fmt::Display for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lookup::Ordinal => write!(f, "ordinal"),
            Lookup::Code => write!(f, "code"),
        }
    }
}
