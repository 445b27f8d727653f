//! Level length, encoded by position (`0..=4`).

use crate::code::Ordinal;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Length {
    Tiny,
    Short,
    Medium,
    Long,
    ExtraLong,
}

impl Ordinal for Length {
    const KIND: &'static str = "Length";
    const VARIANTS: &'static [Self] = &[
        Length::Tiny,
        Length::Short,
        Length::Medium,
        Length::Long,
        Length::ExtraLong,
    ];
}

impl Length {
    /// Position on the wire; also used by level search filters.
    pub fn ordinal(self) -> i64 {
        self as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_bounds() {
        assert_eq!(Length::from_ordinal(0), Ok(Length::Tiny));
        assert_eq!(Length::from_ordinal(4), Ok(Length::ExtraLong));
        assert!(Length::from_ordinal(5).is_err());
        assert!(Length::from_ordinal(-1).is_err());
        assert_eq!(Length::Long.ordinal(), 3);
    }
}
