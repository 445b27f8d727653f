//! Player icon (game mode) shown next to a user, by position.

use crate::code::Ordinal;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IconType {
    Cube,
    Ship,
    Ball,
    Ufo,
    Wave,
    Robot,
    Spider,
}

impl Ordinal for IconType {
    const KIND: &'static str = "IconType";
    const VARIANTS: &'static [Self] = &[
        IconType::Cube,
        IconType::Ship,
        IconType::Ball,
        IconType::Ufo,
        IconType::Wave,
        IconType::Robot,
        IconType::Spider,
    ];
}
