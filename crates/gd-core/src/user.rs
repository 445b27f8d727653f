//! User preview, as returned by user searches.

use std::hash::{Hash, Hasher};

use crate::icon::IconType;
use crate::page::Page;

/// A player as listed in search results.
///
/// Two previews are the same user if and only if they share an
/// `account_id`; the other attributes are a possibly stale snapshot.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UserPreview {
    pub account_id: u64,
    pub player_id: u64,

    /// `"-"` when the server omits it.
    pub name: String,

    pub stars: u32,
    pub demons: u32,
    pub creator_points: u32,
    pub secret_coins: u32,
    pub user_coins: u32,

    // Appearance
    pub icon_id: u32,
    pub icon_type: IconType,
    pub color1: u32,
    pub color2: u32,
    pub glow: bool,
}

impl PartialEq for UserPreview {
    fn eq(&self, other: &Self) -> bool {
        self.account_id == other.account_id
    }
}

impl Eq for UserPreview {}

impl Hash for UserPreview {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.account_id.hash(state);
    }
}

pub type UserPage = Page<UserPreview>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn user(account_id: u64, stars: u32) -> UserPreview {
        UserPreview {
            account_id,
            player_id: 100,
            name: "RobTop".to_string(),
            stars,
            demons: 0,
            creator_points: 0,
            secret_coins: 0,
            user_coins: 0,
            icon_id: 1,
            icon_type: IconType::Cube,
            color1: 0,
            color2: 3,
            glow: false,
        }
    }

    #[test]
    fn equality_is_by_account_id() {
        assert_eq!(user(71, 10), user(71, 9_000));
        assert_ne!(user(71, 10), user(72, 10));
    }

    #[test]
    fn hash_agrees_with_eq() {
        let mut set = HashSet::new();
        set.insert(user(71, 10));
        set.insert(user(71, 20));
        set.insert(user(5, 20));
        assert_eq!(set.len(), 2);
    }
}
