//! Private messages.

use crate::page::Page;

/// A private message, either from the inbox listing or a full read.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Message {
    pub id: u64,

    // Other party
    pub sender_account_id: u64,
    pub sender_player_id: u64,
    pub sender_name: String,

    pub subject: String,

    /// Only present when the message was fetched individually.
    pub body: Option<String>,

    /// Relative age as formatted by the server, e.g. `"5 hours"`.
    pub age: String,

    pub read: bool,

    /// `true` when listing sent messages.
    pub outgoing: bool,
}

pub type MessagePage = Page<Message>;
