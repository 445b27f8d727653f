//! Typed requests, one per endpoint.
//!
//! Each request knows its [`Endpoint`] and produces its logical
//! [`Params`]; [`encode_request`] adds globals and authentication.

use gd_core::{demon_filter_code, DemonDifficulty, DifficultyFilter, Length, SearchStrategy};

use crate::error::EncodeError;
use crate::params::{encode, EncodedRequest, Identity, Params};
use crate::wire_types::{Endpoint, LEVEL_SEARCH, MESSAGE_LIST, MESSAGE_READ, SONG_INFO, USER_SEARCH};

/// Something that can be sent to the API.
pub trait ApiRequest {
    fn endpoint(&self) -> Endpoint;
    fn params(&self) -> Result<Params, EncodeError>;
}

/// Encode `request`, authenticating with `identity` if its endpoint needs it.
pub fn encode_request<R: ApiRequest + ?Sized>(
    request: &R,
    identity: Option<&Identity>,
) -> Result<EncodedRequest, EncodeError> {
    let endpoint = request.endpoint();
    encode(
        endpoint.path,
        &request.params()?,
        endpoint.requires_auth,
        identity,
    )
}

/// Boolean toggles of a level search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelFilters {
    pub uncompleted: bool,
    pub only_completed: bool,
    pub featured: bool,
    pub original: bool,
    pub two_player: bool,
    pub coins: bool,
    pub epic: bool,
    pub star: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelSearch {
    pub strategy: SearchStrategy,
    pub query: String,
    pub difficulties: Vec<DifficultyFilter>,
    pub lengths: Vec<Length>,
    pub page: u32,
    pub filters: LevelFilters,
    pub demon_filter: Option<DemonDifficulty>,
}

impl LevelSearch {
    /// A regular keyword search.
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        LevelSearch {
            query: query.into(),
            page,
            ..LevelSearch::default()
        }
    }
}

/// Comma-joined ascending codes, or `-` for "any".
fn code_list(mut codes: Vec<i64>) -> String {
    if codes.is_empty() {
        return "-".to_string();
    }
    codes.sort_unstable();
    codes.dedup();
    codes
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl ApiRequest for LevelSearch {
    fn endpoint(&self) -> Endpoint {
        LEVEL_SEARCH
    }

    fn params(&self) -> Result<Params, EncodeError> {
        let f = &self.filters;
        let mut p = Params::new();
        p.plain("type", self.strategy.code())?
            .text("str", self.query.as_str())?
            .plain("diff", code_list(self.difficulties.iter().map(|d| d.code()).collect()))?
            .plain("len", code_list(self.lengths.iter().map(|l| l.ordinal()).collect()))?
            .plain("page", self.page)?
            .plain("total", 0)?
            .flag("uncompleted", f.uncompleted)?
            .flag("onlyCompleted", f.only_completed)?
            .flag("featured", f.featured)?
            .flag("original", f.original)?
            .flag("twoPlayer", f.two_player)?
            .flag("coins", f.coins)?
            .flag("epic", f.epic)?
            .flag("star", f.star)?
            .plain("demonFilter", self.demon_filter.map(demon_filter_code).unwrap_or(0))?;
        Ok(p)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearch {
    pub query: String,
    pub page: u32,
}

impl ApiRequest for UserSearch {
    fn endpoint(&self) -> Endpoint {
        USER_SEARCH
    }

    fn params(&self) -> Result<Params, EncodeError> {
        let mut p = Params::new();
        p.text("str", self.query.as_str())?
            .plain("page", self.page)?
            .plain("total", 0)?;
        Ok(p)
    }
}

/// Inbox (or, with `sent`, outbox) listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageList {
    pub page: u32,
    pub sent: bool,
}

impl ApiRequest for MessageList {
    fn endpoint(&self) -> Endpoint {
        MESSAGE_LIST
    }

    fn params(&self) -> Result<Params, EncodeError> {
        let mut p = Params::new();
        p.plain("page", self.page)?
            .plain("total", 0)?
            .flag("getSent", self.sent)?;
        Ok(p)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageRead {
    pub message_id: u64,
    pub sent: bool,
}

impl ApiRequest for MessageRead {
    fn endpoint(&self) -> Endpoint {
        MESSAGE_READ
    }

    fn params(&self) -> Result<Params, EncodeError> {
        let mut p = Params::new();
        p.plain("messageID", self.message_id)?
            .flag("isSender", self.sent)?;
        Ok(p)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongInfo {
    pub song_id: u64,
}

impl ApiRequest for SongInfo {
    fn endpoint(&self) -> Endpoint {
        SONG_INFO
    }

    fn params(&self) -> Result<Params, EncodeError> {
        let mut p = Params::new();
        p.plain("songID", self.song_id)?;
        Ok(p)
    }
}
