//! Request/response facade over a [`Transport`].

use gd_core::{LevelPage, Message, MessagePage, Song, UserPage};
use gd_protocol::{
    decode_level_search, decode_message, decode_message_list, decode_song_info,
    decode_user_search, encode_request, ApiRequest, DecodeError, Identity, LevelSearch,
    MessageList, MessageRead, SongInfo, UserSearch,
};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::transport::Transport;

/// API client. The identity is fixed at construction.
pub struct GdClient<T> {
    transport: T,
    identity: Option<Identity>,
}

impl<T: Transport> GdClient<T> {
    /// Anonymous client; authenticated endpoints fail with
    /// `EncodeError::MissingIdentity`.
    pub fn new(transport: T) -> Self {
        GdClient {
            transport,
            identity: None,
        }
    }

    pub fn with_identity(transport: T, identity: Identity) -> Self {
        GdClient {
            transport,
            identity: Some(identity),
        }
    }

    pub fn from_config(transport: T, config: &ClientConfig) -> anyhow::Result<Self> {
        Ok(GdClient {
            transport,
            identity: config.identity()?,
        })
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Encode, send and decode one request.
    pub fn execute<R, O>(
        &self,
        request: &R,
        decode: impl FnOnce(&str) -> Result<O, DecodeError>,
    ) -> Result<O, ClientError>
    where
        R: ApiRequest + ?Sized,
    {
        let encoded = encode_request(request, self.identity.as_ref())?;
        debug!(path = %encoded.path, body = %encoded.redacted_body(), "sending request");

        let response = self.transport.send(&encoded.path, &encoded.body)?;
        let response = response.trim_end_matches(['\r', '\n']);
        debug!(path = %encoded.path, bytes = response.len(), "received response");

        decode(response).map_err(|err| {
            warn!(path = %encoded.path, error = %err, "undecodable response");
            ClientError::Decode(err)
        })
    }

    pub fn search_levels(&self, search: &LevelSearch) -> Result<LevelPage, ClientError> {
        self.execute(search, decode_level_search)
    }

    pub fn search_users(&self, query: &str, page: u32) -> Result<UserPage, ClientError> {
        let request = UserSearch {
            query: query.to_string(),
            page,
        };
        self.execute(&request, decode_user_search)
    }

    /// Inbox, or outbox when `sent` is set. Requires an identity.
    pub fn messages(&self, page: u32, sent: bool) -> Result<MessagePage, ClientError> {
        self.execute(&MessageList { page, sent }, decode_message_list)
    }

    /// Full message including its body. Requires an identity.
    pub fn read_message(&self, message_id: u64, sent: bool) -> Result<Option<Message>, ClientError> {
        self.execute(&MessageRead { message_id, sent }, decode_message)
    }

    pub fn song_info(&self, song_id: u64) -> Result<Option<Song>, ClientError> {
        self.execute(&SongInfo { song_id }, decode_song_info)
    }
}
