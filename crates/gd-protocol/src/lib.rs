//! gd-protocol
//!
//! Wire-level encoding/decoding for the Geometry Dash API.
//!
//! Responses are flat strings with nested delimiters; this crate turns
//! them into `gd_core` entities, and turns typed requests into POST
//! bodies. It performs no I/O.
//!
//! - [`wire_types`]    : delimiters, sentinels, globals, endpoints
//! - [`tokenizer`]     : sections, rows, position-indexed raw rows
//! - [`resolver`]      : auxiliary lookup tables (creators, songs, page info)
//! - [`schema`]        : positional field layouts and parsing rules
//! - [`level_codec`], [`user_codec`], [`message_codec`], [`song_codec`]
//!                       : per-endpoint entity assembly
//! - [`params`], [`requests`] : request encoding
//! - [`cipher`]        : `gjp` and message text obfuscation

pub mod cipher;
pub mod error;
pub mod wire_types;

pub mod resolver;
pub mod schema;
pub mod tokenizer;

pub mod level_codec;
pub mod message_codec;
pub mod song_codec;
pub mod user_codec;

pub mod params;
pub mod requests;

pub use error::{CipherError, DecodeError, EncodeError};
pub use wire_types::Endpoint;

pub use level_codec::decode_level_search;
pub use message_codec::{decode_message, decode_message_list};
pub use song_codec::decode_song_info;
pub use user_codec::decode_user_search;

pub use params::{encode, merge_params, EncodedRequest, Identity, ParamValue, Params};
pub use requests::{
    encode_request, ApiRequest, LevelFilters, LevelSearch, MessageList, MessageRead, SongInfo,
    UserSearch,
};
