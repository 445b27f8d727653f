//! Low-level wire constants.
//!
//! This module defines:
//! - The delimiters of the nested text format (bit-exact with the server).
//! - Sentinel bodies meaning "no results".
//! - Global request parameters and the authentication parameter names.
//! - The endpoints this client speaks to.
//!
//! Response layout, outermost level first:
//!
//! ```text
//! section        '#'    primary rows # aux table 1 # aux table 2 # page info
//! row            '|'    one record per row inside a section
//! field          ':'    index:value:index:value ...
//! rich sub-row   '~:~'  records inside the song section
//! rich sub-field '~|~'  index~|~value~|~... inside a rich sub-row
//! ```

pub const SECTION_DELIMITER: &str = "#";
pub const ROW_DELIMITER: &str = "|";
pub const FIELD_DELIMITER: &str = ":";
pub const RICH_ROW_DELIMITER: &str = "~:~";
pub const RICH_FIELD_DELIMITER: &str = "~|~";

/// Generic "nothing found" body.
pub const SENTINEL_NOT_FOUND: &str = "-1";

/// Returned by some endpoints for banned / forbidden content.
pub const SENTINEL_FORBIDDEN: &str = "-2";

/// Placeholder for display names that cannot be resolved.
pub const NAME_PLACEHOLDER: &str = "-";

/// Protocol/client version constants merged into every request.
///
/// Order here is the order they appear in the request body.
pub const GLOBAL_PARAMS: &[(&str, &str)] = &[
    ("gameVersion", "21"),
    ("binaryVersion", "35"),
    ("secret", "Wmfd2893gb7"),
];

/// Name of the account identifier parameter on authenticated requests.
pub const PARAM_ACCOUNT_ID: &str = "accountID";

/// Name of the password-derived token parameter on authenticated requests.
pub const PARAM_GJP: &str = "gjp";

/// XOR key used when deriving `gjp` from a password.
pub const GJP_XOR_KEY: &[u8] = b"37526";

/// XOR key applied to private message bodies.
pub const MESSAGE_XOR_KEY: &[u8] = b"14251";

/// A server endpoint and how to interpret its degenerate responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Path relative to the API host, e.g. `/getGJLevels21.php`.
    pub path: &'static str,

    /// Whether `accountID`/`gjp` must be sent.
    pub requires_auth: bool,

    /// Bodies meaning "no data" for this endpoint.
    pub sentinels: &'static [&'static str],
}

impl Endpoint {
    pub fn is_sentinel(&self, body: &str) -> bool {
        self.sentinels.contains(&body)
    }
}

pub const LEVEL_SEARCH: Endpoint = Endpoint {
    path: "/getGJLevels21.php",
    requires_auth: false,
    sentinels: &[SENTINEL_NOT_FOUND],
};

pub const USER_SEARCH: Endpoint = Endpoint {
    path: "/getGJUsers20.php",
    requires_auth: false,
    sentinels: &[SENTINEL_NOT_FOUND],
};

pub const MESSAGE_LIST: Endpoint = Endpoint {
    path: "/getGJMessages20.php",
    requires_auth: true,
    sentinels: &[SENTINEL_NOT_FOUND, SENTINEL_FORBIDDEN],
};

pub const MESSAGE_READ: Endpoint = Endpoint {
    path: "/downloadGJMessage20.php",
    requires_auth: true,
    sentinels: &[SENTINEL_NOT_FOUND],
};

pub const SONG_INFO: Endpoint = Endpoint {
    path: "/getGJSongInfo.php",
    requires_auth: false,
    sentinels: &[SENTINEL_NOT_FOUND, SENTINEL_FORBIDDEN],
};
