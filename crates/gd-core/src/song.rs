//! Songs attached to levels.
//!
//! A level either uses one of the stock tracks shipped with the game
//! (referenced by a small inline code) or a custom uploaded song
//! (referenced by ID and described in an auxiliary section of the same
//! response). [`SongRef`] captures the outcome of that resolution,
//! including the case where the reference dangles.

/// A song record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Song {
    /// Song ID. For stock tracks this is the inline track code.
    pub id: u64,
    pub title: String,
    pub author: String,

    /// Artist ID on the upload site; `0` for stock tracks.
    pub artist_id: u64,

    /// File size as reported by the server (e.g. `"9.46"` MB), `"-"` when unknown.
    pub size: String,

    /// Decoded download URL. Stock tracks have none.
    pub download_url: Option<String>,

    /// `true` for uploaded songs, `false` for stock tracks.
    pub custom: bool,
}

/// How a level's song field resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SongRef {
    /// A stock track or a custom song found in the response.
    Resolved(Song),

    /// The level references a song that could not be found.
    ///
    /// `song_id` is the custom song ID when one was referenced, or the
    /// inline stock code when that code is outside the stock table.
    Unknown { song_id: u64 },
}

impl SongRef {
    pub fn song(&self) -> Option<&Song> {
        match self {
            SongRef::Resolved(s) => Some(s),
            SongRef::Unknown { .. } => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, SongRef::Unknown { .. })
    }
}

/// `(title, author)` for each stock track, indexed by inline code.
const STOCK_TRACKS: &[(&str, &str)] = &[
    ("Stereo Madness", "ForeverBound"),
    ("Back On Track", "DJVI"),
    ("Polargeist", "Step"),
    ("Dry Out", "DJVI"),
    ("Base After Base", "DJVI"),
    ("Can't Let Go", "DJVI"),
    ("Jumper", "Waterflame"),
    ("Time Machine", "Waterflame"),
    ("Cycles", "DJVI"),
    ("xStep", "DJVI"),
    ("Clutterfunk", "Waterflame"),
    ("Theory of Everything", "DJ-Nate"),
    ("Electroman Adventures", "Waterflame"),
    ("Clubstep", "DJ-Nate"),
    ("Electrodynamix", "DJ-Nate"),
    ("Hexagon Force", "Waterflame"),
    ("Blast Processing", "Waterflame"),
    ("Theory of Everything 2", "DJ-Nate"),
    ("Geometrical Dominator", "Waterflame"),
    ("Deadlocked", "F-777"),
    ("Fingerdash", "MDK"),
];

/// Look up a stock track by its inline code.
pub fn stock_track(code: u64) -> Option<Song> {
    let idx = usize::try_from(code).ok()?;
    let (title, author) = STOCK_TRACKS.get(idx)?;
    Some(Song {
        id: code,
        title: (*title).to_string(),
        author: (*author).to_string(),
        artist_id: 0,
        size: "-".to_string(),
        download_url: None,
        custom: false,
    })
}

/// Number of stock tracks known to this client.
pub fn stock_track_count() -> usize {
    STOCK_TRACKS.len()
}
