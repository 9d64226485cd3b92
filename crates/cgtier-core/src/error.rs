use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Song with ID {0} not found in songs data")]
    SongNotFound(u32),

    #[error("Chart for song {song_id} has no in-game ID below {threshold}")]
    NoMainlineInGameId { song_id: u32, threshold: u32 },

    #[error("Tier list not found: {play_style} {name}")]
    TierListNotFound { play_style: String, name: String },

    #[error("Tier not found: {0}")]
    TierNotFound(String),

    #[error("Playlists are not supported on this page")]
    PlaylistsUnsupported,

    #[error("A playlist run is already in progress")]
    RunInProgress,

    #[error("Unknown template key: {0}")]
    UnknownTemplateKey(String),

    #[error("Unterminated template tag at byte {0}")]
    UnterminatedTemplateTag(usize),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        let message = match &e {
            ureq::Error::StatusCode(code) => format!("HTTP {} error", code),
            ureq::Error::Timeout(_) => format!("Request timed out: {}", e),
            ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => {
                format!("Connection failed: {}", e)
            }
            _ => format!("HTTP error: {}", e),
        };
        Error::Http(message)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.to_string())
    }
}
