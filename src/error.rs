use thiserror::Error;

use crate::entities::Position;

/// Every failure the crate can report.
#[derive(Error, Debug)]
pub enum HackerError {
    /// No entity stored at the position.
    #[error("no entity at {0}")]
    NotFound(Position),

    /// Symbol does not name an entity kind.
    #[error("unknown entity symbol: {0:?}")]
    UnknownSymbol(char),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
