use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerpadError {
    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings error: {0}")]
    Settings(String),

    #[error("not logged in — run `ledgerpad login <username>` first")]
    NotLoggedIn,

    #[error("no company selected — run `ledgerpad company select <id>` first")]
    NoCompanySelected,

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LedgerpadError>;
