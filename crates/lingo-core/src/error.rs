use thiserror::Error;

#[derive(Error, Debug)]
pub enum LingoError {
    #[error("no language profile is loaded")]
    NeedsProfile,

    #[error("duplicate language profile: {0}")]
    DuplicateLanguage(String),

    #[error("need at least 2 language profiles, got {0}")]
    InsufficientProfiles(usize),

    #[error("invalid prior map: {0}")]
    InvalidPrior(String),

    #[error("no features in text")]
    CannotDetect,

    #[error("malformed profile data: {0}")]
    ImportFormat(#[from] serde_json::Error),

    #[error("profile I/O error: {0}")]
    ImportIo(#[from] std::io::Error),
}

pub type LingoResult<T> = Result<T, LingoError>;
