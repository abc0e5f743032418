//! Error types for the game library

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("API request failed with status code {status}")]
    Transport { status: u16 },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("No eligible tweets for account '{account}'")]
    Selection { account: String },

    #[error("None of the accounts have any eligible tweets to play with")]
    EmptyCorpus,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Returns the process exit code for this error.
    ///
    /// Transport failures exit with the HTTP status itself; the OS keeps only
    /// the low 8 bits.
    pub fn exit_code(&self) -> i32 {
        match self {
            GameError::Transport { status } => i32::from(*status),
            GameError::Validation(_) => 2,
            GameError::Request(_)
            | GameError::Selection { .. }
            | GameError::EmptyCorpus
            | GameError::Io(_) => 1,
        }
    }
}

impl From<reqwest::Error> for GameError {
    fn from(err: reqwest::Error) -> Self {
        GameError::Request(err.to_string())
    }
}
