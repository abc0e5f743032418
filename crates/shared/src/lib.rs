// Public modules
pub mod config;
pub mod corpus;
pub mod error;
pub mod fetcher;
pub mod filter;
pub mod game;
pub mod logging;
pub mod mock;
pub mod models;
pub mod prompt;
pub mod selector;
pub mod stats;
pub mod twitter;

// Re-export commonly used types
pub use config::Config;
pub use corpus::Corpus;
pub use error::{GameError, Result};
pub use fetcher::PostFetcher;
pub use game::{introduction, GameLoop, RoundOutcome};
pub use models::{AccountList, Post, MAX_ACCOUNTS, MIN_ACCOUNTS};
pub use prompt::Prompter;
pub use stats::{Stats, StatsReport};
pub use twitter::{TimelineSource, TwitterClient};
