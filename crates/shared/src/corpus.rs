use std::collections::HashMap;
use std::time::Duration;

use crate::error::{GameError, Result};
use crate::fetcher::PostFetcher;
use crate::models::{AccountList, Post};
use crate::twitter::TimelineSource;

/// Every account's playable tweets. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    posts: HashMap<String, Vec<Post>>,
}

impl Corpus {
    /// Fetch tweets for each account in order, one account at a time.
    pub async fn build<S>(accounts: &AccountList, source: &S, page_delay: Duration) -> Result<Self>
    where
        S: TimelineSource + ?Sized,
    {
        let fetcher = PostFetcher::new(source).with_page_delay(page_delay);
        let mut posts = HashMap::with_capacity(accounts.len());

        for account in accounts.iter() {
            let fetched = fetcher.fetch(account).await?;
            posts.insert(account.to_string(), fetched);
        }

        Ok(Self { posts })
    }

    pub fn from_posts(posts: HashMap<String, Vec<Post>>) -> Self {
        Self { posts }
    }

    pub fn posts_for(&self, account: &str) -> &[Post] {
        self.posts.get(account).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_posts(&self) -> usize {
        self.posts.values().map(Vec::len).sum()
    }

    /// Accounts from `accounts` that ended up with nothing to play.
    pub fn empty_accounts<'a>(&self, accounts: &'a AccountList) -> Vec<&'a str> {
        accounts
            .iter()
            .filter(|a| self.posts_for(a).is_empty())
            .collect()
    }

    /// At least one account needs a tweet or no round can ever be drawn.
    pub fn ensure_playable(&self, accounts: &AccountList) -> Result<()> {
        if accounts.iter().all(|a| self.posts_for(a).is_empty()) {
            return Err(GameError::EmptyCorpus);
        }
        Ok(())
    }
}
