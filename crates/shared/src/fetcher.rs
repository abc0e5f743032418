use std::collections::HashSet;
use std::time::Duration;

use crate::error::Result;
use crate::filter;
use crate::models::Post;
use crate::twitter::TimelineSource;

/// Walks an account's timeline page by page, keeping only playable tweets.
pub struct PostFetcher<'a, S: TimelineSource + ?Sized> {
    source: &'a S,
    page_delay: Duration,
}

impl<'a, S: TimelineSource + ?Sized> PostFetcher<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            page_delay: Duration::ZERO,
        }
    }

    /// Pause between page requests.
    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    /// Fetch every tweet the source will give for `account`.
    ///
    /// Stops at the first empty page. Any failed request aborts the whole
    /// fetch.
    pub async fn fetch(&self, account: &str) -> Result<Vec<Post>> {
        let mut kept = Vec::new();
        let mut seen = HashSet::new();
        let mut max_id = None;
        let mut pages = 0usize;

        loop {
            let page = self.source.fetch_page(account, max_id).await?;
            pages += 1;

            if page.is_empty() {
                break;
            }

            // Cursor comes from the raw page so discarded tweets still advance it
            let oldest = page.iter().map(|p| p.id).min();
            let raw_count = page.len();

            let fresh: Vec<Post> = filter::filter_posts(page)
                .into_iter()
                .filter(|p| seen.insert(p.id))
                .collect();

            tracing::debug!(
                %account,
                page = pages,
                raw = raw_count,
                kept = fresh.len(),
                "Fetched timeline page"
            );
            kept.extend(fresh);

            match oldest.and_then(|id| id.checked_sub(1)) {
                Some(next) => max_id = Some(next),
                None => break,
            }

            if !self.page_delay.is_zero() {
                tokio::time::sleep(self.page_delay).await;
            }
        }

        tracing::info!(%account, pages, tweets = kept.len(), "Finished fetching timeline");
        Ok(kept)
    }
}
