//! Scripted timeline source for tests
//!
//! Serves pre-loaded pages per account in order and records every request, so
//! pagination can be checked without network access.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::error::{GameError, Result};
use crate::models::Post;
use crate::twitter::TimelineSource;

/// A request seen by the mock: account and cursor.
pub type RecordedCall = (String, Option<u64>);

#[derive(Default)]
pub struct ScriptedTimeline {
    pages: Mutex<HashMap<String, VecDeque<Result<Vec<Post>>>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a page for `account`. Pages are served in the order queued.
    pub fn with_page(self, account: &str, page: Vec<Post>) -> Self {
        self.push(account, Ok(page));
        self
    }

    /// Queue a non-success response for `account`.
    pub fn with_status(self, account: &str, status: u16) -> Self {
        self.push(account, Err(GameError::Transport { status }));
        self
    }

    fn push(&self, account: &str, response: Result<Vec<Post>>) {
        self.pages
            .lock()
            .unwrap()
            .entry(account.to_string())
            .or_default()
            .push_back(response);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TimelineSource for ScriptedTimeline {
    async fn fetch_page(&self, account: &str, max_id: Option<u64>) -> Result<Vec<Post>> {
        self.calls
            .lock()
            .unwrap()
            .push((account.to_string(), max_id));

        // Once the script runs out the account has nothing older to give
        self.pages
            .lock()
            .unwrap()
            .get_mut(account)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
