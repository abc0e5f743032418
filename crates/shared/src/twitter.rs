use async_trait::async_trait;
use reqwest::Client;

use crate::error::{GameError, Result};
use crate::models::Post;

pub const DEFAULT_API_BASE: &str = "https://api.twitter.com";

/// Largest page the timeline endpoint will hand back
pub const PAGE_SIZE: u32 = 200;

/// One page of an account's timeline, newest first.
///
/// `max_id` asks for tweets with an id at or below the cursor.
#[async_trait]
pub trait TimelineSource: Send + Sync {
    async fn fetch_page(&self, account: &str, max_id: Option<u64>) -> Result<Vec<Post>>;
}

pub struct TwitterClient {
    client: Client,
    api_base: String,
    bearer_token: String,
}

impl TwitterClient {
    pub fn new(api_base: impl Into<String>, bearer_token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            bearer_token: bearer_token.unwrap_or_default(),
        })
    }

    pub fn timeline_url(&self, account: &str, max_id: Option<u64>) -> String {
        let mut url = format!(
            "{}/1.1/statuses/user_timeline.json?screen_name={}&count={}",
            self.api_base,
            urlencoding::encode(account),
            PAGE_SIZE
        );
        if let Some(max_id) = max_id {
            url.push_str(&format!("&max_id={}", max_id));
        }
        url
    }
}

#[async_trait]
impl TimelineSource for TwitterClient {
    async fn fetch_page(&self, account: &str, max_id: Option<u64>) -> Result<Vec<Post>> {
        let url = self.timeline_url(account, max_id);
        tracing::debug!(%account, ?max_id, "Requesting timeline page");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.bearer_token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%account, status = status.as_u16(), "Timeline request rejected");
            return Err(GameError::Transport {
                status: status.as_u16(),
            });
        }

        let posts = response
            .json::<Vec<Post>>()
            .await
            .map_err(|e| GameError::Request(format!("Failed to parse timeline response: {}", e)))?;

        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_url_has_no_cursor() {
        let client = TwitterClient::new(DEFAULT_API_BASE, None).unwrap();
        assert_eq!(
            client.timeline_url("elonmusk", None),
            "https://api.twitter.com/1.1/statuses/user_timeline.json?screen_name=elonmusk&count=200"
        );
    }

    #[test]
    fn test_cursor_is_appended() {
        let client = TwitterClient::new("http://localhost:8080/", Some("t".into())).unwrap();
        assert_eq!(
            client.timeline_url("nasa", Some(1234)),
            "http://localhost:8080/1.1/statuses/user_timeline.json?screen_name=nasa&count=200&max_id=1234"
        );
    }
}
