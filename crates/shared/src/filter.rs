//! Content rules deciding which tweets are fair game.
//!
//! A tweet is thrown out when it carries a link, mentions or replies to
//! someone, or is a retweet. Those give the author away too easily (or aren't
//! the author's words at all).

use crate::models::Post;

/// Returns true if the tweet should be left out of the game.
pub fn should_discard(text: &str) -> bool {
    has_link(text) || has_mention(text) || is_retweet(text)
}

/// Any occurrence of "http" counts as a link.
fn has_link(text: &str) -> bool {
    text.contains("http")
}

/// An '@' directly followed by anything but a space. A trailing '@' is not
/// followed by anything.
fn has_mention(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '@' {
            if let Some(&next) = chars.peek() {
                if next != ' ' {
                    return true;
                }
            }
        }
    }
    false
}

/// Case-insensitive "RT " prefix.
fn is_retweet(text: &str) -> bool {
    let prefix: String = text.chars().take(3).collect();
    prefix.chars().count() == 3 && prefix.to_lowercase() == "rt "
}

/// Keeps the tweets that pass every rule, preserving order.
pub fn filter_posts<I>(posts: I) -> Vec<Post>
where
    I: IntoIterator<Item = Post>,
{
    posts
        .into_iter()
        .filter(|post| !should_discard(&post.text))
        .collect()
}
