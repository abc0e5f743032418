use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Fewest accounts a game can be played with
pub const MIN_ACCOUNTS: usize = 2;
/// Largest wordbank the player may choose
pub const MAX_ACCOUNTS: usize = 4;

/// Accounts used when the player doesn't pick their own
pub const DEFAULT_ACCOUNTS: [&str; 2] = ["kanyewest", "elonmusk"];

/// A single tweet as returned by the timeline endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub text: String,
}

impl Post {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Usernames may only contain letters, digits and underscores.
pub fn is_valid_username(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// The ordered wordbank of candidate authors.
///
/// Positions are fixed once built and double as the stats slot index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountList {
    accounts: Vec<String>,
}

impl AccountList {
    pub fn new<I, S>(accounts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let accounts: Vec<String> = accounts.into_iter().map(Into::into).collect();

        if !(MIN_ACCOUNTS..=MAX_ACCOUNTS).contains(&accounts.len()) {
            return Err(GameError::Validation(format!(
                "number of twitter accounts must be in range [{}, {}], got {}",
                MIN_ACCOUNTS,
                MAX_ACCOUNTS,
                accounts.len()
            )));
        }

        for (i, name) in accounts.iter().enumerate() {
            if !is_valid_username(name) {
                return Err(GameError::Validation(format!(
                    "'{}' is not a valid username",
                    name
                )));
            }
            if accounts[..i].contains(name) {
                return Err(GameError::Validation(format!(
                    "'{}' appears more than once",
                    name
                )));
            }
        }

        Ok(Self { accounts })
    }

    pub fn default_accounts() -> Self {
        Self {
            accounts: DEFAULT_ACCOUNTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.accounts.get(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.accounts.iter().any(|a| a == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.accounts.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.accounts
    }
}

impl std::fmt::Display for AccountList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.accounts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(is_valid_username("elonmusk"));
        assert!(is_valid_username("jack_2006"));
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("bad name"));
        assert!(!is_valid_username("@handle"));
        assert!(!is_valid_username("dash-name"));
    }

    #[test]
    fn test_account_list_bounds() {
        assert!(AccountList::new(["a"]).is_err());
        assert!(AccountList::new(["a", "b"]).is_ok());
        assert!(AccountList::new(["a", "b", "c", "d"]).is_ok());
        assert!(AccountList::new(["a", "b", "c", "d", "e"]).is_err());
    }

    #[test]
    fn test_account_list_rejects_duplicates_and_invalid() {
        assert!(matches!(
            AccountList::new(["a", "a"]),
            Err(GameError::Validation(_))
        ));
        assert!(matches!(
            AccountList::new(["a", "no spaces"]),
            Err(GameError::Validation(_))
        ));
    }

    #[test]
    fn test_account_list_order_and_display() {
        let list = AccountList::new(["nasa", "bbcnews", "potus"]).unwrap();
        assert_eq!(list.get(0), Some("nasa"));
        assert_eq!(list.get(2), Some("potus"));
        assert_eq!(list.get(3), None);
        assert!(list.contains("bbcnews"));
        assert!(!list.contains("BBCNEWS"));
        assert_eq!(list.to_string(), "nasa, bbcnews, potus");
    }

    #[test]
    fn test_default_accounts() {
        let list = AccountList::default_accounts();
        assert_eq!(list.as_slice(), &["kanyewest", "elonmusk"]);
    }

    #[test]
    fn test_post_ignores_extra_fields() {
        let json = r#"{"id": 42, "text": "hello", "created_at": "Wed Oct 10", "lang": "en"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post, Post::new(42, "hello"));
    }
}
