use rand::Rng;

use crate::corpus::Corpus;
use crate::error::{GameError, Result};
use crate::models::{AccountList, Post};

/// One drawn round: the account's position, its name and the tweet to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round<'a> {
    pub index: usize,
    pub account: &'a str,
    pub post: &'a Post,
}

/// Draw an account uniformly, then one of its tweets uniformly.
///
/// Accounts are equally likely no matter how many tweets each has.
pub fn pick<'a, R: Rng + ?Sized>(
    corpus: &'a Corpus,
    accounts: &'a AccountList,
    rng: &mut R,
) -> Result<Round<'a>> {
    if accounts.is_empty() {
        return Err(GameError::EmptyCorpus);
    }

    let index = rng.gen_range(0..accounts.len());
    let account = accounts.get(index).ok_or(GameError::EmptyCorpus)?;

    let posts = corpus.posts_for(account);
    if posts.is_empty() {
        return Err(GameError::Selection {
            account: account.to_string(),
        });
    }

    let post = &posts[rng.gen_range(0..posts.len())];
    Ok(Round {
        index,
        account,
        post,
    })
}
