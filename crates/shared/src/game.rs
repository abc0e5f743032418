//! The interactive round loop.
//!
//! Each round moves through `AwaitingGuess -> Scored -> AwaitingContinue` and
//! then either starts over or ends in `Terminated`.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::corpus::Corpus;
use crate::error::{GameError, Result};
use crate::models::AccountList;
use crate::prompt::Prompter;
use crate::selector;
use crate::stats::Stats;

/// What happened in a single scored round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub index: usize,
    pub account: String,
    pub text: String,
    pub guess: String,
    pub correct: bool,
}

#[derive(Debug)]
enum GameState {
    AwaitingGuess,
    Scored(RoundOutcome),
    AwaitingContinue,
    Terminated,
}

pub struct GameLoop<'a, R, W, G> {
    corpus: &'a Corpus,
    accounts: &'a AccountList,
    prompter: Prompter<R, W>,
    rng: G,
    stats: Stats,
}

impl<'a, R, W, G> GameLoop<'a, R, W, G>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    pub fn new(corpus: &'a Corpus, accounts: &'a AccountList, prompter: Prompter<R, W>, rng: G) -> Self {
        Self {
            corpus,
            accounts,
            prompter,
            rng,
            stats: Stats::new(accounts.len()),
        }
    }

    /// Play until the player declines another round or input runs out.
    pub fn run(mut self) -> Result<(Stats, Prompter<R, W>)> {
        self.corpus.ensure_playable(self.accounts)?;

        let mut state = GameState::AwaitingGuess;
        loop {
            state = match state {
                GameState::AwaitingGuess => match self.play_round()? {
                    Some(outcome) => GameState::Scored(outcome),
                    None => GameState::Terminated,
                },
                GameState::Scored(outcome) => {
                    self.score(&outcome)?;
                    GameState::AwaitingContinue
                }
                GameState::AwaitingContinue => {
                    if self.prompter.ask_continue()? {
                        GameState::AwaitingGuess
                    } else {
                        GameState::Terminated
                    }
                }
                GameState::Terminated => break,
            };
        }

        tracing::info!(
            rounds = self.stats.total_rounds,
            correct = self.stats.total_correct,
            "Game over"
        );
        Ok((self.stats, self.prompter))
    }

    /// Draw a tweet, show it and collect a valid guess.
    fn play_round(&mut self) -> Result<Option<RoundOutcome>> {
        let round = loop {
            match selector::pick(self.corpus, self.accounts, &mut self.rng) {
                Ok(round) => break round,
                Err(GameError::Selection { account }) => {
                    tracing::warn!(%account, "No eligible tweets, drawing again");
                }
                Err(e) => return Err(e),
            }
        };

        let out = self.prompter.output();
        writeln!(out, "Here is the tweet:")?;
        writeln!(out, "{}", round.post.text)?;
        writeln!(out)?;

        let Some(guess) = self.prompter.ask_guess(self.accounts)? else {
            return Ok(None);
        };

        Ok(Some(RoundOutcome {
            index: round.index,
            account: round.account.to_string(),
            text: round.post.text.clone(),
            correct: guess == round.account,
            guess,
        }))
    }

    fn score(&mut self, outcome: &RoundOutcome) -> Result<()> {
        self.stats.record_round(outcome.index, outcome.correct);
        tracing::debug!(
            account = %outcome.account,
            guess = %outcome.guess,
            correct = outcome.correct,
            "Round scored"
        );

        let out = self.prompter.output();
        if outcome.correct {
            writeln!(out, "You're correct!")?;
        } else {
            writeln!(out, "Not quite! That tweet was by {}.", outcome.account)?;
        }
        Ok(())
    }
}

/// The banner shown before tweets are fetched.
pub fn introduction(accounts: &AccountList) -> String {
    format!(
        "\n\
         {:>50}\n\
         You will be given the text of a Tweet and your job is to guess who sent out that Tweet.\n\
         You will have the opportunity to quit the game after every round you play.\n\
         After you decide to quit, your stats will be displayed so you can see how well you did.\n\
         \n\
         Your Tweeter wordbank is: {}\n\
         \n\
         Fetching Tweets, this may take a minute...\n",
        "Welcome to Guess That Tweeter!", accounts
    )
}
