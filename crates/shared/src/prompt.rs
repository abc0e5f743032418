use std::io::{BufRead, Write};

use crate::error::Result;
use crate::models::{is_valid_username, AccountList};

/// Line-based prompts over any reader/writer pair.
///
/// Every read returns `None` once input is exhausted so callers can wind down
/// instead of spinning on an empty stream.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `message` (no newline) and read one line without its terminator.
    pub fn ask(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Ask for `count` distinct usernames.
    pub fn ask_accounts(&mut self, count: usize) -> Result<Option<Vec<String>>> {
        let mut accounts: Vec<String> = Vec::with_capacity(count);

        for i in 0..count {
            let mut answer = self.ask(&format!("Enter the username for public figure #{}: ", i + 1))?;
            loop {
                match answer {
                    None => return Ok(None),
                    Some(name) if is_valid_username(&name) && !accounts.contains(&name) => {
                        accounts.push(name);
                        break;
                    }
                    Some(_) => {
                        answer = self.ask("That account is not valid, please enter another: ")?;
                    }
                }
            }
        }

        writeln!(self.output)?;
        Ok(Some(accounts))
    }

    /// Ask who wrote the tweet until the answer is one of `accounts`.
    pub fn ask_guess(&mut self, accounts: &AccountList) -> Result<Option<String>> {
        let mut answer = self.ask("Who do you think tweeted this? ")?;
        loop {
            match answer {
                None => return Ok(None),
                Some(guess) if accounts.contains(&guess) => return Ok(Some(guess)),
                Some(guess) => {
                    answer = self.ask(&format!("\"{}\" is not an option, guess again: ", guess))?;
                }
            }
        }
    }

    /// Only "y" or "Y" means another round.
    pub fn ask_continue(&mut self) -> Result<bool> {
        let answer = self.ask("Do you want to play another round (y/n)? ")?;
        writeln!(self.output)?;
        Ok(matches!(answer.as_deref(), Some("y") | Some("Y")))
    }
}
