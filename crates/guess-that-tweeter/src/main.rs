use anyhow::{Context, Result};
use clap::Parser;
use shared::logging::LoggingConfig;
use shared::{
    introduction, AccountList, Config, Corpus, GameError, GameLoop, Prompter, TwitterClient,
};
use std::io::{self as stdio, BufRead, Write};

#[derive(Parser)]
#[command(name = "guess-that-tweeter")]
#[command(about = "Guess which public figure sent out a random tweet")]
struct Args {
    /// Choose your own wordbank of this many accounts (2-4) instead of the default pair
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(2..=4))]
    choose: Option<u8>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("\nError: {:#}", e);
        let code = e
            .downcast_ref::<GameError>()
            .map(GameError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = Config::from_env()?;
    LoggingConfig::new(config.log_format, config.log_level.clone(), args.verbose).init();

    if config.bearer_token.is_none() {
        tracing::warn!("BEARER_TOKEN is not set; the Twitter API will most likely reject every request");
    }

    let mut prompter = Prompter::new(stdio::stdin().lock(), stdio::stdout());

    let accounts = match args.choose {
        Some(count) => choose_accounts(&mut prompter, usize::from(count))?,
        None => AccountList::default_accounts(),
    };
    tracing::debug!(%accounts, "Wordbank selected");

    write!(prompter.output(), "{}", introduction(&accounts))?;
    prompter.output().flush()?;

    let client = TwitterClient::new(config.api_base.clone(), config.bearer_token.clone())?;
    let corpus = Corpus::build(&accounts, &client, config.page_delay).await?;

    for account in corpus.empty_accounts(&accounts) {
        tracing::warn!(%account, "Account has no eligible tweets and will never come up");
        writeln!(
            prompter.output(),
            "Note: no usable tweets found for {}, it won't come up this game.",
            account
        )?;
    }
    writeln!(prompter.output())?;

    let game = GameLoop::new(&corpus, &accounts, prompter, rand::thread_rng());
    let (stats, mut prompter) = game.run()?;

    write!(prompter.output(), "{}", stats.report(&accounts))?;
    prompter.output().flush().context("Failed to write game statistics")?;

    Ok(())
}

fn choose_accounts<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    count: usize,
) -> Result<AccountList> {
    let names = prompter
        .ask_accounts(count)?
        .ok_or_else(|| GameError::Validation("no usernames were entered".to_string()))?;

    Ok(AccountList::new(names)?)
}
