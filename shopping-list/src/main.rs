//! Interactive shopping list on stdin/stdout.
//!
//! Each input line is one interaction; after every line the whole list is
//! rendered again. Logs go to stderr.

use anyhow::Context;
use shopping_list::config::AppConfig;
use shopping_list::events::HELP;
use shopping_list::{Command, ListEnvironment, ListState, ShoppingList};
use shopping_list_core::environment::UuidGenerator;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(format = ?config.format, seed = config.seed_sample, "Starting shopping list");

    let ids = Arc::new(UuidGenerator);
    let state = if config.seed_sample {
        ListState::sample(ids.as_ref())
    } else {
        ListState::new()
    };
    let list = ShoppingList::new(state, ListEnvironment::new(ids), config.format);

    let mut stdout = tokio::io::stdout();
    stdout.write_all(list.render().await.as_bytes()).await?;
    stdout.flush().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let output = match line.parse::<Command>() {
            Ok(Command::Event(event)) => list.dispatch(event).await?,
            Ok(Command::Show) => list.render().await,
            Ok(Command::Help) => HELP.to_string(),
            Ok(Command::Quit) => break,
            Err(error) => {
                eprintln!("{error}");
                continue;
            },
        };
        stdout.write_all(output.as_bytes()).await?;
        stdout.flush().await?;
    }

    list.store().shutdown();
    tracing::info!("Bye");
    Ok(())
}
