use super::args::{Cli, Commands};
use super::handlers;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();

    match cli.command {
        None => handlers::present::handle(None, handlers::present::DEFAULT_SETTLE_MS, false, config),

        Some(Commands::Present {
            deck,
            settle_ms,
            no_mouse,
        }) => handlers::present::handle(deck.as_deref(), settle_ms, no_mouse, config),

        Some(Commands::Check { deck }) => handlers::check::handle(&deck),

        Some(Commands::Transcript { deck }) => handlers::transcript::handle(deck.as_deref()),
    }
}
