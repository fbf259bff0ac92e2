use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "podium")]
#[command(about = "Present slide decks in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file override (defaults to the podium config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive presentation (the default when no command is given)
    Present {
        /// Deck file (TOML); the built-in deck when omitted
        deck: Option<PathBuf>,

        /// Settle delay between accepted transitions, in milliseconds
        #[arg(long, default_value = "300")]
        settle_ms: u64,

        /// Disable mouse capture (sidebar clicks and swipe gestures)
        #[arg(long)]
        no_mouse: bool,
    },

    /// Validate a deck file and summarize its sections
    Check {
        /// Deck file (TOML)
        deck: PathBuf,
    },

    /// Print the full speaker transcript of a deck to stdout
    Transcript {
        /// Deck file (TOML); the built-in deck when omitted
        deck: Option<PathBuf>,
    },
}
