pub mod check;
pub mod present;
pub mod transcript;

use anyhow::{Context, Result};
use podium_core::Deck;
use std::path::Path;

/// Deck shipped with the binary, used when no deck file is given.
pub(crate) const DEFAULT_DECK: &str = include_str!("../../assets/default_deck.toml");

/// Load a deck from a file, falling back to the built-in deck.
pub(crate) fn load_deck(path: Option<&Path>) -> Result<Deck> {
    match path {
        Some(path) => {
            Deck::load(path).with_context(|| format!("failed to load deck {}", path.display()))
        }
        None => Deck::from_toml(DEFAULT_DECK).context("built-in deck is invalid"),
    }
}
