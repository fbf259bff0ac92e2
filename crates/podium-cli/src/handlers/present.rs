use crate::presentation::renderers::tui::{self, TuiOptions};
use anyhow::{Result, bail};
use podium_core::settings::resolve_settings_path;
use is_terminal::IsTerminal;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_SETTLE_MS: u64 = 300;

pub fn handle(
    deck_path: Option<&Path>,
    settle_ms: u64,
    no_mouse: bool,
    config: Option<&str>,
) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("presentation mode needs a terminal; use `podium transcript` for plain output");
    }

    let deck = super::load_deck(deck_path)?;
    let settings_path = resolve_settings_path(config)?;

    tui::run(
        &deck,
        TuiOptions {
            settle: Duration::from_millis(settle_ms),
            mouse: !no_mouse,
            settings_path,
        },
    )
}
