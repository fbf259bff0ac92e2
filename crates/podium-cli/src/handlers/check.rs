use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use podium_core::{Block, Deck};
use std::path::Path;

pub fn handle(deck_path: &Path) -> Result<()> {
    let deck = Deck::load(deck_path)
        .with_context(|| format!("failed to load deck {}", deck_path.display()))?;

    println!("{}", deck.title.bold());
    if let Some(subtitle) = &deck.subtitle {
        println!("{}", subtitle.dimmed());
    }
    println!();

    for (idx, section) in deck.sections.iter().enumerate() {
        let number = idx + 1;
        let blocks = section.blocks.len();
        let hands_on = section.blocks.iter().filter(|b| b.hands_on()).count();
        let code = section
            .blocks
            .iter()
            .filter(|b| matches!(b, Block::Code { .. }))
            .count();

        let mut notes = Vec::new();
        if code > 0 {
            notes.push(format!("{} code", code));
        }
        if hands_on > 0 {
            notes.push(format!("{} hands-on", hands_on));
        }
        if section.transcript.is_none() {
            notes.push("no transcript".to_string());
        }

        let suffix = if notes.is_empty() {
            String::new()
        } else {
            format!(" ({})", notes.join(", "))
        };

        println!(
            "  {:>2}. {} {}{}",
            number,
            section.title,
            format!("[{} blocks]", blocks).dimmed(),
            suffix.dimmed()
        );
    }

    println!();
    println!(
        "{} {} sections",
        "Deck OK:".green().bold(),
        deck.total_sections()
    );

    Ok(())
}
