use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

pub fn handle(deck_path: Option<&Path>) -> Result<()> {
    let deck = super::load_deck(deck_path)?;

    println!("{}", deck.title.bold());
    println!();

    for (idx, section) in deck.sections.iter().enumerate() {
        println!("{}", format!("{}. {}", idx + 1, section.title).bold());
        match &section.transcript {
            Some(transcript) => println!("{}", transcript),
            None => println!("{}", "(no transcript)".dimmed()),
        }
        println!();
    }

    Ok(())
}
