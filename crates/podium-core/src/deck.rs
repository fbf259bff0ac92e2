use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// A slide deck loaded from a TOML document.
///
/// Content is data, not code: the viewer knows nothing about what a
/// deck says, only how its sections and blocks are shaped.
#[derive(Debug, Clone, Deserialize)]
pub struct Deck {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// One numbered slide. Numbering is positional and 1-based.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Speaker transcript shown in the transcript overlay.
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A content block inside a section.
///
/// Blocks tagged `hands_on = true` are hidden unless the persisted
/// settings flag enables them; they are only legal on the last
/// section of a deck.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Prose {
        text: String,
        #[serde(default)]
        hands_on: bool,
    },
    List {
        #[serde(default)]
        title: Option<String>,
        items: Vec<String>,
        #[serde(default)]
        hands_on: bool,
    },
    Code {
        language: String,
        source: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        hands_on: bool,
    },
}

impl Block {
    pub fn hands_on(&self) -> bool {
        match self {
            Block::Prose { hands_on, .. }
            | Block::List { hands_on, .. }
            | Block::Code { hands_on, .. } => *hands_on,
        }
    }
}

impl Deck {
    pub fn from_toml(input: &str) -> Result<Self> {
        let deck: Deck = toml::from_str(input).map_err(|e| Error::Deck(e.to_string()))?;
        deck.validate()?;
        Ok(deck)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn total_sections(&self) -> usize {
        self.sections.len()
    }

    /// Section by 1-based number.
    pub fn section(&self, number: usize) -> Option<&Section> {
        if number < 1 {
            return None;
        }
        self.sections.get(number - 1)
    }

    fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(Error::Deck("deck has no sections".to_string()));
        }

        let last = self.sections.len();
        for (idx, section) in self.sections.iter().enumerate() {
            let number = idx + 1;
            if number != last && section.blocks.iter().any(Block::hands_on) {
                return Err(Error::Deck(format!(
                    "section {} has a hands_on block; hands_on blocks are only allowed on the last section",
                    number
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
title = "Test Deck"

[[sections]]
title = "First"

[[sections]]
title = "Second"
badge = "Section 02"

[[sections.blocks]]
kind = "prose"
text = "Hello."

[[sections.blocks]]
kind = "code"
language = "javascript"
source = "console.log('hi');"
hands_on = true
"#;

    #[test]
    fn parses_minimal_deck() {
        let deck = Deck::from_toml(MINIMAL).unwrap();
        assert_eq!(deck.total_sections(), 2);
        assert_eq!(deck.section(1).unwrap().title, "First");
        assert_eq!(deck.section(2).unwrap().blocks.len(), 2);
        assert!(deck.section(2).unwrap().blocks[1].hands_on());
    }

    #[test]
    fn section_lookup_is_one_based() {
        let deck = Deck::from_toml(MINIMAL).unwrap();
        assert!(deck.section(0).is_none());
        assert!(deck.section(3).is_none());
        assert_eq!(deck.section(2).unwrap().title, "Second");
    }

    #[test]
    fn rejects_empty_deck() {
        let err = Deck::from_toml("title = \"Empty\"").unwrap_err();
        assert!(matches!(err, Error::Deck(_)));
    }

    #[test]
    fn rejects_hands_on_block_outside_last_section() {
        let input = r#"
title = "Bad"

[[sections]]
title = "First"

[[sections.blocks]]
kind = "prose"
text = "Secret."
hands_on = true

[[sections]]
title = "Second"
"#;
        let err = Deck::from_toml(input).unwrap_err();
        assert!(err.to_string().contains("hands_on"));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = Deck::from_toml("title = ").unwrap_err();
        assert!(matches!(err, Error::Deck(_)));
    }
}
