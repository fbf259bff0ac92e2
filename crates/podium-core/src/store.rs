use crate::deck::{Block, Deck, Section};
use std::collections::BTreeMap;

/// A section flattened into displayable lines.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSection {
    pub number: usize,
    pub title: String,
    pub badge: Option<String>,
    pub subtitle: Option<String>,
    pub blocks: Vec<RenderedBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedBlock {
    Prose {
        lines: Vec<String>,
        hands_on: bool,
    },
    List {
        title: Option<String>,
        items: Vec<String>,
        hands_on: bool,
    },
    Code {
        language: String,
        title: Option<String>,
        lines: Vec<String>,
        hands_on: bool,
    },
}

impl RenderedBlock {
    pub fn hands_on(&self) -> bool {
        match self {
            RenderedBlock::Prose { hands_on, .. }
            | RenderedBlock::List { hands_on, .. }
            | RenderedBlock::Code { hands_on, .. } => *hands_on,
        }
    }
}

/// Cache of rendered sections, keyed by 1-based section number.
///
/// Rendering a section is pure and happens at most once; asking for a
/// section that is already rendered is a no-op.
#[derive(Debug, Default)]
pub struct SectionStore {
    rendered: BTreeMap<usize, RenderedSection>,
}

impl SectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `number` if it is not cached yet, then return it.
    /// Out-of-range numbers return None.
    pub fn ensure_loaded(&mut self, deck: &Deck, number: usize) -> Option<&RenderedSection> {
        if !self.rendered.contains_key(&number) {
            let section = deck.section(number)?;
            self.rendered.insert(number, render_section(number, section));
        }
        self.rendered.get(&number)
    }

    /// Render every section up front, as the viewer does at startup.
    pub fn load_all(&mut self, deck: &Deck) {
        for number in 1..=deck.total_sections() {
            self.ensure_loaded(deck, number);
        }
    }

    pub fn get(&self, number: usize) -> Option<&RenderedSection> {
        self.rendered.get(&number)
    }

    pub fn is_loaded(&self, number: usize) -> bool {
        self.rendered.contains_key(&number)
    }

    pub fn loaded_count(&self) -> usize {
        self.rendered.len()
    }
}

fn render_section(number: usize, section: &Section) -> RenderedSection {
    let blocks = section.blocks.iter().map(render_block).collect();

    RenderedSection {
        number,
        title: section.title.clone(),
        badge: section.badge.clone(),
        subtitle: section.subtitle.clone(),
        blocks,
    }
}

fn render_block(block: &Block) -> RenderedBlock {
    match block {
        Block::Prose { text, hands_on } => RenderedBlock::Prose {
            lines: split_lines(text),
            hands_on: *hands_on,
        },
        Block::List {
            title,
            items,
            hands_on,
        } => RenderedBlock::List {
            title: title.clone(),
            items: items.clone(),
            hands_on: *hands_on,
        },
        Block::Code {
            language,
            source,
            title,
            hands_on,
        } => RenderedBlock::Code {
            language: language.clone(),
            title: title.clone(),
            lines: source.lines().map(str::to_string).collect(),
            hands_on: *hands_on,
        },
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim_end().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_deck() -> Deck {
        Deck::from_toml(
            r#"
title = "Test"

[[sections]]
title = "First"

[[sections.blocks]]
kind = "prose"
text = "One paragraph.\nTwo lines."

[[sections]]
title = "Second"

[[sections.blocks]]
kind = "code"
language = "bash"
source = "echo one\necho two"
"#,
        )
        .unwrap()
    }

    #[test]
    fn loading_twice_is_a_no_op() {
        let deck = sample_deck();
        let mut store = SectionStore::new();

        let first_pass = store.ensure_loaded(&deck, 1).unwrap().clone();
        assert_eq!(store.loaded_count(), 1);

        let second_pass = store.ensure_loaded(&deck, 1).unwrap().clone();
        assert_eq!(store.loaded_count(), 1);
        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass.blocks.len(), 1);
    }

    #[test]
    fn out_of_range_sections_are_not_cached() {
        let deck = sample_deck();
        let mut store = SectionStore::new();

        assert!(store.ensure_loaded(&deck, 0).is_none());
        assert!(store.ensure_loaded(&deck, 3).is_none());
        assert_eq!(store.loaded_count(), 0);
    }

    #[test]
    fn load_all_renders_every_section() {
        let deck = sample_deck();
        let mut store = SectionStore::new();

        store.load_all(&deck);
        assert_eq!(store.loaded_count(), 2);
        assert!(store.is_loaded(1));
        assert!(store.is_loaded(2));
    }

    #[test]
    fn code_source_is_split_into_lines() {
        let deck = sample_deck();
        let mut store = SectionStore::new();

        let section = store.ensure_loaded(&deck, 2).unwrap();
        match &section.blocks[0] {
            RenderedBlock::Code { lines, language, .. } => {
                assert_eq!(language, "bash");
                assert_eq!(lines, &["echo one".to_string(), "echo two".to_string()]);
            }
            other => panic!("expected code block, got {:?}", other),
        }
    }
}
