pub mod deck;
pub mod error;
pub mod navigator;
pub mod settings;
pub mod store;

pub use deck::{Block, Deck, Section};
pub use error::{Error, Result};
pub use navigator::{Navigator, SETTLE_DELAY};
pub use settings::Settings;
pub use store::{RenderedBlock, RenderedSection, SectionStore};
