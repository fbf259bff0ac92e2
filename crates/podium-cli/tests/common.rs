//! Common test utilities shared across integration tests.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// A `podium` command with the settings path pinned inside the
    /// fixture so tests never touch the user's real configuration.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("podium").expect("Failed to find podium binary");
        cmd.env("PODIUM_PATH", &self.root);
        cmd
    }

    pub fn write_deck(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, content).expect("Failed to write deck");
        path
    }

    pub fn sample_deck(&self) -> PathBuf {
        self.write_deck(
            "deck.toml",
            r#"
title = "Sample Deck"
subtitle = "Fixture"

[[sections]]
title = "Intro"
transcript = "Welcome to the sample deck."

[[sections.blocks]]
kind = "prose"
text = "Hello."

[[sections]]
title = "Closing"

[[sections.blocks]]
kind = "code"
language = "javascript"
source = "console.log('bye');"
hands_on = true
"#,
        )
    }
}
