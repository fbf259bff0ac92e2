mod common;
use common::TestFixture;

use predicates::prelude::*;

#[test]
fn check_accepts_a_valid_deck() {
    let fixture = TestFixture::new();
    let deck = fixture.sample_deck();

    fixture
        .command()
        .arg("check")
        .arg(&deck)
        .assert()
        .success()
        .stdout(predicate::str::contains("Deck OK"))
        .stdout(predicate::str::contains("2 sections"))
        .stdout(predicate::str::contains("Intro"))
        .stdout(predicate::str::contains("Closing"));
}

#[test]
fn check_reports_hands_on_and_code_counts() {
    let fixture = TestFixture::new();
    let deck = fixture.sample_deck();

    fixture
        .command()
        .arg("check")
        .arg(&deck)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 code"))
        .stdout(predicate::str::contains("1 hands-on"));
}

#[test]
fn check_rejects_a_deck_without_sections() {
    let fixture = TestFixture::new();
    let deck = fixture.write_deck("empty.toml", "title = \"Empty\"\n");

    fixture
        .command()
        .arg("check")
        .arg(&deck)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no sections"));
}

#[test]
fn check_rejects_hands_on_outside_the_last_section() {
    let fixture = TestFixture::new();
    let deck = fixture.write_deck(
        "bad.toml",
        r#"
title = "Bad"

[[sections]]
title = "First"

[[sections.blocks]]
kind = "prose"
text = "Early."
hands_on = true

[[sections]]
title = "Second"
"#,
    );

    fixture
        .command()
        .arg("check")
        .arg(&deck)
        .assert()
        .failure()
        .stderr(predicate::str::contains("hands_on"));
}

#[test]
fn check_fails_on_a_missing_file() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("check")
        .arg(fixture.sample_deck().with_file_name("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load deck"));
}
