mod common;
use common::TestFixture;

use predicates::prelude::*;

#[test]
fn transcript_prints_every_section_in_order() {
    let fixture = TestFixture::new();
    let deck = fixture.sample_deck();

    fixture
        .command()
        .arg("transcript")
        .arg(&deck)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample Deck"))
        .stdout(predicate::str::contains("1. Intro"))
        .stdout(predicate::str::contains("Welcome to the sample deck."))
        .stdout(predicate::str::contains("2. Closing"));
}

#[test]
fn transcript_marks_sections_without_one() {
    let fixture = TestFixture::new();
    let deck = fixture.sample_deck();

    fixture
        .command()
        .arg("transcript")
        .arg(&deck)
        .assert()
        .success()
        .stdout(predicate::str::contains("(no transcript)"));
}

#[test]
fn transcript_without_a_deck_uses_the_built_in_one() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("transcript")
        .assert()
        .success()
        .stdout(predicate::str::contains("Node.js & REST API Fundamentals"))
        .stdout(predicate::str::contains("9. Building a Sample REST API"));
}
