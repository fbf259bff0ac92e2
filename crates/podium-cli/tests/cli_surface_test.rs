mod common;
use common::TestFixture;

use predicates::prelude::*;

#[test]
fn help_lists_all_subcommands() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("present"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("transcript"));
}

#[test]
fn version_flag_reports_the_crate_version() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn present_refuses_to_start_without_a_terminal() {
    let fixture = TestFixture::new();
    let deck = fixture.sample_deck();

    // Test harness stdout is piped, so the TTY guard must trip before
    // raw mode is ever enabled.
    fixture
        .command()
        .arg("present")
        .arg(&deck)
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs a terminal"));
}
