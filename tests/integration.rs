use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

const BINARY_NAME: &str = "noughts";

// Trying every cell in order always finds a playable one before the input
// runs out, whatever the computer plays.
const EVERY_CELL: &str = "1\n2\n3\n4\n5\n6\n7\n8\n9\n";

#[test]
fn full_game() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.args(["--seed", "17"])
            .write_stdin(format!("{EVERY_CELL}n\n"))
            .assert()
            .success()
            .stdout(
                contains("This program is going to play tic tac toe with you.")
                    .and(contains("1 | 2 | 3"))
                    .and(contains("Do you want to play again? [y|n]"))
                    .and(
                        contains("The game is tied: nobody won.")
                            .or(contains("The computer won the game.")),
                    )
                    .and(contains("You won the game.").not())
                    .and(contains("Iterations:").not()),
            ),
    );
}

#[test]
fn debug_flag() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.args(["--debug", "--seed", "3"])
            .write_stdin(format!("{EVERY_CELL}n\n"))
            .assert()
            .success()
            .stdout(
                contains("Noughts ")
                    .and(contains("Iterations:"))
                    .and(contains("Duration:"))
                    .and(contains("Move -> ")),
            ),
    );
}

#[test]
fn empty_input() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("")
            .assert()
            .success()
            .stdout(contains("7 | 8 | 9")),
    );
}

#[test]
fn replay_until_no() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.args(["--seed", "5"])
            .write_stdin(format!("{EVERY_CELL}maybe\ny\n{EVERY_CELL}no\n"))
            .assert()
            .success()
            .stdout(contains("ERROR: invalid input.").and(contains("first with number 1"))),
    );
}

#[test]
fn unknown_flag() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(cmd.arg("--verbose").assert().failure());
}

#[test]
fn version() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.arg("--version")
            .assert()
            .success()
            .stdout(contains(env!("CARGO_PKG_VERSION"))),
    );
}
