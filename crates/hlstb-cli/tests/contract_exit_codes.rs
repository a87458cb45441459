use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

const SUCCESS_LINE: &str = "----- Test is successful -----\n";

fn hlstb() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hlstb"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn passing_design_exits_zero_with_success_banner() {
    hlstb()
        .assert()
        .code(0)
        .stdout(predicate::eq(SUCCESS_LINE))
        .stderr(predicate::str::is_empty());
}

#[test]
fn arguments_do_not_change_the_verdict() {
    let arg_sets: &[&[&str]] = &[
        &[],
        &["vector", "2"],
        &["--help"],
        &["--version"],
        &["-x", "--unknown=1", "--", "trailing"],
    ];

    for args in arg_sets {
        let output = hlstb().args(*args).output().expect("run hlstb");
        assert_eq!(output.status.code(), Some(0), "args {:?}", args);
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            SUCCESS_LINE,
            "args {:?}",
            args
        );
    }
}

#[test]
fn repeated_runs_are_identical() {
    let first = hlstb().output().expect("run hlstb");
    for _ in 0..3 {
        let again = hlstb().output().expect("run hlstb");
        assert_eq!(first.status.code(), again.status.code());
        assert_eq!(first.stdout, again.stdout);
    }
}

#[test]
fn debug_logging_stays_off_stdout() {
    let output = hlstb()
        .env("RUST_LOG", "debug")
        .output()
        .expect("run hlstb");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert_eq!(stdout, SUCCESS_LINE);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("verification report"),
        "debug report missing from stderr: {stderr}"
    );
}
