//! Black-box checks of the fleet scenario, both through the library entry
//! point and through the compiled `fleet` binary.

use std::process::Command;

const EXPECTED: &[&str] = &[
    "Creating a motorised vehicle...",
    "Wroom!",
    "Created a motorised vehicle: Ford",
    "----------------------------------------",
    "Creating an aircraft...",
    "Wroom!",
    "Created an aircraft: Boeing",
    "----------------------------------------",
    "The kerosene engine is now on.",
    "",
    "Aircraft preparing to take off",
    "Make: Boeing",
    "Wheels: 3",
    "Engine type: kerosene",
];

fn expected_output() -> String {
    let mut text = EXPECTED.join("\n");
    text.push('\n');
    text
}

#[test]
fn run_produces_exact_scenario_output() {
    let mut out = Vec::new();
    fleet_cli::run(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), expected_output());
}

#[test]
fn run_is_deterministic() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    fleet_cli::run(&mut first).unwrap();
    fleet_cli::run(&mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn binary_prints_scenario_and_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_fleet"))
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to run fleet binary");

    assert!(output.status.success(), "fleet exited with {:?}", output.status);
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected_output());
}
