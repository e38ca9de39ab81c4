use std::process::{Command, Output};

fn findbits(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_findbits"))
        .args(args)
        .output()
        .expect("failed to run findbits")
}

#[test]
fn test_usage_on_missing_arguments() {
    let output = findbits(&["73"]);

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Search bitstream for a known number"));
    assert!(stdout.contains("<NUMBER> <BITSTREAM>"));
    assert!(stdout.contains("findbits 73 0110010101110011"));
    assert!(!stdout.contains("Trying"));
}

#[test]
fn test_usage_with_no_arguments() {
    let output = findbits(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_example_run() {
    let output = findbits(&["73", "0110010101110011"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Trying HEX\n  Forward: (1110011) *** Match at bit 9: 011001010<1110011>"));
    assert!(stdout.contains("Trying DECIMAL\n  Forward: (1001001) Not found"));
}

#[test]
fn test_no_match_is_success() {
    let output = findbits(&["1111", "0000"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Trying BINARY\n  Forward: (1111) Not found"));
    assert!(stdout.contains("*** Match at bit 0: <1111>"));
}

#[test]
fn test_json_output() {
    let output = findbits(&["--json", "73", "0110010101110011"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["literal"], "73");
    assert_eq!(value["bases"].as_array().unwrap().len(), 3);
}

#[test]
fn test_strict_rejects_bad_bitstream() {
    let output = findbits(&["--strict", "73", "01102"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid character '2' in bitstream at offset 4"));
}

#[test]
fn test_lenient_accepts_bad_bitstream() {
    let output = findbits(&["11", "01102"]);
    assert!(output.status.success());
}

#[test]
fn test_unknown_flag() {
    let output = findbits(&["--bogus", "73", "0110"]);
    assert!(!output.status.success());
}

#[test]
fn test_version() {
    let output = findbits(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("findbits v"));
}

#[test]
fn test_negative_literal_runs() {
    let output = findbits(&["-5", "0101"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Trying"));
}

#[test]
fn test_extra_arguments_are_logged() {
    let output = findbits(&["73", "0110010101110011", "extra"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[WARN] - Ignoring extra arguments: extra"));
}

#[test]
fn test_verbose_enables_debug_logging() {
    let quiet = findbits(&["73", "0110010101110011"]);
    assert!(!String::from_utf8_lossy(&quiet.stderr).contains("[DEBUG]"));

    let verbose = findbits(&["--verbose", "73", "0110010101110011"]);
    let stderr = String::from_utf8_lossy(&verbose.stderr);
    assert!(stderr.contains("[DEBUG] - Skipping BINARY"));
}
