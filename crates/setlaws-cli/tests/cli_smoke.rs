use std::fs;
use std::process::{Command, Output};

use tempfile::tempdir;

fn setlaws(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_setlaws"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn setlaws")
}

fn setlaws_with_log(args: &[&str], rust_log: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_setlaws"))
        .args(args)
        .env("RUST_LOG", rust_log)
        .output()
        .expect("spawn setlaws")
}

fn demo_config(name: &str) -> String {
    format!("{}/../../demos/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("utf8 stderr")
}

const TEXTBOOK_FLAGS: [&str; 8] = [
    "--universe",
    "1..=12",
    "--set",
    "A=1,2,3,6",
    "--set",
    "B=2,4,6,8",
    "--set",
    "C=1,5,6,9,10",
];

#[test]
fn demo_prints_text_then_latex() {
    let output = setlaws(&["demo"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    let (human, latex) = text.split_once("LATEX OUTPUT:").expect("latex marker");
    assert_eq!(human.matches("Result: HOLDS ✅").count(), 10);
    assert!(human.starts_with("De Morgan (complement of union) for (A, B):"));
    assert_eq!(latex.matches("\\begin{aligned}").count(), 10);
}

#[test]
fn verify_from_flags() {
    let mut args = vec!["verify"];
    args.extend(TEXTBOOK_FLAGS);
    let output = setlaws(&args);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("  LHS = U \\ (A ∪ B) = {5, 7, 9, 10, 11, 12}"));
    assert!(text.contains("Distributive (intersection over union):"));
}

#[test]
fn exclusive_range_matches_inclusive() {
    let inclusive = setlaws(&["report", "--universe", "1..=5", "--set", "A=1", "--set", "B=2"]);
    let exclusive = setlaws(&["report", "--universe", "1..6", "--set", "A=1", "--set", "B=2"]);
    assert!(inclusive.status.success(), "{}", stderr(&inclusive));
    let inclusive: serde_json::Value = serde_json::from_slice(&inclusive.stdout).unwrap();
    let exclusive: serde_json::Value = serde_json::from_slice(&exclusive.stdout).unwrap();
    assert_eq!(inclusive["analysis_hash"], exclusive["analysis_hash"]);
}

#[test]
fn config_file_with_ascii_rendering() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("system.yaml");
    fs::write(
        &path,
        "universe:\n  label: S\n  range: { start: 1, end: 6 }\n\
         sets:\n  - { label: P, elements: [1, 2] }\n  - { label: Q, elements: [2, \"x\"] }\n\
         render:\n  ascii_only: true\n",
    )
    .unwrap();
    let output = setlaws(&["verify", "--config", path.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.is_ascii());
    assert!(text.contains("S \\ (P union Q)"));
    assert!(text.starts_with("Warning: Set Q contains elements not in universal set S: {\"x\"}"));
}

#[test]
fn enforce_subsets_rejects_strays() {
    let output = setlaws(&[
        "verify",
        "--universe",
        "1..=3",
        "--set",
        "A=1,9",
        "--set",
        "B=2",
        "--enforce-subsets",
    ]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("not-a-subset"));
}

#[test]
fn report_is_canonical_json() {
    let mut args = vec!["report"];
    args.extend(TEXTBOOK_FLAGS);
    let output = setlaws(&args);
    assert!(output.status.success(), "{}", stderr(&output));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["results"].as_array().map(Vec::len), Some(10));
    assert_eq!(report["analysis_hash"].as_str().map(str::len), Some(64));
}

#[test]
fn relations_latex_to_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("relations.tex");
    let output = setlaws(&[
        "relations",
        "--latex",
        "--universe",
        "1..=9",
        "--set",
        "A=2,3,4",
        "--set",
        "B=2,3,4,8",
        "--set",
        "C=1,8",
        "--out",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(output.stdout.is_empty());
    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("\\begin{itemize}"));
    assert!(written.contains("\\item Set $A$ is a proper subset of $B$"));
}

#[test]
fn missing_input_is_reported() {
    let output = setlaws(&["verify"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("missing-input"));
}

#[test]
fn single_subset_is_rejected() {
    let output = setlaws(&["verify", "--universe", "1,2,3", "--set", "A=1"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("subset-count"));
}

#[test]
fn malformed_set_flag_is_rejected() {
    let output = setlaws(&["verify", "--universe", "1,2,3", "--set", "A:1", "--set", "B=2"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("malformed-set-flag"));
}

#[test]
fn euler_demo_config_loads_without_universe_label() {
    let path = demo_config("euler.yaml");
    let output = setlaws(&["relations", "--config", &path]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.starts_with("--- Euler Diagram Relationship Analysis ---"), "{text}");
    assert!(text.ends_with("There is NO common intersection between all three sets.\n"), "{text}");
}

#[test]
fn textbook_demo_config_verifies() {
    let path = demo_config("textbook.yaml");
    let output = setlaws(&["verify", "--config", &path]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output).matches("Result: HOLDS ✅").count(), 10);
}

#[test]
fn rust_log_enables_debug_events() {
    let mut args = vec!["verify"];
    args.extend(TEXTBOOK_FLAGS);
    let output = setlaws_with_log(&args, "debug");
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stderr(&output).contains("evaluated identity"));
}

#[test]
fn rust_log_takes_precedence_over_verbose() {
    let mut args = vec!["verify", "-v"];
    args.extend(TEXTBOOK_FLAGS);
    let output = setlaws_with_log(&args, "error");
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(!stderr(&output).contains("set system loaded"));

    let output = setlaws(&args);
    assert!(stderr(&output).contains("set system loaded"));
}

#[test]
fn bare_floats_and_booleans_are_rejected() {
    for item in ["A=1.5", "A=1,2.0", "A=true", "A=1e3"] {
        let output = setlaws(&["verify", "--universe", "1..=3", "--set", item, "--set", "B=2"]);
        assert!(!output.status.success(), "{item} was accepted");
        let err = stderr(&output);
        assert!(err.contains("incomparable-element"), "{item}: {err}");
        assert!(err.contains("--set"), "{item}: {err}");
    }
}

#[test]
fn quoted_and_plain_words_stay_text() {
    let output = setlaws(&[
        "report",
        "--universe",
        "1..=3",
        "--set",
        "A=\"1.5\",x",
        "--set",
        "B=2",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let warnings = report["warnings"].to_string();
    assert!(warnings.contains("1.5"), "{warnings}");
}
