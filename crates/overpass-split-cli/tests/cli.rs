// End-to-end runs of the overpass-split binary.
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str = r#"{"elements":[{"id":1,"tags":{"name":"Café"}},{"id":2},{"name":"no-id"}]}"#;

fn cmd() -> Command {
    Command::cargo_bin("overpass-split").expect("binary")
}

#[test]
fn no_args_uses_fixed_paths() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("hue.json"), SAMPLE).expect("write input");

    cmd()
        .current_dir(temp.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("Saved 3 files into directory 'elements'\n");

    let out = temp.path().join("elements");
    let one: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("1.json")).expect("1.json")).expect("json");
    assert_eq!(one["tags"]["name"], "Café");
    assert!(out.join("2.json").is_file());
    assert_eq!(fs::read_dir(&out).expect("read_dir").count(), 2);
}

#[test]
fn path_flags_are_rejected() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("hue.json"), SAMPLE).expect("write input");

    cmd()
        .current_dir(temp.path())
        .args(["--input", "other.json", "--output-dir", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));

    assert!(!temp.path().join("elements").exists());
    assert!(!temp.path().join("out").exists());
}

#[test]
fn malformed_input_fails() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("hue.json"), "{\"elements\": [").expect("write input");

    cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn missing_input_fails() {
    let temp = tempfile::tempdir().expect("tempdir");

    cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read input file"));
}
