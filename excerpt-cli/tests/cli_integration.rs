//! Integration tests for the excerpt CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn excerpt() -> Command {
    let mut cmd = Command::cargo_bin("excerpt").unwrap();
    cmd.env_remove("EXCERPT_ENCODING").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_summarize_default() {
    let output = excerpt()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("georgia.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 5);
    assert!(stdout.starts_with("Georgia (SK) \u{2014} Joe Biden narrowly defeated"));
    assert!(stdout.contains("\u{201C}This proves what we\u{2019}ve been saying all along.."));
    assert!(!stdout.contains('"'));
}

#[test]
fn test_summarize_compound() {
    excerpt()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("georgia.txt"))
        .arg("-m")
        .arg("compound")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\u{201C}Georgia will be a big presidential win, as it was the night of the Election!\u{201D} He tweeted",
        ))
        .stdout(predicate::str::contains(
            "Biden said he hoped to see the Democratic Party continue",
        ));
}

#[test]
fn test_sentence_count() {
    excerpt()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("river.txt"))
        .arg("-n")
        .arg("2")
        .assert()
        .success()
        .stdout(
            "The flood destroyed the old bridge over the river\n\
             Engineers will rebuild the bridge over the river next spring\n",
        );
}

#[test]
fn test_zero_sentences_rejected() {
    excerpt()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("river.txt"))
        .arg("-n")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn test_keep_marks() {
    excerpt()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("river.txt"))
        .arg("-n")
        .arg("1")
        .arg("--keep-marks")
        .assert()
        .success()
        .stdout("Engineers will rebuild the bridge over the river next spring.\n");
}

#[test]
fn test_json_output() {
    let output = excerpt()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("georgia.txt"))
        .arg("-f")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let documents: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let document = &documents[0];
    let indices: Vec<u64> = document["sentences"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["index"].as_u64().unwrap())
        .collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 15]);
    assert_eq!(document["metadata"]["total_sentences"], 16);
    assert_eq!(document["metadata"]["mode"], "basic");
    assert_eq!(document["metadata"]["converged"], true);
}

#[test]
fn test_markdown_output() {
    excerpt()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("river.txt"))
        .arg("-n")
        .arg("2")
        .arg("-f")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("## tests/fixtures/river.txt"))
        .stdout(predicate::str::contains("1. The flood destroyed"))
        .stdout(predicate::str::contains("2. Engineers will rebuild"))
        .stdout(predicate::str::contains("*2 of 5 sentences, basic scoring*"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("summary.txt");

    excerpt()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("river.txt"))
        .arg("-n")
        .arg("1")
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert_eq!(
        content,
        "Engineers will rebuild the bridge over the river next spring\n"
    );
}

#[test]
fn test_glob_pattern_keeps_documents_apart() {
    excerpt()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("*.txt"))
        .arg("-n")
        .arg("1")
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("==> tests/fixtures/georgia.txt <=="))
        .stdout(predicate::str::contains("==> tests/fixtures/river.txt <=="))
        .stdout(predicate::str::contains(
            "Engineers will rebuild the bridge over the river next spring",
        ));
}

#[test]
fn test_multiple_inputs_in_order() {
    let output = excerpt()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("river.txt"))
        .arg(fixture_path("georgia.txt"))
        .arg("-n")
        .arg("1")
        .arg("-f")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let documents: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(documents[0]["source"], fixture_path("river.txt"));
    assert_eq!(documents[1]["source"], fixture_path("georgia.txt"));
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("excerpt.toml");
    fs::write(
        &config,
        "[summary]\nsentences = 2\nmode = \"compound\"\n\n[output]\nseparator = \" | \"\n",
    )
    .unwrap();

    excerpt()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("river.txt"))
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(
            "The river flooded the valley | The flood destroyed the old bridge over the river\n",
        );

    // Flags win over the file
    excerpt()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("river.txt"))
        .arg("-c")
        .arg(&config)
        .arg("-n")
        .arg("1")
        .arg("-m")
        .arg("basic")
        .assert()
        .success()
        .stdout("Engineers will rebuild the bridge over the river next spring\n");
}

#[test]
fn test_custom_stop_words() {
    let temp_dir = TempDir::new().unwrap();
    let stop_words = temp_dir.path().join("stop.toml");
    fs::write(
        &stop_words,
        "[metadata]\ncode = \"cu\"\nname = \"Custom\"\n\n[words]\nlist = [\"the\", \"river\", \"bridge\"]\n",
    )
    .unwrap();

    excerpt()
        .arg("keywords")
        .arg("-i")
        .arg(fixture_path("river.txt"))
        .arg("--stop-words")
        .arg(&stop_words)
        .assert()
        .success()
        .stdout(predicate::str::contains("river").not())
        .stdout(predicate::str::contains("bridge").not());
}

#[test]
fn test_keywords() {
    excerpt()
        .arg("keywords")
        .arg("-i")
        .arg(fixture_path("river.txt"))
        .arg("-n")
        .arg("2")
        .assert()
        .success()
        .stdout("river\t1.0000\nbridge\t0.9901\n");
}

#[test]
fn test_encoding_option() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("legacy.txt");
    let mut bytes = b"The mayor said ".to_vec();
    bytes.push(0x93);
    bytes.extend_from_slice(b"we are ready");
    bytes.push(0x94);
    bytes.extend_from_slice(b". Nobody stayed.");
    fs::write(&input, bytes).unwrap();

    excerpt()
        .arg("summarize")
        .arg("-i")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));

    excerpt()
        .arg("summarize")
        .arg("-i")
        .arg(&input)
        .arg("--encoding")
        .arg("windows-1252")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The mayor said \u{201C}we are ready\u{201D}",
        ));
}

#[test]
fn test_invalid_file() {
    excerpt()
        .arg("summarize")
        .arg("-i")
        .arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_unknown_language() {
    excerpt()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("river.txt"))
        .arg("-l")
        .arg("klingon")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported language"));
}

#[test]
fn test_help_command() {
    excerpt()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("summarize"))
        .stdout(predicate::str::contains("keywords"));
}

#[test]
fn test_list_commands() {
    excerpt()
        .arg("list")
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("English"));

    excerpt()
        .arg("list")
        .arg("modes")
        .assert()
        .success()
        .stdout(predicate::str::contains("compound"));
}

#[test]
fn test_generate_and_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("excerpt.toml");

    excerpt()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    excerpt()
        .arg("validate")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));

    fs::write(&config, "[ranking]\ndamping = 2.0\n").unwrap();
    excerpt()
        .arg("validate")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("is invalid"));
}
