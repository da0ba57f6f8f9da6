/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{ExportDirBuilder, realistic_export_dir, transcript};
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ai-knowledge-garden"));
    cmd.env_remove("RUST_LOG").env_remove("AI_KNOWLEDGE_GARDEN_MAX_UPLOAD_BYTES");
    cmd
}

#[test]
fn test_cli_no_command_shows_help_message() {
    cli().assert().success().stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Normalize, search and summarize AI chat exports"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("services"));
}

#[test]
fn test_cli_version_flag() {
    cli().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    cli().arg("invalid-command").assert().failure();
}

#[test]
fn test_cli_ingest_reports_each_file() {
    let dir = realistic_export_dir();

    cli()
        .arg("ingest")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("chatgpt (4 messages, 2 conversations)"))
        .stdout(predicate::str::contains("claude_text (2 messages, 1 conversations)"))
        .stdout(predicate::str::contains("openai_api (3 messages, 1 conversations)"))
        .stdout(predicate::str::contains("Total messages: 13"))
        .stdout(predicate::str::contains("Total conversations: 6"));
}

#[test]
fn test_cli_ingest_continues_past_bad_file() {
    let dir = ExportDirBuilder::new()
        .with_file("a-good.txt", transcript(&[("Human:", "hi"), ("Assistant:", "hello")]))
        .with_file("b-bad.json", r#"{"not": "a chat"}"#)
        .build();

    cli()
        .arg("ingest")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("b-bad.json: error: unsupported file format"))
        .stdout(predicate::str::contains("Total messages: 2"))
        .stderr(predicate::str::contains("failed to ingest"));
}

#[test]
fn test_cli_ingest_fails_when_nothing_loads() {
    let dir = ExportDirBuilder::new().with_file("notes.txt", "just some notes").build();

    cli()
        .arg("ingest")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no file could be ingested"));
}

#[test]
fn test_cli_search_highlights_matches() {
    let dir = realistic_export_dir();

    cli()
        .args(["search", "rust"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3 result(s) for \"rust\""))
        .stdout(predicate::str::contains("Is <mark>RUST</mark> fast?"));
}

#[test]
fn test_cli_search_with_filters_as_json() {
    let dir = realistic_export_dir();

    let output = cli()
        .args(["--json", "search", "rust", "--service", "OpenAI API"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["total"], 1);
    assert_eq!(response["query"], "rust");
    assert_eq!(response["stats"]["searches"], 1);
    assert_eq!(response["results"][0]["service"], "OpenAI API");
    assert_eq!(response["results"][0]["role"], "user");
}

#[test]
fn test_cli_recent() {
    let dir = realistic_export_dir();

    cli()
        .arg("recent")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Ownership basics"))
        .stdout(predicate::str::contains("user: How does ownership work in Rust?"))
        .stdout(predicate::str::contains("assistant: Each value has a single owner."));
}

#[test]
fn test_cli_stats() {
    let dir = realistic_export_dir();

    cli()
        .arg("stats")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total messages: 13"))
        .stdout(predicate::str::contains("Total conversations: 6"))
        .stdout(predicate::str::contains("ChatGPT: 4 messages, 2 conversations"));
}

#[test]
fn test_cli_stats_json() {
    let dir = realistic_export_dir();

    let output = cli().args(["stats", "--json"]).arg(dir.path()).output().unwrap();
    assert!(output.status.success());

    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["total_messages"], 13);
    assert_eq!(stats["service_breakdown"]["Grok"]["messages"], 2);
}

#[test]
fn test_cli_services() {
    cli()
        .arg("services")
        .assert()
        .success()
        .stdout(predicate::str::contains("chatgpt"))
        .stdout(predicate::str::contains("openai_api"))
        .stdout(predicate::str::contains("Text"));
}

#[test]
fn test_cli_missing_path() {
    cli()
        .args(["stats", "/nonexistent/export.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_cli_respects_upload_limit() {
    let dir = realistic_export_dir();

    cli()
        .env("AI_KNOWLEDGE_GARDEN_MAX_UPLOAD_BYTES", "10")
        .arg("stats")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("file too large"));
}
