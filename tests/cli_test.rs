/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{TranscriptBuilder, path_str, realistic_chat, write_transcript};
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_whatsapp-chat-analyzer"));
    cmd.env_remove("WA_ANALYZER_STOPWORDS");
    cmd
}

#[test]
fn test_cli_summary_command() {
    let chat = realistic_chat().write();

    cli()
        .arg("summary")
        .arg(path_str(chat.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains("WhatsApp Chat Summary (All)"))
        .stdout(predicate::str::contains("Total messages: 10"))
        .stdout(predicate::str::contains("Media shared: 1"))
        .stdout(predicate::str::contains("Links shared: 2"))
        .stdout(predicate::str::contains("Most active day: Monday"))
        .stdout(predicate::str::contains("Longest streak: 3 days"))
        .stdout(predicate::str::contains("Longest inactive gap: 2 days"));
}

#[test]
fn test_cli_summary_for_one_participant() {
    let chat = realistic_chat().write();

    cli()
        .args(["summary", "--user", "Bob"])
        .arg(path_str(chat.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains("WhatsApp Chat Summary (Bob)"))
        .stdout(predicate::str::contains("Total messages: 3"));
}

#[test]
fn test_cli_summary_unknown_participant() {
    let chat = realistic_chat().write();

    cli()
        .args(["summary", "-u", "Zoe"])
        .arg(path_str(chat.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Total messages: 0"))
        .stdout(predicate::str::contains("Longest message: -"))
        .stdout(predicate::str::contains("Most active day: -"));
}

#[test]
fn test_cli_participants_command() {
    let chat = realistic_chat().write();

    cli()
        .arg("participants")
        .arg(path_str(chat.path()))
        .assert()
        .success()
        .stdout("All\nAlice\nBob\nCarol\nWhatsapp\n");
}

#[test]
fn test_cli_report_text() {
    let chat = realistic_chat().write();

    cli()
        .arg("report")
        .arg(path_str(chat.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Busiest participants"))
        .stdout(predicate::str::contains("Alice: 4 (40.00%)"))
        .stdout(predicate::str::contains("January - 2024: 10"))
        .stdout(predicate::str::contains("Activity heatmap"))
        .stdout(predicate::str::contains("Most mentioned"));
}

#[test]
fn test_cli_report_json() {
    let chat = realistic_chat().write();

    let output = cli().args(["report", "--json"]).arg(path_str(chat.path())).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["selection"], "All");
    assert_eq!(report["summary"]["total_messages"], 10);
    assert_eq!(report["summary"]["links"], 2);
    assert_eq!(report["heatmap"]["rows"].as_array().unwrap().len(), 7);
    assert_eq!(report["mentions"][0]["participant"], "Alice");
}

#[test]
fn test_cli_custom_stopwords() {
    let chat = realistic_chat().write();
    let stopwords = write_transcript("# custom list\ngood\nmorning\n");

    cli()
        .args(["report", "--user", "Alice", "--stopwords"])
        .arg(path_str(stopwords.path()))
        .arg(path_str(chat.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice: words [everyone, i, love, that, place]"));
}

#[test]
fn test_cli_custom_stopwords_from_env() {
    let chat = realistic_chat().write();
    let stopwords = write_transcript("good\nmorning\n");

    cli()
        .env("WA_ANALYZER_STOPWORDS", stopwords.path())
        .args(["report", "-u", "Alice"])
        .arg(path_str(chat.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice: words [everyone, i, love, that, place]"));
}

#[test]
fn test_cli_missing_stopwords_file() {
    let chat = realistic_chat().write();

    cli()
        .args(["report", "--stopwords", "/nonexistent/stopwords.txt"])
        .arg(path_str(chat.path()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load custom stopwords"));
}

#[test]
fn test_cli_rejects_malformed_export() {
    let chat = TranscriptBuilder::new()
        .message("1/2/24, 10:30 AM", "Alice", "fine")
        .message("99/99/24, 10:31 AM", "Bob", "broken")
        .write();

    cli()
        .arg("summary")
        .arg(path_str(chat.path()))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "does not match the expected WhatsApp chat export format",
        ));
}

#[test]
fn test_cli_missing_file() {
    cli()
        .args(["summary", "/nonexistent/chat.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open transcript"));
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
        .stdout(predicate::str::contains("Statistics and text analysis for exported WhatsApp chats"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("participants"));
}

#[test]
fn test_cli_version_flag() {
    cli().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    cli().arg("invalid-command").assert().failure();
}
