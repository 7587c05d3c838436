//! CLI command integration tests.
//! Each test runs in its own temp directory with FAQ_* env cleared, so no
//! ambient config or document leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SITE_FAQ: &str = r#"{
  "questions": [
    { "question": "What is your refund policy?", "answer": "30 days." },
    { "question": "How do I contact support?", "answer": "Email us." },
    { "question": "How long does shipping take?", "answer": "About a week." },
    { "question": "How much does it cost?", "answer": "It is free." },
    { "question": "how do I contact support?", "answer": "Shadowed." }
  ]
}"#;

fn faq_cmd(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("faq").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("FAQ_CONFIG")
        .env_remove("FAQ_DATA")
        .env_remove("RUST_LOG");
    cmd
}

/// Write the site FAQ where the page keeps it: data/chat_data.json.
fn site_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data/chat_data.json"), SITE_FAQ).unwrap();
    dir
}

#[test]
fn ask_uses_default_document_location() {
    let dir = site_dir();
    faq_cmd(&dir)
        .args(["ask", "refund"])
        .assert()
        .success()
        .stdout("30 days.\n");
}

#[test]
fn ask_is_case_insensitive() {
    let dir = site_dir();
    faq_cmd(&dir)
        .args(["ask", "CONTACT SUPPORT"])
        .assert()
        .success()
        .stdout("Email us.\n");
}

#[test]
fn ask_unmatched_prints_fallback() {
    let dir = site_dir();
    faq_cmd(&dir)
        .args(["ask", "xyz"])
        .assert()
        .success()
        .stdout("I don't have an answer for that question.\n");
}

#[test]
fn ask_empty_returns_first_answer() {
    let dir = site_dir();
    faq_cmd(&dir)
        .args(["ask", ""])
        .assert()
        .success()
        .stdout("30 days.\n");
}

#[test]
fn ask_missing_document_fails() {
    let dir = TempDir::new().unwrap();
    faq_cmd(&dir)
        .args(["ask", "refund"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load FAQ document"));
}

#[test]
fn ask_malformed_document_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{"faq": []}"#).unwrap();
    faq_cmd(&dir)
        .arg("--data")
        .arg(&path)
        .args(["ask", "refund"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid FAQ document"));
}

#[test]
fn suggest_caps_at_three_in_order() {
    let dir = site_dir();
    faq_cmd(&dir)
        .args(["suggest", "how"])
        .assert()
        .success()
        .stdout(
            "How do I contact support?\n\
             How long does shipping take?\n\
             How much does it cost?\n",
        );
}

#[test]
fn suggest_with_explicit_limit() {
    let dir = site_dir();
    faq_cmd(&dir)
        .args(["suggest", "how", "--limit", "1"])
        .assert()
        .success()
        .stdout("How do I contact support?\n");
}

#[test]
fn suggest_empty_prints_nothing() {
    let dir = site_dir();
    faq_cmd(&dir)
        .args(["suggest", ""])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn list_in_store_order() {
    let dir = site_dir();
    faq_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("  1. What is your refund policy?\n"))
        .stdout(predicate::str::contains("  5. how do I contact support?"));
}

#[test]
fn list_json_is_a_valid_document() {
    let dir = site_dir();
    let output = faq_cmd(&dir).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let questions = value["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 5);
    assert_eq!(questions[1]["answer"], "Email us.");
}

#[test]
fn stats_reports_counts() {
    let dir = site_dir();
    faq_cmd(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("source:     data/chat_data.json"))
        .stdout(predicate::str::contains("entries:    5"))
        .stdout(predicate::str::contains("duplicates: 1"))
        .stdout(predicate::str::contains("suggest:    3"));
}

#[test]
fn data_flag_overrides_default() {
    let dir = site_dir();
    let other = dir.path().join("other.json");
    std::fs::write(
        &other,
        r#"{"questions": [{"question": "Where are you based?", "answer": "Lisbon."}]}"#,
    )
    .unwrap();

    faq_cmd(&dir)
        .arg("--data")
        .arg(&other)
        .args(["ask", "based"])
        .assert()
        .success()
        .stdout("Lisbon.\n");
}

#[test]
fn faq_data_env_overrides_config() {
    let dir = site_dir();
    std::fs::write(
        dir.path().join("env.json"),
        r#"{"questions": [{"question": "Env question", "answer": "from env"}]}"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("faq.toml"), "data = \"data/chat_data.json\"\n").unwrap();

    faq_cmd(&dir)
        .env("FAQ_DATA", "env.json")
        .args(["ask", ""])
        .assert()
        .success()
        .stdout("from env\n");
}

#[test]
fn local_config_sets_data_and_limit() {
    let dir = site_dir();
    std::fs::write(
        dir.path().join("faq.toml"),
        "data = \"data/chat_data.json\"\nsuggestion_limit = 2\n",
    )
    .unwrap();

    faq_cmd(&dir)
        .args(["suggest", "how"])
        .assert()
        .success()
        .stdout("How do I contact support?\nHow long does shipping take?\n");
}

#[test]
fn explicit_config_flag_and_bad_config() {
    let dir = site_dir();
    let cfg = dir.path().join("custom.toml");
    std::fs::write(&cfg, "suggestion_limit = 0\n").unwrap();

    faq_cmd(&dir)
        .arg("--config")
        .arg(&cfg)
        .args(["ask", "refund"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn chat_answers_lines_until_exit() {
    let dir = site_dir();
    faq_cmd(&dir)
        .arg("chat")
        .write_stdin("refund\n\n:? how\nxyz\n:quit\ncontact\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("bot> 30 days."))
        .stdout(predicate::str::contains("  - How long does shipping take?"))
        .stdout(predicate::str::contains(
            "bot> I don't have an answer for that question.",
        ))
        .stdout(predicate::str::contains("Email us.").not());
}
