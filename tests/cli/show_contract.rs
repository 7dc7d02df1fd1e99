use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn show_lists_enabled_and_disabled_slots() {
    let ctx = TestContext::new();
    ctx.new_prompt("chat.yml", "chat");
    ctx.cli().args(["param", "set", "chat.yml", "temperature", "0.5"]).assert().success();

    ctx.cli()
        .args(["show", "chat.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Anthropic/claude-3-5-sonnet (chat prompt, 0 turn(s))"))
        .stdout(predicate::str::contains("[x] temperature = 0.5"))
        .stdout(predicate::str::contains("[ ] top_p (number)"))
        .stdout(predicate::str::contains("[ ] max_tokens (number) [required]"));
}

#[test]
fn show_flags_long_strings_as_multi_line() {
    let ctx = TestContext::new();
    ctx.new_prompt("story.yml", "completion");
    ctx.cli().args(["model", "set", "story.yml", "gpt-3.5-turbo-instruct"]).assert().success();

    ctx.cli()
        .args(["show", "story.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ] suffix (string) [multi-line]"));
}

#[test]
fn show_json_reports_every_slot() {
    let ctx = TestContext::new();
    ctx.new_prompt("chat.yml", "chat");
    ctx.cli().args(["param", "enable", "chat.yml", "max_tokens"]).assert().success();

    let output = ctx.cli().args(["show", "chat.yml", "--json"]).output().expect("run show");
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(summary["interface"], "chat");
    assert_eq!(summary["model"]["model"], "claude-3-5-sonnet");
    let slots = summary["parameters"].as_array().expect("parameters");
    assert_eq!(slots.len(), 5);
    assert_eq!(slots[0]["name"], "max_tokens");
    assert_eq!(slots[0]["value"], 1024);
    assert!(slots[1].get("value").is_none());
}

#[test]
fn show_rejects_unknown_prompt_type() {
    let ctx = TestContext::new();
    ctx.write("odd.yml", "type: embedding\nmodel: { vendor: OpenAI, model: gpt-4o }\n");

    ctx.cli()
        .args(["show", "odd.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported interface kind 'embedding'"));
}

#[test]
fn show_missing_document_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["show", "absent.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Prompt document 'absent.yml' not found"));
}
