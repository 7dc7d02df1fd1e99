use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn message_add_and_remove_edit_the_chat() {
    let ctx = TestContext::new();
    ctx.new_prompt("chat.yml", "chat");

    ctx.cli()
        .args(["message", "add", "chat.yml", "Hello", "--output", "Hi there"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added message (1 total)"));
    ctx.cli().args(["message", "add", "chat.yml", "First", "--index", "0"]).assert().success();

    let doc = ctx.document("chat.yml");
    assert_eq!(doc["messages"][0]["input"].as_str(), Some("First"));
    assert_eq!(doc["messages"][1]["output"].as_str(), Some("Hi there"));

    ctx.cli().args(["message", "remove", "chat.yml", "0"]).assert().success();
    ctx.cli()
        .args(["message", "remove", "chat.yml", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index 4 is out of bounds"));
    assert_eq!(ctx.document("chat.yml")["messages"][0]["input"].as_str(), Some("Hello"));
}

#[test]
fn message_set_replaces_one_turn_in_place() {
    let ctx = TestContext::new();
    ctx.new_prompt("chat.yml", "chat");
    ctx.cli().args(["message", "add", "chat.yml", "first"]).assert().success();
    ctx.cli().args(["message", "add", "chat.yml", "second"]).assert().success();

    ctx.cli()
        .args(["message", "set", "chat.yml", "1", "SECOND", "-o", "reply"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated message 1"));

    let doc = ctx.document("chat.yml");
    assert_eq!(doc["messages"][0]["input"].as_str(), Some("first"));
    assert_eq!(doc["messages"][1]["input"].as_str(), Some("SECOND"));
    assert_eq!(doc["messages"][1]["output"].as_str(), Some("reply"));

    ctx.cli()
        .args(["message", "set", "chat.yml", "0", "q", "--example"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index 0 is out of bounds"));
}

#[test]
fn examples_are_kept_apart_from_messages() {
    let ctx = TestContext::new();
    ctx.new_prompt("chat.yml", "chat");

    ctx.cli()
        .args(["message", "add", "chat.yml", "2+2", "-o", "4", "--example"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added example (1 total)"));

    let doc = ctx.document("chat.yml");
    assert_eq!(doc["examples"][0]["output"].as_str(), Some("4"));
    assert_eq!(doc["messages"].as_sequence().map(Vec::len), Some(0));

    ctx.cli().args(["message", "remove", "chat.yml", "0", "--example"]).assert().success();
    assert!(ctx.document("chat.yml").get("examples").is_none());
}

#[test]
fn chat_edits_on_a_completion_fail() {
    let ctx = TestContext::new();
    ctx.new_prompt("story.yml", "completion");

    ctx.cli()
        .args(["message", "add", "story.yml", "Hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a chat prompt"));

    ctx.cli().args(["text", "story.yml", "Once upon a time"]).assert().success();
    assert_eq!(ctx.document("story.yml")["prompt"].as_str(), Some("Once upon a time"));
}

#[test]
fn context_set_and_clear() {
    let ctx = TestContext::new();
    ctx.new_prompt("chat.yml", "chat");

    ctx.cli().args(["context", "set", "chat.yml", "Be brief."]).assert().success();
    assert_eq!(ctx.document("chat.yml")["context"].as_str(), Some("Be brief."));

    ctx.cli()
        .args(["context", "clear", "chat.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared context"));
    assert!(ctx.document("chat.yml").get("context").is_none());
}

#[test]
fn convert_reports_what_was_dropped() {
    let ctx = TestContext::new();
    ctx.new_prompt("chat.yml", "chat");
    ctx.cli().args(["context", "set", "chat.yml", "SYS"]).assert().success();
    ctx.cli().args(["message", "add", "chat.yml", "one", "-o", "1"]).assert().success();
    ctx.cli().args(["message", "add", "chat.yml", "two"]).assert().success();

    ctx.cli()
        .args(["convert", "chat.yml", "completion"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Converted to completion prompt for Anthropic/claude-3-5-sonnet",
        ))
        .stdout(predicate::str::contains("1 message(s) after the first"))
        .stdout(predicate::str::contains("1 message output(s)"));

    let doc = ctx.document("chat.yml");
    assert_eq!(doc["type"].as_str(), Some("completion"));
    assert_eq!(doc["prompt"].as_str(), Some("SYS\none"));

    ctx.cli()
        .args(["convert", "chat.yml", "chat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dropped").not());
    let doc = ctx.document("chat.yml");
    assert_eq!(doc["messages"][0]["input"].as_str(), Some("SYS\none"));
    assert!(doc.get("context").is_none());
}

#[test]
fn mode_switch_starts_over_only_on_change() {
    let ctx = TestContext::new();
    ctx.new_prompt("chat.yml", "chat");
    ctx.cli().args(["message", "add", "chat.yml", "keep me"]).assert().success();

    ctx.cli()
        .args(["mode", "chat.yml", "chat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already a chat prompt"));
    assert_eq!(ctx.document("chat.yml")["messages"][0]["input"].as_str(), Some("keep me"));

    ctx.cli()
        .args(["mode", "chat.yml", "completion"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new completion prompt for Anthropic/claude-2.1"));
    assert_eq!(ctx.document("chat.yml")["prompt"].as_str(), Some(""));
}
