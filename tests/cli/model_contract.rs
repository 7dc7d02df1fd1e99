use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn model_set_keeps_parameters_the_new_model_supports() {
    let ctx = TestContext::new();
    ctx.new_prompt("chat.yml", "chat");
    ctx.cli().args(["param", "set", "chat.yml", "temperature", "0.5"]).assert().success();
    ctx.cli().args(["param", "set", "chat.yml", "top_k", "5"]).assert().success();

    ctx.cli()
        .args(["model", "set", "chat.yml", "gpt-4o"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Now a chat prompt for OpenAI/gpt-4o"));

    let doc = ctx.document("chat.yml");
    let parameters = doc["parameters"].as_sequence().expect("parameters");
    assert_eq!(parameters.len(), 1);
    assert_eq!(parameters[0]["name"].as_str(), Some("temperature"));
}

#[test]
fn model_set_other_kind_converts_the_prompt() {
    let ctx = TestContext::new();
    ctx.new_prompt("chat.yml", "chat");
    ctx.cli().args(["context", "set", "chat.yml", "You are terse."]).assert().success();
    ctx.cli().args(["message", "add", "chat.yml", "Name a color."]).assert().success();

    ctx.cli()
        .args(["model", "set", "chat.yml", "claude-2.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("completion prompt for Anthropic/claude-2.1"));

    let doc = ctx.document("chat.yml");
    assert_eq!(doc["type"].as_str(), Some("completion"));
    assert_eq!(doc["prompt"].as_str(), Some("You are terse.\nName a color."));
}

#[test]
fn model_set_unknown_model_fails() {
    let ctx = TestContext::new();
    ctx.new_prompt("story.yml", "completion");

    ctx.cli()
        .args(["model", "set", "story.yml", "gpt-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Model 'gpt-2' not found"));
}

#[test]
fn model_group_moves_to_first_model_of_same_kind() {
    let ctx = TestContext::new();
    ctx.new_prompt("story.yml", "completion");

    ctx.cli()
        .args(["model", "group", "story.yml", "OpenAI"])
        .assert()
        .success()
        .stdout(predicate::str::contains("completion prompt for OpenAI/gpt-3.5-turbo-instruct"));

    ctx.cli()
        .args(["model", "group", "story.yml", "Mistral"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Model group 'Mistral' not found"))
        .stderr(predicate::str::contains("Anthropic, Google, OpenAI"));
}

#[test]
fn models_lists_groups_filtered_by_interface() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["models"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Anthropic:"))
        .stdout(predicate::str::contains("gpt-4o (chat)"))
        .stdout(predicate::str::contains("text-bison-001 (completion)"));

    ctx.cli()
        .args(["models", "--interface", "completion"])
        .assert()
        .success()
        .stdout(predicate::str::contains("claude-2.1 (completion)"))
        .stdout(predicate::str::contains("gpt-4o").not());
}
