use crate::harness::TestContext;
use predicates::prelude::*;

const LOCAL_CATALOG: &str = r#"
groups:
  - group: Local
    models:
      - name: tiny-chat
        description: Local test model
        interface: chat
        parameters:
          - name: temperature
            display_name: Temperature
            type: number
            default_value: 0.3
            min_value: 0
            max_value: 1
"#;

#[test]
fn config_sets_default_interface() {
    let ctx = TestContext::new();
    ctx.write("promptide.toml", "[editor]\ndefault_interface = \"chat\"\n");

    ctx.cli()
        .args(["new", "p.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chat prompt"));
}

#[test]
fn config_points_at_external_catalog() {
    let ctx = TestContext::new();
    ctx.write("catalog/local.yml", LOCAL_CATALOG);
    ctx.write("promptide.toml", "[catalog]\npath = \"catalog/local.yml\"\n");

    ctx.cli()
        .args(["models"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tiny-chat (chat) - Local test model"))
        .stdout(predicate::str::contains("Anthropic").not());

    ctx.cli().args(["new", "p.yml", "-i", "chat"]).assert().success();
    ctx.cli()
        .args(["param", "enable", "p.yml", "temperature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enabled temperature = 0.3"));

    ctx.cli()
        .args(["new", "q.yml", "-i", "completion"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No completion model"));
}

#[test]
fn explicit_config_flag_is_used() {
    let ctx = TestContext::new();
    ctx.write("settings/custom.toml", "[editor]\nmulti_line_threshold = 10\n");
    ctx.new_prompt("chat.yml", "chat");
    ctx.cli().args(["model", "set", "chat.yml", "gpt-4o"]).assert().success();

    ctx.cli()
        .args(["show", "chat.yml", "--config", "settings/custom.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ] user (string) [multi-line]"));

    ctx.cli()
        .args(["show", "chat.yml", "--config", "settings/missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn invalid_config_is_reported() {
    let ctx = TestContext::new();
    ctx.write("promptide.toml", "[editor]\nmulti_line_threshold = 0\n");

    ctx.cli()
        .args(["models"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("multi_line_threshold must be greater than 0"));

    ctx.write("promptide.toml", "[ui]\ncolor = true\n");
    ctx.cli()
        .args(["models"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn invalid_catalog_is_reported() {
    let ctx = TestContext::new();
    ctx.write("bad.yml", "groups:\n  - group: X\n    models:\n      - { name: m, interface: vision }\n");
    ctx.write("promptide.toml", "[catalog]\npath = \"bad.yml\"\n");

    ctx.cli()
        .args(["models"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported interface kind 'vision'"));
}
