use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
docs_root = "/tmp/docs"
docs_json = "{{docs_root}}/mint.json"

[overview]
mode = "retitle_title"
"#;
    write_file(&cfg, toml);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docfront"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   docfront doctor"))
        .stdout(predicate::str::contains("profile: default"))
        .stdout(predicate::str::contains("docs_root: /tmp/docs"))
        .stdout(predicate::str::contains("docs_json: /tmp/docs/mint.json"))
        .stdout(predicate::str::contains("overview.mode: retitle_title"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("docfront").join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 1
profile = "default"
[profiles.default]
docs_root = "/tmp/docs"
"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docfront"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   docfront doctor"))
        .stdout(predicate::str::contains("docs_root: /tmp/docs"))
        .stdout(predicate::str::contains("navigation_key: navigation"));
}

#[test]
fn doctor_flags_missing_docs_root() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let docs = tmp.path().join("nowhere");
    write_file(
        &cfg,
        &format!("version = 1\n[profiles.default]\ndocs_root = \"{}\"\n", docs.display()),
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docfront"));
    cmd.arg("--config").arg(&cfg).arg("doctor");
    cmd.assert().success().stdout(predicate::str::contains("(missing)"));
}
