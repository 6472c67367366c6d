//! CLI integration tests.

mod support;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

use support::{db, ConfDir};

fn buffettbot(conf: &ConfDir) -> Command {
    let mut cmd = cargo_bin_cmd!("buffettbot");
    cmd.env("BUFFETTBOT_CONF_DIR", conf.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version() {
    let conf = ConfDir::new();
    buffettbot(&conf)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("buffettbot"));
}

#[test]
fn test_rejects_flags() {
    let conf = ConfDir::new();
    buffettbot(&conf).arg("--live").assert().failure();
}

#[test]
fn test_missing_primary_exits_one() {
    let conf = ConfDir::new();
    buffettbot(&conf)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Conf :: ERROR :: could not load main config data"));

    assert!(!conf.locations().secondary.exists());
}

#[test]
fn test_first_run_with_existing_credentials() {
    let conf = ConfDir::new();
    conf.write_primary("");
    conf.write_secondary(&db());

    buffettbot(&conf)
        .assert()
        .success()
        .stdout(predicate::str::contains("BuffettBot v"))
        .stdout(predicate::str::contains("Oracle started successfully!"))
        .stdout(predicate::str::contains(
            "TLE :: MSG :: Did not find data in database. Creating metadata records...",
        ))
        .stdout(predicate::str::contains("TLE Stats"))
        .stdout(predicate::str::contains("conservative"));

    buffettbot(&conf)
        .assert()
        .success()
        .stdout(predicate::str::contains("TLE :: MSG :: inbound sync successful"));
}

#[test]
fn test_engine_failure_exits_one() {
    let conf = ConfDir::new();
    conf.write_primary("tle_mode = 3\n");
    conf.write_secondary(&db());

    buffettbot(&conf)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("STOC started successfully!"))
        .stderr(predicate::str::contains("TLE :: ERROR :: unsupported mode 3"));
}

#[test]
fn test_malformed_endpoint_is_an_oracle_error() {
    let conf = ConfDir::new();
    conf.write_primary("source_endpoints = \"ftp://mirror.example\"\n");
    conf.write_secondary(&db());

    buffettbot(&conf)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Starting Oracle..."))
        .stderr(predicate::str::contains("Oracle :: ERROR :: unsupported scheme 'ftp'"));
}

#[test]
fn test_empty_secondary_config_exits_zero() {
    let conf = ConfDir::new();
    conf.write_primary("");
    std::fs::write(conf.locations().secondary, "{}\n").unwrap();

    buffettbot(&conf)
        .assert()
        .success()
        .stdout(predicate::str::contains("TLE Stats"))
        .stderr(predicate::str::contains(
            "TLE :: ERROR :: database configuration has no host",
        ));
}
