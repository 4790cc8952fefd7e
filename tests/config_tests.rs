use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{Fixture, rsm};

#[test]
fn test_init_writes_defaults_once() {
    let fx = Fixture::new();
    let conf = fx.path_str("nested/rstudiometrics.conf");

    rsm().args(["--config", &conf, "init"]).assert().success();

    let content = fs::read_to_string(&conf).expect("config written");
    assert!(content.contains("timezone: America/New_York"));
    assert!(content.contains("business_start_hour: 9"));

    rsm()
        .args(["--config", &conf, "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rsm()
        .args(["--config", &conf, "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_check_lists_missing_keys() {
    let fx = Fixture::new();
    let conf = fx.write("rstudiometrics.conf", "timezone: Europe/Rome\ncolour: blue\n");

    rsm()
        .args(["--config", &conf, "config", "--check"])
        .assert()
        .success()
        .stderr(contains("Missing key 'page_size'").and(contains("Missing key 'timezone'").not()))
        .stdout(contains("Unknown key 'colour'"));
}

#[test]
fn test_config_print_shows_effective_values() {
    let fx = Fixture::new();
    let conf = fx.write("rstudiometrics.conf", "window_days: 7\n");

    rsm()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("window_days: 7").and(contains("page_size: 10")));
}

#[test]
fn test_business_window_from_config() {
    let fx = Fixture::new();
    let logos = fx.logos();
    fx.write(
        "rstudiometrics.conf",
        "business_start_hour: 13\nbusiness_end_hour: 17\n",
    );

    fx.cmd()
        .args(["priorities", "--file", &logos])
        .assert()
        .success()
        .stdout(contains("13:00-17:00"));
}

#[test]
fn test_invalid_timezone_is_rejected() {
    let fx = Fixture::new();
    let logos = fx.logos();
    fx.write("rstudiometrics.conf", "timezone: Mars/Olympus\n");

    fx.cmd()
        .args(["reps", "--file", &logos])
        .assert()
        .failure()
        .stderr(contains("Unknown time zone: Mars/Olympus"));
}

#[test]
fn test_inverted_business_hours_are_rejected() {
    let fx = Fixture::new();
    let logos = fx.logos();
    fx.write(
        "rstudiometrics.conf",
        "business_start_hour: 17\nbusiness_end_hour: 9\n",
    );

    fx.cmd()
        .args(["reps", "--file", &logos])
        .assert()
        .failure()
        .stderr(contains("invalid business hours 17-09"));
}
