use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::Fixture;

#[test]
fn test_logos_table_first_page() {
    let fx = Fixture::new();
    let logos = fx.logos();

    fx.cmd()
        .args(["table", "logos", "--file", &logos])
        .assert()
        .success()
        .stdout(
            contains("Account Name")
                .and(contains("Processing Time"))
                .and(contains("Riverside Lacrosse"))
                .and(contains("alice"))
                .and(contains("2.0h"))
                .and(contains("N/A"))
                .and(contains("Showing 1 to 5 of 5 results · Page 1 of 1")),
        );
}

#[test]
fn test_search_is_case_insensitive() {
    let fx = Fixture::new();
    let logos = fx.logos();

    fx.cmd()
        .args(["table", "logos", "--file", &logos, "--search", "LACROSSE"])
        .assert()
        .success()
        .stdout(
            contains("Riverside Lacrosse")
                .and(contains("Hillcrest FC").not())
                .and(contains("Showing 1 to 1 of 1 results")),
        );
}

#[test]
fn test_search_without_matches() {
    let fx = Fixture::new();
    let stores = fx.stores();

    fx.cmd()
        .args(["table", "stores", "--file", &stores, "-s", "volleyball"])
        .assert()
        .success()
        .stdout(contains("No results"));
}

#[test]
fn test_page_size_from_config() {
    let fx = Fixture::new();
    let logos = fx.logos();
    fx.write("rstudiometrics.conf", "page_size: 2\n");

    fx.cmd()
        .args(["table", "logos", "--file", &logos, "--page", "2"])
        .assert()
        .success()
        .stdout(contains("Showing 3 to 4 of 5 results · Page 2 of 3"));
}

#[test]
fn test_page_out_of_range() {
    let fx = Fixture::new();
    let logos = fx.logos();

    fx.cmd()
        .args(["table", "logos", "--file", &logos, "--page", "2"])
        .assert()
        .failure()
        .stderr(contains("Page 2 out of range"));
}

#[test]
fn test_window_days_override() {
    let fx = Fixture::new();
    let logos = fx.logos();

    fx.cmd()
        .args(["--window-days", "0", "table", "logos", "--file", &logos])
        .assert()
        .success()
        .stdout(contains("Archive Club").and(contains("of 6 results")));
}
