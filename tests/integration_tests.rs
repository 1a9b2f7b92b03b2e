//! End-to-end CLI tests against a throwaway SQLite store in the temp dir.

use chrono::{Days, Local};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, plancal, setup_test_db};

#[test]
fn test_init_creates_store() {
    let db_path = setup_test_db("init_creates_store");

    plancal()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized at"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_then_day_shows_event_and_busy() {
    let db_path = setup_test_db("add_then_day");
    init_db_with_data(&db_path);

    plancal()
        .args(["--db", &db_path, "day", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("Dentist"))
        .stdout(contains("13:00 – 14:00"))
        .stdout(contains("[me]"))
        .stdout(contains("Busy: me"));
}

#[test]
fn test_untimed_event_sorts_first_and_shows_all_day() {
    let db_path = setup_test_db("untimed_first");
    init_db_with_data(&db_path);

    let output = plancal()
        .args(["--db", &db_path, "day", "2025-09-01"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);

    let laundry = text.find("Laundry").expect("Laundry row missing");
    let dentist = text.find("Dentist").expect("Dentist row missing");
    assert!(laundry < dentist, "untimed event must come first");
    assert!(text.contains("All day"));
}

#[test]
fn test_day_without_events_is_free() {
    let db_path = setup_test_db("free_day");

    plancal()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plancal()
        .args(["--db", &db_path, "day", "2025-12-24"])
        .assert()
        .success()
        .stdout(contains("Free day"));
}

#[test]
fn test_day_rejects_malformed_date() {
    let db_path = setup_test_db("bad_day_key");

    plancal()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plancal()
        .args(["--db", &db_path, "day", "2024-13-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid date key"));
}

#[test]
fn test_add_rejects_inverted_time_range() {
    let db_path = setup_test_db("inverted_range");

    plancal()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plancal()
        .args([
            "--db",
            &db_path,
            "add",
            "2025-09-01",
            "Backwards",
            "--start",
            "15:00",
            "--end",
            "14:00",
        ])
        .assert()
        .failure()
        .stderr(contains("must be later"));

    // nothing persisted
    plancal()
        .args(["--db", &db_path, "day", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Free day"));
}

#[test]
fn test_add_rejects_blank_title() {
    let db_path = setup_test_db("blank_title");

    plancal()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plancal()
        .args(["--db", &db_path, "add", "2025-09-01", "   "])
        .assert()
        .failure()
        .stderr(contains("title must not be empty"));
}

#[test]
fn test_add_warns_on_malformed_time_and_keeps_event() {
    let db_path = setup_test_db("malformed_time");

    plancal()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plancal()
        .args([
            "--db",
            &db_path,
            "add",
            "2025-09-01",
            "Typo",
            "--start",
            "9:00",
        ])
        .assert()
        .success()
        .stdout(contains("Ignoring start time"));

    // the event survives as untimed
    plancal()
        .args(["--db", &db_path, "day", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("All day  Typo"));
}

#[test]
fn test_upcoming_window() {
    let db_path = setup_test_db("upcoming_window");

    plancal()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let today = Local::now().date_naive();
    let tomorrow = (today + Days::new(1)).format("%Y-%m-%d").to_string();
    let far = (today + Days::new(30)).format("%Y-%m-%d").to_string();

    plancal()
        .args(["--db", &db_path, "add", &tomorrow, "Soon"])
        .assert()
        .success();
    plancal()
        .args(["--db", &db_path, "add", &far, "Far away"])
        .assert()
        .success();

    plancal()
        .args(["--db", &db_path, "upcoming", "--days", "7"])
        .assert()
        .success()
        .stdout(contains("Soon"))
        .stdout(contains("Far away").not());
}

#[test]
fn test_upcoming_empty_window() {
    let db_path = setup_test_db("upcoming_empty");

    plancal()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plancal()
        .args(["--db", &db_path, "upcoming", "--days", "3"])
        .assert()
        .success()
        .stdout(contains("No upcoming events in the next 3 days."));
}

#[test]
fn test_week_buckets_with_fixed_reference() {
    let db_path = setup_test_db("week_buckets");

    plancal()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plancal()
        .args([
            "--db",
            &db_path,
            "add",
            "2024-03-06",
            "Midweek",
            "--start",
            "10:00",
        ])
        .assert()
        .success();

    // 2024-03-06 is a Wednesday; the Monday-first week runs 03-04 .. 03-10
    plancal()
        .args(["--db", &db_path, "week", "--from", "2024-03-06"])
        .assert()
        .success()
        .stdout(contains("Mon 2024-03-04"))
        .stdout(contains("Wed 2024-03-06"))
        .stdout(contains("Sun 2024-03-10"))
        .stdout(contains("Midweek"))
        .stdout(contains("(me)"));
}

#[test]
fn test_config_print() {
    let db_path = setup_test_db("config_print");

    plancal()
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("week_start"))
        .stdout(contains("upcoming_days"));
}

#[test]
fn test_config_without_print_shows_file_location_only() {
    plancal()
        .args(["config"])
        .assert()
        .success()
        .stdout(contains("Config file:"))
        .stdout(contains("week_start").not());
}

#[test]
fn test_init_relative_db_matches_saved_config() {
    // isolated home so the saved config does not touch the real one
    let mut home = std::env::temp_dir();
    home.push("plancal_relative_init_home");
    std::fs::remove_dir_all(&home).ok();
    std::fs::create_dir_all(&home).unwrap();
    let home_s = home.to_string_lossy().to_string();

    plancal()
        .env("HOME", &home_s)
        .env("APPDATA", &home_s)
        .args(["--db", "mydb.sqlite", "init"])
        .assert()
        .success();

    // a relative name resolves into the config dir, and the schema must
    // live in that resolved file
    assert!(home.join(".plancal").join("mydb.sqlite").exists());

    // the follow-up command reads the saved config and finds the store
    plancal()
        .env("HOME", &home_s)
        .env("APPDATA", &home_s)
        .args(["day", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Free day"));
}

#[test]
fn test_member_add_then_members_offline_fallback() {
    let db_path = setup_test_db("members_offline");

    plancal()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plancal()
        .args([
            "--db",
            &db_path,
            "member-add",
            "bea",
            "--name",
            "Bea",
            "--color",
            "#FF3B30",
            "--group",
            "g1",
        ])
        .assert()
        .success()
        .stdout(contains("Added @bea"));

    // no remote service reachable: the command falls back to the (empty)
    // cache and the overlay still contributes the local member
    plancal()
        .args(["--db", &db_path, "members", "--group", "g1"])
        .assert()
        .success()
        .stdout(contains("@bea"));
}

#[test]
fn test_member_remove_hides_local_member() {
    let db_path = setup_test_db("members_remove");

    plancal()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plancal()
        .args(["--db", &db_path, "member-add", "bea", "--group", "g1"])
        .assert()
        .success();

    plancal()
        .args(["--db", &db_path, "member-remove", "bea", "--group", "g1"])
        .assert()
        .success()
        .stdout(contains("Removed @bea"));

    plancal()
        .args(["--db", &db_path, "members", "--group", "g1"])
        .assert()
        .success()
        .stdout(contains("No members in group g1."));
}

#[test]
fn test_members_requires_group() {
    let db_path = setup_test_db("members_no_group");

    plancal()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plancal()
        .args(["--db", &db_path, "member-add", "bea"])
        .assert()
        .failure()
        .stderr(contains("no group selected"));
}

#[test]
fn test_color_is_cached_locally_even_when_offline() {
    let db_path = setup_test_db("color_offline");

    plancal()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // remote push fails (nothing listening), but the command still succeeds
    plancal()
        .args(["--db", &db_path, "color", "#FF3B30"])
        .assert()
        .success()
        .stdout(contains("Color set to #FF3B30 locally."));
}

#[test]
fn test_color_show_reads_local_cache() {
    let db_path = setup_test_db("color_show");

    plancal()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plancal()
        .args(["--db", &db_path, "color"])
        .assert()
        .success()
        .stdout(contains("No color set."));

    plancal()
        .args(["--db", &db_path, "color", "#00AA00"])
        .assert()
        .success();

    plancal()
        .args(["--db", &db_path, "color"])
        .assert()
        .success()
        .stdout(contains("Current color: #00AA00"));
}

#[test]
fn test_logout_succeeds_without_token() {
    let db_path = setup_test_db("logout");

    plancal()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plancal()
        .args(["--db", &db_path, "logout"])
        .assert()
        .success()
        .stdout(contains("Logged out."));
}

#[test]
fn test_corrupt_storage_degrades_to_empty() {
    let db_path = setup_test_db("corrupt_storage");
    init_db_with_data(&db_path);

    // clobber the event collection with invalid JSON
    let conn = rusqlite::Connection::open(&db_path).unwrap();
    conn.execute(
        "INSERT INTO kv (key, value) VALUES ('events_v1', '{broken')
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        [],
    )
    .unwrap();
    drop(conn);

    plancal()
        .args(["--db", &db_path, "day", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Free day"));

    // adding again starts a fresh collection
    plancal()
        .args(["--db", &db_path, "add", "2025-09-01", "Recovered"])
        .assert()
        .success();

    plancal()
        .args(["--db", &db_path, "day", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Recovered"));
}
