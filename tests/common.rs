#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn plancal() -> Command {
    cargo_bin_cmd!("plancal")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_plancal.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the store and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    plancal()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    plancal()
        .args([
            "--db",
            db_path,
            "add",
            "2025-09-01",
            "Dentist",
            "--start",
            "13:00",
            "--end",
            "14:00",
        ])
        .assert()
        .success();

    plancal()
        .args(["--db", db_path, "add", "2025-09-01", "Laundry"])
        .assert()
        .success();

    plancal()
        .args([
            "--db",
            db_path,
            "add",
            "2025-09-03",
            "Dinner",
            "--start",
            "19:30",
            "--user",
            "f1",
        ])
        .assert()
        .success();
}
