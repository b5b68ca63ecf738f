#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use fitdash::models::{LogEntry, RawTable};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const PASSWORD: &str = "sparta";

pub fn fd() -> Command {
    cargo_bin_cmd!("fitdash")
}

/// Command with HOME redirected to `home` so the config file is isolated.
pub fn fd_in(home: &str) -> Command {
    let mut cmd = fd();
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env_remove("FITDASH_PASSWORD");
    cmd
}

/// Create a fresh, empty directory inside the system temp dir
pub fn temp_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("fitdash_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path.to_string_lossy().to_string()
}

/// Path of a file inside a temp home, removed if present
pub fn temp_file(home: &str, name: &str) -> String {
    let p = PathBuf::from(home).join(name);
    fs::remove_file(&p).ok();
    p.to_string_lossy().to_string()
}

/// Run `init` with the test password
pub fn init_home(home: &str) {
    fd_in(home)
        .args(["init", "--secret", PASSWORD])
        .assert()
        .success();
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

/// Raw table from string literals
pub fn raw(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    let mut t = RawTable::new(headers.iter().map(|h| h.to_string()).collect());
    for r in rows {
        t.push_row(r.iter().map(|c| c.to_string()).collect());
    }
    t
}

pub fn entry(date: &str) -> LogEntry {
    LogEntry::blank(d(date))
}

pub fn entry_with(date: &str, f: impl FnOnce(&mut LogEntry)) -> LogEntry {
    let mut e = entry(date);
    f(&mut e);
    e
}
