#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use prdlog::models::record::Record;
use std::path::Path;
use tempfile::TempDir;

/// prdlog binary with an isolated HOME, so no real config file is touched.
pub fn prd(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("prdlog");
    cmd.env("HOME", home).env("NO_COLOR", "1");
    cmd
}

/// Fresh temp dir used both as HOME and as store root.
pub fn sandbox() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Store root inside the sandbox, as a CLI argument.
pub fn store_root(sb: &TempDir) -> String {
    sb.path().join("store").to_string_lossy().to_string()
}

/// Run `init --test` so that the store root and the table directory exist.
pub fn init_store(sb: &TempDir) -> String {
    let root = store_root(sb);
    prd(sb.path())
        .args(["--root", &root, "--test", "init"])
        .assert()
        .success();
    root
}

pub fn cols(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .fold(Record::new(), |r, (k, v)| r.with(k, *v))
}
