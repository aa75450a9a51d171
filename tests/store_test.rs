use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use filetime::FileTime;
use predicates::prelude::*;

/// Directory holding the checked-in fixture files.
fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Temp dir with a copy of `fixtures/known_hosts` whose mtime is a minute
/// old. The directory (and the copy) go away when the returned value drops.
fn aged_known_hosts() -> assert_fs::TempDir {
    let dir = assert_fs::TempDir::new().unwrap();
    let target = dir.child("known_hosts");
    std::fs::copy(fixtures().join("known_hosts"), target.path()).unwrap();

    let past = SystemTime::now() - Duration::from_secs(60);
    filetime::set_file_mtime(target.path(), FileTime::from_system_time(past)).unwrap();
    dir
}

fn mtime(path: &Path) -> FileTime {
    FileTime::from_last_modification_time(&std::fs::metadata(path).unwrap())
}

/// Run hostkeep against the known_hosts and config inside `dir`.
fn hostkeep(dir: &assert_fs::TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("hostkeep");
    cmd.current_dir(dir.path())
        .env_remove("HOSTKEEP_PASSWORD")
        .env_remove("HOSTKEEP_PASSPHRASE")
        .arg("--known-hosts")
        .arg(dir.path().join("known_hosts"))
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

#[test]
fn store_same_entries_in_other_order_keeps_timestamp() {
    let dir = aged_known_hosts();
    let known_hosts = dir.path().join("known_hosts");
    let before = mtime(&known_hosts);

    hostkeep(&dir)
        .arg("store")
        .arg(fixtures().join("known_hosts_same"))
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged"));

    assert_eq!(mtime(&known_hosts), before, "known_hosts file is rewritten");
    dir.child("known_hosts")
        .assert(predicate::path::eq_file(fixtures().join("known_hosts")));
}

#[test]
fn store_with_extra_entry_rewrites_file() {
    let dir = aged_known_hosts();
    let known_hosts = dir.path().join("known_hosts");
    let before = mtime(&known_hosts);

    let mut contents = std::fs::read_to_string(fixtures().join("known_hosts_same")).unwrap();
    contents.push_str("1 2 3");
    dir.child("incoming").write_str(&contents).unwrap();

    hostkeep(&dir)
        .args(["store", "incoming"])
        .assert()
        .success()
        .stdout(predicate::str::contains("written"));

    assert_ne!(mtime(&known_hosts), before, "known_hosts file is not rewritten");
    assert_eq!(std::fs::read_to_string(&known_hosts).unwrap(), contents);
}

#[test]
fn store_from_stdin() {
    let dir = aged_known_hosts();
    let known_hosts = dir.path().join("known_hosts");
    let before = mtime(&known_hosts);
    let same = std::fs::read_to_string(fixtures().join("known_hosts_same")).unwrap();

    hostkeep(&dir)
        .args(["store", "-"])
        .write_stdin(same)
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged"));

    assert_eq!(mtime(&known_hosts), before);
}

#[test]
fn store_twice_writes_once() {
    let dir = aged_known_hosts();
    let known_hosts = dir.path().join("known_hosts");
    dir.child("incoming")
        .write_str("gamma.example.com ssh-rsa AAAAB3NzaC1yc2E=\n")
        .unwrap();

    hostkeep(&dir).args(["store", "incoming"]).assert().success();
    let after_first = mtime(&known_hosts);

    hostkeep(&dir)
        .args(["store", "incoming"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged"));
    assert_eq!(mtime(&known_hosts), after_first);
}

#[test]
fn store_creates_missing_known_hosts() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("incoming")
        .write_str("gamma.example.com ssh-rsa AAAAB3NzaC1yc2E=\n")
        .unwrap();

    hostkeep(&dir).args(["store", "incoming"]).assert().success();

    let written = std::fs::read_to_string(dir.path().join("known_hosts")).unwrap();
    assert!(written.contains("gamma.example.com"));
}

#[test]
fn store_quiet_prints_nothing() {
    let dir = aged_known_hosts();
    dir.child("incoming")
        .write_str("gamma.example.com ssh-rsa AAAAB3NzaC1yc2E=\n")
        .unwrap();

    hostkeep(&dir)
        .args(["store", "incoming", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    hostkeep(&dir)
        .args(["-q", "store", "incoming"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(dir.path().join("known_hosts")).unwrap();
    assert!(written.contains("gamma.example.com"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    let dir = aged_known_hosts();

    hostkeep(&dir)
        .args(["list", "--quiet", "--verbose"])
        .assert()
        .failure();
}

#[test]
fn store_missing_source_fails() {
    let dir = aged_known_hosts();

    hostkeep(&dir)
        .args(["store", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn effective_store_is_audited() {
    let dir = aged_known_hosts();
    dir.child("incoming")
        .write_str("gamma.example.com ssh-rsa AAAAB3NzaC1yc2E=\n")
        .unwrap();

    hostkeep(&dir)
        .arg("store")
        .arg(fixtures().join("known_hosts_same"))
        .assert()
        .success();
    dir.child("audit.log").assert(predicate::path::missing());

    hostkeep(&dir).args(["store", "incoming"]).assert().success();

    let log = std::fs::read_to_string(dir.path().join("audit.log")).unwrap();
    assert!(log.contains("\"action\":\"store\""));
    assert!(log.contains("\"state_hash\":\""));
}
