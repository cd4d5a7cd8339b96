use assert_cmd::Command;
use std::fs;
use std::thread::sleep;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn sweep_removes_a_reservation_older_than_the_timeout() {
    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("shard-0.txt");
    let reservation = out_dir.path().join("shard-0.txt.reservation.txt");
    fs::write(&reservation, "").unwrap();
    sleep(Duration::from_millis(20));

    Command::cargo_bin("corpusforge")
        .unwrap()
        .arg("sweep")
        .arg("--out-dir")
        .arg(out_dir.path())
        .arg("--timeout-secs")
        .arg("0")
        .assert()
        .success();

    assert!(!reservation.exists());
    assert!(!output.exists());
}

#[test]
fn sweep_leaves_a_fresh_reservation_alone() {
    let out_dir = tempdir().unwrap();
    let reservation = out_dir.path().join("shard-0.txt.reservation.txt");
    fs::write(&reservation, "").unwrap();

    Command::cargo_bin("corpusforge")
        .unwrap()
        .arg("sweep")
        .arg("--out-dir")
        .arg(out_dir.path())
        .arg("--timeout-secs")
        .arg("3600")
        .assert()
        .success();

    assert!(reservation.exists());
}
