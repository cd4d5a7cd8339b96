use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

#[test]
fn near_dedup_stage_keeps_distinct_files_and_writes_sidecars() {
    let data_dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();

    fs::write(
        data_dir.path().join("a.txt"),
        "a document entirely about gardening and growing vegetables in spring.",
    )
    .unwrap();
    fs::write(
        data_dir.path().join("b.txt"),
        "a completely unrelated document about deep sea exploration and submarines.",
    )
    .unwrap();

    Command::cargo_bin("corpusforge")
        .unwrap()
        .arg("near-dedup")
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("--out-dir")
        .arg(out_dir.path())
        .assert()
        .success();

    assert!(out_dir.path().join("a.txt").exists());
    assert!(out_dir.path().join("b.txt").exists());
    assert!(out_dir.path().join("a.txt.meta.json").exists());
    assert!(out_dir.path().join("b.txt.meta.json").exists());
}
