use corpusforge_exact_dedup::{build_duplicate_map, rewrite_file};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

/// Each document is padded so both surviving documents clear the 50-token
/// survival floor.
#[test]
fn drops_shared_boilerplate_but_keeps_the_unique_sentence_in_each_file() {
    let dir = tempdir().unwrap();
    let filler = "filler word ".repeat(12);
    let boilerplate = "Repeated boilerplate phrase everywhere here.";

    let file1 = dir.path().join("part-0000.txt");
    let file2 = dir.path().join("part-0001.txt");
    let sentinel = corpusforge_core::DOC_SENTINEL;

    std::fs::write(
        &file1,
        format!("A unique sentence one. {filler}\n{boilerplate}\n{sentinel}"),
    )
    .unwrap();
    std::fs::write(
        &file2,
        format!("Another original sentence two. {filler}\n{boilerplate}\n{sentinel}"),
    )
    .unwrap();

    let paths = vec![file1.clone(), file2.clone()];
    let dup_counts = build_duplicate_map(&paths).unwrap();

    let out1 = dir.path().join("out-0000.txt");
    let out2 = dir.path().join("out-0001.txt");
    let stats1 = rewrite_file(&file1, &out1, &dup_counts).unwrap();
    let stats2 = rewrite_file(&file2, &out2, &dup_counts).unwrap();

    let rewritten1 = std::fs::read_to_string(&out1).unwrap();
    let rewritten2 = std::fs::read_to_string(&out2).unwrap();

    assert!(rewritten1.contains("A unique sentence one."));
    assert!(!rewritten1.contains(boilerplate));
    assert!(rewritten2.contains("Another original sentence two."));
    assert!(!rewritten2.contains(boilerplate));

    assert_eq!(stats1.docs_kept, 1);
    assert_eq!(stats2.docs_kept, 1);
    assert_eq!(stats1.duplicate_lines, 1);
    assert_eq!(stats2.duplicate_lines, 1);
}
