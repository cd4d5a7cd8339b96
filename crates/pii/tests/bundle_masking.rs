use corpusforge_core::{join_documents, split_documents, Document};
use corpusforge_pii::PiiMasker;
use pretty_assertions::assert_eq;

#[test]
fn masks_every_document_in_a_bundle_and_preserves_structure() {
    let sentinel = corpusforge_core::DOC_SENTINEL;
    let bundle = format!(
        "Reach me at a@b.com please.{sentinel}No PII here at all.{sentinel}Call (555) 000-1111 now.{sentinel}"
    );

    let docs = split_documents(&bundle);
    let masker = PiiMasker::new();
    let mut total = 0u64;

    let masked_docs: Vec<Document> = docs
        .iter()
        .map(|doc| {
            let (text, counts) = masker.mask(&doc.to_text());
            total += counts.total();
            Document::from_text(&text)
        })
        .collect();

    assert_eq!(total, 2);
    let rejoined = join_documents(&masked_docs);
    assert!(rejoined.contains("|||EMAIL_ADDRESS|||"));
    assert!(rejoined.contains("|||PHONE_NUMBER|||"));
    assert!(rejoined.contains("No PII here at all."));
}
