mod common;

use common::setup;
use contentlens::application::seed::DEMO_DOCUMENTS;
use contentlens::domain::values::embedding::EMBEDDING_DIM;
use contentlens::ContentLens;

#[tokio::test]
async fn test_add_document_stores_embedding() {
    let cl = setup();
    let doc = cl.add_document("O marketing digital é essencial").await.unwrap();
    assert_eq!(doc.embedding.len(), EMBEDDING_DIM);

    let stored = cl.list_documents().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], doc);
}

#[tokio::test]
async fn test_seed_only_into_empty_store() {
    let cl = setup();
    assert_eq!(cl.seed_demo_documents().await.unwrap(), DEMO_DOCUMENTS.len());
    assert_eq!(cl.seed_demo_documents().await.unwrap(), 0);
    assert_eq!(cl.document_count().unwrap(), DEMO_DOCUMENTS.len());

    let texts: Vec<String> = cl.list_documents().unwrap().into_iter().map(|d| d.text).collect();
    assert_eq!(texts, DEMO_DOCUMENTS.to_vec());
}

#[tokio::test]
async fn test_seed_skipped_when_store_has_rows() {
    let cl = setup();
    cl.add_document("already here").await.unwrap();
    assert_eq!(cl.seed_demo_documents().await.unwrap(), 0);
    assert_eq!(cl.document_count().unwrap(), 1);
}

#[tokio::test]
async fn test_documents_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("docs.db");
    let path = path.to_str().unwrap();

    let first_id = {
        let cl = ContentLens::open(path).unwrap();
        cl.seed_demo_documents().await.unwrap();
        cl.add_document("persist me").await.unwrap().id
    };

    let cl = ContentLens::open(path).unwrap();
    assert_eq!(cl.document_count().unwrap(), DEMO_DOCUMENTS.len() + 1);
    assert_eq!(cl.seed_demo_documents().await.unwrap(), 0);

    let results = cl.search("persist me", 1).await.unwrap();
    assert_eq!(results[0].id, first_id);
    assert!((results[0].score - 1.0).abs() < 1e-6);
}
