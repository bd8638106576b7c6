use std::sync::Arc;

use arrow_array::{FixedSizeListArray, Int32Array, RecordBatch, RecordBatchIterator};
use lancedb::connect;
use tempfile::TempDir;

use tourbot_core::traits::Embedder;
use tourbot_embed::get_default_embedder;
use tourbot_retrieval::schema::{build_index_schema, EMBEDDING_DIM};
use tourbot_retrieval::QueryResolver;

/// End-to-end with the deterministic fake embedder: embed the knowledge-base
/// questions, seed an index from those vectors, and check each question
/// resolves back to its own answer.
#[tokio::test]
async fn fake_embedder_round_trip() {
    std::env::set_var("APP_USE_FAKE_EMBEDDINGS", "1");

    let questions = [
        "Tell me about Meenakshi Temple".to_string(),
        "What is the Pongal festival?".to_string(),
        "What is special in Mahabalipuram?".to_string(),
    ];
    let embedder = get_default_embedder().expect("embedder");
    let vectors = embedder.embed_batch(&questions).expect("embed");

    let tmp = TempDir::new().expect("tmp");
    let conn = connect(tmp.path().to_string_lossy().as_ref()).execute().await.expect("connect");
    let schema = build_index_schema();
    let ids: Vec<i32> = (0..vectors.len()).map(|i| i as i32).collect();
    let vecs: Vec<Option<Vec<Option<f32>>>> = vectors.iter().map(|v| Some(v.iter().map(|&x| Some(x)).collect())).collect();
    let rb = RecordBatch::try_new(schema.clone(), vec![
        Arc::new(Int32Array::from(ids)),
        Arc::new(FixedSizeListArray::from_iter_primitive::<arrow_array::types::Float32Type, _, _>(vecs.into_iter(), EMBEDDING_DIM)),
    ]).expect("batch");
    let reader = Box::new(RecordBatchIterator::new(vec![Ok(rb)].into_iter(), schema));
    conn.create_table("answers", reader).execute().await.expect("create");

    let answers_path = tmp.path().join("answers.json");
    std::fs::write(
        &answers_path,
        r#"[{"answer":"The Meenakshi Amman temple is in Madurai."},
            {"answer":"Pongal is the Tamil harvest festival."},
            {"answer":"Mahabalipuram is known for its shore temples."}]"#,
    ).expect("write answers");

    let resolver = QueryResolver::open(tmp.path(), "answers", &answers_path, embedder).await.expect("open");

    for (i, question) in questions.iter().enumerate() {
        let res = resolver.resolve(question).await.expect("resolve");
        assert_eq!(res.id, i, "each question is nearest its own vector");
        assert!(res.score > 0.9, "self-match distance should be ~0 (score={})", res.score);
    }
}
