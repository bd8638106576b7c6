use tourbot_core::traits::Embedder;
use tourbot_embed::{get_default_embedder, EMBED_DIM};

#[test]
fn fake_embedder_shapes_and_determinism() {
    // Force fake embedder to avoid loading the real model
    std::env::set_var("APP_USE_FAKE_EMBEDDINGS", "1");

    let embedder = get_default_embedder().expect("embedder");
    assert_eq!(embedder.dim(), EMBED_DIM);

    let texts = vec!["meenakshi temple madurai".to_string(), "meenakshi temple madurai".to_string()];
    let embs = embedder.embed_batch(&texts).expect("embed_batch");
    let v1 = &embs[0];
    let v2 = &embs[1];

    assert_eq!(v1.len(), 384, "embedding dim is 384");

    // Norm approximately 1.0
    let norm: f32 = v1.iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() <= 1e-3, "vector is L2-normalized (norm={norm})");

    // Deterministic for same input
    for (a, b) in v1.iter().zip(v2.iter()) { assert!((a - b).abs() <= 1e-6); }
}

#[test]
fn fake_embedder_separates_different_texts() {
    std::env::set_var("APP_USE_FAKE_EMBEDDINGS", "1");

    let embedder = get_default_embedder().expect("embedder");
    let texts = vec!["pongal harvest festival".to_string(), "mahabalipuram shore temple".to_string()];
    let embs = embedder.embed_batch(&texts).expect("embed_batch");

    let dot: f32 = embs[0].iter().zip(embs[1].iter()).map(|(a, b)| a * b).sum();
    // Unrelated texts land far apart; each text is closest to itself
    assert!(dot < 0.99, "distinct texts must not collapse to the same vector (dot={dot})");
}

#[test]
fn empty_batch_is_empty() {
    std::env::set_var("APP_USE_FAKE_EMBEDDINGS", "1");

    let embedder = get_default_embedder().expect("embedder");
    let embs = embedder.embed_batch(&[]).expect("embed_batch");
    assert!(embs.is_empty());
}
