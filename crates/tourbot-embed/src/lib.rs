use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};
use std::time::Instant;

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config as BertConfig};
use tokenizers::Tokenizer;

use tourbot_core::traits::Embedder;

pub mod device;
pub mod pool;
pub mod tokenize;

pub use pool::masked_mean_l2;

/// Sentence-embedding model the knowledge-base index was built with.
pub const MODEL_NAME: &str = "paraphrase-multilingual-MiniLM-L12-v2";
/// MiniLM-L12 hidden size; every stored and query vector has this length.
pub const EMBED_DIM: usize = 384;
const MAX_LEN: usize = 128;

/// paraphrase-multilingual-MiniLM-L12-v2 loaded from local files
/// (BERT backbone over the XLM-R vocabulary).
pub struct EmbeddingModel { model: BertModel, tokenizer: Tokenizer, device: Device }

impl EmbeddingModel {
    pub fn new() -> Result<Self> {
        let device = device::select_device();
        println!("🔄 Loading {} from local files...", MODEL_NAME);
        let model_dir = resolve_model_dir()?;
        println!("📥 Loading tokenizer...");
        let tokenizer_path = model_dir.join("tokenizer.json");
        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow!("Failed to load tokenizer from {}: {}", tokenizer_path.display(), e))?;
        println!("📥 Loading model config...");
        let config_path = model_dir.join("config.json");
        let config: BertConfig = serde_json::from_str(&std::fs::read_to_string(&config_path)?)?;
        println!("📥 Loading model weights...");
        let weights_path = model_dir.join("pytorch_model.bin");
        let weights = candle_core::pickle::read_all(&weights_path)?;
        let weights_map: std::collections::HashMap<String, Tensor> = weights.into_iter().collect();
        let vb = VarBuilder::from_tensors(weights_map, DType::F32, &device);
        println!("🔧 Loading model...");
        let model = BertModel::load(vb, &config)?;
        println!("✅ {} loaded successfully!", MODEL_NAME);
        Ok(Self { model, tokenizer, device })
    }
}

impl Embedder for EmbeddingModel {
    fn dim(&self) -> usize { EMBED_DIM }
    fn max_len(&self) -> usize { MAX_LEN }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() { return Ok(vec![]); }
        let start = Instant::now();
        let (input_ids, attention_mask) = tokenize::tokenize_batch(&self.tokenizer, texts, MAX_LEN, &self.device)?;
        let token_type_ids = input_ids.zeros_like()?;
        let hidden = self.model.forward(&input_ids, &token_type_ids, Some(&attention_mask))?;
        let pooled = masked_mean_l2(&hidden, &attention_mask)?;
        let rows: Vec<Vec<f32>> = pooled.to_device(&Device::Cpu)?.to_vec2()?;
        for row in &rows {
            if row.len() != EMBED_DIM { return Err(anyhow!("dim mismatch: got {} expected {}", row.len(), EMBED_DIM)); }
        }
        if start.elapsed().as_millis() > 200 * texts.len() as u128 { println!("⚠️  Slow embedding ({} texts in {:?})", texts.len(), start.elapsed()); }
        Ok(rows)
    }
}

struct FakeEmbedder { dim: usize }
impl FakeEmbedder { fn new(dim: usize) -> Self { Self { dim } } }
impl Embedder for FakeEmbedder {
    fn dim(&self) -> usize { self.dim }
    fn max_len(&self) -> usize { MAX_LEN }
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        use std::hash::{Hash, Hasher}; use twox_hash::XxHash64;
        let mut out = Vec::with_capacity(texts.len());
        for text in texts {
            let mut v = vec![0f32; self.dim];
            for (i, token) in text.split_whitespace().enumerate() { let mut hasher = XxHash64::with_seed(0); token.hash(&mut hasher); let h = hasher.finish(); let idx = (h as usize) % self.dim; let val = (((h >> 32) as u32) as f32) / (u32::MAX as f32); v[idx] += val + (i as f32 % 3.0) * 0.01; }
            let norm = (v.iter().map(|x| x * x).sum::<f32>()).sqrt().max(1e-6); for x in &mut v { *x /= norm; }
            out.push(v);
        }
        Ok(out)
    }
}

/// Process-wide default: the real model, or the deterministic FakeEmbedder
/// when `APP_USE_FAKE_EMBEDDINGS=1` (tests, offline dev).
pub fn get_default_embedder() -> Result<Box<dyn Embedder>> {
    let use_fake = std::env::var("APP_USE_FAKE_EMBEDDINGS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false);
    if use_fake { println!("🧪 Using FakeEmbedder"); return Ok(Box::new(FakeEmbedder::new(EMBED_DIM))); }
    Ok(Box::new(EmbeddingModel::new()?))
}

fn resolve_model_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("APP_MODEL_DIR") { let p = PathBuf::from(&dir); if p.exists() { println!("📦 Using APP_MODEL_DIR: {}", p.display()); return Ok(p); } }
    if let Ok(dir) = std::env::var("MODEL_DIR") { let p = PathBuf::from(&dir); if p.exists() { println!("📦 Using MODEL_DIR: {}", p.display()); return Ok(p); } }
    let root = Path::new("models").join(MODEL_NAME);
    if root.exists() { println!("📦 Using model dir: {}", root.display()); return Ok(root); }
    let parent = Path::new("..").join("models").join(MODEL_NAME);
    if parent.exists() { println!("📦 Using model dir: {}", parent.display()); return Ok(parent); }
    Err(anyhow!("Could not locate {} model directory. Checked APP_MODEL_DIR, MODEL_DIR, models/ and ../models/", MODEL_NAME))
}
