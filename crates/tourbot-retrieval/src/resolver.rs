//! Top-1 semantic lookup against the prebuilt index.
//!
//! `QueryResolver` owns the three read-only collaborators loaded at startup
//! (embedder, index table, answer store) and resolves one query at a time:
//! embed, nearest-neighbor search, positional lookup. Outcomes stay tagged
//! (`Result<Resolution>`) all the way to `render_answer`, which is the one
//! place failures collapse into the `"Error: ..."` chat string.

use anyhow::{Result, anyhow};
use futures::TryStreamExt;
use lancedb::connect;
use lancedb::query::{QueryBase, ExecutableQuery};
use lancedb::Table;
use std::path::Path;

use tourbot_core::error::Error;
use tourbot_core::traits::Embedder;
use tourbot_core::types::Resolution;

use crate::schema::EMBEDDING_DIM;
use crate::store::AnswerStore;

pub struct QueryResolver { table: Table, answers: AnswerStore, embedder: Box<dyn Embedder> }

impl QueryResolver {
    /// Load the index table and answer store and verify they belong together.
    /// Misalignment is fatal here: serving with a mismatched pair would
    /// silently return wrong answers for every query.
    pub async fn open(db_path: &Path, table_name: &str, answers_path: &Path, embedder: Box<dyn Embedder>) -> Result<Self> {
        if embedder.dim() != EMBEDDING_DIM as usize {
            return Err(anyhow!("Embedder dim {} does not match index dim {}", embedder.dim(), EMBEDDING_DIM));
        }
        let db = connect(db_path.to_string_lossy().as_ref()).execute().await?;
        let table = db.open_table(table_name).execute().await?;
        let answers = AnswerStore::load(answers_path)?;
        let index_rows = table.count_rows(None).await?;
        if index_rows != answers.len() {
            return Err(Error::Misaligned { index_rows, answer_rows: answers.len() }.into());
        }
        Ok(Self::with_parts(table, answers, embedder))
    }

    /// Assemble a resolver from already-loaded parts. No cross-checks; used
    /// by callers that load artifacts themselves (and by tests).
    pub fn with_parts(table: Table, answers: AnswerStore, embedder: Box<dyn Embedder>) -> Self {
        Self { table, answers, embedder }
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    /// Embed `query`, take the single nearest index entry, and return the
    /// aligned answer. The closest neighbor always wins; there is no
    /// "no good match" distance threshold. Caller validates non-emptiness.
    pub async fn resolve(&self, query: &str) -> Result<Resolution> {
        let mut embs = self.embedder.embed_batch(&[query.to_string()])?;
        let q_vec = embs.pop().ok_or_else(|| anyhow!("embedder returned no vector"))?;
        let mut stream = self.table.vector_search(q_vec)?.limit(1).execute().await?;
        while let Some(batch) = TryStreamExt::try_next(&mut stream).await? {
            if batch.num_rows() == 0 { continue; }
            let ids = batch.column_by_name("id")
                .and_then(|c| c.as_any().downcast_ref::<arrow_array::Int32Array>())
                .ok_or_else(|| anyhow!("id column missing from index table"))?;
            let raw = i64::from(ids.value(0));
            let score = if let Some(distance_col) = batch.column_by_name("_distance") {
                let distances = distance_col.as_any().downcast_ref::<arrow_array::Float32Array>()
                    .ok_or_else(|| anyhow!("_distance column has unexpected type"))?;
                1.0 - distances.value(0)
            } else { 0.5 };
            let id = usize::try_from(raw)
                .map_err(|_| Error::OutOfRange { id: raw, len: self.answers.len() })?;
            let record = self.answers.get(id)
                .ok_or(Error::OutOfRange { id: raw, len: self.answers.len() })?;
            return Ok(Resolution { id, score, answer: record.answer.clone() });
        }
        Err(Error::NoMatch.into())
    }
}

/// Collapse a resolve outcome into the single chat output channel. Both
/// shapes travel the same channel; the `"Error: "` prefix is the sentinel
/// and this is the only place it is produced.
pub fn render_answer(outcome: Result<Resolution>) -> String {
    match outcome {
        Ok(res) => res.answer,
        Err(e) => format!("Error: {}", e),
    }
}

/// Trim surrounding whitespace. `None` means the submission is invalid and
/// must get a validation warning instead of reaching `resolve`.
pub fn normalize_query(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
