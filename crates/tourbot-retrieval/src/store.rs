//! The answer table: an ordered, read-only sequence of pre-authored records.
//!
//! Loaded once at startup from a JSON array. The vector index's `id` column
//! is a position into this sequence, so order is load-bearing; records are
//! deserialized strictly and a record without an `answer` field fails the
//! load rather than surfacing mid-session.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tourbot_core::types::AnswerRecord;

pub struct AnswerStore {
    records: Vec<AnswerRecord>,
}

impl AnswerStore {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open answer table {}", path.display()))?;
        let records: Vec<AnswerRecord> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse answer table {}", path.display()))?;
        Ok(Self { records })
    }

    pub fn from_records(records: Vec<AnswerRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Positional lookup; `None` for anything outside `[0, len)`.
    pub fn get(&self, id: usize) -> Option<&AnswerRecord> {
        self.records.get(id)
    }
}
