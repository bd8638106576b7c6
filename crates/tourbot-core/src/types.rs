//! Domain types shared by the retrieval engine and the chat surfaces.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type Meta = HashMap<String, serde_json::Value>;

/// One pre-authored knowledge-base entry.
///
/// The answer table is an ordered sequence of these records, positionally
/// aligned with the vector index: the index's `id` column is a position into
/// the sequence. `answer` is the only field resolution reads; anything else
/// the authoring pipeline left in a record is carried as opaque metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub answer: String,
    #[serde(flatten)]
    pub meta: Meta,
}

/// The tagged outcome of a successful top-1 lookup.
///
/// `id` is the ordinal the index returned (always within the answer table),
/// `score` is similarity-shaped (higher is better), `answer` is the stored
/// answer text verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    pub id: usize,
    pub score: f32,
    pub answer: String,
}
