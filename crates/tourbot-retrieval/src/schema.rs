use arrow_schema::{Schema, Field, DataType};
use std::sync::Arc;

pub const EMBEDDING_DIM: i32 = 384;

/// Arrow schema of the prebuilt index table. The index carries only the
/// ordinal `id` and the vector; answer text lives in the separate,
/// positionally aligned answer table.
pub fn build_index_schema() -> Arc<Schema> {
	Arc::new(Schema::new(vec![
		Field::new("id", DataType::Int32, false),
		Field::new("vector", DataType::FixedSizeList(Arc::new(Field::new("item", DataType::Float32, true)), EMBEDDING_DIM), true),
	]))
}
