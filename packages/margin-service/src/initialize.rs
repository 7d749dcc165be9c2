use std::sync::Arc;

use margin_index::{IndexedDocument, VectorIndex};
use margin_storage::notes;

use crate::{MarginService, ServiceError, ServiceResult};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct InitializeResponse {
	pub message: String,
}

impl MarginService {
	/// Rebuilds the retrieval index from the full stored corpus. An empty
	/// store is informational, not an error, and leaves the current state
	/// untouched. The new index replaces the old one only after it is fully
	/// built.
	pub async fn initialize(&self) -> ServiceResult<InitializeResponse> {
		let records = notes::fetch_all(&self.db.pool).await?;

		if records.is_empty() {
			tracing::info!("Initialize requested with no stored documents.");

			return Ok(InitializeResponse { message: "No documents found to index.".to_string() });
		}

		let docs: Vec<IndexedDocument> = records
			.into_iter()
			.map(|note| IndexedDocument {
				note_id: note.note_id,
				title: note.title,
				content: note.content,
			})
			.collect();
		let texts: Vec<String> = docs.iter().map(IndexedDocument::embedding_text).collect();
		let vectors =
			self.providers.embedding.embed(&self.cfg.providers.embedding, &texts).await?;
		let expected = self.cfg.providers.embedding.dimensions as usize;

		for vector in &vectors {
			if vector.len() != expected {
				return Err(ServiceError::Provider {
					message: "Embedding vector dimension mismatch.".to_string(),
				});
			}
		}

		let count = docs.len();
		let index = VectorIndex::build(docs, vectors)?;

		self.install_index(Arc::new(index));
		tracing::info!(indexed = count, "Retrieval index rebuilt.");

		Ok(InitializeResponse { message: format!("Index initialized with {count} notes.") })
	}
}
