//! In-process vector index over the full note corpus.
//!
//! The index is built wholesale from a corpus snapshot and never patched
//! incrementally; callers swap a fresh build in for the old one. Queries
//! score by cosine similarity and return the top K candidates in descending
//! order. Threshold filtering is a caller concern.

mod error;

pub use error::{Error, Result};

use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct IndexedDocument {
	pub note_id: Uuid,
	pub title: String,
	pub content: String,
}
impl IndexedDocument {
	/// The text handed to the embedding provider for this document.
	pub fn embedding_text(&self) -> String {
		format!("{}\n{}", self.title, self.content)
	}
}

#[derive(Clone, Debug)]
pub struct ScoredCandidate {
	pub note_id: Uuid,
	pub title: String,
	pub content: String,
	pub score: f32,
}

#[derive(Debug)]
struct Entry {
	doc: IndexedDocument,
	// Unit-normalized at build time so queries reduce to a dot product.
	vector: Vec<f32>,
}

#[derive(Debug)]
pub struct VectorIndex {
	dim: usize,
	entries: Vec<Entry>,
}
impl VectorIndex {
	pub fn build(docs: Vec<IndexedDocument>, vectors: Vec<Vec<f32>>) -> Result<Self> {
		if docs.is_empty() {
			return Err(Error::EmptyCorpus);
		}
		if docs.len() != vectors.len() {
			return Err(Error::CountMismatch { documents: docs.len(), vectors: vectors.len() });
		}

		let dim = vectors[0].len();

		if dim == 0 {
			return Err(Error::DimensionMismatch { expected: 1, actual: 0 });
		}

		let mut entries = Vec::with_capacity(docs.len());

		for (doc, vector) in docs.into_iter().zip(vectors) {
			if vector.len() != dim {
				return Err(Error::DimensionMismatch { expected: dim, actual: vector.len() });
			}

			entries.push(Entry { doc, vector: normalize(vector) });
		}

		Ok(Self { dim, entries })
	}

	/// Top-`top_k` candidates by cosine similarity, descending.
	pub fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<ScoredCandidate>> {
		if vector.len() != self.dim {
			return Err(Error::DimensionMismatch { expected: self.dim, actual: vector.len() });
		}

		let query = normalize(vector.to_vec());
		let mut candidates: Vec<ScoredCandidate> = self
			.entries
			.iter()
			.map(|entry| ScoredCandidate {
				note_id: entry.doc.note_id,
				title: entry.doc.title.clone(),
				content: entry.doc.content.clone(),
				score: dot(&entry.vector, &query),
			})
			.collect();

		candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
		candidates.truncate(top_k);

		Ok(candidates)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn dim(&self) -> usize {
		self.dim
	}
}

// Zero vectors stay zero and score 0 against everything.
fn normalize(mut vector: Vec<f32>) -> Vec<f32> {
	let norm = dot(&vector, &vector).sqrt();

	if norm > 0.0 {
		for value in &mut vector {
			*value /= norm;
		}
	}

	vector
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
	a.iter().zip(b).map(|(x, y)| x * y).sum()
}
